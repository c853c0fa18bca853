// src/logging.rs

use crate::errors::FinanceAiResult;
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts the file logger. The terminal is owned by the TUI, so nothing is
/// written to stdout; diagnostics go to `logs/financeai_*.log` and to the
/// in-app log pane. The returned handle must stay alive for the duration
/// of the program.
pub fn init(spec: &str) -> FinanceAiResult<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(spec)?
        .log_to_file(FileSpec::default().directory("logs").basename("financeai"))
        .start()?;
    Ok(handle)
}
