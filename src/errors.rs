// src/errors.rs

use thiserror::Error;

pub type FinanceAiResult<T> = Result<T, FinanceAiError>;

#[derive(Debug, Error)]
pub enum FinanceAiError {
    /// The backend could not be reached, the request timed out at the OS
    /// level, or the response body was unreadable as the expected JSON.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("assistant service returned {status}")]
    Server {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

impl FinanceAiError {
    pub fn config_error(message: impl Into<String>) -> Self {
        FinanceAiError::Config(message.into())
    }

    pub fn server_error(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        FinanceAiError::Server {
            status,
            body: body.into(),
        }
    }
}
