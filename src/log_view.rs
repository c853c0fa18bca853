use crate::constants::LOG_PANE_CAPACITY;
use chrono::Local;

/// Bounded tail of diagnostic lines shown in the side pane of the chat
/// screen. Mirrors what goes to the file log, scoped to this session.
#[derive(Debug, Default)]
pub struct LogView {
    entries: Vec<String>,
}

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: impl Into<String>) {
        self.entries
            .push(format!("{} {}", Local::now().format("%H:%M:%S"), entry.into()));
        if self.entries.len() > LOG_PANE_CAPACITY {
            self.entries.remove(0);
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_a_bounded_tail() {
        let mut logs = LogView::new();
        for i in 0..(LOG_PANE_CAPACITY + 25) {
            logs.add(format!("entry {i}"));
        }
        assert_eq!(logs.entries().len(), LOG_PANE_CAPACITY);
        assert!(logs.entries().last().unwrap().contains("entry 224"));
    }
}
