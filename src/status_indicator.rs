use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Spinner and status line shown between the message list and the input
/// box while an exchange is outstanding.
#[derive(Debug)]
pub struct StatusIndicator {
    thinking: bool,
    status_text: String,
    spinner_idx: usize,
    started: Option<Instant>,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self {
            thinking: false,
            status_text: String::new(),
            spinner_idx: 0,
            started: None,
        }
    }

    pub fn set_thinking(&mut self, thinking: bool) {
        self.thinking = thinking;
        self.started = thinking.then(Instant::now);
        if !thinking {
            self.status_text.clear();
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status_text = status.into();
    }

    pub fn tick(&mut self) {
        if self.thinking {
            self.spinner_idx = self.spinner_idx.wrapping_add(1);
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.thinking && self.status_text.is_empty() {
            return;
        }

        let spinner = if self.thinking {
            SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()]
        } else {
            " "
        };

        let mut text = if self.status_text.is_empty() {
            "Working...".to_string()
        } else {
            self.status_text.clone()
        };
        if let Some(started) = self.started {
            let secs = started.elapsed().as_secs();
            if secs >= 2 {
                text.push_str(&format!(" ({secs}s)"));
            }
        }

        let line = Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(text, Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}
