use crate::markup;
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    /// Placeholder shown while the backend reply is outstanding.
    Pending,
    Complete,
    /// Terminal fallback after a failed exchange.
    Failed,
}

/// One entry in the conversation. Messages are immutable after creation;
/// a pending placeholder is replaced wholesale, never edited.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    id: Uuid,
    sender: Sender,
    text: String,
    status: MessageStatus,
    timestamp: DateTime<Local>,
}

impl ChatMessage {
    fn build(sender: Sender, text: impl Into<String>, status: MessageStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            status,
            timestamp: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::build(Sender::User, text, MessageStatus::Complete)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::build(Sender::Assistant, text, MessageStatus::Complete)
    }

    pub fn pending(text: impl Into<String>) -> Self {
        Self::build(Sender::Assistant, text, MessageStatus::Pending)
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self::build(Sender::Assistant, text, MessageStatus::Failed)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_pending(&self) -> bool {
        self.status == MessageStatus::Pending
    }

    pub fn status(&self) -> MessageStatus {
        self.status
    }

    fn author(&self) -> &'static str {
        match self.sender {
            Sender::User => "You",
            Sender::Assistant => "FinanceAI",
        }
    }

    fn base_style(&self) -> Style {
        let style = Style::default().fg(match self.sender {
            Sender::User => Color::Rgb(255, 214, 140),
            Sender::Assistant => Color::Rgb(152, 224, 166),
        });

        match self.status {
            MessageStatus::Pending => style.add_modifier(Modifier::DIM),
            MessageStatus::Failed => style.fg(Color::Red),
            MessageStatus::Complete => style,
        }
    }

    fn status_icon(&self) -> &'static str {
        match self.status {
            MessageStatus::Pending => "○",
            MessageStatus::Complete => "●",
            MessageStatus::Failed => "✗",
        }
    }

    /// Lays the message out as styled lines for the given area. Pure with
    /// respect to the terminal; the caller renders the result.
    pub fn render(&self, area: Rect) -> Vec<Line<'static>> {
        let style = self.base_style();
        let indent = match self.sender {
            Sender::User => "  ",
            Sender::Assistant => "",
        };
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("┌─ ".to_string(), style),
            Span::styled(self.author().to_string(), style.add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" · {}", self.timestamp.format("%H:%M")),
                style.add_modifier(Modifier::DIM),
            ),
            Span::styled(format!(" {}", self.status_icon()), style),
        ]));

        let wrap_width = (area.width as usize).saturating_sub(indent.len() + 2);
        for body_line in markup::wrapped_lines(&self.text, wrap_width.max(8), style) {
            let mut spans = vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
            ];
            spans.extend(body_line.spans);
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_sender_and_status() {
        let user = ChatMessage::user("hi");
        assert_eq!(user.sender(), Sender::User);
        assert!(!user.is_pending());

        let placeholder = ChatMessage::pending("thinking");
        assert_eq!(placeholder.sender(), Sender::Assistant);
        assert!(placeholder.is_pending());

        let failed = ChatMessage::failed("oops");
        assert_eq!(failed.status(), MessageStatus::Failed);
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(ChatMessage::user("a").id(), ChatMessage::user("a").id());
    }

    #[test]
    fn render_frames_the_body() {
        let area = Rect::new(0, 0, 60, 20);
        let lines = ChatMessage::assistant("line1\nline2").render(area);
        // header + two body lines + footer
        assert_eq!(lines.len(), 4);
    }
}
