// src/chat_panel.rs
//
// State for the advisor chat: the ordered conversation, the single
// in-flight exchange, and the clear/reseed operation. Nothing here touches
// the terminal or the network directly; the view layer draws the messages
// and a spawned task drives the HTTP call, landing its outcome through
// `resolve`.

use crate::chat_message::ChatMessage;
use crate::client::AssistantClient;
use crate::constants::{CLEARED_WELCOME_TEXT, FALLBACK_TEXT, PENDING_TEXT, WELCOME_TEXT};
use crate::errors::FinanceAiResult;
use log::error;
use std::sync::Arc;
use uuid::Uuid;

/// A staged exchange handed to the network task.
#[derive(Debug, Clone)]
pub struct SubmitTicket {
    pub text: String,
    pub pending_id: Uuid,
}

pub struct ChatPanel {
    messages: Vec<ChatMessage>,
    in_flight: bool,
    client: Arc<AssistantClient>,
}

impl ChatPanel {
    pub fn new(client: Arc<AssistantClient>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(WELCOME_TEXT)],
            in_flight: false,
            client,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while an exchange is outstanding; input is disabled for the
    /// duration.
    pub fn is_sending(&self) -> bool {
        self.in_flight
    }

    pub fn client(&self) -> Arc<AssistantClient> {
        Arc::clone(&self.client)
    }

    /// Stages a new exchange: appends the user message and a pending
    /// placeholder, and marks the panel as sending. Returns `None` (and
    /// changes nothing) when the trimmed input is empty or an exchange is
    /// already in flight.
    pub fn begin_submit(&mut self, input: &str) -> Option<SubmitTicket> {
        let text = input.trim();
        if text.is_empty() || self.in_flight {
            return None;
        }

        self.in_flight = true;
        self.messages.push(ChatMessage::user(text));
        let placeholder = ChatMessage::pending(PENDING_TEXT);
        let pending_id = placeholder.id();
        self.messages.push(placeholder);

        Some(SubmitTicket {
            text: text.to_string(),
            pending_id,
        })
    }

    /// Lands the outcome of an exchange. The pending placeholder is
    /// replaced by the assistant reply, or by the fixed fallback text on
    /// any failure. The sending flag is released no matter what, so input
    /// always comes back. A placeholder that was removed by `clear` while
    /// the request was in flight drops the late outcome.
    pub fn resolve(&mut self, pending_id: Uuid, outcome: FinanceAiResult<String>) {
        self.in_flight = false;

        let terminal = match outcome {
            Ok(reply) => ChatMessage::assistant(reply),
            Err(err) => {
                error!("chat exchange failed: {err}");
                ChatMessage::failed(FALLBACK_TEXT)
            }
        };

        if let Some(pos) = self
            .messages
            .iter()
            .position(|m| m.id() == pending_id && m.is_pending())
        {
            self.messages[pos] = terminal;
        }
    }

    /// Empties the conversation and reseeds the single welcome message.
    /// Callers gate this behind the confirmation modal; the reset call to
    /// the backend happens regardless of whether this succeeds there.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.messages.push(ChatMessage::assistant(CLEARED_WELCOME_TEXT));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_message::Sender;
    use crate::errors::FinanceAiError;
    use reqwest::StatusCode;

    fn panel() -> ChatPanel {
        // no request is issued by the pure state transitions
        ChatPanel::new(Arc::new(AssistantClient::new("http://127.0.0.1:9")))
    }

    #[test]
    fn starts_with_a_single_welcome_message() {
        let panel = panel();
        assert_eq!(panel.messages().len(), 1);
        assert_eq!(panel.messages()[0].text(), WELCOME_TEXT);
        assert!(!panel.is_sending());
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let mut panel = panel();
        assert!(panel.begin_submit("").is_none());
        assert!(panel.begin_submit("   \n\t").is_none());
        assert_eq!(panel.messages().len(), 1);
        assert!(!panel.is_sending());
    }

    #[test]
    fn submit_appends_user_message_and_placeholder() {
        let mut panel = panel();
        let ticket = panel.begin_submit("  hello  ").unwrap();
        assert_eq!(ticket.text, "hello");
        assert_eq!(panel.messages().len(), 3);
        assert_eq!(panel.messages()[1].sender(), Sender::User);
        assert!(panel.messages()[2].is_pending());
        assert!(panel.is_sending());
    }

    #[test]
    fn at_most_one_placeholder_exists() {
        let mut panel = panel();
        panel.begin_submit("first").unwrap();
        assert!(panel.begin_submit("second").is_none());
        assert_eq!(panel.messages().len(), 3);
        assert_eq!(
            panel.messages().iter().filter(|m| m.is_pending()).count(),
            1
        );
    }

    #[test]
    fn success_replaces_placeholder_with_reply() {
        let mut panel = panel();
        let ticket = panel.begin_submit("hello").unwrap();
        panel.resolve(ticket.pending_id, Ok("Hi Alex!".to_string()));

        assert_eq!(panel.messages().len(), 3);
        let last = panel.messages().last().unwrap();
        assert_eq!(last.text(), "Hi Alex!");
        assert_eq!(last.sender(), Sender::Assistant);
        assert!(!last.is_pending());
        assert!(!panel.is_sending());
    }

    #[test]
    fn failure_replaces_placeholder_with_fallback() {
        let mut panel = panel();
        let ticket = panel.begin_submit("hello").unwrap();
        panel.resolve(
            ticket.pending_id,
            Err(FinanceAiError::server_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "boom",
            )),
        );

        let last = panel.messages().last().unwrap();
        assert_eq!(last.text(), FALLBACK_TEXT);
        assert!(!panel.is_sending());
    }

    #[test]
    fn submit_is_accepted_again_after_resolution() {
        let mut panel = panel();
        let ticket = panel.begin_submit("one").unwrap();
        panel.resolve(ticket.pending_id, Ok("reply".to_string()));
        assert!(panel.begin_submit("two").is_some());
    }

    #[test]
    fn clear_reseeds_single_welcome_message() {
        let mut panel = panel();
        let ticket = panel.begin_submit("hello").unwrap();
        panel.resolve(ticket.pending_id, Ok("reply".to_string()));
        panel.clear();

        assert_eq!(panel.messages().len(), 1);
        assert_eq!(panel.messages()[0].text(), CLEARED_WELCOME_TEXT);
    }

    #[test]
    fn late_reply_after_clear_is_dropped() {
        let mut panel = panel();
        let ticket = panel.begin_submit("hello").unwrap();
        panel.clear();
        panel.resolve(ticket.pending_id, Ok("too late".to_string()));

        assert_eq!(panel.messages().len(), 1);
        assert_eq!(panel.messages()[0].text(), CLEARED_WELCOME_TEXT);
        assert!(!panel.is_sending());
    }

    #[tokio::test]
    async fn transport_failure_lands_fallback_and_reenables_input() {
        // nothing listens on port 9; the connect fails fast
        let client = Arc::new(AssistantClient::new("http://127.0.0.1:9"));
        let mut panel = ChatPanel::new(Arc::clone(&client));

        let ticket = panel.begin_submit("hello").unwrap();
        let outcome = client.chat(&ticket.text).await;
        assert!(outcome.is_err());
        panel.resolve(ticket.pending_id, outcome);

        assert_eq!(panel.messages().last().unwrap().text(), FALLBACK_TEXT);
        assert!(!panel.is_sending());
    }
}
