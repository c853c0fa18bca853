use crate::chat_panel::ChatPanel;
use crate::client::AssistantClient;
use crate::constants::QUICK_PROMPTS;
use crate::log_view::LogView;
use crate::mock_data::{
    self, CashPosition, FundHolding, StockHolding, Transaction, UserProfile,
};
use crate::splash_screen::SplashScreen;
use crate::status_indicator::StatusIndicator;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Splash,
    Overview,
    Portfolio,
    Transactions,
    Chat,
    Goals,
    /// Modal over the chat screen gating the clear-history action.
    ClearConfirm,
    QuitConfirm,
    Quit,
}

/// Dashboard sections in tab order.
pub const SECTIONS: [AppScreen; 5] = [
    AppScreen::Overview,
    AppScreen::Portfolio,
    AppScreen::Transactions,
    AppScreen::Chat,
    AppScreen::Goals,
];

impl AppScreen {
    pub fn title(&self) -> &'static str {
        match self {
            AppScreen::Overview => "Financial Overview",
            AppScreen::Portfolio => "Portfolio Holdings",
            AppScreen::Transactions => "Transaction History",
            AppScreen::Chat | AppScreen::ClearConfirm => "AI Financial Advisor",
            AppScreen::Goals => "Financial Goals",
            _ => "Dashboard",
        }
    }
}

pub struct App {
    pub screen: AppScreen,
    prev_screen: AppScreen,
    pub splash: SplashScreen,

    pub chat: ChatPanel,
    pub chat_input: String,
    pub chat_scroll: u16,
    pub command_history: Vec<String>,
    pub command_index: Option<usize>,

    pub logs: LogView,
    pub logs_scroll: u16,
    pub status_indicator: StatusIndicator,

    pub stocks: Vec<StockHolding>,
    pub funds: Vec<FundHolding>,
    pub cash: CashPosition,
    pub transactions: Vec<Transaction>,
    pub profile: UserProfile,
}

impl App {
    pub fn new(client: Arc<AssistantClient>) -> App {
        App {
            screen: AppScreen::Splash,
            prev_screen: AppScreen::Splash,
            splash: SplashScreen::new(),
            chat: ChatPanel::new(client),
            chat_input: String::new(),
            chat_scroll: 0,
            command_history: QUICK_PROMPTS.iter().map(|p| p.to_string()).collect(),
            command_index: None,
            logs: LogView::new(),
            logs_scroll: 0,
            status_indicator: StatusIndicator::new(),
            stocks: mock_data::stock_holdings(),
            funds: mock_data::fund_holdings(),
            cash: mock_data::cash_position(),
            transactions: mock_data::recent_transactions(),
            profile: mock_data::user_profile(),
        }
    }

    pub fn next_section(&mut self) {
        self.step_section(1);
    }

    pub fn prev_section(&mut self) {
        self.step_section(SECTIONS.len() - 1);
    }

    fn step_section(&mut self, step: usize) {
        if let Some(pos) = SECTIONS.iter().position(|s| *s == self.screen) {
            self.screen = SECTIONS[(pos + step) % SECTIONS.len()];
        }
    }

    pub fn scroll_chat_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_chat_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    /// The draw pass clamps this to the real bottom.
    pub fn scroll_chat_to_bottom(&mut self) {
        self.chat_scroll = u16::MAX;
    }

    pub fn request_quit(&mut self) {
        self.prev_screen = self.screen;
        self.screen = AppScreen::QuitConfirm;
    }

    pub fn cancel_quit(&mut self) {
        self.screen = self.prev_screen;
    }

    /// Recalls the previous input-history entry (quick prompts are seeded
    /// at the front of the history).
    pub fn history_prev(&mut self) {
        if self.command_history.is_empty() {
            return;
        }
        let idx = match self.command_index {
            None => self.command_history.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.command_index = Some(idx);
        self.chat_input = self.command_history[idx].clone();
    }

    pub fn history_next(&mut self) {
        match self.command_index {
            Some(i) if i + 1 < self.command_history.len() => {
                self.command_index = Some(i + 1);
                self.chat_input = self.command_history[i + 1].clone();
            }
            Some(_) => {
                self.command_index = None;
                self.chat_input.clear();
            }
            None => {}
        }
    }

    pub fn push_history(&mut self, entry: String) {
        if self.command_history.last().map(String::as_str) != Some(entry.as_str()) {
            self.command_history.push(entry);
        }
        self.command_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Arc::new(AssistantClient::new("http://127.0.0.1:9")))
    }

    #[test]
    fn sections_cycle_in_both_directions() {
        let mut app = app();
        app.screen = AppScreen::Overview;
        app.next_section();
        assert_eq!(app.screen, AppScreen::Portfolio);
        app.prev_section();
        assert_eq!(app.screen, AppScreen::Overview);
        app.prev_section();
        assert_eq!(app.screen, AppScreen::Goals);
    }

    #[test]
    fn section_titles_match_the_dashboard() {
        assert_eq!(AppScreen::Overview.title(), "Financial Overview");
        assert_eq!(AppScreen::Chat.title(), "AI Financial Advisor");
        assert_eq!(AppScreen::Splash.title(), "Dashboard");
    }

    #[test]
    fn history_recall_walks_backwards_from_the_end() {
        let mut app = app();
        app.push_history("latest".to_string());
        app.history_prev();
        assert_eq!(app.chat_input, "latest");
        app.history_prev();
        assert_eq!(app.chat_input, QUICK_PROMPTS[QUICK_PROMPTS.len() - 1]);
        app.history_next();
        assert_eq!(app.chat_input, "latest");
        app.history_next();
        assert!(app.chat_input.is_empty());
        assert_eq!(app.command_index, None);
    }

    #[test]
    fn quit_confirm_returns_to_previous_screen() {
        let mut app = app();
        app.screen = AppScreen::Transactions;
        app.request_quit();
        assert_eq!(app.screen, AppScreen::QuitConfirm);
        app.cancel_quit();
        assert_eq!(app.screen, AppScreen::Transactions);
    }
}
