// Backend endpoint paths. The assistant service itself is an external
// collaborator; only this request/response surface is relied upon.
pub const CHAT_ENDPOINT: &str = "/api/chat";
pub const RESET_ENDPOINT: &str = "/api/reset";

// Default base URL of the assistant backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

// Fixed chat texts.
pub const WELCOME_TEXT: &str =
    "Hello! I'm FinanceAI, your personal financial advisor. Ask me about your portfolio, your spending, or your goals.";
pub const CLEARED_WELCOME_TEXT: &str = "Chat history cleared! How can I help you today?";
pub const FALLBACK_TEXT: &str = "Sorry, I encountered an error. Please try again.";
pub const PENDING_TEXT: &str = "Analyzing your request...";

// Quick prompts seeded into the chat input history.
pub const QUICK_PROMPTS: [&str; 4] = [
    "How is my portfolio performing?",
    "Where am I spending the most money?",
    "Should I rebalance my investments?",
    "Am I on track for my financial goals?",
];

// In-app log pane keeps a bounded tail.
pub const LOG_PANE_CAPACITY: usize = 200;
