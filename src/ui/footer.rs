use crate::app::{App, AppScreen};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draws the footer with key hints for the active screen.
pub fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let instructions = match app.screen {
        AppScreen::Chat => {
            "Enter send · Ctrl+↑/↓ history · PgUp/PgDn scroll · Ctrl+L clear history · Esc menu"
        }
        AppScreen::ClearConfirm | AppScreen::QuitConfirm => "y confirm · n cancel",
        _ => "Tab/Shift+Tab switch section · q quit · Esc menu",
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
