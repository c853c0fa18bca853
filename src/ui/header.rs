use crate::app::{App, SECTIONS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Brand, current section title, and the section tab strip.
pub fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " FinanceAI ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.screen.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];

    for section in SECTIONS {
        let active = section == app.screen
            || (section == crate::app::AppScreen::Chat
                && app.screen == crate::app::AppScreen::ClearConfirm);
        let style = if active {
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", section.title()), style));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}
