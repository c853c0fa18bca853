// src/ui.rs

pub mod confirm;
pub mod footer;
pub mod header;

use crate::app::{App, AppScreen};
use crate::{chat_view, goals_view, overview_view, portfolio_view, transactions_view};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Top-level draw dispatch: header, active section, footer. The splash
/// screen and the quit modal own the whole frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    match app.screen {
        AppScreen::Splash => {
            app.splash.draw(f, area);
            return;
        }
        AppScreen::QuitConfirm => {
            confirm::draw_confirm(
                f,
                area,
                "Confirm Quit",
                "Leave the dashboard?\n\nPress 'y' to quit or 'n' to stay.",
            );
            return;
        }
        _ => {}
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    header::draw_header(f, chunks[0], app);

    match app.screen {
        AppScreen::Overview => overview_view::draw_overview(f, app, chunks[1]),
        AppScreen::Portfolio => portfolio_view::draw_portfolio(f, app, chunks[1]),
        AppScreen::Transactions => transactions_view::draw_transactions(f, app, chunks[1]),
        AppScreen::Goals => goals_view::draw_goals(f, app, chunks[1]),
        AppScreen::Chat => chat_view::draw_chat(f, app, chunks[1]),
        AppScreen::ClearConfirm => {
            chat_view::draw_chat(f, app, chunks[1]);
            confirm::draw_confirm(
                f,
                area,
                "Clear History",
                "Are you sure you want to clear the chat history?\n\nPress 'y' to confirm or 'n' to cancel.",
            );
        }
        _ => {}
    }

    footer::draw_footer(f, chunks[2], app);
}
