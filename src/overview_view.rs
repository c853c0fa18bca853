use crate::app::App;
use crate::mock_data::{self, format_money};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_overview(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    draw_stat_cards(f, app, chunks[0]);
    draw_spending_breakdown(f, app, chunks[1]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Tip: ", Style::default().fg(Color::LightGreen)),
        Span::styled(
            "switch to the advisor section (Tab) and ask about anything you see here.",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(hint, chunks[2]);
}

fn draw_stat_cards(f: &mut Frame, app: &App, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    let total = mock_data::portfolio_total(&app.stocks, &app.funds, &app.cash);
    let gain = mock_data::total_gain(&app.stocks, &app.funds);
    let spending = mock_data::monthly_spending(&app.transactions);
    let cash = app.cash.total();

    let gain_color = if gain >= 0.0 { Color::Green } else { Color::Red };
    let gain_text = if gain >= 0.0 {
        format!("+{}", format_money(gain))
    } else {
        format_money(gain)
    };

    stat_card(f, cards[0], "Total Portfolio", &format_money(total), Color::White);
    stat_card(f, cards[1], "Total Gain", &gain_text, gain_color);
    stat_card(f, cards[2], "Monthly Spending", &format_money(spending), Color::Yellow);
    stat_card(f, cards[3], "Available Cash", &format_money(cash), Color::White);
}

fn stat_card(f: &mut Frame, area: Rect, label: &str, value: &str, color: Color) {
    let card = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(label.to_string())
            .style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(card, area);
}

fn draw_spending_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let by_category = mock_data::spending_by_category(&app.transactions);
    let top = by_category.first().map(|(_, v)| *v).unwrap_or(1.0);

    let mut lines = Vec::new();
    for (category, amount) in &by_category {
        let bar_width = ((amount / top) * 24.0).round() as usize;
        lines.push(Line::from(vec![
            Span::styled(format!("{category:<16}"), Style::default().fg(Color::White)),
            Span::styled(
                "▇".repeat(bar_width.max(1)),
                Style::default().fg(Color::LightGreen),
            ),
            Span::styled(
                format!(" {}", format_money(*amount)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let breakdown = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Spending by Category"),
    );
    f.render_widget(breakdown, area);
}
