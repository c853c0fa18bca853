use crate::app::App;
use crate::mock_data::format_money;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

pub fn draw_transactions(f: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .transactions
        .iter()
        .map(|txn| {
            let amount_style = Style::default().fg(if txn.amount >= 0.0 {
                Color::Green
            } else {
                Color::Red
            });
            let amount_text = if txn.amount >= 0.0 {
                format!("+{}", format_money(txn.amount))
            } else {
                format_money(txn.amount)
            };

            Row::new(vec![
                Cell::from(txn.date.format("%Y-%m-%d").to_string()),
                Cell::from(txn.merchant),
                Cell::from(Span::styled(
                    txn.category,
                    Style::default().fg(Color::Cyan),
                )),
                Cell::from(Span::styled(amount_text, amount_style)),
                Cell::from(Span::styled(
                    txn.kind.as_str(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Date", "Merchant", "Category", "Amount", "Type"]).style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .column_spacing(1)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recent Transactions"),
    );

    f.render_widget(table, area);
}
