use crate::app::App;
use crate::mock_data::format_money;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

pub fn draw_portfolio(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_stocks(f, app, chunks[0]);
    draw_funds(f, app, chunks[1]);
}

fn gain_cell(gain: f64) -> Cell<'static> {
    let style = Style::default().fg(if gain >= 0.0 { Color::Green } else { Color::Red });
    let text = if gain >= 0.0 {
        format!("+{}", format_money(gain))
    } else {
        format_money(gain)
    };
    Cell::from(Span::styled(text, style))
}

fn header_row(titles: &'static [&'static str]) -> Row<'static> {
    Row::new(titles.iter().map(|t| Cell::from(*t)).collect::<Vec<_>>()).style(
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    )
}

fn draw_stocks(f: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .stocks
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(Span::styled(
                    s.ticker,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(s.company),
                Cell::from(s.shares.to_string()),
                Cell::from(format_money(s.avg_cost)),
                Cell::from(format_money(s.current_price)),
                Cell::from(format_money(s.value())),
                gain_cell(s.gain()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Min(18),
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header_row(&[
        "Ticker", "Company", "Shares", "Avg Cost", "Current", "Value", "Gain",
    ]))
    .column_spacing(1)
    .block(Block::default().borders(Borders::ALL).title("Stocks"));

    f.render_widget(table, area);
}

fn draw_funds(f: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .funds
        .iter()
        .map(|fund| {
            Row::new(vec![
                Cell::from(fund.name),
                Cell::from(Span::styled(
                    fund.ticker,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(fund.units.to_string()),
                Cell::from(format_money(fund.purchase_nav)),
                Cell::from(format_money(fund.current_nav)),
                Cell::from(format_money(fund.value())),
                gain_cell(fund.gain()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(26),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header_row(&[
        "Fund", "Ticker", "Units", "Buy NAV", "NAV", "Value", "Gain",
    ]))
    .column_spacing(1)
    .block(Block::default().borders(Borders::ALL).title("Mutual Funds"));

    f.render_widget(table, area);
}
