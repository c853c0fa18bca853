use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use textwrap::wrap;

pub fn draw_goals(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    draw_profile(f, app, chunks[0]);
    draw_goal_list(f, app, chunks[1]);
}

fn draw_profile(f: &mut Frame, app: &App, area: Rect) {
    let profile = &app.profile;
    let lines = vec![
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Color::DarkGray)),
            Span::raw(profile.name),
            Span::styled("   Age: ", Style::default().fg(Color::DarkGray)),
            Span::raw(profile.age.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Risk tolerance: ", Style::default().fg(Color::DarkGray)),
            Span::raw(profile.risk_tolerance),
            Span::styled("   Horizon: ", Style::default().fg(Color::DarkGray)),
            Span::raw(profile.investment_horizon),
        ]),
        Line::from(vec![
            Span::styled("Monthly salary: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("${:.0}", profile.monthly_salary)),
            Span::styled("   Monthly budget: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("${:.0}", profile.monthly_budget)),
        ]),
    ];

    let block = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Profile"));
    f.render_widget(block, area);
}

fn draw_goal_list(f: &mut Frame, app: &App, area: Rect) {
    let wrap_width = (area.width as usize).saturating_sub(6).max(20);
    let mut lines = Vec::new();

    for goal in &app.profile.goals {
        let mut first = true;
        for piece in wrap(goal, wrap_width) {
            let marker = if first { "◆ " } else { "  " };
            first = false;
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::LightGreen)),
                Span::raw(piece.into_owned()),
            ]));
        }
        lines.push(Line::from(""));
    }

    let list = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Goals"));
    f.render_widget(list, area);
}
