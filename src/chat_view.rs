use crate::app::App;
use crate::chat_panel::SubmitTicket;
use log::warn;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .margin(1)
        .split(area);

    let chat_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .split(horizontal_chunks[0]);

    draw_messages(f, app, chat_chunks[0]);
    app.status_indicator.render(f, chat_chunks[1]);
    draw_input(f, app, chat_chunks[2]);
    draw_logs(f, app, horizontal_chunks[1]);
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let mut lines = Vec::new();
    for message in app.chat.messages() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area));
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    if app.chat_scroll > max_scroll {
        app.chat_scroll = max_scroll;
    }

    let messages = Paragraph::new(lines)
        .block(Block::default())
        .wrap(Wrap { trim: false });
    f.render_widget(messages.scroll((app.chat_scroll, 0)), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator.clone(),
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    // sending disables the input affordance; the prompt arrow dims
    let (prefix, prefix_style) = if app.chat.is_sending() {
        ("⋯ ", Style::default().fg(Color::DarkGray))
    } else if app.command_index.is_some() {
        ("⌃ ", Style::default().fg(Color::Yellow))
    } else {
        ("→ ", Style::default().fg(Color::LightGreen))
    };

    let input_line = Line::from(vec![
        Span::styled(prefix, prefix_style),
        Span::styled(app.chat_input.clone(), Style::default().fg(Color::White)),
    ]);

    let visible_width = area.width.saturating_sub(2);
    let text_width = app.chat_input.chars().count() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input_line).scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    if let Some(idx) = app.command_index {
        let hint = format!(" [history {}/{}] ", idx + 1, app.command_history.len());
        let hint_width = hint.len() as u16;
        if hint_width < area.width {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    hint,
                    Style::default().fg(Color::Yellow),
                ))),
                Rect {
                    x: area.x + area.width - hint_width,
                    y: area.y,
                    width: hint_width,
                    height: 1,
                },
            );
        }
    }

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        },
    );

    if !app.chat.is_sending() {
        let cursor_x = area.x + 2 + text_width - scroll_offset;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_logs(f: &mut Frame, app: &mut App, area: Rect) {
    let log_lines: Vec<Line> = app
        .logs
        .entries()
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry.clone()),
            ])
        })
        .collect();

    let total = log_lines.len() as u16;
    let max_scroll = total.saturating_sub(area.height);
    if app.logs_scroll > max_scroll {
        app.logs_scroll = max_scroll;
    }

    let logs = Paragraph::new(log_lines)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title("activity"))
        .wrap(Wrap { trim: true });
    f.render_widget(logs.scroll((app.logs_scroll, 0)), area);
}

/// Drives one staged exchange to completion: calls the backend off the UI
/// loop and lands the outcome on the panel. Spawned by the Enter handler;
/// at most one of these runs at a time (the panel rejects overlapping
/// submits).
pub async fn run_exchange(app: Arc<Mutex<App>>, ticket: SubmitTicket) {
    let client = {
        let mut guard = app.lock().await;
        let snippet: String = ticket.text.chars().take(80).collect();
        guard.logs.add(format!("sending \"{snippet}\""));
        guard.status_indicator.set_thinking(true);
        guard.status_indicator.set_status("Thinking...");
        guard.chat.client()
    };

    let outcome = client.chat(&ticket.text).await;

    let mut guard = app.lock().await;
    match &outcome {
        Ok(reply) => guard.logs.add(format!("reply received ({} chars)", reply.len())),
        Err(err) => guard.logs.add(format!("chat request failed: {err}")),
    }
    guard.chat.resolve(ticket.pending_id, outcome);
    guard.status_indicator.set_thinking(false);
    guard.scroll_chat_to_bottom();
}

/// Resets the backend conversation, then clears the local one. The local
/// clear happens no matter how the reset call went; a failure is logged
/// and otherwise ignored.
pub async fn run_reset(app: Arc<Mutex<App>>) {
    let client = { app.lock().await.chat.client() };

    if let Err(err) = client.reset().await {
        warn!("reset request failed: {err}");
        app.lock().await.logs.add(format!("reset failed: {err}"));
    }

    let mut guard = app.lock().await;
    guard.chat.clear();
    guard.chat_scroll = 0;
    guard.logs.add("conversation cleared");
}
