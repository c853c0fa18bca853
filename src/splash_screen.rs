use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

const BANNER: &str = r#"
  ______ _                            _____
 |  ____(_)                     /\   |_   _|
 | |__   _ _ __   __ _ _ __    /  \    | |
 |  __| | | '_ \ / _` | '_ \  / /\ \   | |
 | |    | | | | | (_| | | | |/ ____ \ _| |_
 |_|    |_|_| |_|\__,_|_| |_/_/    \_\_____|
"#;

const TAGLINE: &str = "Your personal financial relationship manager";

#[derive(Debug)]
pub enum SplashScreenAction {
    OpenDashboard,
    StartChat,
    Quit,
}

#[derive(Debug)]
pub struct SplashScreen {
    pub selected_idx: usize,
    pub menu_items: Vec<&'static str>,
}

impl SplashScreen {
    pub fn new() -> Self {
        Self {
            selected_idx: 0,
            menu_items: vec!["open dashboard", "ask the advisor", "quit"],
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let vsplit = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Length(8),
                Constraint::Length(2),
                Constraint::Length(self.menu_items.len() as u16),
                Constraint::Min(0),
            ])
            .split(area);

        let banner = Paragraph::new(BANNER)
            .style(Style::default().fg(Color::LightGreen))
            .alignment(Alignment::Center)
            .block(Block::default())
            .wrap(Wrap { trim: false });
        f.render_widget(banner, vsplit[1]);

        let tagline = Paragraph::new(TAGLINE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(tagline, vsplit[2]);

        let mut menu_lines = Vec::new();
        for (i, item) in self.menu_items.iter().enumerate() {
            let selected = i == self.selected_idx;
            let style = if selected {
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            menu_lines.push(Line::from(Span::styled(
                format!("{} {}", if selected { "▶" } else { " " }, item),
                style,
            )));
        }
        let menu = Paragraph::new(menu_lines).alignment(Alignment::Center);
        f.render_widget(menu, vsplit[3]);
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<SplashScreenAction> {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Down) => {
                self.selected_idx = (self.selected_idx + 1) % self.menu_items.len();
                None
            }
            (KeyModifiers::NONE, KeyCode::Up) => {
                if self.selected_idx == 0 {
                    self.selected_idx = self.menu_items.len() - 1;
                } else {
                    self.selected_idx -= 1;
                }
                None
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                match self.menu_items[self.selected_idx] {
                    "open dashboard" => Some(SplashScreenAction::OpenDashboard),
                    "ask the advisor" => Some(SplashScreenAction::StartChat),
                    "quit" => Some(SplashScreenAction::Quit),
                    _ => None,
                }
            }
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(SplashScreenAction::Quit),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(SplashScreenAction::Quit),
            _ => None,
        }
    }
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}
