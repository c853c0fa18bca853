use crate::app::{App, AppScreen, SECTIONS};
use crate::chat_view;
use crate::splash_screen::SplashScreenAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Routes a key press to the active screen's handler. `app_arc` is the
/// same app behind the guard, cloned into spawned network tasks.
pub fn handle_key(key: KeyEvent, app: &mut App, app_arc: Arc<Mutex<App>>) {
    match app.screen {
        AppScreen::Splash => handle_splash(key, app),
        AppScreen::Chat => handle_chat(key, app, app_arc),
        AppScreen::ClearConfirm => handle_clear_confirm(key, app, app_arc),
        AppScreen::QuitConfirm => handle_quit_confirm(key, app),
        AppScreen::Quit => {}
        _ => handle_section(key, app),
    }
}

fn handle_splash(key: KeyEvent, app: &mut App) {
    if let Some(action) = app.splash.handle_input(key) {
        match action {
            SplashScreenAction::OpenDashboard => app.screen = AppScreen::Overview,
            SplashScreenAction::StartChat => app.screen = AppScreen::Chat,
            SplashScreenAction::Quit => app.screen = AppScreen::Quit,
        }
    }
}

/// Dashboard sections other than chat: pure navigation.
fn handle_section(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.prev_section(),
        KeyCode::Esc => app.screen = AppScreen::Splash,
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.request_quit()
        }
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as usize) - ('1' as usize);
            app.screen = SECTIONS[idx];
        }
        _ => {}
    }
}

fn handle_chat(key: KeyEvent, app: &mut App, app_arc: Arc<Mutex<App>>) {
    match key.code {
        KeyCode::Esc => app.screen = AppScreen::Splash,
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.prev_section(),
        KeyCode::Enter => {
            let input = app.chat_input.clone();
            // rejected submits (blank input, exchange in flight) keep the
            // input box as-is
            if let Some(ticket) = app.chat.begin_submit(&input) {
                app.chat_input.clear();
                app.push_history(ticket.text.clone());
                app.scroll_chat_to_bottom();
                tokio::spawn(chat_view::run_exchange(app_arc, ticket));
            }
        }
        KeyCode::Backspace => {
            app.chat_input.pop();
            app.command_index = None;
        }
        KeyCode::PageUp => app.scroll_chat_up(),
        KeyCode::PageDown => app.scroll_chat_down(),
        KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => app.history_prev(),
        KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => app.history_next(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.request_quit(),
                    'l' => app.screen = AppScreen::ClearConfirm,
                    'u' => app.scroll_chat_up(),
                    'd' => app.scroll_chat_down(),
                    _ => {}
                }
            } else {
                app.chat_input.push(c);
                app.command_index = None;
            }
        }
        _ => {}
    }
}

fn handle_clear_confirm(key: KeyEvent, app: &mut App, app_arc: Arc<Mutex<App>>) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.screen = AppScreen::Chat;
            tokio::spawn(chat_view::run_reset(app_arc));
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            // declined: the conversation stays untouched
            app.screen = AppScreen::Chat;
        }
        _ => {}
    }
}

fn handle_quit_confirm(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.screen = AppScreen::Quit,
        KeyCode::Char('n') | KeyCode::Esc => app.cancel_quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AssistantClient;
    use crossterm::event::KeyEvent;

    fn app() -> App {
        App::new(Arc::new(AssistantClient::new("http://127.0.0.1:9")))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_feeds_the_input_buffer() {
        let mut app = app();
        app.screen = AppScreen::Chat;
        for c in "hi".chars() {
            handle_chat(press(KeyCode::Char(c)), &mut app, dummy_arc());
        }
        assert_eq!(app.chat_input, "hi");
        handle_chat(press(KeyCode::Backspace), &mut app, dummy_arc());
        assert_eq!(app.chat_input, "h");
    }

    #[test]
    fn declining_clear_keeps_the_conversation() {
        let mut app = app();
        app.screen = AppScreen::ClearConfirm;
        let before = app.chat.messages().len();
        handle_clear_confirm(press(KeyCode::Char('n')), &mut app, dummy_arc());
        assert_eq!(app.screen, AppScreen::Chat);
        assert_eq!(app.chat.messages().len(), before);
    }

    #[test]
    fn digits_jump_between_sections() {
        let mut app = app();
        app.screen = AppScreen::Overview;
        handle_section(press(KeyCode::Char('3')), &mut app);
        assert_eq!(app.screen, AppScreen::Transactions);
    }

    fn dummy_arc() -> Arc<Mutex<App>> {
        Arc::new(Mutex::new(app()))
    }
}
