use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenv::dotenv;
use financeai::app::{App, AppScreen};
use financeai::client::AssistantClient;
use financeai::{config, key_handlers, logging, ui};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    config::initialize_config()?;
    let _logger = logging::init(&config::get_config().log_level)?;

    let client = Arc::new(AssistantClient::from_config());
    info!("starting financeai terminal, backend {}", client.base_url());
    let app = Arc::new(Mutex::new(App::new(client)));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("{err:?}");
    }
    res
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
) -> Result<()> {
    loop {
        {
            let mut guard = app.lock().await;
            guard.status_indicator.tick();
            terminal.draw(|f| ui::draw(f, &mut guard))?;
            if guard.screen == AppScreen::Quit {
                info!("shutting down");
                return Ok(());
            }
        }

        // short poll keeps the spinner animating while a request is out
        if event::poll(Duration::from_millis(50))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let mut guard = app.lock().await;
                    key_handlers::handle_key(key, &mut guard, Arc::clone(&app));
                }
            }
        }
    }
}
