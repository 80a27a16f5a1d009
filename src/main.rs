use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use marai::{
    app::App,
    chat_view, config,
    exchange::{self, ExchangeController, ExchangeEvent},
    key_handlers,
    logging,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    let _logger = logging::init(&config.log_dir)?;
    info!("starting marai, webhook = {}", config.webhook_url);

    // Fallible setup happens before the terminal is put into raw mode.
    let (mut exchange, mut replies) = ExchangeController::new(&config)?;
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let res = run(&mut terminal, &mut app, &mut exchange, &mut replies);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// The UI event loop: all state mutation happens here, one discrete event
/// at a time (keystroke, toggle, submit, network completion).
fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    exchange_ctl: &mut ExchangeController,
    replies: &mut mpsc::UnboundedReceiver<ExchangeEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| chat_view::draw(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let CEvent::Key(key) = event::read()? {
                key_handlers::handle_key(key, app, exchange_ctl);
            }
        }

        // Completions of in-flight submissions, in arrival order.
        while let Ok(event) = replies.try_recv() {
            exchange::apply_event(app, event);
        }

        if app.should_quit {
            info!("shutting down");
            break;
        }
    }
    Ok(())
}
