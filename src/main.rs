use hooks_deck::adapters::ReqwestHttpClient;
use hooks_deck::app::{App, AppMessage};
use hooks_deck::cli::{parse_args, CliCommand, USAGE};
use hooks_deck::config::DeckConfig;
use hooks_deck::observability::{init_tracing, ConsoleBuffer};
use hooks_deck::terminal::{setup_panic_hook, TerminalManager};
use hooks_deck::ui;
use hooks_deck::view::ViewEvent;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Housekeeping interval for console refresh.
const TICK: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let screen = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("hooks-deck {}", VERSION);
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        CliCommand::Run { screen } => screen,
    };

    color_eyre::install()?;

    let mut config = DeckConfig::from_env();
    if let Some(screen) = screen {
        config = config.with_initial_screen(screen);
    }
    config.validate()?;

    let console = ConsoleBuffer::with_capacity(config.console_capacity);
    init_tracing(&config, &console)?;
    setup_panic_hook();

    tracing::info!(version = VERSION, tree = %config.initial_screen, "starting hooks-deck");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut manager = TerminalManager::new()?;
        let mut app = App::new(&config, Arc::new(ReqwestHttpClient::new()), console);
        app.start();

        let result = run_app(manager.terminal(), &mut app).await;

        app.shutdown();
        manager.restore()?;
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> =
        app.take_message_receiver();

    let mut tick = tokio::time::interval(TICK);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tick.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Paste(text))) => {
                        for ch in text.chars().filter(|c| !c.is_control()) {
                            app.dispatch(ViewEvent::Insert(ch));
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("terminal event error: {}", e);
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
