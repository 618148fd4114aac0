use luxxor::app::{App, AppMessage};
use luxxor::cli::{parse_args, run_cli_command};
use luxxor::config::AppConfig;
use luxxor::logging::init_logging;
use luxxor::terminal::{setup_panic_hook, TerminalManager};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Handle CLI flags before any initialization
    if let Some(result) = run_cli_command(parse_args(std::env::args())) {
        return result;
    }

    color_eyre::install()?;

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.startup_report());
            return Err(err.into());
        }
    };
    if let Err(err) = init_logging(&config) {
        // Logging is optional; the TUI still runs without it
        eprintln!("{}", err.startup_report());
        eprintln!("luxxor: continuing without a log file");
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let mut manager = TerminalManager::new(config.enable_mouse)?;
        let mut app = App::new(config);

        let size = manager.terminal().size()?;
        app.update_terminal_dimensions(size.width, size.height);

        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore()?;

        if let Err(ref err) = result {
            tracing::error!(%err, "event loop exited with an error");
        }
        tracing::info!("luxxor exiting");
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
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| app.render(f))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        app.handle_mouse(mouse);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(%err, "terminal event error");
                    }
                    // Input closed
                    None => return Ok(()),
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
    }
}
