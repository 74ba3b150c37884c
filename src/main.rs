use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::{Duration, Instant};

use hnr::adapters::ReqwestHttpClient;
use hnr::app::App;
use hnr::cli::{handle_version_command, parse_args, run_cli_command, CliCommand};
use hnr::input::{handle_key_event, CommandRegistry};
use hnr::settings::SettingsStore;
use hnr::startup::{init_logging, AppConfig};
use hnr::terminal::{setup_panic_hook, TerminalManager};
use hnr::ui;

/// How often the loop wakes without input, for notice expiry.
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if command == CliCommand::Version {
        handle_version_command();
    }

    color_eyre::install()?;

    let config = AppConfig::from_env();
    if let Err(e) = init_logging(&config.data_dir) {
        eprintln!("warning: logging disabled: {:#}", e);
    }

    let store = SettingsStore::in_dir(&config.data_dir);
    tracing::debug!("Settings file: {}", store.path().display());

    // Fetch tasks and the UI share one thread; state needs no locks.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("Failed to start async runtime")?;

    let settings = store.load();
    if let Some(result) = runtime.block_on(run_cli_command(command.clone(), &config, &settings)) {
        return result;
    }

    let CliCommand::RunTui { category } = command else {
        return Ok(());
    };

    let http = ReqwestHttpClient::with_timeout(config.request_timeout)
        .wrap_err("Failed to build HTTP client")?;
    let config = match category {
        Some(_) => config.with_initial_category(category),
        None => config,
    };
    let mut app = App::new(config, Arc::new(http), store);

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(manager.terminal(), &mut app));
    manager.restore();

    if let Err(e) = &result {
        tracing::error!("Exiting with error: {:#}", e);
    } else {
        tracing::info!("Exiting");
    }
    result
}

/// Draw, then wait for a key, a fetch result or the tick; repeat until quit.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .take_message_rx()
        .ok_or_else(|| eyre!("Message receiver already taken"))?;

    app.start();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }
        if app.should_quit {
            break;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick(Instant::now());
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => {
                        handle_key_event(app, &registry, key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e).wrap_err("Failed to read terminal event"),
                    None => break,
                }
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
            }
        }
    }

    Ok(())
}
