use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tracing::info;

use vibelist::api::{HttpPlaylistClient, PlaylistApi};
use vibelist::app::cli::Args;
use vibelist::app::config::{self, AppConfig};
use vibelist::app::events::AppEvent;
use vibelist::app::{effects, input_handler, App};
use vibelist::{logging, ui};

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

/// human-panic report, but only after the terminal is usable again.
fn install_panic_hook() {
    human_panic::setup_panic!();
    let report = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        report(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_config {
        println!("{}", AppConfig::default_toml());
        return Ok(());
    }

    install_panic_hook();
    dotenv::dotenv().ok();
    let _log_guard = logging::init(args.log_file.as_deref())?;

    // Read once; nothing below looks at the environment again
    let env_url = std::env::var(config::ENV_API_BASE_URL).ok();
    let (config, base_url) = config::resolve_startup(
        args.api_url.as_deref(),
        env_url.as_deref(),
        AppConfig::load(),
    )?;
    let client = HttpPlaylistClient::new(&base_url)
        .with_context(|| format!("cannot use API base URL {base_url}"))?;
    info!(endpoint = client.endpoint(), "starting vibelist");
    let api: Arc<dyn PlaylistApi> = Arc::new(client);

    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app, api).await;

    restore_terminal()?;
    terminal.show_cursor()?;
    info!("bye");

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: Arc<dyn PlaylistApi>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(100);

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Animation Tick Task ⚡ (~60 FPS)
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(16));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    while app.is_running {
        terminal.draw(|f| ui::ui(f, app))?;

        let Some(event) = rx.recv().await else {
            break;
        };
        match event {
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(action) = input_handler::handle_key(key, app) {
                    let pending = app.handle_action(action);
                    effects::perform(pending, &api, &tx);
                }
            }
            AppEvent::Input(_) => {}
            AppEvent::PlaylistResponse(request, result) => {
                let pending = app.on_playlist_response(request, result);
                effects::perform(pending, &api, &tx);
            }
            AppEvent::Tick => app.on_tick(),
        }
    }

    Ok(())
}
