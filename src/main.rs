use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use folio::api::PortfolioClient;
use folio::config::{AppConfig, ConfigSource};
use folio::core::cue::{GatedCue, SoundSwitch};
use folio::tui::app::AppState;
use folio::tui::audio::FlipPlayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_source) = AppConfig::load();
    if let ConfigSource::Invalid { path, error } = &config_source {
        eprintln!("Warning: ignoring config at {}: {error}", path.display());
    }

    // Initialize logging
    let _log_guard = folio::core::logging::init_tui(&config.data_dir());
    log::info!("Folio v{} starting", folio::VERSION);
    config_source.log();

    // Sound
    let sound = SoundSwitch::new(config.sound.enabled);
    let cue = GatedCue::new(FlipPlayer::spawn(config.volume()), sound.clone());

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let mut app = AppState::new(
        PortfolioClient::from_config(&config),
        Box::new(cue),
        sound,
        event_rx,
        event_tx,
    )
    .with_request_timeout(config.request_timeout());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.tui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = app.run(&mut terminal, config.tick_rate()).await;

    // Restore terminal
    disable_raw_mode()?;
    if config.tui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("Event loop failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::info!("Folio exiting");
    Ok(())
}
