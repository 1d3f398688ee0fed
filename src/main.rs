use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use profile_wizard::config::AppConfig;
use profile_wizard::core::profile::ProfileStore;
use profile_wizard::tui::app::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_origin) = AppConfig::load();

    // Initialize logging, then report how the config was resolved
    let log_guard = profile_wizard::core::logging::init(&config.logging, &config.log_dir());
    log::info!("Profile Wizard v{} starting", profile_wizard::VERSION);
    config_origin.log();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let mut app = AppState::new(ProfileStore::new(), config.tui.notification_ttl_ticks);
    let result = app.run(&mut terminal, config.tick_rate()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("Exited with error: {e}");
        // process::exit skips destructors; flush the log writer first
        drop(log_guard);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::info!("Exited with {} profile(s) in memory", app.store.len());
    drop(log_guard);
    Ok(())
}
