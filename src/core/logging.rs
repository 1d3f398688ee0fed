//! Logging setup.
//!
//! All output goes to a daily-rolling JSON log file; the terminal is owned by
//! the TUI so nothing is written to stdout. `log` macros are forwarded into
//! `tracing` so the whole crate can use `log::info!` and friends.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// Log file name prefix; the appender adds the date suffix.
pub const LOG_FILE_NAME: &str = "profile-wizard.log";

/// Initialize logging. Keep the returned guard alive until exit so buffered
/// lines are flushed.
pub fn init(config: &LoggingConfig, log_dir: &Path) -> WorkerGuard {
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = build_filter(&config.level);

    // JSON format for easy parsing/ingestion
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter);

    if let Err(e) = tracing_subscriber::registry().with(file_layer).try_init() {
        eprintln!("Failed to initialize tracing subscriber: {}", e);
    }

    // Redirect standard `log` macros to `tracing`
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }

    log::info!(
        "{} v{} logging to {}",
        crate::NAME,
        crate::VERSION,
        log_dir.display()
    );

    guard
}

/// `RUST_LOG` wins; otherwise the configured level, then `info`.
fn build_filter(level: &str) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env.as_deref(), level)
}

fn filter_from(env: Option<&str>, level: &str) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_configured_level() {
        assert_eq!(filter_from(None, "debug").to_string(), "debug");
    }

    #[test]
    fn test_filter_bad_level_falls_back_to_info() {
        assert_eq!(filter_from(None, "app=notalevel").to_string(), "info");
    }

    #[test]
    fn test_filter_env_overrides_config() {
        assert_eq!(filter_from(Some("warn"), "debug").to_string(), "warn");
        // Unparseable env directives are skipped, not fatal
        assert_eq!(filter_from(Some("app=notalevel"), "debug").to_string(), "debug");
    }

    #[test]
    fn test_lines_flushed_when_guard_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "info".to_string(),
            log_dir: None,
        };

        let guard = init(&config, dir.path());
        log::error!("shutdown marker 7f3a");
        drop(guard);

        let contents: String = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| fs::read_to_string(entry.path()).ok())
            .collect();
        assert!(contents.contains("shutdown marker 7f3a"));
    }
}
