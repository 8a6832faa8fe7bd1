use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber
///
/// The level is read from the `LOGLEVEL` environment variable (`TRACE`,
/// `DEBUG`, `INFO`, `WARN`, `ERROR`) and defaults to `INFO`. Calling this
/// more than once is harmless; only the first call installs a subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let log_level = env::var("LOGLEVEL")
            .unwrap_or_else(|_| "INFO".to_string())
            .to_uppercase();

        let level = match log_level.as_str() {
            "TRACE" => Level::TRACE,
            "DEBUG" => Level::DEBUG,
            "WARN" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("Global subscriber already set");
        }
    });
}
