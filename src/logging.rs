// In: src/logging.rs

//! Process-wide logger setup for binaries and harnesses that use jabl.
//!
//! The library itself only emits `debug`/`trace` records through the `log`
//! facade; nothing is printed unless the embedding program installs a logger,
//! for example with `init_logging`.

use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::Once;

use log::LevelFilter;

use crate::config::LoggingConfig;
use crate::error::JablError;

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` with a compact `[LEVEL] message` format.
///
/// Only the first call in a process has any effect; the log file is opened by
/// that call alone. Fails if the level name is unknown or the log file cannot
/// be opened for appending.
pub fn init_logging(config: &LoggingConfig) -> Result<(), JablError> {
    let level = LevelFilter::from_str(&config.level)
        .map_err(|_| JablError::Config(format!("unknown log level `{}`", config.level)))?;

    let mut result = Ok(());
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(path) = &config.log_file {
            match OpenOptions::new().append(true).create(true).open(path) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(err) => {
                    result = Err(JablError::Io(err));
                    return;
                }
            }
        }

        let _ = builder.try_init();
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_is_rejected() {
        let config = LoggingConfig {
            level: "chatty".to_string(),
            log_file: None,
        };
        assert!(matches!(init_logging(&config), Err(JablError::Config(_))));
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();
        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&config).is_ok());
    }

    #[test]
    fn test_later_calls_do_not_touch_log_file() {
        assert!(init_logging(&LoggingConfig::default()).is_ok());

        let path = std::env::temp_dir().join(format!(
            "jabl-unused-log-{}.log",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let config = LoggingConfig {
            level: "debug".to_string(),
            log_file: Some(path.clone()),
        };
        assert!(init_logging(&config).is_ok());
        assert!(!path.exists());
    }
}
