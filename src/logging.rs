//! Tracing subscriber setup.
//!
//! Logs go to stderr. The filter comes from `RUST_LOG` when set, otherwise
//! from the configured log level.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Build the filter for `config`, preferring `RUST_LOG` when it parses.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"))
}

/// Install the global stderr subscriber.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is kept.
pub fn init(config: &Config) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_falls_back_on_bad_level() {
        let config = Config {
            log_level: "not a [valid] directive".to_string(),
            ..Config::default()
        };
        // Must not panic whatever RUST_LOG holds.
        let _ = env_filter(&config);
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = Config::default();
        let _ = init(&config);
        assert!(!init(&config));
    }
}
