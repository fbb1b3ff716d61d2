use crate::{Error, Result};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Builds the log filter: a `RUST_LOG` value is taken as full filter
/// directives, otherwise the configured level applies to everything.
pub fn build_filter(rust_log: Option<&str>, configured_level: &str) -> Result<EnvFilter> {
    match rust_log {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| Error::config(format!("Invalid RUST_LOG '{}': {}", directives, e))),
        None => {
            let level = configured_level.parse::<LevelFilter>().map_err(|_| {
                Error::config(format!(
                    "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                    configured_level
                ))
            })?;
            Ok(EnvFilter::default().add_directive(level.into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_accepted() {
        let filter = build_filter(None, "debug").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_configured_level_must_be_a_level() {
        let err = build_filter(None, "loud").unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_rust_log_accepts_per_target_directives() {
        let filter = build_filter(Some("slang_translator=debug,tower_http=info"), "info");
        assert!(filter.is_ok());
    }

    #[test]
    fn test_rust_log_garbage_rejected() {
        assert!(build_filter(Some("slang_translator=shouty"), "info").is_err());
    }
}
