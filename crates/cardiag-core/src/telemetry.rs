//! Tracing initialisation for cardiag binaries.
//!
//! Logs go to stderr so diagnostic lines on stdout stay clean. Without
//! `RUST_LOG`, only cardiag's own targets log at the requested level;
//! everything else is held to `warn`.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Crate targets that follow the requested verbosity.
const CARDIAG_TARGETS: [&str; 2] = ["cardiag_core", "cardiag"];

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(level: Level) -> String {
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        CARDIAG_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level.as_str().to_ascii_lowercase())),
    );
    directives.join(",")
}

/// Initialise the global tracing subscriber.
///
/// * `json` - emit newline-delimited JSON log lines with the record field
///   of each event kept structured.
/// * `level` - verbosity for cardiag targets when `RUST_LOG` is not set.
///
/// Only the first call takes effect.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let layer = fmt::layer()
        .with_target(json)
        .with_writer(std::io::stderr);

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json().flatten_event(true))
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.compact())
            .try_init()
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_scope_cardiag_targets() {
        assert_eq!(
            default_directives(Level::DEBUG),
            "warn,cardiag_core=debug,cardiag=debug"
        );
        assert_eq!(
            default_directives(Level::INFO),
            "warn,cardiag_core=info,cardiag=info"
        );
    }

    #[test]
    fn test_default_directives_parse() {
        let filter = EnvFilter::try_new(default_directives(Level::TRACE));
        assert!(filter.is_ok());
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(false, Level::INFO);
        init_tracing(true, Level::DEBUG);
        tracing::info!("still logging");
    }
}
