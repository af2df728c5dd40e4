//! Logging bootstrap

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when no level is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Map common level spellings onto tracing's lowercase names
pub fn normalise_level(log_level: &str) -> String {
    match log_level.trim().to_lowercase().as_str() {
        "" => DEFAULT_LOG_LEVEL.to_string(),
        "warning" => "warn".to_string(),
        "critical" => "error".to_string(),
        other => other.to_string(),
    }
}

/// Initialise the global `tracing` subscriber
///
/// `log_level` is mapped to an [`EnvFilter`] directive, falling back to
/// [`DEFAULT_LOG_LEVEL`] if it does not parse. Log lines go to stderr so they
/// never interleave with menu output on stdout.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(normalise_level(log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_level() {
        assert_eq!(normalise_level("DEBUG"), "debug");
        assert_eq!(normalise_level("Warning"), "warn");
        assert_eq!(normalise_level("critical"), "error");
        assert_eq!(normalise_level("  "), DEFAULT_LOG_LEVEL);
        assert_eq!(normalise_level("info"), "info");
    }
}
