//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Filter directive for a verbosity count; `-v` flags override the
/// configured level.
pub fn filter_directive(configured: &str, verbose: u8) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so that command output
/// on stdout stays machine-readable.
pub fn init(config: &LoggingConfig, verbose: u8) {
    let filter = EnvFilter::try_new(filter_directive(&config.level, verbose))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match config.format.as_str() {
        "json" => builder.json().init(),
        _ => builder.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_overrides_level() {
        assert_eq!(filter_directive("error", 0), "error");
        assert_eq!(filter_directive("error", 1), "info");
        assert_eq!(filter_directive("error", 2), "debug");
        assert_eq!(filter_directive("error", 7), "trace");
    }
}
