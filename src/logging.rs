//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so they never mix with a password printed
//! on stdout.  User-facing messages use `cli::output` instead.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `-v` flags win over the configured level.
pub fn filter_directive(verbosity: u8, configured: &str) -> String {
    let level = match verbosity {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("pwvault={level},warn")
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over everything else.  Safe to call more
/// than once; later calls are ignored.
pub fn init(verbosity: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity, configured)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_used_without_flags() {
        assert_eq!(filter_directive(0, "warn"), "pwvault=warn,warn");
        assert_eq!(filter_directive(0, "error"), "pwvault=error,warn");
    }

    #[test]
    fn verbosity_flags_raise_level() {
        assert_eq!(filter_directive(1, "warn"), "pwvault=info,warn");
        assert_eq!(filter_directive(2, "warn"), "pwvault=debug,warn");
        assert_eq!(filter_directive(5, "warn"), "pwvault=trace,warn");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0, "warn");
        init(2, "warn");
    }
}
