//! Diagnostic output for the `cds` binary.
//!
//! Token and integer results go to stdout; all log events go to stderr so
//! the output can be piped.

use tracing_subscriber::EnvFilter;

/// Workspace crates whose events are shown.
const CRATE_TARGETS: &[&str] = &["cds", "cds_base58", "cds_datecode"];

/// Maps the `-v` count to a level: warn, info, debug, then trace.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds `target=level` directives for every workspace crate.
fn directives(verbosity: u8) -> String {
    let level = level(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(
            directives(0),
            "cds=warn,cds_base58=warn,cds_datecode=warn"
        );
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level(1), "info");
        assert_eq!(level(2), "debug");
        assert_eq!(level(3), "trace");
        assert_eq!(level(200), "trace");
    }

    #[test]
    fn directives_parse_as_filter() {
        for v in 0..4 {
            assert!(directives(v).parse::<EnvFilter>().is_ok());
        }
    }
}
