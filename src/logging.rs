// src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable: planner milestones
/// (inputs loaded, schedule exported) at info, everything else at warn.
pub const DEFAULT_DIRECTIVES: &str = "warn,lot_sizing=info";

/// Installs the planner binary's subscriber.
///
/// Log lines go to stderr so the cost table and schedule printed on stdout
/// can be piped untouched. `RUST_LOG=lot_sizing=debug` adds one event per
/// solved horizon (`Z*_t`, `j*_t`); `lot_sizing=trace` adds every priced
/// `(k, t)` fragment.
pub fn init() {
    fmt()
        .with_env_filter(filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}

fn filter_from(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Per-horizon planner events routed through the test harness writer.
/// Safe to call from every test; only the first call installs it.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("lot_sizing=debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::solve;

    #[test]
    fn missing_or_bad_directives_fall_back_to_default() {
        assert!(filter_from(None).to_string().contains("lot_sizing=info"));
        assert!(filter_from(Some("lot_sizing=loudest".into()))
            .to_string()
            .contains("lot_sizing=info"));
        assert!(filter_from(Some("lot_sizing=trace".into()))
            .to_string()
            .contains("lot_sizing=trace"));
    }

    #[test]
    fn test_subscriber_tolerates_repeat_installs() {
        init_test();
        init_test();
        let solution = solve(&[10.0, 10.0, 10.0], 50.0, 1.0).unwrap();
        assert_eq!(solution.total_cost, 80.0);
    }
}
