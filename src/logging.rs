//! Logging initialization utilities.

use env_logger::{Env, Target};

/// Initialize logging with a default filter level.
///
/// `RUST_LOG` takes precedence over `default_level`. Output goes to stderr so
/// the exported JSON on stdout is never interleaved with log lines.
pub fn init(default_level: &str) {
    let env = Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .target(Target::Stderr)
        .try_init();
}

/// Pick the default filter for the CLI verbosity flags.
pub fn default_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::default_level;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(default_level(true, true), "error");
        assert_eq!(default_level(true, false), "debug");
        assert_eq!(default_level(false, false), "info");
    }
}
