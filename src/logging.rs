use env_logger::{Env, Target};

/// Default filter when `RUST_LOG` is unset; keeps the game screen clean.
const DEFAULT_FILTER: &str = "warn";

/// Install the process-wide logger. Records go to stderr so they never mix
/// with the menu on stdout.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .format_timestamp_millis()
        .init();
}
