mod element;
pub use element::ORGANIC_SUBSET;

mod molecule;
pub use molecule::*;

mod parse;
pub use parse::*;

mod policy;
pub use policy::RulePolicy;

mod visualize;
pub use visualize::*;

use tracing::metadata::LevelFilter;

/// Installs a `tracing` subscriber printing at `level` (`trace`, `debug`,
/// `info`, `warn`, `error` or `off`). Unknown levels fall back to `info`.
/// Calling it again is a no-op.
pub fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    let _ = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .try_init();
}
