//! Diagnostic output on stderr.

use tracing::level_filters::LevelFilter;
use tracing::subscriber::DefaultGuard;

use crate::env::Env;

/// Sends diagnostics up to `level` to the environment's stderr.
///
/// The subscriber stays installed for the current thread until the returned
/// guard is dropped.
pub fn init(env: &impl Env, level: LevelFilter) -> DefaultGuard {
    let stderr = env.stderr();
    let ansi = stderr.is_terminal();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(stderr)
        .with_max_level(level)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_default(subscriber)
}
