//! Logger bootstrap for the game binary and tests.
//!
//! Bevy's own `LogPlugin` is disabled by the binary so that `env_logger`
//! owns the global `log` facade.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Crates whose info-level output drowns the game's own diagnostics.
const NOISY_MODULES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

/// Initializes the global logger.
///
/// When `verbose` is `true`, all debug messages are printed. Otherwise only
/// info level and above are shown. `RUST_LOG` overrides the default level
/// for the game's own modules.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    for module in NOISY_MODULES {
        builder.filter_module(module, LevelFilter::Warn);
    }

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}
