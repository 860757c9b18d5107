//! Log initialisation for the command-line front end

use crate::io::configuration::{DEFAULT_LOG_LEVEL, LOG_ENV_VAR};
use env_logger::{Builder, Env};

/// Filter used when the environment does not set one
///
/// Quiet mode only lets warnings and errors through; each verbosity step
/// raises the level from info to debug to trace.
pub const fn default_filter(quiet: bool, verbosity: u8) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbosity {
        0 => DEFAULT_LOG_LEVEL,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global logger
///
/// `UNSHRED_LOG` takes precedence over the flags. Returns `false` when a
/// logger was already installed, which leaves the existing one in place.
pub fn init_logging(quiet: bool, verbosity: u8) -> bool {
    let env = Env::default().filter_or(LOG_ENV_VAR, default_filter(quiet, verbosity));
    Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .is_ok()
}
