//! Diagnostic logging setup for the command-line front end

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub const fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "off";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber
///
/// `RUST_LOG` takes precedence over the verbosity flags. Returns `false` if a
/// global subscriber was already installed.
pub fn init(verbosity: u8, quiet: bool) -> bool {
    let filter = if quiet {
        EnvFilter::new(level_for(verbosity, quiet))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, quiet)))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
