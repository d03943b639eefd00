use eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .wrap_err("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre::eyre!(e))
        .wrap_err("failed to install logger")
}
