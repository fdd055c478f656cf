use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter, e.g. `ddlweave_lib=trace`.
pub const LOG_ENV: &str = "DDLWEAVE_LOG";

/// Install the stderr subscriber. `DDLWEAVE_LOG` wins over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .init();
}

pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
