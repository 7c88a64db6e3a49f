use tracing_subscriber::{
    fmt::{format, time::ChronoLocal},
    EnvFilter,
};

/// Install the global subscriber. `RUST_LOG` overrides the `info` default.
///
/// Logs go to stderr so `--json` output on stdout stays machine-readable.
pub fn init_log() {
    let format = format::format()
        .with_level(true)
        .with_target(false)
        .with_timer(ChronoLocal::new("[%m-%d %H:%M:%S%.3f]".to_string()))
        .compact();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .event_format(format)
        .with_writer(std::io::stderr)
        .init();
}
