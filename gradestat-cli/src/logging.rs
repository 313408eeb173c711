use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber, writing to stderr.
///
/// The filter comes from `RUST_LOG`; `verbose` raises the default from
/// `warn` to `debug`. Calling this twice is harmless.
pub fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
