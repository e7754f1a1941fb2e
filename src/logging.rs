use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `info`, or at
/// `debug` together with per-request HTTP traces when `verbose` is set.
pub fn init(verbose: bool) {
    let default_directives = if verbose {
        "library=debug,tower_http=debug"
    } else {
        "library=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
