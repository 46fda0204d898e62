/// Initializes the tracing/logging infrastructure for the application.
///
/// Structured logging via the `tracing` crate, filtered through the
/// `RUST_LOG` environment variable:
/// - `RUST_LOG=info` - lifecycle events and fulfilled orders
/// - `RUST_LOG=debug` - every request, phase entry and timer
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
