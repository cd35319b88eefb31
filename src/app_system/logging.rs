/// Configure tracing once for the whole process.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`:
/// ```bash
/// RUST_LOG=debug order_lookup b563feb7b2b84b6test
/// RUST_LOG=order_lookup::lookup_actor=debug,info order_lookup
/// ```
///
/// Logs go to stderr; stdout carries the rendered lookup view only.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
