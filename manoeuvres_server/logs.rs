use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging: a console layer on stderr, keeping stdout free for the
/// report, and a daily rotating file in `logs/`.
///
/// Log levels come from `RUST_LOG`, defaulting to `info` for everything and
/// `debug` for the manoeuvres crates.
pub fn setup_logging() {
    let file_appender = tracing_appender::rolling::daily("logs", "manoeuvres.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true);

    let default_filter = "info,manoeuvres=debug,manoeuvres_app=debug,manoeuvres_game=debug";

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // The file writer stops flushing once the guard drops.
    std::mem::forget(guard);
}
