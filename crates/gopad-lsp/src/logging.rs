use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the stderr logger.
///
/// stdout carries the LSP stream, so nothing is ever written there.
///
/// # Arguments
/// * `no_color` - Disable ANSI colors in stderr output
/// * `log_level` - Override log level (otherwise uses RUST_LOG or defaults to "info")
pub fn init_logger(no_color: bool, log_level: Option<&str>) -> anyhow::Result<()> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).try_init()?;

    Ok(())
}
