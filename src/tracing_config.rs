//! Tracing initialization for CLI and long-running use.

use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for interactive CLI commands
///
/// Logs go to stderr at warn level by default so command output on stdout
/// stays clean and scriptable.
///
/// # Errors
/// Returns error if tracing subscriber initialization fails
pub fn init_cli_mode() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}

/// Initialize tracing with file output
///
/// Similar to [`init_cli_mode`] but logs at info level and also writes to a
/// rolling file in the docsite logs directory in addition to stdout.
///
/// # Errors
/// Returns error if file creation or tracing subscriber initialization fails
pub fn init_with_file() -> Result<(), Box<dyn std::error::Error>> {
    const DAYS_TO_KEEP: usize = 7;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_dir = crate::config::ConfigPaths::log_dir()?;

    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("docsite")
        .filename_suffix("log")
        .build(&log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let format = env::var("DOCSITE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stdout),
                )
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stdout),
                )
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .try_init()?;
        }
    }

    // Keep the appender guard alive for the life of the process.
    std::mem::forget(guard);

    Ok(())
}
