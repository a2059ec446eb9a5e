use crate::config::Config;
use anyhow::Context;
use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    layer::SubscriberExt,
    EnvFilter,
};

/// Try to setup a logger.
///
/// Logs go to the stderr, and to the config's log file if one is set.
/// `RUST_LOG` overrides the config's log filter.
///
/// # Returns
/// Returns the guard for the log file writer, if there is one.
/// It must be held until shutdown, or buffered logs may be lost.
pub fn setup(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_error) => {
            EnvFilter::try_new(&config.log_filter).context("failed to parse log filter")?
        }
    };

    let (file_formatting_layer, worker_guard) = match config.log_file.as_deref() {
        Some(log_file) => {
            let file_name = log_file.file_name().context("log file has no file name")?;
            let dir = log_file
                .parent()
                .filter(|dir| !dir.as_str().is_empty())
                .unwrap_or_else(|| Utf8Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log dir `{dir}`"))?;

            let file_appender = tracing_appender::rolling::never(dir, file_name);
            let (file_writer, worker_guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer);

            (Some(layer), Some(worker_guard))
        }
        None => (None, None),
    };
    let stderr_formatting_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(file_formatting_layer)
        .with(stderr_formatting_layer);

    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    Ok(worker_guard)
}
