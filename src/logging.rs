//! Tracing setup
//!
//! The alternate screen owns stdout and stderr, so events go to a log file.

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// Install the global subscriber
///
/// The returned guard flushes pending lines on drop and must outlive the UI.
/// Without a resolvable log path nothing is installed.
pub fn init(config: &TuiConfig) -> Result<Option<WorkerGuard>> {
    let Some(path) = config.log_file() else {
        return Ok(None);
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into());
    let (subscriber, guard) = file_subscriber(&path, filter)?;
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!(path = %path.display(), "Logging initialised");
    Ok(Some(guard))
}

fn file_subscriber(
    path: &Path,
    filter: EnvFilter,
) -> Result<(impl Subscriber + Send + Sync, WorkerGuard)> {
    let (dir, file_name) = split_log_path(path)?;
    fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(non_blocking),
    );
    Ok((subscriber, guard))
}

fn split_log_path(path: &Path) -> Result<(&Path, &OsStr)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    Ok((dir, file_name))
}
