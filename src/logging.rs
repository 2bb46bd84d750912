//! Tracing setup for the binary: stdout always, plus a plain-text log file
//! under a `logs/` directory when one is requested. A log file that has grown
//! past [`MAX_LOG_FILE_BYTES`] is moved aside on startup.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "voisia_bridge=info";
pub const LOG_FILE_NAME: &str = "voisia-bridge.log";
pub const MAX_LOG_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// Return `base/logs`, creating it if needed.
pub fn ensure_logs_dir(base: &Path) -> std::io::Result<PathBuf> {
    let logs_dir = base.join("logs");
    std::fs::create_dir_all(&logs_dir)?;
    Ok(logs_dir)
}

/// Rename an oversized log file to the first free `voisia-bridge.log.N`.
/// Returns the new path when the file was moved.
pub fn rotate_if_oversized(logs_dir: &Path, max_bytes: u64) -> std::io::Result<Option<PathBuf>> {
    let current = logs_dir.join(LOG_FILE_NAME);
    let size = match std::fs::metadata(&current) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    if size <= max_bytes {
        return Ok(None);
    }

    let rotated = (1..)
        .map(|n| logs_dir.join(format!("{LOG_FILE_NAME}.{n}")))
        .find(|path| !path.exists())
        .unwrap_or_else(|| logs_dir.join(format!("{LOG_FILE_NAME}.old")));
    std::fs::rename(&current, &rotated)?;
    Ok(Some(rotated))
}

fn open_log_file(logs_dir: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(logs_dir.join(LOG_FILE_NAME))
}

/// Install the global subscriber. `RUST_LOG` overrides [`DEFAULT_FILTER`].
///
/// With `log_base` set, events are also appended to `log_base/logs/voisia-bridge.log`.
/// Returns the log file path when file logging is active.
pub fn init_tracing(log_base: Option<&Path>) -> std::io::Result<Option<PathBuf>> {
    let file = match log_base {
        Some(base) => {
            let logs_dir = ensure_logs_dir(base)?;
            rotate_if_oversized(&logs_dir, MAX_LOG_FILE_BYTES)?;
            Some((open_log_file(&logs_dir)?, logs_dir.join(LOG_FILE_NAME)))
        }
        None => None,
    };

    let (file_layer, file_path) = match file {
        Some((file, path)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            ),
            Some(path),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(file_path)
}
