// src/logging.rs

use crate::errors::{MaraiError, MaraiResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts file-based logging. The TUI owns the terminal, so nothing may be
/// written to stdout/stderr while it runs; everything goes to `marai_*.log`
/// under `log_dir`. Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init(log_dir: &str) -> MaraiResult<LoggerHandle> {
    Logger::try_with_env_or_str("info")
        .map_err(|e| MaraiError::config_error(format!("bad log spec: {}", e)))?
        .log_to_file(FileSpec::default().directory(log_dir).basename("marai"))
        .start()
        .map_err(|e| MaraiError::config_error(format!("failed to start logger: {}", e)))
}
