//! Server config loader (strict parsing).
//!
//! The file is optional: without one the server runs on defaults
//! (`0.0.0.0:3000`, switch starting at UNKNOWN).

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tallyswitch_core::error::{Result, TallyError};

pub use schema::{ServerConfig, ServerSection, SwitchSection};

/// Default config path, relative to the working directory.
pub const DEFAULT_PATH: &str = "tallyswitch.yaml";
/// Env var overriding [`DEFAULT_PATH`].
pub const PATH_ENV: &str = "TALLYSWITCH_CONFIG";

/// Load config from `$TALLYSWITCH_CONFIG`, or from `tallyswitch.yaml` if present.
pub fn load() -> Result<ServerConfig> {
    match std::env::var(PATH_ENV) {
        Ok(path) => load_from_file(&path),
        Err(_) => load_or_default(DEFAULT_PATH),
    }
}

/// Like [`load_from_file`], but a missing file yields the defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(ServerConfig::default())
        }
        Err(e) => Err(TallyError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TallyError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| TallyError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
