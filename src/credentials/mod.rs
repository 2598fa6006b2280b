//! API key handling.
//!
//! The key is an explicit value handed to [`crate::SolarResource`]. The lookup
//! helpers here are meant for the edge of an application (the CLI uses them);
//! nothing else in the crate reads the environment or the filesystem for it.

pub mod error;

use crate::credentials::error::CredentialsError;
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable checked by [`ApiKey::from_env`].
pub const API_KEY_ENV: &str = "NREL_API_KEY";

const CONFIG_DIR_NAME: &str = "nrel_solar";
const KEY_FILE_NAME: &str = "api_key";

/// An NREL developer API key.
///
/// The `Debug` output is redacted and there is no `Display`, so the key does
/// not end up in logs by accident.
///
/// # Examples
///
/// ```
/// use nrel_solar::ApiKey;
///
/// let key = ApiKey::new("  DEMO_KEY\n")?;
/// assert_eq!(key.expose(), "DEMO_KEY");
/// assert_eq!(format!("{:?}", key), "ApiKey(****)");
/// # Ok::<(), nrel_solar::CredentialsError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a key, trimming surrounding whitespace. Empty keys are rejected.
    pub fn new(key: impl AsRef<str>) -> Result<Self, CredentialsError> {
        let key = key.as_ref().trim();
        if key.is_empty() {
            return Err(CredentialsError::EmptyKey);
        }
        Ok(Self(key.to_string()))
    }

    /// The raw key, for building the request URL.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Reads the key from `NREL_API_KEY`.
    pub fn from_env() -> Result<Self, CredentialsError> {
        let value = std::env::var(API_KEY_ENV)
            .map_err(|e| CredentialsError::EnvVar(API_KEY_ENV, e))?;
        Self::new(value)
    }

    /// Reads the key from the first line of a file.
    pub fn from_file(path: &Path) -> Result<Self, CredentialsError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CredentialsError::KeyFileRead(path.to_path_buf(), e))?;
        debug!("Read API key from {}", path.display());
        let first_line = contents.lines().next().unwrap_or("");
        Self::new(first_line).map_err(|_| CredentialsError::EmptyKeyFile(path.to_path_buf()))
    }

    /// Resolves the key from the environment, then from the default key file.
    pub fn resolve() -> Result<Self, CredentialsError> {
        match Self::from_env() {
            Ok(key) => Ok(key),
            Err(CredentialsError::EnvVar(..)) | Err(CredentialsError::EmptyKey) => {
                let path = default_key_file()?;
                if !path.exists() {
                    return Err(CredentialsError::NotFound(path));
                }
                Self::from_file(&path)
            }
            Err(e) => Err(e),
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// `<config dir>/nrel_solar/api_key`, e.g. `~/.config/nrel_solar/api_key` on Linux.
pub fn default_key_file() -> Result<PathBuf, CredentialsError> {
    dirs::config_dir()
        .map(|p| key_file_in(&p))
        .ok_or(CredentialsError::ConfigDirResolution)
}

fn key_file_in(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_DIR_NAME).join(KEY_FILE_NAME)
}
