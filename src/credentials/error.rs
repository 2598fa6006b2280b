use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("API key is empty")]
    EmptyKey,

    #[error("Environment variable {0} is not usable")]
    EnvVar(&'static str, #[source] std::env::VarError),

    #[error("Failed to read API key file '{0}'")]
    KeyFileRead(PathBuf, #[source] std::io::Error),

    #[error("API key file '{0}' is empty")]
    EmptyKeyFile(PathBuf),

    #[error("Failed to determine config directory")]
    ConfigDirResolution,

    #[error("No API key given: set NREL_API_KEY, pass --api-key, or create '{0}'")]
    NotFound(PathBuf),
}
