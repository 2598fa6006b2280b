use crate::credentials::error::CredentialsError;
use crate::decode::error::DecodeError;
use crate::render::error::RenderError;
use crate::request::error::FetchError;
use crate::reshape::error::ReshapeError;
use thiserror::Error;

/// Any failure of the fetch → decode → reshape → render pipeline, labeled by stage.
#[derive(Debug, Error)]
pub enum SolarResourceError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("API reported errors: {}", .0.join("; "))]
    Upstream(Vec<String>),

    #[error("Reshape failed: {0}")]
    Reshape(#[from] ReshapeError),

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("Credential lookup failed: {0}")]
    Credentials(#[from] CredentialsError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
