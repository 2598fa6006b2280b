use thiserror::Error;

// URLs stored in these variants are always redacted, and reqwest errors are
// stripped of their URL before being wrapped.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid request URL built from base '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}{}", format_errors(.errors))]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        errors: Vec<String>,
    },

    #[error("Expected application/json from {url}, got {}", .content_type.as_deref().unwrap_or("no content type"))]
    UnexpectedContentType {
        url: String,
        content_type: Option<String>,
    },
}

fn format_errors(errors: &[String]) -> String {
    if errors.is_empty() {
        String::new()
    } else {
        format!(": {}", errors.join("; "))
    }
}
