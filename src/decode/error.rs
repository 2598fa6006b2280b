use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Response body is not valid JSON")]
    MalformedJson(#[source] serde_json::Error),

    // Valid JSON, but not the expected response shape
    #[error("Response JSON does not match the expected schema: {0}")]
    Schema(#[source] serde_json::Error),
}
