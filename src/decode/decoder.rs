use crate::decode::error::DecodeError;
use crate::types::api_response::ApiResponse;
use log::debug;
use serde::Deserialize;
use serde_json::error::Category;

/// Parses a raw response body into an [`ApiResponse`].
///
/// The body is read straight into the typed response, so duplicate series
/// names in `outputs` are seen and rejected. The error category tells the two
/// failures apart: text that is not JSON at all gives
/// [`DecodeError::MalformedJson`], JSON of the wrong shape (missing `outputs`,
/// `"no data"` in place of a series, a repeated series, ...) gives
/// [`DecodeError::Schema`]. Series order in `outputs` is kept as sent.
pub fn decode(raw: &str) -> Result<ApiResponse, DecodeError> {
    let response = serde_json::from_str::<ApiResponse>(raw).map_err(|e| match e.classify() {
        Category::Data => DecodeError::Schema(e),
        Category::Syntax | Category::Eof | Category::Io => DecodeError::MalformedJson(e),
    })?;
    debug!(
        "Decoded response version '{}' with {} series",
        response.version,
        response.outputs.len()
    );
    Ok(response)
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<String>,
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    code: Option<String>,
    message: Option<String>,
}

/// Best-effort extraction of the error messages from a failed response body.
///
/// Understands both the `{"errors": [...]}` form used by the resource API and
/// the `{"error": {"code", "message"}}` form the gateway returns for key
/// problems. Anything else yields an empty list.
pub fn upstream_errors(raw: &str) -> Vec<String> {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(raw) else {
        return Vec::new();
    };
    let mut errors = envelope.errors;
    if let Some(detail) = envelope.error {
        match (detail.code, detail.message) {
            (Some(code), Some(message)) => errors.push(format!("{}: {}", code, message)),
            (Some(text), None) | (None, Some(text)) => errors.push(text),
            (None, None) => {}
        }
    }
    errors
}
