use crate::credentials::ApiKey;
use crate::request::error::FetchError;
use crate::types::lat_lon::LatLon;
use reqwest::Url;

/// The public NREL endpoint for monthly and annual solar resource averages.
pub const DEFAULT_BASE_URL: &str = "https://developer.nrel.gov/api/solar/solar_resource/v1.json";

const API_KEY_PARAM: &str = "api_key";
const REDACTED: &str = "REDACTED";

/// Query parameters for one Solar Resource API call.
#[derive(Debug, Clone)]
pub struct SolarResourceRequest {
    api_key: ApiKey,
    location: LatLon,
}

impl SolarResourceRequest {
    pub fn new(api_key: ApiKey, location: LatLon) -> Self {
        Self { api_key, location }
    }

    pub fn location(&self) -> LatLon {
        self.location
    }

    /// Appends `api_key`, `lat` and `lon` to `base_url`.
    ///
    /// Coordinates use Rust's shortest round-trip formatting (`40`, `-105`, `39.7425`).
    pub fn url(&self, base_url: &str) -> Result<Url, FetchError> {
        let lat = self.location.lat().to_string();
        let lon = self.location.lon().to_string();
        Url::parse_with_params(
            base_url,
            &[
                (API_KEY_PARAM, self.api_key.expose()),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
            ],
        )
        .map_err(|e| FetchError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Renders `url` with the `api_key` value replaced, for logs and error messages.
pub fn redact_url(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM {
                REDACTED.to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
