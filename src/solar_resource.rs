//! This module provides the main entry point for the Solar Resource API client.
//! It fetches the monthly irradiance averages for a latitude/longitude and turns
//! them into an [`IrradianceReport`].

use crate::credentials::ApiKey;
use crate::error::SolarResourceError;
use crate::request::request_builder::{SolarResourceRequest, DEFAULT_BASE_URL};
use crate::request::transport::{FetchedResponse, Transport};
use crate::types::lat_lon::LatLon;
use crate::types::report::IrradianceReport;
use bon::bon;
use reqwest::Client;

/// The main client struct for the NREL Solar Resource API.
///
/// A client holds the API key, the endpoint and a reusable HTTP client. Each
/// call issues exactly one GET request; there is no caching and no retrying.
///
/// Create an instance with [`SolarResource::builder()`].
///
/// # Examples
///
/// ```no_run
/// # use nrel_solar::{ApiKey, LatLon, SolarResource, SolarResourceError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), SolarResourceError> {
/// let client = SolarResource::builder()
///     .api_key(ApiKey::new("DEMO_KEY")?)
///     .build()?;
///
/// let report = client.monthly().location(LatLon(40.0, -105.0)).call().await?;
/// println!("{}", report.table.to_dataframe().expect("valid frame"));
/// # Ok(())
/// # }
/// ```
pub struct SolarResource {
    api_key: ApiKey,
    transport: Transport,
}

#[bon]
impl SolarResource {
    /// Creates a new `SolarResource` client.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.api_key(ApiKey)`: **Required.** The NREL developer key sent with every request.
    /// * `.base_url(String)`: Optional. Endpoint to query. Defaults to [`DEFAULT_BASE_URL`].
    /// * `.http_client(reqwest::Client)`: Optional. A preconfigured client, e.g. with a proxy
    ///   or a timeout. Defaults to `reqwest::Client` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`SolarResourceError::HttpClient`] if the default HTTP client cannot be built
    /// (for example when the TLS backend fails to initialize).
    #[builder]
    pub fn new(
        api_key: ApiKey,
        base_url: Option<String>,
        http_client: Option<Client>,
    ) -> Result<Self, SolarResourceError> {
        let client = match http_client {
            Some(client) => client,
            None => Client::builder()
                .build()
                .map_err(SolarResourceError::HttpClient)?,
        };
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            api_key,
            transport: Transport::new(client, base_url),
        })
    }

    /// The endpoint this client queries.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Issues the request for `location` and returns the raw response.
    ///
    /// No status or content-type check happens here, so callers can show
    /// those for diagnostics before processing. Pass the result to
    /// [`IrradianceReport::from_response`] to continue the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`SolarResourceError::Fetch`] if the server cannot be reached or
    /// the body cannot be read.
    pub async fn fetch(&self, location: LatLon) -> Result<FetchedResponse, SolarResourceError> {
        let request = SolarResourceRequest::new(self.api_key.clone(), location);
        Ok(self.transport.fetch(&request).await?)
    }

    /// Fetches the monthly averages for a location and reshapes them into a table.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The coordinates to query.
    ///
    /// # Returns
    ///
    /// An [`IrradianceReport`] whose table has twelve rows in calendar order
    /// and one column per series the API returned (`avg_dni`, `avg_ghi`,
    /// `avg_lat_tilt`).
    ///
    /// # Errors
    ///
    /// The variant names the failed stage:
    ///   - [`SolarResourceError::Fetch`] for network problems, a non-200 status or a non-JSON body.
    ///   - [`SolarResourceError::Decode`] for malformed JSON or an unexpected response shape.
    ///   - [`SolarResourceError::Upstream`] when the API lists errors in its response.
    ///   - [`SolarResourceError::Reshape`] when a series is missing months or there are no series.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use nrel_solar::{ApiKey, LatLon, SolarResource, SolarResourceError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), SolarResourceError> {
    /// let client = SolarResource::builder().api_key(ApiKey::from_env()?).build()?;
    /// let golden = LatLon(39.74, -105.18);
    ///
    /// let report = client.monthly().location(golden).call().await?;
    /// for row in report.table.rows() {
    ///     println!("{} {:?}", row.label(), row.values);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn monthly(&self, location: LatLon) -> Result<IrradianceReport, SolarResourceError> {
        let fetched = self.fetch(location).await?;
        IrradianceReport::from_response(fetched, location)
    }
}
