use crate::decode::decoder::decode;
use crate::error::SolarResourceError;
use crate::render::chart::ChartOptions;
use crate::request::transport::FetchedResponse;
use crate::reshape::reshaper::reshape;
use crate::types::api_response::ApiResponse;
use crate::types::lat_lon::LatLon;
use crate::types::tables::monthly_table::MonthlyTable;
use log::warn;

/// Outcome of a successful run: the monthly table plus the response metadata
/// worth keeping once the raw response is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct IrradianceReport {
    /// Location as echoed by the API, or as requested if the echo is unusable.
    pub location: LatLon,
    pub version: String,
    pub sources: Vec<String>,
    pub warnings: Vec<String>,
    pub table: MonthlyTable,
}

impl IrradianceReport {
    /// Checks status and content type, decodes the body and reshapes it.
    ///
    /// `requested` is the location that was asked for; it is used for the
    /// report only when the response does not echo valid coordinates.
    pub fn from_response(
        fetched: FetchedResponse,
        requested: LatLon,
    ) -> Result<Self, SolarResourceError> {
        let fetched = fetched.ensure_success()?;
        let response = decode(&fetched.body)?;
        Self::from_api_response(response, requested)
    }

    /// Builds the report from an already decoded response.
    ///
    /// A non-empty `errors` list fails the run with
    /// [`SolarResourceError::Upstream`]. Warnings are logged and kept.
    pub fn from_api_response(
        response: ApiResponse,
        requested: LatLon,
    ) -> Result<Self, SolarResourceError> {
        if !response.errors.is_empty() {
            return Err(SolarResourceError::Upstream(response.errors));
        }
        for warning in &response.warnings {
            warn!("API warning: {}", warning);
        }

        let table = reshape(&response.outputs)?;
        Ok(Self {
            location: response.inputs.location().unwrap_or(requested),
            version: response.version,
            sources: response.metadata.sources,
            warnings: response.warnings,
            table,
        })
    }

    /// Chart options titled with this report's location.
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions::for_location(self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::error::DecodeError;
    use crate::request::error::FetchError;
    use crate::reshape::error::ReshapeError;
    use crate::test_utils::SAMPLE_RESPONSE;
    use reqwest::StatusCode;

    const REQUESTED: LatLon = LatLon(40.0, -105.0);

    fn fetched(status: u16, body: &str) -> FetchedResponse {
        FetchedResponse {
            url: "http://localhost/v1.json?api_key=REDACTED".to_string(),
            status: StatusCode::from_u16(status).unwrap(),
            content_type: Some("application/json; charset=utf-8".to_string()),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_report_from_sample() -> Result<(), SolarResourceError> {
        let report = IrradianceReport::from_response(fetched(200, SAMPLE_RESPONSE), LatLon(0.0, 0.0))?;
        assert_eq!(report.location, LatLon(40.0, -105.0));
        assert_eq!(report.version, "1.0.0");
        assert_eq!(report.sources, ["Perez-SUNY/NREL, 2012"]);
        assert!(report.warnings.is_empty());
        assert_eq!(report.table.height(), 12);
        assert_eq!(report.table.width(), 4);
        assert_eq!(report.chart_options().title, "Solar irradiance at 40°N, 105°W");
        Ok(())
    }

    #[test]
    fn test_requested_location_used_without_echo() -> Result<(), SolarResourceError> {
        let mut response = decode(SAMPLE_RESPONSE)?;
        response.inputs.lat = None;
        let report = IrradianceReport::from_api_response(response, LatLon(1.5, 2.5))?;
        assert_eq!(report.location, LatLon(1.5, 2.5));
        Ok(())
    }

    #[test]
    fn test_warnings_are_kept() -> Result<(), SolarResourceError> {
        let mut response = decode(SAMPLE_RESPONSE)?;
        response.warnings = vec!["location is near a dataset boundary".to_string()];
        let report = IrradianceReport::from_api_response(response, REQUESTED)?;
        assert_eq!(report.warnings.len(), 1);
        Ok(())
    }

    #[test]
    fn test_each_stage_reports_its_own_error() {
        let err = IrradianceReport::from_response(fetched(403, "{}"), REQUESTED).unwrap_err();
        assert!(matches!(
            err,
            SolarResourceError::Fetch(FetchError::HttpStatus { .. })
        ));
        assert!(err.to_string().starts_with("Fetch failed"));

        let err = IrradianceReport::from_response(fetched(200, "not json"), REQUESTED).unwrap_err();
        assert!(matches!(
            err,
            SolarResourceError::Decode(DecodeError::MalformedJson(_))
        ));
        assert!(err.to_string().starts_with("Decode failed"));

        let no_data = r#"{"outputs": {"avg_dni": "no data"}}"#;
        let err = IrradianceReport::from_response(fetched(200, no_data), REQUESTED).unwrap_err();
        assert!(matches!(err, SolarResourceError::Decode(DecodeError::Schema(_))));

        let rejected = r#"{"errors": ["lat is out of range"], "outputs": {}}"#;
        let err = IrradianceReport::from_response(fetched(200, rejected), REQUESTED).unwrap_err();
        assert!(matches!(&err, SolarResourceError::Upstream(e) if e == &["lat is out of range"]));

        let empty = r#"{"outputs": {}}"#;
        let err = IrradianceReport::from_response(fetched(200, empty), REQUESTED).unwrap_err();
        assert!(matches!(
            err,
            SolarResourceError::Reshape(ReshapeError::EmptyOutputs)
        ));
        assert!(err.to_string().starts_with("Reshape failed"));

        let partial = r#"{"outputs": {"avg_dni": {"annual": 1.0, "monthly": {"jan": 1.0}}}}"#;
        let err = IrradianceReport::from_response(fetched(200, partial), REQUESTED).unwrap_err();
        assert!(matches!(
            err,
            SolarResourceError::Reshape(ReshapeError::MissingMonth { month: "feb", .. })
        ));
    }
}
