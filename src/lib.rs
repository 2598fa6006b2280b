mod credentials;
mod decode;
mod error;
mod render;
mod request;
mod reshape;
mod solar_resource;
mod types;

#[cfg(test)]
mod test_utils;

pub use error::SolarResourceError;
pub use solar_resource::*;

pub use credentials::error::CredentialsError;
pub use credentials::{default_key_file, ApiKey, API_KEY_ENV};

pub use request::error::FetchError;
pub use request::request_builder::{redact_url, SolarResourceRequest, DEFAULT_BASE_URL};
pub use request::transport::{FetchedResponse, Transport};

pub use decode::decoder::{decode, upstream_errors};
pub use decode::error::DecodeError;

pub use reshape::error::ReshapeError;
pub use reshape::reshaper::reshape;

pub use render::chart::{render_svg, render_svg_string, ChartOptions, Y_AXIS_LABEL};
pub use render::csv::write_csv;
pub use render::error::RenderError;
#[cfg(feature = "interactive")]
pub use render::interactive::show_interactive;

pub use types::api_response::{ApiResponse, Inputs, Metadata, Outputs, SeriesData};
pub use types::lat_lon::LatLon;
pub use types::month::{MonthCode, CANONICAL_MONTHS};
pub use types::report::IrradianceReport;
pub use types::tables::long_table::{LongRow, LongTable, SERIES_COLUMN, VALUE_COLUMN};
pub use types::tables::monthly_table::{MonthlyRow, MonthlyTable, MONTH_COLUMN};
