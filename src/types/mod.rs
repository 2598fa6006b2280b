pub mod api_response;
pub mod lat_lon;
pub mod month;
pub mod tables;
pub mod report;
