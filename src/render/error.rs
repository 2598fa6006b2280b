use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Table has no series to draw")]
    EmptyTable,

    // plotters errors are generic over the backend, so only the message is kept
    #[error("Failed to draw chart: {0}")]
    Drawing(String),

    #[error("Failed to create output file '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed building DataFrame for output")]
    Polars(#[from] PolarsError),
}
