use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ReshapeError {
    #[error("Response contains no irradiance series")]
    EmptyOutputs,

    #[error("Series '{series}' has no value for month '{month}'")]
    MissingMonth { series: String, month: &'static str },
}
