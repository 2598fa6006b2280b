pub mod chart;
pub mod csv;
pub mod error;
#[cfg(feature = "interactive")]
pub mod interactive;
