pub mod error;
pub mod request_builder;
pub mod transport;
