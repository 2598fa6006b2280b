pub mod error;
pub mod reshaper;
