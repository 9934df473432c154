//! Error handling for critline.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod numeric_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::CritlineErrorCode;
pub use numeric_error::NumericError;
pub use scan_error::ScanError;
