//! Request, candidate, and result models exchanged with scan consumers.

pub mod detection_mode;
pub mod known_zeros;
pub mod scan_request;
pub mod scan_result;
pub mod zero_candidate;

pub use detection_mode::DetectionMode;
pub use known_zeros::{nearest_known_zero, KNOWN_ZEROS};
pub use scan_request::ScanRequest;
pub use scan_result::ScanResult;
pub use zero_candidate::ZeroCandidate;
