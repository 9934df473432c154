//! # critline-scan
//!
//! Locates approximate zeros of the Riemann zeta function on the critical
//! line `Re(s) = 1/2`. The function is sampled on a uniform grid and
//! samples whose magnitude falls below a threshold are reported.
//!
//! Evaluation runs in binary fixed-point arithmetic whose precision is a
//! per-scan [`WorkingPrecision`] value; no global state is touched, so
//! scans at different precisions can run concurrently.

pub mod cache;
pub mod control;
pub mod detect;
pub mod engine;
pub mod grid;
pub mod precision;
pub mod refine;
pub mod zeta;

pub use cache::{ScanCache, ScanKey};
pub use control::ScanControl;
pub use engine::{ScanParams, ZeroScanner};
pub use grid::sample_grid;
pub use precision::{ComplexFixed, Fixed, WorkingPrecision};
pub use zeta::{zeta, LineEvaluator};
