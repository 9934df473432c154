/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Real part of every sampled point. The critical line is fixed, not derived.
pub const CRITICAL_LINE_RE: f64 = 0.5;

/// Number of uniform samples over `[0, max_imaginary]`.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Absolute magnitude below which a sample counts as a near-zero.
pub const DEFAULT_THRESHOLD: f64 = 1e-3;

/// Lowest precision the scanner accepts by default (decimal digits).
pub const DEFAULT_MIN_PRECISION_DIGITS: u32 = 5;

/// Highest precision the scanner accepts by default (decimal digits).
pub const DEFAULT_MAX_PRECISION_DIGITS: u32 = 50;

/// Largest imaginary part a scan may cover by default.
pub const DEFAULT_MAX_IMAGINARY_LIMIT: f64 = 500.0;

/// Hard bounds of the arbitrary-precision facility.
pub const MIN_SUPPORTED_DIGITS: u32 = 1;
pub const MAX_SUPPORTED_DIGITS: u32 = 1000;

/// Default number of cached scan results.
pub const DEFAULT_CACHE_CAPACITY: u64 = 256;

/// Default idle time before a cached scan result is evicted (seconds).
pub const DEFAULT_CACHE_TIME_TO_IDLE_SECS: u64 = 3600;

/// Iteration cap for the golden-section refinement.
pub const DEFAULT_REFINE_MAX_ITERATIONS: usize = 100;

/// Largest sample grid a scan will allocate.
pub const MAX_SAMPLE_COUNT: usize = 1_000_000;

/// Longest accepted idle time for cached results (ten years, in seconds).
pub const MAX_CACHE_TIME_TO_IDLE_SECS: u64 = 10 * 365 * 24 * 60 * 60;
