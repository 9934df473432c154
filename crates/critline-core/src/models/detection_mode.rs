use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How sampled magnitudes are turned into candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMode {
    /// Report every sample whose magnitude is below the threshold.
    /// Misses zeros between samples and may report one zero several times.
    #[default]
    Threshold,
    /// Refine each sampled local minimum with a golden-section search and
    /// report the refined point when its magnitude is below the threshold.
    Refined,
}

impl DetectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Threshold => "threshold",
            Self::Refined => "refined",
        }
    }
}

impl fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "threshold" => Ok(Self::Threshold),
            "refined" => Ok(Self::Refined),
            other => Err(format!("unknown detection mode: {other}")),
        }
    }
}
