use serde::{Deserialize, Serialize};

use super::ZeroCandidate;

/// Ordered candidates of one successful scan.
///
/// Candidates are in increasing imaginary part. An empty result means no
/// sample met the threshold; it is a success, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanResult {
    pub candidates: Vec<ZeroCandidate>,
    /// Number of grid samples evaluated (refinement evaluations excluded).
    pub samples_evaluated: usize,
}

impl ScanResult {
    pub fn new(candidates: Vec<ZeroCandidate>, samples_evaluated: usize) -> Self {
        Self {
            candidates,
            samples_evaluated,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ZeroCandidate> {
        self.candidates.iter()
    }

    /// Imaginary parts in result order.
    pub fn imaginary_parts(&self) -> Vec<f64> {
        self.candidates.iter().map(|c| c.im).collect()
    }

    /// Whether any candidate lies within `tolerance` of imaginary part `t`.
    pub fn has_candidate_near(&self, t: f64, tolerance: f64) -> bool {
        self.candidates.iter().any(|c| (c.im - t).abs() <= tolerance)
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a ZeroCandidate;
    type IntoIter = std::slice::Iter<'a, ZeroCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
