//! First ten non-trivial zeros, used as a static comparison table.

use super::ZeroCandidate;

/// `(0.5, γ_n)` for the first ten non-trivial zeros, to twelve decimals.
pub const KNOWN_ZEROS: [ZeroCandidate; 10] = [
    ZeroCandidate::on_critical_line(14.134_725_141_735),
    ZeroCandidate::on_critical_line(21.022_039_638_772),
    ZeroCandidate::on_critical_line(25.010_857_580_146),
    ZeroCandidate::on_critical_line(30.424_876_125_860),
    ZeroCandidate::on_critical_line(32.935_061_587_739),
    ZeroCandidate::on_critical_line(37.586_178_158_826),
    ZeroCandidate::on_critical_line(40.918_719_012_147),
    ZeroCandidate::on_critical_line(43.327_073_280_915),
    ZeroCandidate::on_critical_line(48.005_150_881_167),
    ZeroCandidate::on_critical_line(49.773_832_477_672),
];

/// The table entry whose imaginary part is closest to `t`.
pub fn nearest_known_zero(t: f64) -> &'static ZeroCandidate {
    KNOWN_ZEROS
        .iter()
        .min_by(|a, b| (a.im - t).abs().total_cmp(&(b.im - t).abs()))
        .unwrap_or(&KNOWN_ZEROS[0])
}
