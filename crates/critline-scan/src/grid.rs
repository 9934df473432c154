//! Uniform sample grid over `[0, max_imaginary]`.

/// `count` evenly spaced points from `0` to `max_imaginary` inclusive.
///
/// Point `k` is `k · (max / (count - 1))`; the last point is set to `max`
/// exactly. A single-point grid is `[0]`. The grid never depends on the
/// working precision.
pub fn sample_grid(max_imaginary: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = max_imaginary / (count - 1) as f64;
            let mut grid: Vec<f64> = (0..count).map(|k| k as f64 * step).collect();
            grid[count - 1] = max_imaginary;
            grid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let grid = sample_grid(40.0, 1000);
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[999], 40.0);
    }

    #[test]
    fn strictly_increasing() {
        let grid = sample_grid(0.3, 17);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn uniform_spacing() {
        let grid = sample_grid(15.0, 1000);
        let step = 15.0 / 999.0;
        assert!((grid[941] - 941.0 * step).abs() < 1e-12);
    }

    #[test]
    fn degenerate_counts() {
        assert!(sample_grid(10.0, 0).is_empty());
        assert_eq!(sample_grid(10.0, 1), vec![0.0]);
        assert_eq!(sample_grid(10.0, 2), vec![0.0, 10.0]);
    }
}
