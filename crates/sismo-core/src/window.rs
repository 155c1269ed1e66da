//! Window functions for tapering and filter design.

use std::f32::consts::PI;

/// Compute a symmetric Hann window of the given length.
///
/// `w[n] = 0.5 * (1 - cos(2πn / (len - 1)))`
///
/// The symmetric form starts and ends at exactly 0.0 and, for odd lengths,
/// has an exact 1.0 at the center sample. Degenerate lengths follow the
/// usual convention: empty for `len == 0` and `[1.0]` for `len == 1`.
pub fn hann(len: usize) -> Vec<f32> {
    match len {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let m = (len - 1) as f32;
            (0..len)
                .map(|n| 0.5 * (1.0 - (2.0 * PI * n as f32 / m).cos()))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hann_endpoints_are_zero() {
        for len in [2, 5, 16, 101] {
            let w = hann(len);
            assert!(w[0].abs() < 1e-6, "left endpoint not 0 for len {len}");
            assert!(w[len - 1].abs() < 1e-6, "right endpoint not 0 for len {len}");
        }
    }

    #[test]
    fn test_hann_odd_length_center_is_one() {
        for len in [3, 9, 33, 257] {
            let w = hann(len);
            assert!(
                (w[len / 2] - 1.0).abs() < 1e-6,
                "center sample not 1.0 for len {len}"
            );
        }
    }

    #[test]
    fn test_hann_symmetry() {
        for len in [4, 7, 50, 65] {
            let w = hann(len);
            for i in 0..len / 2 {
                assert!(
                    (w[i] - w[len - 1 - i]).abs() < 1e-6,
                    "window not symmetric at index {i} for len {len}"
                );
            }
        }
    }

    #[test]
    fn test_hann_values_bounded() {
        let w = hann(64);
        assert!(w.iter().all(|&x| (0.0..=1.0).contains(&x)));
    }

    #[test]
    fn test_hann_degenerate_lengths() {
        assert!(hann(0).is_empty());
        assert_eq!(hann(1), vec![1.0]);
    }
}
