//! Level math shared by the augmentations.
//!
//! Signal-to-noise ratios are specified in dB while the transforms work on
//! linear amplitudes, so the dB conversions here sit on the hot path of the
//! noise transform. RMS and peak are the two amplitude summaries the
//! augmentations and their tests measure.

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use sismo_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = std::f32::consts::LN_10 / 20.0;
    (db * FACTOR).exp()
}

/// Convert linear gain to decibels.
///
/// # Example
/// ```rust
/// use sismo_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(linear) = 20 * ln(linear) / ln(10)
    const FACTOR: f32 = 20.0 / std::f32::consts::LN_10;
    linear.max(1e-10).ln() * FACTOR
}

/// Compute the RMS (root mean square) level of a signal.
///
/// Returns 0.0 for an empty slice.
pub fn rms(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }

    let sum_sq: f32 = signal.iter().map(|&x| x * x).sum();
    (sum_sq / signal.len() as f32).sqrt()
}

/// Compute the peak level (maximum absolute value) of a signal.
///
/// Returns 0.0 for an empty slice.
pub fn peak(signal: &[f32]) -> f32 {
    signal.iter().fold(0.0_f32, |acc, &x| acc.max(x.abs()))
}
