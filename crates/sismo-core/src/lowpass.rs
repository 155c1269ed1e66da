//! Zero-phase FIR lowpass filtering for waveforms.
//!
//! Implements the windowed-sinc lowpass the filter augmentations are built
//! on. The kernel is a Hann-windowed sinc truncated after a fixed number of
//! zero crossings per side, normalized to unity DC gain; convolution is
//! symmetric around each output sample, so the filter has no phase shift.
//!
//! # Theory
//!
//! The ideal lowpass impulse response at normalized cutoff `f` (cycles per
//! sample, Nyquist at 0.5) is `2f * sinc(2πf t)` with `sinc(x) = sin(x)/x`.
//! Truncating it after [`FILTER_ZEROS`] zero crossings per side and applying
//! a Hann window trades stopband rejection for kernel length; renormalizing
//! the taps restores exact unity gain at DC.
//!
//! Reference: A. V. Oppenheim and R. W. Schafer, *Discrete-Time Signal
//! Processing*, 3rd ed., Prentice Hall, 2009, Section 7.6 (window method).

use std::f32::consts::PI;

use crate::waveform::Waveform;
use crate::window::hann;

/// Sinc zero crossings retained on each side of the kernel center.
///
/// Higher values sharpen the transition band at the cost of a longer
/// kernel. The kernel grows as the cutoff falls: half-width is
/// `floor(FILTER_ZEROS / cutoff / 2)` taps.
pub const FILTER_ZEROS: usize = 8;

/// Compute the windowed-sinc lowpass kernel for a normalized cutoff.
///
/// `cutoff` is in cycles per sample with Nyquist at 0.5. The returned
/// kernel has `2 * half + 1` symmetric taps summing to 1.0.
///
/// # Panics
///
/// Panics if `cutoff` lies outside `(0.0, 0.5)`; callers are expected to
/// have validated the cutoff against Nyquist already.
pub fn lowpass_kernel(cutoff: f32) -> Vec<f32> {
    assert!(
        cutoff > 0.0 && cutoff < 0.5,
        "normalized cutoff must lie in (0, 0.5)"
    );

    let half = (FILTER_ZEROS as f32 / cutoff / 2.0) as usize;
    let len = 2 * half + 1;
    let window = hann(len);
    let mut kernel = Vec::with_capacity(len);

    for n in 0..len {
        let t = n as f32 - half as f32;
        let x = 2.0 * PI * cutoff * t;
        // sinc(x) = sin(x)/x with the removable singularity filled in
        let sinc = if x.abs() < 1e-7 { 1.0 } else { x.sin() / x };
        kernel.push(2.0 * cutoff * window[n] * sinc);
    }

    // Normalize to unity DC gain (sum of taps = 1.0)
    let sum: f32 = kernel.iter().sum();
    if sum.abs() > 1e-10 {
        for c in kernel.iter_mut() {
            *c /= sum;
        }
    }

    kernel
}

/// Apply the windowed-sinc lowpass to every channel of a waveform.
///
/// Each channel is convolved independently along the time axis. Edges are
/// replicate-padded by the kernel half-width, so the output has exactly the
/// input's shape and a constant signal passes through unchanged even at the
/// boundaries.
pub fn lowpass(waveform: &Waveform, cutoff: f32) -> Waveform {
    if waveform.is_empty() {
        return waveform.clone();
    }

    let kernel = lowpass_kernel(cutoff);
    #[cfg(feature = "tracing")]
    tracing::trace!(
        "lowpass: {} taps at normalized cutoff {cutoff:.4}",
        kernel.len()
    );
    let half = (kernel.len() - 1) / 2;
    let n = waveform.num_samples();
    let mut out = Waveform::zeros(waveform.channels(), n);

    for (c, input) in waveform.iter_channels().enumerate() {
        let output = out.channel_mut(c);
        for i in 0..n {
            let mut acc = 0.0f32;
            for (k, &coeff) in kernel.iter().enumerate() {
                // replicate padding: clamp the tap position into the signal
                let j = (i + k).saturating_sub(half).min(n - 1);
                acc += coeff * input[j];
            }
            output[i] = acc;
        }
    }

    out
}
