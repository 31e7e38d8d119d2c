use rustfft::num_complex::Complex;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Filter kind: which side of the cutoff survives
// ---------------------------------------------------------------------------

/// Brick-wall mask selector. Exhaustive, so an unknown kind cannot silently
/// pass a spectrum through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Keep energy at or below the cutoff, zero everything above it.
    LowPass,
    /// Keep energy at or above the cutoff, zero everything below it.
    HighPass,
}

// ---------------------------------------------------------------------------
// Spectral masking
// ---------------------------------------------------------------------------

/// Zero out every disallowed bin, returning a fresh spectrum.
///
/// `spectrum` and `freqs` are index-aligned and must have equal length.
/// Boundary rules differ by kind and are kept asymmetric for compatibility
/// with the datasets this tool was built around:
/// * low-pass drops bins with |f| > cutoff (bins exactly at the cutoff stay),
/// * high-pass drops bins with |f| < cutoff (bins exactly at the cutoff stay).
///
/// The cutoff is taken as-is; values below zero or beyond Nyquist simply
/// mask everything or nothing. The input slice is never mutated — retained
/// bins are copied bit-identical — so sequential filters chain by feeding
/// the returned vector into the next call.
pub fn apply_filter(
    spectrum: &[Complex<f64>],
    freqs: &[f64],
    kind: FilterKind,
    cutoff: f64,
) -> Vec<Complex<f64>> {
    debug_assert_eq!(spectrum.len(), freqs.len());

    spectrum
        .iter()
        .zip(freqs.iter())
        .map(|(&bin, &f)| {
            let drop = match kind {
                FilterKind::LowPass => f.abs() > cutoff,
                FilterKind::HighPass => f.abs() < cutoff,
            };
            if drop {
                Complex::new(0.0, 0.0)
            } else {
                bin
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::spectrum::{bin_frequencies, forward};

    fn sample_spectrum() -> (Vec<Complex<f64>>, Vec<f64>) {
        let signal = vec![0.5, 1.0, -0.25, 2.0, -1.5, 0.75, 0.1, -0.6];
        let spectrum = forward(&signal);
        let freqs = bin_frequencies(signal.len(), 1.0 / 8.0);
        (spectrum, freqs)
    }

    #[test]
    fn low_pass_above_nyquist_is_noop() {
        let (spectrum, freqs) = sample_spectrum();
        let out = apply_filter(&spectrum, &freqs, FilterKind::LowPass, 100.0);
        assert_eq!(out, spectrum);
    }

    #[test]
    fn low_pass_at_zero_keeps_only_dc() {
        let (spectrum, freqs) = sample_spectrum();
        let out = apply_filter(&spectrum, &freqs, FilterKind::LowPass, 0.0);

        assert_eq!(out[0], spectrum[0]);
        for bin in &out[1..] {
            assert_eq!(*bin, Complex::new(0.0, 0.0));
        }
    }

    #[test]
    fn high_pass_at_zero_is_noop() {
        let (spectrum, freqs) = sample_spectrum();
        let out = apply_filter(&spectrum, &freqs, FilterKind::HighPass, 0.0);
        assert_eq!(out, spectrum);
    }

    #[test]
    fn high_pass_above_nyquist_zeroes_every_bin() {
        let (spectrum, freqs) = sample_spectrum();
        let out = apply_filter(&spectrum, &freqs, FilterKind::HighPass, 100.0);
        assert!(out.iter().all(|b| *b == Complex::new(0.0, 0.0)));
    }

    #[test]
    fn bins_exactly_at_cutoff_survive_both_kinds() {
        let (spectrum, freqs) = sample_spectrum();

        let low = apply_filter(&spectrum, &freqs, FilterKind::LowPass, 2.0);
        let high = apply_filter(&spectrum, &freqs, FilterKind::HighPass, 2.0);

        for (i, f) in freqs.iter().enumerate() {
            if f.abs() == 2.0 {
                assert_eq!(low[i], spectrum[i]);
                assert_eq!(high[i], spectrum[i]);
            }
        }
    }

    #[test]
    fn disjoint_passbands_zero_the_spectrum() {
        let (spectrum, freqs) = sample_spectrum();

        // Low-pass keeps |f| <= 1, then high-pass keeps |f| >= 3: nothing left.
        let low_passed = apply_filter(&spectrum, &freqs, FilterKind::LowPass, 1.0);
        let out = apply_filter(&low_passed, &freqs, FilterKind::HighPass, 3.0);

        assert!(out.iter().all(|b| *b == Complex::new(0.0, 0.0)));
    }

    #[test]
    fn retained_bins_are_bit_identical_and_input_is_untouched() {
        let (spectrum, freqs) = sample_spectrum();
        let before = spectrum.clone();

        let out = apply_filter(&spectrum, &freqs, FilterKind::LowPass, 2.0);

        assert_eq!(spectrum, before);
        for (i, f) in freqs.iter().enumerate() {
            if f.abs() <= 2.0 {
                assert_eq!(out[i], spectrum[i]);
            }
        }
    }
}
