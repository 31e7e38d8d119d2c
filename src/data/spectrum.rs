use rustfft::{num_complex::Complex, FftPlanner};

// ---------------------------------------------------------------------------
// Axes
// ---------------------------------------------------------------------------

/// Sample instants in seconds: n points evenly spaced over [0, n/sampling_rate).
///
/// Half-open on purpose; the last instant is duration − 1/sampling_rate,
/// never the duration itself.
pub fn time_axis(n: usize, sampling_rate: f64) -> Vec<f64> {
    (0..n).map(|k| k as f64 / sampling_rate).collect()
}

/// DFT bin centre frequencies for n bins at the given sample spacing.
///
/// Standard ordering: bin k maps to k/(n·d) up to the midpoint, then wraps
/// into negative frequencies as (k − n)/(n·d).
pub fn bin_frequencies(n: usize, sample_spacing: f64) -> Vec<f64> {
    let step = 1.0 / (n as f64 * sample_spacing);
    let split = n.div_ceil(2);
    (0..n)
        .map(|k| {
            if k < split {
                k as f64 * step
            } else {
                (k as f64 - n as f64) * step
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

/// Forward transform of a real signal into n complex coefficients.
pub fn forward(signal: &[f64]) -> Vec<Complex<f64>> {
    let mut buffer: Vec<Complex<f64>> =
        signal.iter().map(|&s| Complex::new(s, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    buffer
}

/// Inverse transform back to a real signal.
///
/// Normalized by 1/n so `inverse(forward(x))` reproduces `x`. Only the real
/// component is kept; the imaginary residue is floating-point round-off.
pub fn inverse(spectrum: &[Complex<f64>]) -> Vec<f64> {
    let mut buffer = spectrum.to_vec();

    let mut planner = FftPlanner::new();
    let ifft = planner.plan_fft_inverse(buffer.len());
    ifft.process(&mut buffer);

    let scale = 1.0 / buffer.len() as f64;
    buffer.iter().map(|c| c.re * scale).collect()
}
