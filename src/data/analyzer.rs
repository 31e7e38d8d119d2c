use serde::{Deserialize, Serialize};

use super::error::{AnalysisError, Result};
use super::filter::{apply_filter, FilterKind};
use super::model::{AnalysisResult, EcgDataset};
use super::spectrum;

// ---------------------------------------------------------------------------
// AnalysisRequest – everything one pass needs, captured by value
// ---------------------------------------------------------------------------

/// Immutable parameters for one analysis pass.
///
/// The UI rebuilds and resubmits this on every control change instead of
/// sharing mutable widget state with the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Row selector into the dataset.
    pub patient_index: usize,
    /// Low-pass cutoff in Hz; energy above it is removed.
    pub low_cutoff: f64,
    /// High-pass cutoff in Hz; energy below it is removed.
    pub high_cutoff: f64,
    /// Samples per second of the source recording.
    pub sampling_rate: f64,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            patient_index: 0,
            low_cutoff: 50.0,
            high_cutoff: 0.5,
            sampling_rate: 200.0,
        }
    }
}

// ---------------------------------------------------------------------------
// The analysis pass
// ---------------------------------------------------------------------------

/// Run the full pipeline for one record: time axis, forward transform,
/// low-pass then high-pass masking, inverse transform.
///
/// The two masks compose sequentially — the high-pass sees the low-passed
/// spectrum, not the original. Stateless; every call recomputes from scratch.
pub fn analyze(dataset: &EcgDataset, request: &AnalysisRequest) -> Result<AnalysisResult> {
    if request.patient_index >= dataset.len() {
        return Err(AnalysisError::OutOfRange {
            index: request.patient_index,
            len: dataset.len(),
        });
    }

    if !(request.sampling_rate > 0.0) || !request.sampling_rate.is_finite() {
        return Err(AnalysisError::Processing(format!(
            "sampling rate must be a positive number, got {}",
            request.sampling_rate
        )));
    }

    let record = &dataset.records[request.patient_index];
    let n = record.samples.len();
    log::debug!(
        "analyzing record {} ({} samples, label {}): low {} Hz, high {} Hz, fs {} Hz",
        request.patient_index,
        n,
        record.label,
        request.low_cutoff,
        request.high_cutoff,
        request.sampling_rate
    );

    let time = spectrum::time_axis(n, request.sampling_rate);
    let freqs = spectrum::bin_frequencies(n, 1.0 / request.sampling_rate);

    let raw_spectrum = spectrum::forward(&record.samples);
    let low_passed = apply_filter(&raw_spectrum, &freqs, FilterKind::LowPass, request.low_cutoff);
    let band_passed = apply_filter(&low_passed, &freqs, FilterKind::HighPass, request.high_cutoff);

    let filtered = spectrum::inverse(&band_passed);

    Ok(AnalysisResult {
        time,
        original: record.samples.clone(),
        filtered,
        label: record.label,
    })
}
