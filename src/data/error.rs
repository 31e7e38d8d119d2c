use thiserror::Error;

// ---------------------------------------------------------------------------
// Typed errors surfaced by the analysis core
// ---------------------------------------------------------------------------

/// Failures the analysis pipeline can report to its caller.
///
/// The core never shows dialogs or logs on its own behalf; rendering these
/// to the operator is the UI shell's job.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The requested record index does not exist in the dataset.
    #[error("record index {index} is out of range (dataset holds {len} records)")]
    OutOfRange { index: usize, len: usize },

    /// The dataset or the analysis parameters could not be processed.
    #[error("processing failed: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
