use std::path::PathBuf;

use crate::data::analyzer::{analyze, AnalysisRequest};
use crate::data::model::{AnalysisResult, EcgDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<EcgDataset>,

    /// Where the dataset came from, for display in the top bar.
    pub source_path: Option<PathBuf>,

    /// Current analysis parameters; rebuilt into the pipeline on any change.
    pub request: AnalysisRequest,

    /// Latest pipeline output (None before the first run or after a failure).
    pub result: Option<AnalysisResult>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source_path: None,
            request: AnalysisRequest::default(),
            result: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and run the first analysis pass.
    pub fn set_dataset(&mut self, dataset: EcgDataset, path: PathBuf) {
        self.request.patient_index = 0;
        self.source_path = Some(path);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.reanalyze();
    }

    /// Recompute the whole pipeline from the current request.
    ///
    /// Called on every control change; the transform is cheap enough that
    /// re-deriving from scratch beats patching a cached spectrum.
    pub fn reanalyze(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.result = None;
            return;
        };

        match analyze(dataset, &self.request) {
            Ok(result) => {
                self.result = Some(result);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("analysis failed: {e}");
                self.result = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
