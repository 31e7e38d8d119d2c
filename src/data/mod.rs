/// Data layer: dataset model, loading, and the signal-processing pipeline.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → EcgDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ EcgDataset  │  Vec<EcgRecord>, uniform sample count
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ analyzer  │  forward DFT → low-pass mask → high-pass mask
///   └──────────┘     → inverse DFT → AnalysisResult
/// ```
///
/// `spectrum` holds the DFT plumbing, `filter` the brick-wall masks; both
/// are pure functions the analyzer composes per request.
pub mod analyzer;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod spectrum;
