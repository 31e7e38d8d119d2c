use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// RecordLabel – the trailing annotation column
// ---------------------------------------------------------------------------

/// Clinical annotation carried in the last column of every row.
///
/// The filtering pipeline never branches on it; it rides along so the UI
/// (or a downstream classifier) can show it next to the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordLabel {
    Normal,
    Abnormal,
}

impl RecordLabel {
    /// Parse the numeric label cell. The file format defines only 0 and 1.
    pub fn from_value(value: f64) -> Result<Self> {
        if value == 0.0 {
            Ok(RecordLabel::Normal)
        } else if value == 1.0 {
            Ok(RecordLabel::Abnormal)
        } else {
            Err(AnalysisError::Processing(format!(
                "label must be 0 (normal) or 1 (abnormal), got {value}"
            )))
        }
    }
}

impl fmt::Display for RecordLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordLabel::Normal => write!(f, "normal"),
            RecordLabel::Abnormal => write!(f, "abnormal"),
        }
    }
}

// ---------------------------------------------------------------------------
// EcgRecord – one row of the source file
// ---------------------------------------------------------------------------

/// A single beat: the sampled signal plus its annotation.
#[derive(Debug, Clone)]
pub struct EcgRecord {
    /// Uniformly sampled amplitudes (everything in the row but the label).
    pub samples: Vec<f64>,
    /// Annotation parsed from the trailing column.
    pub label: RecordLabel,
}

// ---------------------------------------------------------------------------
// EcgDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All records of one source file. Every record has the same sample count.
#[derive(Debug, Clone)]
pub struct EcgDataset {
    pub records: Vec<EcgRecord>,
    /// Shared sample count per record (row width minus the label column).
    pub samples_per_record: usize,
}

impl EcgDataset {
    /// Split raw numeric rows into records, enforcing the file's shape:
    /// at least one row, every row at least one sample plus the label,
    /// equal sample count across rows, label exactly 0 or 1.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(AnalysisError::Processing(
                "dataset contains no records".to_string(),
            ));
        }

        let mut records = Vec::with_capacity(rows.len());
        let mut samples_per_record = None;

        for (row_no, row) in rows.into_iter().enumerate() {
            if row.len() < 2 {
                return Err(AnalysisError::Processing(format!(
                    "row {row_no} has {} fields, need at least one sample plus the label",
                    row.len()
                )));
            }

            let n_samples = row.len() - 1;
            match samples_per_record {
                None => samples_per_record = Some(n_samples),
                Some(expected) if expected != n_samples => {
                    return Err(AnalysisError::Processing(format!(
                        "row {row_no} has {n_samples} samples but previous rows have {expected}"
                    )));
                }
                Some(_) => {}
            }

            let mut samples = row;
            // Guarded above: every row still holds the label after the samples.
            let label_value = samples.pop().unwrap_or(f64::NAN);
            let label = RecordLabel::from_value(label_value).map_err(|_| {
                AnalysisError::Processing(format!(
                    "row {row_no}: label must be 0 (normal) or 1 (abnormal), got {label_value}"
                ))
            })?;

            records.push(EcgRecord { samples, label });
        }

        Ok(EcgDataset {
            records,
            samples_per_record: samples_per_record.unwrap_or(0),
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// AnalysisResult – what one analysis pass hands back
// ---------------------------------------------------------------------------

/// Output of one pipeline run over a single record.
///
/// All three sequences have the record's sample count; the label is
/// pass-through metadata.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Sample instants in seconds, evenly spaced over [0, duration).
    pub time: Vec<f64>,
    /// The record's samples, untouched.
    pub original: Vec<f64>,
    /// Reconstruction after spectral masking.
    pub filtered: Vec<f64>,
    pub label: RecordLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_splits_samples_and_label() {
        let dataset = EcgDataset::from_rows(vec![
            vec![1.0, 2.0, 3.0, 0.0],
            vec![4.0, 5.0, 6.0, 1.0],
        ])
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.samples_per_record, 3);
        assert_eq!(dataset.records[0].samples, vec![1.0, 2.0, 3.0]);
        assert_eq!(dataset.records[0].label, RecordLabel::Normal);
        assert_eq!(dataset.records[1].label, RecordLabel::Abnormal);
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        let err = EcgDataset::from_rows(vec![]).unwrap_err();
        assert!(err.to_string().contains("no records"));
    }

    #[test]
    fn from_rows_rejects_label_only_row() {
        let err = EcgDataset::from_rows(vec![vec![0.0]]).unwrap_err();
        assert!(err.to_string().contains("at least one sample"));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = EcgDataset::from_rows(vec![
            vec![1.0, 2.0, 3.0, 0.0],
            vec![1.0, 2.0, 0.0],
        ])
        .unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn from_rows_rejects_unknown_label() {
        let err = EcgDataset::from_rows(vec![vec![1.0, 2.0, 7.0]]).unwrap_err();
        assert!(err.to_string().contains("label"));
    }

    #[test]
    fn label_parses_only_zero_and_one() {
        assert_eq!(RecordLabel::from_value(0.0).unwrap(), RecordLabel::Normal);
        assert_eq!(RecordLabel::from_value(1.0).unwrap(), RecordLabel::Abnormal);
        assert!(RecordLabel::from_value(0.5).is_err());
        assert!(RecordLabel::from_value(f64::NAN).is_err());
    }
}
