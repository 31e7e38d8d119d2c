use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::model::{EcgDataset, EcgRecord, RecordLabel};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an ECG dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – headerless; each row is one record: samples…, trailing 0/1 label
/// * `.json` – `[{ "samples": [...], "label": 0 }, ...]`
pub fn load_file(path: &Path) -> Result<EcgDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: no header row; every field numeric. The last field of each
/// row is the 0/1 label, all preceding fields are the samples.
fn load_csv(path: &Path) -> Result<EcgDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .context("opening CSV")?;

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let row: Vec<f64> = record
            .iter()
            .enumerate()
            .map(|(col, tok)| {
                tok.trim()
                    .parse::<f64>()
                    .with_context(|| format!("Row {row_no}, field {col}: '{tok}' is not a number"))
            })
            .collect::<Result<_>>()?;

        rows.push(row);
    }

    EcgDataset::from_rows(rows).context("validating dataset shape")
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// One record as serialized in the JSON convenience format.
#[derive(Debug, Deserialize)]
struct JsonRecord {
    samples: Vec<f64>,
    label: f64,
}

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "samples": [0.12, 0.44, ...], "label": 0 },
///   { "samples": [0.09, 0.51, ...], "label": 1 }
/// ]
/// ```
fn load_json(path: &Path) -> Result<EcgDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let raw: Vec<JsonRecord> = serde_json::from_str(&text).context("parsing JSON")?;

    if raw.is_empty() {
        bail!("JSON file contains no records");
    }

    let mut records = Vec::with_capacity(raw.len());
    let mut samples_per_record = None;

    for (row_no, rec) in raw.into_iter().enumerate() {
        if rec.samples.is_empty() {
            bail!("Record {row_no} has no samples");
        }
        match samples_per_record {
            None => samples_per_record = Some(rec.samples.len()),
            Some(expected) if expected != rec.samples.len() => bail!(
                "Record {row_no} has {} samples but previous records have {expected}",
                rec.samples.len()
            ),
            Some(_) => {}
        }

        let label = RecordLabel::from_value(rec.label)
            .with_context(|| format!("Record {row_no}"))?;

        records.push(EcgRecord {
            samples: rec.samples,
            label,
        });
    }

    Ok(EcgDataset {
        records,
        samples_per_record: samples_per_record.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RecordLabel;
    use std::io::Write;

    fn write_temp(extension: &str, contents: &str) -> tempfile::TempPath {
        let mut file = tempfile::Builder::new()
            .suffix(extension)
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.into_temp_path()
    }

    #[test]
    fn loads_headerless_csv_rows() {
        let path = write_temp(".csv", "1.0,0.5,-1.0,0\n0.2,0.3,0.4,1\n");
        let dataset = load_file(&path).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.samples_per_record, 3);
        assert_eq!(dataset.records[0].samples, vec![1.0, 0.5, -1.0]);
        assert_eq!(dataset.records[0].label, RecordLabel::Normal);
        assert_eq!(dataset.records[1].label, RecordLabel::Abnormal);
    }

    #[test]
    fn csv_rejects_non_numeric_fields() {
        let path = write_temp(".csv", "1.0,abc,0\n");
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("not a number"));
    }

    #[test]
    fn csv_rejects_bad_labels() {
        let path = write_temp(".csv", "1.0,2.0,5\n");
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("label"));
    }

    #[test]
    fn loads_json_records() {
        let path = write_temp(
            ".json",
            r#"[{"samples": [1.0, -1.0], "label": 0}, {"samples": [0.5, 0.5], "label": 1}]"#,
        );
        let dataset = load_file(&path).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.samples_per_record, 2);
        assert_eq!(dataset.records[1].label, RecordLabel::Abnormal);
    }

    #[test]
    fn json_rejects_mismatched_lengths() {
        let path = write_temp(
            ".json",
            r#"[{"samples": [1.0, 2.0], "label": 0}, {"samples": [1.0], "label": 0}]"#,
        );
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let path = write_temp(".parquet", "");
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }
}
