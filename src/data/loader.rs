use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const CATEGORY_COLUMN: &str = "Booster Version Category";

/// Structural problems with an otherwise readable source file.
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: column '{column}' is empty")]
    EmptyCell { row: usize, column: &'static str },
    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row; extra columns are ignored
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string()).into()),
    };

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row validation shared by all formats
// ---------------------------------------------------------------------------

fn required_text(value: Option<&str>, row: usize, column: &'static str) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(LoadError::EmptyCell { row, column }.into()),
    }
}

fn parse_number(value: Option<&str>, row: usize, column: &'static str) -> Result<f64> {
    let text = required_text(value, row, column)?;
    text.parse::<f64>().map_err(|_| {
        LoadError::InvalidValue {
            row,
            column,
            value: text.clone(),
        }
        .into()
    })
}

fn validate_payload(payload: f64, row: usize) -> Result<f64> {
    if !payload.is_finite() || payload < 0.0 {
        bail!(LoadError::InvalidValue {
            row,
            column: PAYLOAD_COLUMN,
            value: payload.to_string(),
        });
    }
    Ok(payload)
}

fn validate_outcome(class: f64, row: usize) -> Result<Outcome> {
    Outcome::from_class(class).ok_or_else(|| {
        LoadError::InvalidValue {
            row,
            column: CLASS_COLUMN,
            value: class.to_string(),
        }
        .into()
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one launch per row.
/// Only the four required columns are read; the rest (index, flight
/// number, booster version) are ignored.
fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let column = |name: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| LoadError::MissingColumn(name).into())
    };
    let site_idx = column(SITE_COLUMN)?;
    let payload_idx = column(PAYLOAD_COLUMN)?;
    let class_idx = column(CLASS_COLUMN)?;
    let category_idx = column(CATEGORY_COLUMN)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let payload = parse_number(record.get(payload_idx), row_no, PAYLOAD_COLUMN)?;
        let class = parse_number(record.get(class_idx), row_no, CLASS_COLUMN)?;

        records.push(LaunchRecord {
            site: required_text(record.get(site_idx), row_no, SITE_COLUMN)?,
            payload_mass_kg: validate_payload(payload, row_no)?,
            outcome: validate_outcome(class, row_no)?,
            booster_version_category: required_text(
                record.get(category_idx),
                row_no,
                CATEGORY_COLUMN,
            )?,
        });
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 0.0,
///     "class": 0,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let payload = json_number(obj.get(PAYLOAD_COLUMN), i, PAYLOAD_COLUMN)?;
        let class = json_number(obj.get(CLASS_COLUMN), i, CLASS_COLUMN)?;

        records.push(LaunchRecord {
            site: required_text(obj.get(SITE_COLUMN).and_then(|v| v.as_str()), i, SITE_COLUMN)?,
            payload_mass_kg: validate_payload(payload, i)?,
            outcome: validate_outcome(class, i)?,
            booster_version_category: required_text(
                obj.get(CATEGORY_COLUMN).and_then(|v| v.as_str()),
                i,
                CATEGORY_COLUMN,
            )?,
        });
    }

    Ok(records)
}

fn json_number(val: Option<&JsonValue>, row: usize, column: &'static str) -> Result<f64> {
    match val {
        None | Some(JsonValue::Null) => Err(LoadError::EmptyCell { row, column }.into()),
        Some(JsonValue::Number(n)) => n.as_f64().ok_or_else(|| {
            LoadError::InvalidValue {
                row,
                column,
                value: n.to_string(),
            }
            .into()
        }),
        Some(JsonValue::String(s)) => parse_number(Some(s.as_str()), row, column),
        Some(other) => Err(LoadError::InvalidValue {
            row,
            column,
            value: other.to_string(),
        }
        .into()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of launch records.
///
/// Numeric columns may be any integer or float type (and `class` may be
/// boolean); text columns Utf8 or LargeUtf8. Works with files written by
/// both **Pandas** and **Polars**.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();
        let column = |name: &'static str| -> Result<ArrayRef> {
            let idx = schema
                .index_of(name)
                .map_err(|_| LoadError::MissingColumn(name))?;
            Ok(batch.column(idx).clone())
        };

        let sites = cast(&column(SITE_COLUMN)?, &DataType::Utf8).context("casting site column")?;
        let payloads =
            cast(&column(PAYLOAD_COLUMN)?, &DataType::Float64).context("casting payload column")?;
        let classes =
            cast(&column(CLASS_COLUMN)?, &DataType::Float64).context("casting class column")?;
        let categories =
            cast(&column(CATEGORY_COLUMN)?, &DataType::Utf8).context("casting category column")?;

        let sites = sites.as_string::<i32>();
        let payloads = payloads.as_primitive::<Float64Type>();
        let classes = classes.as_primitive::<Float64Type>();
        let categories = categories.as_string::<i32>();

        let offset = records.len();
        for i in 0..batch.num_rows() {
            let row = offset + i;
            let text = |arr: &arrow::array::StringArray, column| {
                let value = (!arr.is_null(i)).then(|| arr.value(i));
                required_text(value, row, column)
            };
            if payloads.is_null(i) {
                bail!(LoadError::EmptyCell {
                    row,
                    column: PAYLOAD_COLUMN
                });
            }
            if classes.is_null(i) {
                bail!(LoadError::EmptyCell {
                    row,
                    column: CLASS_COLUMN
                });
            }

            records.push(LaunchRecord {
                site: text(sites, SITE_COLUMN)?,
                payload_mass_kg: validate_payload(payloads.value(i), row)?,
                outcome: validate_outcome(classes.value(i), row)?,
                booster_version_category: text(categories, CATEGORY_COLUMN)?,
            });
        }
    }

    Ok(records)
}
