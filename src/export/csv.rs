//! Delimited-text export of the yearly aggregate rows.
//!
//! Columns are `year` followed by every field name in the order it first
//! appears. A column whose values are all numbers is written bare; any other
//! column is written as quoted text. Missing values are left empty.

use crate::export::error::ExportError;
use crate::types::yearly_aggregate::YearlyAggregate;
use log::info;
use polars::prelude::*;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tokio::task;

/// Serializes `rows` into CSV text with a header line.
///
/// # Errors
///
/// * [`ExportError::NoData`] when `rows` is empty.
/// * [`ExportError::CsvEncode`] if Polars fails to build or write the frame.
pub fn aggregates_to_csv(rows: &[YearlyAggregate]) -> Result<String, ExportError> {
    let mut df = aggregates_frame(rows)?;
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .with_quote_style(QuoteStyle::NonNumeric)
        .finish(&mut df)?;
    Ok(String::from_utf8(buffer)?)
}

/// Writes the CSV export to `path` on a blocking task.
pub async fn write_csv(path: &Path, rows: &[YearlyAggregate]) -> Result<(), ExportError> {
    let mut df = aggregates_frame(rows)?;
    let path_buf = path.to_path_buf();
    let row_count = df.height();
    task::spawn_blocking(move || {
        let file = std::fs::File::create(&path_buf)
            .map_err(|e| ExportError::FileWrite(path_buf.clone(), e))?;
        CsvWriter::new(file)
            .include_header(true)
            .with_quote_style(QuoteStyle::NonNumeric)
            .finish(&mut df)?;
        info!("Exported {} rows to {:?}", row_count, path_buf);
        Ok::<(), ExportError>(())
    })
    .await??;
    Ok(())
}

fn aggregates_frame(rows: &[YearlyAggregate]) -> Result<DataFrame, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::NoData);
    }

    let years: Vec<i32> = rows.iter().map(|r| r.year).collect();
    let mut columns = vec![Column::new("year".into(), years)];
    for name in field_names(rows) {
        let values: Vec<Option<&Value>> = rows.iter().map(|r| r.fields.get(&name)).collect();
        columns.push(field_column(&name, &values));
    }
    Ok(DataFrame::new(columns)?)
}

fn field_names(rows: &[YearlyAggregate]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for row in rows {
        for key in row.fields.keys() {
            if key != "year" && seen.insert(key.clone()) {
                names.push(key.clone());
            }
        }
    }
    names
}

fn field_column(name: &str, values: &[Option<&Value>]) -> Column {
    let present = || values.iter().flatten().filter(|v| !v.is_null());

    if present().all(|v| v.is_i64() || v.is_u64()) {
        let ints: Vec<Option<i64>> = values.iter().map(|v| v.and_then(Value::as_i64)).collect();
        return Column::new(name.into(), ints);
    }
    if present().all(|v| v.is_number()) {
        let floats: Vec<Option<f64>> = values.iter().map(|v| v.and_then(Value::as_f64)).collect();
        return Column::new(name.into(), floats);
    }
    let text: Vec<Option<String>> = values
        .iter()
        .map(|v| match v {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        })
        .collect();
    Column::new(name.into(), text)
}
