//! Per-year aggregation of daily records using a Polars `LazyFrame`.
//!
//! Produces the same row shape the backend sends as aggregated data: for every
//! numeric daily variable `v` the columns `v_min`, `v_max`, `v_mean` and
//! `v_sum`, plus `num_days` and the first/last calendar day of the year's window.

use crate::aggregation::error::AggregationError;
use crate::types::daily_record::DailyRecord;
use crate::types::yearly_aggregate::YearlyAggregate;
use chrono::NaiveDate;
use log::debug;
use polars::prelude::*;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// Columns carried along with every daily row that are not weather variables.
const NON_VARIABLE_FIELDS: [&str; 6] = ["year", "latitude", "longitude", "month", "day", "id"];

const STAT_SUFFIXES: [&str; 4] = ["min", "max", "mean", "sum"];

/// Aggregates daily records into one [`YearlyAggregate`] per year, ascending.
///
/// A variable with no valid value in a given year is left out of that year's
/// row entirely. Empty input yields an empty result.
///
/// # Errors
///
/// Returns [`AggregationError::DataFrameProcessing`] if Polars fails to build
/// or evaluate the frame.
pub fn aggregate_by_year(records: &[DailyRecord]) -> Result<Vec<YearlyAggregate>, AggregationError> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let variables = numeric_variables(records);
    debug!(
        "Aggregating {} daily records over {} variables",
        records.len(),
        variables.len()
    );

    let mut aggregations = vec![len().cast(DataType::Int64).alias("num_days")];
    for variable in &variables {
        let column = col(variable.as_str());
        aggregations.push(column.clone().min().alias(format!("{variable}_min")));
        aggregations.push(column.clone().max().alias(format!("{variable}_max")));
        aggregations.push(column.clone().mean().alias(format!("{variable}_mean")));
        aggregations.push(column.sum().alias(format!("{variable}_sum")));
    }

    let df = daily_frame(records, &variables)?
        .lazy()
        .group_by([col("year")])
        .agg(aggregations)
        .sort(["year"], SortMultipleOptions::default())
        .collect()?;

    rows_from_frame(&df, &variables, &date_bounds(records))
}

/// Fields that parse as a number in at least one record, in first-seen order.
fn numeric_variables(records: &[DailyRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut variables = Vec::new();
    for record in records {
        for key in record.fields.keys() {
            if NON_VARIABLE_FIELDS.contains(&key.as_str()) || seen.contains(key) {
                continue;
            }
            if record.value(key).is_some() {
                seen.insert(key.clone());
                variables.push(key.clone());
            }
        }
    }
    variables
}

fn daily_frame(records: &[DailyRecord], variables: &[String]) -> PolarsResult<DataFrame> {
    let years: Vec<i32> = records.iter().map(|r| r.year).collect();
    let mut columns = vec![Column::new("year".into(), years)];
    for variable in variables {
        let values: Vec<Option<f64>> = records.iter().map(|r| r.value(variable)).collect();
        columns.push(Column::new(variable.as_str().into(), values));
    }
    DataFrame::new(columns)
}

fn date_bounds(records: &[DailyRecord]) -> BTreeMap<i32, (NaiveDate, NaiveDate)> {
    let mut bounds: BTreeMap<i32, (NaiveDate, NaiveDate)> = BTreeMap::new();
    for record in records {
        let Some(date) = record.calendar_date() else {
            continue;
        };
        bounds
            .entry(record.year)
            .and_modify(|(first, last)| {
                *first = (*first).min(date);
                *last = (*last).max(date);
            })
            .or_insert((date, date));
    }
    bounds
}

fn rows_from_frame(
    df: &DataFrame,
    variables: &[String],
    bounds: &BTreeMap<i32, (NaiveDate, NaiveDate)>,
) -> Result<Vec<YearlyAggregate>, AggregationError> {
    let years = df.column("year")?.i32()?;
    let num_days = df.column("num_days")?.i64()?;

    let mut stats = Vec::with_capacity(variables.len());
    for variable in variables {
        let mut columns = Vec::with_capacity(STAT_SUFFIXES.len());
        for suffix in STAT_SUFFIXES {
            let name = format!("{variable}_{suffix}");
            columns.push((name.clone(), df.column(&name)?.f64()?));
        }
        stats.push(columns);
    }

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let Some(year) = years.get(idx) else {
            continue;
        };
        let mut row = YearlyAggregate::new(year);
        if let Some((first, last)) = bounds.get(&year) {
            row.fields
                .insert("date_start".into(), Value::from(first.to_string()));
            row.fields
                .insert("date_end".into(), Value::from(last.to_string()));
        }
        if let Some(days) = num_days.get(idx) {
            row.fields.insert("num_days".into(), Value::from(days));
        }
        for columns in &stats {
            // `mean` is null exactly when the year had no valid value
            if columns[2].1.get(idx).is_none() {
                continue;
            }
            for (name, values) in columns {
                if let Some(value) = values.get(idx) {
                    row.fields.insert(name.clone(), Value::from(value));
                }
            }
        }
        rows.push(row);
    }
    Ok(rows)
}
