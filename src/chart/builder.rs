//! Assembles the multi-series, dual-axis chart from yearly aggregates and
//! daily records.

use crate::aggregation::moving_average::{moving_average, resolve_window, secondary_window};
use crate::aggregation::threshold::days_above_threshold;
use crate::chart::error::{Advisory, ChartError};
use crate::chart::series::{threshold_label, trend_name, TemperatureSeries, THRESHOLD_COLOR};
use crate::types::chart_spec::{
    AxisId, AxisLayout, ChartSpec, Dash, SecondaryAxis, SeriesMode, SeriesSpec, StyleHint,
};
use crate::types::daily_record::DailyRecord;
use crate::types::display_options::DisplayOptions;
use crate::types::yearly_aggregate::YearlyAggregate;
use log::{debug, warn};

pub const DEFAULT_TITLE: &str = "Weather Trends";

/// A built chart plus anything the user should be told about it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBuild {
    pub spec: ChartSpec,
    /// Moving-average window shared by the temperature series.
    pub window: usize,
    pub advisories: Vec<Advisory>,
}

/// Builds the chart for the current data and display options.
///
/// Every enabled temperature series yields a raw series and a trend series on
/// the primary axis, all smoothed with one shared window. With threshold days
/// enabled, per-year counts and their trend go on a secondary axis; if there
/// are no daily records those two series are skipped and
/// [`Advisory::ThresholdDataUnavailable`] is reported instead.
///
/// The function is pure: identical inputs give identical output.
///
/// # Errors
///
/// Returns [`ChartError::NoData`] when `aggregates` is empty.
///
/// # Examples
///
/// ```
/// use weather_trends::{build_chart_spec, DisplayOptions, YearlyAggregate};
///
/// let rows: Vec<YearlyAggregate> = (2000..2012)
///     .map(|year| YearlyAggregate::new(year).with_value("temperature_2m_max_max", 90.0))
///     .collect();
/// let options = DisplayOptions::builder()
///     .show_min(false)
///     .show_average(false)
///     .build();
///
/// let chart = build_chart_spec(&rows, &[], &options)?;
/// assert_eq!(chart.window, 3);
/// assert_eq!(chart.spec.series.len(), 2);
/// assert_eq!(chart.spec.series[1].name, "Max Temperature Trend (3-yr avg)");
/// # Ok::<(), weather_trends::ChartError>(())
/// ```
pub fn build_chart_spec(
    aggregates: &[YearlyAggregate],
    daily: &[DailyRecord],
    options: &DisplayOptions,
) -> Result<ChartBuild, ChartError> {
    if aggregates.is_empty() {
        return Err(ChartError::NoData);
    }

    let years: Vec<i32> = aggregates.iter().map(|row| row.year).collect();
    let window = resolve_window(options.window, years.len());
    debug!(
        "Building chart for {} years with a {}-year window",
        years.len(),
        window
    );

    let mut series = Vec::new();
    for kind in TemperatureSeries::ALL {
        if is_enabled(kind, options) {
            series.extend(temperature_series(kind, &years, aggregates, window));
        }
    }

    let mut advisories = Vec::new();
    let mut secondary = None;
    if options.show_threshold_days {
        if daily.is_empty() {
            warn!("Threshold days requested but no daily records are loaded");
            advisories.push(Advisory::ThresholdDataUnavailable);
        } else {
            series.extend(threshold_series(daily, options.threshold, window));
            secondary = Some(SecondaryAxis {
                title: threshold_label(options.threshold),
            });
        }
    }

    Ok(ChartBuild {
        spec: ChartSpec {
            series,
            layout: AxisLayout {
                title: DEFAULT_TITLE.to_string(),
                x_title: "Year".to_string(),
                y_title: "Temperature (°F)".to_string(),
                secondary,
            },
        },
        window,
        advisories,
    })
}

fn is_enabled(kind: TemperatureSeries, options: &DisplayOptions) -> bool {
    match kind {
        TemperatureSeries::Max => options.show_max,
        TemperatureSeries::Min => options.show_min,
        TemperatureSeries::Average => options.show_average,
        TemperatureSeries::Mean => options.show_mean,
    }
}

fn temperature_series(
    kind: TemperatureSeries,
    years: &[i32],
    aggregates: &[YearlyAggregate],
    window: usize,
) -> [SeriesSpec; 2] {
    let raw: Vec<Option<f64>> = aggregates
        .iter()
        .map(|row| row.temperature(kind.field()))
        .collect();
    let trend = moving_average(&raw, window);

    [
        SeriesSpec {
            name: kind.label().to_string(),
            x: years.to_vec(),
            y: raw,
            axis: AxisId::Primary,
            mode: SeriesMode::LinesMarkers,
            style: kind.raw_style(),
        },
        SeriesSpec {
            name: trend_name(kind.label(), window),
            x: years.to_vec(),
            y: trend.into_iter().map(Some).collect(),
            axis: AxisId::Primary,
            mode: SeriesMode::Lines,
            style: kind.trend_style(),
        },
    ]
}

fn threshold_series(daily: &[DailyRecord], threshold: f64, window: usize) -> [SeriesSpec; 2] {
    let counts = days_above_threshold(daily, threshold);
    let years: Vec<i32> = counts.iter().map(|c| c.year).collect();
    let raw: Vec<Option<f64>> = counts.iter().map(|c| Some(f64::from(c.count))).collect();
    let trend = moving_average(&raw, secondary_window(window));
    let label = threshold_label(threshold);

    [
        SeriesSpec {
            name: label.clone(),
            x: years.clone(),
            y: raw,
            axis: AxisId::Secondary,
            mode: SeriesMode::Markers,
            style: StyleHint::new(THRESHOLD_COLOR, 1.0, Dash::Solid),
        },
        SeriesSpec {
            name: format!("{label} Trend"),
            x: years,
            y: trend.into_iter().map(Some).collect(),
            axis: AxisId::Secondary,
            mode: SeriesMode::Lines,
            style: StyleHint::new(THRESHOLD_COLOR, 3.0, Dash::Dash),
        },
    ]
}
