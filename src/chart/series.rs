//! Labels and presentation hints for each plottable series.

use crate::types::chart_spec::{Dash, StyleHint};
use crate::types::fields::TemperatureField;

/// A user-toggleable temperature series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureSeries {
    Max,
    Min,
    Average,
    Mean,
}

impl TemperatureSeries {
    /// Plot order.
    pub const ALL: [TemperatureSeries; 4] = [
        TemperatureSeries::Max,
        TemperatureSeries::Min,
        TemperatureSeries::Average,
        TemperatureSeries::Mean,
    ];

    /// Average and Mean intentionally read the same field.
    pub fn field(self) -> TemperatureField {
        match self {
            TemperatureSeries::Max => TemperatureField::Max,
            TemperatureSeries::Min => TemperatureField::Min,
            TemperatureSeries::Average | TemperatureSeries::Mean => TemperatureField::Mean,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemperatureSeries::Max => "Max Temperature",
            TemperatureSeries::Min => "Min Temperature",
            TemperatureSeries::Average => "Average Temperature",
            TemperatureSeries::Mean => "Mean Temperature",
        }
    }

    fn color(self) -> &'static str {
        match self {
            TemperatureSeries::Max => "#e74c3c",
            TemperatureSeries::Min => "#3498db",
            TemperatureSeries::Average => "#2ecc71",
            TemperatureSeries::Mean => "#9b59b6",
        }
    }

    pub fn raw_style(self) -> StyleHint {
        StyleHint::new(self.color(), 1.0, Dash::Dot)
    }

    pub fn trend_style(self) -> StyleHint {
        StyleHint::new(self.color(), 3.0, Dash::Solid)
    }
}

pub const THRESHOLD_COLOR: &str = "#f39c12";

pub fn trend_name(label: &str, window: usize) -> String {
    format!("{label} Trend ({window}-yr avg)")
}

pub fn threshold_label(threshold: f64) -> String {
    format!("Days ≥ {threshold}°F")
}
