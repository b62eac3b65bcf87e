//! Renderer-agnostic chart description produced by [`crate::build_chart_spec`].
//!
//! Colors, widths and dash styles are presentation hints for the rendering
//! collaborator; nothing in the crate depends on them.

use serde::{Deserialize, Serialize};

/// Which y-axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    /// Temperature axis on the left.
    Primary,
    /// Day-count axis on the right, only present with threshold series.
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesMode {
    Lines,
    Markers,
    LinesMarkers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dash {
    Solid,
    Dash,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleHint {
    pub color: String,
    pub width: f64,
    pub dash: Dash,
}

impl StyleHint {
    pub fn new(color: &str, width: f64, dash: Dash) -> Self {
        Self {
            color: color.to_string(),
            width,
            dash,
        }
    }
}

/// One plotted series. `x` and `y` always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub name: String,
    pub x: Vec<i32>,
    /// `None` marks a gap (the source value was missing or unparseable).
    pub y: Vec<Option<f64>>,
    pub axis: AxisId,
    pub mode: SeriesMode,
    pub style: StyleHint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryAxis {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub secondary: Option<SecondaryAxis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub series: Vec<SeriesSpec>,
    pub layout: AxisLayout,
}

impl ChartSpec {
    pub fn has_secondary_axis(&self) -> bool {
        self.layout.secondary.is_some()
    }

    /// Looks up a series by its display name.
    pub fn series_named(&self, name: &str) -> Option<&SeriesSpec> {
        self.series.iter().find(|s| s.name == name)
    }
}
