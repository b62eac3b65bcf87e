//! User-selected display options, passed by value into the chart builder on
//! every redraw.

use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the moving-average window is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowSelector {
    /// Derive the window from the number of years on screen.
    #[default]
    Auto,
    /// A fixed window in years, capped to half the number of years.
    Fixed(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid moving-average window '{0}': expected \"auto\" or a positive integer")]
pub struct ParseWindowError(pub String);

/// Parses the value of the window selector control: `"auto"` or a positive integer.
///
/// # Examples
///
/// ```
/// use weather_trends::WindowSelector;
///
/// assert_eq!("auto".parse(), Ok(WindowSelector::Auto));
/// assert_eq!("7".parse(), Ok(WindowSelector::Fixed(7)));
/// assert!("0".parse::<WindowSelector>().is_err());
/// ```
impl FromStr for WindowSelector {
    type Err = ParseWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(WindowSelector::Auto);
        }
        match trimmed.parse::<usize>() {
            Ok(n) if n > 0 => Ok(WindowSelector::Fixed(n)),
            _ => Err(ParseWindowError(s.to_string())),
        }
    }
}

impl fmt::Display for WindowSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowSelector::Auto => write!(f, "auto"),
            WindowSelector::Fixed(n) => write!(f, "{n}"),
        }
    }
}

/// Which series are drawn and how they are smoothed.
///
/// `average` and `mean` are separate toggles that both plot the yearly mean
/// temperature; the dashboard exposes them as two options.
///
/// # Examples
///
/// ```
/// use weather_trends::{DisplayOptions, WindowSelector};
///
/// let options = DisplayOptions::builder()
///     .show_threshold_days(true)
///     .threshold(95.0)
///     .window(WindowSelector::Fixed(5))
///     .build();
/// assert!(options.show_max);
/// assert_eq!(options.threshold, 95.0);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[builder(default = true)]
    pub show_max: bool,
    #[builder(default = true)]
    pub show_min: bool,
    #[builder(default = true)]
    pub show_average: bool,
    #[builder(default)]
    pub show_mean: bool,
    #[builder(default)]
    pub show_threshold_days: bool,
    /// Temperature (°F) a day's maximum must reach to be counted.
    #[builder(default = 90.0)]
    pub threshold: f64,
    #[builder(default)]
    pub window: WindowSelector,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DisplayOptions {
    /// Options with every series switched off.
    pub fn none() -> Self {
        Self::builder()
            .show_max(false)
            .show_min(false)
            .show_average(false)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DisplayOptions::default();
        assert!(options.show_max && options.show_min && options.show_average);
        assert!(!options.show_mean);
        assert!(!options.show_threshold_days);
        assert_eq!(options.threshold, 90.0);
        assert_eq!(options.window, WindowSelector::Auto);
    }

    #[test]
    fn test_none_disables_everything() {
        let options = DisplayOptions::none();
        assert!(!options.show_max);
        assert!(!options.show_min);
        assert!(!options.show_average);
        assert!(!options.show_mean);
        assert!(!options.show_threshold_days);
    }

    #[test]
    fn test_window_selector_parsing() {
        assert_eq!(" Auto ".parse(), Ok(WindowSelector::Auto));
        assert_eq!("12".parse(), Ok(WindowSelector::Fixed(12)));
        assert_eq!(
            "-3".parse::<WindowSelector>(),
            Err(ParseWindowError("-3".to_string()))
        );
        assert!("five".parse::<WindowSelector>().is_err());
        assert_eq!(WindowSelector::Fixed(4).to_string(), "4");
    }
}
