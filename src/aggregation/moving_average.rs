//! Centered moving averages and the window sizes used for them.

use crate::types::display_options::WindowSelector;

/// Smallest window the automatic selector and the secondary axis will use.
pub const MIN_AUTO_WINDOW: usize = 3;
/// Largest window the automatic selector will use.
pub const MAX_AUTO_WINDOW: usize = 10;

/// Centered moving average with the window clamped at both ends.
///
/// Element `i` is the mean of `values[i - window/2 ..= i + window/2]`, cut to
/// the slice bounds. Missing and non-finite values count as `0.0` but still
/// count toward the divisor. The output has the same length as the input;
/// a window of `0` behaves like a window of `1`.
///
/// # Examples
///
/// ```
/// use weather_trends::moving_average;
///
/// let smoothed = moving_average(&[Some(10.0), Some(20.0), Some(30.0)], 3);
/// assert_eq!(smoothed, vec![15.0, 20.0, 25.0]);
/// ```
pub fn moving_average(values: &[Option<f64>], window: usize) -> Vec<f64> {
    let half = window / 2;
    let len = values.len();
    (0..len)
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(len - 1);
            let slice = &values[start..=end];
            let sum: f64 = slice
                .iter()
                .map(|v| v.filter(|x| x.is_finite()).unwrap_or(0.0))
                .sum();
            sum / slice.len() as f64
        })
        .collect()
}

/// Resolves the window selector against the number of years being plotted.
///
/// * `Auto`: a quarter of the years, kept within `3..=10`.
/// * `Fixed(n)`: `n`, but no more than half the years (and at least 1).
pub fn resolve_window(selector: WindowSelector, year_count: usize) -> usize {
    match selector {
        WindowSelector::Auto => (year_count / 4).clamp(MIN_AUTO_WINDOW, MAX_AUTO_WINDOW),
        WindowSelector::Fixed(n) => n.min(year_count / 2).max(1),
    }
}

/// Window for the threshold-days trend: half the temperature window, at least 3.
pub fn secondary_window(primary: usize) -> usize {
    (primary / 2).max(MIN_AUTO_WINDOW)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_centered_window_clamps_at_edges() {
        assert_eq!(
            moving_average(&some(&[10.0, 20.0, 30.0]), 3),
            vec![15.0, 20.0, 25.0]
        );
    }

    #[test]
    fn test_length_is_preserved() {
        let values = some(&[1.0, 4.0, 2.0, 8.0, 5.0, 7.0, 3.0]);
        for window in 1..=values.len() {
            assert_eq!(moving_average(&values, window).len(), values.len());
        }
        assert!(moving_average(&[], 5).is_empty());
    }

    #[test]
    fn test_window_of_one_is_identity() {
        let values = some(&[3.5, -1.0, 12.25]);
        assert_eq!(moving_average(&values, 1), vec![3.5, -1.0, 12.25]);
        assert_eq!(moving_average(&values, 0), vec![3.5, -1.0, 12.25]);
    }

    #[test]
    fn test_missing_values_count_as_zero() {
        let values = vec![Some(10.0), None, Some(30.0), Some(f64::NAN)];
        // Divisors include the missing slots.
        assert_eq!(moving_average(&values, 3), vec![5.0, 40.0 / 3.0, 10.0, 15.0]);
    }

    #[test]
    fn test_even_window_uses_half_on_each_side() {
        // window 4 -> two neighbours either side
        let values = some(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(moving_average(&values, 4), vec![2.0, 2.5, 3.0, 3.5, 4.0]);
    }

    #[test]
    fn test_auto_window_resolution() {
        assert_eq!(resolve_window(WindowSelector::Auto, 40), 10);
        assert_eq!(resolve_window(WindowSelector::Auto, 8), 3);
        assert_eq!(resolve_window(WindowSelector::Auto, 24), 6);
        assert_eq!(resolve_window(WindowSelector::Auto, 100), 10);
        assert_eq!(resolve_window(WindowSelector::Auto, 1), 3);
    }

    #[test]
    fn test_fixed_window_is_capped_to_half_the_years() {
        assert_eq!(resolve_window(WindowSelector::Fixed(5), 30), 5);
        assert_eq!(resolve_window(WindowSelector::Fixed(20), 30), 15);
        assert_eq!(resolve_window(WindowSelector::Fixed(7), 1), 1);
    }

    #[test]
    fn test_secondary_window() {
        assert_eq!(secondary_window(10), 5);
        assert_eq!(secondary_window(7), 3);
        assert_eq!(secondary_window(3), 3);
        assert_eq!(secondary_window(1), 3);
    }
}
