//! Threshold-gradient color selection.
//!
//! A gradient is an ordered table of `{from, color}` stops. Selection walks
//! the table as if it were sorted descending by threshold and returns the
//! first stop whose threshold the value reaches; a value below every
//! threshold falls back to the lowest-threshold stop. The caller's table is
//! never reordered.

use serde::{Deserialize, Serialize};

/// Fill color used when an item has no gradient configured.
pub const DEFAULT_FILL: &str = "#5cd679";

/// Track (background) color used when an item sets no override.
pub const DEFAULT_TRACK: &str = "#2f3a3f";

/// One stop in a threshold gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Threshold at which this stop's color starts applying.
    pub from: f64,
    /// Opaque color token, passed through to the renderer unmodified.
    pub color: String,
}

impl GradientStop {
    /// Create a new gradient stop.
    #[must_use]
    pub fn new(from: f64, color: impl Into<String>) -> Self {
        Self {
            from,
            color: color.into(),
        }
    }
}

/// Select the display color for `value` from a threshold gradient.
///
/// Returns [`DEFAULT_FILL`] for an empty gradient. Otherwise returns the
/// color of the highest-threshold stop with `from <= value`; if the value
/// sits below every threshold, the lowest-threshold stop wins. Stops with
/// equal thresholds resolve to the earliest one in the table.
///
/// Pure: the same `(gradient, value)` always yields the same color and the
/// gradient is never mutated.
#[must_use]
pub fn select_color(gradient: &[GradientStop], value: f64) -> &str {
    let mut qualifying: Option<&GradientStop> = None;
    let mut lowest: Option<&GradientStop> = None;

    for stop in gradient {
        if stop.from <= value && qualifying.map_or(true, |best| stop.from > best.from) {
            qualifying = Some(stop);
        }
        if lowest.map_or(true, |low| stop.from < low.from) {
            lowest = Some(stop);
        }
    }

    qualifying
        .or(lowest)
        .map_or(DEFAULT_FILL, |stop| stop.color.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_gradient() -> Vec<GradientStop> {
        vec![
            GradientStop::new(80.0, "red"),
            GradientStop::new(50.0, "yellow"),
            GradientStop::new(0.0, "green"),
        ]
    }

    #[test]
    fn test_empty_gradient_uses_default() {
        assert_eq!(select_color(&[], 42.0), DEFAULT_FILL);
    }

    #[test]
    fn test_threshold_selection() {
        let g = sample_gradient();
        assert_eq!(select_color(&g, 90.0), "red");
        assert_eq!(select_color(&g, 80.0), "red");
        assert_eq!(select_color(&g, 60.0), "yellow");
        assert_eq!(select_color(&g, 10.0), "green");
    }

    #[test]
    fn test_below_all_thresholds_falls_back_to_minimum() {
        let g = sample_gradient();
        assert_eq!(select_color(&g, -5.0), "green");
    }

    #[test]
    fn test_unsorted_input_behaves_like_sorted() {
        // Same stops as sample_gradient, shuffled. Selection must not
        // depend on table order.
        let g = vec![
            GradientStop::new(0.0, "green"),
            GradientStop::new(80.0, "red"),
            GradientStop::new(50.0, "yellow"),
        ];
        assert_eq!(select_color(&g, 90.0), "red");
        assert_eq!(select_color(&g, 60.0), "yellow");
        assert_eq!(select_color(&g, -5.0), "green");
    }

    #[test]
    fn test_fallback_to_minimum_with_unsorted_input() {
        // The lowest threshold wins even when it is not last in the table.
        let g = vec![
            GradientStop::new(10.0, "blue"),
            GradientStop::new(5.0, "teal"),
            GradientStop::new(40.0, "orange"),
        ];
        assert_eq!(select_color(&g, 1.0), "teal");
    }

    #[test]
    fn test_equal_thresholds_prefer_earlier_stop() {
        let g = vec![
            GradientStop::new(50.0, "first"),
            GradientStop::new(50.0, "second"),
        ];
        assert_eq!(select_color(&g, 60.0), "first");
        assert_eq!(select_color(&g, 10.0), "first");
    }

    #[test]
    fn test_single_stop() {
        let g = vec![GradientStop::new(30.0, "purple")];
        assert_eq!(select_color(&g, 100.0), "purple");
        assert_eq!(select_color(&g, 0.0), "purple");
    }

    #[test]
    fn test_selection_does_not_mutate_gradient() {
        let g = vec![
            GradientStop::new(0.0, "green"),
            GradientStop::new(80.0, "red"),
        ];
        let before = g.clone();
        let _ = select_color(&g, 42.0);
        assert_eq!(g, before);
    }

    proptest! {
        #[test]
        fn prop_selection_is_deterministic(
            thresholds in proptest::collection::vec(-1000.0f64..1000.0, 1..8),
            value in -2000.0f64..2000.0,
        ) {
            let g: Vec<GradientStop> = thresholds
                .iter()
                .enumerate()
                .map(|(i, &t)| GradientStop::new(t, format!("c{i}")))
                .collect();
            let first = select_color(&g, value).to_string();
            let second = select_color(&g, value).to_string();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_selected_color_is_from_gradient(
            thresholds in proptest::collection::vec(-1000.0f64..1000.0, 1..8),
            value in -2000.0f64..2000.0,
        ) {
            let g: Vec<GradientStop> = thresholds
                .iter()
                .enumerate()
                .map(|(i, &t)| GradientStop::new(t, format!("c{i}")))
                .collect();
            let chosen = select_color(&g, value);
            prop_assert!(g.iter().any(|s| s.color == chosen));
        }
    }
}
