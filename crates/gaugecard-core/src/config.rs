//! Card and item configuration types.
//!
//! A [`CardConfig`] is created once when the card is configured and is
//! immutable thereafter; a new configuration replaces it wholesale. All
//! per-tick state lives in the view model, never here.

use crate::gradient::GradientStop;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default denominator for percent computation.
pub const DEFAULT_MAX: f64 = 100.0;

/// Default indicator thickness in pixels.
pub const DEFAULT_HEIGHT: f64 = 12.0;

/// Where the item label is placed relative to the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// No label.
    None,
    /// Inline, before the indicator.
    Left,
    /// On its own row above the indicator.
    #[default]
    Above,
}

/// Where the formatted value is placed relative to the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuePosition {
    /// No value.
    None,
    /// Inline, after the indicator.
    #[default]
    Right,
    /// On a row above the indicator.
    Above,
}

/// Indicator chart variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Linear fill bar.
    #[default]
    Bar,
    /// Circular sector over a full background ring.
    Pie,
    /// Pie with a punched-out center hole.
    Donut,
}

/// Configuration for one sensor-to-indicator mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    /// Display label.
    pub name: String,
    /// Opaque key into the host's state lookup.
    pub source_id: String,
    /// Unit override; when absent the source-reported unit applies.
    #[serde(default)]
    pub unit: Option<String>,
    /// Denominator for percent computation. Must be positive.
    #[serde(default = "default_max")]
    pub max: f64,
    /// Rounding: `None` shows the value unrounded, `Some(0)` rounds to the
    /// nearest integer, `Some(n)` to `n` fractional digits.
    #[serde(default)]
    pub decimals: Option<u32>,
    /// Opaque icon identifier, passed through unmodified.
    #[serde(default)]
    pub icon: Option<String>,
    /// Threshold gradient; empty means the default fill color.
    #[serde(default)]
    pub color_gradient: Vec<GradientStop>,
    /// Track color override.
    #[serde(default)]
    pub background_color: Option<String>,
    /// Indicator thickness.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Label placement.
    #[serde(default)]
    pub label_position: LabelPosition,
    /// Value placement.
    #[serde(default)]
    pub value_position: ValuePosition,
    /// When false the value slot is omitted regardless of placement.
    #[serde(default = "default_show_value")]
    pub show_value: bool,
    /// Chart variant for this item.
    #[serde(default)]
    pub chart_kind: ChartKind,
}

fn default_max() -> f64 {
    DEFAULT_MAX
}

fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

fn default_show_value() -> bool {
    true
}

impl ItemConfig {
    /// Create an item config with defaults for everything but the label and
    /// data source.
    #[must_use]
    pub fn new(name: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_id: source_id.into(),
            unit: None,
            max: DEFAULT_MAX,
            decimals: None,
            icon: None,
            color_gradient: Vec::new(),
            background_color: None,
            height: DEFAULT_HEIGHT,
            label_position: LabelPosition::default(),
            value_position: ValuePosition::default(),
            show_value: true,
            chart_kind: ChartKind::default(),
        }
    }

    /// Set the unit override.
    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the percent denominator.
    #[must_use]
    pub const fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Set the rounding precision.
    #[must_use]
    pub const fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Set the icon identifier.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the threshold gradient.
    #[must_use]
    pub fn color_gradient(mut self, gradient: impl IntoIterator<Item = GradientStop>) -> Self {
        self.color_gradient = gradient.into_iter().collect();
        self
    }

    /// Set the track color override.
    #[must_use]
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the indicator thickness.
    #[must_use]
    pub const fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the label placement.
    #[must_use]
    pub const fn label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    /// Set the value placement.
    #[must_use]
    pub const fn value_position(mut self, position: ValuePosition) -> Self {
        self.value_position = position;
        self
    }

    /// Set whether the value slot is rendered at all.
    #[must_use]
    pub const fn show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    /// Set the chart variant.
    #[must_use]
    pub const fn chart_kind(mut self, kind: ChartKind) -> Self {
        self.chart_kind = kind;
        self
    }
}

/// Full card configuration: optional title plus the ordered item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Card title, omitted from the view model when absent.
    #[serde(default)]
    pub title: Option<String>,
    /// Items in display order. Order is significant and duplicates are
    /// allowed.
    pub items: Vec<ItemConfig>,
}

/// Fatal configuration errors, surfaced once at configuration time.
///
/// Per-item problems at refresh time (missing entity, unparseable state,
/// degenerate gradient) are never errors; they degrade in the view model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The card declares no items.
    #[error("card configuration needs at least one item")]
    NoItems,
    /// An item's `max` is zero or negative.
    #[error("item '{name}': max must be positive, got {max}")]
    NonPositiveMax {
        /// Offending item's label.
        name: String,
        /// Configured denominator.
        max: f64,
    },
}

impl CardConfig {
    /// Create a card config from an item list.
    #[must_use]
    pub const fn new(items: Vec<ItemConfig>) -> Self {
        Self { title: None, items }
    }

    /// Set the card title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Validate the configuration.
    ///
    /// Runs once at configuration-set time; a failure here is fatal to card
    /// construction, never to a later refresh.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        for item in &self.items {
            if item.max <= 0.0 {
                return Err(ConfigError::NonPositiveMax {
                    name: item.name.clone(),
                    max: item.max,
                });
            }
        }
        Ok(())
    }

    /// Sizing hint for the host's layout grid: `2 * item count + 1`.
    #[must_use]
    pub fn estimate_size(&self) -> usize {
        2 * self.items.len() + 1
    }
}
