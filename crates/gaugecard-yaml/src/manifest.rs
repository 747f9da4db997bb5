//! Declarative card manifest types.
//!
//! A manifest is the raw, serde-facing mirror of [`CardConfig`]: every
//! field optional where the engine has a default, plus compatibility
//! aliases (`bars` for `items`, `entity` for `source_id`, card-level
//! `type` as the default chart kind for items that set none). Parsing
//! never applies policy; [`CardManifest::into_config`] resolves defaults
//! and runs card validation in one step.

use crate::error::ParseError;
use gaugecard_core::{
    CardConfig, ChartKind, GradientStop, ItemConfig, LabelPosition, ValuePosition, DEFAULT_HEIGHT,
    DEFAULT_MAX,
};
use serde::{Deserialize, Serialize};

/// Top-level card manifest as written by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardManifest {
    /// Card title
    #[serde(default)]
    pub title: Option<String>,
    /// Items in display order; `bars` accepted as a legacy alias
    #[serde(alias = "bars")]
    pub items: Vec<ItemManifest>,
    /// Card-level chart kind, applied to items that set none
    #[serde(rename = "type", default)]
    pub kind: Option<ChartKind>,
}

/// One item entry in a card manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemManifest {
    /// Display label
    pub name: String,
    /// State lookup key; `entity` accepted as a legacy alias
    #[serde(alias = "entity")]
    pub source_id: String,
    /// Unit override
    #[serde(default)]
    pub unit: Option<String>,
    /// Percent denominator
    #[serde(default)]
    pub max: Option<f64>,
    /// Rounding precision
    #[serde(default)]
    pub decimals: Option<u32>,
    /// Icon identifier
    #[serde(default)]
    pub icon: Option<String>,
    /// Threshold gradient
    #[serde(default)]
    pub color_gradient: Vec<GradientStop>,
    /// Track color override
    #[serde(default)]
    pub background_color: Option<String>,
    /// Indicator thickness
    #[serde(default)]
    pub height: Option<f64>,
    /// Label placement
    #[serde(default)]
    pub label_position: Option<LabelPosition>,
    /// Value placement
    #[serde(default)]
    pub value_position: Option<ValuePosition>,
    /// Whether the value slot renders
    #[serde(default)]
    pub show_value: Option<bool>,
    /// Per-item chart kind, overriding the card-level one
    #[serde(rename = "type", default, alias = "chart_kind")]
    pub kind: Option<ChartKind>,
}

impl ItemManifest {
    fn into_item(self, default_kind: ChartKind) -> ItemConfig {
        ItemConfig {
            name: self.name,
            source_id: self.source_id,
            unit: self.unit,
            max: self.max.unwrap_or(DEFAULT_MAX),
            decimals: self.decimals,
            icon: self.icon,
            color_gradient: self.color_gradient,
            background_color: self.background_color,
            height: self.height.unwrap_or(DEFAULT_HEIGHT),
            label_position: self.label_position.unwrap_or_default(),
            value_position: self.value_position.unwrap_or_default(),
            show_value: self.show_value.unwrap_or(true),
            chart_kind: self.kind.unwrap_or(default_kind),
        }
    }
}

impl CardManifest {
    /// Parse a manifest from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a manifest from JSON.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve defaults and validate into an engine [`CardConfig`].
    pub fn into_config(self) -> Result<CardConfig, ParseError> {
        let default_kind = self.kind.unwrap_or_default();
        let config = CardConfig {
            title: self.title,
            items: self
                .items
                .into_iter()
                .map(|item| item.into_item(default_kind))
                .collect(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse a YAML card manifest straight into a validated config.
pub fn from_yaml_str(yaml: &str) -> Result<CardConfig, ParseError> {
    CardManifest::from_yaml(yaml)?.into_config()
}

/// Parse a JSON card manifest straight into a validated config.
pub fn from_json_str(json: &str) -> Result<CardConfig, ParseError> {
    CardManifest::from_json(json)?.into_config()
}
