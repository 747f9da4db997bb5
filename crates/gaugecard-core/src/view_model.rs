//! Per-tick view-model assembly.
//!
//! [`build`] is the orchestration point: for each configured item it runs
//! value resolution, gradient color selection, and layout composition, and
//! collects the results into an immutable [`CardViewModel`]. Pure given its
//! inputs; a fresh tree is produced every tick and nothing is cached.

use crate::config::{CardConfig, ChartKind, ItemConfig};
use crate::gradient::{select_color, DEFAULT_TRACK};
use crate::layout::{compose, LayoutPlan, SlotKind};
use crate::value::{resolve, ResolvedValue, StateLookup};
use serde::{Deserialize, Serialize};

/// Fill-width transition duration, a static style hint for the renderer.
pub const FILL_TRANSITION_MS: u32 = 300;

/// Donut hole radius as a fraction of the outer radius.
pub const DONUT_HOLE_RATIO: f64 = 0.6;

/// Geometry of one item's indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorShape {
    /// Linear track filled to `percent` of its width.
    Bar {
        /// Track thickness in pixels.
        height: f64,
    },
    /// Circular sector of `sweep_degrees` over a full background ring.
    Sector {
        /// Filled extent, `percent * 3.6` degrees.
        sweep_degrees: f64,
        /// Center hole radius as a fraction of the outer radius; `0.0`
        /// for pie, [`DONUT_HOLE_RATIO`] for donut. The hole is painted in
        /// the panel background color.
        hole_ratio: f64,
    },
}

/// Render-ready description of one item, recomputed every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemViewModel {
    /// Display label.
    pub name: String,
    /// Source id, exposed so the host can wire activation back to the
    /// entity without reaching into the engine.
    pub source_id: String,
    /// Icon identifier passthrough.
    pub icon: Option<String>,
    /// Resolved numeric reading.
    pub value: ResolvedValue,
    /// Fill color chosen from the item's gradient.
    pub color: String,
    /// Track color.
    pub background_color: String,
    /// Formatted value-plus-unit text; empty for a missing entity.
    pub display_text: String,
    /// Arrangement of label, indicator, and value slots.
    pub layout: LayoutPlan,
    /// Indicator geometry; `None` for a missing entity, which renders as a
    /// label-only row.
    pub indicator: Option<IndicatorShape>,
}

impl ItemViewModel {
    /// Slots to render, in order. Unlike [`LayoutPlan::slots`] this drops
    /// the indicator slot for a missing entity.
    #[must_use]
    pub fn slots(&self) -> Vec<SlotKind> {
        let mut slots = self.layout.slots();
        if self.indicator.is_none() {
            slots.retain(|slot| *slot != SlotKind::Indicator);
        }
        slots
    }

    /// Whether the entity behind this item was found by the host lookup.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.value.found
    }
}

/// Render-ready description of the whole card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardViewModel {
    /// Card title passthrough.
    pub title: Option<String>,
    /// Item view models in configured (display) order.
    pub items: Vec<ItemViewModel>,
}

/// Build the card view model for one tick.
///
/// Iterates items in configured order and never fails: per-item problems
/// degrade within that item's view model. The configuration is expected to
/// have passed [`CardConfig::validate`] at configuration-set time.
#[must_use]
pub fn build(config: &CardConfig, lookup: &impl StateLookup) -> CardViewModel {
    CardViewModel {
        title: config.title.clone(),
        items: config
            .items
            .iter()
            .map(|item| build_item(item, lookup))
            .collect(),
    }
}

fn build_item(item: &ItemConfig, lookup: &impl StateLookup) -> ItemViewModel {
    let value = resolve(item, lookup);
    let color = select_color(&item.color_gradient, value.raw).to_string();

    let (layout, indicator, display_text) = if value.found {
        let layout = compose(
            item.chart_kind,
            item.label_position,
            item.value_position,
            item.show_value,
        );
        let indicator = match item.chart_kind {
            ChartKind::Bar => IndicatorShape::Bar {
                height: item.height,
            },
            ChartKind::Pie => IndicatorShape::Sector {
                sweep_degrees: value.percent * 3.6,
                hole_ratio: 0.0,
            },
            ChartKind::Donut => IndicatorShape::Sector {
                sweep_degrees: value.percent * 3.6,
                hole_ratio: DONUT_HOLE_RATIO,
            },
        };
        let display_text = value.display_text(item.decimals);
        (layout, Some(indicator), display_text)
    } else {
        (LayoutPlan::missing(), None, String::new())
    };

    ItemViewModel {
        name: item.name.clone(),
        source_id: item.source_id.clone(),
        icon: item.icon.clone(),
        value,
        color,
        background_color: item
            .background_color
            .clone()
            .unwrap_or_else(|| DEFAULT_TRACK.to_string()),
        display_text,
        layout,
        indicator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LabelPosition, ValuePosition};
    use crate::gradient::{GradientStop, DEFAULT_FILL};
    use crate::layout::Stacking;
    use crate::value::StateEntry;
    use std::collections::HashMap;

    fn states(pairs: &[(&str, StateEntry)]) -> HashMap<String, StateEntry> {
        pairs
            .iter()
            .map(|(id, entry)| ((*id).to_string(), entry.clone()))
            .collect()
    }

    #[test]
    fn test_end_to_end_single_bar() {
        let config = CardConfig::new(vec![ItemConfig::new("Battery", "s1")]);
        let lookup = states(&[("s1", StateEntry::new("42"))]);
        let card = build(&config, &lookup);

        assert!(card.title.is_none());
        assert_eq!(card.items.len(), 1);
        let item = &card.items[0];
        assert_eq!(item.name, "Battery");
        assert_eq!(item.source_id, "s1");
        assert_eq!(item.value.percent, 42.0);
        assert_eq!(item.value.display, 42.0);
        assert_eq!(item.color, DEFAULT_FILL);
        assert_eq!(item.background_color, DEFAULT_TRACK);
        assert_eq!(item.indicator, Some(IndicatorShape::Bar { height: 12.0 }));
    }

    #[test]
    fn test_title_passthrough() {
        let config =
            CardConfig::new(vec![ItemConfig::new("A", "s1")]).title("Power overview");
        let card = build(&config, &states(&[("s1", StateEntry::new("1"))]));
        assert_eq!(card.title.as_deref(), Some("Power overview"));
    }

    #[test]
    fn test_items_keep_configured_order() {
        let config = CardConfig::new(vec![
            ItemConfig::new("B", "s2"),
            ItemConfig::new("A", "s1"),
            ItemConfig::new("B again", "s2"),
        ]);
        let lookup = states(&[
            ("s1", StateEntry::new("1")),
            ("s2", StateEntry::new("2")),
        ]);
        let card = build(&config, &lookup);
        let names: Vec<&str> = card.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "B again"]);
    }

    #[test]
    fn test_missing_entity_degrades_to_label_only() {
        let config = CardConfig::new(vec![ItemConfig::new("Ghost", "nope")]);
        let card = build(&config, &states(&[]));
        let item = &card.items[0];

        assert!(!item.is_found());
        assert!(item.indicator.is_none());
        assert_eq!(item.display_text, "");
        assert_eq!(item.value.percent, 0.0);
        assert_eq!(item.slots(), vec![SlotKind::Label]);
        assert_eq!(item.layout.stacking, Stacking::Inline);
    }

    #[test]
    fn test_one_missing_item_does_not_blank_the_card() {
        let config = CardConfig::new(vec![
            ItemConfig::new("Ghost", "nope"),
            ItemConfig::new("Battery", "s1"),
        ]);
        let card = build(&config, &states(&[("s1", StateEntry::new("80"))]));
        assert!(!card.items[0].is_found());
        assert!(card.items[1].is_found());
        assert_eq!(card.items[1].value.percent, 80.0);
    }

    #[test]
    fn test_gradient_color_applied_from_raw_value() {
        let gradient = vec![
            GradientStop::new(80.0, "red"),
            GradientStop::new(50.0, "yellow"),
            GradientStop::new(0.0, "green"),
        ];
        let config = CardConfig::new(vec![
            ItemConfig::new("Load", "s1").color_gradient(gradient)
        ]);
        let card = build(&config, &states(&[("s1", StateEntry::new("60"))]));
        assert_eq!(card.items[0].color, "yellow");
    }

    #[test]
    fn test_pie_indicator_geometry() {
        let config = CardConfig::new(vec![
            ItemConfig::new("Disk", "s1").chart_kind(ChartKind::Pie)
        ]);
        let card = build(&config, &states(&[("s1", StateEntry::new("50"))]));
        assert_eq!(
            card.items[0].indicator,
            Some(IndicatorShape::Sector {
                sweep_degrees: 180.0,
                hole_ratio: 0.0,
            })
        );
    }

    #[test]
    fn test_donut_indicator_has_hole() {
        let config = CardConfig::new(vec![
            ItemConfig::new("Disk", "s1").chart_kind(ChartKind::Donut)
        ]);
        let card = build(&config, &states(&[("s1", StateEntry::new("25"))]));
        assert_eq!(
            card.items[0].indicator,
            Some(IndicatorShape::Sector {
                sweep_degrees: 90.0,
                hole_ratio: DONUT_HOLE_RATIO,
            })
        );
    }

    #[test]
    fn test_clamped_percent_caps_sweep() {
        let config = CardConfig::new(vec![
            ItemConfig::new("Disk", "s1").chart_kind(ChartKind::Pie)
        ]);
        let card = build(&config, &states(&[("s1", StateEntry::new("400"))]));
        assert_eq!(
            card.items[0].indicator,
            Some(IndicatorShape::Sector {
                sweep_degrees: 360.0,
                hole_ratio: 0.0,
            })
        );
    }

    #[test]
    fn test_display_text_uses_unit_and_decimals() {
        let config = CardConfig::new(vec![
            ItemConfig::new("Temp", "s1").unit("°C").decimals(1)
        ]);
        let card = build(&config, &states(&[("s1", StateEntry::new("21.77"))]));
        assert_eq!(card.items[0].display_text, "21.8°C");
    }

    #[test]
    fn test_layout_reflects_positions() {
        let config = CardConfig::new(vec![ItemConfig::new("A", "s1")
            .label_position(LabelPosition::Left)
            .value_position(ValuePosition::Right)]);
        let card = build(&config, &states(&[("s1", StateEntry::new("1"))]));
        let item = &card.items[0];
        assert_eq!(item.layout.stacking, Stacking::Inline);
        assert_eq!(
            item.slots(),
            vec![SlotKind::Label, SlotKind::Indicator, SlotKind::Value]
        );
    }

    #[test]
    fn test_background_color_override() {
        let config = CardConfig::new(vec![
            ItemConfig::new("A", "s1").background_color("#123456")
        ]);
        let card = build(&config, &states(&[("s1", StateEntry::new("1"))]));
        assert_eq!(card.items[0].background_color, "#123456");
    }

    #[test]
    fn test_icon_passthrough() {
        let config = CardConfig::new(vec![
            ItemConfig::new("A", "s1").icon("mdi:battery")
        ]);
        let card = build(&config, &states(&[("s1", StateEntry::new("1"))]));
        assert_eq!(card.items[0].icon.as_deref(), Some("mdi:battery"));
    }

    #[test]
    fn test_build_is_pure_and_repeatable() {
        let gradient = vec![
            GradientStop::new(0.0, "green"),
            GradientStop::new(80.0, "red"),
        ];
        let config = CardConfig::new(vec![
            ItemConfig::new("Load", "s1").color_gradient(gradient)
        ]);
        let lookup = states(&[("s1", StateEntry::new("90"))]);

        let first = build(&config, &lookup);
        let second = build(&config, &lookup);
        assert_eq!(first, second);
        // Gradient order in the config is untouched across ticks.
        assert_eq!(config.items[0].color_gradient[0].from, 0.0);
        assert_eq!(config.items[0].color_gradient[1].from, 80.0);
    }
}
