//! Layout composition: label/value placement into a closed plan.
//!
//! The combinatorial heart of the engine. Every combination of chart kind,
//! label position, value position, and `show_value` maps to exactly one
//! [`LayoutPlan`]; there is no fall-through case.

use crate::config::{ChartKind, LabelPosition, ValuePosition};
use serde::{Deserialize, Serialize};

/// Overall arrangement: one horizontal row, or vertically stacked rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stacking {
    /// Single row: label, indicator, and value flow horizontally.
    Inline,
    /// Stacked rows: one or both text slots sit on rows above the
    /// indicator.
    Block,
}

/// Placement of one slot relative to the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// In the same row, before the indicator.
    BeforeIndicatorInline,
    /// On its own row (or a shared header row) above the indicator.
    BeforeIndicatorBlock,
    /// In the same row, after the indicator.
    AfterIndicatorInline,
    /// On its own row below the indicator.
    AfterIndicatorBlock,
    /// Not rendered.
    Omitted,
}

impl Placement {
    /// Whether this slot renders before the indicator.
    #[must_use]
    pub const fn is_before(self) -> bool {
        matches!(self, Self::BeforeIndicatorInline | Self::BeforeIndicatorBlock)
    }

    /// Whether this slot renders after the indicator.
    #[must_use]
    pub const fn is_after(self) -> bool {
        matches!(self, Self::AfterIndicatorInline | Self::AfterIndicatorBlock)
    }

    /// Whether this slot is not rendered at all.
    #[must_use]
    pub const fn is_omitted(self) -> bool {
        matches!(self, Self::Omitted)
    }
}

/// The three renderable slots of one item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// Textual label.
    Label,
    /// Bar or sector visual.
    Indicator,
    /// Formatted value text.
    Value,
}

/// Resolved arrangement of label, indicator, and value for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// Row arrangement.
    pub stacking: Stacking,
    /// Label slot placement.
    pub label: Placement,
    /// Value slot placement.
    pub value: Placement,
    /// Label and value share one combined row before the indicator, label
    /// left-aligned and value right-aligned. Never two separate stacked
    /// rows.
    pub shared_header_row: bool,
}

impl LayoutPlan {
    /// Plan for a missing entity: the label alone on a single inline row,
    /// no indicator, no value.
    #[must_use]
    pub const fn missing() -> Self {
        Self {
            stacking: Stacking::Inline,
            label: Placement::BeforeIndicatorInline,
            value: Placement::Omitted,
            shared_header_row: false,
        }
    }

    /// Slots in render order: before-indicator slots (label first, value
    /// right-aligned beside it), then the indicator, then after-indicator
    /// slots.
    #[must_use]
    pub fn slots(&self) -> Vec<SlotKind> {
        let mut slots = Vec::with_capacity(3);
        if self.label.is_before() {
            slots.push(SlotKind::Label);
        }
        if self.value.is_before() {
            slots.push(SlotKind::Value);
        }
        slots.push(SlotKind::Indicator);
        if self.label.is_after() {
            slots.push(SlotKind::Label);
        }
        if self.value.is_after() {
            slots.push(SlotKind::Value);
        }
        slots
    }
}

/// Compose the layout plan for one item.
///
/// Bar indicators honor the full position table. Pie and donut render the
/// label/value pair beside the arc, so their positions are accepted but
/// fixed to `{left, right}`. `show_value = false` omits the value slot
/// everywhere, and an omitted slot does not influence stacking.
#[must_use]
pub fn compose(
    kind: ChartKind,
    label_position: LabelPosition,
    value_position: ValuePosition,
    show_value: bool,
) -> LayoutPlan {
    let (label_position, value_position) = match kind {
        ChartKind::Bar => (label_position, value_position),
        ChartKind::Pie | ChartKind::Donut => (LabelPosition::Left, ValuePosition::Right),
    };
    let value_position = if show_value {
        value_position
    } else {
        ValuePosition::None
    };

    let stacking = if label_position == LabelPosition::Above
        || value_position == ValuePosition::Above
    {
        Stacking::Block
    } else {
        Stacking::Inline
    };

    let label = match label_position {
        LabelPosition::None => Placement::Omitted,
        LabelPosition::Left => Placement::BeforeIndicatorInline,
        LabelPosition::Above => Placement::BeforeIndicatorBlock,
    };

    let value = match value_position {
        ValuePosition::None => Placement::Omitted,
        ValuePosition::Right => Placement::AfterIndicatorInline,
        ValuePosition::Above => Placement::BeforeIndicatorBlock,
    };

    LayoutPlan {
        stacking,
        label,
        value,
        shared_header_row: value_position == ValuePosition::Above
            && label_position != LabelPosition::None,
    }
}
