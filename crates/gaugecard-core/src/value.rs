//! Value resolution: host state lookup, parsing, rounding, percent.
//!
//! Resolution is a display fallback chain, not a validation layer: a
//! missing entity degrades to a "not found" item and an unparseable state
//! reads as zero. Nothing here returns an error.

use crate::config::ItemConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entity's state as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEntry {
    /// Raw state string; numeric states parse as `f64`.
    pub state: String,
    /// Unit reported by the source, if any.
    #[serde(default)]
    pub unit_of_measurement: Option<String>,
}

impl StateEntry {
    /// Create a state entry without a unit.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            unit_of_measurement: None,
        }
    }

    /// Attach a reported unit.
    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit_of_measurement = Some(unit.into());
        self
    }
}

/// Host-supplied lookup capability, called once per item per tick.
///
/// Implementations must be synchronous in-memory reads; the engine performs
/// no I/O of its own.
pub trait StateLookup {
    /// Look up an entity's current state by its opaque source id.
    fn lookup(&self, source_id: &str) -> Option<StateEntry>;
}

impl StateLookup for HashMap<String, StateEntry> {
    fn lookup(&self, source_id: &str) -> Option<StateEntry> {
        self.get(source_id).cloned()
    }
}

/// Closure adapter for [`StateLookup`].
///
/// A blanket impl over `Fn` would overlap the map impl under coherence
/// rules, so closures go through this wrapper instead.
#[derive(Debug, Clone, Copy)]
pub struct FnLookup<F>(pub F);

impl<F> StateLookup for FnLookup<F>
where
    F: Fn(&str) -> Option<StateEntry>,
{
    fn lookup(&self, source_id: &str) -> Option<StateEntry> {
        (self.0)(source_id)
    }
}

/// A numeric reading resolved for one item, recomputed every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedValue {
    /// Parsed state value; `0.0` when missing or unparseable.
    pub raw: f64,
    /// `raw` after the item's rounding setting.
    pub display: f64,
    /// `raw / max * 100`, clamped to `[0, 100]`.
    pub percent: f64,
    /// Unit after the override chain: item config, then source, then empty.
    pub unit: String,
    /// False when the lookup reported no entity for the source id.
    pub found: bool,
}

impl ResolvedValue {
    /// The degraded value for a source id the host knows nothing about.
    #[must_use]
    pub const fn not_found() -> Self {
        Self {
            raw: 0.0,
            display: 0.0,
            percent: 0.0,
            unit: String::new(),
            found: false,
        }
    }

    /// Formatted value-plus-unit text, e.g. `"42%"` or `"3.14 kWh"` when
    /// the unit carries its own leading space.
    #[must_use]
    pub fn display_text(&self, decimals: Option<u32>) -> String {
        match decimals {
            Some(n) => format!("{:.*}{}", n as usize, self.display, self.unit),
            None => format!("{}{}", self.display, self.unit),
        }
    }
}

/// Round to `decimals` fractional digits, half away from zero.
///
/// `None` leaves the value untouched. Uses `f64::round` after scaling, so
/// ties round away from zero (`3.5 -> 4`, `-3.5 -> -4`).
#[must_use]
pub fn round_to(value: f64, decimals: Option<u32>) -> f64 {
    match decimals {
        None => value,
        Some(0) => value.round(),
        Some(n) => {
            let scale = 10f64.powi(n as i32);
            (value * scale).round() / scale
        }
    }
}

/// Resolve an item's current value through the host lookup.
///
/// Never fails: a missing entity yields [`ResolvedValue::not_found`] and a
/// non-numeric or non-finite state reads as `0.0` with `found` still true.
/// Filtering non-finite parses keeps the percent invariant: `"NaN"` and
/// `"inf"` are valid `f64` literals but must never reach the clamp.
pub fn resolve(item: &ItemConfig, lookup: &impl StateLookup) -> ResolvedValue {
    let Some(entry) = lookup.lookup(&item.source_id) else {
        return ResolvedValue::not_found();
    };

    let raw = entry
        .state
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0);
    let unit = item
        .unit
        .clone()
        .or(entry.unit_of_measurement)
        .unwrap_or_default();

    ResolvedValue {
        raw,
        display: round_to(raw, item.decimals),
        percent: (raw / item.max * 100.0).clamp(0.0, 100.0),
        unit,
        found: true,
    }
}
