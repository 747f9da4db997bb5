//! Configuration-to-view-model engine for gaugecard sensor indicator cards.
//!
//! Given a validated [`CardConfig`] and a host-supplied [`StateLookup`],
//! [`build`] produces a render-ready [`CardViewModel`] per refresh tick:
//! resolved numeric value, gradient color, layout plan, and indicator
//! geometry for every configured item. The engine is synchronous, pure,
//! and allocation-light; materializing pixels or markup from the view
//! model is the host's job.

pub mod arc;
pub mod config;
pub mod gradient;
pub mod layout;
pub mod value;
pub mod view_model;

pub use arc::{sector_path, Point, SectorPath};
pub use config::{
    CardConfig, ChartKind, ConfigError, ItemConfig, LabelPosition, ValuePosition, DEFAULT_HEIGHT,
    DEFAULT_MAX,
};
pub use gradient::{select_color, GradientStop, DEFAULT_FILL, DEFAULT_TRACK};
pub use layout::{compose, LayoutPlan, Placement, SlotKind, Stacking};
pub use value::{resolve, round_to, FnLookup, ResolvedValue, StateEntry, StateLookup};
pub use view_model::{
    build, CardViewModel, IndicatorShape, ItemViewModel, DONUT_HOLE_RATIO, FILL_TRANSITION_MS,
};
