//! Sector geometry for pie and donut indicators.
//!
//! Sweeps are measured clockwise from angle zero (the positive x axis in
//! screen coordinates). The helpers here give a renderer everything an SVG
//! or canvas arc needs without trigonometry of its own.

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometry of one circular sector, ready for path construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorPath {
    /// Circle center.
    pub center: Point,
    /// Outer radius.
    pub radius: f64,
    /// Point where the sweep starts (angle zero).
    pub start: Point,
    /// Point where the sweep ends.
    pub end: Point,
    /// True when the sweep exceeds 180 degrees and the arc command must
    /// take the long way around.
    pub large_arc: bool,
}

impl SectorPath {
    /// SVG path data for this sector: move to center, line to the start
    /// point, arc to the end point, close.
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        let large = u8::from(self.large_arc);
        format!(
            "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
            self.center.x,
            self.center.y,
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            large,
            self.end.x,
            self.end.y,
        )
    }
}

/// Compute the sector swept clockwise from angle zero by `sweep_degrees`.
#[must_use]
pub fn sector_path(cx: f64, cy: f64, radius: f64, sweep_degrees: f64) -> SectorPath {
    let point_at = |degrees: f64| {
        let radians = degrees.to_radians();
        Point::new(cx + radius * radians.cos(), cy + radius * radians.sin())
    };

    SectorPath {
        center: Point::new(cx, cy),
        radius,
        start: point_at(0.0),
        end: point_at(sweep_degrees),
        large_arc: sweep_degrees > 180.0,
    }
}
