use std::f64::consts::PI;

use quiz_core::wheel::{Sector, WheelGeometry, WheelLayout};

/// Hub drawn over the middle of the wheel.
pub const HUB_RADIUS: f64 = 20.0;

const LABEL_INSET: f64 = 20.0;
const LABEL_BASELINE_SHIFT: f64 = 5.0;
const POINTER_REACH: f64 = 12.0;
const POINTER_TAIL: f64 = 8.0;
const POINTER_HALF_WIDTH: f64 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SectorSvgVm {
    pub index: usize,
    pub path: String,
    pub color: &'static str,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    pub label_transform: String,
    /// Full category name, for the hover tooltip.
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WheelSvgVm {
    pub size: f64,
    pub center: f64,
    pub sectors: Vec<SectorSvgVm>,
    pub pointer_points: String,
}

#[must_use]
pub fn map_wheel_svg(geometry: &WheelGeometry, layout: &WheelLayout) -> WheelSvgVm {
    let single = geometry.len() == 1;
    let sectors = geometry
        .sectors()
        .iter()
        .map(|sector| map_sector(sector, layout, single))
        .collect();

    WheelSvgVm {
        size: layout.size(),
        center: layout.center(),
        sectors,
        pointer_points: pointer_points(layout),
    }
}

/// SVG `transform` turning the wheel by `rotation` radians about its centre.
#[must_use]
pub fn rotation_transform(rotation: f64, center: f64) -> String {
    format!("rotate({:.3} {center:.2} {center:.2})", rotation.to_degrees())
}

fn map_sector(sector: &Sector, layout: &WheelLayout, full_circle: bool) -> SectorSvgVm {
    let center = layout.center();
    SectorSvgVm {
        index: sector.index(),
        path: if full_circle {
            circle_path(layout)
        } else {
            sector_path(sector, layout)
        },
        color: sector.color(),
        label: sector.label().to_string(),
        label_x: center + layout.radius() - LABEL_INSET,
        label_y: center + LABEL_BASELINE_SHIFT,
        label_transform: rotation_transform(sector.mid_angle(), center),
        title: sector.category().to_string(),
    }
}

fn sector_path(sector: &Sector, layout: &WheelLayout) -> String {
    let center = layout.center();
    let radius = layout.radius();
    let (x0, y0) = layout.point_at(sector.start_angle(), radius);
    let (x1, y1) = layout.point_at(sector.end_angle(), radius);
    let large_arc = u8::from(sector.end_angle() - sector.start_angle() > PI);
    format!(
        "M {center:.2} {center:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
    )
}

// An arc whose ends meet draws nothing, so a lone sector is two half circles.
fn circle_path(layout: &WheelLayout) -> String {
    let center = layout.center();
    let radius = layout.radius();
    let left = center - radius;
    let right = center + radius;
    format!(
        "M {left:.2} {center:.2} A {radius:.2} {radius:.2} 0 1 1 {right:.2} {center:.2} A {radius:.2} {radius:.2} 0 1 1 {left:.2} {center:.2} Z"
    )
}

fn pointer_points(layout: &WheelLayout) -> String {
    let (tip_x, tip_y) = layout.pointer_tip();
    let inner = tip_x - POINTER_REACH;
    let outer = tip_x + POINTER_TAIL;
    format!(
        "{inner:.2},{tip_y:.2} {outer:.2},{:.2} {outer:.2},{:.2}",
        tip_y - POINTER_HALF_WIDTH,
        tip_y + POINTER_HALF_WIDTH
    )
}
