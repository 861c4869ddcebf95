// File: crates/chart-core/src/axis.rs
// Summary: L-shaped ruler template (staggered tick stubs) and tick label selection.
// Notes:
// - All coordinates here live in the 0..100 tick space, before viewport scaling.
// - The stub offsets (5 / 7.5 and 92.5 / 95) and the label index filters are a
//   fixed template; label positions depend on them.

use crate::grid::divisions;
use crate::types::{CONTENT_FRACTION, FRAME_END, MARGIN, VIEWPORT_EXTENT};

/// A point of the axis path in tick space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTickPoint {
    pub x: f64,
    pub y: f64,
}

impl AxisTickPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis model: title and domain upper bound (the lower bound is always 0).
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, max: f64) -> Self {
        Self { label: label.into(), max }
    }
}

/// A tick label: where it is anchored and the domain value it shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickLabel {
    pub anchor: AxisTickPoint,
    pub value: f64,
}

const STUB_LONG: f64 = 5.0;
const STUB_SHORT: f64 = 7.5;
const STUB_BOTTOM_SHORT: f64 = 92.5;
const STUB_BOTTOM_LONG: f64 = 95.0;

/// Zig-zag ruler along the vertical then the horizontal axis of the frame
/// (10,10)..(90,90). Produces exactly `6 * count + 4` points.
pub fn axis_ticks(count: usize) -> Vec<AxisTickPoint> {
    let bounds = divisions(MARGIN, FRAME_END, count);
    let mut points = Vec::with_capacity(6 * count + 4);

    for i in 0..count {
        let stub = if i % 2 == 1 { STUB_SHORT } else { STUB_LONG };
        points.push(AxisTickPoint::new(stub, bounds[i]));
        points.push(AxisTickPoint::new(MARGIN, bounds[i]));
        points.push(AxisTickPoint::new(MARGIN, bounds[i + 1]));
    }

    // corner: origin stub, then turn onto the horizontal axis
    points.push(AxisTickPoint::new(STUB_LONG, FRAME_END));
    points.push(AxisTickPoint::new(MARGIN, FRAME_END));
    points.push(AxisTickPoint::new(MARGIN, STUB_BOTTOM_LONG));
    points.push(AxisTickPoint::new(MARGIN, FRAME_END));

    for i in 0..count {
        let stub = if i % 2 == 1 { STUB_BOTTOM_LONG } else { STUB_BOTTOM_SHORT };
        points.push(AxisTickPoint::new(bounds[i], FRAME_END));
        points.push(AxisTickPoint::new(bounds[i + 1], FRAME_END));
        points.push(AxisTickPoint::new(bounds[i + 1], stub));
    }
    points
}

/// Indices of `axis_ticks(count)` that carry a vertical-axis label.
pub fn vertical_label_indices(count: usize) -> impl Iterator<Item = usize> {
    (0..6 * count + 4).filter(move |&i| i % 6 == 0 && i <= 3 * count)
}

/// Indices of `axis_ticks(count)` that carry a horizontal-axis label.
pub fn horizontal_label_indices(count: usize) -> impl Iterator<Item = usize> {
    (0..6 * count + 4).filter(move |&i| i == 3 * count + 2 || ((i + 3) % 6 == 0 && i > 3 * (count + 1)))
}

/// Domain value at tick height `tick_y`, decreasing from `max_y` at the top.
pub fn vertical_tick_value(max_y: f64, tick_y: f64) -> f64 {
    max_y / VIEWPORT_EXTENT * (VIEWPORT_EXTENT - (tick_y - MARGIN) / CONTENT_FRACTION)
}

/// Domain value at tick position `tick_x`, increasing left to right.
pub fn horizontal_tick_value(max_x: f64, tick_x: f64) -> f64 {
    max_x / VIEWPORT_EXTENT * (tick_x - MARGIN) / CONTENT_FRACTION
}

/// Labels for both axes of a `count`-division ruler.
pub fn tick_labels(ticks: &[AxisTickPoint], count: usize, x: &Axis, y: &Axis) -> (Vec<TickLabel>, Vec<TickLabel>) {
    let vertical = vertical_label_indices(count)
        .filter_map(|i| ticks.get(i))
        .map(|&anchor| TickLabel { anchor, value: vertical_tick_value(y.max, anchor.y) })
        .collect();
    let horizontal = horizontal_label_indices(count)
        .filter_map(|i| ticks.get(i))
        .map(|&anchor| TickLabel { anchor, value: horizontal_tick_value(x.max, anchor.x) })
        .collect();
    (vertical, horizontal)
}

/// Label text: shortest decimal that round-trips (`80`, `0.5`, `12.5`).
pub fn format_tick_value(value: f64) -> String {
    format!("{value}")
}
