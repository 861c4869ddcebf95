// File: crates/chart-core/src/types.rs
// Summary: Shared constants of the normalized chart viewport (extent, margin, fonts, strokes).

/// Extent of the normalized viewport along each axis.
pub const VIEWPORT_EXTENT: f64 = 100.0;
/// Border kept free on every side, in normalized units.
pub const MARGIN: f64 = 10.0;
/// Fraction of the viewport used by plotted content.
pub const CONTENT_FRACTION: f64 = 0.8;
/// Far edge of the content frame (`MARGIN + CONTENT_FRACTION * VIEWPORT_EXTENT`).
pub const FRAME_END: f64 = MARGIN + CONTENT_FRACTION * VIEWPORT_EXTENT;

/// Default number of divisions per axis.
pub const TICK_COUNT: usize = 10;

/// Default stroke width of the axis frame.
pub const AXIS_STROKE_WIDTH: f64 = 0.5;
/// Default stroke width of a player series.
pub const SERIES_STROKE_WIDTH: f64 = 0.3;
/// Default font size of tick labels.
pub const TICK_FONT_SIZE: f64 = 1.5;
/// Default font size of the axis names.
pub const NAME_FONT_SIZE: f64 = 2.0;
/// Default font family for every label.
pub const FONT_FAMILY: &str = "sans-serif";

/// Title of the horizontal axis.
pub const TURNS_TITLE: &str = "Turns";
