// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the replay chart engine, data model and surfaces.

pub mod axis;
pub mod bounds;
pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod replay;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::{axis_ticks, Axis, AxisTickPoint};
pub use bounds::{nice_ceiling, nice_ceiling_count, ScaleBounds};
pub use chart::{ChartEngine, ChartOptions, Drawers, EngineState};
pub use color::Rgba;
pub use error::{BufferError, ChartError};
pub use geometry::{Curve, PathCommand, Point};
pub use replay::{Metric, PlayerStat, ReplayBuffer, TurnSnapshot};
pub use scale::{MarginScale, ScaleTransform};
pub use scene::{PathRole, Scene, ScenePath, SceneText, Surface, TextRole};
pub use svg::SvgSurface;
pub use theme::Theme;
