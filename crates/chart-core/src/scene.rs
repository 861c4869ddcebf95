// File: crates/chart-core/src/scene.rs
// Summary: Renderer-agnostic description of one full repaint, and the surface trait that commits it.

use crate::color::Rgba;
use crate::geometry::{Curve, PathCommand, Point};

/// What a stroked path depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathRole {
    Axis,
    Series { player: usize },
}

/// A stroked, never filled path.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenePath {
    pub role: PathRole,
    /// Input points in surface units; `curve` decides how they are joined.
    pub points: Vec<Point>,
    pub curve: Curve,
    pub stroke: Rgba,
    pub stroke_width: f64,
}

impl ScenePath {
    pub fn commands(&self) -> Vec<PathCommand> {
        self.curve.commands(&self.points)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    VerticalTick,
    HorizontalTick,
    AxisName,
}

/// A text item anchored at its baseline start.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneText {
    pub role: TextRole,
    pub anchor: Point,
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub fill: Rgba,
}

/// Everything drawn by one draw call. Presenting it replaces prior content.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Rgba,
    pub paths: Vec<ScenePath>,
    pub texts: Vec<SceneText>,
}

impl Scene {
    pub fn axis_paths(&self) -> impl Iterator<Item = &ScenePath> {
        self.paths.iter().filter(|p| p.role == PathRole::Axis)
    }

    pub fn series_paths(&self) -> impl Iterator<Item = &ScenePath> {
        self.paths.iter().filter(|p| matches!(p.role, PathRole::Series { .. }))
    }

    pub fn series_for(&self, player: usize) -> Option<&ScenePath> {
        self.paths.iter().find(|p| p.role == PathRole::Series { player })
    }

    pub fn texts_with(&self, role: TextRole) -> impl Iterator<Item = &SceneText> {
        self.texts.iter().filter(move |t| t.role == role)
    }
}

/// A drawing target the presentation layer owns.
pub trait Surface {
    /// Current size in surface units.
    fn size(&self) -> (f64, f64);
    /// Discard prior content and take `scene` as the new content.
    fn present(&mut self, scene: Scene);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> (f64, f64) {
        (**self).size()
    }
    fn present(&mut self, scene: Scene) {
        (**self).present(scene)
    }
}
