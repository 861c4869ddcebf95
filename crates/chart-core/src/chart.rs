// File: crates/chart-core/src/chart.rs
// Summary: Chart engine (idle/ready state machine) turning a replay buffer into full-repaint scenes.

use std::sync::Arc;

use log::{debug, trace};

use crate::axis::{axis_ticks, format_tick_value, tick_labels, Axis, AxisTickPoint, TickLabel};
use crate::bounds::ScaleBounds;
use crate::color::Rgba;
use crate::error::{ChartError, Result};
use crate::geometry::{Curve, Point};
use crate::replay::{Metric, ReplayBuffer};
use crate::scale::MarginScale;
use crate::scene::{PathRole, Scene, ScenePath, SceneText, Surface, TextRole};
use crate::theme::Theme;
use crate::types::{
    AXIS_STROKE_WIDTH, FONT_FAMILY, NAME_FONT_SIZE, SERIES_STROKE_WIDTH, TICK_COUNT, TICK_FONT_SIZE, TURNS_TITLE,
};

/// Tick-space anchor of the vertical-axis name.
const Y_NAME_ANCHOR: AxisTickPoint = AxisTickPoint::new(5.0, 7.0);
/// Tick-space anchor of the "Turns" title.
const X_NAME_ANCHOR: AxisTickPoint = AxisTickPoint::new(92.0, 90.0);
/// Tick labels sit one unit right of and above their tick point.
const LABEL_OFFSET: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub tick_count: usize,
    pub axis_stroke_width: f64,
    pub series_stroke_width: f64,
    pub tick_font_size: f64,
    pub name_font_size: f64,
    pub font_family: String,
    pub theme: Theme,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            tick_count: TICK_COUNT,
            axis_stroke_width: AXIS_STROKE_WIDTH,
            series_stroke_width: SERIES_STROKE_WIDTH,
            tick_font_size: TICK_FONT_SIZE,
            name_font_size: NAME_FONT_SIZE,
            font_family: FONT_FAMILY.to_string(),
            theme: Theme::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub enum EngineState {
    #[default]
    Idle,
    Ready { buffer: Arc<ReplayBuffer>, bounds: ScaleBounds },
}

/// Owns the loaded replay and its scale bounds; every draw is a pure function
/// of those, the metric and the surface size.
#[derive(Clone, Debug, Default)]
pub struct ChartEngine {
    pub options: ChartOptions,
    state: EngineState,
}

impl ChartEngine {
    pub fn new(options: ChartOptions) -> Self {
        Self { options, state: EngineState::Idle }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, EngineState::Ready { .. })
    }

    pub fn bounds(&self) -> Option<ScaleBounds> {
        match &self.state {
            EngineState::Ready { bounds, .. } => Some(*bounds),
            EngineState::Idle => None,
        }
    }

    pub fn buffer(&self) -> Option<&Arc<ReplayBuffer>> {
        match &self.state {
            EngineState::Ready { buffer, .. } => Some(buffer),
            EngineState::Idle => None,
        }
    }

    /// Validate `buffer`, compute its bounds and become ready. On failure the
    /// previous state is kept.
    pub fn load_buffer(&mut self, buffer: impl Into<Arc<ReplayBuffer>>) -> Result<ScaleBounds> {
        let buffer = buffer.into();
        let bounds = ScaleBounds::from_buffer(&buffer)?;
        debug!("loaded replay: {} turns, {} players", buffer.turn_count(), buffer.player_count());
        self.state = EngineState::Ready { buffer, bounds };
        Ok(bounds)
    }

    /// Drop the loaded buffer and return to idle.
    pub fn reset(&mut self) {
        self.state = EngineState::Idle;
    }

    /// Build the full scene for `metric` on a `width` x `height` surface.
    pub fn draw_metric(&self, metric: Metric, width: f64, height: f64) -> Result<Scene> {
        let EngineState::Ready { buffer, bounds } = &self.state else {
            return Err(ChartError::Uninitialized);
        };
        let scale = MarginScale::new(width, height)?;
        let max_metric = bounds.max_for(metric);
        trace!("draw {:?} at {}x{} (max {})", metric, width, height, max_metric);

        let x_axis = Axis::new(TURNS_TITLE, bounds.max_turns);
        let y_axis = Axis::new(metric.axis_name(), max_metric);
        let mut scene = Scene {
            width,
            height,
            background: self.options.theme.background,
            paths: Vec::with_capacity(buffer.player_count() + 1),
            texts: Vec::new(),
        };
        self.draw_axes(&mut scene, &scale, &x_axis, &y_axis);

        for player in 0..buffer.player_count() {
            let Some(color) = buffer.player_color(player) else { continue };
            let points = buffer
                .series(player, metric)
                .enumerate()
                .map(|(turn, value)| {
                    Point::new(
                        scale.to_margin_x(turn as f64 / bounds.max_turns),
                        scale.to_margin_y(value as f64 / max_metric),
                    )
                })
                .collect();
            scene.paths.push(ScenePath {
                role: PathRole::Series { player },
                points,
                curve: Curve::Basis,
                stroke: color,
                stroke_width: self.options.series_stroke_width,
            });
        }
        Ok(scene)
    }

    /// Draw `metric` and hand the scene to `surface`. The surface is left
    /// untouched if drawing fails.
    pub fn render<S: Surface + ?Sized>(&self, metric: Metric, surface: &mut S) -> Result<()> {
        let (width, height) = surface.size();
        let scene = self.draw_metric(metric, width, height)?;
        surface.present(scene);
        Ok(())
    }

    fn draw_axes(&self, scene: &mut Scene, scale: &MarginScale, x: &Axis, y: &Axis) {
        let opts = &self.options;
        let theme = &opts.theme;
        let ticks = axis_ticks(opts.tick_count);
        let to_viewport = |p: &AxisTickPoint| Point::new(scale.to_viewport_x(p.x), scale.to_viewport_y(p.y));

        scene.paths.push(ScenePath {
            role: PathRole::Axis,
            points: ticks.iter().map(to_viewport).collect(),
            curve: Curve::Linear,
            stroke: theme.axis_line,
            stroke_width: opts.axis_stroke_width,
        });

        let (vertical, horizontal) = tick_labels(&ticks, opts.tick_count, x, y);
        let make_text = |role: TextRole, anchor: Point, text: String, font_size: f64, fill: Rgba| SceneText {
            role,
            anchor,
            text,
            font_size,
            font_family: opts.font_family.clone(),
            fill,
        };
        let tick_text = |role: TextRole, label: &TickLabel| {
            let anchor = AxisTickPoint::new(label.anchor.x + LABEL_OFFSET, label.anchor.y - LABEL_OFFSET);
            make_text(role, to_viewport(&anchor), format_tick_value(label.value), opts.tick_font_size, theme.axis_label)
        };
        scene.texts.extend(vertical.iter().map(|l| tick_text(TextRole::VerticalTick, l)));
        scene.texts.extend(horizontal.iter().map(|l| tick_text(TextRole::HorizontalTick, l)));

        scene.texts.push(make_text(TextRole::AxisName, to_viewport(&Y_NAME_ANCHOR), y.label.clone(), opts.name_font_size, theme.axis_name));
        scene.texts.push(make_text(TextRole::AxisName, to_viewport(&X_NAME_ANCHOR), x.label.clone(), opts.name_font_size, theme.axis_name));
    }
}

/// Redraw triggers bound to one buffer and one surface.
pub struct Drawers<S: Surface> {
    engine: ChartEngine,
    surface: S,
}

impl<S: Surface> Drawers<S> {
    pub fn new(buffer: impl Into<Arc<ReplayBuffer>>, surface: S, options: ChartOptions) -> Result<Self> {
        let mut engine = ChartEngine::new(options);
        engine.load_buffer(buffer)?;
        Ok(Self { engine, surface })
    }

    pub fn draw_ship_scores(&mut self) -> Result<()> {
        self.engine.render(Metric::Ships, &mut self.surface)
    }

    pub fn draw_planet_scores(&mut self) -> Result<()> {
        self.engine.render(Metric::Planets, &mut self.surface)
    }

    pub fn engine(&self) -> &ChartEngine {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
