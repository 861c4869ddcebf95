// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster surface for chart-core scenes; headless PNG output.

pub mod text;

use anyhow::{Context, Result};
use chart_core::{PathCommand, Rgba, Scene, ScenePath, SceneText, Surface};
use log::debug;
use skia_safe as skia;

pub use text::TextShaper;

/// Pixel scale applied to scene units when rasterizing.
pub const DEFAULT_SCALE: f32 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOptions {
    /// Pixels per scene unit.
    pub scale: f32,
    /// Shape and draw text items; disable for deterministic pixels.
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: DEFAULT_SCALE, draw_labels: true }
    }
}

/// Surface that keeps the last presented scene and rasterizes it on demand.
pub struct SkiaSurface {
    width: f64,
    height: f64,
    pub options: RasterOptions,
    scene: Option<Scene>,
}

impl SkiaSurface {
    pub fn new(width: f64, height: f64, options: RasterOptions) -> Self {
        Self { width, height, options, scene: None }
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Raster dimensions in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        let px = |v: f64| ((v * self.options.scale as f64).round() as i32).max(1);
        (px(self.width), px(self.height))
    }

    /// Rasterize the current scene and encode it as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let scene = self.scene.as_ref().context("nothing presented to the surface yet")?;
        let (w, h) = self.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        draw_scene(surface.canvas(), scene, &self.options);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!("encoded {}x{} PNG ({} bytes)", w, h, data.as_bytes().len());
        Ok(data.as_bytes().to_vec())
    }

    /// Write the PNG to `path`, creating parent directories.
    pub fn write_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

impl Surface for SkiaSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn present(&mut self, scene: Scene) {
        self.scene = Some(scene);
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Paint `scene` onto `canvas`, scaling scene units by `opts.scale`.
pub fn draw_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RasterOptions) {
    canvas.clear(to_skia(scene.background));
    for path in &scene.paths {
        draw_path(canvas, path, opts.scale);
    }
    if opts.draw_labels && !scene.texts.is_empty() {
        let shaper = TextShaper::new();
        for text in &scene.texts {
            draw_text(canvas, &shaper, text, opts.scale);
        }
    }
}

fn draw_path(canvas: &skia::Canvas, path: &ScenePath, scale: f32) {
    let pt = |p: &chart_core::Point| (p.x as f32 * scale, p.y as f32 * scale);
    let mut sk = skia::Path::new();
    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => { sk.move_to(pt(&p)); }
            PathCommand::LineTo(p) => { sk.line_to(pt(&p)); }
            PathCommand::CubicTo(c1, c2, p) => { sk.cubic_to(pt(&c1), pt(&c2), pt(&p)); }
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(path.stroke_width as f32 * scale);
    stroke.set_color(to_skia(path.stroke));

    canvas.draw_path(&sk, &stroke);
}

fn draw_text(canvas: &skia::Canvas, shaper: &TextShaper, text: &SceneText, scale: f32) {
    shaper.draw_baseline(
        canvas,
        &text.text,
        text.anchor.x as f32 * scale,
        text.anchor.y as f32 * scale,
        text.font_size as f32 * scale,
        to_skia(text.fill),
        &text.font_family,
    );
}
