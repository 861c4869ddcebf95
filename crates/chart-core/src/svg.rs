// File: crates/chart-core/src/svg.rs
// Summary: SVG surface; serializes the last presented scene as an SVG document.

use std::fmt::Write as _;
use std::path::Path;

use crate::geometry::PathCommand;
use crate::scene::{Scene, ScenePath, SceneText, Surface};

/// In-memory SVG surface of a fixed size.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    scene: Option<Scene>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, scene: None }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// The last presented scene, if any.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Serialize the current content. An empty surface yields an empty `<svg>`.
    pub fn to_svg_string(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height
        );
        if let Some(scene) = &self.scene {
            let _ = writeln!(
                svg,
                "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                scene.width,
                scene.height,
                scene.background.to_hex()
            );
            for path in &scene.paths {
                write_path(&mut svg, path);
            }
            for text in &scene.texts {
                write_text(&mut svg, text);
            }
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the SVG document to `path`, creating parent directories.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg_string())
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn present(&mut self, scene: Scene) {
        self.scene = Some(scene);
    }
}

/// SVG path data (`M`, `L`, `C`) for a command list.
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for cmd in commands {
        let _ = match cmd {
            PathCommand::MoveTo(p) => write!(d, "M{},{}", p.x, p.y),
            PathCommand::LineTo(p) => write!(d, "L{},{}", p.x, p.y),
            PathCommand::CubicTo(c1, c2, p) => write!(d, "C{},{},{},{},{},{}", c1.x, c1.y, c2.x, c2.y, p.x, p.y),
        };
    }
    d
}

fn write_path(svg: &mut String, path: &ScenePath) {
    let d = path_data(&path.commands());
    let opacity = if path.stroke.is_opaque() {
        String::new()
    } else {
        format!(" stroke-opacity=\"{}\"", path.stroke.opacity())
    };
    let _ = writeln!(
        svg,
        "  <path d=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{} fill=\"none\"/>",
        d,
        path.stroke.to_hex(),
        path.stroke_width,
        opacity
    );
}

fn write_text(svg: &mut String, text: &SceneText) {
    let _ = writeln!(
        svg,
        "  <text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}px\" fill=\"{}\">{}</text>",
        text.anchor.x,
        text.anchor.y,
        escape(&text.font_family),
        text.font_size,
        text.fill.to_hex(),
        escape(&text.text)
    );
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
