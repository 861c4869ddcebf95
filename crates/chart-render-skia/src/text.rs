// File: crates/chart-render-skia/src/text.rs
// Summary: Label shaper/renderer using Skia textlayout, honoring the scene's font family.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Families tried after the scene's own family.
const FALLBACK_FAMILIES: [&str; 5] = ["Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, family: &str) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        let mut families = Vec::with_capacity(FALLBACK_FAMILIES.len() + 1);
        families.push(family);
        families.extend(FALLBACK_FAMILIES.iter().copied().filter(|f| *f != family));
        ts.set_font_families(&families[..]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, family: &str) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, family);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline starting at (x, y).
    pub fn draw_baseline(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, family: &str) {
        let mut p = self.layout(text, size, color, family);
        // Paragraph draws from top-left; shift up by the first line's ascent
        p.paint(canvas, (x, y - p.alphabetic_baseline()));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
