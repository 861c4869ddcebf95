// File: crates/chart-core/src/theme.rs
// Summary: Color presets for the chart frame, labels and background.

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub axis_name: Rgba,
}

impl Theme {
    /// Black frame and labels on white.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::WHITE,
            axis_line: Rgba::BLACK,
            axis_label: Rgba::BLACK,
            axis_name: Rgba::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(150, 150, 160),
            axis_name: Rgba::rgb(235, 235, 245),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            axis_line: Rgba::rgb(0x93, 0xa1, 0xa1),  // base1
            axis_label: Rgba::rgb(0x83, 0x94, 0x96), // base0
            axis_name: Rgba::rgb(0xee, 0xe8, 0xd5),  // base2
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::rgb(0x00, 0x00, 0x00),
            axis_line: Rgba::rgb(0xff, 0xff, 0xff),
            axis_label: Rgba::rgb(0xcc, 0xcc, 0xcc),
            axis_name: Rgba::rgb(0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
