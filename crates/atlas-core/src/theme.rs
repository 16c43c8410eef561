// File: crates/atlas-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Discrete 6-step ramp used by the quantized color scale.
    pub ramp: [skia::Color; 6],
    /// Fill for geometry with no matching data value.
    pub missing_fill: skia::Color,
    /// Fill/stroke swapped in while a mark is hovered.
    pub highlight: skia::Color,
    pub region_outline: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub mark_label: skia::Color,
    pub tooltip_text: skia::Color,
    pub series_a: skia::Color,
    pub series_b: skia::Color,
    pub area_a: skia::Color,
    pub area_b: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            ramp: [
                skia::Color::from_argb(255, 240, 240, 240),
                skia::Color::from_argb(255, 217, 217, 217),
                skia::Color::from_argb(255, 189, 189, 189),
                skia::Color::from_argb(255, 150, 150, 150),
                skia::Color::from_argb(255, 115, 115, 115),
                skia::Color::from_argb(255, 82, 82, 82),
            ],
            missing_fill: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            highlight: skia::Color::from_argb(255, 255, 165, 0),
            region_outline: skia::Color::from_argb(255, 60, 60, 70),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            mark_label: skia::Color::from_argb(255, 20, 20, 30),
            tooltip_text: skia::Color::from_argb(255, 0, 0, 0),
            series_a: skia::Color::from_argb(255, 255, 165, 0),
            series_b: skia::Color::from_argb(255, 70, 130, 180),
            area_a: skia::Color::from_argb(80, 255, 120, 80),
            area_b: skia::Color::from_argb(80, 70, 130, 180),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            ramp: [
                skia::Color::from_argb(255, 55, 55, 60),
                skia::Color::from_argb(255, 82, 82, 88),
                skia::Color::from_argb(255, 115, 115, 122),
                skia::Color::from_argb(255, 150, 150, 158),
                skia::Color::from_argb(255, 189, 189, 196),
                skia::Color::from_argb(255, 230, 230, 236),
            ],
            missing_fill: skia::Color::from_argb(255, 44, 44, 48),
            highlight: skia::Color::from_argb(255, 255, 180, 40),
            region_outline: skia::Color::from_argb(255, 180, 180, 190),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            mark_label: skia::Color::from_argb(255, 235, 235, 245),
            tooltip_text: skia::Color::from_argb(255, 245, 245, 250),
            series_a: skia::Color::from_argb(255, 255, 180, 40),
            series_b: skia::Color::from_argb(255, 96, 156, 255),
            area_a: skia::Color::from_argb(90, 255, 180, 40),
            area_b: skia::Color::from_argb(90, 96, 156, 255),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
