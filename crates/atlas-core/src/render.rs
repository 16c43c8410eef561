// File: crates/atlas-core/src/render.rs
// Summary: Headless rendering pipeline: Skia CPU raster surfaces, paints, PNG/RGBA output.

use skia_safe as skia;

use crate::error::AtlasError;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Disable to avoid font nondeterminism in pixel comparisons.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default(), draw_labels: true }
    }
}

impl RenderOptions {
    /// Layout for the state map (square surface, projection handles placement).
    pub fn map() -> Self {
        Self { width: 800, height: 800, insets: Insets::new(0, 0, 0, 0), draw_labels: true }
    }

    /// Layout for the bar chart (wide left margin for the axis title).
    pub fn bars() -> Self {
        Self { width: 1050, height: 800, insets: Insets::new(230, 80, 80, 80), draw_labels: true }
    }

    /// Layout for the dual-series age profile chart.
    pub fn age_profile() -> Self {
        Self { width: 1000, height: 800, insets: Insets::new(100, 20, 20, 100), draw_labels: true }
    }

    pub fn plot_left(&self) -> f32 { self.insets.left as f32 }
    pub fn plot_right(&self) -> f32 { (self.width - self.insets.right as i32) as f32 }
    pub fn plot_top(&self) -> f32 { self.insets.top as f32 }
    pub fn plot_bottom(&self) -> f32 { (self.height - self.insets.bottom as i32) as f32 }
}

/// Anything that can paint itself onto a canvas. Provides the shared
/// PNG/RGBA output plumbing on top of a single `draw` implementation.
pub trait Render {
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions);

    fn background(&self) -> skia::Color {
        skia::Color::from_argb(255, 255, 255, 255)
    }

    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, AtlasError> {
        let mut surface = raster_surface(opts.width, opts.height)?;
        surface.canvas().clear(self.background());
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| AtlasError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), AtlasError> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AtlasError::Render(format!("create {}: {e}", parent.display())))?;
        }
        std::fs::write(path, bytes)
            .map_err(|e| AtlasError::Render(format!("write {}: {e}", path.display())))?;
        Ok(())
    }

    /// Raw RGBA8 pixels: (pixels, width, height, row stride in bytes).
    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize), AtlasError> {
        let mut surface = raster_surface(opts.width, opts.height)?;
        surface.canvas().clear(self.background());
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(AtlasError::Render("read_pixels failed".into()));
        }
        Ok((pixels, opts.width, opts.height, stride))
    }
}

pub(crate) fn raster_surface(width: i32, height: i32) -> Result<skia::Surface, AtlasError> {
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| AtlasError::Render("failed to create raster surface".into()))
}

pub(crate) fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

pub(crate) fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

/// Open polyline path through screen points.
pub(crate) fn polyline_path(points: &[(f32, f32)]) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some(&(x0, y0)) = points.first() {
        path.move_to((x0, y0));
        for &(x, y) in points.iter().skip(1) {
            path.line_to((x, y));
        }
    }
    path
}

/// Closed path over a set of rings (one subpath per ring, even-odd fill).
pub(crate) fn rings_path(rings: &[Vec<(f32, f32)>]) -> skia::Path {
    let mut path = skia::Path::new();
    for ring in rings {
        if let Some(&(x0, y0)) = ring.first() {
            path.move_to((x0, y0));
            for &(x, y) in ring.iter().skip(1) {
                path.line_to((x, y));
            }
            path.close();
        }
    }
    path.set_fill_type(skia::PathFillType::EvenOdd);
    path
}
