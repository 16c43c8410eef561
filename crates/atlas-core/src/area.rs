// File: crates/atlas-core/src/area.rs
// Summary: Dual-series line/area chart: polylines, baseline areas, dot marks, hover tooltip.

use skia_safe as skia;

use crate::axis::{format_tick, Axis};
use crate::data::AgeRow;
use crate::render::{fill_paint, polyline_path, stroke_paint, Render, RenderOptions};
use crate::scale::LinearScale;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::view::Tooltip;

const DOT_RADIUS: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesId {
    Y1,
    Y2,
}

/// One circle mark on a series, the chart's interaction target.
#[derive(Clone, Copy, Debug)]
pub struct DotMark {
    pub series: SeriesId,
    pub x_px: f32,
    pub y_px: f32,
    pub x: f64,
    pub y: f64,
    pub hovered: bool,
}

pub struct AreaChart {
    theme: Theme,
    rows: Vec<AgeRow>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    x_scale: LinearScale,
    y_scale: LinearScale,
    pub dots: Vec<DotMark>,
    pub tooltip: Option<Tooltip>,
    pub legend: [String; 2],
}

impl AreaChart {
    pub fn new(rows: Vec<AgeRow>, theme: Theme, opts: &RenderOptions) -> Self {
        let (x_lo, x_hi) = crate::scale::extent(rows.iter().map(|r| r.x));
        let y_hi = rows.iter().map(|r| r.y1.max(r.y2)).fold(0.0f64, f64::max);

        let x_scale = LinearScale::new(x_lo, x_hi, opts.plot_left(), opts.plot_right());
        let y_scale = LinearScale::new(0.0, y_hi, opts.plot_bottom(), opts.plot_top());

        let mut dots = Vec::with_capacity(rows.len() * 2);
        for row in &rows {
            dots.push(DotMark {
                series: SeriesId::Y1,
                x_px: x_scale.to_px(row.x),
                y_px: y_scale.to_px(row.y1),
                x: row.x,
                y: row.y1,
                hovered: false,
            });
        }
        for row in &rows {
            dots.push(DotMark {
                series: SeriesId::Y2,
                x_px: x_scale.to_px(row.x),
                y_px: y_scale.to_px(row.y2),
                x: row.x,
                y: row.y2,
                hovered: false,
            });
        }

        Self {
            theme,
            rows,
            x_axis: Axis::new("Age", x_lo, x_hi),
            y_axis: Axis::new("Thousands", 0.0, y_hi),
            x_scale,
            y_scale,
            dots,
            tooltip: None,
            legend: ["2021-2022 Males".into(), "2021-2022 Females".into()],
        }
    }

    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    /// Dot under the pointer, if any (radius test, first match wins).
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let r2 = (DOT_RADIUS + 1.0) * (DOT_RADIUS + 1.0);
        self.dots.iter().position(|d| {
            let dx = d.x_px - x;
            let dy = d.y_px - y;
            dx * dx + dy * dy <= r2
        })
    }

    /// Hover a dot and position the tooltip just above the pointer; clears
    /// both when nothing is hit.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let hit = self.hit_test(x, y);
        for (i, dot) in self.dots.iter_mut().enumerate() {
            dot.hovered = Some(i) == hit;
        }
        self.tooltip = hit.map(|i| {
            let dot = &self.dots[i];
            Tooltip {
                text: format!("({}, {})", format_tick(dot.x), format_tick(dot.y)),
                x,
                y: y - 10.0,
            }
        });
    }

    pub fn pointer_leave(&mut self) {
        for dot in &mut self.dots {
            dot.hovered = false;
        }
        self.tooltip = None;
    }

    fn series_px(&self, pick: impl Fn(&AgeRow) -> f64) -> Vec<(f32, f32)> {
        self.rows
            .iter()
            .map(|r| (self.x_scale.to_px(r.x), self.y_scale.to_px(pick(r))))
            .collect()
    }

    // Area path: along the series, then straight back along the zero baseline.
    fn area_path(&self, line: &[(f32, f32)]) -> skia::Path {
        let mut path = polyline_path(line);
        if let (Some(&(x_last, _)), Some(&(x_first, _))) = (line.last(), line.first()) {
            let y0 = self.y_scale.to_px(0.0);
            path.line_to((x_last, y0));
            path.line_to((x_first, y0));
            path.close();
        }
        path
    }
}

impl Render for AreaChart {
    fn background(&self) -> skia::Color {
        self.theme.background
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let line1 = self.series_px(|r| r.y1);
        let line2 = self.series_px(|r| r.y2);

        // shaded areas under the lines first
        canvas.draw_path(&self.area_path(&line1), &fill_paint(self.theme.area_a));
        canvas.draw_path(&self.area_path(&line2), &fill_paint(self.theme.area_b));

        canvas.draw_path(&polyline_path(&line1), &stroke_paint(self.theme.series_a, 2.0));
        canvas.draw_path(&polyline_path(&line2), &stroke_paint(self.theme.series_b, 2.0));

        for dot in &self.dots {
            let base = match dot.series {
                SeriesId::Y1 => self.theme.series_a,
                SeriesId::Y2 => self.theme.series_b,
            };
            let color = if dot.hovered { self.theme.highlight } else { base };
            canvas.draw_circle((dot.x_px, dot.y_px), DOT_RADIUS, &fill_paint(color));
        }

        // axis lines
        let axis = stroke_paint(self.theme.axis_line, 1.5);
        canvas.draw_line(
            (opts.plot_left(), opts.plot_bottom()),
            (opts.plot_right(), opts.plot_bottom()),
            &axis,
        );
        canvas.draw_line(
            (opts.plot_left(), opts.plot_top()),
            (opts.plot_left(), opts.plot_bottom()),
            &axis,
        );

        if opts.draw_labels {
            let shaper = TextShaper::new();
            for t in self.x_axis.ticks(6) {
                let x = self.x_scale.to_px(t);
                shaper.draw_centered(canvas, &format_tick(t), x, opts.plot_bottom() + 24.0, 15.0, self.theme.tick, true);
            }
            for t in self.y_axis.ticks(6) {
                let y = self.y_scale.to_px(t);
                let label = format_tick(t);
                let w = shaper.measure_width(&label, 15.0, true);
                shaper.draw_left(canvas, &label, opts.plot_left() - w - 10.0, y + 5.0, 15.0, self.theme.tick, true);
            }
            shaper.draw_centered(
                canvas,
                &self.x_axis.label,
                (opts.plot_left() + opts.plot_right()) / 2.0,
                opts.height as f32 - 20.0,
                25.0,
                self.theme.axis_label,
                false,
            );
            // y-axis title drawn rotated along the left edge
            canvas.save();
            canvas.rotate(-90.0, Some(skia::Point::new(30.0, opts.height as f32 / 2.0)));
            shaper.draw_centered(
                canvas,
                &self.y_axis.label,
                30.0,
                opts.height as f32 / 2.0,
                25.0,
                self.theme.axis_label,
                false,
            );
            canvas.restore();

            // two-entry legend in the top-right corner of the plot
            let mut ly = opts.plot_top() + 20.0;
            let lx = opts.plot_right() - 220.0;
            for (entry, color) in self.legend.iter().zip([self.theme.series_a, self.theme.series_b]) {
                canvas.draw_rect(skia::Rect::from_xywh(lx, ly - 12.0, 14.0, 14.0), &fill_paint(color));
                shaper.draw_left(canvas, entry, lx + 22.0, ly, 20.0, self.theme.axis_label, false);
                ly += 26.0;
            }

            if let Some(tip) = &self.tooltip {
                shaper.draw_left(canvas, &tip.text, tip.x, tip.y, 14.0, self.theme.tooltip_text, true);
            }
        }
    }
}
