// File: crates/atlas-core/src/bars.rs
// Summary: Bar chart pipeline: band-positioned rects, value sort toggle with slot transitions, hover.

use skia_safe as skia;

use crate::axis::{format_tick, Axis};
use crate::data::MigrationRow;
use crate::geometry::RectF;
use crate::render::{fill_paint, stroke_paint, Render, RenderOptions};
use crate::scale::{BandScale, LinearScale, QuantizeScale};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::view::{SortDirection, Tooltip};

/// Duration of the slot reassignment animation a sort toggle produces.
pub const SORT_TRANSITION_MS: u32 = 1000;

const BAND_PADDING_INNER: f32 = 0.02;

/// One bar, identified by its original record index. `slot` is the band
/// position the bar currently occupies; sorting reassigns slots without
/// touching heights or fills.
#[derive(Clone, Debug)]
pub struct BarMark {
    pub original_index: usize,
    pub slot: usize,
    pub state_code: String,
    pub country: String,
    pub value: f64,
    pub fill: skia::Color,
    pub hovered: bool,
}

/// X-position change for one bar, to be animated over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotTransition {
    pub original_index: usize,
    pub from_x: f32,
    pub to_x: f32,
    pub duration_ms: u32,
}

pub struct BarChart {
    theme: Theme,
    pub marks: Vec<BarMark>,
    pub x_scale: BandScale,
    pub y_scale: LinearScale,
    pub color: QuantizeScale,
    pub y_axis: Axis,
    pub direction: Option<SortDirection>,
    pub tooltip: Option<Tooltip>,
    pub x_title: String,
    pub y_title: String,
}

impl BarChart {
    pub fn new(rows: &[MigrationRow], theme: Theme, opts: &RenderOptions) -> Self {
        let y_hi = rows.iter().map(|r| r.migrant).fold(0.0f64, f64::max);
        let x_scale = BandScale::new(rows.len(), opts.plot_left(), opts.plot_right(), BAND_PADDING_INNER);
        let y_scale = LinearScale::new(0.0, y_hi, opts.plot_bottom(), opts.plot_top());
        let color = QuantizeScale::from_field(rows, |r| r.migrant, &theme.ramp);

        let marks = rows
            .iter()
            .enumerate()
            .map(|(i, row)| BarMark {
                original_index: i,
                slot: i,
                state_code: row.state_code.clone(),
                country: row.country.clone().unwrap_or_default(),
                value: row.migrant,
                fill: color.color(row.migrant),
                hovered: false,
            })
            .collect();

        Self {
            theme,
            marks,
            x_scale,
            y_scale,
            color,
            y_axis: Axis::new("", 0.0, y_hi),
            direction: None,
            tooltip: None,
            x_title: "States".into(),
            y_title: "Groups of overseas-born residents".into(),
        }
    }

    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    /// Screen rect a bar currently occupies.
    pub fn bar_rect(&self, mark: &BarMark) -> RectF {
        let x = self.x_scale.slot(mark.slot);
        let top = self.y_scale.to_px(mark.value);
        let bottom = self.y_scale.to_px(0.0);
        RectF::from_ltrb(x, top, x + self.x_scale.bandwidth(), bottom)
    }

    /// Values in current slot order (slot 0 leftmost).
    pub fn slot_order(&self) -> Vec<f64> {
        let mut order: Vec<(usize, f64)> = self.marks.iter().map(|m| (m.slot, m.value)).collect();
        order.sort_by_key(|&(slot, _)| slot);
        order.into_iter().map(|(_, v)| v).collect()
    }

    /// Flip the sort direction (ascending on the first invocation) and
    /// reassign band slots by value, ties keeping their original order.
    /// Returns one transition per bar whose x-position changed.
    pub fn toggle_sort(&mut self) -> Vec<SlotTransition> {
        let direction = self
            .direction
            .map(SortDirection::flipped)
            .unwrap_or(SortDirection::Ascending);
        self.direction = Some(direction);

        let old_x: Vec<f32> = self.marks.iter().map(|m| self.x_scale.slot(m.slot)).collect();

        // stable sort keeps ties in original-index order
        let mut order: Vec<usize> = (0..self.marks.len()).collect();
        match direction {
            SortDirection::Ascending => order.sort_by(|&a, &b| {
                self.marks[a]
                    .value
                    .partial_cmp(&self.marks[b].value)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            SortDirection::Descending => order.sort_by(|&a, &b| {
                self.marks[b]
                    .value
                    .partial_cmp(&self.marks[a].value)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }

        for (slot, &mark_index) in order.iter().enumerate() {
            self.marks[mark_index].slot = slot;
        }

        self.marks
            .iter()
            .filter(|m| {
                let to = self.x_scale.slot(m.slot);
                (to - old_x[m.original_index]).abs() > f32::EPSILON
            })
            .map(|m| SlotTransition {
                original_index: m.original_index,
                from_x: old_x[m.original_index],
                to_x: self.x_scale.slot(m.slot),
                duration_ms: SORT_TRANSITION_MS,
            })
            .collect()
    }

    /// Restore original order and drop all interaction state.
    pub fn reset(&mut self) {
        for mark in &mut self.marks {
            mark.slot = mark.original_index;
            mark.hovered = false;
        }
        self.direction = None;
        self.tooltip = None;
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        self.marks
            .iter()
            .position(|mark| self.bar_rect(mark).contains(x, y))
    }

    /// Hover a bar: highlight fill plus a tooltip centered over the bar.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let hit = self.hit_test(x, y);
        for (i, mark) in self.marks.iter_mut().enumerate() {
            mark.hovered = Some(i) == hit;
        }
        self.tooltip = hit.map(|i| {
            let mark = &self.marks[i];
            let rect = self.bar_rect(mark);
            Tooltip {
                text: format!("{}: {}", mark.country, mark.value),
                x: rect.left + rect.width() / 2.0,
                y: rect.top + 20.0,
            }
        });
    }

    pub fn pointer_leave(&mut self) {
        for mark in &mut self.marks {
            mark.hovered = false;
        }
        self.tooltip = None;
    }

    // Tick label for a band slot: the state code of the bar occupying it.
    fn slot_tick(&self, slot: usize) -> &str {
        self.marks
            .iter()
            .find(|m| m.slot == slot)
            .map(|m| m.state_code.as_str())
            .unwrap_or("")
    }
}

impl Render for BarChart {
    fn background(&self) -> skia::Color {
        self.theme.background
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        for mark in &self.marks {
            let rect = self.bar_rect(mark);
            let fill = if mark.hovered { self.theme.highlight } else { mark.fill };
            canvas.draw_rect(
                skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom),
                &fill_paint(fill),
            );
        }

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
            // x ticks: state code per occupied slot
            for slot in 0..self.marks.len() {
                let cx = self.x_scale.slot(slot) + self.x_scale.bandwidth() / 2.0;
                shaper.draw_centered(canvas, self.slot_tick(slot), cx, opts.plot_bottom() + 24.0, 15.0, self.theme.tick, false);
            }
            for t in self.y_axis.ticks(6) {
                let y = self.y_scale.to_px(t);
                let label = format_tick(t);
                let w = shaper.measure_width(&label, 15.0, true);
                shaper.draw_left(canvas, &label, opts.plot_left() - w - 10.0, y + 5.0, 15.0, self.theme.tick, true);
            }

            shaper.draw_centered(
                canvas,
                &self.x_title,
                (opts.plot_left() + opts.plot_right()) / 2.0,
                opts.height as f32 - 24.0,
                25.0,
                self.theme.axis_label,
                false,
            );
            canvas.save();
            canvas.rotate(-90.0, Some(skia::Point::new(60.0, opts.height as f32 / 2.0)));
            shaper.draw_centered(
                canvas,
                &self.y_title,
                60.0,
                opts.height as f32 / 2.0,
                25.0,
                self.theme.axis_label,
                false,
            );
            canvas.restore();

            if let Some(tip) = &self.tooltip {
                shaper.draw_centered(canvas, &tip.text, tip.x, tip.y, 9.0, self.theme.tooltip_text, false);
            }
        }
    }
}
