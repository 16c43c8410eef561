// File: crates/atlas-core/src/choropleth.rs
// Summary: Choropleth map pipeline: projected region marks, per-year restyle, hover, stale-load guard.

use std::collections::HashMap;

use skia_safe as skia;

use crate::data::{group_thousands, state_label, MigrationRow};
use crate::error::AtlasError;
use crate::geo::Region;
use crate::geometry::{point_in_rings, ring_area, ring_centroid};
use crate::projection::AlbersEqualArea;
use crate::render::{fill_paint, rings_path, stroke_paint, Render, RenderOptions};
use crate::scale::QuantizeScale;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::view::{LoadSequence, LoadTicket, YearSlider};

/// One region mark: projected rings plus the visual attributes the current
/// dataset assigns to them. Identity is the state code; a year change
/// restyles fills and labels without recreating the mark.
#[derive(Clone, Debug)]
pub struct RegionMark {
    pub key: String,
    pub rings: Vec<Vec<(f32, f32)>>,
    pub fill: skia::Color,
    pub label: String,
    pub label_at: (f32, f32),
    pub hovered: bool,
}

pub struct Choropleth {
    theme: Theme,
    pub marks: Vec<RegionMark>,
    pub slider: YearSlider,
    pub color: Option<QuantizeScale>,
    loads: LoadSequence,
}

impl Choropleth {
    /// Project `regions` and build unstyled marks (neutral fill, no label),
    /// matching the initial render before any dataset resolves.
    pub fn new(regions: &[Region], theme: Theme, opts: &RenderOptions) -> Self {
        let projection = AlbersEqualArea::australia(opts.width, opts.height);
        let marks = regions
            .iter()
            .map(|region| {
                let rings: Vec<Vec<(f32, f32)>> = region
                    .rings
                    .iter()
                    .map(|ring| projection.project_ring(ring))
                    .collect();
                let label_at = label_anchor(&rings);
                RegionMark {
                    key: region.state_code.clone(),
                    rings,
                    fill: theme.missing_fill,
                    label: String::new(),
                    label_at,
                    hovered: false,
                }
            })
            .collect();
        Self {
            theme,
            marks,
            slider: YearSlider::default(),
            color: None,
            loads: LoadSequence::default(),
        }
    }

    /// Start a year selection: moves the slider and issues a ticket that the
    /// eventual dataset completion must present.
    pub fn begin_year_load(&mut self, year: u16) -> LoadTicket {
        let selected = self.slider.set(year);
        self.loads.begin(selected)
    }

    /// Complete a year load. Returns false (and leaves the marks untouched)
    /// when a newer load has been started since `ticket` was issued.
    pub fn finish_year_load(&mut self, ticket: &LoadTicket, rows: &[MigrationRow]) -> bool {
        if !self.loads.is_current(ticket) {
            log::debug!("discarding stale dataset for year {}", ticket.year);
            return false;
        }
        self.apply_dataset(rows);
        true
    }

    /// Rebuild the color scale from `rows` and restyle every mark in place.
    /// Keys with no matching row keep the neutral fill and an empty label.
    pub fn apply_dataset(&mut self, rows: &[MigrationRow]) {
        let color = QuantizeScale::from_field(rows, |r| r.migrant, &self.theme.ramp);
        let by_code: HashMap<&str, f64> = rows
            .iter()
            .map(|r| (r.state_code.as_str(), r.migrant))
            .collect();

        for mark in &mut self.marks {
            match by_code.get(mark.key.as_str()) {
                Some(&value) => {
                    mark.fill = color.color(value);
                    mark.label = region_label(&mark.key, value);
                }
                None => {
                    let miss = AtlasError::JoinMiss { key: mark.key.clone() };
                    log::warn!("{miss}");
                    mark.fill = self.theme.missing_fill;
                    mark.label = String::new();
                }
            }
        }
        self.color = Some(color);
    }

    /// Index of the region under the pointer, if any.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        self.marks
            .iter()
            .position(|mark| point_in_rings(x, y, &mark.rings))
    }

    /// Update the hover flag from a pointer position.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let hit = self.hit_test(x, y);
        for (i, mark) in self.marks.iter_mut().enumerate() {
            mark.hovered = Some(i) == hit;
        }
    }

    pub fn pointer_leave(&mut self) {
        for mark in &mut self.marks {
            mark.hovered = false;
        }
    }

    pub fn mark(&self, key: &str) -> Option<&RegionMark> {
        self.marks.iter().find(|m| m.key == key)
    }

    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }
}

impl Render for Choropleth {
    fn background(&self) -> skia::Color {
        self.theme.background
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        // region fills, hovered region stroked with the highlight color
        for mark in &self.marks {
            let path = rings_path(&mark.rings);
            canvas.draw_path(&path, &fill_paint(mark.fill));
            let outline = if mark.hovered {
                stroke_paint(self.theme.highlight, 2.5)
            } else {
                stroke_paint(self.theme.region_outline, 1.0)
            };
            canvas.draw_path(&path, &outline);
        }

        if opts.draw_labels {
            let shaper = TextShaper::new();
            for mark in &self.marks {
                if mark.label.is_empty() {
                    continue;
                }
                let (cx, cy) = mark.label_at;
                shaper.draw_centered(canvas, &mark.label, cx, cy, 16.0, self.theme.mark_label, false);
            }
            // slider caption under the map
            let caption = self.slider.label();
            shaper.draw_centered(
                canvas,
                &caption,
                opts.width as f32 / 2.0,
                opts.height as f32 - 16.0,
                25.0,
                self.theme.axis_label,
                false,
            );
        }
    }
}

/// Label text for a joined region: "NSW (1,000 Migrants)". Codes without an
/// abbreviation (code 9 and unknowns) render no label.
fn region_label(code: &str, value: f64) -> String {
    let name = state_label(code);
    if name.is_empty() {
        return String::new();
    }
    format!("{} ({} Migrants)", name, group_thousands(value))
}

// Anchor labels at the centroid of the largest ring so multipolygon states
// label their mainland part.
fn label_anchor(rings: &[Vec<(f32, f32)>]) -> (f32, f32) {
    rings
        .iter()
        .max_by(|a, b| {
            let aa = ring_area(a).abs();
            let bb = ring_area(b).abs();
            aa.partial_cmp(&bb).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|ring| ring_centroid(ring))
        .unwrap_or((0.0, 0.0))
}
