// File: crates/atlas-core/tests/join.rs
// Purpose: Join completeness — every record yields exactly one mark of its kind.

use atlas_core::{AgeRow, AreaChart, BarChart, Choropleth, MigrationRow, Region, RenderOptions, Theme};

fn square(lon0: f64, lat0: f64) -> Vec<Vec<(f64, f64)>> {
    vec![vec![
        (lon0, lat0),
        (lon0 + 4.0, lat0),
        (lon0 + 4.0, lat0 + 4.0),
        (lon0, lat0 + 4.0),
        (lon0, lat0),
    ]]
}

fn sample_regions() -> Vec<Region> {
    vec![
        Region { state_code: "1".into(), rings: square(146.0, -34.0) },
        Region { state_code: "2".into(), rings: square(142.0, -38.0) },
        Region { state_code: "3".into(), rings: square(144.0, -26.0) },
    ]
}

fn migration_rows(values: &[(&str, f64)]) -> Vec<MigrationRow> {
    values
        .iter()
        .map(|&(code, migrant)| MigrationRow {
            state_code: code.into(),
            migrant,
            country: None,
        })
        .collect()
}

#[test]
fn map_marks_match_regions() {
    let regions = sample_regions();
    let mut map = Choropleth::new(&regions, Theme::light(), &RenderOptions::map());
    assert_eq!(map.mark_count(), regions.len());

    // restyling with fewer data rows must not change the mark count
    map.apply_dataset(&migration_rows(&[("1", 100.0)]));
    assert_eq!(map.mark_count(), regions.len());
}

#[test]
fn bar_marks_match_records() {
    let rows = migration_rows(&[("1", 5.0), ("2", 3.0), ("3", 8.0)]);
    let chart = BarChart::new(&rows, Theme::light(), &RenderOptions::bars());
    assert_eq!(chart.mark_count(), rows.len());
}

#[test]
fn dot_marks_are_two_per_record() {
    let rows: Vec<AgeRow> = (0..10)
        .map(|i| AgeRow { x: i as f64 * 5.0, y1: 100.0 + i as f64, y2: 90.0 + i as f64 })
        .collect();
    let chart = AreaChart::new(rows.clone(), Theme::light(), &RenderOptions::age_profile());
    assert_eq!(chart.record_count(), rows.len());
    // one interaction target per data point per series
    assert_eq!(chart.dot_count(), rows.len() * 2);
}
