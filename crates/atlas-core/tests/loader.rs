// File: crates/atlas-core/tests/loader.rs
// Purpose: Dataset loading — coercion, skipped bad records, load/parse error surfacing.

use std::path::PathBuf;

use atlas_core::data::{group_thousands, load_age_csv, load_migration_csv, state_label, year_csv_path};
use atlas_core::geo::load_regions;
use atlas_core::AtlasError;

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/fixtures");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn migration_csv_coerces_numbers() {
    let path = write_fixture(
        "states_ok.csv",
        "STATE_CODE,MIGRANT\n1,31700\n2,29850\n3,12000\n",
    );
    let rows = load_migration_csv(&path).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].state_code, "1");
    assert_eq!(rows[0].migrant, 31700.0);
    assert!(rows[0].country.is_none());
}

#[test]
fn migration_csv_keeps_optional_country() {
    let path = write_fixture(
        "ethnic_ok.csv",
        "STATE_CODE,MIGRANT,COUNTRY\n1,8000,England\n2,6000,India\n",
    );
    let rows = load_migration_csv(&path).unwrap();
    assert_eq!(rows[1].country.as_deref(), Some("India"));
}

#[test]
fn malformed_record_is_skipped_not_fatal() {
    let path = write_fixture(
        "states_bad_row.csv",
        "STATE_CODE,MIGRANT\n1,31700\n2,not-a-number\n3,12000\n",
    );
    let rows = load_migration_csv(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].state_code, "3");
}

#[test]
fn missing_file_surfaces_load_error() {
    let err = load_migration_csv(&PathBuf::from("target/test_out/nope/missing.csv")).unwrap_err();
    assert!(matches!(err, AtlasError::Load { .. }), "got {err}");
}

#[test]
fn unparsable_file_surfaces_parse_error() {
    let path = write_fixture("states_empty.csv", "STATE_CODE,MIGRANT\n");
    let err = load_migration_csv(&path).unwrap_err();
    assert!(matches!(err, AtlasError::Parse { .. }), "got {err}");
}

#[test]
fn age_csv_loads_both_series() {
    let path = write_fixture("ages_ok.csv", "x,y1,y2\n0,150.2,143.9\n5,160.4,152.1\n");
    let rows = load_age_csv(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].x, 5.0);
    assert_eq!(rows[1].y2, 152.1);
}

#[test]
fn year_paths_are_parameterized() {
    let path = year_csv_path(&PathBuf::from("data"), 2019);
    assert_eq!(path, PathBuf::from("data/states2019.csv"));
}

#[test]
fn geojson_features_become_regions() {
    let path = write_fixture(
        "two_states.geojson",
        r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "STATE_CODE": "1" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[146.0, -34.0], [150.0, -34.0], [150.0, -30.0], [146.0, -30.0], [146.0, -34.0]]]
      }
    },
    {
      "type": "Feature",
      "properties": { "STATE_CODE": 2 },
      "geometry": {
        "type": "MultiPolygon",
        "coordinates": [
          [[[142.0, -38.0], [146.0, -38.0], [146.0, -36.0], [142.0, -38.0]]],
          [[[144.0, -40.0], [145.0, -40.0], [145.0, -39.0], [144.0, -40.0]]]
        ]
      }
    }
  ]
}"#,
    );
    let regions = load_regions(&path).unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].state_code, "1");
    assert_eq!(regions[0].rings.len(), 1);
    assert_eq!(regions[0].rings[0].len(), 5);
    // numeric property codes coerce to strings; multipolygon rings flatten
    assert_eq!(regions[1].state_code, "2");
    assert_eq!(regions[1].rings.len(), 2);
}

#[test]
fn invalid_geojson_surfaces_parse_error() {
    let path = write_fixture("broken.geojson", "{ not geojson");
    let err = load_regions(&path).unwrap_err();
    assert!(matches!(err, AtlasError::Parse { .. }), "got {err}");
}

#[test]
fn labels_and_grouping() {
    assert_eq!(state_label("1"), "NSW");
    assert_eq!(state_label("8"), "ACT");
    assert_eq!(state_label("9"), "");
    assert_eq!(group_thousands(0.0), "0");
    assert_eq!(group_thousands(999.0), "999");
    assert_eq!(group_thousands(1000.0), "1,000");
    assert_eq!(group_thousands(1234567.0), "1,234,567");
}
