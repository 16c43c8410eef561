// File: crates/atlas-core/src/geo.rs
// Summary: GeoJSON boundary loading; extracts per-feature state codes and polygon rings.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use geojson::{GeoJson, Value};

use crate::error::AtlasError;

/// One geographic feature: a state code key and its polygon rings in
/// lon/lat degrees. Multipolygons are flattened; each ring keeps its own
/// vertex list so even-odd hit testing still works.
#[derive(Clone, Debug)]
pub struct Region {
    pub state_code: String,
    pub rings: Vec<Vec<(f64, f64)>>,
}

pub fn load_regions(path: &Path) -> Result<Vec<Region>, AtlasError> {
    let file = File::open(path).map_err(|source| AtlasError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let geojson = GeoJson::from_reader(BufReader::new(file)).map_err(|e| AtlasError::Parse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => {
            return Err(AtlasError::Parse {
                path: path.to_path_buf(),
                detail: "expected a FeatureCollection".into(),
            })
        }
    };

    let mut regions = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let state_code = match feature.property("STATE_CODE") {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => {
                log::warn!("{}: feature without STATE_CODE property", path.display());
                String::new()
            }
        };

        let mut rings: Vec<Vec<(f64, f64)>> = Vec::new();
        match feature.geometry.map(|g| g.value) {
            Some(Value::Polygon(polygon)) => {
                for ring in &polygon {
                    rings.push(ring_points(ring));
                }
            }
            Some(Value::MultiPolygon(polygons)) => {
                for polygon in &polygons {
                    for ring in polygon {
                        rings.push(ring_points(ring));
                    }
                }
            }
            _ => {
                log::warn!(
                    "{}: skipping feature {:?} with missing or non-polygonal geometry",
                    path.display(),
                    state_code
                );
                continue;
            }
        }
        regions.push(Region { state_code, rings });
    }

    if regions.is_empty() {
        return Err(AtlasError::Parse {
            path: path.to_path_buf(),
            detail: "no polygonal features".into(),
        });
    }
    Ok(regions)
}

fn ring_points(ring: &[Vec<f64>]) -> Vec<(f64, f64)> {
    ring.iter()
        .filter(|p| p.len() >= 2)
        .map(|p| (p[0], p[1]))
        .collect()
}
