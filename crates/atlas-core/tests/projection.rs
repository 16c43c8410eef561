// File: crates/atlas-core/tests/projection.rs
// Purpose: Validate the fixed Albers configuration and planar geometry helpers.

use atlas_core::geometry::{point_in_rings, ring_area, ring_centroid};
use atlas_core::AlbersEqualArea;

#[test]
fn center_lands_on_translate() {
    let p = AlbersEqualArea::australia(800, 800);
    // rotate [-135, 0] + center [0, -25] puts (135E, 25S) at the midpoint
    let (x, y) = p.project(135.0, -25.0);
    assert!((x - 400.0).abs() < 1e-3, "x = {x}");
    assert!((y - 400.0).abs() < 1e-3, "y = {y}");
}

#[test]
fn longitudes_mirror_about_central_meridian() {
    let p = AlbersEqualArea::australia(800, 800);
    let (xw, _) = p.project(130.0, -25.0);
    let (xe, _) = p.project(140.0, -25.0);
    assert!((xw + xe - 800.0).abs() < 1e-2, "west {xw} east {xe}");
    assert!(xw < 400.0 && xe > 400.0);
}

#[test]
fn north_is_up() {
    let p = AlbersEqualArea::australia(800, 800);
    let (_, y_north) = p.project(135.0, -20.0);
    let (_, y_south) = p.project(135.0, -30.0);
    assert!(y_north < 400.0 && y_south > 400.0);
}

#[test]
fn scale_spreads_points() {
    let big = AlbersEqualArea::new([0.0, -25.0], [-135.0, 0.0], [-18.0, -36.0], 2200.0, (400.0, 400.0));
    let small = AlbersEqualArea::new([0.0, -25.0], [-135.0, 0.0], [-18.0, -36.0], 1100.0, (400.0, 400.0));
    let (bx, _) = big.project(140.0, -25.0);
    let (sx, _) = small.project(140.0, -25.0);
    assert!((bx - 400.0) > 1.5 * (sx - 400.0));
}

#[test]
fn centroid_and_area_of_square() {
    let square = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    assert!((ring_area(&square).abs() - 100.0).abs() < 1e-3);
    let (cx, cy) = ring_centroid(&square);
    assert!((cx - 5.0).abs() < 1e-3 && (cy - 5.0).abs() < 1e-3);
}

#[test]
fn point_in_rings_even_odd() {
    let outer = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    let hole = vec![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)];
    let rings = vec![outer, hole];
    assert!(point_in_rings(2.0, 2.0, &rings));
    // inside the hole counts as outside
    assert!(!point_in_rings(5.0, 5.0, &rings));
    assert!(!point_in_rings(11.0, 5.0, &rings));
}
