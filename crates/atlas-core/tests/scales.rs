// File: crates/atlas-core/tests/scales.rs
// Purpose: Validate linear/band/quantize scale domains, positions, and bucket mapping.

use atlas_core::scale::{extent, BandScale, LinearScale, QuantizeScale};
use atlas_core::Theme;

#[test]
fn linear_domain_tracks_field_extent() {
    let rows = vec![4.0f64, -2.0, 10.0, 3.0];
    let scale = LinearScale::from_field(&rows, |v| *v, 0.0, 100.0);
    assert_eq!(scale.d0, -2.0);
    assert_eq!(scale.d1, 10.0);
    assert!((scale.to_px(-2.0) - 0.0).abs() < 1e-4);
    assert!((scale.to_px(10.0) - 100.0).abs() < 1e-4);
    assert!((scale.to_px(4.0) - 50.0).abs() < 1e-4);
}

#[test]
fn linear_inverted_range_for_screen_y() {
    let scale = LinearScale::new(0.0, 10.0, 720.0, 80.0);
    assert!((scale.to_px(0.0) - 720.0).abs() < 1e-4);
    assert!((scale.to_px(10.0) - 80.0).abs() < 1e-4);
    // round trip
    let v = scale.from_px(scale.to_px(7.5));
    assert!((v - 7.5).abs() < 1e-6);
}

#[test]
fn band_slots_even_with_inner_padding() {
    let band = BandScale::new(5, 100.0, 600.0, 0.02);
    let xs: Vec<f32> = (0..5).map(|i| band.slot(i)).collect();
    // even spacing
    let step = xs[1] - xs[0];
    for w in xs.windows(2) {
        assert!((w[1] - w[0] - step).abs() < 1e-3);
    }
    // bands narrower than the step, first slot at range start
    assert!(band.bandwidth() < step);
    assert!((xs[0] - 100.0).abs() < 1e-4);
    // last band ends inside the range
    assert!(band.slot(4) + band.bandwidth() <= 600.0 + 1e-3);
}

#[test]
fn quantize_buckets_cover_domain() {
    let theme = Theme::light();
    let scale = QuantizeScale::new(0.0, 60.0, &theme.ramp);
    assert_eq!(scale.bucket(0.0), 0);
    assert_eq!(scale.bucket(9.9), 0);
    assert_eq!(scale.bucket(10.0), 1);
    assert_eq!(scale.bucket(59.9), 5);
    // max value clamps into the last bucket
    assert_eq!(scale.bucket(60.0), 5);
    // out-of-domain clamps to end buckets
    assert_eq!(scale.bucket(-5.0), 0);
    assert_eq!(scale.bucket(1000.0), 5);
}

#[test]
fn quantize_degenerate_domain_maps_to_first_bucket() {
    let theme = Theme::light();
    let scale = QuantizeScale::new(1000.0, 1000.0, &theme.ramp);
    assert_eq!(scale.bucket(1000.0), 0);
    assert_eq!(scale.color(1000.0), theme.ramp[0]);
}

#[test]
fn extent_skips_nan_and_handles_empty() {
    assert_eq!(extent([3.0, f64::NAN, -1.0].into_iter()), (-1.0, 3.0));
    assert_eq!(extent(std::iter::empty()), (0.0, 1.0));
}
