// File: crates/atlas-core/src/projection.rs
// Summary: Albers equal-area conic projection with fixed center/rotation/parallels.

use std::f64::consts::PI;

/// Conic equal-area projection in the Albers configuration.
///
/// Longitude is pre-rotated by `rotate_lambda`, the sphere is projected
/// through the two standard parallels, and the projected plane is scaled
/// and translated so `center` lands on `translate`.
#[derive(Clone, Copy, Debug)]
pub struct AlbersEqualArea {
    n: f64,
    c: f64,
    rho0: f64,
    rotate_lambda: f64,
    center_xy: (f64, f64),
    scale: f64,
    translate: (f64, f64),
}

impl AlbersEqualArea {
    /// Build a projection from degrees: `center` [lon, lat], `rotate` [lambda, phi]
    /// (phi rotation unsupported and must be 0), `parallels` [phi1, phi2].
    pub fn new(
        center: [f64; 2],
        rotate: [f64; 2],
        parallels: [f64; 2],
        scale: f64,
        translate: (f64, f64),
    ) -> Self {
        debug_assert!(rotate[1] == 0.0, "latitude rotation is not supported");
        let phi1 = parallels[0].to_radians();
        let phi2 = parallels[1].to_radians();
        let n = (phi1.sin() + phi2.sin()) / 2.0;
        let c = phi1.cos().powi(2) + 2.0 * n * phi1.sin();
        let rho0 = c.sqrt() / n;
        let mut p = Self {
            n,
            c,
            rho0,
            rotate_lambda: rotate[0],
            center_xy: (0.0, 0.0),
            scale,
            translate,
        };
        p.center_xy = p.raw(center[0].to_radians(), center[1].to_radians());
        p
    }

    /// Fixed configuration for the Australian state map: center [0, -25],
    /// rotate [-135, 0], parallels [-18, -36], scale 1100, translate at the
    /// surface midpoint.
    pub fn australia(width: i32, height: i32) -> Self {
        Self::new(
            [0.0, -25.0],
            [-135.0, 0.0],
            [-18.0, -36.0],
            1100.0,
            (width as f64 / 2.0, height as f64 / 2.0),
        )
    }

    // Projected plane coordinates before scale/translate. Inputs in radians,
    // lambda already rotated.
    fn raw(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let rho = (self.c - 2.0 * self.n * phi.sin()).sqrt() / self.n;
        let a = self.n * lambda;
        (rho * a.sin(), self.rho0 - rho * a.cos())
    }

    /// Project a lon/lat pair (degrees) to screen pixels.
    pub fn project(&self, lon: f64, lat: f64) -> (f32, f32) {
        let mut lambda = (lon + self.rotate_lambda).to_radians();
        // wrap to [-pi, pi] so the antimeridian does not tear the cone
        while lambda > PI { lambda -= 2.0 * PI; }
        while lambda < -PI { lambda += 2.0 * PI; }
        let (x, y) = self.raw(lambda, lat.to_radians());
        let sx = self.translate.0 + self.scale * (x - self.center_xy.0);
        let sy = self.translate.1 - self.scale * (y - self.center_xy.1);
        (sx as f32, sy as f32)
    }

    /// Project a lon/lat ring to screen space.
    pub fn project_ring(&self, ring: &[(f64, f64)]) -> Vec<(f32, f32)> {
        ring.iter().map(|&(lon, lat)| self.project(lon, lat)).collect()
    }
}
