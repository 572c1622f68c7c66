// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Procedural shape generation.

use crate::geometry::PointF;
use alloc::vec::Vec;
use core::f32::consts::{FRAC_PI_2, TAU};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Deterministic noise in `[-1, 1)` for a vertex `index` under `seed`.
///
/// The same `(index, seed)` pair always gives the same value.
pub fn hash_noise(index: i32, seed: u32) -> f32 {
    // Negative indices wrap, like any other bit pattern.
    let mut h = seed ^ (index as u32).wrapping_mul(374_761_393);
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^= h >> 16;
    f32::from((h & 0xFFFF) as u16) / 32768.0 - 1.0
}

/// A lumpy regular polygon with `count` vertices around `center`.
///
/// The first vertex points straight up and the rest follow clockwise on screen. Each
/// vertex's distance from the center is `radius * (1 + noise * lumpiness)`, with `noise`
/// from [`hash_noise`].
#[expect(clippy::cast_precision_loss, reason = "vertex counts are tiny")]
pub fn generate_polygon(
    count: usize,
    center: PointF,
    radius: f32,
    lumpiness: f32,
    seed: u32,
) -> Vec<PointF> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32 - FRAC_PI_2;
            let noise = hash_noise(i32::try_from(i).unwrap_or(i32::MAX), seed);
            let r = radius * (1.0 + noise * lumpiness);
            PointF::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        })
        .collect()
}

/// A lumpy hexagon. See [`generate_polygon`].
pub fn generate_hex(center: PointF, radius: f32, lumpiness: f32, seed: u32) -> Vec<PointF> {
    generate_polygon(6, center, radius, lumpiness, seed)
}

/// Repeat the first vertex at the end so a bezier stroke closes the loop.
pub fn polygon_to_bezier_loop(points: &[PointF]) -> Vec<PointF> {
    let mut out = Vec::with_capacity(points.len() + 1);
    out.extend_from_slice(points);
    if let Some(first) = points.first() {
        out.push(*first);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{generate_hex, generate_polygon, hash_noise, polygon_to_bezier_loop};
    use crate::geometry::PointF;

    #[test]
    fn noise_range() {
        for seed in [0, 1, 42, u32::MAX] {
            for i in -50..50 {
                let n = hash_noise(i, seed);
                assert!((-1.0..1.0).contains(&n), "{n}");
            }
        }
    }

    #[test]
    fn noise_matches_reference() {
        // seed 0, index 0 hashes to 0, the bottom of the range.
        assert_eq!(hash_noise(0, 0), -1.0);
        assert_eq!(hash_noise(3, 42), hash_noise(3, 42));
    }

    #[test]
    fn hex_is_reproducible() {
        let center = PointF::new(200.0, 120.0);
        let a = generate_hex(center, 110.0, 0.05, 42);
        let b = generate_hex(center, 110.0, 0.05, 42);
        let c = generate_hex(center, 110.0, 0.05, 43);
        assert_eq!(a.len(), 6);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn smooth_polygon_is_regular() {
        let pts = generate_polygon(4, PointF::new(0.0, 0.0), 10.0, 0.0, 9);
        assert!(pts[0].x.abs() < 1e-4 && (pts[0].y + 10.0).abs() < 1e-4);
        assert!((pts[1].x - 10.0).abs() < 1e-4 && pts[1].y.abs() < 1e-4);
        for p in &pts {
            assert!((p.length() - 10.0).abs() < 1e-3);
        }
        assert!(generate_polygon(0, PointF::ZERO, 1.0, 0.0, 0).is_empty());
    }

    #[test]
    fn lumpiness_bounds_radius() {
        for seed in 0..20 {
            for p in generate_hex(PointF::ZERO, 100.0, 0.1, seed) {
                let r = p.length();
                assert!((90.0 - 1e-3..=110.0 + 1e-3).contains(&r));
            }
        }
    }

    #[test]
    fn bezier_loop_closes() {
        let pts = [PointF::new(1.0, 2.0), PointF::new(3.0, 4.0)];
        let closed = polygon_to_bezier_loop(&pts);
        assert_eq!(closed.len(), 3);
        assert_eq!(closed[2], pts[0]);
        assert!(polygon_to_bezier_loop(&[]).is_empty());
    }
}
