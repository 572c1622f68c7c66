// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mathematical helper functions.

/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`).
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Clamp `v` to `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics, even if `min > max`, and lets NaN through.
#[inline]
pub fn clamp(v: f32, min: f32, max: f32) -> f32 {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

/// Clamp `t` to `[0, 1]`.
#[inline]
pub fn clamp01(t: f32) -> f32 {
    clamp(t, 0.0, 1.0)
}

/// The murmur3 32-bit finalizer.
///
/// A cheap, well-mixed integer hash for deterministic per-index variation.
#[inline]
pub const fn hash32(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x85eb_ca6b);
    x ^= x >> 13;
    x = x.wrapping_mul(0xc2b2_ae35);
    x ^= x >> 16;
    x
}
