// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precomputed brush rotations.
//!
//! Rotating a texture costs a sine, a cosine and two roundings per pixel and stamp. A
//! stroke lays hundreds of stamps, so [`BrushCache`] rotates every built-in [`Brush`]
//! once to [`ROTATION_STEPS`] evenly spaced angles and strokes then snap each stamp to
//! the nearest of them.

use crate::brush::{Brush, StampStyle, Texture, round_half_up, walk_stamps};
use core::f32::consts::TAU;
use stipple_common::{BLACK, PointF, Surface};
#[cfg(not(feature = "std"))]
use stipple_common::kurbo::common::FloatFuncs as _;

/// The number of precomputed angles per brush.
pub const ROTATION_STEPS: usize = 16;

/// The largest width and height of a rotated stamp.
pub const MAX_STAMP_SIZE: usize = 16;

/// A texture rotated to a fixed angle, ready to blit.
///
/// The stamp is a `width` by `height` bitmap laid out like a [`Texture`], positioned at
/// `(offset_x, offset_y)` relative to the stamp center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotatedStamp {
    rows: [u16; MAX_STAMP_SIZE],
    width: u8,
    height: u8,
    offset_x: i8,
    offset_y: i8,
}

impl RotatedStamp {
    /// Rotate `texture` by `angle` radians about its center.
    ///
    /// The bitmap covers the rotated corners of the texture, widened to whole pixels and
    /// capped at 16 by 16. Each set pixel center is rotated, rounded half up and placed if
    /// it lands inside; the built-in brushes never lose any.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rotated textures are at most 23 pixels across"
    )]
    pub fn new(texture: &Texture<'_>, angle: f32) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let half_w = f32::from(texture.width()) / 2.0;
        let half_h = f32::from(texture.height()) / 2.0;
        let rotate = |dx: f32, dy: f32| (dx * cos - dy * sin, dx * sin + dy * cos);

        let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
        let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for (cx, cy) in [
            (-half_w, -half_h),
            (half_w, -half_h),
            (-half_w, half_h),
            (half_w, half_h),
        ] {
            let (x, y) = rotate(cx, cy);
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        let (left, top) = (min_x.floor() as i32, min_y.floor() as i32);
        let cap = MAX_STAMP_SIZE as i32;
        let width = (max_x.ceil() as i32 - left + 1).clamp(0, cap);
        let height = (max_y.ceil() as i32 - top + 1).clamp(0, cap);
        let mut stamp = Self {
            rows: [0; MAX_STAMP_SIZE],
            width: width as u8,
            height: height as u8,
            offset_x: left as i8,
            offset_y: top as i8,
        };

        let mut dropped = 0_usize;
        for (tx, ty) in texture.pixels() {
            let (rx, ry) = rotate(
                f32::from(tx) - half_w + 0.5,
                f32::from(ty) - half_h + 0.5,
            );
            let px = round_half_up(rx) - left;
            let py = round_half_up(ry) - top;
            if (0..width).contains(&px) && (0..height).contains(&py) {
                stamp.rows[py as usize] |= 1 << (width - 1 - px);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            log::debug!("rotated stamp lost {dropped} pixels to the size cap");
        }

        stamp
    }

    /// The width of the bitmap.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// The height of the bitmap.
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// The position of the top left bitmap pixel relative to the stamp center.
    pub const fn offset(&self) -> (i8, i8) {
        (self.offset_x, self.offset_y)
    }

    /// Whether the bitmap pixel at `(x, y)` is set.
    pub fn get(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        (self.rows[usize::from(y)] >> (self.width - 1 - x)) & 1 != 0
    }

    /// The bitmap as a [`Texture`].
    pub fn texture(&self) -> Texture<'_> {
        Texture::new(self.width, self.height, &self.rows)
    }

    /// The number of set pixels.
    pub fn pixel_count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }
}

/// Map an angle in radians, of any sign or size, to the nearest of the
/// [`ROTATION_STEPS`] precomputed rotations.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the normalized angle is in [0, ROTATION_STEPS]"
)]
pub fn angle_to_index(angle: f32) -> usize {
    let mut normalized = angle % TAU;
    if normalized < 0.0 {
        normalized += TAU;
    }

    // A NaN angle casts to 0.
    (normalized / TAU * ROTATION_STEPS as f32).round() as usize % ROTATION_STEPS
}

/// Every built-in brush, pre-rotated to [`ROTATION_STEPS`] angles.
#[derive(Clone, Debug)]
pub struct BrushCache {
    stamps: [[RotatedStamp; ROTATION_STEPS]; Brush::COUNT],
}

impl BrushCache {
    /// Rotate all built-in brushes. Step `r` is rotated by `r * 2π / 16` radians.
    #[expect(clippy::cast_precision_loss, reason = "step index is below 16")]
    pub fn new() -> Self {
        let stamps = core::array::from_fn(|b| {
            let texture = Brush::ALL[b].texture();
            core::array::from_fn(|r| {
                RotatedStamp::new(&texture, r as f32 * TAU / ROTATION_STEPS as f32)
            })
        });
        log::debug!(
            "precomputed {} rotated brush stamps",
            Brush::COUNT * ROTATION_STEPS
        );

        Self { stamps }
    }

    /// The stamp of `brush` closest to `angle`.
    pub fn get(&self, brush: Brush, angle: f32) -> &RotatedStamp {
        &self.stamps[brush.index()][angle_to_index(angle)]
    }

    /// The stamp of `brush` at rotation step `index`, modulo [`ROTATION_STEPS`].
    pub fn get_step(&self, brush: Brush, index: usize) -> &RotatedStamp {
        &self.stamps[brush.index()][index % ROTATION_STEPS]
    }
}

impl Default for BrushCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Blit `stamp` in ink, centered on `center`.
pub fn stamp_rotated_brush<S: Surface + ?Sized>(
    surface: &mut S,
    stamp: &RotatedStamp,
    center: PointF,
) {
    let (ox, oy) = stamp.offset();
    let base_x = round_half_up(center.x).saturating_add(ox.into());
    let base_y = round_half_up(center.y).saturating_add(oy.into());

    for (x, y) in stamp.texture().pixels() {
        surface.set_pixel(
            base_x.saturating_add(x.into()),
            base_y.saturating_add(y.into()),
            BLACK,
        );
    }
}

/// [`stroke_bezier_brush`](crate::brush::stroke_bezier_brush) using the cached rotations.
///
/// Stamps are placed exactly as in the uncached stroke; only the rotation is snapped.
pub fn stroke_bezier_texture_ball_cached<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[PointF],
    brush: Brush,
    cache: &BrushCache,
    style: StampStyle,
) {
    walk_stamps(points, style, |at, angle| {
        stamp_rotated_brush(surface, cache.get(brush, angle), at);
    });
}

#[cfg(test)]
mod tests {
    use super::{BrushCache, MAX_STAMP_SIZE, ROTATION_STEPS, RotatedStamp, angle_to_index};
    use crate::brush::{Brush, Texture, round_half_up};
    use core::f32::consts::{FRAC_PI_2, PI, TAU};
    #[cfg(not(feature = "std"))]
    use stipple_common::kurbo::common::FloatFuncs as _;

    #[test]
    fn angles_snap_to_nearest_step() {
        assert_eq!(angle_to_index(0.0), 0);
        assert_eq!(angle_to_index(FRAC_PI_2), 4);
        assert_eq!(angle_to_index(PI), 8);
        assert_eq!(angle_to_index(-FRAC_PI_2), 12);
        assert_eq!(angle_to_index(TAU - 0.01), 0);
        assert_eq!(angle_to_index(5.0 * TAU + FRAC_PI_2), 4);
        assert_eq!(angle_to_index(f32::NAN), 0);
    }

    #[test]
    fn unrotated_stamp_matches_texture() {
        let tex = Brush::Heavy.texture();
        let stamp = RotatedStamp::new(&tex, 0.0);
        // The corners at +-4 widen the box by one column and row.
        assert_eq!((stamp.width(), stamp.height()), (9, 9));
        assert_eq!(stamp.offset(), (-4, -4));
        for y in 0..8 {
            assert!(!stamp.get(0, y + 1));
            for x in 0..8 {
                assert_eq!(stamp.get(x + 1, y + 1), tex.get(x, y));
            }
        }
    }

    #[test]
    fn quarter_turn_swaps_axes() {
        let bar = Texture::new(4, 1, &[0b1111]);
        let stamp = RotatedStamp::new(&bar, FRAC_PI_2);
        assert_eq!((stamp.width(), stamp.height()), (3, 5));
        assert_eq!(stamp.offset(), (-1, -2));
        assert_eq!(stamp.pixel_count(), 4);
        for y in 1..5 {
            assert!(stamp.get(1, y));
        }
    }

    #[test]
    fn empty_texture_gives_empty_stamp() {
        let stamp = RotatedStamp::new(&Texture::new(3, 1, &[0]), 1.0);
        assert_eq!(stamp.pixel_count(), 0);
    }

    #[test]
    fn cached_brushes_lose_no_pixels() {
        let cache = BrushCache::new();
        for brush in Brush::ALL {
            let tex = brush.texture();
            let half_w = f32::from(tex.width()) / 2.0;
            let half_h = f32::from(tex.height()) / 2.0;
            for r in 0..ROTATION_STEPS {
                let stamp = cache.get_step(brush, r);
                assert!(usize::from(stamp.width()) <= MAX_STAMP_SIZE);
                let angle = r as f32 * TAU / ROTATION_STEPS as f32;
                let (sin, cos) = (angle.sin(), angle.cos());
                let (ox, oy) = stamp.offset();
                for (tx, ty) in tex.pixels() {
                    let dx = f32::from(tx) - half_w + 0.5;
                    let dy = f32::from(ty) - half_h + 0.5;
                    let px = round_half_up(dx * cos - dy * sin) - i32::from(ox);
                    let py = round_half_up(dx * sin + dy * cos) - i32::from(oy);
                    let (px, py) = (u8::try_from(px).unwrap(), u8::try_from(py).unwrap());
                    assert!(stamp.get(px, py), "{brush:?} step {r} lost ({tx}, {ty})");
                }
            }
            assert_eq!(cache.get(brush, FRAC_PI_2), cache.get_step(brush, 4));
        }
    }
}
