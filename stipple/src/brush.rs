// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Textured "organic" strokes.
//!
//! A stroke is drawn by stamping a small bitmap (a [`Texture`]) along a smooth bezier
//! path, each stamp rotated to follow the local direction of the path. Stamps are placed
//! at equal arc-length intervals, not equal parameter steps, so their density doesn't
//! change with the speed of the curve.
//!
//! [`stamp_texture`] rotates pixels on every call. For the built-in [`Brush`]es the
//! rotations can be precomputed with a [`BrushCache`](crate::BrushCache).

use crate::bezier::{
    DEFAULT_SMOOTHNESS, auto_tangent, check_finite, cubic_bezier, cubic_bezier_derivative,
    segments,
};
use stipple_common::math::{clamp01, lerp};
use stipple_common::{BLACK, PointF, Surface};
#[cfg(not(feature = "std"))]
use stipple_common::kurbo::common::FloatFuncs as _;

/// The default arc length between stamps, in pixels.
pub const DEFAULT_SPACING: f32 = 2.0;

/// Samples taken along each cubic segment while measuring arc length.
pub const STEPS_PER_SEGMENT: u16 = 50;

/// Upper bound on the stamps of one stroke.
const MAX_STAMPS: u32 = 1 << 16;

/// Slack when comparing traveled distance with the next stamp position, so that float
/// error never drops the stamp at the very end of a path.
const ARC_EPSILON: f32 = 1e-3;

/// A small one-bit bitmap, up to 16 pixels wide.
///
/// Each row is a `u16` whose lowest `width` bits hold the pixels, most significant of
/// those first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Texture<'a> {
    width: u8,
    height: u8,
    rows: &'a [u16],
}

impl<'a> Texture<'a> {
    /// Create a texture. `width` is capped at 16 and `height` at the number of rows.
    pub const fn new(width: u8, height: u8, rows: &'a [u16]) -> Self {
        let width = if width > 16 { 16 } else { width };
        #[expect(clippy::cast_possible_truncation, reason = "shorter than `height`")]
        let height = if height as usize > rows.len() {
            rows.len() as u8
        } else {
            height
        };
        Self {
            width,
            height,
            rows,
        }
    }

    /// The width in pixels.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// The height in pixels.
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Whether the pixel at `(x, y)` is set. Out of range pixels are not.
    pub fn get(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        (self.rows[usize::from(y)] >> (self.width - 1 - x)) & 1 != 0
    }

    /// The coordinates of all set pixels, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.get(x, y))
    }
}

const HEAVY: [u16; 8] = [
    0b0011_1100,
    0b0111_1110,
    0b1101_1011,
    0b1111_1111,
    0b1111_1111,
    0b1101_1011,
    0b0111_1110,
    0b0011_1100,
];

const FINE: [u16; 6] = [
    0b01_1110,
    0b11_1111,
    0b11_0011,
    0b11_0011,
    0b11_1111,
    0b01_1110,
];

const SCRATCHY: [u16; 8] = [
    0b0010_1100,
    0b0111_0110,
    0b1101_1010,
    0b1011_1101,
    0b0110_1111,
    0b1101_1010,
    0b0110_1110,
    0b0011_0100,
];

const THIN: [u16; 4] = [0b0110, 0b1111, 0b1111, 0b0110];

const BLOBBY: [u16; 10] = [
    0b00_0111_1000,
    0b00_1111_1100,
    0b01_1111_1110,
    0b11_1111_1111,
    0b11_1111_1111,
    0b11_1111_1111,
    0b11_1111_1111,
    0b01_1111_1110,
    0b00_1111_1100,
    0b00_0111_1000,
];

/// The built-in stroke textures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Brush {
    /// A dense 8x8 ball with two pairs of pinholes.
    #[default]
    Heavy = 0,
    /// A 6x6 ring, for finer outlines.
    Fine = 1,
    /// A ragged 8x8 ball with gaps, for a dry-brush look.
    Scratchy = 2,
    /// A 4x4 dot.
    Thin = 3,
    /// A solid 10x10 disc.
    Blobby = 4,
}

impl Brush {
    /// The number of built-in brushes.
    pub const COUNT: usize = 5;

    /// All built-in brushes, in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Heavy,
        Self::Fine,
        Self::Scratchy,
        Self::Thin,
        Self::Blobby,
    ];

    /// The brush's bitmap.
    pub const fn texture(self) -> Texture<'static> {
        match self {
            Self::Heavy => Texture::new(8, 8, &HEAVY),
            Self::Fine => Texture::new(6, 6, &FINE),
            Self::Scratchy => Texture::new(8, 8, &SCRATCHY),
            Self::Thin => Texture::new(4, 4, &THIN),
            Self::Blobby => Texture::new(10, 10, &BLOBBY),
        }
    }

    /// The position of the brush in [`Brush::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// How stamps are laid along a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StampStyle {
    /// The handle length factor passed to [`auto_tangent`].
    pub smoothness: f32,
    /// The arc length between stamps, in pixels. With a non-positive spacing only the
    /// first stamp is placed.
    pub spacing: f32,
}

impl StampStyle {
    /// Create a stamp style.
    pub const fn new(smoothness: f32, spacing: f32) -> Self {
        Self {
            smoothness,
            spacing,
        }
    }

    /// Builder method for setting the smoothness.
    pub const fn with_smoothness(mut self, smoothness: f32) -> Self {
        self.smoothness = smoothness;
        self
    }

    /// Builder method for setting the spacing.
    pub const fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl Default for StampStyle {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHNESS, DEFAULT_SPACING)
    }
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// Unlike `f32::round` this treats both sides of zero alike, so a row of pixel centers
/// at `-0.5, 0.5, ..` stays a row of distinct, adjacent pixels. Saturates at the `i32`
/// range.
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating float to int conversion is the intended behavior"
)]
#[inline]
pub(crate) fn round_half_up(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

/// Stamp `texture` centered on `center`, rotated by `angle` radians, in ink.
///
/// Every set pixel is rotated about the texture center and rounded to the nearest
/// surface pixel. Ties round up, toward positive infinity, unlike
/// [`PointF::to_point`] which rounds them away from zero. The two only disagree at exact
/// `.5` ties on negative, off-surface coordinates.
pub fn stamp_texture<S: Surface + ?Sized>(
    surface: &mut S,
    texture: &Texture<'_>,
    center: PointF,
    angle: f32,
) {
    let (sin, cos) = (angle.sin(), angle.cos());
    let half_w = f32::from(texture.width()) / 2.0;
    let half_h = f32::from(texture.height()) / 2.0;

    for (tx, ty) in texture.pixels() {
        let dx = f32::from(tx) - half_w + 0.5;
        let dy = f32::from(ty) - half_h + 0.5;
        let rx = dx * cos - dy * sin;
        let ry = dx * sin + dy * cos;
        surface.set_pixel(
            round_half_up(center.x + rx),
            round_half_up(center.y + ry),
            BLACK,
        );
    }
}

/// Walk the smooth path through `points` and call `stamp(position, angle)` at every
/// stamp location.
///
/// The first stamp is at the first vertex and another follows each time the arc length
/// traveled reaches the next multiple of `style.spacing`. Arc length is measured over
/// [`STEPS_PER_SEGMENT`] samples per segment; when one sample step passes several
/// multiples, each stamp is interpolated to its own position along the step. A straight
/// path of length `L` therefore gets exactly `floor(L / spacing) + 1` stamps. `angle` is
/// the direction of the curve's derivative at the stamp.
///
/// Paths with fewer than two points or non-finite coordinates produce no stamps.
#[expect(clippy::cast_precision_loss, reason = "stamp counts are capped well below 2^24")]
pub fn walk_stamps(points: &[PointF], style: StampStyle, mut stamp: impl FnMut(PointF, f32)) {
    if points.len() < 2 || !check_finite(points) {
        return;
    }

    let handles = auto_tangent(points, style.smoothness);
    let mut traveled = 0.0_f32;
    let mut next_at = 0.0_f32;
    let mut placed = 0_u32;

    for [p0, c0, c1, p1] in segments(points, &handles) {
        let mut prev = p0;
        let mut prev_t = 0.0;

        for step in 0..=STEPS_PER_SEGMENT {
            let t = f32::from(step) / f32::from(STEPS_PER_SEGMENT);
            let pt = cubic_bezier(p0, c0, c1, p1, t);
            let step_len = (pt - prev).length();
            let step_start = traveled;
            traveled += step_len;

            while traveled + ARC_EPSILON >= next_at {
                let frac = if step_len > 0.0 {
                    clamp01((next_at - step_start) / step_len)
                } else {
                    1.0
                };
                let at = PointF::new(lerp(prev.x, pt.x, frac), lerp(prev.y, pt.y, frac));
                let d = cubic_bezier_derivative(p0, c0, c1, p1, lerp(prev_t, t, frac));
                stamp(at, d.y.atan2(d.x));

                placed += 1;
                if placed >= MAX_STAMPS {
                    log::warn!("stroke stopped after {MAX_STAMPS} stamps");
                    return;
                }
                next_at = if style.spacing > 0.0 {
                    style.spacing * placed as f32
                } else {
                    f32::INFINITY
                };
            }

            prev = pt;
            prev_t = t;
        }
    }
}

/// Stroke the smooth path through `points` by stamping `texture` along it.
pub fn stroke_bezier_texture_ball<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[PointF],
    texture: &Texture<'_>,
    style: StampStyle,
) {
    walk_stamps(points, style, |at, angle| {
        stamp_texture(surface, texture, at, angle);
    });
}

/// Stroke the smooth path through `points` with a built-in brush, rotating it on the fly.
pub fn stroke_bezier_brush<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[PointF],
    brush: Brush,
    style: StampStyle,
) {
    stroke_bezier_texture_ball(surface, points, &brush.texture(), style);
}

#[cfg(test)]
mod tests {
    use super::{Brush, StampStyle, Texture, round_half_up, walk_stamps};
    use alloc::vec::Vec;
    use stipple_common::PointF;

    #[test]
    fn stamp_ties_round_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.5), -1);
        // Only negative ties differ from rounding away from zero.
        assert_eq!(PointF::new(2.5, -1.5).to_point(), stipple_common::Point::new(3, -2));
    }

    #[test]
    fn texture_bits_read_left_to_right() {
        let tex = Texture::new(4, 2, &[0b1000, 0b0001]);
        assert!(tex.get(0, 0));
        assert!(!tex.get(3, 0));
        assert!(tex.get(3, 1));
        assert!(!tex.get(4, 1));
        assert!(!tex.get(0, 2));
    }

    #[test]
    fn texture_clamps_to_rows() {
        let tex = Texture::new(20, 9, &[0xFFFF; 3]);
        assert_eq!(tex.width(), 16);
        assert_eq!(tex.height(), 3);
        assert_eq!(tex.pixels().count(), 48);
    }

    #[test]
    fn brush_textures() {
        let counts: Vec<usize> = Brush::ALL
            .iter()
            .map(|b| b.texture().pixels().count())
            .collect();
        assert_eq!(counts, [48, 28, 38, 12, 76]);
        for (i, brush) in Brush::ALL.iter().enumerate() {
            assert_eq!(brush.index(), i);
        }
    }

    #[test]
    fn stamps_follow_path_direction() {
        let pts = [PointF::new(0.0, 0.0), PointF::new(0.0, 20.0)];
        let mut stamps = Vec::new();
        walk_stamps(&pts, StampStyle::default().with_spacing(5.0), |at, angle| {
            stamps.push((at, angle));
        });
        assert_eq!(stamps.len(), 5);
        for (i, (at, angle)) in stamps.iter().enumerate() {
            assert!(at.x.abs() < 1e-3);
            assert!((at.y - 5.0 * i as f32).abs() < 1e-2);
            assert!((angle - core::f32::consts::FRAC_PI_2).abs() < 1e-3);
        }
    }

    #[test]
    fn non_positive_spacing_stamps_once() {
        let pts = [PointF::new(0.0, 0.0), PointF::new(30.0, 0.0)];
        let mut count = 0;
        walk_stamps(&pts, StampStyle::new(0.5, 0.0), |_, _| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn degenerate_paths_stamp_nothing() {
        let mut count = 0;
        walk_stamps(&[PointF::new(1.0, 1.0)], StampStyle::default(), |_, _| {
            count += 1;
        });
        let nan = [PointF::new(f32::NAN, 0.0), PointF::new(5.0, 5.0)];
        walk_stamps(&nan, StampStyle::default(), |_, _| count += 1);
        assert_eq!(count, 0);
    }
}
