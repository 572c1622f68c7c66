// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip masks.

use crate::bitplane::BitPlane;
use crate::error::BufferError;
use crate::geometry::{Color, WHITE};
use crate::surface::Surface;

/// A one-bit clip mask.
///
/// Uses the same layout as a [`Framebuffer`](crate::Framebuffer) but a different reading of
/// it: a set bit ([`BLACK`](crate::BLACK)) allows drawing and a clear bit
/// ([`WHITE`](crate::WHITE)) blocks it. Anything outside the mask is blocked.
///
/// A mask is itself a [`Surface`], so the same primitives and pattern fills that draw on
/// a framebuffer can shape a mask. Masks cannot be masked in turn.
#[derive(Debug, Clone)]
pub struct MaskBuffer {
    plane: BitPlane,
}

impl MaskBuffer {
    /// Allocate a mask that blocks everything, reporting why it could not be created.
    pub fn try_new(width: i16, height: i16) -> Result<Self, BufferError> {
        let plane = BitPlane::try_new(width, height)?;
        log::debug!(
            "allocated {width}x{height} mask buffer ({} bytes)",
            plane.data().len()
        );

        Ok(Self { plane })
    }

    /// Allocate a mask that blocks everything.
    ///
    /// On failure the error is logged and an invalid mask, which blocks everything and
    /// ignores writes, is returned.
    pub fn new(width: i16, height: i16) -> Self {
        Self::try_new(width, height).unwrap_or_else(|err| {
            log::error!("mask buffer unavailable: {err}");
            Self {
                plane: BitPlane::invalid(),
            }
        })
    }

    /// Whether drawing is allowed at `(x, y)`.
    #[inline]
    pub fn allows(&self, x: i32, y: i32) -> bool {
        self.plane.get(x, y)
    }

    /// Swap allowed and blocked everywhere, turning a shape into a cutout.
    pub fn invert(&mut self) {
        self.plane.invert();
    }
}

impl Surface for MaskBuffer {
    fn width(&self) -> i16 {
        i16::try_from(self.plane.width()).unwrap_or(i16::MAX)
    }

    fn height(&self) -> i16 {
        i16::try_from(self.plane.height()).unwrap_or(i16::MAX)
    }

    fn is_valid(&self) -> bool {
        self.plane.is_valid()
    }

    fn get_pixel(&self, x: i32, y: i32) -> Color {
        if self.plane.is_valid() {
            self.plane.get(x, y)
        } else {
            WHITE
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.plane.set(x, y, color);
    }

    fn set_pixel_direct(&mut self, x: i32, y: i32, color: Color) {
        self.plane.set(x, y, color);
    }

    fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: Color) {
        self.plane.fill_span(y, x_start, x_end, color);
    }

    fn clear(&mut self, color: Color) {
        self.plane.fill(color);
    }

    fn data(&self) -> &[u8] {
        self.plane.data()
    }

    fn row_bytes(&self) -> usize {
        self.plane.row_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::MaskBuffer;
    use crate::geometry::{BLACK, WHITE};
    use crate::surface::Surface;

    #[test]
    fn starts_blocked() {
        let mask = MaskBuffer::new(9, 3);
        assert!(mask.is_valid());
        assert!(mask.mask().is_none());
        for y in 0..3 {
            for x in 0..9 {
                assert!(!mask.allows(x, y));
            }
        }
    }

    #[test]
    fn outside_is_blocked() {
        let mut mask = MaskBuffer::new(4, 4);
        mask.clear(BLACK);
        assert!(mask.allows(3, 3));
        assert!(!mask.allows(4, 0));
        assert!(!mask.allows(0, -1));
        assert_eq!(mask.get_pixel(-5, 2), WHITE);
    }

    #[test]
    fn invert_makes_cutout() {
        let mut mask = MaskBuffer::new(16, 2);
        mask.fill_span(1, 3, 6, BLACK);
        mask.invert();
        assert!(mask.allows(0, 0));
        assert!(mask.allows(2, 1));
        assert!(!mask.allows(3, 1));
        assert!(!mask.allows(5, 1));
        assert!(mask.allows(6, 1));
    }
}
