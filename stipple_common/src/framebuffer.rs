// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The main drawing target.

use crate::bitplane::BitPlane;
use crate::error::BufferError;
use crate::geometry::{Color, WHITE};
use crate::mask::MaskBuffer;
use crate::surface::Surface;

/// A one-bit framebuffer of fixed size.
///
/// A fresh framebuffer is cleared to [`WHITE`]. A [`MaskBuffer`] can be attached with
/// [`Framebuffer::set_mask`]; while it is attached, pixel writes only land where the mask
/// allows drawing. The mask is borrowed, so it cannot be dropped or modified while
/// attached.
#[derive(Debug, Clone)]
pub struct Framebuffer<'m> {
    plane: BitPlane,
    mask: Option<&'m MaskBuffer>,
}

impl<'m> Framebuffer<'m> {
    /// Allocate a framebuffer, reporting why it could not be created.
    pub fn try_new(width: i16, height: i16) -> Result<Self, BufferError> {
        let mut plane = BitPlane::try_new(width, height)?;
        plane.fill(WHITE);
        log::debug!(
            "allocated {width}x{height} framebuffer ({} bytes)",
            plane.data().len()
        );

        Ok(Self { plane, mask: None })
    }

    /// Allocate a framebuffer.
    ///
    /// On failure the error is logged and an invalid framebuffer is returned; check
    /// [`Surface::is_valid`] before use.
    pub fn new(width: i16, height: i16) -> Self {
        Self::try_new(width, height).unwrap_or_else(|err| {
            log::error!("framebuffer unavailable: {err}");
            Self {
                plane: BitPlane::invalid(),
                mask: None,
            }
        })
    }

    /// Attach a clip mask, or detach it with `None`.
    pub fn set_mask(&mut self, mask: Option<&'m MaskBuffer>) {
        self.mask = mask;
    }

    /// The raw packed bytes, mutably.
    ///
    /// The layout is the one described in the [crate docs](crate#pixel-layout).
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.plane.data_mut()
    }

    fn allowed(&self, x: i32, y: i32) -> bool {
        self.mask.is_none_or(|mask| mask.allows(x, y))
    }
}

impl Surface for Framebuffer<'_> {
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
        self.plane.get(x, y)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.allowed(x, y) {
            self.plane.set(x, y, color);
        }
    }

    fn set_pixel_direct(&mut self, x: i32, y: i32, color: Color) {
        self.plane.set(x, y, color);
    }

    fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: Color) {
        if self.mask.is_none() {
            self.plane.fill_span(y, x_start, x_end, color);
            return;
        }

        let x_start = x_start.max(0);
        let x_end = x_end.min(i32::from(self.width()));
        for x in x_start..x_end {
            self.set_pixel(x, y, color);
        }
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

    fn mask(&self) -> Option<&MaskBuffer> {
        self.mask
    }
}
