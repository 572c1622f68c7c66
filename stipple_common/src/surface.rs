// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability trait every rasterizer draws through.

use crate::geometry::Color;
use crate::mask::MaskBuffer;

/// A fixed-size, bit-packed drawing target.
///
/// All coordinates are in pixels from the top-left corner. Nothing here ever fails:
/// writes outside the surface are ignored, reads outside it return
/// [`WHITE`](crate::WHITE), and an invalid surface (see [`Surface::is_valid`]) ignores
/// everything.
///
/// Coordinates are `i32` so that rasterizers can step past the `i16` range of
/// [`Point`](crate::Point) without overflowing; such pixels are simply out of bounds.
pub trait Surface {
    /// The width in pixels.
    fn width(&self) -> i16;

    /// The height in pixels.
    fn height(&self) -> i16;

    /// Whether backing storage was allocated.
    ///
    /// Callers should check this once after construction.
    fn is_valid(&self) -> bool;

    /// Read the pixel at `(x, y)`.
    fn get_pixel(&self, x: i32, y: i32) -> Color;

    /// Write the pixel at `(x, y)`, honoring the attached clip mask if there is one.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Write the pixel at `(x, y)` without consulting the clip mask.
    fn set_pixel_direct(&mut self, x: i32, y: i32, color: Color);

    /// Write `color` to `[x_start, x_end)` on row `y`. The end is exclusive.
    fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: Color);

    /// Set every pixel to `color`. Clipping does not apply.
    fn clear(&mut self, color: Color);

    /// The raw packed bytes, for the display transfer layer.
    fn data(&self) -> &[u8];

    /// The size of [`Surface::data`] in bytes.
    fn buffer_size(&self) -> usize {
        self.data().len()
    }

    /// The number of bytes per row, `ceil(width / 8)`.
    fn row_bytes(&self) -> usize;

    /// The clip mask currently attached, if any.
    fn mask(&self) -> Option<&MaskBuffer> {
        None
    }
}
