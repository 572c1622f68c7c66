// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The packed one-bit-per-pixel storage shared by every buffer kind.

use crate::error::BufferError;
use alloc::vec::Vec;

/// A row-major, MSB-first plane of bits.
///
/// Bit 7 of each byte is the leftmost pixel of its group of eight. Rows are padded to a
/// whole number of bytes; the padding bits are only ever touched by [`BitPlane::fill`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPlane {
    width: u16,
    height: u16,
    row_bytes: usize,
    data: Vec<u8>,
}

impl BitPlane {
    /// Allocate a plane of the given size with every bit cleared.
    pub fn try_new(width: i16, height: i16) -> Result<Self, BufferError> {
        if width <= 0 || height <= 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }

        let width = width.unsigned_abs();
        let height = height.unsigned_abs();
        let row_bytes = usize::from(width).div_ceil(8);
        let bytes = row_bytes * usize::from(height);

        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| BufferError::AllocationFailed { bytes })?;
        data.resize(bytes, 0);

        Ok(Self {
            width,
            height,
            row_bytes,
            data,
        })
    }

    /// A plane with no storage. Every write is ignored and every read is clear.
    pub const fn invalid() -> Self {
        Self {
            width: 0,
            height: 0,
            row_bytes: 0,
            data: Vec::new(),
        }
    }

    /// Whether the plane has storage.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.data.is_empty()
    }

    /// The width in pixels.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// The height in pixels.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The number of bytes per row, `ceil(width / 8)`.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    /// The raw packed bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The raw packed bytes, mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Convert to a byte index and bit mask, or `None` if the pixel is out of bounds.
    #[inline(always)]
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= usize::from(self.width) || y >= usize::from(self.height) {
            return None;
        }

        Some((y * self.row_bytes + (x >> 3), 0x80 >> (x & 7)))
    }

    /// Read one bit. Out of bounds reads are clear.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .is_some_and(|(idx, mask)| self.data[idx] & mask != 0)
    }

    /// Write one bit. Out of bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: bool) {
        if let Some((idx, mask)) = self.locate(x, y) {
            apply(&mut self.data[idx], mask, value);
        }
    }

    /// Set every bit, including row padding, to `value`.
    pub fn fill(&mut self, value: bool) {
        self.data.fill(if value { 0xFF } else { 0x00 });
    }

    /// Write `value` to the half-open run `[x_start, x_end)` of row `y`.
    ///
    /// The run is clamped to the plane. Whole bytes in the interior are stored directly and
    /// only the two boundary bytes are merged.
    pub fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, value: bool) {
        let Ok(y) = usize::try_from(y) else {
            return;
        };
        if y >= usize::from(self.height) {
            return;
        }

        let x_start = x_start.max(0);
        let x_end = x_end.min(i32::from(self.width));
        if x_start >= x_end {
            return;
        }

        // Both are in `0..width` now.
        let first = x_start.unsigned_abs() as usize;
        let last = (x_end - 1).unsigned_abs() as usize;

        let row = y * self.row_bytes;
        let start_byte = row + (first >> 3);
        let end_byte = row + (last >> 3);
        let start_mask = 0xFF_u8 >> (first & 7);
        let end_mask = 0xFF_u8 << (7 - (last & 7));

        if start_byte == end_byte {
            apply(&mut self.data[start_byte], start_mask & end_mask, value);
            return;
        }

        apply(&mut self.data[start_byte], start_mask, value);
        self.data[start_byte + 1..end_byte].fill(if value { 0xFF } else { 0x00 });
        apply(&mut self.data[end_byte], end_mask, value);
    }

    /// Flip every bit.
    pub fn invert(&mut self) {
        for byte in &mut self.data {
            *byte = !*byte;
        }
    }

    /// The bytes of row `y`, or `None` if out of range.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let start = y.checked_mul(self.row_bytes)?;
        self.data.get(start..start + self.row_bytes)
    }
}

#[inline(always)]
fn apply(byte: &mut u8, mask: u8, value: bool) {
    if value {
        *byte |= mask;
    } else {
        *byte &= !mask;
    }
}

#[cfg(test)]
mod tests {
    use super::BitPlane;
    use crate::error::BufferError;

    #[test]
    fn layout_is_msb_first() {
        let mut plane = BitPlane::try_new(20, 3).unwrap();
        assert_eq!(plane.row_bytes(), 3);
        assert_eq!(plane.data().len(), 9);

        plane.set(0, 0, true);
        plane.set(9, 1, true);
        plane.set(19, 2, true);
        assert_eq!(plane.data()[0], 0b1000_0000);
        assert_eq!(plane.data()[4], 0b0100_0000);
        assert_eq!(plane.data()[8], 0b0001_0000);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut plane = BitPlane::try_new(8, 8).unwrap();
        plane.set(-1, 0, true);
        plane.set(8, 0, true);
        plane.set(0, 8, true);
        plane.set(i32::MAX, i32::MIN, true);
        assert!(plane.data().iter().all(|b| *b == 0));
        assert!(!plane.get(-1, -1));
        assert!(!plane.get(100, 0));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            BitPlane::try_new(0, 10),
            Err(BufferError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(BitPlane::try_new(10, -1).is_err());
    }

    #[test]
    fn span_matches_per_pixel_writes() {
        const W: i32 = 37;
        for value in [true, false] {
            for start in -3..W + 2 {
                for end in start..W + 3 {
                    let mut fast = BitPlane::try_new(W as i16, 2).unwrap();
                    let mut slow = BitPlane::try_new(W as i16, 2).unwrap();
                    fast.fill(!value);
                    slow.fill(!value);

                    fast.fill_span(1, start, end, value);
                    for x in start..end {
                        slow.set(x, 1, value);
                    }

                    assert_eq!(fast, slow, "span {start}..{end} value {value}");
                }
            }
        }
    }

    #[test]
    fn span_on_invalid_row_is_ignored() {
        let mut plane = BitPlane::try_new(16, 2).unwrap();
        plane.fill_span(-1, 0, 16, true);
        plane.fill_span(2, 0, 16, true);
        assert!(plane.data().iter().all(|b| *b == 0));
    }

    #[test]
    fn invert_flips_every_bit() {
        let mut plane = BitPlane::try_new(8, 1).unwrap();
        plane.set(3, 0, true);
        plane.invert();
        assert_eq!(plane.data(), &[0b1110_1111]);
    }

    #[test]
    fn invalid_plane_reads_clear() {
        let mut plane = BitPlane::invalid();
        assert!(!plane.is_valid());
        plane.set(0, 0, true);
        plane.fill_span(0, 0, 10, true);
        plane.fill(true);
        assert!(!plane.get(0, 0));
        assert!(plane.data().is_empty());
    }
}
