// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Finding the rows that changed between two frames.
//!
//! Display transfers are slow, so a driver compares the frame it is about to send with the
//! one it sent last and only pushes the row ranges that differ.

use crate::surface::Surface;
use alloc::vec;
use alloc::vec::Vec;

/// Rows of unchanged content that may separate two dirty runs before they are reported as
/// separate regions.
pub const DEFAULT_MIN_GAP: i16 = 8;

/// A half-open range of rows, `[y_start, y_end)`, that differs between two frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirtyRegion {
    /// The first dirty row.
    pub y_start: i16,
    /// One past the last row of the region.
    pub y_end: i16,
}

impl DirtyRegion {
    /// The number of rows in the region.
    pub fn rows(&self) -> i16 {
        self.y_end - self.y_start
    }
}

/// Compares packed frames of one fixed layout, row by row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirtyTracker {
    width: i16,
    height: i16,
    row_bytes: usize,
}

impl DirtyTracker {
    /// A tracker for frames of `width` by `height` pixels.
    ///
    /// Non-positive dimensions give a tracker with no rows.
    pub fn new(width: i16, height: i16) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            row_bytes: width.unsigned_abs().div_ceil(8).into(),
        }
    }

    /// A tracker matching the layout of `surface`.
    pub fn for_surface<S: Surface + ?Sized>(surface: &S) -> Self {
        Self::new(surface.width(), surface.height())
    }

    /// The frame width this tracker was built for.
    pub fn width(&self) -> i16 {
        self.width
    }

    /// The frame height this tracker was built for.
    pub fn height(&self) -> i16 {
        self.height
    }

    fn frame_len(&self) -> usize {
        self.row_bytes * usize::from(self.height.unsigned_abs())
    }

    fn row_dirty(&self, current: &[u8], previous: &[u8], y: i16) -> bool {
        let start = usize::from(y.unsigned_abs()) * self.row_bytes;
        let range = start..start + self.row_bytes;
        current[range.clone()] != previous[range]
    }

    /// Whether the two frames are byte-identical.
    pub fn is_clean(&self, current: &[u8], previous: &[u8]) -> bool {
        let len = self.frame_len();
        match (current.get(..len), previous.get(..len)) {
            (Some(current), Some(previous)) => current == previous,
            _ => false,
        }
    }

    /// The row ranges that differ between `current` and `previous`.
    ///
    /// Dirty runs separated by fewer than `min_gap` clean rows are merged into one region,
    /// so a larger gap never yields more regions. Rows outside every region are identical
    /// in both frames. Frames shorter than this tracker's layout are reported as entirely
    /// dirty.
    pub fn compute_dirty_regions(
        &self,
        current: &[u8],
        previous: &[u8],
        min_gap: i16,
    ) -> Vec<DirtyRegion> {
        let len = self.frame_len();
        if current.len() < len || previous.len() < len {
            log::warn!(
                "dirty tracker expected {len} bytes, got {} and {}; treating frame as dirty",
                current.len(),
                previous.len()
            );
            return if self.height > 0 {
                vec![DirtyRegion {
                    y_start: 0,
                    y_end: self.height,
                }]
            } else {
                Vec::new()
            };
        }

        let mut regions = Vec::new();
        let mut open: Option<i16> = None;

        for y in 0..self.height {
            let dirty = self.row_dirty(current, previous, y);
            match open {
                None if dirty => open = Some(y),
                Some(y_start) if !dirty => {
                    let look_end = y.saturating_add(min_gap).min(self.height);
                    let merge = (y..look_end).any(|ahead| self.row_dirty(current, previous, ahead));
                    if !merge {
                        regions.push(DirtyRegion { y_start, y_end: y });
                        open = None;
                    }
                }
                _ => {}
            }
        }

        if let Some(y_start) = open {
            regions.push(DirtyRegion {
                y_start,
                y_end: self.height,
            });
        }

        regions
    }

    /// [`DirtyTracker::compute_dirty_regions`] for two surfaces, with [`DEFAULT_MIN_GAP`].
    pub fn diff<A, B>(&self, current: &A, previous: &B) -> Vec<DirtyRegion>
    where
        A: Surface + ?Sized,
        B: Surface + ?Sized,
    {
        self.compute_dirty_regions(current.data(), previous.data(), DEFAULT_MIN_GAP)
    }
}
