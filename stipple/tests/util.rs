// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions shared across different tests.

use stipple::{Framebuffer, Surface};

pub(crate) fn framebuffer(width: i16, height: i16) -> Framebuffer<'static> {
    let fb = Framebuffer::new(width, height);
    assert!(fb.is_valid(), "failed to allocate {width}x{height}");
    fb
}

/// Coordinates of every ink pixel, row by row.
pub(crate) fn ink_pixels<S: Surface + ?Sized>(surface: &S) -> Vec<(i32, i32)> {
    let (w, h) = (i32::from(surface.width()), i32::from(surface.height()));
    (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .filter(|&(x, y)| surface.get_pixel(x, y))
        .collect()
}

pub(crate) fn ink_count<S: Surface + ?Sized>(surface: &S) -> usize {
    ink_pixels(surface).len()
}

/// The inclusive bounding box `(min_x, min_y, max_x, max_y)` of the ink, if any.
pub(crate) fn ink_bounds<S: Surface + ?Sized>(surface: &S) -> Option<(i32, i32, i32, i32)> {
    ink_pixels(surface)
        .into_iter()
        .fold(None, |acc, (x, y)| match acc {
            None => Some((x, y, x, y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
        })
}

/// Render the surface as text, `#` for ink, for assertion messages.
pub(crate) fn to_ascii<S: Surface + ?Sized>(surface: &S) -> String {
    let (w, h) = (i32::from(surface.width()), i32::from(surface.height()));
    let mut out = String::new();
    for y in 0..h {
        for x in 0..w {
            out.push(if surface.get_pixel(x, y) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
