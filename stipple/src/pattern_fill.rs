// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dithered fills.
//!
//! These use exactly the geometry of the solid fills in [`primitives`](crate::primitives)
//! but only put ink where the [`Pattern`] does; the other pixels are left untouched, so a
//! pattern can be layered over existing content. The pattern is anchored at the surface
//! origin, never at the shape.

use crate::primitives::{circle_spans, clamp_rect, polygon_spans};
use stipple_common::{BLACK, Pattern, Point, Rect, Surface};

/// Apply `pattern` to `[x_start, x_end)` on row `y`.
pub fn fill_span_pattern<S: Surface + ?Sized>(
    surface: &mut S,
    y: i32,
    x_start: i32,
    x_end: i32,
    pattern: Pattern,
) {
    match pattern {
        Pattern::SolidWhite => {}
        Pattern::SolidBlack => surface.fill_span(y, x_start, x_end, BLACK),
        _ => {
            let x_start = x_start.max(0);
            let x_end = x_end.min(surface.width().into());
            for x in x_start..x_end {
                if pattern.test(x, y) {
                    surface.set_pixel(x, y, BLACK);
                }
            }
        }
    }
}

/// [`fill_polygon`](crate::primitives::fill_polygon) with a pattern.
pub fn fill_polygon_pattern<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    pattern: Pattern,
) {
    if pattern == Pattern::SolidWhite {
        return;
    }

    let height = surface.height().into();
    polygon_spans(points, height, |y, x_start, x_end| {
        fill_span_pattern(surface, y, x_start, x_end, pattern);
    });
}

/// [`fill_rect`](crate::primitives::fill_rect) with a pattern.
pub fn fill_rect_pattern<S: Surface + ?Sized>(surface: &mut S, rect: Rect, pattern: Pattern) {
    if pattern == Pattern::SolidWhite {
        return;
    }

    let (x0, x1, rows) = clamp_rect(rect, surface.width().into(), surface.height().into());
    for y in rows {
        fill_span_pattern(surface, y, x0, x1, pattern);
    }
}

/// [`fill_circle`](crate::primitives::fill_circle) with a pattern.
pub fn fill_circle_pattern<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    r: i16,
    pattern: Pattern,
) {
    if pattern == Pattern::SolidWhite {
        return;
    }

    circle_spans(center, r, |y, x_start, x_end| {
        fill_span_pattern(surface, y, x_start, x_end, pattern);
    });
}
