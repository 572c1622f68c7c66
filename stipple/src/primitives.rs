// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterization of lines, polygons, rectangles and circles.
//!
//! Everything is integer arithmetic except the perpendicular of a thick line. Coordinates
//! are widened to `i32` internally, so shapes that poke past the `i16` range are clipped
//! rather than wrapped.

use smallvec::SmallVec;
use stipple_common::{Color, Point, Rect, Surface};
#[cfg(not(feature = "std"))]
use stipple_common::kurbo::common::FloatFuncs as _;

/// Scanline crossings of a polygon, inline for up to 16 edges.
pub type Crossings = SmallVec<[i32; 16]>;

/// Bresenham from `(x0, y0)` to `(x1, y1)`, both endpoints included.
pub(crate) fn line<S: Surface + ?Sized>(
    surface: &mut S,
    mut x0: i32,
    mut y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        surface.set_pixel(x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw a one pixel wide line from `p0` to `p1`, both endpoints included.
pub fn draw_line<S: Surface + ?Sized>(surface: &mut S, p0: Point, p1: Point, color: Color) {
    line(
        surface,
        p0.x.into(),
        p0.y.into(),
        p1.x.into(),
        p1.y.into(),
        color,
    );
}

/// Draw connected segments through `points`, without closing the path.
pub fn draw_polyline<S: Surface + ?Sized>(surface: &mut S, points: &[Point], color: Color) {
    for pair in points.windows(2) {
        draw_line(surface, pair[0], pair[1], color);
    }
}

/// Draw a line `width` pixels wide.
///
/// The line is built from `width` parallel Bresenham lines, one pixel apart along the
/// perpendicular and centered on the ideal line. A width of one or less is a plain
/// [`draw_line`]; a zero-length line becomes a disc of radius `width / 2`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "offsets are bounded by the stroke width"
)]
pub fn draw_thick_line<S: Surface + ?Sized>(
    surface: &mut S,
    p0: Point,
    p1: Point,
    width: i16,
    color: Color,
) {
    if width <= 1 {
        draw_line(surface, p0, p1, color);
        return;
    }

    let dx = f32::from(p1.x) - f32::from(p0.x);
    let dy = f32::from(p1.y) - f32::from(p0.y);
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-4 {
        fill_circle(surface, p0, width / 2, color);
        return;
    }

    let (px, py) = (-dy / len, dx / len);
    let half = f32::from(width - 1) / 2.0;
    for k in 0..width {
        let offset = f32::from(k) - half;
        let ox = (offset * px).round() as i32;
        let oy = (offset * py).round() as i32;
        line(
            surface,
            i32::from(p0.x) + ox,
            i32::from(p0.y) + oy,
            i32::from(p1.x) + ox,
            i32::from(p1.y) + oy,
            color,
        );
    }
}

/// Draw the closed outline through `points`. Needs at least two points.
pub fn draw_polygon<S: Surface + ?Sized>(surface: &mut S, points: &[Point], color: Color) {
    if points.len() < 2 {
        return;
    }

    draw_polyline(surface, points, color);
    if let (Some(last), Some(first)) = (points.last(), points.first()) {
        draw_line(surface, *last, *first, color);
    }
}

/// Collect where scanline `y` crosses the edges of the closed polygon, sorted.
///
/// Horizontal edges are skipped and every other edge covers the half-open row range
/// `[y_top, y_bottom)`, so a vertex shared by two edges is counted exactly once when the
/// polygon passes through it and twice (or not at all) at a peak. This keeps the count
/// even and avoids seams between polygons that share an edge.
pub fn scanline_crossings(points: &[Point], y: i32, out: &mut Crossings) {
    out.clear();
    let Some(&last) = points.last() else {
        return;
    };

    let mut prev = last;
    for &curr in points {
        let (a, b) = if prev.y < curr.y {
            (prev, curr)
        } else {
            (curr, prev)
        };
        prev = curr;

        let (x0, y0, x1, y1) = (
            i32::from(a.x),
            i32::from(a.y),
            i32::from(b.x),
            i32::from(b.y),
        );
        if y0 == y1 || y < y0 || y >= y1 {
            continue;
        }

        // Edges may span the whole `i16` range, which overflows the product in `i32`.
        let dx = i64::from(y - y0) * i64::from(x1 - x0) / i64::from(y1 - y0);
        let x = i64::from(x0) + dx;
        out.push(i32::try_from(x).unwrap_or(if x < 0 { i32::MIN } else { i32::MAX }));
    }

    out.sort_unstable();
}

/// Call `span(y, x_start, x_end)` for every even-odd interior span of the polygon that
/// lies on a row of a surface `height` rows tall.
pub(crate) fn polygon_spans(points: &[Point], height: i32, mut span: impl FnMut(i32, i32, i32)) {
    if points.len() < 3 {
        return;
    }

    let (min_y, max_y) = points.iter().fold((i32::MAX, i32::MIN), |(lo, hi), p| {
        (lo.min(p.y.into()), hi.max(p.y.into()))
    });

    let mut crossings = Crossings::new();
    for y in min_y.max(0)..=max_y.min(height - 1) {
        scanline_crossings(points, y, &mut crossings);
        for pair in crossings.chunks_exact(2) {
            span(y, pair[0], pair[1]);
        }
    }
}

/// Fill the polygon through `points` with the even-odd rule. Needs at least three points.
pub fn fill_polygon<S: Surface + ?Sized>(surface: &mut S, points: &[Point], color: Color) {
    let height = i32::from(surface.height());
    polygon_spans(points, height, |y, x_start, x_end| {
        surface.fill_span(y, x_start, x_end, color);
    });
}

/// Draw the one pixel outline of `rect`. The right and bottom edges are inside the
/// rectangle, at `right() - 1` and `bottom() - 1`.
pub fn draw_rect<S: Surface + ?Sized>(surface: &mut S, rect: Rect, color: Color) {
    let (x, y) = (i32::from(rect.x), i32::from(rect.y));
    let (right, bottom) = (x + i32::from(rect.w), y + i32::from(rect.h));

    for i in x..right {
        surface.set_pixel(i, y, color);
        surface.set_pixel(i, bottom - 1, color);
    }
    for j in y..bottom {
        surface.set_pixel(x, j, color);
        surface.set_pixel(right - 1, j, color);
    }
}

/// Rows and columns of `rect` clamped to a `width` by `height` surface: `(x0, x1, y0..y1)`.
pub(crate) fn clamp_rect(rect: Rect, width: i32, height: i32) -> (i32, i32, core::ops::Range<i32>) {
    let x0 = i32::from(rect.x).max(0);
    let y0 = i32::from(rect.y).max(0);
    let x1 = (i32::from(rect.x) + i32::from(rect.w)).min(width);
    let y1 = (i32::from(rect.y) + i32::from(rect.h)).min(height);
    (x0, x1, y0..y1)
}

/// Fill `rect`, clamped to the surface.
pub fn fill_rect<S: Surface + ?Sized>(surface: &mut S, rect: Rect, color: Color) {
    let (x0, x1, rows) = clamp_rect(
        rect,
        surface.width().into(),
        surface.height().into(),
    );
    for y in rows {
        surface.fill_span(y, x0, x1, color);
    }
}

/// Step the midpoint circle algorithm, calling `octant(x, y)` for each step with
/// `0 <= x <= y`.
fn midpoint_circle(r: i32, mut octant: impl FnMut(i32, i32)) {
    let (mut x, mut y) = (0, r);
    let mut d = 1 - r;
    while x <= y {
        octant(x, y);
        if d <= 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }
}

/// Draw the outline of a circle. Nothing is drawn for `r <= 0`.
pub fn draw_circle<S: Surface + ?Sized>(surface: &mut S, center: Point, r: i16, color: Color) {
    if r <= 0 {
        return;
    }

    let (cx, cy) = (i32::from(center.x), i32::from(center.y));
    midpoint_circle(r.into(), |x, y| {
        for (dx, dy) in [
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
        ] {
            surface.set_pixel(cx + dx, cy + dy, color);
        }
    });
}

/// Call `span(y, x_start, x_end)` for the four horizontal spans of each midpoint step of a
/// filled circle. Spans overlap; the union is the disc.
pub(crate) fn circle_spans(center: Point, r: i16, mut span: impl FnMut(i32, i32, i32)) {
    if r <= 0 {
        return;
    }

    let (cx, cy) = (i32::from(center.x), i32::from(center.y));
    midpoint_circle(r.into(), |x, y| {
        span(cy + y, cx - x, cx + x + 1);
        span(cy - y, cx - x, cx + x + 1);
        span(cy + x, cx - y, cx + y + 1);
        span(cy - x, cx - y, cx + y + 1);
    });
}

/// Fill a disc. Nothing is drawn for `r <= 0`.
pub fn fill_circle<S: Surface + ?Sized>(surface: &mut S, center: Point, r: i16, color: Color) {
    circle_spans(center, r, |y, x_start, x_end| {
        surface.fill_span(y, x_start, x_end, color);
    });
}
