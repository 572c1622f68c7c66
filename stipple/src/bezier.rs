// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth curves through a list of vertices.
//!
//! A path is given only by its vertices. [`auto_tangent`] synthesizes a pair of cubic
//! control handles at each vertex, and consecutive vertices with their handles form one
//! cubic segment each. Segments are either flattened into a polyline
//! ([`draw_bezier_curve`]) or walked by arc length for textured stamping
//! ([`brush`](crate::brush)).

use alloc::vec::Vec;
use smallvec::SmallVec;
use stipple_common::math::lerp;
use stipple_common::{Color, Point, PointF, Surface};
#[cfg(not(feature = "std"))]
use stipple_common::kurbo::common::FloatFuncs as _;

use crate::primitives::draw_polyline;

/// The default maximum distance, in pixels, between a flattened polyline and its curve.
pub const DEFAULT_TOLERANCE: f32 = 1.0;

/// The default handle length factor used by [`auto_tangent`].
pub const DEFAULT_SMOOTHNESS: f32 = 0.5;

/// Recursion limit for [`subdivide_bezier`]. Only reached by degenerate input such as a
/// non-positive tolerance.
const MAX_SUBDIVISION_DEPTH: u32 = 16;

/// The two cubic control points synthesized at one vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TangentHandles {
    /// The control point of the segment arriving at the vertex.
    pub handle_in: PointF,
    /// The control point of the segment leaving the vertex.
    pub handle_out: PointF,
}

/// Handles for every vertex of a path, inline for short paths.
pub type TangentList = SmallVec<[TangentHandles; 16]>;

#[inline]
fn lerp_point(a: PointF, b: PointF, t: f32) -> PointF {
    PointF::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Evaluate the cubic bezier `p0, p1, p2, p3` at `t` with De Casteljau's algorithm.
pub fn cubic_bezier(p0: PointF, p1: PointF, p2: PointF, p3: PointF, t: f32) -> PointF {
    let q0 = lerp_point(p0, p1, t);
    let q1 = lerp_point(p1, p2, t);
    let q2 = lerp_point(p2, p3, t);
    let r0 = lerp_point(q0, q1, t);
    let r1 = lerp_point(q1, q2, t);
    lerp_point(r0, r1, t)
}

/// The derivative of the cubic bezier `p0, p1, p2, p3` at `t`.
///
/// This is the quadratic bezier through the derivative control points
/// `3 * (p[i + 1] - p[i])`.
pub fn cubic_bezier_derivative(p0: PointF, p1: PointF, p2: PointF, p3: PointF, t: f32) -> PointF {
    let d0 = (p1 - p0) * 3.0;
    let d1 = (p2 - p1) * 3.0;
    let d2 = (p3 - p2) * 3.0;
    let q0 = lerp_point(d0, d1, t);
    let q1 = lerp_point(d1, d2, t);
    lerp_point(q0, q1, t)
}

/// Synthesize smooth control handles for every vertex.
///
/// The tangent at a vertex points from its previous to its next neighbor (the path ends
/// use themselves as the missing neighbor). Each handle lies along the tangent at
/// `0.5 * smoothness` times the distance to the neighbor on that side, so `smoothness = 0`
/// gives sharp corners and larger values rounder joins. Paths with fewer than two
/// vertices get no handles.
pub fn auto_tangent(points: &[PointF], smoothness: f32) -> TangentList {
    let mut handles = TangentList::new();
    if points.len() < 2 {
        return handles;
    }

    let last = points.len() - 1;
    for (i, &curr) in points.iter().enumerate() {
        let prev = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(last)];

        let tangent = next - prev;
        let len = tangent.length();
        if len < 1e-4 {
            handles.push(TangentHandles {
                handle_in: curr,
                handle_out: curr,
            });
            continue;
        }

        let dir = tangent * (1.0 / len);
        let len_in = (curr - prev).length() * smoothness * 0.5;
        let len_out = (next - curr).length() * smoothness * 0.5;
        handles.push(TangentHandles {
            handle_in: curr - dir * len_in,
            handle_out: curr + dir * len_out,
        });
    }

    handles
}

/// The cubic segments `[p0, c0, c1, p1]` of a path and its handles.
pub(crate) fn segments<'a>(
    points: &'a [PointF],
    handles: &'a [TangentHandles],
) -> impl Iterator<Item = [PointF; 4]> + 'a {
    points
        .windows(2)
        .zip(handles.windows(2))
        .map(|(p, h)| [p[0], h[0].handle_out, h[1].handle_in, p[1]])
}

/// Whether every coordinate is finite. Logs and returns `false` otherwise.
pub(crate) fn check_finite(points: &[PointF]) -> bool {
    if points.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
        return true;
    }

    log::warn!("ignoring curve with non-finite coordinates");
    false
}

/// The largest distance of the control points from the chord `p0 -> p1`.
///
/// For a (nearly) zero-length chord this is the distance from `p0` instead.
pub fn flatness(p0: PointF, c0: PointF, c1: PointF, p1: PointF) -> f32 {
    let chord = p1 - p0;
    let len = chord.length();
    if len < 1e-4 {
        return (c0 - p0).length().max((c1 - p0).length());
    }

    let dist = |c: PointF| ((c.x - p0.x) * chord.y - (c.y - p0.y) * chord.x).abs() / len;
    dist(c0).max(dist(c1))
}

fn flatten_rec(
    [p0, c0, c1, p1]: [PointF; 4],
    tolerance: f32,
    depth: u32,
    emit: &mut impl FnMut(PointF),
) {
    // NaN flatness fails the comparison, so the depth limit also bounds non-finite input.
    if flatness(p0, c0, c1, p1) <= tolerance || depth >= MAX_SUBDIVISION_DEPTH {
        emit(p1);
        return;
    }

    let q0 = lerp_point(p0, c0, 0.5);
    let q1 = lerp_point(c0, c1, 0.5);
    let q2 = lerp_point(c1, p1, 0.5);
    let r0 = lerp_point(q0, q1, 0.5);
    let r1 = lerp_point(q1, q2, 0.5);
    let mid = lerp_point(r0, r1, 0.5);

    flatten_rec([p0, q0, r0, mid], tolerance, depth + 1, emit);
    flatten_rec([mid, r1, q2, p1], tolerance, depth + 1, emit);
}

/// Adaptively flatten one cubic segment, calling `emit` with the end of each line.
///
/// The start point `p0` is not emitted. Each line stays within `tolerance` pixels of the
/// curve.
pub fn flatten_cubic(
    p0: PointF,
    c0: PointF,
    c1: PointF,
    p1: PointF,
    tolerance: f32,
    mut emit: impl FnMut(PointF),
) {
    flatten_rec([p0, c0, c1, p1], tolerance, 0, &mut emit);
}

/// Flatten one cubic segment into `out`, rounded to pixels. The start point is not
/// pushed.
pub fn subdivide_bezier(
    p0: PointF,
    c0: PointF,
    c1: PointF,
    p1: PointF,
    out: &mut Vec<Point>,
    tolerance: f32,
) {
    flatten_cubic(p0, c0, c1, p1, tolerance, |p| out.push(p.to_point()));
}

/// Draw a smooth one pixel curve through `points`.
///
/// Needs at least two points. Curves with non-finite coordinates are ignored.
pub fn draw_bezier_curve<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[PointF],
    smoothness: f32,
    color: Color,
    tolerance: f32,
) {
    if points.len() < 2 || !check_finite(points) {
        return;
    }

    let handles = auto_tangent(points, smoothness);
    let mut polyline = Vec::with_capacity(points.len() * 4);
    polyline.push(points[0].to_point());
    for [p0, c0, c1, p1] in segments(points, &handles) {
        subdivide_bezier(p0, c0, c1, p1, &mut polyline, tolerance);
    }

    draw_polyline(surface, &polyline, color);
}

#[cfg(test)]
mod tests {
    use super::{auto_tangent, cubic_bezier, cubic_bezier_derivative, flatness};
    use stipple_common::PointF;

    fn close(a: PointF, b: PointF) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn endpoints_and_derivative() {
        let [p0, p1, p2, p3] = [
            PointF::new(0.0, 0.0),
            PointF::new(10.0, 30.0),
            PointF::new(40.0, 30.0),
            PointF::new(50.0, 0.0),
        ];
        assert!(close(cubic_bezier(p0, p1, p2, p3, 0.0), p0));
        assert!(close(cubic_bezier(p0, p1, p2, p3, 1.0), p3));
        assert!(close(cubic_bezier(p0, p1, p2, p3, 0.5), PointF::new(25.0, 22.5)));
        assert!(close(cubic_bezier_derivative(p0, p1, p2, p3, 0.0), (p1 - p0) * 3.0));
        assert!(close(cubic_bezier_derivative(p0, p1, p2, p3, 1.0), (p3 - p2) * 3.0));
    }

    #[test]
    fn zero_smoothness_gives_sharp_corners() {
        let pts = [
            PointF::new(0.0, 0.0),
            PointF::new(10.0, 0.0),
            PointF::new(10.0, 10.0),
        ];
        for h in auto_tangent(&pts, 0.0).iter().zip(&pts) {
            assert_eq!(h.0.handle_in, *h.1);
            assert_eq!(h.0.handle_out, *h.1);
        }
    }

    #[test]
    fn handles_follow_neighbors() {
        let pts = [
            PointF::new(0.0, 0.0),
            PointF::new(10.0, 0.0),
            PointF::new(30.0, 0.0),
        ];
        let handles = auto_tangent(&pts, 1.0);
        assert_eq!(handles.len(), 3);
        assert!(close(handles[1].handle_in, PointF::new(5.0, 0.0)));
        assert!(close(handles[1].handle_out, PointF::new(20.0, 0.0)));
        // The first vertex has no previous neighbor.
        assert!(close(handles[0].handle_in, pts[0]));
        assert!(close(handles[0].handle_out, PointF::new(5.0, 0.0)));
        assert!(auto_tangent(&pts[..1], 1.0).is_empty());
    }

    #[test]
    fn coincident_neighbors_collapse_handles() {
        let pts = [PointF::new(5.0, 5.0), PointF::new(9.0, 1.0), PointF::new(5.0, 5.0)];
        let handles = auto_tangent(&pts, 0.5);
        assert_eq!(handles[1].handle_in, pts[1]);
        assert_eq!(handles[1].handle_out, pts[1]);
    }

    #[test]
    fn flatness_of_degenerate_chord() {
        let p = PointF::new(1.0, 1.0);
        assert_eq!(flatness(p, PointF::new(4.0, 5.0), p, p), 5.0);
        let f = flatness(
            PointF::new(0.0, 0.0),
            PointF::new(3.0, 2.0),
            PointF::new(6.0, -4.0),
            PointF::new(10.0, 0.0),
        );
        assert_eq!(f, 4.0);
    }
}
