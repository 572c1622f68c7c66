// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::util::{framebuffer, ink_count, ink_pixels};
use stipple::pattern_fill::{
    fill_circle_pattern, fill_polygon_pattern, fill_rect_pattern, fill_span_pattern,
};
use stipple::primitives::{fill_circle, fill_polygon, fill_rect};
use stipple::{BLACK, Pattern, Point, Rect, Surface};

#[test]
fn adjacent_rects_tile_seamlessly() {
    for pattern in Pattern::ALL {
        let mut split = framebuffer(64, 32);
        fill_rect_pattern(&mut split, Rect::new(3, 5, 13, 20), pattern);
        fill_rect_pattern(&mut split, Rect::new(16, 5, 29, 20), pattern);

        let mut whole = framebuffer(64, 32);
        fill_rect_pattern(&mut whole, Rect::new(3, 5, 42, 20), pattern);

        assert_eq!(split.data(), whole.data(), "{pattern:?}");
    }
}

#[test]
fn coverage_of_an_aligned_block() {
    let expected = [
        (Pattern::SolidBlack, 256),
        (Pattern::Dense, 192),
        (Pattern::Medium, 128),
        (Pattern::Sparse, 64),
        (Pattern::SolidWhite, 0),
        (Pattern::DenseCrosshatch, 160),
    ];
    for (pattern, count) in expected {
        let mut fb = framebuffer(32, 32);
        fill_rect_pattern(&mut fb, Rect::new(8, 8, 16, 16), pattern);
        assert_eq!(ink_count(&fb), count, "{pattern:?}");
    }
}

#[test]
fn patterns_only_add_ink() {
    for pattern in Pattern::ALL {
        let mut fb = framebuffer(24, 24);
        fill_rect(&mut fb, Rect::new(0, 0, 24, 24), BLACK);
        fill_rect_pattern(&mut fb, Rect::new(4, 4, 16, 16), pattern);
        assert_eq!(ink_count(&fb), 24 * 24, "{pattern:?}");
    }
}

#[test]
fn pattern_is_anchored_at_the_origin() {
    let mut fb = framebuffer(40, 40);
    fill_rect_pattern(&mut fb, Rect::new(5, 7, 30, 30), Pattern::Sparse);
    for (x, y) in ink_pixels(&fb) {
        assert!(Pattern::Sparse.test(x, y));
    }
}

#[test]
fn solid_patterns_match_solid_fills() {
    let shape = [
        Point::new(5, 5),
        Point::new(40, 12),
        Point::new(30, 38),
        Point::new(8, 30),
    ];
    let mut solid = framebuffer(48, 48);
    let mut patterned = framebuffer(48, 48);
    fill_polygon(&mut solid, &shape, BLACK);
    fill_polygon_pattern(&mut patterned, &shape, Pattern::SolidBlack);
    assert_eq!(solid.data(), patterned.data());

    let mut solid = framebuffer(48, 48);
    let mut patterned = framebuffer(48, 48);
    fill_circle(&mut solid, Point::new(24, 24), 17, BLACK);
    fill_circle_pattern(&mut patterned, Point::new(24, 24), 17, Pattern::SolidBlack);
    assert_eq!(solid.data(), patterned.data());
}

#[test]
fn dithered_shapes_stay_inside_their_solid_versions() {
    let mut disc = framebuffer(48, 48);
    fill_circle(&mut disc, Point::new(20, 22), 15, BLACK);
    for pattern in [Pattern::Dense, Pattern::Medium, Pattern::DenseCrosshatch] {
        let mut fb = framebuffer(48, 48);
        fill_circle_pattern(&mut fb, Point::new(20, 22), 15, pattern);
        let pixels = ink_pixels(&fb);
        assert!(!pixels.is_empty());
        for (x, y) in pixels {
            assert!(disc.get_pixel(x, y), "{pattern:?} leaked at ({x}, {y})");
        }
    }
}

#[test]
fn span_is_clamped_to_the_surface() {
    let mut fb = framebuffer(16, 4);
    fill_span_pattern(&mut fb, 1, -40, 400, Pattern::Medium);
    fill_span_pattern(&mut fb, 9, 0, 16, Pattern::Medium);
    assert_eq!(ink_count(&fb), 8);
}
