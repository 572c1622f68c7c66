// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::util::{framebuffer, ink_bounds, ink_count, ink_pixels};
use stipple::font::{
    render_char, render_multiline, render_string, render_string_centered,
    render_string_centered_with_halo, render_string_right, string_width,
};
use stipple::{BLACK, Point, Surface, TextAlign, TextStyle, WHITE};

const STYLE: TextStyle = TextStyle::new(20, 30);

#[test]
fn glyph_width_scenario() {
    assert_eq!(string_width("1:2", 20, 4), 20 + 4 + 10 + 4 + 20);
    assert_eq!(string_width("1:2", 20, 4), 58);
}

#[test]
fn glyph_fills_its_cell() {
    let mut fb = framebuffer(64, 64);
    render_char(&mut fb, '8', Point::new(10, 10), 20, 30, 1, BLACK);
    // `8` spans 10..=90 of the 100 unit box in both directions.
    assert_eq!(ink_bounds(&fb), Some((12, 13, 28, 37)));
}

#[test]
fn unknown_characters_leave_a_gap() {
    let mut with_unknown = framebuffer(128, 48);
    render_string(&mut with_unknown, "1?1", 4, 4, STYLE);

    let mut by_hand = framebuffer(128, 48);
    render_string(&mut by_hand, "1", 4, 4, STYLE);
    render_string(&mut by_hand, "1", 4 + 2 * (20 + 4), 4, STYLE);

    assert_eq!(with_unknown.data(), by_hand.data());
    assert!(ink_count(&with_unknown) > 0);
}

#[test]
fn space_advances_half_a_cell() {
    let mut spaced = framebuffer(128, 48);
    render_string(&mut spaced, "7 7", 0, 0, STYLE);
    let mut by_hand = framebuffer(128, 48);
    render_string(&mut by_hand, "7", 0, 0, STYLE);
    render_string(&mut by_hand, "7", 20 + 4 + 10 + 4, 0, STYLE);
    assert_eq!(spaced.data(), by_hand.data());
}

#[test]
fn alignment_offsets_by_measured_width() {
    let text = "Hi 42%";
    let width = string_width(text, STYLE.char_width, STYLE.spacing) as i16;

    let mut centered = framebuffer(200, 48);
    render_string_centered(&mut centered, text, 100, 5, STYLE);
    let mut left = framebuffer(200, 48);
    render_string(&mut left, text, 100 - width / 2, 5, STYLE);
    assert_eq!(centered.data(), left.data());

    let mut right = framebuffer(200, 48);
    render_string_right(&mut right, text, 180, 5, STYLE);
    let mut left = framebuffer(200, 48);
    render_string(&mut left, text, 180 - width, 5, STYLE);
    assert_eq!(right.data(), left.data());
}

#[test]
fn multiline_stacks_lines() {
    let mut stacked = framebuffer(128, 128);
    render_multiline(
        &mut stacked,
        &["12", "3"],
        64,
        2,
        8,
        TextAlign::Center,
        STYLE,
    );

    let mut by_hand = framebuffer(128, 128);
    render_string_centered(&mut by_hand, "12", 64, 2, STYLE);
    render_string_centered(&mut by_hand, "3", 64, 2 + 30 + 8, STYLE);
    assert_eq!(stacked.data(), by_hand.data());
}

#[test]
fn descenders_drop_below_the_cell() {
    let mut fb = framebuffer(64, 64);
    render_char(&mut fb, 'g', Point::new(0, 0), 20, 40, 1, BLACK);
    let (_, _, _, bottom) = ink_bounds(&fb).unwrap();
    assert_eq!(bottom, 46);
}

#[test]
fn halo_keeps_text_readable() {
    let style = STYLE.with_color(WHITE).with_stroke_width(1);

    let mut haloed = framebuffer(128, 48);
    render_string_centered_with_halo(&mut haloed, "42", 64, 8, style, 2, BLACK);

    let mut glyphs = framebuffer(128, 48);
    render_string_centered(&mut glyphs, "42", 64, 8, style.with_color(BLACK));

    // The text itself is white on top of its black outline.
    for (x, y) in ink_pixels(&glyphs) {
        assert!(!haloed.get_pixel(x, y), "({x}, {y})");
    }
    assert!(ink_count(&haloed) > ink_count(&glyphs));
}
