// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A stroke-based vector font.
//!
//! Every glyph is a handful of polylines in a 0 to 100 box, scaled into the destination
//! cell and drawn with [`draw_thick_line`]. The glyph set is fixed: digits, `A`-`Z`,
//! `a`-`z` and the symbols `: - . / % °`. Characters outside it render nothing but still
//! advance the cursor, leaving a visible gap.
//!
//! Sizes are integers: a character advances by `char_width * multiplier`, truncated,
//! plus the inter-character spacing.

mod glyphs;

use crate::primitives::draw_thick_line;
use stipple_common::{BLACK, Color, Point, Surface};

/// The polylines of one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    strokes: &'static [&'static [(u8, u8)]],
}

impl Glyph {
    /// Create a glyph from its strokes, each a list of `(x, y)` points in the 0 to 100
    /// box.
    pub const fn new(strokes: &'static [&'static [(u8, u8)]]) -> Self {
        Self { strokes }
    }

    /// The strokes of the glyph.
    pub const fn strokes(&self) -> &'static [&'static [(u8, u8)]] {
        self.strokes
    }
}

/// Look up the glyph of `c`.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    match c {
        '0'..='9' => Some(glyphs::DIGITS[c as usize - '0' as usize]),
        'A'..='Z' => Some(glyphs::UPPERCASE[c as usize - 'A' as usize]),
        'a'..='z' => Some(glyphs::LOWERCASE[c as usize - 'a' as usize]),
        _ => glyphs::symbol(c),
    }
}

/// The advance of `c` as a fraction of the base character width.
pub fn char_width_multiplier(c: char) -> f32 {
    match c {
        ':' | '/' | ' ' | 't' | 'f' => 0.5,
        '.' | '°' => 0.33,
        '-' => 0.67,
        'i' | 'j' => 0.4,
        'l' => 0.35,
        'r' => 0.6,
        _ => 1.0,
    }
}

/// The width of the cell of `c`: `char_width * multiplier`, truncated.
#[expect(
    clippy::cast_possible_truncation,
    reason = "multipliers are at most 1, so the result fits"
)]
pub fn char_advance(c: char, char_width: i16) -> i16 {
    (f32::from(char_width) * char_width_multiplier(c)) as i16
}

fn saturate(v: i32) -> i16 {
    i16::try_from(v).unwrap_or(if v < 0 { i16::MIN } else { i16::MAX })
}

/// Map a glyph point into the `width` by `height` cell at `origin`.
fn scale_point((sx, sy): (u8, u8), origin: Point, width: i16, height: i16) -> Point {
    Point::new(
        saturate(i32::from(origin.x) + i32::from(sx) * i32::from(width) / 100),
        saturate(i32::from(origin.y) + i32::from(sy) * i32::from(height) / 100),
    )
}

/// Draw `c` into the `width` by `height` cell with its top left corner at `origin`.
///
/// Unknown characters draw nothing.
pub fn render_char<S: Surface + ?Sized>(
    surface: &mut S,
    c: char,
    origin: Point,
    width: i16,
    height: i16,
    stroke_width: i16,
    color: Color,
) {
    let Some(glyph) = glyph(c) else {
        return;
    };

    for stroke in glyph.strokes() {
        for pair in stroke.windows(2) {
            draw_thick_line(
                surface,
                scale_point(pair[0], origin, width, height),
                scale_point(pair[1], origin, width, height),
                stroke_width,
                color,
            );
        }
    }
}

/// Size and weight of rendered text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    /// The width of a full-width character cell.
    pub char_width: i16,
    /// The height of a character cell. Descenders reach 15% below it.
    pub char_height: i16,
    /// Pixels between character cells.
    pub spacing: i16,
    /// The width of glyph strokes.
    pub stroke_width: i16,
    /// The ink color.
    pub color: Color,
}

impl TextStyle {
    /// The default gap between characters.
    pub const DEFAULT_SPACING: i16 = 4;
    /// The default stroke width.
    pub const DEFAULT_STROKE_WIDTH: i16 = 2;

    /// Black text with cells of the given size and the default spacing and stroke.
    pub const fn new(char_width: i16, char_height: i16) -> Self {
        Self {
            char_width,
            char_height,
            spacing: Self::DEFAULT_SPACING,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            color: BLACK,
        }
    }

    /// Builder method for setting the spacing.
    pub const fn with_spacing(mut self, spacing: i16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Builder method for setting the stroke width.
    pub const fn with_stroke_width(mut self, stroke_width: i16) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Builder method for setting the color.
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Horizontal anchoring of a line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// The anchor is the left edge.
    #[default]
    Left,
    /// The anchor is the horizontal center.
    Center,
    /// The anchor is the right edge.
    Right,
}

/// Draw `text` left to right with the top left corner of the first cell at `(x, y)`.
pub fn render_string<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: i16,
    y: i16,
    style: TextStyle,
) {
    let mut cursor = i32::from(x);
    for c in text.chars() {
        let advance = char_advance(c, style.char_width);
        render_char(
            surface,
            c,
            Point::new(saturate(cursor), y),
            advance,
            style.char_height,
            style.stroke_width,
            style.color,
        );
        cursor += i32::from(advance) + i32::from(style.spacing);
    }
}

/// The width of `text` as drawn by [`render_string`]: all cell widths plus the spacing
/// between them, but not after the last character.
pub fn string_width(text: &str, char_width: i16, spacing: i16) -> i32 {
    let mut width = 0;
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            width += i32::from(spacing);
        }
        width += i32::from(char_advance(c, char_width));
    }
    width
}

/// Draw `text` horizontally centered on `center_x`.
pub fn render_string_centered<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    center_x: i16,
    y: i16,
    style: TextStyle,
) {
    let width = string_width(text, style.char_width, style.spacing);
    let x = saturate(i32::from(center_x) - width / 2);
    render_string(surface, text, x, y, style);
}

/// Draw `text` ending at `right_x`.
pub fn render_string_right<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    right_x: i16,
    y: i16,
    style: TextStyle,
) {
    let width = string_width(text, style.char_width, style.spacing);
    let x = saturate(i32::from(right_x) - width);
    render_string(surface, text, x, y, style);
}

/// Draw `text` anchored at `x` according to `align`.
pub fn render_string_aligned<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: i16,
    y: i16,
    align: TextAlign,
    style: TextStyle,
) {
    match align {
        TextAlign::Left => render_string(surface, text, x, y, style),
        TextAlign::Center => render_string_centered(surface, text, x, y, style),
        TextAlign::Right => render_string_right(surface, text, x, y, style),
    }
}

/// Draw `lines` top to bottom, each `char_height + line_spacing` below the previous one
/// and aligned to `x` per `align`.
pub fn render_multiline<S: Surface + ?Sized>(
    surface: &mut S,
    lines: &[&str],
    x: i16,
    y: i16,
    line_spacing: i16,
    align: TextAlign,
    style: TextStyle,
) {
    let step = i32::from(style.char_height) + i32::from(line_spacing);
    let mut line_y = i32::from(y);
    for line in lines {
        render_string_aligned(surface, line, x, saturate(line_y), align, style);
        line_y += step;
    }
}

/// [`render_string_centered`] with an outline that keeps the text legible on a busy or
/// same-colored background.
///
/// The string is first drawn in `halo_color` with strokes `2 * halo` pixels wider, then
/// in the text color on top.
pub fn render_string_centered_with_halo<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    center_x: i16,
    y: i16,
    style: TextStyle,
    halo: i16,
    halo_color: Color,
) {
    let outline = style
        .with_stroke_width(style.stroke_width.saturating_add(halo.saturating_mul(2)))
        .with_color(halo_color);
    render_string_centered(surface, text, center_x, y, outline);
    render_string_centered(surface, text, center_x, y, style);
}

#[cfg(test)]
mod tests {
    use super::{char_advance, char_width_multiplier, glyph, string_width};

    #[test]
    fn glyph_coverage() {
        for c in ('0'..='9').chain('A'..='Z').chain('a'..='z') {
            assert!(glyph(c).is_some(), "missing {c}");
        }
        for c in [':', '-', '.', '/', '%', '°'] {
            assert!(glyph(c).is_some(), "missing {c}");
        }
        for c in [' ', '?', '#', 'é'] {
            assert!(glyph(c).is_none());
        }
    }

    #[test]
    fn glyph_points_stay_in_box() {
        for c in ('0'..='9').chain('A'..='Z').chain('a'..='z') {
            let Some(g) = glyph(c) else { continue };
            for stroke in g.strokes() {
                assert!(stroke.len() >= 2);
                assert!(stroke.iter().all(|&(x, y)| x <= 100 && y <= 115));
            }
        }
    }

    #[test]
    fn narrow_characters() {
        assert_eq!(char_width_multiplier('W'), 1.0);
        assert_eq!(char_width_multiplier('l'), 0.35);
        assert_eq!(char_advance('l', 20), 7);
        assert_eq!(char_advance('.', 20), 6);
        assert_eq!(char_advance('?', 20), 20);
    }

    #[test]
    fn width_counts_inner_gaps_only() {
        assert_eq!(string_width("", 20, 4), 0);
        assert_eq!(string_width("8", 20, 4), 20);
        assert_eq!(string_width("1:2", 20, 4), 20 + 4 + 10 + 4 + 20);
        // Unknown characters still take up room.
        assert_eq!(string_width("1?2", 20, 4), 68);
    }
}
