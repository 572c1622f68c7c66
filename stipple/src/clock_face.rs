// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The "observatory" clock: a complete 400x300 screen composed from the other modules.
//!
//! A crosshatched background, a large white hexagon holding the time and three small
//! black hexagons carrying the date, temperature and humidity. The hexagons are lumpy,
//! outlined with textured brushes and gently animated; everything is a pure function of
//! [`ClockData`], [`ClockAnimState`] and the seed, so equal inputs give equal frames.

use alloc::format;
use alloc::vec::Vec;
use core::f32::consts::TAU;
use stipple_common::animation::{breathing_scale_with_phase, wiggle_points};
use stipple_common::shapes::{generate_hex, polygon_to_bezier_loop};
use stipple_common::{BLACK, Pattern, Point, PointF, Rect, Surface, WHITE};
#[cfg(not(feature = "std"))]
use stipple_common::kurbo::common::FloatFuncs as _;

use crate::brush::{Brush, StampStyle, stroke_bezier_brush};
use crate::font::{TextStyle, render_string_centered, render_string_centered_with_halo};
use crate::pattern_fill::fill_rect_pattern;
use crate::primitives::fill_polygon;

const DAY_ABBREVS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

const MAIN_CENTER: PointF = PointF::new(200.0, 120.0);
const MAIN_RADIUS: f32 = 110.0;
const MAIN_LUMPINESS: f32 = 0.05;
const MAIN_WIGGLE_AMPLITUDE: f32 = 1.0;
const MAIN_WIGGLE_FREQUENCY: f32 = 0.5;
const MAIN_STROKE: StampStyle = StampStyle::new(0.4, 2.5);

const TIME_STYLE: TextStyle = TextStyle::new(38, 58).with_spacing(5).with_stroke_width(3);
const TIME_CENTER_X: i16 = 200;
const TIME_TOP: i16 = 85;

const SAT_RADIUS: f32 = 38.0;
const SAT_LUMPINESS: f32 = 0.08;
const SAT_Y: f32 = 255.0;
const SAT_X: [f32; 3] = [70.0, 200.0, 330.0];
const SAT_STROKE: StampStyle = StampStyle::new(0.4, 2.0);
// Golden-ratio offsets stagger the breathing.
const SAT_BREATH_PHASES: [f32; 3] = [0.0, 0.382, 0.618];
const SAT_BREATH_MIN: f32 = 0.97;
const SAT_BREATH_MAX: f32 = 1.03;
const SAT_BREATH_PERIOD: f32 = 3.33;

const DRIFT_RADIUS: f32 = 15.0;
const DRIFT_PERIOD_X: [f32; 3] = [23.0, 31.0, 19.0];
const DRIFT_PERIOD_Y: [f32; 3] = [29.0, 17.0, 37.0];
const DRIFT_PHASE_X: [f32; 3] = [0.0, 2.1, 4.2];
const DRIFT_PHASE_Y: [f32; 3] = [1.5, 3.7, 0.8];

const LABEL_STYLE: TextStyle = TextStyle::new(12, 16)
    .with_spacing(2)
    .with_stroke_width(1)
    .with_color(WHITE);
const LABEL_HALO: i16 = 1;
const LABEL_LINE_OFFSET: i16 = 10;

/// What the clock shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockData {
    /// Hours, 0 to 23. Shown in 12-hour form.
    pub hours: u8,
    /// Minutes, 0 to 59.
    pub minutes: u8,
    /// Day of the week, 0 for Sunday.
    pub day_of_week: u8,
    /// Month, 1 to 12.
    pub month: u8,
    /// Day of the month, 1 to 31.
    pub day: u8,
    /// Temperature in degrees Fahrenheit.
    pub temp_f: i8,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Battery charge in percent. Not drawn by this face.
    pub battery: u8,
}

/// Animation inputs for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClockAnimState {
    /// Seconds since the animation started.
    pub elapsed: f32,
    /// Whether the colon between hours and minutes is lit.
    pub show_colon: bool,
}

/// Convert 0-23 hours to 1-12.
pub fn to_12_hour(hours24: u8) -> u8 {
    match hours24 % 12 {
        0 => 12,
        h => h,
    }
}

/// Three-letter day name, `SUN` for 0. Out of range values also give `SUN`.
pub fn day_abbrev(day_of_week: u8) -> &'static str {
    DAY_ABBREVS
        .get(usize::from(day_of_week))
        .copied()
        .unwrap_or(DAY_ABBREVS[0])
}

/// The slow drift of satellite `i` at time `t`.
fn drift(i: usize, t: f32) -> PointF {
    PointF::new(
        DRIFT_RADIUS * ((t + DRIFT_PHASE_X[i]) * TAU / DRIFT_PERIOD_X[i]).sin(),
        DRIFT_RADIUS * ((t + DRIFT_PHASE_Y[i]) * TAU / DRIFT_PERIOD_Y[i]).sin(),
    )
}

/// Render the whole clock face.
///
/// `seed` fixes the shapes of the hexagons; keep it constant across frames so only the
/// animation moves them.
#[expect(
    clippy::cast_possible_truncation,
    reason = "hexagon centers are on screen"
)]
pub fn render_observatory_clock<S: Surface + ?Sized>(
    surface: &mut S,
    data: &ClockData,
    anim: &ClockAnimState,
    seed: u32,
) {
    surface.clear(WHITE);
    fill_rect_pattern(surface, Rect::new(0, 0, 400, 300), Pattern::DenseCrosshatch);

    // Main hexagon, punched out of the background.
    let main = generate_hex(MAIN_CENTER, MAIN_RADIUS, MAIN_LUMPINESS, seed);
    let main = wiggle_points(
        &main,
        MAIN_WIGGLE_AMPLITUDE,
        MAIN_WIGGLE_FREQUENCY,
        anim.elapsed,
        seed.wrapping_add(100),
    );
    let outline: Vec<Point> = main.iter().map(|p| p.to_point()).collect();
    fill_polygon(surface, &outline, WHITE);
    stroke_bezier_brush(
        surface,
        &polygon_to_bezier_loop(&main),
        Brush::Heavy,
        MAIN_STROKE,
    );

    let hour = to_12_hour(data.hours);
    let time = if anim.show_colon {
        format!("{hour:2}:{:02}", data.minutes)
    } else {
        format!("{hour:2} {:02}", data.minutes)
    };
    render_string_centered(surface, &time, TIME_CENTER_X, TIME_TOP, TIME_STYLE);

    let labels = [
        format!("{}/{}", data.month, data.day),
        format!("{}°", data.temp_f),
        format!("{}%", data.humidity),
    ];
    for (i, label) in labels.iter().enumerate() {
        let center = PointF::new(SAT_X[i], SAT_Y) + drift(i, anim.elapsed);
        let scale = breathing_scale_with_phase(
            anim.elapsed,
            SAT_BREATH_MIN,
            SAT_BREATH_MAX,
            SAT_BREATH_PERIOD,
            SAT_BREATH_PHASES[i],
        );
        // `i` is below 3.
        let sat_seed = seed.wrapping_add(1000 + i as u32);
        let hex = generate_hex(center, SAT_RADIUS * scale, SAT_LUMPINESS, sat_seed);
        let outline: Vec<Point> = hex.iter().map(|p| p.to_point()).collect();
        fill_polygon(surface, &outline, BLACK);
        stroke_bezier_brush(
            surface,
            &polygon_to_bezier_loop(&hex),
            Brush::Fine,
            SAT_STROKE,
        );

        let (cx, cy) = (center.x as i16, center.y as i16);
        if i == 0 {
            let day = day_abbrev(data.day_of_week);
            render_label(surface, day, cx, cy - LABEL_LINE_OFFSET);
            render_label(surface, label, cx, cy + LABEL_LINE_OFFSET);
        } else {
            render_label(surface, label, cx, cy);
        }
    }
}

fn render_label<S: Surface + ?Sized>(surface: &mut S, text: &str, cx: i16, y: i16) {
    render_string_centered_with_halo(surface, text, cx, y, LABEL_STYLE, LABEL_HALO, BLACK);
}

#[cfg(test)]
mod tests {
    use super::{day_abbrev, to_12_hour};

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(to_12_hour(0), 12);
        assert_eq!(to_12_hour(1), 1);
        assert_eq!(to_12_hour(12), 12);
        assert_eq!(to_12_hour(13), 1);
        assert_eq!(to_12_hour(23), 11);
    }

    #[test]
    fn day_names() {
        assert_eq!(day_abbrev(0), "SUN");
        assert_eq!(day_abbrev(6), "SAT");
        assert_eq!(day_abbrev(7), "SUN");
        assert_eq!(day_abbrev(255), "SUN");
    }
}
