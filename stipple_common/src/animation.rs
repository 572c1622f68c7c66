// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves and procedural animation.
//!
//! Everything here is a pure function of its arguments: the same elapsed time, seed and
//! amplitude always give the same result, so frames can be re-rendered from scratch
//! without keeping animation state around.

use crate::geometry::{Point, PointF};
use crate::math::{clamp01, lerp};
use alloc::vec::Vec;
use core::f32::consts::{PI, TAU};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Default lower bound for [`breathing_scale`].
pub const DEFAULT_BREATH_MIN: f32 = 0.95;
/// Default upper bound for [`breathing_scale`].
pub const DEFAULT_BREATH_MAX: f32 = 1.05;
/// Default period of one breath, in seconds.
pub const DEFAULT_BREATH_PERIOD: f32 = 3.0;
/// Default amplitude for [`breathing_offset`], in pixels.
pub const DEFAULT_BREATH_AMPLITUDE: f32 = 2.0;

// Per-seed and per-vertex phase multipliers. Irrational-ish so neighbors never sync up.
const PHASE_SEED_X: f32 = 1.618;
const PHASE_SEED_Y: f32 = 2.718;
const PHASE_VERTEX_X: f32 = 2.399;
const PHASE_VERTEX_Y: f32 = 3.141;

/// Smoothstep, `3t² - 2t³`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = clamp01(t);
    t * t * (3.0 - 2.0 * t)
}

/// Half a cosine wave from 0 to 1.
pub fn ease_in_out_sine(t: f32) -> f32 {
    let t = clamp01(t);
    (1.0 - (t * PI).cos()) * 0.5
}

/// Quadratic ease in.
pub fn ease_in(t: f32) -> f32 {
    let t = clamp01(t);
    t * t
}

/// Quadratic ease out.
pub fn ease_out(t: f32) -> f32 {
    let t = clamp01(t);
    t * (2.0 - t)
}

/// Ease out with three decaying bounces.
pub fn ease_out_bounce(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    let t = clamp01(t);
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

/// The position within the current period, in `[0, 1)`. Zero for a non-positive period.
fn cycle(t: f32, period: f32) -> f32 {
    if period > 0.0 {
        (t % period) / period
    } else {
        0.0
    }
}

/// A sinusoidal scale factor that oscillates between `min` and `max` once per `period`.
///
/// Starts at the midpoint at `t = 0` and peaks at a quarter period.
pub fn breathing_scale(t: f32, min: f32, max: f32, period: f32) -> f32 {
    breathing_scale_with_phase(t, min, max, period, 0.0)
}

/// Like [`breathing_scale`], shifted by `phase` periods.
///
/// Giving a group of shapes different phases staggers them so they don't pulse in unison.
pub fn breathing_scale_with_phase(t: f32, min: f32, max: f32, period: f32, phase: f32) -> f32 {
    let s = ((cycle(t, period) + phase) * TAU).sin();
    min + (s + 1.0) * 0.5 * (max - min)
}

/// A sinusoidal offset in `[-amplitude, amplitude]` with the given period.
pub fn breathing_offset(t: f32, amplitude: f32, period: f32) -> f32 {
    amplitude * (cycle(t, period) * TAU).sin()
}

#[expect(
    clippy::cast_precision_loss,
    reason = "seeds and vertex counts only feed a phase angle"
)]
fn wiggle_delta(index: usize, amplitude: f32, frequency: f32, t: f32, seed: u32) -> (f32, f32) {
    let phase_x = seed as f32 * PHASE_SEED_X + index as f32 * PHASE_VERTEX_X;
    let phase_y = seed as f32 * PHASE_SEED_Y + index as f32 * PHASE_VERTEX_Y;
    let base = t * frequency * TAU;

    (
        amplitude * (base + phase_x).sin(),
        amplitude * (base + phase_y).cos(),
    )
}

/// Jitter every vertex by up to `amplitude` pixels, `frequency` times per second.
///
/// Each vertex gets its own phase from its index and `seed`, so neighbors move
/// independently. Results are rounded to whole pixels, which keeps static frames stable.
pub fn wiggle_points(
    points: &[PointF],
    amplitude: f32,
    frequency: f32,
    t: f32,
    seed: u32,
) -> Vec<PointF> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (dx, dy) = wiggle_delta(i, amplitude, frequency, t, seed);
            PointF::new((p.x + dx).round(), (p.y + dy).round())
        })
        .collect()
}

/// [`wiggle_points`] for integer points.
pub fn wiggle_points_i(
    points: &[Point],
    amplitude: f32,
    frequency: f32,
    t: f32,
    seed: u32,
) -> Vec<Point> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (dx, dy) = wiggle_delta(i, amplitude, frequency, t, seed);
            PointF::new(f32::from(p.x) + dx, f32::from(p.y) + dy).to_point()
        })
        .collect()
}

/// Interpolate between two point sets, for morphing one shape into another.
///
/// `easing`, if given, is applied to `t` first; the result is clamped to `[0, 1]`. If the
/// sets differ in length, the extra points of the longer one are ignored.
pub fn transition_points(
    from: &[PointF],
    to: &[PointF],
    t: f32,
    easing: Option<fn(f32) -> f32>,
) -> Vec<PointF> {
    let t = clamp01(easing.map_or(t, |ease| ease(t)));
    from.iter()
        .zip(to)
        .map(|(a, b)| PointF::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t)))
        .collect()
}

/// A clock for one running animation.
///
/// Times are in seconds and come from the caller; nothing here reads a system clock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    start_time: f32,
    current_time: f32,
}

impl AnimationState {
    /// Start an animation at `start_time`.
    pub fn new(start_time: f32) -> Self {
        Self {
            start_time,
            current_time: start_time,
        }
    }

    /// Advance the clock.
    pub fn update(&mut self, current_time: f32) {
        self.current_time = current_time;
    }

    /// Seconds since the animation started.
    pub fn elapsed(&self) -> f32 {
        self.current_time - self.start_time
    }

    /// The most recent time passed to [`AnimationState::update`].
    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    /// Start over at `start_time`.
    pub fn reset(&mut self, start_time: f32) {
        *self = Self::new(start_time);
    }

    /// Start over from the current time.
    pub fn restart(&mut self) {
        self.start_time = self.current_time;
    }

    /// Progress through a `duration`-second animation that begins `delay` seconds in,
    /// in `[0, 1]`.
    pub fn progress(&self, duration: f32, delay: f32) -> f32 {
        let t = self.elapsed() - delay;
        if t <= 0.0 {
            0.0
        } else if t >= duration {
            1.0
        } else {
            t / duration
        }
    }

    /// Whether a `duration`-second animation beginning `delay` seconds in has finished.
    pub fn is_complete(&self, duration: f32, delay: f32) -> bool {
        self.elapsed() >= duration + delay
    }

    /// [`breathing_scale`] at the elapsed time.
    pub fn breathing_scale(&self, min: f32, max: f32, period: f32) -> f32 {
        breathing_scale(self.elapsed(), min, max, period)
    }

    /// [`breathing_offset`] at the elapsed time.
    pub fn breathing_offset(&self, amplitude: f32, period: f32) -> f32 {
        breathing_offset(self.elapsed(), amplitude, period)
    }
}
