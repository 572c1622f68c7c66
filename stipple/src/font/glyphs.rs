// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph stroke tables.
//!
//! Coordinates are in a 0 to 100 box. Capitals and digits span 10 to 90 vertically,
//! lowercase letters have an x-height from 30 to 90 and descenders reach 115.

use super::Glyph;

static DIGIT_0: Glyph = Glyph::new(&[
    &[(20, 10), (80, 10), (95, 25), (95, 75), (80, 90), (20, 90), (5, 75), (5, 25), (20, 10)],
]);

static DIGIT_1: Glyph = Glyph::new(&[
    &[(30, 20), (50, 10), (50, 90)],
    &[(30, 90), (70, 90)],
]);

static DIGIT_2: Glyph = Glyph::new(&[
    &[(10, 25), (25, 10), (75, 10), (90, 25), (90, 40), (10, 75), (10, 90), (90, 90)],
]);

static DIGIT_3: Glyph = Glyph::new(&[
    &[(10, 10), (80, 10), (90, 20), (90, 40), (75, 50)],
    &[(45, 50), (75, 50)],
    &[(75, 50), (90, 60), (90, 80), (80, 90), (10, 90)],
]);

static DIGIT_4: Glyph = Glyph::new(&[
    &[(70, 10), (70, 90)],
    &[(10, 60), (90, 60)],
    &[(10, 60), (70, 10)],
]);

static DIGIT_5: Glyph = Glyph::new(&[
    &[
        (85, 10),
        (15, 10),
        (10, 15),
        (10, 45),
        (20, 50),
        (75, 50),
        (90, 60),
        (90, 80),
        (75, 90),
        (10, 90),
    ],
]);

static DIGIT_6: Glyph = Glyph::new(&[
    &[
        (80, 10),
        (25, 10),
        (10, 25),
        (10, 75),
        (25, 90),
        (75, 90),
        (90, 75),
        (90, 55),
        (75, 45),
        (10, 45),
    ],
]);

static DIGIT_7: Glyph = Glyph::new(&[
    &[(10, 10), (90, 10), (90, 20), (45, 90)],
    &[(30, 50), (70, 50)],
]);

static DIGIT_8: Glyph = Glyph::new(&[
    &[(25, 10), (75, 10), (90, 20), (90, 40), (75, 50), (25, 50), (10, 40), (10, 20), (25, 10)],
    &[(25, 50), (75, 50), (90, 60), (90, 80), (75, 90), (25, 90), (10, 80), (10, 60), (25, 50)],
]);

static DIGIT_9: Glyph = Glyph::new(&[
    &[
        (90, 55),
        (25, 55),
        (10, 45),
        (10, 25),
        (25, 10),
        (75, 10),
        (90, 25),
        (90, 75),
        (75, 90),
        (20, 90),
    ],
]);

static UPPER_A: Glyph = Glyph::new(&[
    &[(5, 90), (5, 75), (20, 10), (80, 10), (95, 75), (95, 90)],
    &[(20, 60), (80, 60)],
]);

static UPPER_B: Glyph = Glyph::new(&[
    &[(10, 10), (10, 90), (75, 90), (90, 75), (90, 55), (75, 45)],
    &[(10, 45), (75, 45), (90, 35), (90, 20), (75, 10), (10, 10)],
]);

static UPPER_C: Glyph = Glyph::new(&[
    &[(90, 25), (75, 10), (25, 10), (10, 25), (10, 75), (25, 90), (75, 90), (90, 75)],
]);

static UPPER_D: Glyph = Glyph::new(&[
    &[(10, 10), (10, 90), (70, 90), (90, 70), (90, 30), (70, 10), (10, 10)],
]);

static UPPER_E: Glyph = Glyph::new(&[
    &[(90, 10), (10, 10), (10, 90), (90, 90)],
    &[(10, 50), (70, 50)],
]);

static UPPER_F: Glyph = Glyph::new(&[
    &[(90, 10), (10, 10), (10, 90)],
    &[(10, 50), (70, 50)],
]);

static UPPER_G: Glyph = Glyph::new(&[
    &[
        (90, 25),
        (75, 10),
        (25, 10),
        (10, 25),
        (10, 75),
        (25, 90),
        (75, 90),
        (90, 75),
        (90, 50),
        (50, 50),
    ],
]);

static UPPER_H: Glyph = Glyph::new(&[
    &[(10, 10), (10, 90)],
    &[(90, 10), (90, 90)],
    &[(10, 50), (90, 50)],
]);

static UPPER_I: Glyph = Glyph::new(&[
    &[(30, 10), (70, 10)],
    &[(50, 10), (50, 90)],
    &[(30, 90), (70, 90)],
]);

static UPPER_J: Glyph = Glyph::new(&[
    &[(30, 10), (90, 10)],
    &[(70, 10), (70, 75), (55, 90), (25, 90), (10, 75)],
]);

static UPPER_K: Glyph = Glyph::new(&[
    &[(10, 10), (10, 90)],
    &[(90, 10), (10, 50), (90, 90)],
]);

static UPPER_L: Glyph = Glyph::new(&[
    &[(10, 10), (10, 90), (90, 90)],
]);

static UPPER_M: Glyph = Glyph::new(&[
    &[(5, 90), (5, 20), (15, 10), (50, 45), (85, 10), (95, 20), (95, 90)],
]);

static UPPER_N: Glyph = Glyph::new(&[
    &[(10, 90), (10, 20), (20, 10), (90, 80), (90, 10)],
]);

static UPPER_O: Glyph = Glyph::new(&[
    &[(20, 10), (80, 10), (95, 25), (95, 75), (80, 90), (20, 90), (5, 75), (5, 25), (20, 10)],
]);

static UPPER_P: Glyph = Glyph::new(&[
    &[(10, 90), (10, 10), (75, 10), (90, 25), (90, 40), (75, 55), (10, 55)],
]);

static UPPER_Q: Glyph = Glyph::new(&[
    &[(20, 10), (80, 10), (95, 25), (95, 75), (80, 90), (20, 90), (5, 75), (5, 25), (20, 10)],
    &[(60, 65), (95, 95)],
]);

static UPPER_R: Glyph = Glyph::new(&[
    &[(10, 90), (10, 10), (75, 10), (90, 25), (90, 40), (75, 55), (10, 55)],
    &[(55, 55), (90, 90)],
]);

static UPPER_S: Glyph = Glyph::new(&[
    &[
        (90, 25),
        (75, 10),
        (25, 10),
        (10, 25),
        (10, 40),
        (25, 50),
        (75, 50),
        (90, 60),
        (90, 75),
        (75, 90),
        (25, 90),
        (10, 75),
    ],
]);

static UPPER_T: Glyph = Glyph::new(&[
    &[(10, 10), (90, 10)],
    &[(50, 10), (50, 90)],
]);

static UPPER_U: Glyph = Glyph::new(&[
    &[(10, 10), (10, 75), (25, 90), (75, 90), (90, 75), (90, 10)],
]);

static UPPER_V: Glyph = Glyph::new(&[
    &[(5, 10), (50, 90), (95, 10)],
]);

static UPPER_W: Glyph = Glyph::new(&[
    &[(5, 10), (20, 90), (50, 55), (80, 90), (95, 10)],
]);

static UPPER_X: Glyph = Glyph::new(&[
    &[(10, 10), (90, 90)],
    &[(90, 10), (10, 90)],
]);

static UPPER_Y: Glyph = Glyph::new(&[
    &[(10, 10), (50, 50), (90, 10)],
    &[(50, 50), (50, 90)],
]);

static UPPER_Z: Glyph = Glyph::new(&[
    &[(10, 10), (90, 10), (10, 90), (90, 90)],
]);

static LOWER_a: Glyph = Glyph::new(&[
    &[(85, 90), (85, 45), (70, 30), (25, 30), (10, 45), (10, 60), (25, 75), (85, 75)],
    &[(85, 75), (85, 90)],
]);

static LOWER_b: Glyph = Glyph::new(&[
    &[(15, 10), (15, 90), (70, 90), (85, 75), (85, 45), (70, 30), (15, 30)],
]);

static LOWER_c: Glyph = Glyph::new(&[
    &[(85, 40), (70, 30), (25, 30), (10, 45), (10, 75), (25, 90), (70, 90), (85, 80)],
]);

static LOWER_d: Glyph = Glyph::new(&[
    &[(85, 10), (85, 90), (30, 90), (15, 75), (15, 45), (30, 30), (85, 30)],
]);

static LOWER_e: Glyph = Glyph::new(&[
    &[
        (10, 60),
        (85, 60),
        (85, 45),
        (70, 30),
        (25, 30),
        (10, 45),
        (10, 75),
        (25, 90),
        (70, 90),
        (85, 80),
    ],
]);

static LOWER_f: Glyph = Glyph::new(&[
    &[(85, 20), (70, 10), (45, 10), (30, 25), (30, 90)],
    &[(15, 45), (55, 45)],
]);

static LOWER_g: Glyph = Glyph::new(&[
    &[
        (85, 30),
        (30, 30),
        (15, 45),
        (15, 70),
        (30, 85),
        (85, 85),
        (85, 105),
        (70, 115),
        (25, 115),
        (10, 105),
    ],
]);

static LOWER_h: Glyph = Glyph::new(&[
    &[(15, 10), (15, 90)],
    &[(15, 45), (30, 30), (70, 30), (85, 45), (85, 90)],
]);

static LOWER_i: Glyph = Glyph::new(&[
    &[(50, 30), (50, 90)],
    &[(50, 10), (55, 15), (50, 20), (45, 15), (50, 10)],
]);

static LOWER_j: Glyph = Glyph::new(&[
    &[(60, 30), (60, 100), (45, 115), (20, 115)],
    &[(60, 10), (65, 15), (60, 20), (55, 15), (60, 10)],
]);

static LOWER_k: Glyph = Glyph::new(&[
    &[(15, 10), (15, 90)],
    &[(80, 30), (15, 60), (85, 90)],
]);

static LOWER_l: Glyph = Glyph::new(&[
    &[(50, 10), (50, 90)],
]);

static LOWER_m: Glyph = Glyph::new(&[
    &[(10, 90), (10, 30), (25, 30), (40, 45), (40, 90)],
    &[(40, 45), (55, 30), (75, 30), (90, 45), (90, 90)],
]);

static LOWER_n: Glyph = Glyph::new(&[
    &[(15, 90), (15, 30), (30, 30), (70, 30), (85, 45), (85, 90)],
]);

static LOWER_o: Glyph = Glyph::new(&[
    &[(25, 30), (75, 30), (90, 45), (90, 75), (75, 90), (25, 90), (10, 75), (10, 45), (25, 30)],
]);

static LOWER_p: Glyph = Glyph::new(&[
    &[(15, 115), (15, 30), (70, 30), (85, 45), (85, 70), (70, 85), (15, 85)],
]);

static LOWER_q: Glyph = Glyph::new(&[
    &[(85, 115), (85, 30), (30, 30), (15, 45), (15, 70), (30, 85), (85, 85)],
]);

static LOWER_r: Glyph = Glyph::new(&[
    &[(20, 90), (20, 30)],
    &[(20, 50), (35, 35), (60, 30), (85, 35)],
]);

static LOWER_s: Glyph = Glyph::new(&[
    &[
        (85, 40),
        (70, 30),
        (30, 30),
        (15, 40),
        (15, 50),
        (30, 60),
        (70, 60),
        (85, 70),
        (85, 80),
        (70, 90),
        (30, 90),
        (15, 80),
    ],
]);

static LOWER_t: Glyph = Glyph::new(&[
    &[(40, 10), (40, 75), (55, 90), (80, 90)],
    &[(20, 30), (65, 30)],
]);

static LOWER_u: Glyph = Glyph::new(&[
    &[(15, 30), (15, 75), (30, 90), (70, 90), (85, 75), (85, 30)],
]);

static LOWER_v: Glyph = Glyph::new(&[
    &[(10, 30), (50, 90), (90, 30)],
]);

static LOWER_w: Glyph = Glyph::new(&[
    &[(5, 30), (25, 90), (50, 50), (75, 90), (95, 30)],
]);

static LOWER_x: Glyph = Glyph::new(&[
    &[(15, 30), (85, 90)],
    &[(85, 30), (15, 90)],
]);

static LOWER_y: Glyph = Glyph::new(&[
    &[(15, 30), (50, 75)],
    &[(85, 30), (50, 75), (35, 100), (20, 115)],
]);

static LOWER_z: Glyph = Glyph::new(&[
    &[(15, 30), (85, 30), (15, 90), (85, 90)],
]);

static COLON: Glyph = Glyph::new(&[
    &[(50, 25), (58, 33), (50, 41), (42, 33), (50, 25)],
    &[(50, 59), (58, 67), (50, 75), (42, 67), (50, 59)],
]);

static MINUS: Glyph = Glyph::new(&[
    &[(15, 50), (85, 50)],
]);

static PERIOD: Glyph = Glyph::new(&[
    &[(50, 80), (58, 85), (50, 90), (42, 85), (50, 80)],
]);

static SLASH: Glyph = Glyph::new(&[
    &[(85, 10), (15, 90)],
]);

static DEGREE: Glyph = Glyph::new(&[
    &[(30, 10), (70, 10), (85, 25), (85, 40), (70, 55), (30, 55), (15, 40), (15, 25), (30, 10)],
]);

static PERCENT: Glyph = Glyph::new(&[
    &[(85, 10), (15, 90)],
    &[(15, 10), (35, 10), (40, 15), (40, 30), (35, 35), (15, 35), (10, 30), (10, 15), (15, 10)],
    &[(65, 65), (85, 65), (90, 70), (90, 85), (85, 90), (65, 90), (60, 85), (60, 70), (65, 65)],
]);

pub(super) static DIGITS: [&Glyph; 10] = [
    &DIGIT_0,
    &DIGIT_1,
    &DIGIT_2,
    &DIGIT_3,
    &DIGIT_4,
    &DIGIT_5,
    &DIGIT_6,
    &DIGIT_7,
    &DIGIT_8,
    &DIGIT_9,
];

pub(super) static UPPERCASE: [&Glyph; 26] = [
    &UPPER_A,
    &UPPER_B,
    &UPPER_C,
    &UPPER_D,
    &UPPER_E,
    &UPPER_F,
    &UPPER_G,
    &UPPER_H,
    &UPPER_I,
    &UPPER_J,
    &UPPER_K,
    &UPPER_L,
    &UPPER_M,
    &UPPER_N,
    &UPPER_O,
    &UPPER_P,
    &UPPER_Q,
    &UPPER_R,
    &UPPER_S,
    &UPPER_T,
    &UPPER_U,
    &UPPER_V,
    &UPPER_W,
    &UPPER_X,
    &UPPER_Y,
    &UPPER_Z,
];

pub(super) static LOWERCASE: [&Glyph; 26] = [
    &LOWER_a,
    &LOWER_b,
    &LOWER_c,
    &LOWER_d,
    &LOWER_e,
    &LOWER_f,
    &LOWER_g,
    &LOWER_h,
    &LOWER_i,
    &LOWER_j,
    &LOWER_k,
    &LOWER_l,
    &LOWER_m,
    &LOWER_n,
    &LOWER_o,
    &LOWER_p,
    &LOWER_q,
    &LOWER_r,
    &LOWER_s,
    &LOWER_t,
    &LOWER_u,
    &LOWER_v,
    &LOWER_w,
    &LOWER_x,
    &LOWER_y,
    &LOWER_z,
];

/// The glyph of a punctuation mark or symbol.
pub(super) fn symbol(c: char) -> Option<&'static Glyph> {
    match c {
        ':' => Some(&COLON),
        '-' => Some(&MINUS),
        '.' => Some(&PERIOD),
        '/' => Some(&SLASH),
        '°' => Some(&DEGREE),
        '%' => Some(&PERCENT),
        _ => None,
    }
}
