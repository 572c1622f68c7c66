// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered dithering and tile patterns.
//!
//! Patterns are always evaluated at global surface coordinates, so two shapes filled with
//! the same pattern line up seamlessly where they touch.

/// The 4x4 Bayer threshold matrix, indexed as `BAYER_4X4[y & 3][x & 3]`.
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// An 8x8 diagonal crosshatch tile, one byte per row, MSB is the leftmost pixel.
pub const CROSSHATCH_8X8: [u8; 8] = [
    0b1100_0011,
    0b1110_0111,
    0b0111_1110,
    0b0011_1100,
    0b0011_1100,
    0b0111_1110,
    0b1110_0111,
    0b1100_0011,
];

/// A fill pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Pattern {
    /// Every pixel is ink.
    #[default]
    SolidBlack = 0,
    /// About 75% ink.
    Dense = 1,
    /// About 50% ink.
    Medium = 2,
    /// About 25% ink.
    Sparse = 3,
    /// No ink.
    SolidWhite = 4,
    /// The [`CROSSHATCH_8X8`] tile.
    DenseCrosshatch = 5,
}

impl Pattern {
    /// All patterns, in discriminant order.
    pub const ALL: [Self; 6] = [
        Self::SolidBlack,
        Self::Dense,
        Self::Medium,
        Self::Sparse,
        Self::SolidWhite,
        Self::DenseCrosshatch,
    ];

    /// Look a pattern up by its discriminant.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Whether every pixel of the pattern has the same value.
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::SolidBlack | Self::SolidWhite)
    }

    /// Whether the pattern puts ink at global pixel `(x, y)`.
    #[inline]
    pub fn test(self, x: i32, y: i32) -> bool {
        // Two's complement masking keeps negative coordinates on the same tile phase.
        let (tx, ty) = ((x & 7) as usize, (y & 7) as usize);
        match self {
            Self::SolidBlack => true,
            Self::SolidWhite => false,
            Self::DenseCrosshatch => CROSSHATCH_8X8[ty] & (0x80 >> tx) != 0,
            Self::Dense => BAYER_4X4[ty & 3][tx & 3] < 12,
            Self::Medium => BAYER_4X4[ty & 3][tx & 3] < 8,
            Self::Sparse => BAYER_4X4[ty & 3][tx & 3] < 4,
        }
    }
}

/// Whether `pattern` puts ink at global pixel `(x, y)`.
#[inline]
pub fn pattern_test(pattern: Pattern, x: i32, y: i32) -> bool {
    pattern.test(x, y)
}
