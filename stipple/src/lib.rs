// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stipple is a 1-bit renderer for small, memory-constrained reflective displays.
//!
//! It composes a full screen from code rather than from pre-rendered bitmaps: scanline
//! polygon fills, ordered dithering, textured "organic" bezier strokes, a stroke-based
//! vector font and deterministic procedural animation, all drawn into a bit-packed
//! [`Framebuffer`].
//!
//! # Usage
//!
//! ```
//! use stipple::{BLACK, Framebuffer, Pattern, Point, Rect, Surface};
//!
//! let mut fb = Framebuffer::new(400, 300);
//! assert!(fb.is_valid());
//!
//! stipple::pattern_fill::fill_rect_pattern(&mut fb, Rect::new(0, 0, 400, 300), Pattern::Medium);
//! stipple::primitives::fill_circle(&mut fb, Point::new(200, 150), 60, BLACK);
//!
//! // Hand `fb.data()` to the display driver.
//! assert_eq!(fb.buffer_size(), 50 * 300);
//! ```
//!
//! Drawing never fails. Pixels outside the surface are dropped, degenerate geometry has a
//! defined fallback (a dot, a disc or nothing), and a surface whose allocation failed
//! ignores everything drawn to it.
//!
//! # Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! # Modules
//!
//! - [`primitives`]: lines, thick lines, polygons, rectangles and circles
//! - [`pattern_fill`]: the same fills with ordered dithering
//! - [`bezier`]: auto-tangent cubic curves and adaptive flattening
//! - [`brush`] and [`brush_cache`]: textured strokes along bezier paths
//! - [`font`]: the vector font
//! - [`clock_face`]: a complete screen built from all of the above
//!
//! [libm]: https://crates.io/crates/libm
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

pub mod bezier;
pub mod brush;
pub mod brush_cache;
pub mod clock_face;
pub mod font;
pub mod pattern_fill;
pub mod primitives;

pub use stipple_common;
pub use stipple_common::animation;
pub use stipple_common::dirty::{DEFAULT_MIN_GAP, DirtyRegion, DirtyTracker};
pub use stipple_common::shapes;
pub use stipple_common::{
    BLACK, BufferError, Color, Framebuffer, MaskBuffer, Pattern, Point, PointF, Rect, Surface,
    WHITE,
};

pub use brush::{Brush, StampStyle};
pub use brush_cache::BrushCache;
pub use font::{TextAlign, TextStyle};
