// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate includes the bit-packed buffers, geometry types, dither patterns and other
//! fundamental components used by [Stipple][stipple], a 1-bit renderer for small reflective
//! displays.
//!
//! # Usage
//!
//! Most users want [Stipple][stipple] itself, which re-exports this crate and adds the
//! rasterizers (lines, polygons, circles, bezier strokes and text) on top of it.
//!
//! # Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][] (through kurbo's `FloatFuncs`).
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! # Contents
//!
//! - [`Point`], [`PointF`], [`Rect`] and the boolean [`Color`] convention
//! - The [`Surface`] capability trait and its two implementors, [`Framebuffer`] and
//!   [`MaskBuffer`], both backed by the MSB-first packed layout of [`bitplane`]
//! - Ordered dithering and tile [`pattern`]s
//! - The [`dirty`] row differ used to limit display transfers
//! - Pure procedural helpers in [`animation`] and [`shapes`]
//!
//! # Pixel layout
//!
//! Every buffer is row-major with `ceil(width / 8)` bytes per row. Pixel `(x, y)` lives in
//! byte `y * row_bytes + x / 8`, bit `7 - x % 8`, and a set bit is ink (black). Display
//! drivers depend on this layout; it must not change.
//!
//! [stipple]: https://crates.io/crates/stipple
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

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("stipple_common requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use kurbo as _;

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod animation;
pub mod bitplane;
pub mod dirty;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod mask;
pub mod math;
pub mod pattern;
pub mod shapes;
pub mod surface;

#[cfg(feature = "libm")]
pub use kurbo;

pub use error::BufferError;
pub use framebuffer::Framebuffer;
pub use geometry::{BLACK, Color, Point, PointF, Rect, WHITE};
pub use mask::MaskBuffer;
pub use pattern::Pattern;
pub use surface::Surface;
