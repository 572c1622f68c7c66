// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while constructing buffers.

use thiserror::Error;

/// Errors that can occur when allocating a [`Framebuffer`](crate::Framebuffer) or
/// [`MaskBuffer`](crate::MaskBuffer).
///
/// Drawing itself never fails; see [`Surface`](crate::Surface) for how out-of-range
/// input degrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Width or height was zero or negative.
    #[error("invalid buffer dimensions ({width}x{height})")]
    InvalidDimensions {
        /// The requested width.
        width: i16,
        /// The requested height.
        height: i16,
    },
    /// The allocator could not provide the backing storage.
    #[error("failed to allocate {bytes} bytes for a buffer")]
    AllocationFailed {
        /// The number of bytes that were requested.
        bytes: usize,
    },
}
