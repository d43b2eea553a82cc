//! Strided elementwise kernels.
//!
//! Every kernel in this crate walks one logical index range `0..n` over a
//! source and a destination buffer, each addressed by its own signed stride.
//! Negative strides start at the far end of the span and walk back toward
//! index 0, so `map_into(n, x, -1, y, 1, f)` writes `f(x)` reversed into `y`.
//!
//! # Kernels
//!
//! - [`map_into`]: unary map between any [`ArrayLike`] / [`ArrayLikeMut`] pair
//! - [`map_slice_into`]: the same walk specialized to contiguous slices, with a
//!   unit-stride fast path and (with the `parallel` feature) rayon threading
//!   for long walks
//!
//! Both kernels validate the full span of both buffers before touching the
//! destination, so an error never leaves a partially written output.

mod map;
mod maybe_sync;
#[cfg(feature = "parallel")]
mod threading;

pub use map::{map_into, map_slice_into};
pub use maybe_sync::{MaybeSendSync, MaybeSync};
pub use strided_view::{ArrayLike, ArrayLikeMut, GenericArray, Result, StridedError};

/// Minimum walk length to justify multi-threaded execution.
pub const MINTHREADLENGTH: usize = 1 << 15;
