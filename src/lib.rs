//! Strided elementwise multiplicative inverse.
//!
//! Computes `y = 1/x` elementwise from an input buffer into an output buffer,
//! each addressed with its own signed stride and its own storage type. It is
//! one member of the strided elementwise kernel family built on
//! [`strided_view`] (array-like buffers and bounds) and [`strided_kernel`]
//! (the index walk).
//!
//! # Entry points
//!
//! - [`inv`]: runtime dtype dispatch over type-erased [`Buffer`] / [`BufferMut`]
//! - [`inv_typed`]: compile-time dispatch over any array-like pair
//! - [`call`]: seven loosely typed positional [`Arg`]s, with arity and
//!   argument checking, for bindings
//!
//! # Example
//!
//! ```rust
//! use strided_inv::{inv, DType};
//!
//! // Reverse-read with stride -2, forward-write into an offset view.
//! let x = [1.0, 2.0, 4.0, 8.0, 16.0];
//! let mut backing = [0.0; 5];
//! inv(
//!     3,
//!     DType::Float64,
//!     (&x[..]).into(),
//!     -2,
//!     DType::Float64,
//!     (&mut backing[2..]).into(),
//!     1,
//! )
//! .unwrap();
//! assert_eq!(backing, [0.0, 0.0, 0.0625, 0.25, 1.0]);
//! ```
//!
//! # Supported dtype pairs
//!
//! See [`supported_pairs`]. Integer outputs are not supported; `generic`
//! output accepts every input.

mod args;
mod buffer;
mod dispatch;
mod dtype;
mod error;
mod inv;

pub use args::{call, Arg, ARITY};
pub use buffer::{Buffer, BufferMut};
pub use dispatch::supported_pairs;
pub use dtype::DType;
pub use error::{ErrorKind, InvError, Operand, Result};
pub use inv::{inv, inv_typed};

pub use strided_traits::{inv as scalar_inv, Reciprocal};
pub use strided_view::{ArrayLike, ArrayLikeMut, GenericArray};
