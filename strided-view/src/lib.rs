//! Array-like buffers and one-dimensional strided layouts.
//!
//! This crate holds the data-model half of the strided elementwise kernels:
//! the narrow capability interface every buffer must satisfy and the bounds
//! arithmetic shared by all kernels.
//!
//! # Core Types
//!
//! - [`ArrayLike`] / [`ArrayLikeMut`]: "indexable by non-negative integer up to
//!   a known length", implemented for slices, arrays, `Vec` and
//!   [`GenericArray`]
//! - [`GenericArray`]: a plain record with a `length` and integer-keyed
//!   numeric fields
//! - [`StridedIndices`]: the index sequence visited by a strided walk
//!
//! # Views
//!
//! Offset views are ordinary subslices. `&data[3..]` shares the backing
//! storage and is addressed from index 0 by every kernel.

mod array_like;
mod generic_array;
pub mod layout;

pub use array_like::{ArrayLike, ArrayLikeMut};
pub use generic_array::GenericArray;
pub use layout::{required_span, start_index, validate_len, StridedIndices};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while validating a strided access pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StridedError {
    /// The buffer is shorter than the span touched by the walk.
    #[error("insufficient length: buffer has {len} elements but the access pattern spans {required}")]
    InsufficientLength { len: usize, required: usize },

    /// Integer overflow while computing the span of the walk.
    #[error("offset overflow while computing strided span")]
    OffsetOverflow,
}

/// Result type for strided layout operations.
pub type Result<T> = std::result::Result<T, StridedError>;
