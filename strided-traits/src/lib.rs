//! Shared traits for the strided elementwise kernels.
//!
//! This crate provides the scalar-level trait definitions shared across
//! `strided-view`, `strided-kernel`, and the `strided-inv` front crate.
//!
//! External crates can depend on `strided-traits` to implement traits for
//! their own storage types without orphan rule violations.

pub mod scalar;

pub use scalar::{inv, invf, Reciprocal};
