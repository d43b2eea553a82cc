//! Rayon-based parallel execution for strided walks.
//!
//! A walk has no cross-iteration dependency, so the logical range `0..n` is
//! split recursively in halves with `rayon::join` until each piece is below
//! [`MINTHREADLENGTH`] or the thread budget is spent. Each piece then runs
//! the sequential inner loop on its own sub-range.

use crate::MINTHREADLENGTH;

/// A raw pointer wrapper that is `Send` + `Sync`.
///
/// # Safety
/// The caller must guarantee that the pointed-to data outlives the parallel
/// operation and that different tasks write disjoint elements.
pub(crate) struct SendPtr<T>(pub(crate) *mut T);

impl<T> Clone for SendPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SendPtr<T> {}

unsafe impl<T> Send for SendPtr<T> {}
unsafe impl<T> Sync for SendPtr<T> {}

impl<T> SendPtr<T> {
    pub(crate) fn as_ptr(self) -> *mut T {
        self.0
    }

    pub(crate) fn as_const(self) -> *const T {
        self.0 as *const T
    }
}

/// Recursive range splitting.
///
/// `f(begin, len)` is called once per leaf with a sub-range of
/// `begin..begin + len`; leaves partition the input range exactly.
pub(crate) fn walk_threaded<F>(begin: usize, len: usize, nthreads: usize, f: &F)
where
    F: Fn(usize, usize) + Sync,
{
    if nthreads <= 1 || len <= MINTHREADLENGTH {
        f(begin, len);
        return;
    }

    let half = len / 2;
    let nt_left = nthreads / 2;
    let nt_right = nthreads - nt_left;

    rayon::join(
        || walk_threaded(begin, half, nt_left, f),
        || walk_threaded(begin + half, len - half, nt_right, f),
    );
}
