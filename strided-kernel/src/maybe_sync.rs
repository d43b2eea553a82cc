//! Thread-safety bounds for the slice kernel.
//!
//! The threaded walk shares the map closure across rayon tasks and moves
//! element pointers between them, so with `parallel` the closure must be
//! `Sync` and the element types `Send + Sync`. Without `parallel` the walk
//! stays on the calling thread and both markers hold for every type.

#[cfg(feature = "parallel")]
mod imp {
    /// `Sync` when the walk may be split across threads.
    pub trait MaybeSync: Sync {}
    impl<T: Sync + ?Sized> MaybeSync for T {}

    /// `Send + Sync` when the walk may be split across threads.
    pub trait MaybeSendSync: Send + Sync {}
    impl<T: Send + Sync + ?Sized> MaybeSendSync for T {}
}

#[cfg(not(feature = "parallel"))]
mod imp {
    pub trait MaybeSync {}
    impl<T: ?Sized> MaybeSync for T {}

    pub trait MaybeSendSync {}
    impl<T: ?Sized> MaybeSendSync for T {}
}

pub use imp::{MaybeSendSync, MaybeSync};
