//! The array-like capability: a known length plus integer indexing.

/// Read access to a buffer of `T` addressed by `0..len()`.
///
/// Callers validate indices against [`len`](ArrayLike::len) before calling
/// [`get`](ArrayLike::get); implementations may panic on out-of-range keys.
pub trait ArrayLike<T> {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> T;
}

/// Write access on top of [`ArrayLike`].
pub trait ArrayLikeMut<T>: ArrayLike<T> {
    fn set(&mut self, index: usize, value: T);
}

impl<T: Copy> ArrayLike<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy> ArrayLikeMut<T> for [T] {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T: Copy, const N: usize> ArrayLike<T> for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy, const N: usize> ArrayLikeMut<T> for [T; N] {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T: Copy> ArrayLike<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy> ArrayLikeMut<T> for Vec<T> {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

// Borrowed buffers are array-like too, so `&[f64]` can stand behind a
// `dyn ArrayLike<f64>`.
impl<T, A: ArrayLike<T> + ?Sized> ArrayLike<T> for &A {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        (**self).get(index)
    }
}

impl<T, A: ArrayLike<T> + ?Sized> ArrayLike<T> for &mut A {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        (**self).get(index)
    }
}

impl<T, A: ArrayLikeMut<T> + ?Sized> ArrayLikeMut<T> for &mut A {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        (**self).set(index, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_all<A: ArrayLike<f64> + ?Sized>(a: &A) -> f64 {
        (0..a.len()).map(|i| a.get(i)).sum()
    }

    #[test]
    fn test_slice_vec_array_agree() {
        let v = vec![1.0, 2.0, 3.0];
        let arr = [1.0, 2.0, 3.0];
        assert_eq!(sum_all(&v), 6.0);
        assert_eq!(sum_all(&arr), 6.0);
        assert_eq!(sum_all(&v[1..]), 5.0);
    }

    #[test]
    fn test_set_through_subslice_hits_backing() {
        let mut backing = [0u8; 5];
        {
            let view = &mut backing[2..];
            ArrayLikeMut::set(view, 1, 7);
        }
        assert_eq!(backing, [0, 0, 0, 7, 0]);
    }

    #[test]
    fn test_dyn_over_borrowed_slice() {
        let data = [4.0, 5.0];
        let slice: &[f64] = &data;
        let dynamic: &dyn ArrayLike<f64> = &slice;
        assert_eq!(dynamic.len(), 2);
        assert_eq!(dynamic.get(1), 5.0);
        assert!(!dynamic.is_empty());
    }
}
