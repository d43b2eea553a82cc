//! Bounds arithmetic for one-dimensional strided walks.
//!
//! A walk of `n` elements with stride `s` touches the indices
//! `start, start + s, ..., start + (n-1)*s`, where `start` is `0` for
//! `s >= 0` and `(n-1)*|s|` for `s < 0`. Every touched index lies inside
//! `[0, (n-1)*|s|]`, so a buffer is large enough iff its length is at least
//! the span `(n-1)*|s| + 1`.

use crate::{Result, StridedError};

/// Number of elements a walk of `n` elements with `stride` spans.
///
/// Zero for `n == 0`; `1` for a zero stride.
pub fn required_span(n: usize, stride: isize) -> Result<usize> {
    if n == 0 {
        return Ok(0);
    }
    let span = (n - 1)
        .checked_mul(stride.unsigned_abs())
        .and_then(|end| end.checked_add(1))
        .ok_or(StridedError::OffsetOverflow)?;
    // The walk advances with signed arithmetic.
    if span > isize::MAX as usize {
        return Err(StridedError::OffsetOverflow);
    }
    Ok(span)
}

/// First index visited by a walk of `n` elements with `stride`.
///
/// Callers must have validated the span with [`required_span`].
#[inline]
pub fn start_index(n: usize, stride: isize) -> usize {
    if stride >= 0 || n == 0 {
        0
    } else {
        (n - 1) * stride.unsigned_abs()
    }
}

/// Check that a buffer of `len` elements covers the walk.
pub fn validate_len(len: usize, n: usize, stride: isize) -> Result<()> {
    let required = required_span(n, stride)?;
    if len < required {
        return Err(StridedError::InsufficientLength { len, required });
    }
    Ok(())
}

/// Iterator over the indices a strided walk visits, in walk order.
#[derive(Debug, Clone)]
pub struct StridedIndices {
    next: isize,
    stride: isize,
    remaining: usize,
}

impl StridedIndices {
    /// Indices of a walk over a buffer of `len` elements.
    pub fn new(len: usize, n: usize, stride: isize) -> Result<Self> {
        validate_len(len, n, stride)?;
        Ok(Self {
            next: start_index(n, stride) as isize,
            stride,
            remaining: n,
        })
    }
}

impl Iterator for StridedIndices {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.next as usize;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += self.stride;
        }
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StridedIndices {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_span() {
        assert_eq!(required_span(0, 5).unwrap(), 0);
        assert_eq!(required_span(1, 5).unwrap(), 1);
        assert_eq!(required_span(3, 2).unwrap(), 5);
        assert_eq!(required_span(3, -2).unwrap(), 5);
        assert_eq!(required_span(4, 0).unwrap(), 1);
    }

    #[test]
    fn test_required_span_overflow() {
        let err = required_span(usize::MAX, 2).unwrap_err();
        assert_eq!(err, StridedError::OffsetOverflow);
        let err = required_span(3, isize::MIN).unwrap_err();
        assert_eq!(err, StridedError::OffsetOverflow);
    }

    #[test]
    fn test_start_index() {
        assert_eq!(start_index(3, 2), 0);
        assert_eq!(start_index(3, -2), 4);
        assert_eq!(start_index(3, 0), 0);
        assert_eq!(start_index(0, -2), 0);
    }

    #[test]
    fn test_validate_len() {
        assert!(validate_len(5, 3, 2).is_ok());
        assert!(validate_len(0, 0, 7).is_ok());
        match validate_len(4, 3, -2) {
            Err(StridedError::InsufficientLength { len, required }) => {
                assert_eq!(len, 4);
                assert_eq!(required, 5);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_indices_forward_backward_zero() {
        let fwd: Vec<usize> = StridedIndices::new(5, 3, 2).unwrap().collect();
        assert_eq!(fwd, vec![0, 2, 4]);
        let bwd: Vec<usize> = StridedIndices::new(5, 3, -2).unwrap().collect();
        assert_eq!(bwd, vec![4, 2, 0]);
        let zero: Vec<usize> = StridedIndices::new(1, 3, 0).unwrap().collect();
        assert_eq!(zero, vec![0, 0, 0]);
        assert_eq!(StridedIndices::new(5, 3, -1).unwrap().len(), 3);
    }

    #[test]
    fn test_indices_reject_short_buffer() {
        assert!(StridedIndices::new(4, 3, 2).is_err());
    }
}
