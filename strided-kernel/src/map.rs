//! Unary map kernels: `dst[j(i)] = f(src[k(i)])` for `i` in `0..n`.

use strided_view::layout::{start_index, validate_len, StridedIndices};
use strided_view::{ArrayLike, ArrayLikeMut};

use crate::maybe_sync::{MaybeSendSync, MaybeSync};
use crate::Result;

#[cfg(feature = "parallel")]
use crate::threading::{walk_threaded, SendPtr};
#[cfg(feature = "parallel")]
use crate::MINTHREADLENGTH;

/// Map `f` over `n` strided elements of any array-like pair.
///
/// Index `i` of the walk reads `src` at `k0 + i*src_stride` and writes `dst`
/// at `j0 + i*dst_stride`, where a start index is `0` for a non-negative
/// stride and the far end of the span for a negative one. A zero stride
/// revisits index 0 on every step.
///
/// Both spans are validated before `dst` is touched.
pub fn map_into<S, D, X, Y>(
    n: usize,
    src: &X,
    src_stride: isize,
    dst: &mut Y,
    dst_stride: isize,
    f: impl Fn(S) -> D,
) -> Result<()>
where
    X: ArrayLike<S> + ?Sized,
    Y: ArrayLikeMut<D> + ?Sized,
{
    let src_indices = StridedIndices::new(src.len(), n, src_stride)?;
    let dst_indices = StridedIndices::new(dst.len(), n, dst_stride)?;
    for (k, j) in src_indices.zip(dst_indices) {
        dst.set(j, f(src.get(k)));
    }
    Ok(())
}

/// Unary inner loop: `dst[i*ds] = f(src[i*ss])` for `len` elements.
///
/// When both strides are 1 the loop runs over slices so LLVM can
/// auto-vectorize it.
///
/// # Safety
/// Every `dp + i*ds` and `sp + i*ss` for `i < len` must be in bounds.
#[inline(always)]
unsafe fn inner_loop_map1<S: Copy, D>(
    dp: *mut D,
    ds: isize,
    sp: *const S,
    ss: isize,
    len: usize,
    f: &impl Fn(S) -> D,
) {
    if ds == 1 && ss == 1 {
        let src = std::slice::from_raw_parts(sp, len);
        let dst = std::slice::from_raw_parts_mut(dp, len);
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d = f(*s);
        }
    } else {
        let mut dp = dp;
        let mut sp = sp;
        for _ in 0..len {
            *dp = f(*sp);
            dp = dp.wrapping_offset(ds);
            sp = sp.wrapping_offset(ss);
        }
    }
}

/// [`map_into`] specialized to contiguous slices.
///
/// Same walk and validation as [`map_into`]. With the `parallel` feature, a
/// walk longer than [`MINTHREADLENGTH`](crate::MINTHREADLENGTH) with a nonzero
/// destination stride is split across rayon threads; every task writes a
/// disjoint set of destination indices, so the result is identical to the
/// sequential walk. A zero destination stride always runs sequentially.
pub fn map_slice_into<S, D>(
    n: usize,
    src: &[S],
    src_stride: isize,
    dst: &mut [D],
    dst_stride: isize,
    f: impl Fn(S) -> D + MaybeSync,
) -> Result<()>
where
    S: Copy + MaybeSendSync,
    D: MaybeSendSync,
{
    validate_len(src.len(), n, src_stride)?;
    validate_len(dst.len(), n, dst_stride)?;
    if n == 0 {
        return Ok(());
    }

    let k0 = start_index(n, src_stride) as isize;
    let j0 = start_index(n, dst_stride) as isize;

    #[cfg(feature = "parallel")]
    {
        let nthreads = rayon::current_num_threads();
        if n > MINTHREADLENGTH && dst_stride != 0 && nthreads > 1 {
            tracing::trace!(n, nthreads, "splitting strided map across threads");
            let dst_send = SendPtr(dst.as_mut_ptr());
            let src_send = SendPtr(src.as_ptr() as *mut S);
            walk_threaded(0, n, nthreads, &|begin, len| {
                let b = begin as isize;
                unsafe {
                    let dp = dst_send.as_ptr().offset(j0 + b * dst_stride);
                    let sp = src_send.as_const().offset(k0 + b * src_stride);
                    inner_loop_map1(dp, dst_stride, sp, src_stride, len, &f);
                }
            });
            return Ok(());
        }
    }

    unsafe {
        let dp = dst.as_mut_ptr().offset(j0);
        let sp = src.as_ptr().offset(k0);
        inner_loop_map1(dp, dst_stride, sp, src_stride, n, &f);
    }
    Ok(())
}
