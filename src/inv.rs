//! The strided inverse entry points.

use strided_kernel::map_into;
use strided_traits::Reciprocal;
use strided_view::{layout::validate_len, ArrayLike, ArrayLikeMut};
use tracing::{debug, trace};

use crate::buffer::{Buffer, BufferMut};
use crate::dispatch;
use crate::dtype::DType;
use crate::error::Operand;
use crate::{InvError, Result};

/// Compute `output[j(i)] = 1 / input[k(i)]` for `i` in `0..n`.
///
/// `k(i)` and `j(i)` walk each buffer with its own signed stride: a
/// non-negative stride starts at index 0, a negative stride starts at
/// `(n-1)*|stride|` and walks back toward 0, and a zero stride revisits
/// index 0. The inverse is computed at the working precision of the
/// `(input_dtype, output_dtype)` pair and stored as `output_dtype`.
///
/// Returns `output` unchanged when `n <= 0`. Otherwise every check runs
/// before the first write:
///
/// - the dtype pair must have a kernel ([`InvError::UnsupportedPair`]),
/// - each buffer must hold the storage its dtype names
///   ([`InvError::TypeArgument`]),
/// - each buffer must cover `(n-1)*|stride| + 1` elements, input first
///   ([`InvError::Bounds`]).
///
/// # Example
/// ```
/// use strided_inv::{inv, DType};
///
/// let x = [1.0, 2.0, 4.0, 8.0, 16.0];
/// let mut y = [0.0; 5];
/// inv(3, DType::Float64, (&x[..]).into(), 2, DType::Float64, (&mut y[..]).into(), 1).unwrap();
/// assert_eq!(y, [1.0, 0.25, 0.0625, 0.0, 0.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn inv<'a>(
    n: isize,
    input_dtype: DType,
    input: Buffer<'_>,
    stride_in: isize,
    output_dtype: DType,
    mut output: BufferMut<'a>,
    stride_out: isize,
) -> Result<BufferMut<'a>> {
    let kernel = dispatch::lookup(input_dtype, output_dtype).ok_or(InvError::UnsupportedPair {
        input: input_dtype,
        output: output_dtype,
    })?;
    check_storage(Operand::Input, input_dtype, input.dtype())?;
    check_storage(Operand::Output, output_dtype, output.dtype())?;

    if n <= 0 {
        trace!(n, "non-positive length, output left unchanged");
        return Ok(output);
    }
    let n = n as usize;
    validate_len(input.len(), n, stride_in).map_err(|source| InvError::Bounds {
        operand: Operand::Input,
        source,
    })?;
    validate_len(output.len(), n, stride_out).map_err(|source| InvError::Bounds {
        operand: Operand::Output,
        source,
    })?;

    debug!(
        n,
        input = %input_dtype,
        output = %output_dtype,
        stride_in,
        stride_out,
        "strided inverse"
    );
    kernel(n, &input, stride_in, &mut output, stride_out)?;
    Ok(output)
}

fn check_storage(operand: Operand, declared: DType, actual: DType) -> Result<()> {
    if declared != actual {
        return Err(InvError::TypeArgument {
            position: operand.position(),
            reason: format!("{operand} buffer holds {actual} storage, declared as {declared}"),
        });
    }
    Ok(())
}

/// Statically typed strided inverse over any array-like pair.
///
/// Same walk, bounds checks, and `n <= 0` behaviour as [`inv`], with the
/// `(S, D)` pair fixed at compile time by the [`Reciprocal`] impls. Returns
/// the `output` reference it was given.
///
/// # Example
/// ```
/// use strided_inv::inv_typed;
///
/// let x: [i16; 3] = [2, 4, 8];
/// let mut y = [0.0f32; 3];
/// inv_typed(3, &x, -1, &mut y, 1).unwrap();
/// assert_eq!(y, [0.125, 0.25, 0.5]);
/// ```
pub fn inv_typed<'y, S, D, X, Y>(
    n: isize,
    input: &X,
    stride_in: isize,
    output: &'y mut Y,
    stride_out: isize,
) -> Result<&'y mut Y>
where
    S: Reciprocal<D>,
    X: ArrayLike<S> + ?Sized,
    Y: ArrayLikeMut<D> + ?Sized,
{
    if n <= 0 {
        trace!(n, "non-positive length, output left unchanged");
        return Ok(output);
    }
    let n = n as usize;
    validate_len(input.len(), n, stride_in).map_err(|source| InvError::Bounds {
        operand: Operand::Input,
        source,
    })?;
    validate_len(output.len(), n, stride_out).map_err(|source| InvError::Bounds {
        operand: Operand::Output,
        source,
    })?;
    map_into(n, input, stride_in, &mut *output, stride_out, |v: S| -> D {
        v.reciprocal()
    })
    .map_err(|e| InvError::Internal(e.to_string()))?;
    Ok(output)
}
