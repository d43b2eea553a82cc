//! Table-driven kernel dispatch over `(input, output)` dtype pairs.
//!
//! Every supported pair maps to one monomorphised instance of a strided map
//! kernel. Typed-to-typed pairs run the slice kernel (unit-stride fast path,
//! optional threading); pairs involving `generic` storage run the array-like
//! kernel through the trait object.

use strided_kernel::{map_into, map_slice_into};
use strided_traits::Reciprocal;

use crate::buffer::{Buffer, BufferMut};
use crate::dtype::DType;
use crate::{InvError, Result};

/// Signature shared by every entry of the dispatch table.
///
/// `n` is the validated logical length; both spans have been checked by the
/// caller.
pub(crate) type KernelFn = fn(usize, &Buffer<'_>, isize, &mut BufferMut<'_>, isize) -> Result<()>;

struct Kernel {
    input: DType,
    output: DType,
    run: KernelFn,
}

macro_rules! kernel_fn {
    ($name:ident, $input:ident($s:ty) => $output:ident($d:ty), $walk:ident) => {
        fn $name(
            n: usize,
            x: &Buffer<'_>,
            sx: isize,
            y: &mut BufferMut<'_>,
            sy: isize,
        ) -> Result<()> {
            match (x, y) {
                (Buffer::$input(x), BufferMut::$output(y)) => {
                    $walk(n, *x, sx, &mut **y, sy, |v: $s| -> $d { v.reciprocal() })
                        .map_err(|e| InvError::Internal(e.to_string()))
                }
                (x, y) => Err(InvError::Internal(format!(
                    "kernel {} -> {} called with {} -> {} storage",
                    DType::$input,
                    DType::$output,
                    x.dtype(),
                    y.dtype()
                ))),
            }
        }
    };
}

kernel_fn!(f64_f64, Float64(f64) => Float64(f64), map_slice_into);
kernel_fn!(f64_generic, Float64(f64) => Generic(f64), map_into);

kernel_fn!(f32_f32, Float32(f32) => Float32(f32), map_slice_into);
kernel_fn!(f32_f64, Float32(f32) => Float64(f64), map_slice_into);
kernel_fn!(f32_generic, Float32(f32) => Generic(f64), map_into);

kernel_fn!(i32_f64, Int32(i32) => Float64(f64), map_slice_into);
kernel_fn!(i32_generic, Int32(i32) => Generic(f64), map_into);

kernel_fn!(i16_f32, Int16(i16) => Float32(f32), map_slice_into);
kernel_fn!(i16_f64, Int16(i16) => Float64(f64), map_slice_into);
kernel_fn!(i16_generic, Int16(i16) => Generic(f64), map_into);

kernel_fn!(i8_f32, Int8(i8) => Float32(f32), map_slice_into);
kernel_fn!(i8_f64, Int8(i8) => Float64(f64), map_slice_into);
kernel_fn!(i8_generic, Int8(i8) => Generic(f64), map_into);

kernel_fn!(u32_f64, Uint32(u32) => Float64(f64), map_slice_into);
kernel_fn!(u32_generic, Uint32(u32) => Generic(f64), map_into);

kernel_fn!(u16_f32, Uint16(u16) => Float32(f32), map_slice_into);
kernel_fn!(u16_f64, Uint16(u16) => Float64(f64), map_slice_into);
kernel_fn!(u16_generic, Uint16(u16) => Generic(f64), map_into);

kernel_fn!(u8_f32, Uint8(u8) => Float32(f32), map_slice_into);
kernel_fn!(u8_f64, Uint8(u8) => Float64(f64), map_slice_into);
kernel_fn!(u8_generic, Uint8(u8) => Generic(f64), map_into);

kernel_fn!(u8c_f32, Uint8c(u8) => Float32(f32), map_slice_into);
kernel_fn!(u8c_f64, Uint8c(u8) => Float64(f64), map_slice_into);
kernel_fn!(u8c_generic, Uint8c(u8) => Generic(f64), map_into);

kernel_fn!(generic_generic, Generic(f64) => Generic(f64), map_into);

macro_rules! table {
    ($($input:ident => $output:ident : $run:ident),* $(,)?) => {
        &[$(Kernel { input: DType::$input, output: DType::$output, run: $run }),*]
    };
}

static KERNELS: &[Kernel] = table![
    Float64 => Float64 : f64_f64,
    Float64 => Generic : f64_generic,
    Float32 => Float32 : f32_f32,
    Float32 => Float64 : f32_f64,
    Float32 => Generic : f32_generic,
    Int32 => Float64 : i32_f64,
    Int32 => Generic : i32_generic,
    Int16 => Float32 : i16_f32,
    Int16 => Float64 : i16_f64,
    Int16 => Generic : i16_generic,
    Int8 => Float32 : i8_f32,
    Int8 => Float64 : i8_f64,
    Int8 => Generic : i8_generic,
    Uint32 => Float64 : u32_f64,
    Uint32 => Generic : u32_generic,
    Uint16 => Float32 : u16_f32,
    Uint16 => Float64 : u16_f64,
    Uint16 => Generic : u16_generic,
    Uint8 => Float32 : u8_f32,
    Uint8 => Float64 : u8_f64,
    Uint8 => Generic : u8_generic,
    Uint8c => Float32 : u8c_f32,
    Uint8c => Float64 : u8c_f64,
    Uint8c => Generic : u8c_generic,
    Generic => Generic : generic_generic,
];

/// Kernel for an `(input, output)` pair, if one exists.
pub(crate) fn lookup(input: DType, output: DType) -> Option<KernelFn> {
    KERNELS
        .iter()
        .find(|k| k.input == input && k.output == output)
        .map(|k| k.run)
}

/// Every `(input, output)` dtype pair with a kernel, in table order.
pub fn supported_pairs() -> impl Iterator<Item = (DType, DType)> {
    KERNELS.iter().map(|k| (k.input, k.output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pairs_are_unique() {
        let pairs: Vec<_> = supported_pairs().collect();
        let unique: HashSet<_> = pairs.iter().copied().collect();
        assert_eq!(pairs.len(), unique.len());
        assert_eq!(pairs.len(), 25);
    }

    #[test]
    fn test_no_integer_outputs() {
        for (_, output) in supported_pairs() {
            assert!(output.is_floating_point() || output == DType::Generic);
        }
    }

    #[test]
    fn test_every_input_reaches_generic() {
        for dt in DType::ALL {
            assert!(lookup(dt, DType::Generic).is_some(), "{dt} -> generic");
        }
    }

    #[test]
    fn test_missing_pairs() {
        assert!(lookup(DType::Float64, DType::Uint8).is_none());
        assert!(lookup(DType::Float64, DType::Float32).is_none());
        assert!(lookup(DType::Generic, DType::Float64).is_none());
        assert!(lookup(DType::Int32, DType::Float32).is_none());
    }

    #[test]
    fn test_kernel_rejects_mismatched_storage() {
        let run = lookup(DType::Float64, DType::Float64).unwrap();
        let x = [1.0f32];
        let mut y = [0.0f64];
        let err = run(1, &Buffer::from(&x[..]), 1, &mut BufferMut::from(&mut y[..]), 1)
            .unwrap_err();
        assert!(matches!(err, InvError::Internal(_)));
        assert_eq!(y, [0.0]);
    }
}
