//! Scalar multiplicative inverse and its storage conversions.

use num_traits::Inv;

/// Multiplicative inverse of a double, `1/x`.
///
/// Follows IEEE-754 division: `inv(0.0)` is `+inf`, `inv(-0.0)` is `-inf`,
/// `inv(±inf)` is `±0.0` and `inv(NaN)` is NaN.
#[inline(always)]
pub fn inv(x: f64) -> f64 {
    x.inv()
}

/// Single-precision variant of [`inv`].
#[inline(always)]
pub fn invf(x: f32) -> f32 {
    x.inv()
}

/// Inverse of a storage element, delivered in the storage type `D`.
///
/// An implementation exists for every `(source, destination)` pair the
/// inverse kernels support. The inverse is computed at the highest precision
/// the pair implies and then narrowed to `D`:
///
/// - `f32 -> f32` is computed in single precision,
/// - everything else is widened to `f64` first.
///
/// Integer destinations are deliberately absent: `1/x` of an integer is not
/// representable as an integer.
pub trait Reciprocal<D>: Copy {
    fn reciprocal(self) -> D;
}

macro_rules! impl_reciprocal_f64 {
    ($($src:ty),* $(,)?) => {
        $(impl Reciprocal<f64> for $src {
            #[inline(always)]
            fn reciprocal(self) -> f64 {
                inv(f64::from(self))
            }
        })*
    };
}

// Narrowing path: 16-bit and smaller integers are exactly representable in
// f32, so rounding the double result once is the only loss.
macro_rules! impl_reciprocal_f32 {
    ($($src:ty),* $(,)?) => {
        $(impl Reciprocal<f32> for $src {
            #[inline(always)]
            fn reciprocal(self) -> f32 {
                inv(f64::from(self)) as f32
            }
        })*
    };
}

impl_reciprocal_f64!(f64, f32, i32, i16, i8, u32, u16, u8);
impl_reciprocal_f32!(i16, i8, u16, u8);

impl Reciprocal<f32> for f32 {
    #[inline(always)]
    fn reciprocal(self) -> f32 {
        invf(self)
    }
}
