//! Type-erased strided buffers.
//!
//! [`Buffer`] and [`BufferMut`] hold a borrowed buffer of one concrete
//! storage type, tagged by variant. Typed variants borrow slices, so offset
//! views are plain subslices (`&mut data[3..]`); the `Generic` variant
//! borrows any array-like of `f64`, such as a [`GenericArray`].

use std::fmt;

use strided_view::{ArrayLike, ArrayLikeMut, GenericArray};

use crate::dtype::DType;

/// Read-only buffer, tagged by storage type.
#[derive(Clone, Copy)]
pub enum Buffer<'a> {
    Float64(&'a [f64]),
    Float32(&'a [f32]),
    Int32(&'a [i32]),
    Int16(&'a [i16]),
    Int8(&'a [i8]),
    Uint32(&'a [u32]),
    Uint16(&'a [u16]),
    Uint8(&'a [u8]),
    Uint8c(&'a [u8]),
    Generic(&'a dyn ArrayLike<f64>),
}

/// Writable buffer, tagged by storage type.
pub enum BufferMut<'a> {
    Float64(&'a mut [f64]),
    Float32(&'a mut [f32]),
    Int32(&'a mut [i32]),
    Int16(&'a mut [i16]),
    Int8(&'a mut [i8]),
    Uint32(&'a mut [u32]),
    Uint16(&'a mut [u16]),
    Uint8(&'a mut [u8]),
    Uint8c(&'a mut [u8]),
    Generic(&'a mut dyn ArrayLikeMut<f64>),
}

macro_rules! for_each_variant {
    ($self:expr, $ty:ident, $b:ident => $body:expr) => {
        match $self {
            $ty::Float64($b) => $body,
            $ty::Float32($b) => $body,
            $ty::Int32($b) => $body,
            $ty::Int16($b) => $body,
            $ty::Int8($b) => $body,
            $ty::Uint32($b) => $body,
            $ty::Uint16($b) => $body,
            $ty::Uint8($b) => $body,
            $ty::Uint8c($b) => $body,
            $ty::Generic($b) => $body,
        }
    };
}

macro_rules! dtype_of {
    ($self:expr, $ty:ident) => {
        match $self {
            $ty::Float64(_) => DType::Float64,
            $ty::Float32(_) => DType::Float32,
            $ty::Int32(_) => DType::Int32,
            $ty::Int16(_) => DType::Int16,
            $ty::Int8(_) => DType::Int8,
            $ty::Uint32(_) => DType::Uint32,
            $ty::Uint16(_) => DType::Uint16,
            $ty::Uint8(_) => DType::Uint8,
            $ty::Uint8c(_) => DType::Uint8c,
            $ty::Generic(_) => DType::Generic,
        }
    };
}

impl<'a> Buffer<'a> {
    /// Storage type of the borrowed buffer.
    pub fn dtype(&self) -> DType {
        dtype_of!(self, Buffer)
    }

    /// Number of addressable elements.
    pub fn len(&self) -> usize {
        for_each_variant!(self, Buffer, b => b.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read element `index` widened to `f64`.
    ///
    /// Returns `None` past the end.
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        if index >= self.len() {
            return None;
        }
        Some(match self {
            Buffer::Float64(b) => b[index],
            Buffer::Float32(b) => f64::from(b[index]),
            Buffer::Int32(b) => f64::from(b[index]),
            Buffer::Int16(b) => f64::from(b[index]),
            Buffer::Int8(b) => f64::from(b[index]),
            Buffer::Uint32(b) => f64::from(b[index]),
            Buffer::Uint16(b) => f64::from(b[index]),
            Buffer::Uint8(b) | Buffer::Uint8c(b) => f64::from(b[index]),
            Buffer::Generic(b) => b.get(index),
        })
    }
}

impl<'a> BufferMut<'a> {
    /// Storage type of the borrowed buffer.
    pub fn dtype(&self) -> DType {
        dtype_of!(self, BufferMut)
    }

    /// Number of addressable elements.
    pub fn len(&self) -> usize {
        for_each_variant!(self, BufferMut, b => b.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Give up write access, keeping the borrow and the storage tag.
    pub fn into_buffer(self) -> Buffer<'a> {
        match self {
            BufferMut::Float64(b) => Buffer::Float64(b),
            BufferMut::Float32(b) => Buffer::Float32(b),
            BufferMut::Int32(b) => Buffer::Int32(b),
            BufferMut::Int16(b) => Buffer::Int16(b),
            BufferMut::Int8(b) => Buffer::Int8(b),
            BufferMut::Uint32(b) => Buffer::Uint32(b),
            BufferMut::Uint16(b) => Buffer::Uint16(b),
            BufferMut::Uint8(b) => Buffer::Uint8(b),
            BufferMut::Uint8c(b) => Buffer::Uint8c(b),
            BufferMut::Generic(b) => Buffer::Generic(b),
        }
    }

    /// Address of the borrowed storage, for identity checks.
    pub fn data_ptr(&self) -> *const () {
        match self {
            BufferMut::Float64(b) => b.as_ptr() as *const (),
            BufferMut::Float32(b) => b.as_ptr() as *const (),
            BufferMut::Int32(b) => b.as_ptr() as *const (),
            BufferMut::Int16(b) => b.as_ptr() as *const (),
            BufferMut::Int8(b) => b.as_ptr() as *const (),
            BufferMut::Uint32(b) => b.as_ptr() as *const (),
            BufferMut::Uint16(b) => b.as_ptr() as *const (),
            BufferMut::Uint8(b) | BufferMut::Uint8c(b) => b.as_ptr() as *const (),
            BufferMut::Generic(b) => std::ptr::addr_of!(**b).cast::<()>(),
        }
    }

    /// Read element `index` widened to `f64`.
    ///
    /// Returns `None` past the end.
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        if index >= self.len() {
            return None;
        }
        Some(match self {
            BufferMut::Float64(b) => b[index],
            BufferMut::Float32(b) => f64::from(b[index]),
            BufferMut::Int32(b) => f64::from(b[index]),
            BufferMut::Int16(b) => f64::from(b[index]),
            BufferMut::Int8(b) => f64::from(b[index]),
            BufferMut::Uint32(b) => f64::from(b[index]),
            BufferMut::Uint16(b) => f64::from(b[index]),
            BufferMut::Uint8(b) | BufferMut::Uint8c(b) => f64::from(b[index]),
            BufferMut::Generic(b) => b.get(index),
        })
    }
}

impl fmt::Debug for Buffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("dtype", &self.dtype())
            .field("len", &self.len())
            .finish()
    }
}

impl fmt::Debug for BufferMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferMut")
            .field("dtype", &self.dtype())
            .field("len", &self.len())
            .finish()
    }
}

macro_rules! impl_from_slice {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a [$t]> for Buffer<'a> {
                fn from(b: &'a [$t]) -> Self {
                    Buffer::$variant(b)
                }
            }

            impl<'a> From<&'a mut [$t]> for BufferMut<'a> {
                fn from(b: &'a mut [$t]) -> Self {
                    BufferMut::$variant(b)
                }
            }
        )*
    };
}

// `u8` defaults to `Uint8`; build `Uint8c` explicitly.
impl_from_slice!(
    f64 => Float64,
    f32 => Float32,
    i32 => Int32,
    i16 => Int16,
    i8 => Int8,
    u32 => Uint32,
    u16 => Uint16,
    u8 => Uint8,
);

impl<'a> From<&'a GenericArray> for Buffer<'a> {
    fn from(b: &'a GenericArray) -> Self {
        Buffer::Generic(b)
    }
}

impl<'a> From<&'a mut GenericArray> for BufferMut<'a> {
    fn from(b: &'a mut GenericArray) -> Self {
        BufferMut::Generic(b)
    }
}
