//! Dynamically typed call interface.
//!
//! Bindings that receive loosely typed values (scripting hosts, FFI shims)
//! go through [`call`], which checks arity, then each positional argument,
//! before handing off to [`inv`](crate::inv).

use crate::buffer::{Buffer, BufferMut};
use crate::dtype::DType;
use crate::{inv, InvError, Result};

/// Number of positional arguments [`call`] accepts.
pub const ARITY: usize = 7;

/// One loosely typed call argument.
pub enum Arg<'a> {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(&'a str),
    Null,
    Array(Buffer<'a>),
    ArrayMut(BufferMut<'a>),
}

impl Arg<'_> {
    /// Short name of the argument's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Int(_) => "integer",
            Arg::Float(_) => "float",
            Arg::Bool(_) => "boolean",
            Arg::Str(_) => "string",
            Arg::Null => "null",
            Arg::Array(_) => "array",
            Arg::ArrayMut(_) => "mutable array",
        }
    }
}

impl std::fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arg::Int(v) => write!(f, "Int({v})"),
            Arg::Float(v) => write!(f, "Float({v})"),
            Arg::Bool(v) => write!(f, "Bool({v})"),
            Arg::Str(v) => write!(f, "Str({v:?})"),
            Arg::Null => f.write_str("Null"),
            Arg::Array(b) => write!(f, "Array({b:?})"),
            Arg::ArrayMut(b) => write!(f, "ArrayMut({b:?})"),
        }
    }
}

impl<'a> From<Buffer<'a>> for Arg<'a> {
    fn from(b: Buffer<'a>) -> Self {
        Arg::Array(b)
    }
}

impl<'a> From<BufferMut<'a>> for Arg<'a> {
    fn from(b: BufferMut<'a>) -> Self {
        Arg::ArrayMut(b)
    }
}

impl<'a> From<DType> for Arg<'a> {
    fn from(dt: DType) -> Self {
        Arg::Str(dt.as_str())
    }
}

impl From<i64> for Arg<'_> {
    fn from(v: i64) -> Self {
        Arg::Int(v)
    }
}

/// Apply the strided inverse to seven positional arguments:
/// `(n, input_dtype, input, stride_in, output_dtype, output, stride_out)`.
///
/// - any other argument count fails with [`InvError::Arity`] before any
///   argument is inspected,
/// - `n` and the strides must be integers; a float is accepted only when it
///   is finite and integral,
/// - dtypes are canonical names or enumeration values,
/// - `input` must be an array (a mutable array is read through), `output` a
///   mutable array.
///
/// Positions in [`InvError::TypeArgument`] are zero-based.
pub fn call(args: Vec<Arg<'_>>) -> Result<BufferMut<'_>> {
    let [n, input_dtype, input, stride_in, output_dtype, output, stride_out]: [Arg<'_>; ARITY] =
        args.try_into().map_err(|args: Vec<Arg<'_>>| InvError::Arity {
            expected: ARITY,
            found: args.len(),
        })?;

    let n = integer(0, &n)?;
    let input_dtype = dtype(&input_dtype)?;
    let input = input_buffer(2, input)?;
    let stride_in = integer(3, &stride_in)?;
    let output_dtype = dtype(&output_dtype)?;
    let output = output_buffer(5, output)?;
    let stride_out = integer(6, &stride_out)?;

    inv(n, input_dtype, input, stride_in, output_dtype, output, stride_out)
}

fn integer(position: usize, arg: &Arg<'_>) -> Result<isize> {
    let value = match *arg {
        Arg::Int(v) => isize::try_from(v).ok(),
        // An integral float in isize range converts exactly.
        Arg::Float(v) if v.is_finite() && v.fract() == 0.0 => {
            if v >= isize::MIN as f64 && v < isize::MAX as f64 {
                Some(v as isize)
            } else {
                None
            }
        }
        _ => None,
    };
    value.ok_or_else(|| InvError::TypeArgument {
        position,
        reason: format!("expected an integer, found {arg:?}"),
    })
}

fn dtype(arg: &Arg<'_>) -> Result<DType> {
    match *arg {
        Arg::Str(name) => name.parse(),
        Arg::Int(value) => DType::try_from(value),
        _ => Err(InvError::UnsupportedType(arg.kind().to_string())),
    }
}

fn input_buffer<'a>(position: usize, arg: Arg<'a>) -> Result<Buffer<'a>> {
    match arg {
        Arg::Array(b) => Ok(b),
        Arg::ArrayMut(b) => Ok(b.into_buffer()),
        other => Err(InvError::TypeArgument {
            position,
            reason: format!("expected an array, found {}", other.kind()),
        }),
    }
}

fn output_buffer<'a>(position: usize, arg: Arg<'a>) -> Result<BufferMut<'a>> {
    match arg {
        Arg::ArrayMut(b) => Ok(b),
        other => Err(InvError::TypeArgument {
            position,
            reason: format!("expected a mutable array, found {}", other.kind()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn base_args<'a>(x: &'a [f64], y: &'a mut [f64]) -> Vec<Arg<'a>> {
        vec![
            Arg::Int(x.len() as i64),
            Arg::Str("float64"),
            Arg::Array(x.into()),
            Arg::Int(1),
            Arg::Str("float64"),
            Arg::ArrayMut(y.into()),
            Arg::Int(1),
        ]
    }

    #[test]
    fn test_call_roundtrip() {
        let x = [2.0, 4.0];
        let mut y = [0.0; 2];
        call(base_args(&x, &mut y)).unwrap();
        assert_eq!(y, [0.5, 0.25]);
    }

    #[test]
    fn test_arity_checked_before_arguments() {
        assert_eq!(call(vec![]).unwrap_err().kind(), ErrorKind::Arity);

        let x = [2.0; 10];
        let mut y = [0.0; 10];
        let mut args = base_args(&x, &mut y);
        args.insert(4, Arg::Int(0));
        args.push(Arg::Int(0));
        match call(args).unwrap_err() {
            InvError::Arity { expected, found } => assert_eq!((expected, found), (7, 9)),
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(y, [0.0; 10]);
    }

    #[test]
    fn test_integer_arguments() {
        assert_eq!(integer(0, &Arg::Int(-3)).unwrap(), -3);
        assert_eq!(integer(0, &Arg::Float(4.0)).unwrap(), 4);
        for bad in [
            Arg::Float(2.5),
            Arg::Float(f64::NAN),
            Arg::Float(f64::INFINITY),
            Arg::Bool(true),
            Arg::Str("5"),
            Arg::Null,
        ] {
            let err = integer(6, &bad).unwrap_err();
            match err {
                InvError::TypeArgument { position, .. } => assert_eq!(position, 6),
                other => panic!("unexpected: {other:?}"),
            }
        }
    }

    #[test]
    fn test_dtype_arguments() {
        assert_eq!(dtype(&Arg::Str("uint8c")).unwrap(), DType::Uint8c);
        assert_eq!(dtype(&Arg::Int(1)).unwrap(), DType::Float32);
        assert_eq!(dtype(&DType::Int16.into()).unwrap(), DType::Int16);
        for bad in [Arg::Float(2.5), Arg::Bool(false), Arg::Null, Arg::Str("beep"), Arg::Int(99)] {
            assert_eq!(dtype(&bad).unwrap_err().kind(), ErrorKind::UnsupportedType);
        }
    }

    #[test]
    fn test_mutable_array_accepted_as_input() {
        let mut x = [2.0, 8.0];
        let mut y = [0.0; 2];
        call(vec![
            Arg::Int(2),
            Arg::Str("float64"),
            Arg::ArrayMut((&mut x[..]).into()),
            Arg::Int(1),
            Arg::Str("float64"),
            Arg::ArrayMut((&mut y[..]).into()),
            Arg::Int(1),
        ])
        .unwrap();
        assert_eq!(y, [0.5, 0.125]);
        assert_eq!(x, [2.0, 8.0]);
    }

    #[test]
    fn test_output_must_be_mutable() {
        let x = [2.0; 3];
        let y = [0.0; 3];
        let args = vec![
            Arg::Int(3),
            Arg::Str("float64"),
            Arg::Array((&x[..]).into()),
            Arg::Int(1),
            Arg::Str("float64"),
            Arg::Array((&y[..]).into()),
            Arg::Int(1),
        ];
        match call(args).unwrap_err() {
            InvError::TypeArgument { position, .. } => assert_eq!(position, 5),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
