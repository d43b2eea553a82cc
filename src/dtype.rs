use std::fmt;
use std::str::FromStr;

use crate::InvError;

/// Storage type of a strided buffer.
///
/// Each variant names one concrete element representation. The enumeration
/// value (`as u8`) is stable and can be used as a compact tag in place of the
/// string name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum DType {
    Float64 = 0,
    Float32 = 1,
    Int32 = 2,
    Int16 = 3,
    Int8 = 4,
    Uint32 = 5,
    Uint16 = 6,
    Uint8 = 7,
    /// Unsigned 8-bit storage with clamping semantics on conversion.
    Uint8c = 8,
    /// Boxed numeric storage (`f64` behind an array-like), no narrowing.
    Generic = 9,
}

impl DType {
    /// All dtypes in enumeration order.
    pub const ALL: [DType; 10] = [
        DType::Float64,
        DType::Float32,
        DType::Int32,
        DType::Int16,
        DType::Int8,
        DType::Uint32,
        DType::Uint16,
        DType::Uint8,
        DType::Uint8c,
        DType::Generic,
    ];

    /// Canonical string name.
    pub fn as_str(self) -> &'static str {
        match self {
            DType::Float64 => "float64",
            DType::Float32 => "float32",
            DType::Int32 => "int32",
            DType::Int16 => "int16",
            DType::Int8 => "int8",
            DType::Uint32 => "uint32",
            DType::Uint16 => "uint16",
            DType::Uint8 => "uint8",
            DType::Uint8c => "uint8c",
            DType::Generic => "generic",
        }
    }

    /// Resolve an enumeration value.
    pub fn from_enum(value: i64) -> Option<DType> {
        usize::try_from(value)
            .ok()
            .and_then(|i| DType::ALL.get(i).copied())
    }

    #[inline]
    pub fn to_enum(self) -> u8 {
        self as u8
    }

    /// Size of one element in bytes, `None` for boxed storage.
    pub fn bytes_per_element(self) -> Option<usize> {
        match self {
            DType::Float64 => Some(8),
            DType::Float32 | DType::Int32 | DType::Uint32 => Some(4),
            DType::Int16 | DType::Uint16 => Some(2),
            DType::Int8 | DType::Uint8 | DType::Uint8c => Some(1),
            DType::Generic => None,
        }
    }

    #[inline]
    pub fn is_floating_point(self) -> bool {
        matches!(self, DType::Float64 | DType::Float32)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DType {
    type Err = InvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DType::ALL
            .iter()
            .copied()
            .find(|dt| dt.as_str() == s)
            .ok_or_else(|| InvError::UnsupportedType(s.to_string()))
    }
}

impl TryFrom<i64> for DType {
    type Error = InvError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        DType::from_enum(value).ok_or_else(|| InvError::UnsupportedType(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_roundtrip() {
        for dt in DType::ALL {
            assert_eq!(dt.as_str().parse::<DType>().unwrap(), dt);
            assert_eq!(dt.to_string(), dt.as_str());
        }
    }

    #[test]
    fn test_enum_roundtrip() {
        for (i, dt) in DType::ALL.iter().enumerate() {
            assert_eq!(dt.to_enum() as usize, i);
            assert_eq!(DType::from_enum(i as i64), Some(*dt));
        }
        assert_eq!(DType::from_enum(-1), None);
        assert_eq!(DType::from_enum(10), None);
        assert!(DType::try_from(42i64).is_err());
    }

    #[test]
    fn test_unknown_names_rejected() {
        for bad in ["", "Float64", "float16", "complex128", "uint8 "] {
            match bad.parse::<DType>() {
                Err(InvError::UnsupportedType(name)) => assert_eq!(name, bad),
                other => panic!("unexpected: {other:?}"),
            }
        }
    }

    #[test]
    fn test_bytes_per_element() {
        assert_eq!(DType::Float64.bytes_per_element(), Some(8));
        assert_eq!(DType::Uint8c.bytes_per_element(), Some(1));
        assert_eq!(DType::Generic.bytes_per_element(), None);
        assert!(DType::Float32.is_floating_point());
        assert!(!DType::Int16.is_floating_point());
    }
}
