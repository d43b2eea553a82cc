use std::collections::BTreeMap;

use crate::{ArrayLike, ArrayLikeMut};

/// A plain record with a `length` and integer-keyed numeric fields.
///
/// This is the boxed storage behind the `generic` dtype: values are kept as
/// `f64` without narrowing, and keys inside `0..length` that were never
/// assigned read as NaN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericArray {
    length: usize,
    fields: BTreeMap<usize, f64>,
}

impl GenericArray {
    /// A record of `length` unassigned fields.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            fields: BTreeMap::new(),
        }
    }

    /// A record with `length` and the given `(key, value)` fields.
    pub fn from_fields(length: usize, fields: impl IntoIterator<Item = (usize, f64)>) -> Self {
        Self {
            length,
            fields: fields.into_iter().collect(),
        }
    }

    /// A fully populated record, `length == values.len()`.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let fields: BTreeMap<usize, f64> = values.into_iter().enumerate().collect();
        Self {
            length: fields.len(),
            fields,
        }
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// The field stored under `key`, if any.
    #[inline]
    pub fn field(&self, key: usize) -> Option<f64> {
        self.fields.get(&key).copied()
    }

    pub fn insert(&mut self, key: usize, value: f64) -> Option<f64> {
        self.fields.insert(key, value)
    }

    /// Materialize `0..length`, with NaN for unassigned keys.
    pub fn to_vec(&self) -> Vec<f64> {
        (0..self.length).map(|i| self.get(i)).collect()
    }
}

impl ArrayLike<f64> for GenericArray {
    #[inline]
    fn len(&self) -> usize {
        self.length
    }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        self.field(index).unwrap_or(f64::NAN)
    }
}

impl ArrayLikeMut<f64> for GenericArray {
    #[inline]
    fn set(&mut self, index: usize, value: f64) {
        self.fields.insert(index, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values() {
        let a = GenericArray::from_values([1.0, 2.0, 3.0]);
        assert_eq!(a.length(), 3);
        assert_eq!(a.get(2), 3.0);
        assert_eq!(a.to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_missing_field_reads_nan() {
        let a = GenericArray::from_fields(3, [(0, 1.0), (2, 5.0)]);
        assert_eq!(a.len(), 3);
        assert!(a.get(1).is_nan());
        assert_eq!(a.field(1), None);
    }

    #[test]
    fn test_set_populates_field() {
        let mut a = GenericArray::new(2);
        a.set(1, 0.5);
        assert_eq!(a.field(1), Some(0.5));
        assert_eq!(a.field(0), None);
    }
}
