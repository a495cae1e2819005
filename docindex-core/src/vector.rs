//! Vector types for docindex.

use serde::{Deserialize, Serialize};

/// Identifier naming a document within a backend's namespace.
pub type DocumentId = String;

/// A dense embedding supplied alongside a document at insertion time.
///
/// The contract never interprets vector contents; distance and metric logic
/// belong to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    /// Creates a new vector from a slice of f32 values.
    ///
    /// # Example
    ///
    /// ```
    /// use docindex_core::Vector;
    ///
    /// let v = Vector::new(&[1.0, 2.0, 3.0]);
    /// assert_eq!(v.dimension(), 3);
    /// ```
    #[inline]
    pub fn new(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Creates a vector from an owned `Vec<f32>`.
    #[inline]
    pub fn from_vec(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Returns the dimension (length) of the vector.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Returns a slice view of the vector data.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns true if the vector has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Computes the L2 norm of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Consumes the vector and returns the underlying data.
    #[inline]
    pub fn into_inner(self) -> Vec<f32> {
        self.data
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Self::from_vec(data)
    }
}

impl From<&[f32]> for Vector {
    fn from(data: &[f32]) -> Self {
        Self::new(data)
    }
}

impl AsRef<[f32]> for Vector {
    fn as_ref(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_from_vec() {
        let v = Vector::from(vec![1.0, 2.0]);
        assert_eq!(v.dimension(), 2);
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_vector_norm() {
        let v = Vector::new(&[3.0, 4.0]);
        assert!((v.norm() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_vector_serializes_as_plain_array() {
        let v = Vector::new(&[1.0, 2.5]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.5]");
    }
}
