use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Position of a vertex in the model's main vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexIndex(pub usize);

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `2^63`, the first integral `f64` outside the `i64` range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// A single coordinate value that keeps integer or floating semantics as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Int(i64),
    Float(f64),
}

impl Coordinate {
    /// Returns the value as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Shifts the coordinate by `delta`.
    ///
    /// Integers stay integers when `delta` is integral and the sum fits in
    /// `i64`; otherwise the result is a float.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    pub fn offset(self, delta: f64) -> Self {
        if let Self::Int(v) = self {
            if delta.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&delta) {
                if let Some(sum) = v.checked_add(delta as i64) {
                    return Self::Int(sum);
                }
            }
        }
        Self::Float(self.as_f64() + delta)
    }

    /// Whether the value can be written as a JSON number.
    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(v) => v.is_finite(),
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl From<i32> for Coordinate {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Coordinate {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Coordinate {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Coordinate {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// An `[x, y, z]` triple as stored in the vertex list.
pub type Vertex = [Coordinate; 3];

/// Append-only list of world-space vertices.
///
/// Every insertion allocates a new slot; coincident points are not merged.
#[derive(Debug, Clone, Default)]
pub struct VertexStore {
    vertices: Vec<Vertex>,
}

impl VertexStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and returns its index.
    pub fn push(&mut self, vertex: Vertex) -> VertexIndex {
        self.vertices.push(vertex);
        VertexIndex(self.vertices.len() - 1)
    }

    /// Returns the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is past the end of the store.
    pub fn get(&self, index: VertexIndex) -> Result<&Vertex, ModelError> {
        self.vertices
            .get(index.0)
            .ok_or(ModelError::IndexOutOfBounds {
                collection: "vertex",
                index: index.0,
                len: self.vertices.len(),
            })
    }

    /// Fails if `index` does not address a stored vertex.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfBounds`].
    pub fn check(&self, index: VertexIndex) -> Result<(), ModelError> {
        self.get(index).map(|_| ())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_sequential_indices() {
        let mut store = VertexStore::new();
        let a = store.push([1.into(), 2.into(), 0.into()]);
        let b = store.push([1.into(), 2.into(), 0.into()]);
        assert_eq!(a, VertexIndex(0));
        assert_eq!(b, VertexIndex(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn get_out_of_bounds_fails() {
        let store = VertexStore::new();
        let err = store.get(VertexIndex(0)).unwrap_err();
        assert!(matches!(
            err,
            ModelError::IndexOutOfBounds { collection: "vertex", index: 0, len: 0 }
        ));
    }

    #[test]
    fn integer_offset_stays_integer() {
        assert_eq!(Coordinate::Int(50).offset(-50.0), Coordinate::Int(0));
        assert_eq!(Coordinate::Int(50).offset(0.5), Coordinate::Float(50.5));
        assert_eq!(Coordinate::Float(1.5).offset(1.0), Coordinate::Float(2.5));
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn integer_offset_overflow_becomes_float() {
        assert_eq!(
            Coordinate::Int(i64::MAX).offset(-50.0),
            Coordinate::Int(i64::MAX - 50)
        );
        assert_eq!(
            Coordinate::Int(i64::MAX).offset(50.0),
            Coordinate::Float(i64::MAX as f64 + 50.0)
        );
        assert_eq!(Coordinate::Int(0).offset(1e19), Coordinate::Float(1e19));
        assert_eq!(Coordinate::Int(0).offset(-1e19), Coordinate::Float(-1e19));
        assert!(!Coordinate::Int(0).offset(f64::NAN).is_finite());
        assert!(!Coordinate::Int(0).offset(f64::INFINITY).is_finite());
    }

    #[test]
    fn coordinates_serialize_as_given() {
        let v: Vertex = [0.into(), 2.5.into(), 0.into()];
        assert_eq!(serde_json::to_string(&v).unwrap(), "[0,2.5,0]");
    }
}
