//! Uniform-dimension point collections.

use crate::error::{Error, Result};
use crate::point::Point;

/// An ordered collection of points sharing one dimension.
///
/// Both the candidate set and the query batch are `PointSet`s. Construction
/// validates that every vector has the same dimension, so searches only need
/// a single dimension check per query instead of one per candidate.
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Point>,
    dimension: usize,
}

impl PointSet {
    /// Creates a point set from pre-labelled points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPointSet`] for an empty input and
    /// [`Error::DimensionMismatch`] if any point disagrees with the first
    /// point's dimension.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        let Some(first) = points.first() else {
            return Err(Error::EmptyPointSet);
        };

        let dimension = first.dimension();
        for point in &points {
            if point.dimension() != dimension {
                return Err(Error::DimensionMismatch {
                    expected: dimension,
                    actual: point.dimension(),
                });
            }
        }

        Ok(Self { points, dimension })
    }

    /// Creates a point set from raw vectors, assigning labels `0..n` in
    /// input order.
    ///
    /// # Errors
    ///
    /// Same validation as [`PointSet::new`].
    pub fn from_vectors(vectors: Vec<Vec<f32>>) -> Result<Self> {
        let points = vectors
            .into_iter()
            .enumerate()
            .map(|(i, vector)| Point::new(i as u64, vector))
            .collect();
        Self::new(points)
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set holds no points (never the case for a
    /// successfully constructed set).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the shared vector dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the point at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Iterates over the points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Returns the underlying points as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
