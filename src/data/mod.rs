use ndarray::prelude::*;

use crate::core::{ClusteringError, Result};

/// A validated, immutable observation matrix: `n` rows (observations) by
/// `m` columns (features). Construction rejects empty shapes and non-finite
/// values, so downstream code can rely on a well-formed rectangular grid.
#[derive(Clone)]
pub struct ObservationMatrix {
    data: Array2<f64>,
    squared_norms: Array1<f64>,
}

impl ObservationMatrix {
    pub fn new(data: Array2<f64>) -> Result<Self> {
        if data.nrows() == 0 {
            return Err(ClusteringError::InvalidInput(
                "matrix has zero rows".to_string(),
            ));
        }
        if data.ncols() == 0 {
            return Err(ClusteringError::InvalidInput(
                "matrix has zero columns".to_string(),
            ));
        }
        if !data.iter().all(|v| v.is_finite()) {
            return Err(ClusteringError::InvalidInput(
                "matrix contains non-finite values".to_string(),
            ));
        }

        let norms = data.rows().into_iter().map(|row| row.dot(&row)).collect();

        Ok(Self {
            data,
            squared_norms: norms,
        })
    }

    /// Builds the matrix from row vectors. All rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(ClusteringError::InvalidInput(
                "matrix has zero rows".to_string(),
            ));
        }
        let ncols = rows[0].len();
        if rows.iter().any(|r| r.len() != ncols) {
            return Err(ClusteringError::InvalidInput(
                "rows have inconsistent lengths".to_string(),
            ));
        }

        let nrows = rows.len();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((nrows, ncols), flat)
            .map_err(|e| ClusteringError::InvalidInput(e.to_string()))?;

        Self::new(data)
    }

    /// Euclidean distance between observation rows `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        let sq_eucl = self.squared_norms[i] + self.squared_norms[j]
            - 2.0 * self.data.row(i).dot(&self.data.row(j));
        if sq_eucl < 0.0 {
            0.0
        } else {
            sq_eucl.sqrt()
        }
    }

    pub fn num_observations(&self) -> usize {
        self.data.nrows()
    }

    pub fn num_features(&self) -> usize {
        self.data.ncols()
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.data.row(i)
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rejects_zero_rows() {
        let result = ObservationMatrix::new(Array2::<f64>::zeros((0, 3)));
        assert_eq!(
            result.err(),
            Some(ClusteringError::InvalidInput(
                "matrix has zero rows".to_string()
            ))
        );
    }

    #[test]
    fn test_rejects_zero_columns() {
        let result = ObservationMatrix::new(Array2::<f64>::zeros((3, 0)));
        assert_eq!(
            result.err(),
            Some(ClusteringError::InvalidInput(
                "matrix has zero columns".to_string()
            ))
        );
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let result = ObservationMatrix::new(array![[1.0, 2.0], [f64::NAN, 0.0]]);
        assert_eq!(
            result.err(),
            Some(ClusteringError::InvalidInput(
                "matrix contains non-finite values".to_string()
            ))
        );
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let result = ObservationMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_point_distance() {
        let data = ObservationMatrix::new(array![[0.0, 0.0], [3.0, 4.0]]).unwrap();
        assert!((data.distance(0, 1) - 5.0).abs() < 1e-9);
        assert!((data.distance(1, 0) - 5.0).abs() < 1e-9);
        assert_eq!(data.distance(0, 0), 0.0);
    }

    #[test]
    fn test_shape_accessors() {
        let data = ObservationMatrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        assert_eq!(data.num_observations(), 1);
        assert_eq!(data.num_features(), 3);
    }
}
