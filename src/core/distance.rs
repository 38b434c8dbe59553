use ndarray::prelude::*;

use crate::data::ObservationMatrix;

/// Computes the full pairwise Euclidean distance matrix between observation
/// rows: symmetric, zero diagonal. Only the upper triangle is computed and
/// then mirrored. This is a diagnostic view of the raw data; the merge loop
/// recomputes centroid distances from live cluster membership instead of
/// reusing these entries, because membership changes after every merge.
pub fn pairwise_distances(data: &ObservationMatrix) -> Array2<f64> {
    let n = data.num_observations();
    let mut distances = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        for j in (i + 1)..n {
            let d = data.distance(i, j);
            distances[[i, j]] = d;
            distances[[j, i]] = d;
        }
    }

    distances
}
