//! Agglomerative hierarchical clustering with centroid linkage
//!
//! AGGLO clusters a fixed numeric dataset bottom-up: every observation starts
//! in its own cluster and the pair of clusters with the closest centroids is
//! merged, one pair per step, until a single cluster remains. The merge
//! sequence and the linkage distance at each step are the output, as a list
//! of [`MergeEvent`] records; rendering them is left to the caller.
//!
//! Centroid distances are recomputed from live cluster membership on every
//! step, so the result is deterministic: ties between equally close pairs go
//! to the pair found first under the nested ascending scan.

pub mod core;
pub mod data;
pub mod utils;

use crate::core::{Config, ClusteringEngine, ClusteringError, MergeEvent, Result};
use crate::data::ObservationMatrix;

/// Clusters the matrix with the default [`Config`].
pub fn cluster(data: ObservationMatrix) -> Result<Vec<MergeEvent>> {
    cluster_with_config(data, Config::default())
}

/// Clusters the matrix with an explicit [`Config`]: validates it, optionally
/// z-score standardizes the data, then runs the merge loop to completion.
pub fn cluster_with_config(data: ObservationMatrix, config: Config) -> Result<Vec<MergeEvent>> {
    config.validate().map_err(ClusteringError::ConfigError)?;

    let data = if config.standardize {
        utils::stats::zscore(&data)?
    } else {
        data
    };

    ClusteringEngine::new(data)?.run()
}
