use log::{debug, info};
use ndarray::prelude::*;
use serde::Serialize;

use crate::core::{ClusteringError, Result};
use crate::data::ObservationMatrix;

/// One merge operation: the two pre-merge member lists, the centroid
/// distance between them, and the resulting merged member list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeEvent {
    pub cluster_a: Vec<usize>,
    pub cluster_b: Vec<usize>,
    pub distance: f64,
    pub merged: Vec<usize>,
}

/// Agglomerative hierarchical clustering with centroid linkage.
///
/// The engine owns a partition of the observation indices, starting from one
/// singleton cluster per row. Each step merges the pair of clusters whose
/// centroids are closest, until a single cluster remains. Centroids are
/// recomputed from live membership every step rather than cached or updated
/// incrementally, which keeps the loop simple at the dataset sizes this
/// targets (tens to low hundreds of observations).
pub struct ClusteringEngine {
    data: ObservationMatrix,
    clusters: Vec<Vec<usize>>,
}

impl ClusteringEngine {
    /// Creates an engine over `data` with every observation in its own
    /// cluster, in index order.
    ///
    /// # Errors
    /// Returns `ClusteringError::InvalidInput` if the matrix has no rows.
    pub fn new(data: ObservationMatrix) -> Result<Self> {
        let n = data.num_observations();
        if n == 0 {
            return Err(ClusteringError::InvalidInput(
                "matrix has zero rows".to_string(),
            ));
        }

        info!(
            "Initializing engine with {} observations, {} features",
            n,
            data.num_features()
        );

        Ok(ClusteringEngine {
            data,
            clusters: (0..n).map(|i| vec![i]).collect(),
        })
    }

    /// Column-wise mean of the rows indexed by `members`.
    ///
    /// # Errors
    /// Returns `ClusteringError::EmptyCluster` for an empty member list.
    /// The engine never produces one; the check guards misuse.
    pub fn centroid(&self, members: &[usize]) -> Result<Array1<f64>> {
        if members.is_empty() {
            return Err(ClusteringError::EmptyCluster);
        }

        let mut sum = Array1::<f64>::zeros(self.data.num_features());
        for &i in members {
            sum += &self.data.row(i);
        }
        Ok(sum / members.len() as f64)
    }

    /// Centroid-linkage distance: the Euclidean distance between the two
    /// cluster centroids.
    pub fn cluster_distance(&self, a: &[usize], b: &[usize]) -> Result<f64> {
        let ca = self.centroid(a)?;
        let cb = self.centroid(b)?;
        let diff = &ca - &cb;
        Ok(diff.dot(&diff).sqrt())
    }

    /// Scans all unordered cluster pairs and returns the positions of the
    /// closest pair. Ties go to the pair found first under the nested
    /// ascending scan (outer < inner), so the result is deterministic for a
    /// fixed cluster ordering.
    ///
    /// # Errors
    /// Returns `ClusteringError::InsufficientClusters` with fewer than two
    /// clusters remaining.
    pub fn find_closest_pair(&self) -> Result<(usize, usize)> {
        if self.clusters.len() < 2 {
            return Err(ClusteringError::InsufficientClusters(self.clusters.len()));
        }

        let mut best = (0, 1);
        let mut best_distance = f64::INFINITY;
        for i in 0..self.clusters.len() {
            for j in (i + 1)..self.clusters.len() {
                let d = self.cluster_distance(&self.clusters[i], &self.clusters[j])?;
                // strict < keeps the first-found minimum on ties
                if d < best_distance {
                    best = (i, j);
                    best_distance = d;
                }
            }
        }

        Ok(best)
    }

    /// Merges the closest pair of clusters. The union replaces the
    /// lower-positioned source cluster, sorted ascending by index; the
    /// higher-positioned source is removed, leaving the relative order of
    /// all other clusters untouched. This is the sole mutator of the
    /// partition.
    pub fn merge_step(&mut self) -> Result<MergeEvent> {
        let (i, j) = self.find_closest_pair()?;

        let cluster_a = self.clusters[i].clone();
        let cluster_b = self.clusters[j].clone();
        let distance = self.cluster_distance(&cluster_a, &cluster_b)?;

        let mut merged = cluster_a.clone();
        merged.extend_from_slice(&cluster_b);
        merged.sort_unstable();

        debug!(
            "Merging clusters at positions ({}, {}) with distance {}",
            i, j, distance
        );

        self.clusters[i] = merged.clone();
        self.clusters.remove(j);

        Ok(MergeEvent {
            cluster_a,
            cluster_b,
            distance,
            merged,
        })
    }

    /// Runs merge steps until one cluster remains and returns the events in
    /// chronological order: exactly `n - 1` of them for `n` observations.
    pub fn run(&mut self) -> Result<Vec<MergeEvent>> {
        let mut events = Vec::with_capacity(self.clusters.len().saturating_sub(1));
        while self.clusters.len() > 1 {
            events.push(self.merge_step()?);
        }

        info!("Clustering finished after {} merges", events.len());
        Ok(events)
    }

    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    pub fn data(&self) -> &ObservationMatrix {
        &self.data
    }
}
