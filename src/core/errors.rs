use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClusteringError>;

#[derive(Debug, Error, PartialEq)]
pub enum ClusteringError {
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("Empty Cluster: a cluster with no members was referenced")]
    EmptyCluster,

    #[error("Insufficient Clusters: {0} remaining, at least 2 required")]
    InsufficientClusters(usize),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Dataset Error: {0}")]
    DatasetError(String),
}
