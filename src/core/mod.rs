pub mod config;
pub mod distance;
pub mod engine;
pub mod errors;

pub use config::Config;
pub use engine::{ClusteringEngine, MergeEvent};
pub use errors::{ClusteringError, Result};
