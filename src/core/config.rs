use serde::{Deserialize, Serialize};

/// Parameters for a clustering run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Apply z-score standardization to the matrix before clustering
    pub standardize: bool,

    /// Number of decimal digits when rendering merge distances
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            standardize: true,
            precision: 4,
        }
    }
}

impl Config {
    pub fn new(standardize: bool, precision: usize) -> Self {
        Self {
            standardize,
            precision,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.precision > 17 {
            return Err("Precision cannot exceed 17 digits".to_string());
        }

        Ok(())
    }
}
