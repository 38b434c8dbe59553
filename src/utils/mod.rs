use std::path::Path;

use log::debug;

use crate::core::{ClusteringError, Result};
use crate::data::ObservationMatrix;

pub mod report;
pub mod stats;

/// Loads a CSV spreadsheet into an observation matrix: one record per
/// observation row, every field a real number. With `has_headers` the first
/// record is skipped.
pub fn load_csv_matrix<P: AsRef<Path>>(filepath: P, has_headers: bool) -> Result<ObservationMatrix> {
    let filepath = filepath.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .trim(csv::Trim::All)
        .from_path(filepath)
        .map_err(|e| {
            ClusteringError::DatasetError(format!(
                "error opening file '{}': {}",
                filepath.display(),
                e
            ))
        })?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| ClusteringError::DatasetError(format!("record {}: {}", line, e)))?;

        let row = record
            .iter()
            .map(|field| {
                field.parse::<f64>().map_err(|e| {
                    ClusteringError::DatasetError(format!(
                        "record {}: cannot parse '{}' as a number: {}",
                        line, field, e
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    debug!("Loaded {} records from {}", rows.len(), filepath.display());

    ObservationMatrix::from_rows(rows)
        .map_err(|e| ClusteringError::DatasetError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_csv_without_headers() {
        let path = write_temp("agglo_plain.csv", "0.0,0.0\n0.0,1.0\n10.0,10.0\n");
        let data = load_csv_matrix(&path, false).unwrap();

        assert_eq!(data.num_observations(), 3);
        assert_eq!(data.num_features(), 2);
        assert!((data.row(2)[0] - 10.0).abs() < 1e-9);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_csv_with_headers() {
        let path = write_temp("agglo_headers.csv", "x,y\n1.5, 2.5\n3.0, 4.0\n");
        let data = load_csv_matrix(&path, true).unwrap();

        assert_eq!(data.num_observations(), 2);
        assert!((data.row(0)[1] - 2.5).abs() < 1e-9);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_csv_rejects_non_numeric() {
        let path = write_temp("agglo_bad.csv", "1.0,2.0\n1.0,oops\n");
        let result = load_csv_matrix(&path, false);

        assert!(matches!(result, Err(ClusteringError::DatasetError(_))));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_csv_missing_file() {
        let result = load_csv_matrix("/nonexistent/agglo.csv", false);
        assert!(matches!(result, Err(ClusteringError::DatasetError(_))));
    }
}
