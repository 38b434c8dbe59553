use crate::core::Result;
use crate::data::ObservationMatrix;

/// Per-column descriptive statistics over the observation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub mean_sq_dev: f64,
}

/// Computes mean, standard deviation and mean square deviation for every
/// feature column. Deviations are population statistics (divide by n).
pub fn summarize(data: &ObservationMatrix) -> Vec<ColumnSummary> {
    let n = data.num_observations() as f64;
    data.view()
        .columns()
        .into_iter()
        .map(|col| {
            let mean = col.sum() / n;
            let mean_sq_dev = col.mapv(|v| (v - mean) * (v - mean)).sum() / n;
            ColumnSummary {
                mean,
                std_dev: mean_sq_dev.sqrt(),
                mean_sq_dev,
            }
        })
        .collect()
}

/// Z-score standardization: each column is centered on its mean and divided
/// by its standard deviation. A constant column has zero deviation and maps
/// to all zeros instead of dividing by it.
pub fn zscore(data: &ObservationMatrix) -> Result<ObservationMatrix> {
    let summaries = summarize(data);
    let mut standardized = data.view().to_owned();

    for (c, summary) in summaries.iter().enumerate() {
        let mut col = standardized.column_mut(c);
        if summary.std_dev == 0.0 {
            col.fill(0.0);
        } else {
            col.mapv_inplace(|v| (v - summary.mean) / summary.std_dev);
        }
    }

    ObservationMatrix::new(standardized)
}
