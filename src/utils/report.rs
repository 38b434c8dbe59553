use ndarray::prelude::*;

use crate::core::MergeEvent;
use crate::utils::stats::ColumnSummary;

/// Renders a cluster member list as `{ 0, 1, 2 }`.
pub fn format_cluster(members: &[usize]) -> String {
    let inner = members
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {} }}", inner)
}

/// Renders one merge event as a report line, with the distance at the given
/// number of decimal digits.
pub fn format_merge(event: &MergeEvent, precision: usize) -> String {
    format!(
        "Cluster {} and Cluster {} merged at distance {:.prec$} into Cluster {}",
        format_cluster(&event.cluster_a),
        format_cluster(&event.cluster_b),
        event.distance,
        format_cluster(&event.merged),
        prec = precision,
    )
}

/// Renders the per-column summary statistics as one line per feature.
pub fn format_summaries(summaries: &[ColumnSummary], precision: usize) -> String {
    summaries
        .iter()
        .enumerate()
        .map(|(c, s)| {
            format!(
                "column {}: mean {:.prec$}, std dev {:.prec$}, mean sq dev {:.prec$}",
                c,
                s.mean,
                s.std_dev,
                s.mean_sq_dev,
                prec = precision,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the pairwise distance matrix row by row.
pub fn format_distance_matrix(distances: &Array2<f64>, precision: usize) -> String {
    distances
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|d| format!("{:.prec$}", d, prec = precision))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
