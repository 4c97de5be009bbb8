// File: crates/chart-data/src/split.rs
// Summary: Partition series into confirmed and provisional segments by ingest delay.
// Notes:
// - Continuous kinds duplicate exactly one boundary vertex so the two styled
//   segments draw as an unbroken line.
// - Discrete kinds have natural gaps between bars, so tagging in place is
//   enough and no second series is produced.

use chrono::{DateTime, Duration, Utc};

use crate::series::{Series, VisualizationKind};

/// Completeness partition of one series.
#[derive(Clone, Debug, PartialEq)]
pub enum Partitioned {
    /// Continuous kinds: two drawable series sharing one boundary vertex.
    /// `incomplete` is empty when nothing falls after the boundary.
    Split { complete: Series, incomplete: Series },
    /// Discrete kinds: the series unchanged, with per-point provisional flags.
    Marked { series: Series, provisional: Vec<bool> },
}

impl Partitioned {
    /// The underlying series identifier, regardless of partition shape.
    pub fn field(&self) -> &str {
        match self {
            Partitioned::Split { complete, .. } => &complete.field,
            Partitioned::Marked { series, .. } => &series.field,
        }
    }

    /// Whether any point is still provisional.
    pub fn has_provisional(&self) -> bool {
        match self {
            Partitioned::Split { incomplete, .. } => !incomplete.is_empty(),
            Partitioned::Marked { provisional, .. } => provisional.iter().any(|&p| p),
        }
    }
}

/// Partition `series` at the completeness boundary `now - delay`.
///
/// A zero (or negative) delay disables provisional handling: the whole
/// series is confirmed. Points with timestamp <= boundary are confirmed;
/// later points are provisional.
pub fn partition_completeness(
    series: &Series,
    delay: Duration,
    now: DateTime<Utc>,
    kind: VisualizationKind,
) -> Partitioned {
    if delay <= Duration::zero() {
        return match kind {
            VisualizationKind::Continuous => Partitioned::Split {
                complete: series.clone(),
                incomplete: series.empty_like(),
            },
            VisualizationKind::Discrete => Partitioned::Marked {
                series: series.clone(),
                provisional: vec![false; series.len()],
            },
        };
    }

    let boundary = now.timestamp_millis() - delay.num_milliseconds();
    log::trace!("completeness boundary for {}: {boundary}", series.field);

    // Index of the first provisional point.
    let cut = series.points.partition_point(|p| p.timestamp <= boundary);

    match kind {
        VisualizationKind::Continuous => {
            let complete = series.slice(0, cut);
            let incomplete = if cut == series.len() {
                series.empty_like()
            } else if cut == 0 {
                series.clone()
            } else {
                // Re-open the segment on the last confirmed point.
                series.slice(cut - 1, series.len())
            };
            Partitioned::Split { complete, incomplete }
        }
        VisualizationKind::Discrete => Partitioned::Marked {
            series: series.clone(),
            provisional: series.points.iter().map(|p| p.timestamp > boundary).collect(),
        },
    }
}
