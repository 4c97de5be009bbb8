// File: crates/chart-data/src/scale.rs
// Summary: Rescale series values into the reconciled chart unit.

use crate::series::{DataPoint, Series, SeriesMeta};
use crate::units::Unit;

/// Convert `series` values from their declared unit into `target`.
///
/// Values pass through unchanged when the series declares no unit, the
/// target has none, or the two units belong to different families (no
/// cross-family conversion is defined). Point count, timestamps, and
/// missing samples are preserved exactly.
pub fn scale_to_unit(series: &Series, target: Option<Unit>) -> Series {
    let (src, dst) = match (series.meta.unit, target) {
        (Some(src), Some(dst)) if src.same_family(&dst) => (src, dst),
        _ => return series.clone(),
    };
    if src == dst {
        return series.clone();
    }

    let ratio = src.factor() / dst.factor();
    let points = series
        .points
        .iter()
        .map(|p| DataPoint { timestamp: p.timestamp, value: p.value.map(|v| v * ratio) })
        .collect();
    Series {
        field: series.field.clone(),
        points,
        meta: SeriesMeta { value_type: series.meta.value_type, unit: Some(dst) },
    }
}
