// File: crates/chart-data/src/tooltip.rs
// Summary: Aggregate per-series hover samples into deduplicated, formatted tooltip rows.

use std::collections::{BTreeMap, HashMap};

use crate::format::format_value;
use crate::reconcile::AxisDescriptor;
use crate::series::SeriesMeta;

/// One per-series sample at the hovered x-position.
///
/// Produced by the host adapter at the rendering-surface boundary, so the
/// aggregation below stays free of any charting-library event shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipSample {
    /// Display name as the legend shows it.
    pub series_name: String,
    /// Raw series identifier, used to look up declared metadata.
    pub field: String,
    pub value: Option<f64>,
}

impl TooltipSample {
    pub fn new(series_name: impl Into<String>, field: impl Into<String>, value: Option<f64>) -> Self {
        Self { series_name: series_name.into(), field: field.into(), value }
    }
}

/// One formatted tooltip row.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLine {
    pub name: String,
    pub value: String,
}

/// Build tooltip rows from the hover batch.
///
/// Null samples are dropped, then duplicate series names keep only the
/// first occurrence (the complete/incomplete split reports the shared
/// boundary point twice under the same name). Each surviving value is
/// formatted with the series' own declared type/unit, falling back to the
/// chart's reconciled pair; aliases rename rows at formatting time only.
pub fn aggregate(
    samples: &[TooltipSample],
    axis: &AxisDescriptor,
    metas: &BTreeMap<String, SeriesMeta>,
    aliases: &HashMap<String, String>,
) -> Vec<TooltipLine> {
    let mut seen: Vec<&str> = Vec::new();
    let mut out = Vec::new();
    for sample in samples {
        let value = match sample.value {
            Some(v) => v,
            None => continue,
        };
        if seen.contains(&sample.series_name.as_str()) {
            continue;
        }
        seen.push(&sample.series_name);

        let (value_type, unit) = match metas.get(&sample.field) {
            Some(meta) => (
                meta.value_type.unwrap_or(axis.value_type),
                meta.unit.or(axis.unit),
            ),
            None => (axis.value_type, axis.unit),
        };
        let name = aliases
            .get(&sample.series_name)
            .cloned()
            .unwrap_or_else(|| sample.series_name.clone());
        out.push(TooltipLine { name, value: format_value(value, value_type, unit) });
    }
    out
}
