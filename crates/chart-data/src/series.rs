// File: crates/chart-data/src/series.rs
// Summary: Series model: ordered timestamped samples plus per-series measurement metadata.
// Notes:
// - Metadata is resolved once at construction into a small typed record
//   instead of being re-derived from dynamic lookups on every pass.
// - `try_new` enforces the timestamp-order invariant; `from_points` is the
//   trusted-input path for callers that already guarantee ordering.

use thiserror::Error;

use crate::units::{Unit, ValueType};

/// One timestamped sample. `value: None` models a missing sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub value: Option<f64>,
}

impl DataPoint {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value: Some(value) }
    }

    pub fn missing(timestamp: i64) -> Self {
        Self { timestamp, value: None }
    }
}

/// Measurement metadata declared for one series.
/// `None` fields carry no opinion during reconciliation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeriesMeta {
    pub value_type: Option<ValueType>,
    pub unit: Option<Unit>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("timestamps not strictly increasing at index {index}")]
    UnsortedTimestamps { index: usize },
}

/// How a chart draws its series; decides the completeness strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualizationKind {
    /// Line/area charts: provisional data is split into a second joined segment.
    Continuous,
    /// Bar charts: provisional points are tagged in place.
    Discrete,
}

/// A named, ordered sequence of samples. Immutable once constructed;
/// every transform in the pipeline produces a new series.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub field: String,
    pub points: Vec<DataPoint>,
    pub meta: SeriesMeta,
}

impl Series {
    /// Construct without validation.
    /// Caller guarantees strictly increasing timestamps.
    pub fn from_points(field: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self { field: field.into(), points, meta: SeriesMeta::default() }
    }

    /// Checked constructor enforcing the timestamp-order invariant.
    pub fn try_new(
        field: impl Into<String>,
        points: Vec<DataPoint>,
        meta: SeriesMeta,
    ) -> Result<Self, SeriesError> {
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(SeriesError::UnsortedTimestamps { index: i + 1 });
            }
        }
        Ok(Self { field: field.into(), points, meta })
    }

    pub fn with_meta(mut self, meta: SeriesMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.meta.value_type = Some(value_type);
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.meta.unit = Some(unit);
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A new series with the same field and meta but no points.
    pub fn empty_like(&self) -> Self {
        Self { field: self.field.clone(), points: Vec::new(), meta: self.meta }
    }

    /// A new series with the same field and meta over a sub-range of points.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        Self {
            field: self.field.clone(),
            points: self.points[start..end].to_vec(),
            meta: self.meta,
        }
    }
}
