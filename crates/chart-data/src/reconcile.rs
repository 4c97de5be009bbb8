// File: crates/chart-data/src/reconcile.rs
// Summary: Resolve one measurement type and unit for a whole chart.

use crate::format::format_value;
use crate::series::Series;
use crate::units::{Unit, ValueType};

/// The single type/unit pair an entire multi-series chart renders against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisDescriptor {
    pub value_type: ValueType,
    pub unit: Option<Unit>,
}

impl AxisDescriptor {
    /// Format a y-axis tick value in the reconciled type/unit.
    pub fn label(&self, value: f64) -> String {
        format_value(value, self.value_type, self.unit)
    }
}

/// Resolve the chart-wide type and unit from declared per-series metadata.
///
/// Absent declarations carry no opinion. Exactly one distinct declared type
/// wins; any disagreement (or no declarations at all) selects the fallback
/// type. Units resolve the same way independently, except that the fallback
/// unit is looked up from the resolved type.
pub fn reconcile<'a, I>(series: I) -> AxisDescriptor
where
    I: IntoIterator<Item = &'a Series>,
{
    let mut types: Vec<ValueType> = Vec::new();
    let mut units: Vec<Unit> = Vec::new();
    for s in series {
        if let Some(t) = s.meta.value_type {
            if !types.contains(&t) {
                types.push(t);
            }
        }
        if let Some(u) = s.meta.unit {
            if !units.contains(&u) {
                units.push(u);
            }
        }
    }

    let value_type = match types.as_slice() {
        [only] => *only,
        _ => {
            if types.len() > 1 {
                log::debug!("mixed series types {types:?}; using fallback {:?}", ValueType::FALLBACK);
            }
            ValueType::FALLBACK
        }
    };

    let unit = match units.as_slice() {
        [only] => Some(*only),
        _ => {
            if units.len() > 1 {
                log::debug!("mixed series units {units:?}; using fallback for {value_type:?}");
            }
            Unit::fallback_for(value_type)
        }
    };

    AxisDescriptor { value_type, unit }
}
