// File: crates/chart-data/tests/reconcile.rs
// Purpose: Type/unit reconciliation determinism and the fallback-unit table.

use chart_data::{
    reconcile, DataPoint, DurationUnit, RateUnit, Series, SizeUnit, Unit, ValueType,
};

fn series(field: &str, value_type: Option<ValueType>, unit: Option<Unit>) -> Series {
    let mut s = Series::from_points(field, vec![DataPoint::new(0, 1.0)]);
    if let Some(t) = value_type {
        s = s.with_value_type(t);
    }
    if let Some(u) = unit {
        s = s.with_unit(u);
    }
    s
}

#[test]
fn single_shared_type_wins() {
    let a = series("a", Some(ValueType::Duration), Some(Unit::Duration(DurationUnit::Second)));
    let b = series("b", Some(ValueType::Duration), Some(Unit::Duration(DurationUnit::Second)));
    let axis = reconcile([&a, &b]);
    assert_eq!(axis.value_type, ValueType::Duration);
    assert_eq!(axis.unit, Some(Unit::Duration(DurationUnit::Second)));
}

#[test]
fn mixed_types_use_fallback_regardless_of_order() {
    let a = series("a", Some(ValueType::Duration), None);
    let b = series("b", Some(ValueType::Size), None);
    let forward = reconcile(vec![a.clone(), b.clone()].iter());
    let backward = reconcile(vec![b, a].iter());
    assert_eq!(forward.value_type, ValueType::Number);
    assert_eq!(backward.value_type, ValueType::Number);
    assert_eq!(forward, backward);
}

#[test]
fn absent_declarations_carry_no_opinion() {
    // One series declares duration; the other declares nothing at all.
    let a = series("a", Some(ValueType::Duration), Some(Unit::Duration(DurationUnit::Millisecond)));
    let b = series("b", None, None);
    let axis = reconcile(vec![a, b].iter());
    assert_eq!(axis.value_type, ValueType::Duration);
    assert_eq!(axis.unit, Some(Unit::Duration(DurationUnit::Millisecond)));
}

#[test]
fn no_declarations_at_all_resolve_to_number() {
    let a = series("a", None, None);
    let b = series("b", None, None);
    let axis = reconcile(vec![a, b].iter());
    assert_eq!(axis.value_type, ValueType::Number);
    assert_eq!(axis.unit, None);
}

#[test]
fn mixed_units_fall_back_per_resolved_type() {
    // Same type, disagreeing units: fallback unit comes from the type table.
    let a = series("a", Some(ValueType::Duration), Some(Unit::Duration(DurationUnit::Second)));
    let b = series("b", Some(ValueType::Duration), Some(Unit::Duration(DurationUnit::Minute)));
    let axis = reconcile(vec![a, b].iter());
    assert_eq!(axis.value_type, ValueType::Duration);
    assert_eq!(axis.unit, Some(Unit::Duration(DurationUnit::Millisecond)));
}

#[test]
fn fallback_unit_table() {
    assert_eq!(
        Unit::fallback_for(ValueType::Duration),
        Some(Unit::Duration(DurationUnit::Millisecond))
    );
    assert_eq!(Unit::fallback_for(ValueType::Size), Some(Unit::Size(SizeUnit::Byte)));
    assert_eq!(Unit::fallback_for(ValueType::Rate), Some(Unit::Rate(RateUnit::PerSecond)));
    assert_eq!(Unit::fallback_for(ValueType::Percentage), None);
    assert_eq!(Unit::fallback_for(ValueType::Number), None);
}
