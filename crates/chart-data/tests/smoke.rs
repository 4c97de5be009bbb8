// File: crates/chart-data/tests/smoke.rs
// Purpose: Basic end-to-end prepare pass over mixed-type series.

use chart_data::{
    Chart, DataPoint, DurationUnit, RenderOptions, Selection, Series, TooltipSample, Unit,
    ValueType,
};
use chrono::{TimeZone, Utc};

#[test]
fn prepare_mixed_types_falls_back_to_number() {
    // Duration series in milliseconds vs a unitless count: types differ,
    // so the whole chart renders as plain numbers with no unit.
    let mut chart = Chart::new();
    chart.add_series(
        Series::from_points("p50()", vec![DataPoint::new(0, 1500.0)])
            .with_value_type(ValueType::Duration)
            .with_unit(Unit::Duration(DurationUnit::Millisecond)),
    );
    chart.add_series(
        Series::from_points("count()", vec![DataPoint::new(0, 42.0)])
            .with_value_type(ValueType::Number),
    );

    let now = Utc.timestamp_millis_opt(0).unwrap();
    let instruction = chart.prepare(&RenderOptions::default(), now, None);

    let axis = instruction.axis.expect("axis present");
    assert_eq!(axis.value_type, ValueType::Number);
    assert_eq!(axis.unit, None);

    // No unit conversion path exists across families; values pass through.
    assert_eq!(instruction.axis_label(1500.0), "1.5k");
    assert_eq!(instruction.axis_label(42.0), "42");

    // Tooltip rows still format with each series' own declared metadata.
    let lines = instruction.tooltip(&[
        TooltipSample::new("p50()", "p50()", Some(1500.0)),
        TooltipSample::new("count()", "count()", Some(42.0)),
    ]);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].name, "p50()");
    assert_eq!(lines[0].value, "1.5s");
    assert_eq!(lines[1].value, "42");
}

#[test]
fn prepare_empty_input_yields_empty_instruction() {
    let chart = Chart::new();
    let now = Utc.timestamp_millis_opt(0).unwrap();
    let instruction = chart.prepare(&RenderOptions::default(), now, None);
    assert!(instruction.is_empty());
    assert!(instruction.partitions.is_empty());
    assert_eq!(instruction.axis_label(123.0), "");
    assert!(instruction.tooltip(&[TooltipSample::new("a", "a", Some(1.0))]).is_empty());
}

#[test]
fn prepare_respects_selection() {
    let mut chart = Chart::new();
    chart.add_series(
        Series::from_points("p50()", vec![DataPoint::new(0, 10.0)])
            .with_value_type(ValueType::Duration)
            .with_unit(Unit::Duration(DurationUnit::Millisecond)),
    );
    chart.add_series(
        Series::from_points("count()", vec![DataPoint::new(0, 5.0)])
            .with_value_type(ValueType::Number),
    );

    // Only the duration series is toggled visible, so the reconciled axis
    // is its own declared type again.
    let selection = Selection::from_fields(["p50()"]);
    let now = Utc.timestamp_millis_opt(0).unwrap();
    let instruction = chart.prepare(&RenderOptions::default(), now, Some(&selection));

    assert_eq!(instruction.partitions.len(), 1);
    assert_eq!(instruction.partitions[0].field(), "p50()");
    let axis = instruction.axis.expect("axis present");
    assert_eq!(axis.value_type, ValueType::Duration);

    // Deselecting everything is the no-data case.
    let none = Selection::from_fields(Vec::<String>::new());
    let empty = chart.prepare(&RenderOptions::default(), now, Some(&none));
    assert!(empty.is_empty());
}
