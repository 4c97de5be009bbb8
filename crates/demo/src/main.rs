// File: crates/demo/src/main.rs
// Summary: Demo loads series from CSV (or built-in samples) and runs the full prepare pipeline.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use chart_data::{
    Chart, DataPoint, DurationUnit, HoverSync, Partitioned, RenderOptions, Selection, Series,
    SeriesMeta, TooltipSample, Unit, ValueType, VisualizationKind,
};
use chrono::{DateTime, Duration, Utc};

fn main() -> Result<()> {
    env_logger::init();

    let now = Utc::now();
    let series = match std::env::args().nth(1) {
        Some(path) => {
            println!("Using input file: {path}");
            load_series_csv(Path::new(&path))
                .with_context(|| format!("failed to load CSV '{path}'"))?
        }
        None => {
            println!("No input file given; using built-in sample series.");
            sample_series(now)
        }
    };
    println!("Loaded {} series", series.len());

    let mut chart = Chart::new();
    for s in series {
        println!(
            "  {}: {} points, type {:?}, unit {:?}",
            s.field,
            s.len(),
            s.meta.value_type,
            s.meta.unit
        );
        chart.add_series(s);
    }

    let mut opts = RenderOptions::default();
    opts.kind = VisualizationKind::Continuous;
    opts.completeness_delay = Duration::minutes(5);
    opts.aliases = HashMap::from([("p50(span.duration)".to_string(), "p50".to_string())]);

    let instruction = chart.prepare(&opts, now, None);
    if instruction.is_empty() {
        println!("Nothing to render.");
        return Ok(());
    }

    let axis = instruction.axis.expect("non-empty instruction has an axis");
    println!("\nReconciled axis: type {:?}, unit {:?}", axis.value_type, axis.unit);

    // Partition summary: confirmed vs still-provisional samples.
    for partition in &instruction.partitions {
        match partition {
            Partitioned::Split { complete, incomplete } => {
                // The boundary vertex is shared, so it only counts once.
                let pending = if complete.is_empty() {
                    incomplete.len()
                } else {
                    incomplete.len().saturating_sub(1)
                };
                println!("  {}: {} confirmed, {} provisional", complete.field, complete.len(), pending);
            }
            Partitioned::Marked { series, provisional } => {
                let pending = provisional.iter().filter(|&&p| p).count();
                println!("  {}: {} confirmed, {} provisional", series.field, series.len() - pending, pending);
            }
        }
    }

    // Y-axis ticks across the observed value range.
    let (lo, hi) = value_range(&instruction.partitions);
    println!("\nY-axis ticks:");
    for step in 0..=4 {
        let v = lo + (hi - lo) * (step as f64) / 4.0;
        println!("  {}", instruction.axis_label(v));
    }

    // Simulated hover on the most recent shared timestamp. Split series
    // report the boundary point twice; the aggregator dedups it.
    let sync = HoverSync::new();
    sync.register("main");
    sync.register("linked");
    sync.activate("main");

    let samples = hover_samples(&instruction.partitions);
    println!("\nTooltip (hovered instance):");
    for line in instruction.tooltip_for_instance(&samples, &sync, "main") {
        println!("  {}: {}", line.name, line.value);
    }
    let suppressed = instruction.tooltip_for_instance(&samples, &sync, "linked");
    println!("Tooltip (linked instance): {} lines", suppressed.len());

    // Legend toggle round-trip: host owns the state, core reports events.
    let all_fields: Vec<String> =
        instruction.partitions.iter().map(|p| p.field().to_string()).collect();
    let selection = Selection::from_fields(all_fields.clone());
    if let Some(first) = all_fields.first() {
        let (_, event) = selection.toggled(first);
        println!("\nSelection event: {} -> visible={}", event.field, event.visible);
    }

    Ok(())
}

/// Built-in sample: two latency percentiles over the last 30 minutes, one
/// declared in seconds to exercise unit scaling, with the trailing minutes
/// still inside the completeness window.
fn sample_series(now: DateTime<Utc>) -> Vec<Series> {
    let start = now - Duration::minutes(30);
    let mut p50 = Vec::new();
    let mut p95 = Vec::new();
    for i in 0..30 {
        let t = (start + Duration::minutes(i)).timestamp_millis();
        let phase = i as f64 * 0.4;
        p50.push(DataPoint::new(t, 180.0 + phase.sin() * 40.0));
        p95.push(DataPoint::new(t, 0.9 + phase.cos() * 0.3));
    }
    vec![
        Series::from_points("p50(span.duration)", p50)
            .with_value_type(ValueType::Duration)
            .with_unit(Unit::Duration(DurationUnit::Millisecond)),
        Series::from_points("p95(span.duration)", p95)
            .with_value_type(ValueType::Duration)
            .with_unit(Unit::Duration(DurationUnit::Second)),
    ]
}

/// Load series from a CSV with columns for series name, timestamp, and
/// value, plus optional type/unit columns. Rows are grouped by series name;
/// unparsable rows are skipped.
fn load_series_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    println!("Headers: {headers:?}");

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_series = idx(&["series", "name", "field"]).context("no series-name column")?;
    let i_time = idx(&["time", "timestamp", "date"]).context("no timestamp column")?;
    let i_value = idx(&["value", "val", "y"]).context("no value column")?;
    let i_type = idx(&["type", "value_type"]);
    let i_unit = idx(&["unit"]);

    let mut grouped: BTreeMap<String, (Vec<DataPoint>, SeriesMeta)> = BTreeMap::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = match rec.get(i_series) {
            Some(f) if !f.trim().is_empty() => f.trim().to_string(),
            _ => continue,
        };
        let timestamp = match rec.get(i_time).and_then(|s| s.trim().parse::<i64>().ok()) {
            Some(t) => t,
            None => continue,
        };
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());

        let entry = grouped.entry(field).or_default();
        entry.0.push(DataPoint { timestamp, value });
        if let Some(t) = i_type.and_then(|i| rec.get(i)).and_then(ValueType::parse) {
            entry.1.value_type = Some(t);
        }
        if let Some(u) = i_unit.and_then(|i| rec.get(i)).and_then(Unit::parse) {
            entry.1.unit = Some(u);
        }
    }

    let mut out = Vec::new();
    for (field, (mut points, meta)) in grouped {
        points.sort_by_key(|p| p.timestamp);
        points.dedup_by_key(|p| p.timestamp);
        let series = Series::try_new(&field, points, meta)
            .with_context(|| format!("series '{field}'"))?;
        out.push(series);
    }
    Ok(out)
}

/// Collect the hover batch at the completeness boundary: both halves of a
/// split series report the shared vertex under the same name, which is
/// exactly the duplicate the aggregator removes.
fn hover_samples(partitions: &[Partitioned]) -> Vec<TooltipSample> {
    let mut samples = Vec::new();
    let mut push = |series: &Series, point: Option<&DataPoint>| {
        if let Some(p) = point {
            samples.push(TooltipSample::new(&series.field, &series.field, p.value));
        }
    };
    for partition in partitions {
        match partition {
            Partitioned::Split { complete, incomplete } => {
                push(complete, complete.points.last());
                push(incomplete, incomplete.points.first());
            }
            Partitioned::Marked { series, .. } => push(series, series.points.last()),
        }
    }
    samples
}

/// Min/max over every value in every partition, for tick placement.
fn value_range(partitions: &[Partitioned]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut scan = |series: &Series| {
        for p in &series.points {
            if let Some(v) = p.value {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    };
    for partition in partitions {
        match partition {
            Partitioned::Split { complete, incomplete } => {
                scan(complete);
                scan(incomplete);
            }
            Partitioned::Marked { series, .. } => scan(series),
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        (0.0, 1.0)
    } else {
        (lo, hi)
    }
}
