// File: crates/chart-data/src/render.rs
// Summary: Chart container and the prepare pipeline producing render instructions.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, Utc};

use crate::hover::{HoverSync, Selection};
use crate::reconcile::{reconcile, AxisDescriptor};
use crate::scale::scale_to_unit;
use crate::series::{Series, SeriesMeta, VisualizationKind};
use crate::split::{partition_completeness, Partitioned};
use crate::tooltip::{aggregate, TooltipLine, TooltipSample};

/// Per-render configuration supplied by the host.
pub struct RenderOptions {
    pub kind: VisualizationKind,
    /// Window before "now" in which ingested data is still provisional.
    /// Zero disables splitting.
    pub completeness_delay: Duration,
    /// Raw series name -> display name, applied at formatting time only.
    pub aliases: HashMap<String, String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            kind: VisualizationKind::Continuous,
            completeness_delay: Duration::zero(),
            aliases: HashMap::new(),
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new() -> Self {
        Self { series: Vec::new() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Run reconcile -> scale -> partition once over the visible series.
    ///
    /// Pure given `now`; inputs are treated as immutable snapshots and the
    /// instruction is freshly allocated. Empty or fully-deselected input
    /// yields an empty instruction (no axis, no series) and the host shows
    /// its own no-data state.
    pub fn prepare(
        &self,
        opts: &RenderOptions,
        now: DateTime<Utc>,
        selection: Option<&Selection>,
    ) -> RenderInstruction {
        let visible: Vec<&Series> = self
            .series
            .iter()
            .filter(|s| selection.map_or(true, |sel| sel.contains(&s.field)))
            .collect();
        if visible.is_empty() {
            return RenderInstruction::empty();
        }

        let axis = reconcile(visible.iter().copied());

        let mut partitions = Vec::with_capacity(visible.len());
        let mut metas = BTreeMap::new();
        for s in visible {
            let scaled = scale_to_unit(s, axis.unit);
            metas.insert(scaled.field.clone(), scaled.meta);
            partitions.push(partition_completeness(
                &scaled,
                opts.completeness_delay,
                now,
                opts.kind,
            ));
        }

        RenderInstruction { axis: Some(axis), partitions, metas, aliases: opts.aliases.clone() }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the rendering surface needs for one pass: partitioned series,
/// the reconciled axis, and formatter entry points for ticks and tooltips.
pub struct RenderInstruction {
    /// Absent when there was nothing to render.
    pub axis: Option<AxisDescriptor>,
    pub partitions: Vec<Partitioned>,
    metas: BTreeMap<String, SeriesMeta>,
    aliases: HashMap<String, String>,
}

impl RenderInstruction {
    pub fn empty() -> Self {
        Self {
            axis: None,
            partitions: Vec::new(),
            metas: BTreeMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_none()
    }

    /// Y-axis tick label in the reconciled type/unit.
    /// Empty instructions have no axis and label nothing.
    pub fn axis_label(&self, value: f64) -> String {
        match &self.axis {
            Some(axis) => axis.label(value),
            None => String::new(),
        }
    }

    /// Formatted tooltip rows for a hover batch on a single chart.
    pub fn tooltip(&self, samples: &[TooltipSample]) -> Vec<TooltipLine> {
        match &self.axis {
            Some(axis) => aggregate(samples, axis, &self.metas, &self.aliases),
            None => Vec::new(),
        }
    }

    /// Formatted tooltip rows gated by hover-sync: linked instances that are
    /// not the actually-hovered one render nothing.
    pub fn tooltip_for_instance(
        &self,
        samples: &[TooltipSample],
        sync: &HoverSync,
        instance: &str,
    ) -> Vec<TooltipLine> {
        if !sync.is_active(instance) {
            return Vec::new();
        }
        self.tooltip(samples)
    }
}
