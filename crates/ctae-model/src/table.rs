#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::AeValue;

/// Adverse-event category, mirroring the registry's two event lists.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum EventCategory {
    Serious,
    Other,
}

impl EventCategory {
    /// Short label used in summary tables ("SAE" / "OAE").
    pub fn code(self) -> &'static str {
        match self {
            Self::Serious => "SAE",
            Self::Other => "OAE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Serious => "Serious Adverse Event",
            Self::Other => "Other Adverse Event",
        }
    }
}

/// Top-level column group of the wide table.
///
/// `Events` is optional in the source data: the registry commonly omits
/// event-level counts for the "Other" category, in which case the pivot
/// degrades to the remaining two metrics.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Metric {
    Subjects,
    Events,
    TotalSubjects,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Self::Subjects => "Subjects",
            Self::Events => "Events",
            Self::TotalSubjects => "Total_Subjects",
        }
    }
}

/// One term row of the wide table. Cell vectors are aligned with the
/// owning table's `arms`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventRow {
    pub term: String,
    pub organ_system: String,
    pub cells: BTreeMap<Metric, Vec<AeValue>>,
}

impl EventRow {
    /// Cells of one metric block, in arm order.
    pub fn metric(&self, metric: Metric) -> &[AeValue] {
        self.cells.get(&metric).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Wide adverse-event table: term rows, (metric x arm) columns.
///
/// Invariants maintained by the normalizer: every source term appears
/// exactly once, in first-appearance order; `arms` is the union of
/// observed group ids decoded to titles, also in first-appearance
/// order; `metrics` lists only the metric blocks actually observed.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventTable {
    pub category: EventCategory,
    pub arms: Vec<String>,
    pub metrics: Vec<Metric>,
    pub rows: Vec<EventRow>,
}

impl EventTable {
    pub fn empty(category: EventCategory) -> Self {
        Self {
            category,
            arms: Vec::new(),
            metrics: vec![Metric::Subjects, Metric::TotalSubjects],
            rows: Vec::new(),
        }
    }

    pub fn term_count(&self) -> usize {
        self.rows.len()
    }

    pub fn arm_count(&self) -> usize {
        self.arms.len()
    }

    pub fn has_metric(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }
}
