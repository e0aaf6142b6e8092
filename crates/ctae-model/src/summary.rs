//! Display artifacts: per-category detail tables, trial summaries and
//! batch comparison rows. Constructed fresh per query, never persisted.

use crate::{AeValue, EventCategory, TrialId};

/// Column headers of the batch comparison table, in rendered order.
pub const BATCH_HEADERS: [&str; 7] = [
    "NCTID",
    "AE Count",
    "Subjects with AE",
    "Subjects in study",
    "% subjects w AE",
    "Subject per AE",
    "Study Arm Count",
];

/// Arm-level sums across one trial's event groups.
///
/// Non-numeric registry entries contribute nothing to the sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupTotals {
    pub serious_affected: f64,
    pub serious_at_risk: f64,
    pub other_affected: f64,
}

impl GroupTotals {
    /// At-risk denominator for the other-event category.
    ///
    /// Registry payload convention: read from the serious block, not
    /// from `EventGroupOtherNumAtRisk`. See DESIGN.md before changing.
    pub fn other_at_risk(&self) -> f64 {
        self.serious_at_risk
    }

    pub fn affected(&self, category: EventCategory) -> f64 {
        match category {
            EventCategory::Serious => self.serious_affected,
            EventCategory::Other => self.other_affected,
        }
    }

    pub fn at_risk(&self, category: EventCategory) -> f64 {
        match category {
            EventCategory::Serious => self.serious_at_risk,
            EventCategory::Other => self.other_at_risk(),
        }
    }
}

/// One row of a rendered detail table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DetailRow {
    pub term: String,
    /// Subject counts per arm, aligned with [`DetailTable::arms`].
    pub cells: Vec<AeValue>,
    /// Sum across arms (missing cells skipped).
    pub total: AeValue,
    /// `100 x total / at-risk`, rounded to 3 decimals.
    pub percent: AeValue,
}

/// Subject-count detail table for one category, augmented with a
/// leading `Total` row and per-row `Total` / `Percent` columns.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DetailTable {
    pub category: EventCategory,
    pub arms: Vec<String>,
    /// First row is the `Total` row; the rest are term rows in source
    /// order.
    pub rows: Vec<DetailRow>,
}

impl DetailTable {
    /// Term rows, i.e. everything below the leading `Total` row.
    pub fn term_rows(&self) -> &[DetailRow] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// Per-category outcome of one trial query.
///
/// When no subject in the trial had an event of this category the
/// detail table is deliberately not built (`detail` is `None`) and the
/// scalar fields report zeros.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CategoryReport {
    pub category: EventCategory,
    /// Unique affected subjects across all arms.
    pub affected: f64,
    /// `100 x affected / at-risk`, rounded to 2 decimals, as displayed.
    pub subject_percent: String,
    pub term_count: usize,
    pub detail: Option<DetailTable>,
}

impl CategoryReport {
    pub fn arm_count(&self) -> usize {
        self.detail.as_ref().map_or(0, |d| d.arms.len())
    }
}

/// One row of the per-category summary table (SAE / OAE).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CategorySummaryRow {
    pub group: &'static str,
    pub subjects: f64,
    pub percentage: String,
    pub ae_count: usize,
}

/// Derived scalar metrics for one trial, shared between the aggregate
/// summary table and batch comparison rows.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrialMetrics {
    pub ae_count: AeValue,
    pub subjects_with_ae: AeValue,
    pub subjects_in_study: AeValue,
    pub pct_subjects_with_ae: AeValue,
    pub subjects_per_ae: AeValue,
    pub arm_count: AeValue,
}

impl TrialMetrics {
    /// Every field unavailable; emitted when the registry fetch failed.
    pub fn unavailable() -> Self {
        Self {
            ae_count: AeValue::NotAvailable,
            subjects_with_ae: AeValue::NotAvailable,
            subjects_in_study: AeValue::NotAvailable,
            pct_subjects_with_ae: AeValue::NotAvailable,
            subjects_per_ae: AeValue::NotAvailable,
            arm_count: AeValue::NotAvailable,
        }
    }

    /// Degraded row for a trial without results data: only the declared
    /// enrollment count survives.
    pub fn enrollment_only(enrollment: Option<f64>) -> Self {
        Self {
            subjects_in_study: AeValue::from_opt(enrollment),
            ..Self::unavailable()
        }
    }

    /// Values in [`BATCH_HEADERS`] order, without the leading id.
    pub fn cells(&self) -> [AeValue; 6] {
        [
            self.ae_count,
            self.subjects_with_ae,
            self.subjects_in_study,
            self.pct_subjects_with_ae,
            self.subjects_per_ae,
            self.arm_count,
        ]
    }
}

/// One row of the batch comparison table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BatchRow {
    pub id: TrialId,
    pub metrics: TrialMetrics,
}

/// Full single-trial result: both category reports plus the aggregate.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrialReport {
    pub id: TrialId,
    pub sae: CategoryReport,
    pub oae: CategoryReport,
    pub summary: TrialMetrics,
}

impl TrialReport {
    /// Rows of the per-category summary table, SAE first.
    pub fn category_summary(&self) -> [CategorySummaryRow; 2] {
        [
            CategorySummaryRow {
                group: EventCategory::Serious.code(),
                subjects: self.sae.affected,
                percentage: self.sae.subject_percent.clone(),
                ae_count: self.sae.term_count,
            },
            CategorySummaryRow {
                group: EventCategory::Other.code(),
                subjects: self.oae.affected,
                percentage: self.oae.subject_percent.clone(),
                ae_count: self.oae.term_count,
            },
        ]
    }
}

/// Outcome of a single-trial query.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SingleOutcome {
    Report(Box<TrialReport>),
    /// Fetch failed or the trial has no results section; the query is
    /// terminal with a clear "not available" message.
    Unavailable { id: TrialId },
}

/// What one free-text query produces.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum QueryOutput {
    Single(SingleOutcome),
    Batch(Vec<BatchRow>),
}
