//! Scalar aggregation and detail-table augmentation.

use tracing::debug;

use ctae_model::{
    AdverseEvents, AeValue, CategoryReport, DetailRow, DetailTable, EventCategory, EventGroup,
    EventTable, GroupTotals, Metric, TrialMetrics, format_numeric,
};

use crate::pivot::normalize;

/// Sum the arm-level counts across all event groups.
///
/// Entries the registry left blank or non-numeric contribute nothing.
pub fn group_totals(groups: &[EventGroup]) -> GroupTotals {
    let mut totals = GroupTotals::default();
    for group in groups {
        totals.serious_affected += group.serious_affected.unwrap_or(0.0);
        totals.serious_at_risk += group.serious_at_risk.unwrap_or(0.0);
        totals.other_affected += group.other_affected.unwrap_or(0.0);
    }
    totals
}

/// Build the report for one category of a trial's adverse events.
///
/// When no subject had an event of this category the detailed pivot is
/// skipped entirely: the category reports zero subjects, zero terms and
/// no detail table.
pub fn category_report(
    category: EventCategory,
    data: &AdverseEvents,
    totals: &GroupTotals,
) -> CategoryReport {
    let affected = totals.affected(category);
    if affected == 0.0 {
        debug!(category = category.code(), "no affected subjects, skipping detail table");
        return zero_report(category);
    }
    let events = match category {
        EventCategory::Serious => &data.serious,
        EventCategory::Other => &data.other,
    };
    let table = normalize(events, &data.groups, category);
    let at_risk = totals.at_risk(category);
    let subject_percent = AeValue::ratio(100.0 * affected, at_risk)
        .rounded(2)
        .render();
    let report = CategoryReport {
        category,
        affected,
        subject_percent,
        term_count: table.term_count(),
        detail: Some(build_detail_table(&table, at_risk)),
    };
    debug!(
        category = category.code(),
        terms = report.term_count,
        affected,
        "built category report"
    );
    report
}

/// Report for a category with zero affected subjects: no detail table.
pub fn zero_report(category: EventCategory) -> CategoryReport {
    CategoryReport {
        category,
        affected: 0.0,
        subject_percent: format_numeric(0.0),
        term_count: 0,
        detail: None,
    }
}

/// Augment the Subjects block of a wide table into the display shape:
/// a `Total` row first, then term rows, each with a cross-arm `Total`
/// and a `Percent` column against the at-risk denominator.
pub fn build_detail_table(table: &EventTable, at_risk: f64) -> DetailTable {
    let mut term_rows: Vec<DetailRow> = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let cells = row.metric(Metric::Subjects).to_vec();
        let total = AeValue::sum_known(cells.iter().copied());
        term_rows.push(DetailRow {
            term: row.term.clone(),
            cells,
            total: AeValue::Known(total),
            percent: AeValue::ratio(100.0 * total, at_risk).rounded(3),
        });
    }

    // Per-arm column totals, missing cells skipped.
    let column_totals: Vec<AeValue> = (0..table.arm_count())
        .map(|arm_idx| {
            let sum = AeValue::sum_known(
                table
                    .rows
                    .iter()
                    .map(|row| row.metric(Metric::Subjects).get(arm_idx).copied())
                    .map(|cell| cell.unwrap_or(AeValue::NotAvailable)),
            );
            AeValue::Known(sum)
        })
        .collect();
    let grand_total = AeValue::sum_known(column_totals.iter().copied());
    let total_row = DetailRow {
        term: "Total".to_string(),
        cells: column_totals,
        total: AeValue::Known(grand_total),
        percent: AeValue::ratio(100.0 * grand_total, at_risk).rounded(3),
    };

    let mut rows = Vec::with_capacity(term_rows.len() + 1);
    rows.push(total_row);
    rows.extend(term_rows);

    DetailTable {
        category: table.category,
        arms: table.arms.clone(),
        rows,
    }
}

/// Derive the per-trial scalar metrics shared by the aggregate summary
/// and batch comparison rows. Undefined ratios (zero denominator) are
/// reported as unavailable, not errors.
pub fn trial_metrics(
    totals: &GroupTotals,
    sae: &CategoryReport,
    oae: &CategoryReport,
) -> TrialMetrics {
    let ae_count = sae.term_count + oae.term_count;
    let subjects_with_ae = totals.serious_affected + totals.other_affected;
    let in_study = totals.other_at_risk();
    let arm_count = sae.arm_count().max(oae.arm_count());
    TrialMetrics {
        ae_count: AeValue::Known(ae_count as f64),
        subjects_with_ae: AeValue::Known(subjects_with_ae),
        subjects_in_study: AeValue::Known(in_study),
        pct_subjects_with_ae: AeValue::ratio(100.0 * subjects_with_ae, in_study).rounded(3),
        subjects_per_ae: AeValue::ratio(in_study, ae_count as f64).rounded(4),
        arm_count: AeValue::Known(arm_count as f64),
    }
}
