//! Tests for the flatten + pivot normalizer.

use ctae_model::{AdverseEvent, AeValue, EventCategory, EventGroup, EventStat, Metric};
use ctae_transform::normalize;

fn group(id: &str, title: &str) -> EventGroup {
    EventGroup {
        id: id.to_string(),
        title: title.to_string(),
        ..EventGroup::default()
    }
}

fn stat(group_id: &str, affected: Option<f64>, events: Option<f64>, at_risk: Option<f64>) -> EventStat {
    EventStat {
        group_id: group_id.to_string(),
        num_affected: affected,
        num_events: events,
        num_at_risk: at_risk,
    }
}

fn event(term: &str, stats: Vec<EventStat>) -> AdverseEvent {
    AdverseEvent {
        term: term.to_string(),
        organ_system: "Investigations".to_string(),
        stats,
    }
}

#[test]
fn pivots_terms_to_rows_and_arms_to_columns() {
    let groups = vec![group("EG000", "Placebo"), group("EG001", "Drug 10mg")];
    let events = vec![
        event(
            "Anemia",
            vec![
                stat("EG000", Some(2.0), Some(3.0), Some(50.0)),
                stat("EG001", Some(5.0), Some(6.0), Some(48.0)),
            ],
        ),
        event("Headache", vec![stat("EG001", Some(1.0), Some(1.0), Some(48.0))]),
    ];

    let table = normalize(&events, &groups, EventCategory::Serious);

    assert_eq!(table.arms, vec!["Placebo", "Drug 10mg"]);
    assert_eq!(
        table.metrics,
        vec![Metric::Subjects, Metric::Events, Metric::TotalSubjects]
    );
    assert_eq!(table.term_count(), 2);
    assert_eq!(table.rows[0].term, "Anemia");
    assert_eq!(table.rows[0].metric(Metric::Subjects), &[
        AeValue::Known(2.0),
        AeValue::Known(5.0)
    ]);
    // Headache was never reported for the first arm.
    assert_eq!(table.rows[1].metric(Metric::Subjects), &[
        AeValue::NotAvailable,
        AeValue::Known(1.0)
    ]);
}

#[test]
fn row_order_follows_first_appearance() {
    let groups = vec![group("EG000", "Placebo")];
    let events = vec![
        event("Zoster", vec![stat("EG000", Some(1.0), None, Some(10.0))]),
        event("Anemia", vec![stat("EG000", Some(2.0), None, Some(10.0))]),
    ];

    let table = normalize(&events, &groups, EventCategory::Other);
    let terms: Vec<&str> = table.rows.iter().map(|row| row.term.as_str()).collect();
    assert_eq!(terms, vec!["Zoster", "Anemia"]);
}

#[test]
fn degrades_to_two_metrics_when_event_counts_are_absent() {
    let groups = vec![group("EG000", "Placebo")];
    let events = vec![event(
        "Nausea",
        vec![stat("EG000", Some(4.0), None, Some(20.0))],
    )];

    let table = normalize(&events, &groups, EventCategory::Other);
    assert_eq!(table.metrics, vec![Metric::Subjects, Metric::TotalSubjects]);
    assert!(!table.has_metric(Metric::Events));
}

#[test]
fn unknown_group_id_keeps_raw_id_as_column_label() {
    let groups = vec![group("EG000", "Placebo")];
    let events = vec![event(
        "Nausea",
        vec![
            stat("EG000", Some(4.0), None, Some(20.0)),
            stat("EG777", Some(1.0), None, Some(20.0)),
        ],
    )];

    let table = normalize(&events, &groups, EventCategory::Other);
    assert_eq!(table.arms, vec!["Placebo", "EG777"]);
}

#[test]
fn empty_event_list_yields_zero_row_table() {
    let groups = vec![group("EG000", "Placebo")];
    let table = normalize(&[], &groups, EventCategory::Serious);
    assert_eq!(table.term_count(), 0);
    assert!(table.arms.is_empty());
}

#[test]
fn non_coercible_counts_become_missing_cells() {
    let groups = vec![group("EG000", "Placebo")];
    // The registry client maps non-numeric payload entries to None
    // before they reach the normalizer.
    let events = vec![event("Rash", vec![stat("EG000", None, None, Some(20.0))])];

    let table = normalize(&events, &groups, EventCategory::Other);
    assert_eq!(
        table.rows[0].metric(Metric::Subjects),
        &[AeValue::NotAvailable]
    );
    assert_eq!(
        table.rows[0].metric(Metric::TotalSubjects),
        &[AeValue::Known(20.0)]
    );
}
