//! Schema-tolerant pivot from long-format records to the wide table.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use ctae_model::{
    AdverseEvent, AeValue, EventCategory, EventGroup, EventRow, EventStatRecord, EventTable,
    Metric,
};

use crate::decode::decode_group;
use crate::flatten::flatten_events;

/// Flatten and pivot one event list into an [`EventTable`].
///
/// Rows are keyed by term in first-appearance order; columns are the
/// union of observed group ids, decoded to arm titles. An empty event
/// list yields a zero-row table.
pub fn normalize(
    events: &[AdverseEvent],
    groups: &[EventGroup],
    category: EventCategory,
) -> EventTable {
    let records = flatten_events(events);
    pivot_records(&records, groups, category)
}

/// Pivot flattened records by term (rows) and (metric, arm) (columns).
///
/// The metric set is built from what the input actually carries:
/// `Subjects` and `Total_Subjects` are always emitted, `Events` only
/// when at least one record has an event-level count. The registry
/// commonly omits those for the "Other" category, so a fixed-shape
/// pivot would fail on real payloads.
pub fn pivot_records(
    records: &[EventStatRecord],
    groups: &[EventGroup],
    category: EventCategory,
) -> EventTable {
    if records.is_empty() {
        return EventTable::empty(category);
    }

    let has_events = records.iter().any(|record| record.num_events.is_some());
    let metrics = if has_events {
        vec![Metric::Subjects, Metric::Events, Metric::TotalSubjects]
    } else {
        vec![Metric::Subjects, Metric::TotalSubjects]
    };

    // Union of group ids in first-appearance order.
    let mut arm_ids: Vec<String> = Vec::new();
    let mut arm_index: HashMap<String, usize> = HashMap::new();
    for record in records {
        if !arm_index.contains_key(&record.group_id) {
            arm_index.insert(record.group_id.clone(), arm_ids.len());
            arm_ids.push(record.group_id.clone());
        }
    }

    let mut rows: Vec<EventRow> = Vec::new();
    let mut row_index: HashMap<String, usize> = HashMap::new();
    for record in records {
        let row_idx = match row_index.get(&record.term).copied() {
            Some(idx) => idx,
            None => {
                let mut cells = BTreeMap::new();
                for metric in &metrics {
                    cells.insert(*metric, vec![AeValue::NotAvailable; arm_ids.len()]);
                }
                rows.push(EventRow {
                    term: record.term.clone(),
                    organ_system: record.organ_system.clone(),
                    cells,
                });
                row_index.insert(record.term.clone(), rows.len() - 1);
                rows.len() - 1
            }
        };
        let arm_idx = arm_index[&record.group_id];
        let row = &mut rows[row_idx];
        set_cell(row, Metric::Subjects, arm_idx, record.num_affected);
        if has_events {
            set_cell(row, Metric::Events, arm_idx, record.num_events);
        }
        set_cell(row, Metric::TotalSubjects, arm_idx, record.num_at_risk);
    }

    let arms: Vec<String> = arm_ids.iter().map(|id| decode_group(id, groups)).collect();

    debug!(
        category = category.code(),
        terms = rows.len(),
        arms = arms.len(),
        with_events = has_events,
        "pivoted event records"
    );

    EventTable {
        category,
        arms,
        metrics,
        rows,
    }
}

fn set_cell(row: &mut EventRow, metric: Metric, arm_idx: usize, value: Option<f64>) {
    if let Some(cells) = row.cells.get_mut(&metric) {
        cells[arm_idx] = AeValue::from_opt(value);
    }
}
