//! One-to-many unnest of nested event statistics.

use ctae_model::{AdverseEvent, EventStatRecord};

/// Flatten event entries into long-format records, one per nested
/// per-arm statistic, repeating the parent term and organ system onto
/// every record. A term without statistics contributes no records.
pub fn flatten_events(events: &[AdverseEvent]) -> Vec<EventStatRecord> {
    let mut records = Vec::new();
    for event in events {
        for stat in &event.stats {
            records.push(EventStatRecord {
                term: event.term.clone(),
                organ_system: event.organ_system.clone(),
                group_id: stat.group_id.clone(),
                num_affected: stat.num_affected,
                num_events: stat.num_events,
                num_at_risk: stat.num_at_risk,
            });
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctae_model::EventStat;

    #[test]
    fn repeats_parent_keys_onto_each_statistic() {
        let events = vec![AdverseEvent {
            term: "Anemia".to_string(),
            organ_system: "Blood and lymphatic system disorders".to_string(),
            stats: vec![
                EventStat {
                    group_id: "EG000".to_string(),
                    num_affected: Some(2.0),
                    num_events: None,
                    num_at_risk: Some(50.0),
                },
                EventStat {
                    group_id: "EG001".to_string(),
                    num_affected: Some(5.0),
                    num_events: None,
                    num_at_risk: Some(48.0),
                },
            ],
        }];

        let records = flatten_events(&events);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.term == "Anemia"));
        assert_eq!(records[0].group_id, "EG000");
        assert_eq!(records[1].num_affected, Some(5.0));
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(flatten_events(&[]).is_empty());
    }
}
