//! Payload decoding tests against representative registry JSON.

use ctae_model::AeError;
use ctae_registry::ResponseEnvelope;

fn decode(json: serde_json::Value) -> ResponseEnvelope {
    serde_json::from_value(json).expect("decode envelope")
}

fn full_payload() -> serde_json::Value {
    serde_json::json!({
        "FullStudiesResponse": {
            "FullStudies": [{
                "Study": {
                    "ProtocolSection": {
                        "DesignModule": {
                            "EnrollmentInfo": { "EnrollmentCount": "98" }
                        }
                    },
                    "ResultsSection": {
                        "AdverseEventsModule": {
                            "EventGroupList": {
                                "EventGroup": [
                                    {
                                        "EventGroupId": "EG000",
                                        "EventGroupTitle": "Placebo",
                                        "EventGroupSeriousNumAffected": "2",
                                        "EventGroupSeriousNumAtRisk": "50",
                                        "EventGroupOtherNumAffected": "10",
                                        "EventGroupOtherNumAtRisk": "50"
                                    },
                                    {
                                        "EventGroupId": "EG001",
                                        "EventGroupTitle": "Drug 10mg",
                                        "EventGroupSeriousNumAffected": "5",
                                        "EventGroupSeriousNumAtRisk": "48",
                                        "EventGroupOtherNumAffected": "not reported",
                                        "EventGroupOtherNumAtRisk": "48"
                                    }
                                ]
                            },
                            "SeriousEventList": {
                                "SeriousEvent": [{
                                    "SeriousEventTerm": "Anemia",
                                    "SeriousEventOrganSystem": "Blood and lymphatic system disorders",
                                    "SeriousEventStatsList": {
                                        "SeriousEventStats": [
                                            {
                                                "SeriousEventStatsGroupId": "EG000",
                                                "SeriousEventStatsNumAffected": "2",
                                                "SeriousEventStatsNumEvents": "3",
                                                "SeriousEventStatsNumAtRisk": "50"
                                            },
                                            {
                                                "SeriousEventStatsGroupId": "EG001",
                                                "SeriousEventStatsNumAffected": "5",
                                                "SeriousEventStatsNumAtRisk": "48"
                                            }
                                        ]
                                    }
                                }]
                            },
                            "OtherEventList": {
                                "OtherEvent": [{
                                    "OtherEventTerm": "Nausea",
                                    "OtherEventOrganSystem": "Gastrointestinal disorders",
                                    "OtherEventStatsList": {
                                        "OtherEventStats": [{
                                            "OtherEventStatsGroupId": "EG000",
                                            "OtherEventStatsNumAffected": "10",
                                            "OtherEventStatsNumAtRisk": "50"
                                        }]
                                    }
                                }]
                            }
                        }
                    }
                }
            }]
        }
    })
}

#[test]
fn decodes_a_full_study_payload() {
    let data = decode(full_payload()).into_trial_data().expect("trial data");

    assert_eq!(data.enrollment, Some(98.0));
    let events = data.adverse_events.expect("adverse events block");

    assert_eq!(events.groups.len(), 2);
    assert_eq!(events.groups[0].id, "EG000");
    assert_eq!(events.groups[0].title, "Placebo");
    assert_eq!(events.groups[0].serious_affected, Some(2.0));
    // Non-numeric registry entry coerces to missing, not an error.
    assert_eq!(events.groups[1].other_affected, None);

    assert_eq!(events.serious.len(), 1);
    let anemia = &events.serious[0];
    assert_eq!(anemia.term, "Anemia");
    assert_eq!(anemia.stats.len(), 2);
    assert_eq!(anemia.stats[0].num_events, Some(3.0));
    // Second arm omitted the event count entirely.
    assert_eq!(anemia.stats[1].num_events, None);

    assert_eq!(events.other.len(), 1);
    assert_eq!(events.other[0].term, "Nausea");
}

#[test]
fn missing_results_section_leaves_enrollment_usable() {
    let data = decode(serde_json::json!({
        "FullStudiesResponse": {
            "FullStudies": [{
                "Study": {
                    "ProtocolSection": {
                        "DesignModule": {
                            "EnrollmentInfo": { "EnrollmentCount": "120" }
                        }
                    }
                }
            }]
        }
    }))
    .into_trial_data()
    .expect("trial data");

    assert!(data.adverse_events.is_none());
    assert_eq!(data.enrollment, Some(120.0));
}

#[test]
fn empty_study_list_is_a_fetch_error() {
    let result = decode(serde_json::json!({
        "FullStudiesResponse": { "FullStudies": [] }
    }))
    .into_trial_data();

    assert!(matches!(result, Err(AeError::Fetch(_))));
}

#[test]
fn absent_event_lists_decode_to_empty_collections() {
    let data = decode(serde_json::json!({
        "FullStudiesResponse": {
            "FullStudies": [{
                "Study": {
                    "ResultsSection": {
                        "AdverseEventsModule": {
                            "EventGroupList": {
                                "EventGroup": [{
                                    "EventGroupId": "EG000",
                                    "EventGroupTitle": "Single Arm",
                                    "EventGroupSeriousNumAffected": "0",
                                    "EventGroupSeriousNumAtRisk": "30",
                                    "EventGroupOtherNumAffected": "0"
                                }]
                            }
                        }
                    }
                }
            }]
        }
    }))
    .into_trial_data()
    .expect("trial data");

    let events = data.adverse_events.expect("adverse events block");
    assert_eq!(events.groups.len(), 1);
    assert!(events.serious.is_empty());
    assert!(events.other.is_empty());
    assert_eq!(data.enrollment, None);
}
