//! Serde types for the consumed slice of the legacy full-studies
//! response.
//!
//! The registry serializes counts as JSON strings and populates fields
//! inconsistently, so every numeric field goes through a lenient
//! deserializer: strings, numbers and garbage all decode, with anything
//! non-coercible becoming `None` rather than a decode error.

use serde::Deserialize;

use ctae_model::{
    AdverseEvent, AdverseEvents, AeError, EventGroup, EventStat, Result, TrialData,
};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "FullStudiesResponse")]
    pub response: FullStudiesResponse,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct FullStudiesResponse {
    #[serde(rename = "FullStudies", default)]
    pub full_studies: Vec<FullStudy>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct FullStudy {
    #[serde(rename = "Study")]
    pub study: Study,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Study {
    #[serde(rename = "ProtocolSection", default)]
    pub protocol_section: Option<ProtocolSection>,
    #[serde(rename = "ResultsSection", default)]
    pub results_section: Option<ResultsSection>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProtocolSection {
    #[serde(rename = "DesignModule", default)]
    pub design_module: Option<DesignModule>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DesignModule {
    #[serde(rename = "EnrollmentInfo", default)]
    pub enrollment_info: Option<EnrollmentInfo>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct EnrollmentInfo {
    #[serde(
        rename = "EnrollmentCount",
        default,
        deserialize_with = "lenient_count"
    )]
    pub enrollment_count: Option<f64>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ResultsSection {
    #[serde(rename = "AdverseEventsModule", default)]
    pub adverse_events_module: Option<AdverseEventsModule>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct AdverseEventsModule {
    #[serde(rename = "EventGroupList", default)]
    pub event_group_list: Option<EventGroupList>,
    #[serde(rename = "SeriousEventList", default)]
    pub serious_event_list: Option<SeriousEventList>,
    #[serde(rename = "OtherEventList", default)]
    pub other_event_list: Option<OtherEventList>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct EventGroupList {
    #[serde(rename = "EventGroup", default)]
    pub event_groups: Vec<RawEventGroup>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawEventGroup {
    #[serde(rename = "EventGroupId", default)]
    pub id: Option<String>,
    #[serde(rename = "EventGroupTitle", default)]
    pub title: Option<String>,
    #[serde(
        rename = "EventGroupSeriousNumAffected",
        default,
        deserialize_with = "lenient_count"
    )]
    pub serious_num_affected: Option<f64>,
    #[serde(
        rename = "EventGroupSeriousNumAtRisk",
        default,
        deserialize_with = "lenient_count"
    )]
    pub serious_num_at_risk: Option<f64>,
    #[serde(
        rename = "EventGroupOtherNumAffected",
        default,
        deserialize_with = "lenient_count"
    )]
    pub other_num_affected: Option<f64>,
    #[serde(
        rename = "EventGroupOtherNumAtRisk",
        default,
        deserialize_with = "lenient_count"
    )]
    pub other_num_at_risk: Option<f64>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SeriousEventList {
    #[serde(rename = "SeriousEvent", default)]
    pub events: Vec<SeriousEvent>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SeriousEvent {
    #[serde(rename = "SeriousEventTerm", default)]
    pub term: Option<String>,
    #[serde(rename = "SeriousEventOrganSystem", default)]
    pub organ_system: Option<String>,
    #[serde(rename = "SeriousEventStatsList", default)]
    pub stats_list: Option<SeriousEventStatsList>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SeriousEventStatsList {
    #[serde(rename = "SeriousEventStats", default)]
    pub stats: Vec<SeriousEventStats>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SeriousEventStats {
    #[serde(rename = "SeriousEventStatsGroupId", default)]
    pub group_id: Option<String>,
    #[serde(
        rename = "SeriousEventStatsNumAffected",
        default,
        deserialize_with = "lenient_count"
    )]
    pub num_affected: Option<f64>,
    #[serde(
        rename = "SeriousEventStatsNumEvents",
        default,
        deserialize_with = "lenient_count"
    )]
    pub num_events: Option<f64>,
    #[serde(
        rename = "SeriousEventStatsNumAtRisk",
        default,
        deserialize_with = "lenient_count"
    )]
    pub num_at_risk: Option<f64>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct OtherEventList {
    #[serde(rename = "OtherEvent", default)]
    pub events: Vec<OtherEvent>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct OtherEvent {
    #[serde(rename = "OtherEventTerm", default)]
    pub term: Option<String>,
    #[serde(rename = "OtherEventOrganSystem", default)]
    pub organ_system: Option<String>,
    #[serde(rename = "OtherEventStatsList", default)]
    pub stats_list: Option<OtherEventStatsList>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct OtherEventStatsList {
    #[serde(rename = "OtherEventStats", default)]
    pub stats: Vec<OtherEventStats>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct OtherEventStats {
    #[serde(rename = "OtherEventStatsGroupId", default)]
    pub group_id: Option<String>,
    #[serde(
        rename = "OtherEventStatsNumAffected",
        default,
        deserialize_with = "lenient_count"
    )]
    pub num_affected: Option<f64>,
    #[serde(
        rename = "OtherEventStatsNumEvents",
        default,
        deserialize_with = "lenient_count"
    )]
    pub num_events: Option<f64>,
    #[serde(
        rename = "OtherEventStatsNumAtRisk",
        default,
        deserialize_with = "lenient_count"
    )]
    pub num_at_risk: Option<f64>,
}

impl ResponseEnvelope {
    /// Extract the first matched study, or a fetch-level error when the
    /// expression matched nothing (unknown or retracted identifiers).
    pub fn into_trial_data(self) -> Result<TrialData> {
        let study = self
            .response
            .full_studies
            .into_iter()
            .next()
            .ok_or_else(|| AeError::Fetch("no study matched the identifier".to_string()))?
            .study;
        Ok(study.into_trial_data())
    }
}

impl Study {
    /// Reduce the payload to the model-level view the core consumes.
    pub fn into_trial_data(self) -> TrialData {
        let enrollment = self
            .protocol_section
            .and_then(|p| p.design_module)
            .and_then(|d| d.enrollment_info)
            .and_then(|e| e.enrollment_count);
        let adverse_events = self
            .results_section
            .and_then(|r| r.adverse_events_module)
            .map(AdverseEventsModule::into_adverse_events);
        TrialData {
            enrollment,
            adverse_events,
        }
    }
}

impl AdverseEventsModule {
    fn into_adverse_events(self) -> AdverseEvents {
        let groups = self
            .event_group_list
            .map(|list| list.event_groups.into_iter().map(EventGroup::from).collect())
            .unwrap_or_default();
        let serious = self
            .serious_event_list
            .map(|list| list.events.into_iter().map(AdverseEvent::from).collect())
            .unwrap_or_default();
        let other = self
            .other_event_list
            .map(|list| list.events.into_iter().map(AdverseEvent::from).collect())
            .unwrap_or_default();
        AdverseEvents {
            groups,
            serious,
            other,
        }
    }
}

impl From<RawEventGroup> for EventGroup {
    fn from(group: RawEventGroup) -> Self {
        Self {
            id: group.id.unwrap_or_default(),
            title: group.title.unwrap_or_default(),
            serious_affected: group.serious_num_affected,
            serious_at_risk: group.serious_num_at_risk,
            other_affected: group.other_num_affected,
            other_at_risk: group.other_num_at_risk,
        }
    }
}

impl From<SeriousEvent> for AdverseEvent {
    fn from(event: SeriousEvent) -> Self {
        Self {
            term: event.term.unwrap_or_default(),
            organ_system: event.organ_system.unwrap_or_default(),
            stats: event
                .stats_list
                .map(|list| list.stats.into_iter().map(EventStat::from).collect())
                .unwrap_or_default(),
        }
    }
}

impl From<SeriousEventStats> for EventStat {
    fn from(stat: SeriousEventStats) -> Self {
        Self {
            group_id: stat.group_id.unwrap_or_default(),
            num_affected: stat.num_affected,
            num_events: stat.num_events,
            num_at_risk: stat.num_at_risk,
        }
    }
}

impl From<OtherEvent> for AdverseEvent {
    fn from(event: OtherEvent) -> Self {
        Self {
            term: event.term.unwrap_or_default(),
            organ_system: event.organ_system.unwrap_or_default(),
            stats: event
                .stats_list
                .map(|list| list.stats.into_iter().map(EventStat::from).collect())
                .unwrap_or_default(),
        }
    }
}

impl From<OtherEventStats> for EventStat {
    fn from(stat: OtherEventStats) -> Self {
        Self {
            group_id: stat.group_id.unwrap_or_default(),
            num_affected: stat.num_affected,
            num_events: stat.num_events,
            num_at_risk: stat.num_at_risk,
        }
    }
}

/// Deserialize a count that may arrive as a JSON string, a number, or
/// anything else the registry emits. Non-coercible values become `None`.
fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_count(&value))
}

fn coerce_count(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_strings_numbers_and_garbage() {
        assert_eq!(coerce_count(&serde_json::json!("42")), Some(42.0));
        assert_eq!(coerce_count(&serde_json::json!(42)), Some(42.0));
        assert_eq!(coerce_count(&serde_json::json!(" 7 ")), Some(7.0));
        assert_eq!(coerce_count(&serde_json::json!("n/a")), None);
        assert_eq!(coerce_count(&serde_json::json!(null)), None);
        assert_eq!(coerce_count(&serde_json::json!([1])), None);
    }
}
