//! Input-side adverse-event entities, as handed over by the registry
//! client after payload decoding.

/// A study arm (cohort) as reported in the adverse-events block.
///
/// `id` is unique within one trial's payload; `title` may be empty.
/// The per-category counts are the registry's own arm-level summary and
/// arrive already coerced: anything non-numeric in the raw payload is
/// `None` here.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventGroup {
    pub id: String,
    pub title: String,
    pub serious_affected: Option<f64>,
    pub serious_at_risk: Option<f64>,
    pub other_affected: Option<f64>,
    pub other_at_risk: Option<f64>,
}

/// One reported statistic for one arm beneath an event term.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventStat {
    pub group_id: String,
    pub num_affected: Option<f64>,
    pub num_events: Option<f64>,
    pub num_at_risk: Option<f64>,
}

/// One event term with its nested per-arm statistics.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AdverseEvent {
    pub term: String,
    pub organ_system: String,
    pub stats: Vec<EventStat>,
}

/// Flattened (term, organ system, arm) record produced by the unnest
/// step; parent keys are repeated onto every statistic.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventStatRecord {
    pub term: String,
    pub organ_system: String,
    pub group_id: String,
    pub num_affected: Option<f64>,
    pub num_events: Option<f64>,
    pub num_at_risk: Option<f64>,
}

/// The adverse-events block of one trial's results section.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AdverseEvents {
    pub groups: Vec<EventGroup>,
    pub serious: Vec<AdverseEvent>,
    pub other: Vec<AdverseEvent>,
}

/// Everything the core consumes from one registry fetch.
///
/// `adverse_events` is `None` when the trial has no results section;
/// the declared enrollment remains usable as a degraded fallback.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrialData {
    pub enrollment: Option<f64>,
    pub adverse_events: Option<AdverseEvents>,
}
