//! Arm-title decoding for opaque event-group ids.

use ctae_model::EventGroup;

/// Decode an arm id (e.g. "EG000") to its human-readable title.
///
/// Registry data is inconsistently populated: unknown ids and empty
/// titles are expected, and both fall back to the raw id. Total over
/// any input, never fails.
pub fn decode_group(group_id: &str, groups: &[EventGroup]) -> String {
    groups
        .iter()
        .find(|group| group.id == group_id)
        .map(|group| group.title.trim())
        .filter(|title| !title.is_empty())
        .map_or_else(|| group_id.to_string(), ToString::to_string)
}
