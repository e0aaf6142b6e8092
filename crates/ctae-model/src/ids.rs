#![deny(unsafe_code)]

use std::fmt;

use crate::AeError;

/// Registry lookup key for a trial (e.g. "NCT01234567").
///
/// The token is opaque to the core: it is trimmed and forwarded to the
/// registry verbatim, never parsed for structure.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TrialId(String);

impl TrialId {
    pub fn new(value: impl Into<String>) -> Result<Self, AeError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AeError::InvalidTrialId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let id = TrialId::new("  NCT01234567 ").expect("valid id");
        assert_eq!(id.as_str(), "NCT01234567");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(TrialId::new("   ").is_err());
    }
}
