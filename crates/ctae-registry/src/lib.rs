//! ClinicalTrials.gov registry access.
//!
//! Thin I/O wrapper around the legacy full-studies endpoint: issues one
//! GET per trial identifier, decodes the payload leniently, and hands
//! the core a model-level [`ctae_model::TrialData`]. All transformation
//! happens downstream in `ctae-transform`.

pub mod client;
pub mod payload;

pub use client::{DEFAULT_REGISTRY_URL, RegistryClient};
pub use payload::ResponseEnvelope;
