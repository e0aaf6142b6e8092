//! CLI library components for the adverse-event explorer.

pub mod logging;
