//! Pipeline core tests.

/// Clock step and hazard policy tests.
pub mod pipeline;
