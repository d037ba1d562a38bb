//! Pipeline core.
//!
//! The visualizer models instruction flow only; there is no register file or
//! memory, so the core consists solely of the pipeline.

/// Five-stage pipeline: latches, engine, and hazard policies.
pub mod pipeline;
