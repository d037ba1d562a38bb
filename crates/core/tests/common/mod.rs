//! Shared helpers for the test suite.

/// Instruction encoders and program builders.
pub mod builder;

/// Mock collaborators.
pub mod mocks;

/// Installs a `trace`-level subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("trace"))
        .with_test_writer()
        .try_init();
}
