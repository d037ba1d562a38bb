//! Mock collaborators.

use mipsvis_core::common::OracleError;
use mipsvis_core::validate::{InstructionOracle, Verdict};
use mockall::mock;

// Scriptable instruction oracle: `MockOracle`.
mock! {
    pub Oracle {}
    impl InstructionOracle for Oracle {
        fn check(&self, instruction: &str) -> Result<Verdict, OracleError>;
    }
}
