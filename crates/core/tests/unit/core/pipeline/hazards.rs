//! Hazard Policy Tests.

use mipsvis_core::common::SimError;
use mipsvis_core::config::SimulationMode;
use mipsvis_core::core::pipeline::engine::{initialize, step};
use mipsvis_core::core::pipeline::hazards::{NoHazards, policy_for};
use mipsvis_core::core::pipeline::traits::HazardPolicy;
use rstest::rstest;

use crate::common::builder::program;

#[test]
fn no_hazards_advances_like_step() {
    let instrs = program(&[0x02108025, 0x8e110000, 0xae120004]);
    let policy = policy_for(SimulationMode::NoHazards).unwrap();
    let mut expected = initialize(&instrs);
    let mut actual = initialize(&instrs);
    for _ in 0..6 {
        expected = step(&expected, &instrs);
        actual = policy.advance(&actual, &instrs);
    }
    assert_eq!(actual, expected);
    assert_eq!(NoHazards.mode(), SimulationMode::NoHazards);
}

#[rstest]
#[case(SimulationMode::Stalls)]
#[case(SimulationMode::Forwarding)]
fn unimplemented_modes_are_rejected(#[case] mode: SimulationMode) {
    let err = policy_for(mode).unwrap_err();
    assert_eq!(err, SimError::ModeNotImplemented(mode));
    assert_eq!(
        err.to_string(),
        format!("simulation mode '{}' is not implemented yet", mode.as_str())
    );
}
