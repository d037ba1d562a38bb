//! Pipeline Engine Tests.
//!
//! Exercises the clock step end to end: fetch order, the shift toward
//! write-back, history logging, purity, and the finish condition.

use mipsvis_core::core::pipeline::engine::{SimulationState, WRITEBACK_DELAY, initialize, step};
use mipsvis_core::core::pipeline::latches::PipelineRegister;
use mipsvis_core::sim::program::Instruction;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::builder::program;

/// Steps from the initial snapshot until the program is finished.
fn run_to_end(instructions: &[Instruction]) -> Vec<SimulationState> {
    let mut states = vec![initialize(instructions)];
    while let Some(last) = states.last() {
        if last.is_finished(instructions.len()) {
            break;
        }
        let next = step(last, instructions);
        states.push(next);
    }
    states
}

#[test]
fn single_nop_drains_after_five_steps() {
    let instrs = program(&[0]);
    let states = run_to_end(&instrs);
    let last = &states[states.len() - 1];

    assert_eq!(last.clock_cycle(), 5);
    assert!(last.is_drained());
    assert_eq!(last.wb_history().len(), 5);
    assert_eq!(last.wb_history()[4], Some(instrs[0].clone()));
    assert_eq!(last.history(PipelineRegister::IfId)[1], Some(instrs[0].clone()));
    assert_eq!(last.history(PipelineRegister::MemWb)[4], Some(instrs[0].clone()));
}

#[test]
fn occupant_moves_one_latch_per_cycle() {
    let instrs = program(&[0x8e110000]);
    let mut state = initialize(&instrs);
    for register in PipelineRegister::ALL {
        state = step(&state, &instrs);
        assert_eq!(state.occupant(register), Some(&instrs[0]), "{register}");
        for other in PipelineRegister::ALL {
            if other != register {
                assert_eq!(state.occupant(other), None, "{other}");
            }
        }
    }
}

#[test]
fn empty_program_only_advances_the_clock() {
    let state = step(&initialize(&[]), &[]);
    assert_eq!(state.clock_cycle(), 1);
    assert!(state.is_drained());
    assert_eq!(state.wb_history(), &[None::<Instruction>]);
    assert!(!state.is_finished(0));
}

#[test]
fn latches_keep_their_register() {
    let instrs = program(&[0x00640820, 0x10800001]);
    let state = step(&step(&initialize(&instrs), &instrs), &instrs);
    for (latch, register) in state.pipeline().iter().zip(PipelineRegister::ALL) {
        assert_eq!(latch.register, register);
        assert_eq!(state.latch(register), latch);
    }
}

proptest! {
    #[test]
    fn every_instruction_passes_each_latch_once(words in prop::collection::vec(any::<u32>(), 0..12)) {
        let instrs = program(&words);
        let states = run_to_end(&instrs);
        let last = &states[states.len() - 1];

        prop_assert_eq!(last.clock_cycle(), (instrs.len() + WRITEBACK_DELAY) as u64);
        for (i, inst) in instrs.iter().enumerate() {
            for register in PipelineRegister::ALL {
                let history = last.history(register);
                let seen = history.iter().flatten().filter(|s| s.id() == inst.id()).count();
                prop_assert_eq!(seen, 1);
                prop_assert_eq!(history[i + 1 + register.index()].as_ref(), Some(inst));
            }
            prop_assert_eq!(last.wb_history()[i + WRITEBACK_DELAY].as_ref(), Some(inst));
        }
    }

    #[test]
    fn pipeline_stays_drained_after_the_last_writeback(
        words in prop::collection::vec(any::<u32>(), 0..10),
        extra in 0usize..8,
    ) {
        let instrs = program(&words);
        let mut state = initialize(&instrs);
        for _ in 0..instrs.len() + WRITEBACK_DELAY + extra {
            state = step(&state, &instrs);
            let cycle = state.clock_cycle() as usize;
            for register in PipelineRegister::ALL {
                prop_assert_eq!(state.history(register).len(), cycle);
            }
            prop_assert_eq!(state.wb_history().len(), cycle);
            prop_assert_eq!(state.is_finished(instrs.len()), cycle >= instrs.len() + WRITEBACK_DELAY);
        }
        prop_assert!(state.is_drained());
        prop_assert!(state.wb_history()[instrs.len() + WRITEBACK_DELAY..].iter().all(Option::is_none));
    }

    #[test]
    fn latches_hold_program_order(words in prop::collection::vec(any::<u32>(), 1..10), cycles in 0usize..16) {
        let instrs = program(&words);
        let mut state = initialize(&instrs);
        for _ in 0..cycles {
            state = step(&state, &instrs);
        }
        let ids: Vec<usize> = state.pipeline().iter().filter_map(|l| l.instruction.as_ref()).map(Instruction::id).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] > w[1]), "ids {:?}", ids);
        prop_assert!(ids.len() <= PipelineRegister::ALL.len());
    }

    #[test]
    fn step_is_deterministic_and_pure(words in prop::collection::vec(any::<u32>(), 0..8), cycles in 0usize..12) {
        let instrs = program(&words);
        let mut state = initialize(&instrs);
        for _ in 0..cycles {
            state = step(&state, &instrs);
        }
        let before = state.clone();
        let a = step(&state, &instrs);
        let b = step(&state, &instrs);
        prop_assert_eq!(&state, &before);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.clock_cycle(), state.clock_cycle() + 1);
        for register in PipelineRegister::ALL {
            prop_assert_eq!(a.history(register).len(), a.clock_cycle() as usize);
        }
    }
}
