//! MIPS pipeline visualizer CLI.
//!
//! This binary is the text front end of the visualizer. It provides:
//! 1. **Decode:** Disassemble one or more hex words.
//! 2. **Run:** Validate a hex program, step it through the five-stage pipeline, and print the
//!    latch contents per cycle, the history grid, and the statistics report.

mod render;

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mipsvis_core::Simulator;
use mipsvis_core::config::{Config, SimulationMode};
use mipsvis_core::isa::decode::{Format, decode};
use mipsvis_core::isa::disasm::{disassemble_hex, parse_word};
use mipsvis_core::sim::loader;
use mipsvis_core::validate::{DecoderOracle, InstructionOracle, PermissiveOracle};

#[derive(Parser, Debug)]
#[command(
    name = "mipsvis",
    author,
    version,
    about = "MIPS five-stage pipeline visualizer",
    long_about = "Decode MIPS machine words or step a hex program through an ideal IF/ID/EX/MEM/WB pipeline.\n\nExamples:\n  mipsvis decode 0x8e110000 0x10800001\n  mipsvis run -f program.hex\n  printf '0x02108025\\n0x8e110000\\n' | mipsvis run --json"
)]
struct Cli {
    /// Emit per-cycle trace events (overrides RUST_LOG).
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Disassemble hex instruction words.
    Decode {
        /// Words such as 0x8e110000.
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Simulate a program of hex words, one per line.
    Run {
        /// Program file; reads stdin when omitted.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Hazard handling mode (overrides the config file).
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Stop after this many cycles instead of running to completion.
        #[arg(long)]
        cycles: Option<u64>,

        /// Skip validation of the program text.
        #[arg(long)]
        no_validate: bool,

        /// Print only the final state instead of every cycle.
        #[arg(long)]
        quiet: bool,

        /// Print the final state and statistics as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Command-line spelling of [`SimulationMode`].
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Ideal pipeline without hazard handling.
    NoHazards,
    /// Detect and stall (not implemented yet).
    Stalls,
    /// Detect and forward (not implemented yet).
    Forwarding,
}

impl From<ModeArg> for SimulationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::NoHazards => Self::NoHazards,
            ModeArg::Stalls => Self::Stalls,
            ModeArg::Forwarding => Self::Forwarding,
        }
    }
}

/// Options of the `run` subcommand.
#[derive(Debug)]
struct RunOptions {
    file: Option<PathBuf>,
    config: Option<PathBuf>,
    mode: Option<ModeArg>,
    cycles: Option<u64>,
    no_validate: bool,
    quiet: bool,
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.trace);

    match cli.command {
        Commands::Decode { words } => cmd_decode(&words),
        Commands::Run {
            file,
            config,
            mode,
            cycles,
            no_validate,
            quiet,
            json,
        } => cmd_run(
            &RunOptions {
                file,
                config,
                mode,
                cycles,
                no_validate,
                quiet,
                json,
            },
            cli.trace,
        ),
    }
}

/// Installs the stderr `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` (default `warn`); `--trace` forces `trace`.
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Prints `hex  assembly` for each word.
fn cmd_decode(words: &[String]) {
    for word in words {
        let format = parse_word(word)
            .and_then(|w| decode(w).op())
            .map_or("-", |op| match op.format() {
                Format::R => "R",
                Format::I => "I",
                Format::J => "J",
            });
        println!("{word:<10}  {format}  {}", disassemble_hex(word));
    }
}

/// Loads, validates, and simulates a program; exits with code 1 on failure.
fn cmd_run(opts: &RunOptions, trace: bool) {
    let mut config = match &opts.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load(path).unwrap_or_else(|e| fail(&e.to_string()))
        }
        None => Config::default(),
    };
    if let Some(mode) = opts.mode {
        config.pipeline.mode = mode.into();
    }
    if opts.no_validate {
        config.general.validate = false;
    }
    config.general.trace |= trace;
    // Only the current snapshot is ever printed.
    config.general.retain_snapshots = false;

    let source = match &opts.file {
        Some(path) => loader::read_program(path).unwrap_or_else(|e| fail(&e.to_string())),
        None => {
            let mut text = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut text) {
                fail(&format!("could not read stdin: {e}"));
            }
            text
        }
    };

    let oracle: &dyn InstructionOracle = if config.general.validate {
        &DecoderOracle
    } else {
        &PermissiveOracle
    };
    let mut sim = Simulator::from_source(&source, &config, oracle)
        .unwrap_or_else(|e| fail(&e.to_string()));

    if !opts.json {
        println!(
            "Program ({} instructions, mode {}):",
            sim.instructions().len(),
            config.pipeline.mode
        );
        print!("{}", render::render_program(sim.instructions()));
        println!();
    }

    let limit = opts.cycles.unwrap_or(config.general.max_cycles);
    while !sim.is_finished() && sim.state().clock_cycle() < limit {
        let state = sim.tick();
        if !opts.json && !opts.quiet {
            print!("{}", render::render_stages(state));
        }
    }

    if opts.json {
        print_json(&sim);
        return;
    }

    if opts.quiet {
        print!("{}", render::render_stages(sim.state()));
    }
    println!();
    println!("Pipeline History:");
    print!("{}", render::render_history(sim.state()));
    if sim.is_finished() {
        println!("\nSimulation Finished!");
    }
    println!();
    sim.stats().print();
}

/// Prints the final snapshot and statistics as one JSON document.
fn print_json(sim: &Simulator) {
    let doc = serde_json::json!({
        "finished": sim.is_finished(),
        "instructions": sim.instructions(),
        "state": sim.state(),
        "stats": sim.stats(),
    });
    match serde_json::to_string_pretty(&doc) {
        Ok(text) => println!("{text}"),
        Err(e) => fail(&format!("could not serialize state: {e}")),
    }
}

/// Reports an error on stderr and exits with status 1.
fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}
