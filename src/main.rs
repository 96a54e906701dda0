//! Pulser - Pulse Network Simulator
//!
//! Presses the button on a wired module network and reports either
//! aggregate pulse counts or the combined period of a sink's
//! predecessors.
//!
//! # Usage
//!
//! ```bash
//! pulser network.txt --presses 1000
//! pulser network.txt --sink rx --confirm
//! ```

use std::path::PathBuf;

use clap::Parser;
use pulser_core::{
    circuit::{validate_circuit, Circuit},
    dsl,
    error::Result,
    PeriodMeasurement, Propagator, DEFAULT_PRESSES,
};

/// Pulse network simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the wiring description file
    #[arg(value_name = "WIRING_FILE")]
    wiring_file: PathBuf,

    /// Number of button presses for the aggregate measurement
    #[arg(short, long, default_value_t = DEFAULT_PRESSES)]
    presses: usize,

    /// Measure the combined period of this sink's predecessors instead
    #[arg(short, long)]
    sink: Option<String>,

    /// Confirm each predecessor's recurrence interval before resolving
    #[arg(long, requires = "sink")]
    confirm: bool,

    /// Verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .format_timestamp(None)
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();

    // Parse and build the circuit
    let ast = dsl::parse_file(&args.wiring_file)?;
    let circuit = Circuit::from_ast(ast)?;
    validate_circuit(&circuit)?;

    match args.sink {
        Some(sink) => {
            let predecessors = circuit.sources_of(&sink).to_vec();
            let mut propagator = Propagator::new(circuit);
            let period = PeriodMeasurement::new()
                .with_confirmation(args.confirm)
                .measure(&mut propagator, &predecessors)?;
            println!("combined period of '{sink}' predecessors: {period}");
        }
        None => {
            let mut propagator = Propagator::new(circuit);
            let (low, high) = propagator.count_pulses(args.presses)?;
            println!("{low} low, {high} high after {} presses", args.presses);
            println!("product: {}", low * high);
        }
    }

    Ok(())
}
