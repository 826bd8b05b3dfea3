//! CLI tool for rendering an amplitude-modulated sine sweep
//!
//! Usage: modulate <steps> <amplitudes>
//!
//! Feeds the amplitudes to a fresh modulator, one per step, and prints each
//! rendered output line, starting with the priming activation.

use std::env;
use std::process;

use wavemod::driver::schedule::run_schedule;
use wavemod::driver::transmit::transmit;
use wavemod::generator::WaveModulator;

const USAGE: &str = "Usage: modulate <steps> <amplitudes>

Render one cycle of an amplitude-modulated sine wave to stdout.

Arguments:
  steps         Samples in one full cycle (positive integer)
  amplitudes    Comma-separated amplitude per step (e.g. '7,7,2,2')

Examples:
  modulate 12 7,7,7,2,2,2,2,10,10,10,10,10
  modulate 8 1,1,1,1
";

/// Parse comma-separated amplitudes (e.g. "7,7,2")
fn parse_amplitudes(s: &str) -> Result<Vec<f32>, std::num::ParseFloatError> {
    s.split(',').map(|part| part.trim().parse()).collect()
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let steps: usize = match args[1].parse() {
        Ok(steps) => steps,
        Err(_) => {
            eprintln!("Invalid step count: {}", args[1]);
            process::exit(1);
        }
    };

    let amplitudes = match parse_amplitudes(&args[2]) {
        Ok(amplitudes) => amplitudes,
        Err(_) => {
            eprintln!("Invalid amplitude list: {}", args[2]);
            process::exit(1);
        }
    };

    let mut modulator = match WaveModulator::new(steps) {
        Ok(modulator) => modulator,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Priming entry first, then one entry per amplitude.
    let mut inputs: Vec<Option<f32>> = vec![None];
    inputs.extend(amplitudes.into_iter().map(Some));

    for output in run_schedule(&mut modulator, &inputs) {
        transmit(output);
    }
}
