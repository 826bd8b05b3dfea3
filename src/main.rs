use wavemod::driver::schedule::{run_schedule, DEMO_AMPLITUDES};
use wavemod::driver::transmit::transmit;
use wavemod::generator::WaveModulator;

fn main() {
    println!("Wavemod Amplitude Modulation Demo");
    println!("=================================");
    println!();

    let steps = 12;

    println!("Configuration:");
    println!("  Steps: {}", steps);
    println!("  Schedule entries: {}", DEMO_AMPLITUDES.len());
    println!();

    let mut modulator = match WaveModulator::new(steps) {
        Ok(modulator) => modulator,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for output in run_schedule(&mut modulator, &DEMO_AMPLITUDES) {
        transmit(output);
    }
}
