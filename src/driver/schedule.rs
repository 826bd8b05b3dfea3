//! Control schedules for driving a wave modulator
//!
//! A schedule is an ordered list of optional control inputs. The runner
//! performs one activation per entry, in order, and collects each result.
//! By convention the first entry is `None`, serving as the priming
//! activation.

use crate::generator::WaveModulator;

/// The demonstration schedule: a priming entry followed by twelve
/// amplitudes, matching a 12-step modulator exactly.
pub const DEMO_AMPLITUDES: [Option<f32>; 13] = [
    None,
    Some(7.0),
    Some(7.0),
    Some(7.0),
    Some(2.0),
    Some(2.0),
    Some(2.0),
    Some(2.0),
    Some(10.0),
    Some(10.0),
    Some(10.0),
    Some(10.0),
    Some(10.0),
];

/// Activate the modulator once per schedule entry, in order
///
/// Returns one output per input; entries past the modulator's exhaustion
/// come back as `None`.
pub fn run_schedule(
    modulator: &mut WaveModulator,
    inputs: &[Option<f32>],
) -> Vec<Option<f32>> {
    inputs
        .iter()
        .map(|&input| modulator.activate(input))
        .collect()
}
