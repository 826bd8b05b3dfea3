use std::f32::consts::TAU;

use super::ModulatorState;

/// Errors reported by wave modulator construction
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidConfiguration(String),
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorError::InvalidConfiguration(s) => write!(f, "Invalid configuration: {}", s),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Amplitude-modulated sine wave generator
///
/// Produces one sample per activation. The caller supplies the amplitude for
/// each sample in the same activation that returns it, following a two-phase
/// protocol:
/// 1. Priming: the first activation readies the modulator and produces no
///    sample, regardless of its input.
/// 2. Feeding: each following activation takes an amplitude and returns
///    `amplitude * sin(step * 2π / steps)` for the current step.
///
/// The phase angle is taken before the step counter advances, so the first
/// sample is always `amplitude * sin(0) = 0`.
///
/// After `steps` samples the modulator is exhausted and every further
/// activation returns `None`.
#[derive(Debug)]
pub struct WaveModulator {
    // Configuration
    steps: usize,
    step_size: f32,

    // State
    step: usize,
    amplitude: Option<f32>,
    state: ModulatorState,
}

impl WaveModulator {
    /// Create a new wave modulator
    ///
    /// # Arguments
    /// * `steps` - Number of samples in one full oscillation cycle
    ///
    /// # Errors
    /// Returns `GeneratorError::InvalidConfiguration` if `steps` is zero,
    /// which would leave the phase increment undefined.
    ///
    /// # Example
    /// ```
    /// use wavemod::generator::WaveModulator;
    ///
    /// let mut modulator = WaveModulator::new(12).unwrap();
    /// assert_eq!(modulator.activate(None), None); // priming
    /// assert_eq!(modulator.activate(Some(7.0)), Some(0.0));
    /// ```
    pub fn new(steps: usize) -> Result<Self, GeneratorError> {
        if steps == 0 {
            return Err(GeneratorError::InvalidConfiguration(
                "step count must be positive".to_string(),
            ));
        }

        Ok(Self {
            steps,
            step_size: TAU / steps as f32,
            step: 0,
            amplitude: None,
            state: ModulatorState::Created,
        })
    }

    /// Get the total number of samples in one cycle
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Get the number of samples produced so far
    pub fn step(&self) -> usize {
        self.step
    }

    /// Get the current lifecycle state
    pub fn state(&self) -> ModulatorState {
        self.state
    }

    /// Get the most recently supplied amplitude, if any
    pub fn amplitude(&self) -> Option<f32> {
        self.amplitude
    }

    /// Check if the modulator has produced all of its samples
    pub fn is_exhausted(&self) -> bool {
        self.state == ModulatorState::Exhausted
    }

    /// Advance the modulator by one activation
    ///
    /// The first activation primes the modulator and returns `None` no matter
    /// what is passed; its input is discarded. Each following activation with
    /// an amplitude produces the sample for the current step and advances the
    /// step counter by one.
    ///
    /// Returns `None` without advancing when no amplitude is supplied after
    /// priming, and on every activation once the modulator is exhausted.
    /// Neither case is an error.
    pub fn activate(&mut self, input: Option<f32>) -> Option<f32> {
        match self.state {
            ModulatorState::Created => {
                self.state = ModulatorState::Primed;
                None
            }
            ModulatorState::Primed | ModulatorState::Active => {
                let amplitude = input?;
                self.amplitude = Some(amplitude);

                let sample = amplitude * (self.step as f32 * self.step_size).sin();
                self.step += 1;

                self.state = if self.step == self.steps {
                    ModulatorState::Exhausted
                } else {
                    ModulatorState::Active
                };

                Some(sample)
            }
            ModulatorState::Exhausted => None,
        }
    }

    /// Reset the modulator to its freshly-constructed state
    ///
    /// This allows a modulator to be reused rather than recreated. A reset
    /// modulator must be primed again before it produces samples.
    pub fn reset(&mut self) {
        self.step = 0;
        self.amplitude = None;
        self.state = ModulatorState::Created;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primed(steps: usize) -> WaveModulator {
        let mut modulator = WaveModulator::new(steps).unwrap();
        assert_eq!(modulator.activate(None), None);
        modulator
    }

    #[test]
    fn test_priming_returns_no_sample() {
        for steps in [1, 2, 12, 1000] {
            let mut modulator = WaveModulator::new(steps).unwrap();
            assert_eq!(modulator.activate(None), None);
            assert_eq!(modulator.state(), ModulatorState::Primed);
            assert_eq!(modulator.amplitude(), None);
            assert_eq!(modulator.step(), 0);
        }
    }

    #[test]
    fn test_priming_ignores_input() {
        // The first activation never returns a sample, even when an
        // amplitude is passed, and the amplitude is not stored.
        let mut modulator = WaveModulator::new(12).unwrap();
        assert_eq!(modulator.activate(Some(5.0)), None);
        assert_eq!(modulator.state(), ModulatorState::Primed);
        assert_eq!(modulator.amplitude(), None);

        // The next activation produces the step-0 sample.
        assert_eq!(modulator.activate(Some(5.0)), Some(0.0));
    }

    #[test]
    fn test_first_sample_is_zero() {
        for amplitude in [7.0, 2.0, 10.0, -3.5, 0.0] {
            let mut modulator = primed(12);
            let sample = modulator.activate(Some(amplitude)).unwrap();
            assert!(
                sample.abs() < 1e-6,
                "First sample for amplitude {} should be 0, got {}",
                amplitude,
                sample
            );
        }
    }

    #[test]
    fn test_phase_progression_full_cycle() {
        let steps = 12;
        let amplitudes = [
            7.0f32, 7.0, 7.0, 2.0, 2.0, 2.0, 2.0, 10.0, 10.0, 10.0, 10.0, 10.0,
        ];

        let mut modulator = primed(steps);
        for (i, &amplitude) in amplitudes.iter().enumerate() {
            let sample = modulator.activate(Some(amplitude)).unwrap();
            let expected = amplitude * (i as f32 * TAU / steps as f32).sin();
            assert!(
                (sample - expected).abs() < 1e-4,
                "Step {}: expected {}, got {}",
                i,
                expected,
                sample
            );
        }

        // One more activation signals the end of the sequence.
        assert_eq!(modulator.activate(Some(10.0)), None);
        assert!(modulator.is_exhausted());
    }

    #[test]
    fn test_exhaustion_is_stable() {
        let mut modulator = primed(3);
        for _ in 0..3 {
            assert!(modulator.activate(Some(1.0)).is_some());
        }
        assert_eq!(modulator.state(), ModulatorState::Exhausted);

        // Any further activation is a no-op, with or without an input.
        for input in [Some(4.0), None, Some(-1.0)] {
            assert_eq!(modulator.activate(input), None);
            assert_eq!(modulator.step(), 3);
            assert_eq!(modulator.state(), ModulatorState::Exhausted);
        }
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = WaveModulator::new(0).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::InvalidConfiguration("step count must be positive".to_string())
        );
        assert_eq!(
            err.to_string(),
            "Invalid configuration: step count must be positive"
        );
    }

    #[test]
    fn test_missing_amplitude_does_not_advance() {
        let mut modulator = primed(4);

        // No amplitude has ever been supplied: nothing to modulate.
        assert_eq!(modulator.activate(None), None);
        assert_eq!(modulator.step(), 0);
        assert_eq!(modulator.state(), ModulatorState::Primed);

        // The next fed activation still produces the step-0 sample.
        assert_eq!(modulator.activate(Some(2.0)), Some(0.0));

        // Mid-stream gaps hold the step counter in place too.
        assert_eq!(modulator.activate(None), None);
        assert_eq!(modulator.step(), 1);
        let sample = modulator.activate(Some(1.0)).unwrap();
        let expected = (TAU / 4.0).sin();
        assert!((sample - expected).abs() < 1e-6);
    }

    #[test]
    fn test_state_transitions() {
        let mut modulator = WaveModulator::new(2).unwrap();
        assert_eq!(modulator.state(), ModulatorState::Created);

        modulator.activate(None);
        assert_eq!(modulator.state(), ModulatorState::Primed);

        modulator.activate(Some(1.0));
        assert_eq!(modulator.state(), ModulatorState::Active);

        modulator.activate(Some(1.0));
        assert_eq!(modulator.state(), ModulatorState::Exhausted);
    }

    #[test]
    fn test_single_step_cycle() {
        let mut modulator = primed(1);
        assert_eq!(modulator.activate(Some(3.0)), Some(0.0));
        assert_eq!(modulator.state(), ModulatorState::Exhausted);
        assert_eq!(modulator.activate(Some(3.0)), None);
    }

    #[test]
    fn test_amplitude_tracks_last_input() {
        let mut modulator = primed(12);
        modulator.activate(Some(7.0));
        assert_eq!(modulator.amplitude(), Some(7.0));
        modulator.activate(Some(2.0));
        assert_eq!(modulator.amplitude(), Some(2.0));

        // A skipped activation leaves the stored amplitude in place.
        modulator.activate(None);
        assert_eq!(modulator.amplitude(), Some(2.0));
    }

    #[test]
    fn test_reset_replays_sequence() {
        let amplitudes = [3.0f32, 1.0, 4.0, 1.0, 5.0];
        let mut modulator = WaveModulator::new(5).unwrap();

        let run = |modulator: &mut WaveModulator| -> Vec<Option<f32>> {
            let mut outputs = vec![modulator.activate(None)];
            for &amplitude in &amplitudes {
                outputs.push(modulator.activate(Some(amplitude)));
            }
            outputs
        };

        let first = run(&mut modulator);
        assert!(modulator.is_exhausted());

        modulator.reset();
        assert_eq!(modulator.state(), ModulatorState::Created);
        assert_eq!(modulator.step(), 0);
        assert_eq!(modulator.amplitude(), None);

        let second = run(&mut modulator);
        assert_eq!(first, second);
    }
}
