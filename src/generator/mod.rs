pub mod wave;

pub use wave::{GeneratorError, WaveModulator};

/// Represents the lifecycle position of a wave modulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModulatorState {
    /// Constructed but not yet primed; cannot produce samples
    Created,
    /// Primed and waiting for its first control value
    Primed,
    /// Producing samples, one per supplied control value
    Active,
    /// All steps produced; every further activation yields nothing
    Exhausted,
}
