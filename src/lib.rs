//! Amplitude-modulated sine wave generation, driven one activation at a time.
//!
//! The core type is [`generator::WaveModulator`], a stateful generator that
//! must be primed once before it produces samples. The [`driver`] module
//! provides the schedule runner and display rendering around it.

pub mod driver;
pub mod generator;
