//! Feeding and presentation around the wave modulator
//!
//! - Schedule: an ordered sequence of control inputs fed one activation at
//!   a time
//! - Transmit: render an optional sample for display

pub mod schedule;
pub mod transmit;

pub use schedule::{run_schedule, DEMO_AMPLITUDES};
pub use transmit::{render_output, transmit};
