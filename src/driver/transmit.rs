//! Display rendering for modulator output

/// Render an optional sample for display
///
/// Samples are right-aligned in a field of width 5 with one digit after the
/// decimal point; the no-sample marker renders as `"Output is None"`.
pub fn render_output(output: Option<f32>) -> String {
    match output {
        None => "Output is None".to_string(),
        Some(value) => format!("Output: {:>5.1}", value),
    }
}

/// Print a rendered output line to stdout
pub fn transmit(output: Option<f32>) {
    println!("{}", render_output(output));
}
