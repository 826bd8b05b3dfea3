use plotters::prelude::*;
use wavemod::generator::WaveModulator;

struct Args {
    steps: usize,
    amplitudes: Vec<f32>,
    output_path: String,
}

fn print_usage() {
    eprintln!("Usage: plot-wave <steps> <amplitudes> <output.svg>");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  plot-wave 12 7,7,7,2,2,2,2,10,10,10,10,10 wave.svg");
    eprintln!("  plot-wave 64 '1,1,1,1,1,1,1,1' ramp-up.svg  # first eighth of a cycle");
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 4 {
        print_usage();
        return Err("Invalid number of arguments".into());
    }

    let steps: usize = args[1].parse()?;
    let amplitudes = args[2]
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()?;
    let output_path = args[3].clone();

    if amplitudes.is_empty() {
        return Err("At least one amplitude is required".into());
    }

    Ok(Args {
        steps,
        amplitudes,
        output_path,
    })
}

fn generate_samples(args: &Args) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    let mut modulator = WaveModulator::new(args.steps)?;

    // Priming activation produces no sample.
    modulator.activate(None);

    let mut samples = Vec::new();
    for &amplitude in &args.amplitudes {
        match modulator.activate(Some(amplitude)) {
            Some(sample) => samples.push(sample),
            // Exhausted: amplitudes beyond the cycle are dropped.
            None => break,
        }
    }

    Ok(samples)
}

fn create_plot(args: &Args, samples: &[f32]) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(&args.output_path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_amp = args
        .amplitudes
        .iter()
        .fold(0.0f32, |max, &a| max.max(a.abs()))
        .max(1.0);

    let title = format!(
        "Modulated sine: {} steps, {} amplitudes",
        args.steps,
        args.amplitudes.len()
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f32..samples.len() as f32, -max_amp * 1.1..max_amp * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Step")
        .y_desc("Sample")
        .x_labels(10)
        .y_labels(10)
        .draw()?;

    chart.draw_series(LineSeries::new(
        samples.iter().enumerate().map(|(i, &s)| (i as f32, s)),
        BLUE.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args()?;

    println!("Wave Plot Generator");
    println!("===================");
    println!("  Steps: {}", args.steps);
    println!("  Amplitudes: {:?}", args.amplitudes);
    println!();

    print!("  Generating samples... ");
    let samples = generate_samples(&args)?;
    println!("done ({} samples)", samples.len());

    if samples.is_empty() {
        return Err("No samples produced".into());
    }
    if samples.len() < args.amplitudes.len() {
        println!(
            "  Note: {} amplitudes beyond the cycle were dropped",
            args.amplitudes.len() - samples.len()
        );
    }

    print!("  Creating plot... ");
    create_plot(&args, &samples)?;
    println!("done");

    println!();
    println!("Output: {}", args.output_path);

    Ok(())
}
