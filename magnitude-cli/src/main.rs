use std::{
    io::{self, Read},
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use clap::Parser;
use magnitude::{
    Classification, Fits, Sample, fit_curves, report,
    textual::Samples,
    timing::{SizeRange, measure},
};

mod visualize;

#[derive(Parser)]
#[command(name = "magnitude", version, about, long_about = None)]
struct Cli {
    /// Path to recorded timings, one "<size> <seconds>" pair per line.
    /// Use '-' for stdin.
    /// If not given, a built-in sample function is benchmarked instead.
    #[arg(short = 'f', long)]
    data: Option<PathBuf>,

    /// Smallest task size to benchmark.
    #[arg(long, default_value_t = 1)]
    start: usize,

    /// Gap between benchmarked task sizes.
    #[arg(long, default_value_t = 100)]
    step: usize,

    /// Largest task size to benchmark.
    #[arg(long, default_value_t = 1001)]
    stop: usize,

    /// How many times to run the function at each task size.
    #[arg(long, default_value_t = 100)]
    runs: usize,

    /// Write samples and fitted curves as CSV to this path.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Save a chart of the samples and fitted curves as a PNG.
    #[arg(short = 'o', long = "png")]
    png_path: Option<PathBuf>,

    /// Show every growth form's coefficient and residual.
    #[arg(long = "show-fits")]
    show_fits: bool,
}

impl Cli {
    fn chart_name(&self) -> String {
        match &self.data {
            Some(path) if path.display().to_string() != "-" => path.display().to_string(),
            Some(_) => "Recorded timings".to_owned(),
            None => "Sample function".to_owned(),
        }
    }

    fn sizes(&self) -> SizeRange {
        SizeRange {
            start: self.start,
            step: self.step,
            stop: self.stop,
        }
    }
}

/// Everything learned from one run.
struct Outcome {
    samples: Vec<Sample>,
    fits: Fits,
    classification: Classification,
}

fn main() {
    let cli = Cli::parse();
    let outcome = match main_inner(&cli) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };
    if let Err(e) = handle_output(&outcome, &cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn main_inner(cli: &Cli) -> anyhow::Result<Outcome> {
    let samples = match &cli.data {
        Some(_) => read_samples(cli)?,
        None => measure(
            |task: &Vec<u8>| sample_function(task),
            sample_task,
            cli.sizes(),
            cli.runs,
        ),
    };
    let fits = fit_curves(&samples).context("Could not fit growth forms to these samples")?;
    let classification = fits.classify()?;
    Ok(Outcome {
        samples,
        fits,
        classification,
    })
}

fn handle_output(outcome: &Outcome, cli: &Cli) -> anyhow::Result<()> {
    print_output(outcome, cli.show_fits);
    if let Some(path) = &cli.csv {
        let csv = report::to_csv(&outcome.fits);
        std::fs::write(path, csv)
            .with_context(|| format!("Could not write CSV to {}", path.display()))?;
        println!("CSV saved to {}", path.display());
    }
    if let Some(path) = &cli.png_path {
        visualize::save_png(&cli.chart_name(), outcome, path)?;
    }
    Ok(())
}

/// The function benchmarked when no recorded data is given: the length of a list.
fn sample_function(input: &[u8]) -> usize {
    input.len()
}

/// Builds input for [`sample_function`]: a list of `size` zeroes.
fn sample_task(size: usize) -> Vec<u8> {
    vec![0; size]
}

/// Prints the output nicely to stdout.
fn print_output(outcome: &Outcome, show_fits: bool) {
    use colored::Colorize;
    let Outcome {
        samples,
        fits,
        classification,
    } = outcome;
    println!("Samples: {}", samples.len());
    let best = classification.best;
    println!(
        "Function magnitude: {} {}",
        best.title().green().bold(),
        best.big_o()
    );
    if show_fits {
        println!("Fits:");
        for (form, curve) in fits.iter() {
            let residual = classification.residuals[&form];
            let line = format!(
                "{:<12} coefficient = {:>12.4e}, residual = {:>12.4e}",
                form.title(),
                curve.coefficient,
                residual
            );
            if form == best {
                println!("\t{}", line.green());
            } else {
                println!("\t{line}");
            }
        }
    }
}

/// Read recorded samples from a file or stdin, depending on user args.
fn read_samples(cli: &Cli) -> anyhow::Result<Vec<Sample>> {
    let txt = match &cli.data {
        Some(path) if path != &PathBuf::from("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?,
        _ => {
            let mut txt = String::with_capacity(100);
            io::stdin().read_to_string(&mut txt)?;
            txt
        }
    };
    let parsed = Samples::from_str(&txt).map_err(anyhow::Error::msg)?;
    Ok(parsed.samples)
}
