//! A basic example: estimate how a function's running time grows.
use magnitude::{
    fit_curves,
    timing::{SizeRange, measure},
};

fn main() {
    // Time sorting a reversed list, at sizes 1, 101, 201, ... 1001.
    let samples = measure(
        |task: &Vec<u64>| {
            let mut v = task.clone();
            v.sort_unstable();
            v
        },
        |size| (0..size as u64).rev().collect::<Vec<_>>(),
        SizeRange::default(),
        100,
    );

    // Fit every growth form and pick the best match.
    match fit_curves(&samples).and_then(|fits| fits.classify()) {
        Ok(classification) => {
            println!("Function magnitude: {}", classification.best);
            for (form, residual) in &classification.residuals {
                println!("  {form}: residual {residual:.3e}");
            }
        }
        Err(e) => {
            eprintln!("could not classify these timings: {e}");
        }
    }
}
