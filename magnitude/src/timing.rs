//! Time a function over a range of task sizes.
use std::{hint::black_box, time::Instant};

use crate::Sample;

/// Task sizes to measure at: `start`, `start + step`, ... up to and including `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    /// First task size.
    pub start: usize,
    /// Gap between consecutive task sizes. Zero is treated as one.
    pub step: usize,
    /// Largest task size which may be measured.
    pub stop: usize,
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            start: 1,
            step: 100,
            stop: 1001,
        }
    }
}

impl SizeRange {
    /// Every task size in this range, ascending.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.start..=self.stop).step_by(self.step.max(1))
    }
}

/// For each size in `sizes`, build a task with `generate`, then time
/// `runs_per_trial` calls of `measured` on it.
/// Each sample records the total time of all runs at that size.
#[mutants::skip]
pub fn measure<T, R>(
    mut measured: impl FnMut(&T) -> R,
    mut generate: impl FnMut(usize) -> T,
    sizes: SizeRange,
    runs_per_trial: usize,
) -> Vec<Sample> {
    sizes
        .sizes()
        .map(|size| {
            let task = generate(size);
            let start = Instant::now();
            for _ in 0..runs_per_trial {
                black_box(measured(black_box(&task)));
            }
            Sample::new(size, start.elapsed().as_secs_f64())
        })
        .collect()
}
