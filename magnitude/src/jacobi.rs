//! Jacobi iterative solver for square linear systems `A·x = b`.
use crate::{Matrix, MatrixError, scramble::scramble};

/// Configuration for the Jacobi solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Stop after this many sweeps, whether or not the iterate has settled.
    pub max_iterations: usize,
    /// Stop once a sweep's relative change in the iterate is at or below this.
    /// Relative change is `‖x_new − x_old‖∞ / ‖x_new‖∞`.
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-15,
        }
    }
}

/// Result of running the Jacobi solver.
#[derive(Debug, Clone)]
pub struct JacobiOutcome {
    /// The final iterate, as a column vector.
    pub solution: Matrix,
    /// How many sweeps ran.
    pub iterations: usize,
    /// Relative change made by the last sweep.
    pub relative_change: f64,
    tolerance: f64,
}

impl JacobiOutcome {
    /// Did the iterate settle within tolerance before hitting the sweep cap?
    /// Hitting the cap is not an error, the last iterate is returned either way.
    pub fn converged(&self) -> bool {
        self.relative_change <= self.tolerance
    }
}

/// Solve `A·x = b` with the default [`Config`], returning `x` as a column vector.
pub fn solve(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    solve_with_config(a, b, Config::default()).map(|outcome| outcome.solution)
}

/// Solve `A·x = b`, starting from a vector of ones.
///
/// Rows are first reordered (see [`scramble`]) so that no diagonal entry is zero.
/// There's no convergence guarantee unless `A` is diagonally dominant;
/// other systems just run until the sweep cap.
pub fn solve_with_config(
    a: &Matrix,
    b: &Matrix,
    config: Config,
) -> Result<JacobiOutcome, MatrixError> {
    let (rows, cols) = a.shape();
    if !a.is_square() {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    if b.shape() != (rows, 1) {
        return Err(MatrixError::NotColumnVector {
            expected_rows: rows,
            rows: b.nrows(),
            cols: b.ncols(),
        });
    }
    let (a, b) = scramble(a, b)?;

    let mut current = vec![1.0; rows];
    let mut next = vec![0.0; rows];
    let mut iterations = 0;
    let mut relative_change = f64::INFINITY;

    while iterations < config.max_iterations && relative_change > config.tolerance {
        // Every component of `next` is computed only from `current`.
        for (i, out) in next.iter_mut().enumerate() {
            let off_diagonal: f64 = a
                .row(i)
                .iter()
                .zip(&current)
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, (a_ij, x_j))| a_ij * x_j)
                .sum();
            *out = (b.get(i, 0) - off_diagonal) / a.get(i, i);
        }
        iterations += 1;
        relative_change = relative_change_between(&next, &current);
        std::mem::swap(&mut current, &mut next);
    }

    Ok(JacobiOutcome {
        solution: Matrix::from_parts(rows, 1, current),
        iterations,
        relative_change,
        tolerance: config.tolerance,
    })
}

/// `‖new − old‖∞ / ‖new‖∞`.
fn relative_change_between(new: &[f64], old: &[f64]) -> f64 {
    let step = new
        .iter()
        .zip(old)
        .map(|(n, o)| (n - o).abs())
        .fold(0.0, libm::fmax);
    if step == 0.0 {
        // Covers the all-zero iterate too, where the ratio would be 0/0.
        return 0.0;
    }
    let size = new.iter().map(|x| x.abs()).fold(0.0, libm::fmax);
    step / size
}
