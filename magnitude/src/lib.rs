//! Dense matrices, a Jacobi solver for linear systems, and least-squares
//! fitting of timing data against common growth rates.
//!
//! Estimating a function's complexity goes like this:
//! time it over a range of task sizes ([`timing::measure`]), fit each
//! [`GrowthForm`] to those timings ([`fit_curves`]), and pick the form with
//! the smallest residual ([`Fits::classify`]).

pub use crate::error::{Defect, FitError, MatrixError, Operation};
pub use crate::fit::{Classification, FittedCurve, Fits, Sample, classify, fit_curves};
pub use crate::growth::GrowthForm;
pub use crate::jacobi::{Config, JacobiOutcome, solve, solve_with_config};
pub use crate::least_squares::{ls_solve, ls_solve_with_config};
pub use crate::matrix::{Matrix, Operand};
pub use crate::scramble::{find_row_order, scramble};

/// Errors which can occur in this crate.
mod error;
/// Fitting samples to growth forms.
mod fit;
/// The catalogue of growth rates.
mod growth;
/// Iterative solver for square systems.
mod jacobi;
/// Least-squares solves via the normal equations.
mod least_squares;
/// Dense matrix type and arithmetic.
mod matrix;
/// CSV output of fitted curves.
pub mod report;
/// Reordering rows to clear zeroes off the diagonal.
mod scramble;
/// Parser for recorded timing data.
pub mod textual;
/// Timing harness.
pub mod timing;
