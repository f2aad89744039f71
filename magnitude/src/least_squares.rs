use crate::{Matrix, MatrixError, jacobi};

/// Find the `x` minimising `‖A·x − b‖`, by solving the normal equations
/// `Aᵀ·A·x = Aᵀ·b` with the Jacobi solver.
///
/// `A` may be rectangular (usually tall: more observations than unknowns).
pub fn ls_solve(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    let (ata, atb) = normal_equations(a, b)?;
    jacobi::solve(&ata, &atb)
}

/// Like [`ls_solve`] but with a custom solver config, returning solver metadata too.
pub fn ls_solve_with_config(
    a: &Matrix,
    b: &Matrix,
    config: jacobi::Config,
) -> Result<jacobi::JacobiOutcome, MatrixError> {
    let (ata, atb) = normal_equations(a, b)?;
    jacobi::solve_with_config(&ata, &atb, config)
}

fn normal_equations(a: &Matrix, b: &Matrix) -> Result<(Matrix, Matrix), MatrixError> {
    let at = a.transpose();
    Ok((at.multiply(a)?, at.multiply(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Defect;

    fn m(rows: usize, cols: usize, values: &[f64]) -> Matrix {
        Matrix::new(rows, cols, values.to_vec()).unwrap()
    }

    #[test]
    fn test_consistent_overdetermined() {
        // Three equations, two unknowns, exactly satisfied by x = (3, -2).
        let a = m(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        let b = m(3, 1, &[3.0, -2.0, 1.0]);
        let x = ls_solve(&a, &b).unwrap();
        assert!((x.get(0, 0) - 3.0).abs() < 1e-12);
        assert!((x.get(1, 0) + 2.0).abs() < 1e-12);
        let residual = a.multiply(&x).unwrap().subtract(&b).unwrap();
        assert!(residual.one_norm() < 1e-11);
    }

    #[test]
    fn test_single_column() {
        // Best multiple of (1, 2, 3) to match (2, 4, 7): x = (2 + 8 + 21) / 14.
        let a = m(3, 1, &[1.0, 2.0, 3.0]);
        let b = m(3, 1, &[2.0, 4.0, 7.0]);
        let x = ls_solve(&a, &b).unwrap();
        assert_eq!(x.shape(), (1, 1));
        assert!((x.get(0, 0) - 31.0 / 14.0).abs() < 1e-15);
    }

    #[test]
    fn test_inconsistent_line_fit() {
        // Fit y = c0 + c1*t through points which aren't collinear.
        let ts = [-1.0, 0.0, 1.0, 3.0];
        let ys = [1.0, 2.0, 2.0, 4.0];
        let a = Matrix::new(4, 2, ts.iter().flat_map(|t| [1.0, *t]).collect()).unwrap();
        let b = Matrix::column_vector(ys.to_vec()).unwrap();
        let x = ls_solve(&a, &b).unwrap();

        // Closed-form simple linear regression.
        let n = ts.len() as f64;
        let t_mean = ts.iter().sum::<f64>() / n;
        let y_mean = ys.iter().sum::<f64>() / n;
        let sxy: f64 = ts.iter().zip(&ys).map(|(t, y)| (t - t_mean) * (y - y_mean)).sum();
        let sxx: f64 = ts.iter().map(|t| (t - t_mean).powi(2)).sum();
        let slope = sxy / sxx;
        let intercept = y_mean - slope * t_mean;

        assert!((x.get(0, 0) - intercept).abs() < 1e-10);
        assert!((x.get(1, 0) - slope).abs() < 1e-10);
    }

    #[test]
    fn test_rhs_rows_must_match() {
        let a = m(3, 1, &[1.0, 2.0, 3.0]);
        let b = m(2, 1, &[1.0, 2.0]);
        assert!(matches!(
            ls_solve(&a, &b),
            Err(MatrixError::NotConformable { .. })
        ));
    }

    #[test]
    fn test_zero_column_is_defective() {
        let a = m(2, 2, &[1.0, 0.0, 1.0, 0.0]);
        let b = m(2, 1, &[1.0, 1.0]);
        // AᵀA = [[2, 0], [0, 0]], which has a zero row.
        assert_eq!(
            ls_solve(&a, &b),
            Err(MatrixError::Defective(Defect::ZeroRow { row: 1 }))
        );
    }

    #[test]
    fn test_with_config_reports_iterations() {
        let a = m(3, 1, &[1.0, 2.0, 3.0]);
        let b = m(3, 1, &[2.0, 4.0, 6.0]);
        let outcome = ls_solve_with_config(&a, &b, jacobi::Config::default()).unwrap();
        assert!(outcome.converged());
        assert_eq!(outcome.solution.get(0, 0), 2.0);
    }
}
