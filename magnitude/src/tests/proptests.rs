use proptest::prelude::*;

use crate::{
    Defect, Matrix, MatrixError, find_row_order, ls_solve, solve, tests::assert_nearly_eq,
};

fn any_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-100.0..100.0f64, rows * cols)
            .prop_map(move |values| Matrix::new(rows, cols, values).unwrap())
    })
}

/// A square matrix with a nonzero diagonal, whose rows have then been shuffled.
/// Returns the shuffled matrix.
fn shuffled_nonzero_diagonal() -> impl Strategy<Value = Matrix> {
    (1usize..7).prop_flat_map(|n| {
        let entries = prop::collection::vec(prop_oneof![Just(0.0), 1.0..10.0f64], n * n);
        let diagonal = prop::collection::vec(1.0..10.0f64, n);
        let order = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
        (entries, diagonal, order).prop_map(move |(mut entries, diagonal, order)| {
            for (i, d) in diagonal.into_iter().enumerate() {
                entries[i * n + i] = d;
            }
            let a = Matrix::new(n, n, entries).unwrap();
            a.with_rows_reordered(&order)
        })
    })
}

/// A square matrix with an arbitrary pattern of zero and nonzero entries.
fn sparse_square() -> impl Strategy<Value = Matrix> {
    (1usize..7).prop_flat_map(|n| {
        let entry = prop_oneof![Just(0.0), 1.0..10.0f64];
        prop::collection::vec(entry, n * n)
            .prop_map(move |entries| Matrix::new(n, n, entries).unwrap())
    })
}

/// Exhaustively check whether any row ordering leaves the diagonal free of zeroes.
fn any_order_exists(a: &Matrix, col: usize, used: &mut [bool]) -> bool {
    if col == a.ncols() {
        return true;
    }
    for row in 0..a.nrows() {
        if used[row] || a.get(row, col) == 0.0 {
            continue;
        }
        used[row] = true;
        let found = any_order_exists(a, col + 1, used);
        used[row] = false;
        if found {
            return true;
        }
    }
    false
}

/// A strictly diagonally dominant square matrix, so Jacobi converges.
fn diagonally_dominant() -> impl Strategy<Value = Matrix> {
    (1usize..6).prop_flat_map(|n| {
        prop::collection::vec(-1.0..1.0f64, n * n).prop_map(move |mut entries| {
            for i in 0..n {
                let off_diagonal: f64 = (0..n)
                    .filter(|&j| j != i)
                    .map(|j| entries[i * n + j].abs())
                    .sum();
                entries[i * n + i] = 2.0 * off_diagonal + 1.0;
            }
            Matrix::new(n, n, entries).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn construct_roundtrips(
        rows in 1usize..6,
        cols in 1usize..6,
        seed in prop::collection::vec(-1e6..1e6f64, 36),
    ) {
        let values = seed[..rows * cols].to_vec();
        let m = Matrix::new(rows, cols, values.clone()).unwrap();
        for i in 0..rows {
            for j in 0..cols {
                prop_assert_eq!(m.get(i, j), values[i * cols + j]);
            }
        }
    }

    #[test]
    fn construct_rejects_wrong_length(
        rows in 1usize..6,
        cols in 1usize..6,
        len in 0usize..40,
    ) {
        prop_assume!(len != rows * cols);
        prop_assert!(Matrix::new(rows, cols, vec![0.0; len]).is_err());
    }

    #[test]
    fn transpose_is_involution(a in any_matrix()) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn multiply_identity(a in any_matrix()) {
        let i = Matrix::identity(a.ncols()).unwrap();
        prop_assert_eq!(a.multiply(&i).unwrap(), a);
    }

    #[test]
    fn subtract_self_is_zero(a in any_matrix()) {
        let (rows, cols) = a.shape();
        prop_assert_eq!(a.subtract(&a).unwrap(), Matrix::zeros(rows, cols).unwrap());
    }

    #[test]
    fn one_norm_is_inf_norm_of_transpose(a in any_matrix()) {
        prop_assert_eq!(a.one_norm(), a.transpose().inf_norm());
    }

    #[test]
    fn add_is_subtract_of_negation(a in any_matrix(), k in -10.0..10.0f64) {
        let b = a.multiply(k).unwrap();
        prop_assert_eq!(a.add(&b).unwrap(), a.subtract(&b.multiply(-1.0).unwrap()).unwrap());
        prop_assert_eq!(a.add(k).unwrap(), a.subtract(-k).unwrap());
    }

    #[test]
    fn deep_copy_is_independent(a in any_matrix(), x in -1.0..1.0f64) {
        let mut copy = a.deep_copy();
        prop_assert_eq!(&copy, &a);
        let before = a.get(0, 0);
        copy.set(0, 0, before + 1.0 + x.abs());
        prop_assert_eq!(a.get(0, 0), before);
    }

    #[test]
    fn row_order_clears_diagonal(a in shuffled_nonzero_diagonal()) {
        let order = find_row_order(&a).unwrap();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..a.nrows()).collect::<Vec<_>>());
        for (i, &src) in order.iter().enumerate() {
            prop_assert!(a.get(src, i) != 0.0);
        }
    }

    #[test]
    fn row_order_agrees_with_exhaustive_search(a in sparse_square()) {
        let exists = any_order_exists(&a, 0, &mut vec![false; a.nrows()]);
        match find_row_order(&a) {
            Ok(order) => {
                prop_assert!(exists);
                for (i, &src) in order.iter().enumerate() {
                    prop_assert!(a.get(src, i) != 0.0);
                }
            }
            // Duplicate rows are rejected up front, even when an ordering exists.
            Err(MatrixError::Defective(Defect::DuplicateRows { .. })) => {}
            Err(MatrixError::Defective(Defect::ZeroRow { .. } | Defect::NoPermutation)) => {
                prop_assert!(!exists);
            }
            Err(e) => prop_assert!(false, "unexpected error {e}"),
        }
    }

    #[test]
    fn jacobi_solves_dominant_systems(
        a in diagonally_dominant(),
        seed in prop::collection::vec(-10.0..10.0f64, 5),
    ) {
        let n = a.nrows();
        let expected = Matrix::column_vector(seed[..n].to_vec()).unwrap();
        let b = a.multiply(&expected).unwrap();
        let x = solve(&a, &b).unwrap();
        for i in 0..n {
            assert_nearly_eq(x.get(i, 0), expected.get(i, 0), 1e-9);
        }
    }

    #[test]
    fn least_squares_single_column_is_exact(
        column in prop::collection::vec(1.0..100.0f64, 1..20),
        coefficient in -5.0..5.0f64,
    ) {
        let a = Matrix::column_vector(column).unwrap();
        let b = a.multiply(coefficient).unwrap();
        let x = ls_solve(&a, &b).unwrap();
        assert_nearly_eq(x.get(0, 0), coefficient, 1e-12);
        let residual = a.multiply(&x).unwrap().subtract(&b).unwrap();
        prop_assert!(residual.one_norm() < 1e-9);
    }
}
