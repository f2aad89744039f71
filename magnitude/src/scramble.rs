//! Reorder the equations of a linear system so that no diagonal entry is zero.
//!
//! The Jacobi method divides by each diagonal entry, so a system like
//! `[[0, 1], [1, 0]]` can't be iterated as written, even though swapping
//! its two equations makes it trivial. Finding such a swap is an assignment
//! problem: every diagonal position needs a distinct row that is nonzero in
//! that position's column.
use crate::{Defect, Matrix, MatrixError};

/// Reorder the rows of `a`, and the rows of `b` identically, so that every
/// diagonal entry of the reordered `a` is nonzero.
///
/// If `a`'s diagonal is already nonzero, both are returned unchanged.
pub fn scramble(a: &Matrix, b: &Matrix) -> Result<(Matrix, Matrix), MatrixError> {
    let order = find_row_order(a)?;
    if b.shape() != (a.nrows(), 1) {
        return Err(MatrixError::NotColumnVector {
            expected_rows: a.nrows(),
            rows: b.nrows(),
            cols: b.ncols(),
        });
    }
    if order.iter().enumerate().all(|(i, &row)| i == row) {
        return Ok((a.deep_copy(), b.deep_copy()));
    }
    Ok((a.with_rows_reordered(&order), b.with_rows_reordered(&order)))
}

/// Find a permutation of `a`'s rows which leaves no zero on the diagonal.
/// Entry `i` of the result is the original row which should move to row `i`.
pub fn find_row_order(a: &Matrix) -> Result<Vec<usize>, MatrixError> {
    let (rows, cols) = a.shape();
    if !a.is_square() {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    let identity: Vec<usize> = (0..rows).collect();
    if a.diagonal().all(|x| x != 0.0) {
        return Ok(identity);
    }
    if let Some(defect) = obvious_defect(a) {
        return Err(MatrixError::Defective(defect));
    }
    search(a).ok_or(MatrixError::Defective(Defect::NoPermutation))
}

/// Quick structural checks which rule out any valid ordering.
/// Passing them doesn't guarantee one exists, the search still decides that.
fn obvious_defect(a: &Matrix) -> Option<Defect> {
    for (row, values) in a.iter_rows().enumerate() {
        if values.iter().all(|x| *x == 0.0) {
            return Some(Defect::ZeroRow { row });
        }
    }
    for (first, values) in a.iter_rows().enumerate() {
        if let Some(offset) = a.iter_rows().skip(first + 1).position(|other| other == values) {
            return Some(Defect::DuplicateRows {
                first,
                second: first + 1 + offset,
            });
        }
    }
    None
}

/// Depth-first search assigning rows to diagonal positions, left to right.
/// Returns None once every branch has been exhausted.
fn search(a: &Matrix) -> Option<Vec<usize>> {
    let n = a.nrows();

    // For each column (i.e. diagonal position), which rows are nonzero there.
    // Ascending by row index.
    let candidates: Vec<Vec<usize>> = (0..n)
        .map(|col| (0..n).filter(|&row| a.get(row, col) != 0.0).collect())
        .collect();

    // Rows assigned so far, one per filled position.
    let mut assigned: Vec<usize> = Vec::with_capacity(n);
    let mut in_use = vec![false; n];
    // Untried options for each position on the current path.
    // Options are taken from the back, so the most recently discovered row goes first.
    let mut untried: Vec<Vec<usize>> = Vec::with_capacity(n);

    while assigned.len() < n {
        let position = assigned.len();
        if untried.len() == position {
            let options = candidates[position]
                .iter()
                .copied()
                .filter(|&row| !in_use[row])
                .collect();
            untried.push(options);
        }
        match untried[position].pop() {
            Some(row) => {
                in_use[row] = true;
                assigned.push(row);
            }
            None => {
                // Dead end, so backtrack to the previous position and try its next option.
                untried.pop();
                let row = assigned.pop()?;
                in_use[row] = false;
            }
        }
    }
    Some(assigned)
}
