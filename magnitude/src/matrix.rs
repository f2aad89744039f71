//! Dense, row-major matrices of `f64`.
use crate::MatrixError;

pub use arithmetic::Operand;

mod arithmetic;

/// Extra room added to the widest entry when rendering, so columns don't touch.
const RENDER_PADDING: usize = 2;

/// A dense 2D matrix.
/// Each instance owns its own storage, so no two matrices ever alias.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    /// Row-major, so entry (i, j) lives at `i * cols + j`.
    entries: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from its values, read left-to-right then top-to-bottom.
    /// There must be exactly `rows * cols` values.
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, MatrixError> {
        check_shape(rows, cols)?;
        if values.len() != rows * cols {
            return Err(MatrixError::WrongNumberOfValues {
                rows,
                cols,
                values: values.len(),
            });
        }
        Ok(Self::from_parts(rows, cols, values))
    }

    /// A `rows` x `cols` matrix of zeroes.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::filled(rows, cols, 0.0)
    }

    /// A `rows` x `cols` matrix where every entry is `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, MatrixError> {
        check_shape(rows, cols)?;
        Ok(Self::from_parts(rows, cols, vec![value; rows * cols]))
    }

    /// The `n` x `n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut out = Self::zeros(n, n)?;
        for i in 0..n {
            out.set(i, i, 1.0);
        }
        Ok(out)
    }

    /// A single column holding these values, top to bottom.
    pub fn column_vector(values: Vec<f64>) -> Result<Self, MatrixError> {
        let rows = values.len();
        Self::new(rows, 1, values)
    }

    /// Callers must already know the shape is nonempty and matches the values.
    pub(crate) fn from_parts(rows: usize, cols: usize, entries: Vec<f64>) -> Self {
        debug_assert_eq!(
            entries.len(),
            rows * cols,
            "Matrix storage has {} entries but shape is {rows}x{cols}",
            entries.len()
        );
        Self {
            rows,
            cols,
            entries,
        }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Is this matrix square?
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Read the entry at (row, col).
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.entries[self.offset(row, col)]
    }

    /// Overwrite the entry at (row, col). Never changes the matrix's shape.
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let i = self.offset(row, col);
        self.entries[i] = value;
    }

    /// A new matrix with its own storage, holding the same values.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// All values of one row, left to right.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.entries[start..start + self.cols]
    }

    /// Each row in order, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.entries.chunks_exact(self.cols)
    }

    /// All values, in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.entries
    }

    /// Entries (i, i), for every i that is both a row and a column.
    pub fn diagonal(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.rows.min(self.cols)).map(|i| self.get(i, i))
    }

    /// A new matrix whose row `i` is row `order[i]` of this one.
    /// `order` should be a permutation of this matrix's row indices.
    pub(crate) fn with_rows_reordered(&self, order: &[usize]) -> Self {
        debug_assert_eq!(order.len(), self.rows);
        let mut entries = Vec::with_capacity(self.entries.len());
        for &src in order {
            entries.extend_from_slice(self.row(src));
        }
        Self::from_parts(self.rows, self.cols, entries)
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "Index ({row}, {col}) is out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

fn check_shape(rows: usize, cols: usize) -> Result<(), MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::EmptyShape { rows, cols });
    }
    Ok(())
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.entries[self.offset(row, col)]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let i = self.offset(row, col);
        &mut self.entries[i]
    }
}

/// Renders a grid with every entry to two decimal places.
/// All columns share one width: the widest rendered entry, plus some padding.
impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .entries
            .iter()
            .map(|x| format!("{x:.2}").len())
            .max()
            .unwrap_or(0)
            + RENDER_PADDING;
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for x in row {
                write!(f, "{x:>width$.2}")?;
            }
        }
        Ok(())
    }
}
