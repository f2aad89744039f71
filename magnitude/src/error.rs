/// Errors from building matrices, doing arithmetic on them, or solving systems with them.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[cfg_attr(not(feature = "unstable-exhaustive"), non_exhaustive)]
pub enum MatrixError {
    /// The flat list of values doesn't fill the requested shape.
    #[error("Given {values} values, but a {rows}x{cols} matrix needs exactly {}", rows * cols)]
    WrongNumberOfValues {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// How many values were actually given.
        values: usize,
    },
    /// Matrix dimensions must be positive.
    #[error("Matrices must have at least one row and one column, but you asked for {rows}x{cols}")]
    EmptyShape {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// The two operands' shapes don't work together for this operation.
    #[error("Matrices do not conform for {operation}: left is {}x{}, right is {}x{}", left.0, left.1, right.0, right.1)]
    NotConformable {
        /// Which operation was attempted.
        operation: Operation,
        /// Shape of the left operand, as (rows, cols).
        left: (usize, usize),
        /// Shape of the right operand, as (rows, cols).
        right: (usize, usize),
    },
    /// Linear solves need a square coefficient matrix.
    #[error("Coefficient matrix must be square, but it is {rows}x{cols}")]
    NotSquare {
        /// Rows in the coefficient matrix.
        rows: usize,
        /// Columns in the coefficient matrix.
        cols: usize,
    },
    /// The right-hand side of a solve must be a single column with one row per equation.
    #[error("Right-hand side must be a {expected_rows}x1 column, but it is {rows}x{cols}")]
    NotColumnVector {
        /// How many rows the right-hand side should have.
        expected_rows: usize,
        /// Rows actually given.
        rows: usize,
        /// Columns actually given.
        cols: usize,
    },
    /// No row ordering leaves the diagonal free of zeroes.
    #[error("Given matrix is defective: {0}")]
    Defective(Defect),
}

/// Why a matrix can't be reordered into one with a nonzero diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(feature = "unstable-exhaustive"), non_exhaustive)]
pub enum Defect {
    /// Two rows hold exactly the same values.
    DuplicateRows {
        /// The earlier row.
        first: usize,
        /// The later row, identical to `first`.
        second: usize,
    },
    /// This row is entirely zero.
    ZeroRow {
        /// Index of the zero row.
        row: usize,
    },
    /// Every assignment of rows to diagonal positions was tried, and none worked.
    NoPermutation,
}

impl std::fmt::Display for Defect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Defect::DuplicateRows { first, second } => {
                write!(f, "rows {first} and {second} are identical")
            }
            Defect::ZeroRow { row } => write!(f, "row {row} is all zeroes"),
            Defect::NoPermutation => write!(
                f,
                "no ordering of its rows gives a diagonal without zeroes"
            ),
        }
    }
}

/// Binary matrix operations, used to describe conformability errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Matrix product.
    Multiply,
    /// Elementwise difference.
    Subtract,
    /// Elementwise sum.
    Add,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Multiply => "matrix multiplication",
            Operation::Subtract => "matrix subtraction",
            Operation::Add => "matrix addition",
        };
        f.write_str(name)
    }
}

/// Errors from fitting timing data against the growth-form catalogue.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[cfg_attr(not(feature = "unstable-exhaustive"), non_exhaustive)]
pub enum FitError {
    /// Can't fit a curve through zero points.
    #[error("Cannot fit curves without any timing samples")]
    NoSamples,
    /// The underlying least-squares solve failed.
    #[error("{0}")]
    Matrix(#[from] MatrixError),
}
