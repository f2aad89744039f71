use super::Matrix;
use crate::{MatrixError, error::Operation};

/// Right-hand side of a binary matrix operation: either a whole matrix,
/// or a scalar applied to every entry.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    /// Another matrix, which must conform to the left operand.
    Matrix(&'a Matrix),
    /// A single number.
    Scalar(f64),
}

impl<'a> From<&'a Matrix> for Operand<'a> {
    fn from(m: &'a Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl From<f64> for Operand<'_> {
    fn from(x: f64) -> Self {
        Self::Scalar(x)
    }
}

impl Matrix {
    /// Matrix product with another matrix (inner dimensions must match),
    /// or scale every entry by a scalar.
    pub fn multiply<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Matrix, MatrixError> {
        match rhs.into() {
            Operand::Scalar(k) => Ok(self.scale(k)),
            Operand::Matrix(rhs) => {
                if self.cols != rhs.rows {
                    return Err(self.not_conformable(Operation::Multiply, rhs));
                }
                let mut entries = Vec::with_capacity(self.rows * rhs.cols);
                for row in self.iter_rows() {
                    for j in 0..rhs.cols {
                        let dot: f64 = row
                            .iter()
                            .enumerate()
                            .map(|(k, a)| a * rhs.get(k, j))
                            .sum();
                        entries.push(dot);
                    }
                }
                Ok(Matrix::from_parts(self.rows, rhs.cols, entries))
            }
        }
    }

    /// Elementwise difference with a same-shaped matrix,
    /// or subtract a scalar from every entry.
    pub fn subtract<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Matrix, MatrixError> {
        match rhs.into() {
            Operand::Scalar(k) => Ok(self.map(|x| x - k)),
            Operand::Matrix(rhs) => {
                if self.shape() != rhs.shape() {
                    return Err(self.not_conformable(Operation::Subtract, rhs));
                }
                let entries = self
                    .entries
                    .iter()
                    .zip(&rhs.entries)
                    .map(|(a, b)| a - b)
                    .collect();
                Ok(Matrix::from_parts(self.rows, self.cols, entries))
            }
        }
    }

    /// Elementwise sum with a same-shaped matrix, or add a scalar to every entry.
    /// Always equal to subtracting the negation of `rhs`.
    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Matrix, MatrixError> {
        let negated = rhs.into().multiply_by(-1.0);
        let result = match &negated {
            NegatedOperand::Matrix(m) => self.subtract(m),
            NegatedOperand::Scalar(k) => self.subtract(*k),
        };
        result.map_err(|e| match e {
            MatrixError::NotConformable { left, right, .. } => MatrixError::NotConformable {
                operation: Operation::Add,
                left,
                right,
            },
            other => other,
        })
    }

    /// Multiply every entry by `k`.
    pub fn scale(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    /// Swap rows and columns, so entry (j, i) of the result is entry (i, j) of this.
    pub fn transpose(&self) -> Matrix {
        let mut entries = Vec::with_capacity(self.entries.len());
        for j in 0..self.cols {
            entries.extend((0..self.rows).map(|i| self.get(i, j)));
        }
        Matrix::from_parts(self.cols, self.rows, entries)
    }

    /// Infinity norm: the largest absolute row sum.
    pub fn inf_norm(&self) -> f64 {
        self.iter_rows()
            .map(|row| row.iter().map(|x| x.abs()).sum::<f64>())
            .fold(0.0, libm::fmax)
    }

    /// One norm: the largest absolute column sum.
    pub fn one_norm(&self) -> f64 {
        let mut col_sums = vec![0.0; self.cols];
        for row in self.iter_rows() {
            for (sum, x) in col_sums.iter_mut().zip(row) {
                *sum += x.abs();
            }
        }
        col_sums.into_iter().fold(0.0, libm::fmax)
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        let entries = self.entries.iter().copied().map(f).collect();
        Matrix::from_parts(self.rows, self.cols, entries)
    }

    fn not_conformable(&self, operation: Operation, rhs: &Matrix) -> MatrixError {
        MatrixError::NotConformable {
            operation,
            left: self.shape(),
            right: rhs.shape(),
        }
    }
}

/// An operand after being multiplied by a scalar.
/// Owns its matrix, since scaling produces a new one.
enum NegatedOperand {
    Matrix(Matrix),
    Scalar(f64),
}

impl Operand<'_> {
    fn multiply_by(self, k: f64) -> NegatedOperand {
        match self {
            Operand::Matrix(m) => NegatedOperand::Matrix(m.scale(k)),
            Operand::Scalar(x) => NegatedOperand::Scalar(x * k),
        }
    }
}
