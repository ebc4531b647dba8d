use nalgebra::DMatrix;

use super::vector::Vector;
use crate::error::{KernelError, Result};
use crate::fraction::Fraction;

/// Row-major R×C matrix of exact entries.
///
/// Invariant: every row has length `cols`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Matrix {
    rows: Vec<Vector>,
    cols: usize,
}

impl Matrix {
    /// Fails with `DimensionMismatch` on ragged rows.
    pub fn from_rows(rows: Vec<Vector>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vector::dim);
        for r in &rows {
            r.expect_dim(cols)?;
        }
        Ok(Self { rows, cols })
    }

    pub fn from_int_rows(rows: &[&[i64]]) -> Result<Self> {
        Self::from_rows(rows.iter().map(|r| Vector::from_ints(r)).collect())
    }

    pub fn identity(n: usize) -> Self {
        let rows = (0..n)
            .map(|i| {
                Vector::new(
                    (0..n)
                        .map(|j| if i == j { Fraction::one() } else { Fraction::zero() })
                        .collect(),
                )
            })
            .collect();
        Self { rows, cols: n }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn row(&self, i: usize) -> &Vector {
        &self.rows[i]
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> &Fraction {
        &self.rows[i][j]
    }

    pub fn column(&self, j: usize) -> Vector {
        Vector::new(self.rows.iter().map(|r| r[j].clone()).collect())
    }

    fn expect_square(&self) -> Result<usize> {
        if self.nrows() == self.cols {
            Ok(self.cols)
        } else {
            Err(KernelError::dims(self.nrows(), self.cols))
        }
    }

    pub fn transpose(&self) -> Self {
        Self {
            rows: (0..self.cols).map(|j| self.column(j)).collect(),
            cols: self.nrows(),
        }
    }

    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.nrows() {
            return Err(KernelError::dims(self.cols, rhs.nrows()));
        }
        let rhs_t = rhs.transpose();
        let mut rows = Vec::with_capacity(self.nrows());
        for r in &self.rows {
            let row = rhs_t
                .rows
                .iter()
                .map(|c| r.dot(c))
                .collect::<Result<Vec<_>>>()?;
            rows.push(Vector::new(row));
        }
        Ok(Self {
            rows,
            cols: rhs.cols,
        })
    }

    pub fn mul_vector(&self, v: &Vector) -> Result<Vector> {
        v.expect_dim(self.cols)?;
        let comps = self
            .rows
            .iter()
            .map(|r| r.dot(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Vector::new(comps))
    }

    /// Determinant by cofactor (Laplace) expansion along the first row.
    ///
    /// No division happens, so intermediate values stay in the ring generated
    /// by the entries. Cost grows factorially; the kernel only uses sizes ≤ 4.
    pub fn determinant(&self) -> Result<Fraction> {
        let n = self.expect_square()?;
        let cols: Vec<usize> = (0..n).collect();
        Ok(laplace(&self.rows, &cols))
    }

    /// Matrix with row `i` and column `j` removed; `DimensionMismatch` when
    /// either index is out of range.
    pub fn minor(&self, i: usize, j: usize) -> Result<Self> {
        if i >= self.nrows() {
            return Err(KernelError::dims(self.nrows(), i));
        }
        if j >= self.cols {
            return Err(KernelError::dims(self.cols, j));
        }
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|(k, _)| *k != i)
            .map(|(_, r)| {
                Vector::new(
                    r.components()
                        .iter()
                        .enumerate()
                        .filter(|(k, _)| *k != j)
                        .map(|(_, c)| c.clone())
                        .collect(),
                )
            })
            .collect();
        Ok(Self {
            rows,
            cols: self.cols - 1,
        })
    }

    pub fn cofactor(&self, i: usize, j: usize) -> Result<Fraction> {
        self.expect_square()?;
        let d = self.minor(i, j)?.determinant()?;
        Ok(if (i + j) % 2 == 0 { d } else { -d })
    }

    /// Transposed cofactor matrix; `A * adj(A) = det(A) * I`.
    pub fn adjugate(&self) -> Result<Self> {
        let n = self.expect_square()?;
        let mut rows = Vec::with_capacity(n);
        for j in 0..n {
            let row = (0..n)
                .map(|i| self.cofactor(i, j))
                .collect::<Result<Vec<_>>>()?;
            rows.push(Vector::new(row));
        }
        Ok(Self { rows, cols: n })
    }

    /// Exact inverse via the adjugate; `Ok(None)` when singular.
    pub fn inverse(&self) -> Result<Option<Self>> {
        let det = self.determinant()?;
        if det.is_zero() {
            return Ok(None);
        }
        let inv_det = det.recip()?;
        let adj = self.adjugate()?;
        Ok(Some(Self {
            rows: adj.rows.iter().map(|r| r.scale(&inv_det)).collect(),
            cols: adj.cols,
        }))
    }

    /// Solve `A x = b` by Cramer's rule; `Ok(None)` when `A` is singular.
    pub fn solve(&self, b: &Vector) -> Result<Option<Vector>> {
        let n = self.expect_square()?;
        b.expect_dim(n)?;
        let det = self.determinant()?;
        if det.is_zero() {
            return Ok(None);
        }
        let mut x = Vec::with_capacity(n);
        for j in 0..n {
            let replaced = Self {
                rows: self
                    .rows
                    .iter()
                    .zip(b.components())
                    .map(|(r, bi)| {
                        let mut comps = r.components().to_vec();
                        comps[j] = bi.clone();
                        Vector::new(comps)
                    })
                    .collect(),
                cols: n,
            };
            x.push(replaced.determinant()?.checked_div(&det)?);
        }
        Ok(Some(Vector::new(x)))
    }

    /// Lossy diagnostic view.
    pub fn to_f64(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.nrows(), self.cols, |i, j| self.rows[i][j].to_f64())
    }
}

/// Expand along the first live row; the live rows are the last `cols.len()`.
fn laplace(rows: &[Vector], cols: &[usize]) -> Fraction {
    let n = cols.len();
    match n {
        0 => Fraction::one(),
        1 => rows[rows.len() - 1][cols[0]].clone(),
        2 => {
            let (r0, r1) = (&rows[rows.len() - 2], &rows[rows.len() - 1]);
            &(&r0[cols[0]] * &r1[cols[1]]) - &(&r0[cols[1]] * &r1[cols[0]])
        }
        _ => {
            let r = &rows[rows.len() - n];
            let mut acc = Fraction::zero();
            for (k, &c) in cols.iter().enumerate() {
                let a = &r[c];
                if a.is_zero() {
                    continue;
                }
                let rest: Vec<usize> = cols.iter().copied().filter(|&x| x != c).collect();
                let term = a * &laplace(rows, &rest);
                acc = if k % 2 == 0 { acc + term } else { acc - term };
            }
            acc
        }
    }
}
