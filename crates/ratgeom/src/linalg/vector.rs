use std::ops::Index;

use nalgebra::DVector;

use crate::error::{KernelError, Result};
use crate::fraction::Fraction;

/// Fixed-length vector of exact components.
///
/// Length is fixed at construction; binary operations check shapes and fail
/// with `DimensionMismatch` instead of truncating.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Vector {
    comps: Vec<Fraction>,
}

/// A point carries no identity beyond its coordinates.
pub type Point = Vector;

impl Vector {
    #[inline]
    pub fn new(comps: Vec<Fraction>) -> Self {
        Self { comps }
    }

    #[inline]
    pub fn xy(x: Fraction, y: Fraction) -> Self {
        Self { comps: vec![x, y] }
    }

    #[inline]
    pub fn xyz(x: Fraction, y: Fraction, z: Fraction) -> Self {
        Self {
            comps: vec![x, y, z],
        }
    }

    pub fn from_ints(vals: &[i64]) -> Self {
        Self {
            comps: vals.iter().map(|&v| Fraction::from(v)).collect(),
        }
    }

    pub fn zeros(dim: usize) -> Self {
        Self {
            comps: vec![Fraction::zero(); dim],
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.comps.len()
    }

    #[inline]
    pub fn components(&self) -> &[Fraction] {
        &self.comps
    }

    #[inline]
    pub fn into_components(self) -> Vec<Fraction> {
        self.comps
    }

    #[inline]
    pub fn x(&self) -> &Fraction {
        &self.comps[0]
    }

    #[inline]
    pub fn y(&self) -> &Fraction {
        &self.comps[1]
    }

    /// Fails unless `self.dim() == dim`.
    #[inline]
    pub fn expect_dim(&self, dim: usize) -> Result<()> {
        if self.dim() == dim {
            Ok(())
        } else {
            Err(KernelError::dims(dim, self.dim()))
        }
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(&Fraction, &Fraction) -> Fraction) -> Result<Self> {
        rhs.expect_dim(self.dim())?;
        Ok(Self {
            comps: self
                .comps
                .iter()
                .zip(&rhs.comps)
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }

    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| a + b)
    }

    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| a - b)
    }

    pub fn scale(&self, s: &Fraction) -> Self {
        Self {
            comps: self.comps.iter().map(|c| c * s).collect(),
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            comps: self.comps.iter().map(|c| -c).collect(),
        }
    }

    pub fn dot(&self, rhs: &Self) -> Result<Fraction> {
        rhs.expect_dim(self.dim())?;
        Ok(self.comps.iter().zip(&rhs.comps).map(|(a, b)| a * b).sum())
    }

    #[inline]
    pub fn norm_squared(&self) -> Fraction {
        self.comps.iter().map(Fraction::square).sum()
    }

    /// 2-D cross product `a.x*b.y - a.y*b.x` (the 2×2 determinant of rows `a`, `b`).
    pub fn cross2(&self, rhs: &Self) -> Result<Fraction> {
        self.expect_dim(2)?;
        rhs.expect_dim(2)?;
        let (a, b) = (&self.comps, &rhs.comps);
        Ok(&(&a[0] * &b[1]) - &(&a[1] * &b[0]))
    }

    /// 3-D cross product.
    pub fn cross3(&self, rhs: &Self) -> Result<Self> {
        self.expect_dim(3)?;
        rhs.expect_dim(3)?;
        let (a, b) = (&self.comps, &rhs.comps);
        Ok(Self::xyz(
            &(&a[1] * &b[2]) - &(&a[2] * &b[1]),
            &(&a[2] * &b[0]) - &(&a[0] * &b[2]),
            &(&a[0] * &b[1]) - &(&a[1] * &b[0]),
        ))
    }

    /// Lossy diagnostic view.
    pub fn to_f64(&self) -> DVector<f64> {
        DVector::from_iterator(self.dim(), self.comps.iter().map(Fraction::to_f64))
    }
}

impl Index<usize> for Vector {
    type Output = Fraction;
    #[inline]
    fn index(&self, i: usize) -> &Fraction {
        &self.comps[i]
    }
}

impl From<Vec<Fraction>> for Vector {
    fn from(comps: Vec<Fraction>) -> Self {
        Self { comps }
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.comps.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}
