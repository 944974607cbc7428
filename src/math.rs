//! Modular arithmetic and small integer matrices.
//!
//! Supplies the number theory behind the Affine transform and the
//! Hill cipher: gcd, modular inverse, and matrix inversion over ℤ/mℤ
//! via the adjugate and the determinant's inverse.

use crate::error::{CipherError, Result};

/// Greatest common divisor (always non-negative).
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Reduces `a` into `[0, m)` for a positive modulus.
pub fn modulo(a: i64, m: i64) -> i64 {
    ((a % m) + m) % m
}

/// Multiplicative inverse of `a` modulo `m`, or `None` when
/// gcd(a, m) ≠ 1.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let a = modulo(a, m);
    // Extended Euclid on (a, m).
    let (mut old_r, mut r) = (a, m);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let q = old_r / r;
        let t = old_r - q * r;
        old_r = r;
        r = t;
        let t = old_s - q * s;
        old_s = s;
        s = t;
    }
    if old_r != 1 {
        return None;
    }
    Some(modulo(old_s, m))
}

/// A square integer matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    rows: Vec<Vec<i64>>,
}

impl Matrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidArgument`] when the rows do not
    /// form a non-empty square.
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(CipherError::InvalidArgument(
                "matrix must have at least one row".into(),
            ));
        }
        if rows.iter().any(|r| r.len() != n) {
            return Err(CipherError::InvalidArgument(format!(
                "matrix must be square ({n}×{n})"
            )));
        }
        Ok(Matrix { n, rows })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Entry at (`r`, `c`). Both indices must be below `size()`.
    pub fn at(&self, r: usize, c: usize) -> i64 {
        self.rows[r][c]
    }

    /// Determinant by cofactor expansion along the first row.
    /// Intended for the small block sizes classical ciphers use.
    pub fn determinant(&self) -> i64 {
        if self.n == 1 {
            return self.rows[0][0];
        }
        if self.n == 2 {
            return self.rows[0][0] * self.rows[1][1] - self.rows[0][1] * self.rows[1][0];
        }
        let mut det = 0i64;
        for c in 0..self.n {
            let sign = if c % 2 == 0 { 1 } else { -1 };
            det += sign * self.rows[0][c] * self.minor(0, c).determinant();
        }
        det
    }

    /// The matrix with row `r` and column `c` removed.
    fn minor(&self, r: usize, c: usize) -> Matrix {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != r)
            .map(|(_, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != c)
                    .map(|(_, &v)| v)
                    .collect()
            })
            .collect();
        Matrix {
            n: self.n - 1,
            rows,
        }
    }

    /// Adjugate: the transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Matrix {
        if self.n == 1 {
            return Matrix {
                n: 1,
                rows: vec![vec![1]],
            };
        }
        let mut rows = vec![vec![0i64; self.n]; self.n];
        for i in 0..self.n {
            for j in 0..self.n {
                let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
                // Transposed placement.
                rows[j][i] = sign * self.minor(i, j).determinant();
            }
        }
        Matrix { n: self.n, rows }
    }

    /// Inverse over ℤ/mℤ: adjugate × (det⁻¹ mod m), entries reduced
    /// into `[0, m)`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] when gcd(det mod m, m) ≠ 1.
    pub fn inverse_mod(&self, m: i64) -> Result<Matrix> {
        let det = modulo(self.determinant(), m);
        let det_inv = mod_inverse(det, m).ok_or_else(|| {
            CipherError::InvalidKey(format!(
                "matrix determinant {det} is not invertible modulo {m}"
            ))
        })?;
        let adj = self.adjugate();
        let rows = adj
            .rows
            .iter()
            .map(|row| row.iter().map(|&v| modulo(v * det_inv, m)).collect())
            .collect();
        Ok(Matrix { n: self.n, rows })
    }

    /// Matrix–vector product reduced modulo `m`. The vector length
    /// must equal `size()`.
    pub fn mul_vec_mod(&self, v: &[i64], m: i64) -> Vec<i64> {
        self.rows
            .iter()
            .map(|row| {
                let sum: i64 = row.iter().zip(v).map(|(&a, &b)| a * b).sum();
                modulo(sum, m)
            })
            .collect()
    }
}
