//! Gaussian elimination with partial pivoting.
//!
//! A single pass of row reduction over the augmented system `[A | B]` yields both the solution
//! `X` of `A X = B` and the determinant of `A`. Only row pivoting is performed.

use crate::json::JSON;
use crate::linalg::error::LinalgError;
use crate::linalg::ops::{argabsmax, identity, row_swap};
use log::{debug, trace};
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

/// Numerical settings for [gauss_with_options].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveOptions {
    /// A pivot is treated as zero when its magnitude is at most
    /// `relative_pivot_tolerance * n * max|A|`.
    pub relative_pivot_tolerance: f64,
}

impl SolveOptions {
    /// Fails with [LinalgError::InvalidTolerance] for a negative or non-finite tolerance.
    pub fn new(relative_pivot_tolerance: f64) -> Result<Self, LinalgError> {
        if !relative_pivot_tolerance.is_finite() || relative_pivot_tolerance < 0.0 {
            return Err(LinalgError::InvalidTolerance(relative_pivot_tolerance));
        }
        Ok(SolveOptions {
            relative_pivot_tolerance,
        })
    }

    fn threshold(&self, a: &ArrayView2<f64>) -> f64 {
        let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        self.relative_pivot_tolerance * a.nrows() as f64 * scale
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            relative_pivot_tolerance: f64::EPSILON,
        }
    }
}

impl JSON for SolveOptions {}

/// Return the determinant of `a` and the matrix `x` such that `a * x = b`.
///
/// `a` must be *n x n* and `b` must have *n* rows. If `b` is the identity then `x` is the
/// inverse of `a`. Neither input is modified.
///
/// Examples
/// --------
/// With `a = [[2, 0, -1], [0, 5, 6], [0, -1, 1]]` and `b = [[2], [1], [2]]` the determinant
/// is `22.0` and `x = [[1.5], [-1.0], [1.0]]`.
///
/// See [gauss_with_options] for the treatment of near-zero pivots.
pub fn gauss(a: &ArrayView2<f64>, b: &ArrayView2<f64>) -> Result<(f64, Array2<f64>), LinalgError> {
    gauss_with_options(a, b, &SolveOptions::default())
}

/// As [gauss], with an explicit pivot tolerance.
///
/// Returns [LinalgError::SingularMatrix] as soon as a pivot, after row pivoting, has magnitude
/// within the tolerance of zero, and [LinalgError::Overflow] if the determinant or the solution
/// leaves the finite range of f64.
pub fn gauss_with_options(
    a: &ArrayView2<f64>,
    b: &ArrayView2<f64>,
    options: &SolveOptions,
) -> Result<(f64, Array2<f64>), LinalgError> {
    let (n, cols) = a.dim();
    if n != cols {
        return Err(LinalgError::NotSquare { rows: n, cols });
    }
    if b.nrows() != n {
        return Err(LinalgError::RowMismatch {
            expected: n,
            got: b.nrows(),
        });
    }
    if !a.iter().chain(b.iter()).all(|v| v.is_finite()) {
        debug!("gauss rejected an input containing a non-finite value");
        return Err(LinalgError::NonFinite);
    }

    let tol = options.threshold(a);
    let mut a = a.to_owned();
    let mut b = b.to_owned();
    let mut det = 1.0_f64;

    // forward elimination to upper triangular
    for i in 0..n.saturating_sub(1) {
        let k = argabsmax(a.slice(s![i.., i])) + i;
        if k != i {
            trace!("pivot swap of rows {} and {}", i, k);
            row_swap(&mut a, i, k);
            row_swap(&mut b, i, k);
            det = -det;
        }
        let pivot = check_pivot(a[[i, i]], tol, i)?;

        let (a_top, mut a_bot) = a.view_mut().split_at(Axis(0), i + 1);
        let (b_top, mut b_bot) = b.view_mut().split_at(Axis(0), i + 1);
        let (a_piv, b_piv) = (a_top.slice(s![i, i..]), b_top.row(i));
        for r in 0..a_bot.nrows() {
            let t = a_bot[[r, i]] / pivot;
            a_bot.slice_mut(s![r, i..]).scaled_add(-t, &a_piv);
            b_bot.row_mut(r).scaled_add(-t, &b_piv);
        }
    }

    // back elimination and normalisation
    for i in (0..n).rev() {
        let (mut b_top, b_bot) = b.view_mut().split_at(Axis(0), i + 1);
        let mut b_row = b_top.row_mut(i);
        for j in (i + 1)..n {
            b_row.scaled_add(-a[[i, j]], &b_bot.row(j - i - 1));
        }
        let pivot = check_pivot(a[[i, i]], tol, i)?;
        det *= pivot;
        let t = 1.0 / pivot;
        b_row.mapv_inplace(|v| v * t);
    }

    if !det.is_finite() || !b.iter().all(|v| v.is_finite()) {
        debug!("gauss result overflowed f64 (det {:e})", det);
        return Err(LinalgError::Overflow);
    }
    Ok((det, b))
}

fn check_pivot(pivot: f64, tol: f64, column: usize) -> Result<f64, LinalgError> {
    if pivot.abs() <= tol {
        debug!("singular pivot {:e} in column {} (tolerance {:e})", pivot, column, tol);
        Err(LinalgError::SingularMatrix { column })
    } else {
        Ok(pivot)
    }
}

/// Determinant of `a` by Gaussian elimination.
///
/// Solves against the identity and discards the solution. A singular matrix yields
/// [LinalgError::SingularMatrix] rather than a zero determinant.
pub fn gauss_det(a: &ArrayView2<f64>) -> Result<f64, LinalgError> {
    let (det, _) = gauss(a, &identity(a.nrows()).view())?;
    Ok(det)
}

/// Inverse of `a` by Gaussian elimination.
pub fn inverse(a: &ArrayView2<f64>) -> Result<Array2<f64>, LinalgError> {
    let (_, x) = gauss(a, &identity(a.nrows()).view())?;
    Ok(x)
}

// UNIT TESTS

//

//
