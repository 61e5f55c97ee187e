//! Dense matrix utilities shared by the solvers.

use crate::linalg::error::LinalgError;
use ndarray::prelude::*;
use ndarray::Zip;
use num_traits::Signed;
use std::cmp::PartialOrd;

/// Create a `rows` x `cols` matrix with every entry set to zero.
///
/// Examples
/// --------
/// `zeromat(3, 4)` returns three rows of four zeros each.
pub fn zeromat(rows: usize, cols: usize) -> Array2<f64> {
    Array2::zeros((rows, cols))
}

/// Create the `n` x `n` identity matrix.
pub fn identity(n: usize) -> Array2<f64> {
    Array2::eye(n)
}

/// Matrix multiplication of two 2d-arrays of f64.
///
/// If `a` is *n x p* and `b` is *p1 x q* then the product exists only when *p == p1*; otherwise
/// [LinalgError::IncompatibleDimensions] is returned. The result is the *n x q* matrix whose
/// element *(i, j)* is the inner product of row *i* of `a` and column *j* of `b`.
///
/// Examples
/// --------
/// `[[1, 2, 3], [4, 5, 6]] * [[10, 11], [20, 21], [30, 31]] = [[140, 146], [320, 335]]`
pub fn matmul(a: &ArrayView2<f64>, b: &ArrayView2<f64>) -> Result<Array2<f64>, LinalgError> {
    let (lhs_cols, rhs_rows) = (a.len_of(Axis(1)), b.len_of(Axis(0)));
    if lhs_cols != rhs_rows {
        return Err(LinalgError::IncompatibleDimensions { lhs_cols, rhs_rows });
    }
    Ok(Array2::from_shape_fn(
        (a.len_of(Axis(0)), b.len_of(Axis(1))),
        |(i, j)| a.row(i).dot(&b.column(j)),
    ))
}

/// Build a matrix from a list of rows, checking that every row has the same length.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>, LinalgError> {
    let ncols = rows.first().map_or(0, |r| r.len());
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
        return Err(LinalgError::RaggedRows {
            row,
            expected: ncols,
            got: r.len(),
        });
    }
    Ok(Array2::from_shape_fn((rows.len(), ncols), |(i, j)| {
        rows[i][j]
    }))
}

/// Convert a matrix back into a list of rows.
pub fn to_rows(a: &ArrayView2<f64>) -> Vec<Vec<f64>> {
    a.axis_iter(Axis(0)).map(|row| row.to_vec()).collect()
}

/// Index of the element with the largest absolute value.
///
/// Ties resolve to the earliest index. An empty view returns 0.
pub(crate) fn argabsmax<T>(a: ArrayView1<T>) -> usize
where
    T: Signed + PartialOrd,
{
    let mut k = 0_usize;
    for (i, v) in a.iter().enumerate().skip(1) {
        if v.abs() > a[k].abs() {
            k = i;
        }
    }
    k
}

/// Swap rows `j` and `kr` in place, where `j < kr`.
pub(crate) fn row_swap<T>(p: &mut Array2<T>, j: usize, kr: usize) {
    let (mut pt, mut pb) = p.slice_mut(s![.., ..]).split_at(Axis(0), kr);
    let (r1, r2) = (pt.row_mut(j), pb.row_mut(0));
    Zip::from(r1).and(r2).for_each(std::mem::swap);
}

// UNIT TESTS
