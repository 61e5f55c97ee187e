//! Determinant by recursive cofactor (Laplace) expansion.

use crate::linalg::error::LinalgError;
use itertools::Itertools;
use ndarray::prelude::*;
use num_traits::Num;

/// Determinant of a square matrix by cofactor expansion along the first row.
///
/// Each level of recursion materialises the minors of the first row, so the cost is *O(n!)*.
/// This exists as an independent check on [gauss_det](crate::linalg::gauss_det) and is not
/// suitable for large matrices.
///
/// A *1 x 1* matrix returns its sole entry and a *0 x 0* matrix returns one. Non-square input
/// returns [LinalgError::NotSquare]. For `f64` input, overflow of the expansion is not detected
/// and may yield an infinite determinant.
///
/// Examples
/// --------
/// `det([[1, 0, -1], [-2, 3, 0], [1, -3, 2]]) = 3`
pub fn det<T>(a: &ArrayView2<T>) -> Result<T, LinalgError>
where
    T: Num + Clone,
{
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    Ok(cofactor_det(a))
}

fn cofactor_det<T>(a: &ArrayView2<T>) -> T
where
    T: Num + Clone,
{
    let n = a.len_of(Axis(0));
    match n {
        0 => T::one(),
        1 => a[[0, 0]].clone(),
        2 => {
            a[[0, 0]].clone() * a[[1, 1]].clone() - a[[0, 1]].clone() * a[[1, 0]].clone()
        }
        _ => {
            let lower = a.slice(s![1.., ..]);
            (0..n).fold(T::zero(), |acc, c| {
                let keep = (0..n).filter(|&k| k != c).collect_vec();
                let minor = lower.select(Axis(1), &keep);
                let term = a[[0, c]].clone() * cofactor_det(&minor.view());
                if c % 2 == 0 {
                    acc + term
                } else {
                    acc - term
                }
            })
        }
    }
}
