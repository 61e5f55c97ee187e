//! Dense linear algebra on 2d-arrays of `f64`.
//!
//! Two independent determinant algorithms are provided; [gauss_det] (and [gauss], which also
//! solves a linear system) by row reduction with partial pivoting in *O(n^3)*, and [det] by
//! cofactor expansion in *O(n!)*. [zeromat] and [matmul] are the supporting utilities.

mod cofactor;
mod error;
mod gauss;
mod ops;
#[cfg(feature = "python")]
pub(crate) mod linalg_py;

pub use crate::linalg::cofactor::det;
pub use crate::linalg::error::LinalgError;
pub use crate::linalg::gauss::{gauss, gauss_det, gauss_with_options, inverse, SolveOptions};
pub use crate::linalg::ops::{from_rows, identity, matmul, to_rows, zeromat};
