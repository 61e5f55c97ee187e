//! This is the documentation for acse_la
//!
//! A small dense linear algebra kernel: Gaussian elimination with partial pivoting returning
//! both the solution of `A X = B` and `det(A)`, an independent cofactor expansion determinant,
//! and the matrix utilities they are checked against. Matrices are [ndarray] 2d-arrays of
//! `f64`; every routine borrows its inputs and works on its own copy.
//!
//! Enable the `python` feature to build the `rs` Python extension module.


pub mod json;
pub mod linalg;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
use linalg::linalg_py::{
    det_py, gauss_det_py, gauss_py, inverse_py, matmul_py, zeromat_py,
};

#[cfg(feature = "python")]
#[pymodule]
fn rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Solvers
    m.add_function(wrap_pyfunction!(gauss_py, m)?)?;
    m.add_function(wrap_pyfunction!(gauss_det_py, m)?)?;
    m.add_function(wrap_pyfunction!(inverse_py, m)?)?;
    m.add_function(wrap_pyfunction!(det_py, m)?)?;

    // Utilities
    m.add_function(wrap_pyfunction!(matmul_py, m)?)?;
    m.add_function(wrap_pyfunction!(zeromat_py, m)?)?;

    Ok(())
}
