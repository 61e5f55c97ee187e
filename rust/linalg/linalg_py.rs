//! Wrapper to export linear algebra functionality to Python

use crate::linalg::{
    det, from_rows, gauss_det, gauss_with_options, inverse, matmul, zeromat, LinalgError,
    SolveOptions,
};

use numpy::{PyArray2, ToPyArray};
use pyo3::exceptions::{PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;

impl From<LinalgError> for PyErr {
    fn from(err: LinalgError) -> Self {
        match err {
            LinalgError::SingularMatrix { .. } => PyZeroDivisionError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Solve `a * x = b`, returning `(det(a), x)`.
#[pyfunction]
#[pyo3(name = "gauss", signature = (a, b, relative_pivot_tolerance=None))]
pub(crate) fn gauss_py<'py>(
    py: Python<'py>,
    a: Vec<Vec<f64>>,
    b: Vec<Vec<f64>>,
    relative_pivot_tolerance: Option<f64>,
) -> PyResult<(f64, Bound<'py, PyArray2<f64>>)> {
    let options = match relative_pivot_tolerance {
        Some(tol) => SolveOptions::new(tol)?,
        None => SolveOptions::default(),
    };
    let (a, b) = (from_rows(&a)?, from_rows(&b)?);
    let (d, x) = gauss_with_options(&a.view(), &b.view(), &options)?;
    Ok((d, x.to_pyarray(py)))
}

/// Determinant by Gaussian elimination.
#[pyfunction]
#[pyo3(name = "gauss_det")]
pub(crate) fn gauss_det_py(a: Vec<Vec<f64>>) -> PyResult<f64> {
    Ok(gauss_det(&from_rows(&a)?.view())?)
}

/// Determinant by cofactor expansion.
#[pyfunction]
#[pyo3(name = "det")]
pub(crate) fn det_py(a: Vec<Vec<f64>>) -> PyResult<f64> {
    Ok(det(&from_rows(&a)?.view())?)
}

#[pyfunction]
#[pyo3(name = "inverse")]
pub(crate) fn inverse_py<'py>(
    py: Python<'py>,
    a: Vec<Vec<f64>>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    Ok(inverse(&from_rows(&a)?.view())?.to_pyarray(py))
}

#[pyfunction]
#[pyo3(name = "matmul")]
pub(crate) fn matmul_py<'py>(
    py: Python<'py>,
    a: Vec<Vec<f64>>,
    b: Vec<Vec<f64>>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let (a, b) = (from_rows(&a)?, from_rows(&b)?);
    Ok(matmul(&a.view(), &b.view())?.to_pyarray(py))
}

#[pyfunction]
#[pyo3(name = "zeromat")]
pub(crate) fn zeromat_py(py: Python<'_>, p: usize, q: usize) -> Bound<'_, PyArray2<f64>> {
    zeromat(p, q).to_pyarray(py)
}
