//! Cross-checks between the elimination and cofactor algorithms.

use crate::linalg::{
    det, from_rows, gauss, gauss_det, identity, matmul, to_rows, zeromat, LinalgError,
};
use ndarray::{arr2, Array2};
use proptest::prelude::*;

fn is_close(a: &f64, b: &f64, abs_tol: Option<f64>) -> bool {
    // used rather than equality for float numbers
    (a - b).abs() < abs_tol.unwrap_or(1e-8)
}

fn square(n: usize, entries: Vec<f64>) -> Array2<f64> {
    Array2::from_shape_vec((n, n), entries).expect("strategy yields n * n entries")
}

fn square_matrix() -> impl Strategy<Value = Array2<f64>> {
    (2_usize..=6).prop_flat_map(|n| {
        prop::collection::vec(-5.0_f64..5.0, n * n).prop_map(move |v| square(n, v))
    })
}

fn dominant_matrix() -> impl Strategy<Value = Array2<f64>> {
    square_matrix().prop_map(|mut a| {
        let shift = 5.0 * a.nrows() as f64 + 1.0;
        a.diag_mut().mapv_inplace(|v| v + shift);
        a
    })
}

#[test]
fn gauss_and_cofactor_agree_on_fixed_cases() {
    let cases = vec![
        arr2(&[[2., 0., -1.], [0., 5., 6.], [0., -1., 1.]]),
        arr2(&[[1., 0., -1.], [-2., 3., 0.], [1., -3., 2.]]),
        arr2(&[[2., 9., 4.], [7., 5., 3.], [6., 1., 8.]]),
        arr2(&[[0., 2., 1., 4.], [3., 0., 1., 1.], [1., 1., 0., 2.], [2., 5., 3., 0.]]),
    ];
    for a in cases {
        let d1 = gauss_det(&a.view()).unwrap();
        let d2 = det(&a.view()).unwrap();
        assert!(is_close(&d1, &d2, None), "{} != {}", d1, d2);
    }
}

#[test]
fn solve_from_list_of_rows() {
    let a = from_rows(&[vec![2., 0., -1.], vec![0., 5., 6.], vec![0., -1., 1.]]).unwrap();
    let b = from_rows(&[vec![2.], vec![1.], vec![2.]]).unwrap();
    let (d, x) = gauss(&a.view(), &b.view()).unwrap();
    assert!(is_close(&d, &22.0, None));
    let x = to_rows(&x.view());
    for (row, e) in x.iter().zip([1.5, -1.0, 1.0]) {
        assert!(is_close(&row[0], &e, None));
    }
}

#[test]
fn zero_product_is_zero() {
    let b = arr2(&[[1., 2., 3., 4.], [5., 6., 7., 8.]]);
    let result = matmul(&zeromat(2, 2).view(), &b.view()).unwrap();
    assert_eq!(result, zeromat(2, 4));
}

#[test]
fn singular_system_reports_error() {
    let a = arr2(&[[1., 2., 3.], [2., 4., 6.], [0., 0., 0.]]);
    let result = gauss(&a.view(), &identity(3).view());
    assert!(matches!(result, Err(LinalgError::SingularMatrix { .. })));
    assert_eq!(det(&a.view()).unwrap(), 0.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_determinants_agree(a in square_matrix()) {
        let cofactor = det(&a.view()).unwrap();
        match gauss_det(&a.view()) {
            Ok(elimination) => {
                let tol = 1e-9 * cofactor.abs().max(1.0);
                prop_assert!(
                    (elimination - cofactor).abs() < tol,
                    "elimination {} vs cofactor {}", elimination, cofactor
                );
            }
            Err(LinalgError::SingularMatrix { .. }) => prop_assert!(cofactor.abs() < 1e-9),
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    #[test]
    fn prop_solve_identity_gives_inverse(a in dominant_matrix()) {
        let n = a.nrows();
        let (_, x) = gauss(&a.view(), &identity(n).view()).unwrap();
        let ax = matmul(&a.view(), &x.view()).unwrap();
        for (v, e) in ax.iter().zip(identity(n).iter()) {
            prop_assert!(is_close(v, e, Some(1e-9)));
        }
    }

    #[test]
    fn prop_zero_times_any_is_zero(
        n in 0_usize..5,
        q in 0_usize..5,
        seed in prop::collection::vec(-10.0_f64..10.0, 25),
    ) {
        let b = Array2::from_shape_fn((n, q), |(i, j)| seed[i * 5 + j]);
        let result = matmul(&zeromat(n, n).view(), &b.view()).unwrap();
        prop_assert_eq!(result, zeromat(n, q));
    }

    #[test]
    fn prop_mismatched_dimensions_fail(n in 1_usize..5, p in 1_usize..5, p1 in 1_usize..5) {
        prop_assume!(p != p1);
        let result = matmul(&zeromat(n, p).view(), &zeromat(p1, 2).view());
        prop_assert_eq!(
            result,
            Err(LinalgError::IncompatibleDimensions { lhs_cols: p, rhs_rows: p1 })
        );
    }

    #[test]
    fn prop_zero_row_is_singular(a in square_matrix(), row in 0_usize..6) {
        let mut a = a;
        let row = row % a.nrows();
        a.row_mut(row).fill(0.0);
        let result = gauss(&a.view(), &identity(a.nrows()).view());
        prop_assert!(matches!(result, Err(LinalgError::SingularMatrix { .. })), "zero row accepted");
    }
}
