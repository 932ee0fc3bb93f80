//! Back-substitution for upper-triangular systems.
//!
//! # Algorithm
//!
//! The last equation has a single unknown, so it is solved first. Each row
//! above it then depends only on unknowns that are already known:
//!
//! ```text
//! x[i] = (b[i] - Σ_{j>i} a[i,j] · x[j]) / a[i,i]    for i = n-1, …, 0
//! ```
//!
//! Entries strictly below the diagonal are never read, so a full matrix whose
//! upper triangle holds the system works as well as a zero-padded one.
//!
//! # Singular diagonals
//!
//! A diagonal entry that is exactly `0.0` stops the solve with
//! [`Error::SingularMatrix`] naming that row. The comparison is exact: a tiny
//! but nonzero pivot such as `1e-300` is accepted and can produce huge values.
//! Rows are visited bottom-up, so the reported row is the lowest zero pivot,
//! and the unknowns already computed below it are discarded.

mod error;

pub use error::Error;

use ndarray::{Array1, ArrayView1, ArrayView2};

/// Solves `a · x = b` for upper-triangular `a`.
///
/// Returns a newly allocated solution; neither `a` nor `b` is modified.
/// An empty system yields an empty solution.
///
/// # Errors
///
/// Returns an error if `a` is not square, if `b` does not match its
/// dimension, or if a diagonal entry is exactly zero.
pub fn solve(a: ArrayView2<'_, f64>, b: ArrayView1<'_, f64>) -> Result<Array1<f64>, Error> {
    let n = validate_shape(&a, &b)?;
    let mut x = Array1::<f64>::zeros(n);

    for i in (0..n).rev() {
        let sum: f64 = a
            .row(i)
            .iter()
            .zip(x.iter())
            .skip(i + 1)
            .map(|(a_ij, x_j)| a_ij * x_j)
            .sum();

        let pivot = a[[i, i]];
        #[allow(clippy::float_cmp)]
        if pivot == 0.0 {
            return Err(Error::SingularMatrix { row: i });
        }

        x[i] = (b[i] - sum) / pivot;
    }

    Ok(x)
}

/// Checks that `a` is square and `b` matches, returning the dimension.
fn validate_shape(a: &ArrayView2<'_, f64>, b: &ArrayView1<'_, f64>) -> Result<usize, Error> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    if b.len() != rows {
        return Err(Error::DimensionMismatch {
            expected: rows,
            actual: b.len(),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    #[test]
    fn solves_three_by_three() {
        let a = array![[2.0, -1.0, 0.0], [0.0, 3.0, 1.0], [0.0, 0.0, 4.0]];
        let b = array![1.0, 2.0, 3.0];

        let x = solve(a.view(), b.view()).expect("nonsingular system");

        assert_relative_eq!(x[0], 17.0 / 24.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 5.0 / 12.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn solution_satisfies_system() {
        let a = array![
            [4.0, -2.0, 1.0, 3.0],
            [0.0, -1.5, 2.0, 0.5],
            [0.0, 0.0, 7.0, -3.0],
            [0.0, 0.0, 0.0, 0.25],
        ];
        let b = array![1.0, -2.0, 3.5, 10.0];

        let x = solve(a.view(), b.view()).expect("nonsingular system");
        let ax = a.dot(&x);

        for (lhs, rhs) in ax.iter().zip(b.iter()) {
            assert_relative_eq!(*lhs, *rhs, epsilon = 1e-12);
        }
    }

    #[test]
    fn ignores_entries_below_diagonal() {
        let upper = array![[2.0, -1.0, 0.0], [0.0, 3.0, 1.0], [0.0, 0.0, 4.0]];
        let full = array![[2.0, -1.0, 0.0], [9.0, 3.0, 1.0], [-5.0, 8.0, 4.0]];
        let b = array![1.0, 2.0, 3.0];

        let expected = solve(upper.view(), b.view()).expect("nonsingular system");
        let actual = solve(full.view(), b.view()).expect("nonsingular system");

        assert_eq!(expected, actual);
    }

    #[test]
    fn does_not_modify_inputs() {
        let a = array![[1.0, 2.0], [0.0, 3.0]];
        let b = array![5.0, 6.0];
        let (a_before, b_before) = (a.clone(), b.clone());

        solve(a.view(), b.view()).expect("nonsingular system");

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn singular_last_row_is_reported() {
        let a = array![[1.0, 2.0], [0.0, 0.0]];
        let b = array![1.0, 1.0];

        let err = solve(a.view(), b.view()).unwrap_err();

        assert_eq!(err, Error::SingularMatrix { row: 1 });
    }

    #[test]
    fn singular_reports_lowest_zero_pivot() {
        let a = array![[0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 2.0]];
        let b = array![1.0, 1.0, 1.0];

        let err = solve(a.view(), b.view()).unwrap_err();

        assert_eq!(err, Error::SingularMatrix { row: 1 });
    }

    #[test]
    fn singular_top_row_fails_after_lower_rows() {
        let a = array![[0.0, 1.0, 1.0], [0.0, 5.0, 1.0], [0.0, 0.0, 2.0]];
        let b = array![1.0, 1.0, 1.0];

        let err = solve(a.view(), b.view()).unwrap_err();

        assert_eq!(err, Error::SingularMatrix { row: 0 });
    }

    #[test]
    fn negative_zero_pivot_is_singular() {
        let a = array![[-0.0]];
        let b = array![1.0];

        assert_eq!(
            solve(a.view(), b.view()),
            Err(Error::SingularMatrix { row: 0 })
        );
    }

    #[test]
    fn tiny_pivot_is_accepted() {
        let a = array![[1e-300]];
        let b = array![1e-10];

        let x = solve(a.view(), b.view()).expect("nonzero pivot");

        assert_relative_eq!(x[0], 1e290, max_relative = 1e-12);
    }

    #[test]
    fn error_message_names_row() {
        let err = Error::SingularMatrix { row: 2 };
        assert_eq!(
            err.to_string(),
            "diagonal entry a[2, 2] is zero, division impossible"
        );
    }

    #[test]
    fn rejects_non_square_matrix() {
        let a = Array2::<f64>::ones((2, 3));
        let b = array![1.0, 2.0];

        assert_eq!(
            solve(a.view(), b.view()),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn rejects_mismatched_rhs() {
        let a = Array2::<f64>::eye(3);
        let b = array![1.0, 2.0];

        assert_eq!(
            solve(a.view(), b.view()),
            Err(Error::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn empty_system_has_empty_solution() {
        let a = Array2::<f64>::zeros((0, 0));
        let b = Array1::<f64>::zeros(0);

        let x = solve(a.view(), b.view()).expect("empty system");

        assert!(x.is_empty());
    }

    #[test]
    fn works_on_transposed_lower_triangle() {
        // Transposing a lower-triangular matrix gives an upper-triangular view.
        let lower = array![[3.0, 0.0], [6.0, 2.0]];
        let b = array![12.0, 4.0];

        let x = solve(lower.t(), b.view()).expect("nonsingular system");

        assert_relative_eq!(x[1], 2.0);
        assert_relative_eq!(x[0], 0.0);
    }
}
