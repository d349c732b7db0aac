//! Elementwise log-density primitives.
use crate::utils::array::{broadcast_shape, broadcast_view};
use ndarray::{ArrayD, Zip};

/// Natural log of π.
pub const LN_PI: f64 = 1.144_729_885_849_400_2;

/// Restrict a log-density expression to where all constraints hold.
///
/// The expression and constraints broadcast together. Each element of the result equals
/// `expr` where every constraint is `true` and negative infinity where any is `false`.
/// With no constraints the result is `expr`.
///
/// NaN is never an error: a NaN comparison yields `false` when building a constraint,
/// so out-of-support values and parameters evaluate to zero probability.
///
/// # Panics
/// If the shapes cannot be broadcast together.
pub fn bound(expr: ArrayD<f64>, constraints: &[ArrayD<bool>]) -> ArrayD<f64> {
    let shapes: Vec<&[usize]> = std::iter::once(expr.shape())
        .chain(constraints.iter().map(|c| c.shape()))
        .collect();
    let shape = broadcast_shape(&shapes);

    let mut out = if expr.shape() == shape.as_slice() {
        expr
    } else {
        broadcast_view(&expr, &shape).to_owned()
    };
    for constraint in constraints {
        Zip::from(&mut out)
            .and(broadcast_view(constraint, &shape))
            .for_each(|x, &ok| {
                if !ok {
                    *x = f64::NEG_INFINITY;
                }
            });
    }
    out
}

/// `m * ln(x)`, defined as 0 at `x == 0 && m == 0`.
#[inline]
pub fn logpow(x: f64, m: f64) -> f64 {
    if x == 0.0 && m == 0.0 {
        0.0
    } else {
        m * x.ln()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::utils::array::scalar;
    use ndarray::{arr1, arr2};

    #[test]
    fn bound_no_constraints() {
        assert_eq!(bound(scalar(5.0), &[]), scalar(5.0));
    }

    #[test]
    fn bound_scalar_with_constraint_array() {
        let out = bound(scalar(5.0), &[arr1(&[true, false]).into_dyn()]);
        assert_eq!(out, arr1(&[5.0, f64::NEG_INFINITY]).into_dyn());
    }

    #[test]
    fn bound_any_failure_is_neg_inf() {
        let expr = arr1(&[1.0, 2.0, 3.0]).into_dyn();
        let a = arr1(&[true, false, true]).into_dyn();
        let b = arr1(&[true, true, false]).into_dyn();
        let out = bound(expr, &[a, b]);
        assert_eq!(
            out,
            arr1(&[1.0, f64::NEG_INFINITY, f64::NEG_INFINITY]).into_dyn()
        );
    }

    #[test]
    fn bound_broadcasts_constraints_together() {
        let row = arr2(&[[true, false]]).into_dyn();
        let col = arr2(&[[true], [false]]).into_dyn();
        let out = bound(scalar(0.0), &[row, col]);
        let ninf = f64::NEG_INFINITY;
        assert_eq!(out, arr2(&[[0.0, ninf], [ninf, ninf]]).into_dyn());
    }

    #[test]
    fn bound_nan_expression_passes_where_allowed() {
        let out = bound(arr1(&[f64::NAN, f64::NAN]).into_dyn(), &[arr1(&[true, false]).into_dyn()]);
        assert!(out[0].is_nan());
        assert_eq!(out[1], f64::NEG_INFINITY);
    }

    #[test]
    fn logpow_zero_zero() {
        assert_eq!(logpow(0.0, 0.0), 0.0);
    }

    #[test]
    fn logpow_matches_ln() {
        assert!((logpow(2.0, 3.0) - 3.0 * 2.0_f64.ln()).abs() < 1e-15);
        assert_eq!(logpow(0.0, 1.0), f64::NEG_INFINITY);
    }

    #[test]
    fn ln_pi_constant() {
        assert!((LN_PI - std::f64::consts::PI.ln()).abs() < 1e-15);
    }
}
