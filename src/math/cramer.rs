//! Quadratic normal equations via Cramer's rule.
//!
//! For `y = a·x² + b·x + c` the least-squares conditions form a 3×3 linear
//! system over the power sums `Σx..Σx⁴` and cross sums `Σxy, Σx²y`:
//!
//! ```text
//! | n    Σx   Σx²  |   | c |   | Σy   |
//! | Σx   Σx²  Σx³  | · | b | = | Σxy  |
//! | Σx²  Σx³  Σx⁴  |   | a |   | Σx²y |
//! ```
//!
//! With a fixed 3×3 size, Cramer's rule (column substitution + determinants)
//! is the simplest exact solve; nalgebra provides the determinant.

use nalgebra::{Matrix3, Vector3};

use crate::domain::SamplePoint;
use crate::math::DEGENERATE_EPS;

/// Solution of the quadratic normal equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticSolve {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Solve the quadratic normal equations for the given points.
///
/// Returns `None` when fewer than 3 points are given or the determinant is
/// below `DEGENERATE_EPS` (e.g. all x identical, or only two distinct x).
pub fn solve_quadratic_normal(points: &[SamplePoint]) -> Option<QuadraticSolve> {
    let n = points.len();
    if n < 3 {
        return None;
    }

    let mut sx = 0.0;
    let mut sx2 = 0.0;
    let mut sx3 = 0.0;
    let mut sx4 = 0.0;
    let mut sy = 0.0;
    let mut sxy = 0.0;
    let mut sx2y = 0.0;
    for p in points {
        let x2 = p.x * p.x;
        sx += p.x;
        sx2 += x2;
        sx3 += x2 * p.x;
        sx4 += x2 * x2;
        sy += p.y;
        sxy += p.x * p.y;
        sx2y += x2 * p.y;
    }

    #[rustfmt::skip]
    let m = Matrix3::new(
        n as f64, sx,  sx2,
        sx,       sx2, sx3,
        sx2,      sx3, sx4,
    );
    let rhs = Vector3::new(sy, sxy, sx2y);

    let det = m.determinant();
    if det.abs() < DEGENERATE_EPS {
        return None;
    }

    let solve_column = |i: usize| {
        let mut substituted = m;
        substituted.set_column(i, &rhs);
        substituted.determinant() / det
    };

    Some(QuadraticSolve {
        c: solve_column(0),
        b: solve_column(1),
        a: solve_column(2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(pairs: &[(f64, f64)]) -> Vec<SamplePoint> {
        pairs.iter().map(|&(x, y)| SamplePoint { x, y }).collect()
    }

    #[test]
    fn solves_exact_parabola() {
        // y = x² on symmetric x: the power sums make the solve exact.
        let q = solve_quadratic_normal(&pts(&[
            (-2.0, 4.0),
            (-1.0, 1.0),
            (0.0, 0.0),
            (1.0, 1.0),
            (2.0, 4.0),
        ]))
        .unwrap();
        assert_eq!(q.a, 1.0);
        assert_eq!(q.b, 0.0);
        assert_eq!(q.c, 0.0);
    }

    #[test]
    fn colinear_input_yields_zero_curvature() {
        // Points on y = 2x + 1: the system is solvable and a must vanish.
        let q =
            solve_quadratic_normal(&pts(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)])).unwrap();
        assert!(q.a.abs() < 1e-9);
        assert!((q.b - 2.0).abs() < 1e-9);
        assert!((q.c - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_identical_x() {
        assert!(solve_quadratic_normal(&pts(&[(1.0, 1.0), (1.0, 2.0), (1.0, 3.0)])).is_none());
    }

    #[test]
    fn rejects_too_few_points() {
        assert!(solve_quadratic_normal(&pts(&[(0.0, 0.0), (1.0, 1.0)])).is_none());
    }
}
