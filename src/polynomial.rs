// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The polynomial `x^n - 1` and everything Newton's method needs to
//! know about it: its roots, in a fixed order so that colors stay
//! stable from run to run, and the update step
//!
//! ```text
//! next(x) = x - f(x) / f'(x) = 1 / (n * x^(n-1)) + (n - 1) * x / n
//! ```

use num::{Complex, One};

use crate::error::FractalError;

/// The smallest supported degree.
pub const MIN_DEGREE: u32 = 1;

/// The largest supported degree.  The palette has one color per root
/// plus one for divergence, so this is bounded by the palette size.
pub const MAX_DEGREE: u32 = 9;

/// `x^degree - 1`, together with its roots.  Built once per run and
/// shared read-only by every worker.
#[derive(Clone, Debug)]
pub struct Polynomial {
    degree: u32,
    roots: Vec<Complex<f64>>,
}

/// The principal value of `(-1)^(k/n)`, which is `e^(iπk/n)`.
fn unit_power(k: u32, n: u32) -> Complex<f64> {
    Complex::new(-1.0, 0.0).powf(f64::from(k) / f64::from(n))
}

/// The roots of unity for `degree`, in the closed-form order used for
/// color assignment.  Root zero is always exactly `1`.  Even degrees
/// list `-1` (and `±i` where they exist) next, then the remaining
/// roots as `∓(-1)^(k/n)` pairs; odd degrees alternate sign over
/// `(-1)^(k/n)` for k in 1..n.
fn roots_of_unity(degree: u32) -> Vec<Complex<f64>> {
    let one = Complex::new(1.0, 0.0);
    let minus_one = Complex::new(-1.0, 0.0);
    let i = Complex::new(0.0, 1.0);
    let mut roots = vec![one];
    match degree {
        2 => roots.push(minus_one),
        4 => roots.extend(&[minus_one, -i, i]),
        6 => {
            roots.push(minus_one);
            for k in &[1, 2] {
                let r = unit_power(*k, 3);
                roots.extend(&[-r, r]);
            }
        }
        8 => {
            roots.extend(&[minus_one, -i, i]);
            for k in &[1, 3] {
                let r = unit_power(*k, 4);
                roots.extend(&[-r, r]);
            }
        }
        // Odd degrees, and degree 1 where the range is empty.
        _ => {
            for k in 1..degree {
                let r = unit_power(k, degree);
                roots.push(if k % 2 == 1 { -r } else { r });
            }
        }
    }
    roots
}

impl Polynomial {
    /// Builds the model for `x^degree - 1`.  Degrees outside 1..=9 are
    /// rejected.
    pub fn new(degree: u32) -> Result<Polynomial, FractalError> {
        if degree < MIN_DEGREE || degree > MAX_DEGREE {
            return Err(FractalError::InvalidDegree(degree));
        }
        Ok(Polynomial {
            degree,
            roots: roots_of_unity(degree),
        })
    }

    /// The degree `n` of `x^n - 1`.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// The roots, in color order.
    pub fn roots(&self) -> &[Complex<f64>] {
        &self.roots
    }

    /// `x^(degree - 1)` by repeated multiplication.
    fn power_below(&self, x: Complex<f64>) -> Complex<f64> {
        (1..self.degree).fold(Complex::<f64>::one(), |acc, _| acc * x)
    }

    /// Evaluates `f(x) = x^n - 1`.
    pub fn value(&self, x: Complex<f64>) -> Complex<f64> {
        self.power_below(x) * x - Complex::<f64>::one()
    }

    /// Evaluates `f'(x) = n * x^(n-1)`.
    pub fn derivative(&self, x: Complex<f64>) -> Complex<f64> {
        self.power_below(x) * f64::from(self.degree)
    }

    /// One Newton step.  For degree one the polynomial is linear and
    /// every step lands exactly on the root.
    #[inline]
    pub fn next(&self, x: Complex<f64>) -> Complex<f64> {
        if self.degree == 1 {
            return Complex::<f64>::one();
        }
        let n = f64::from(self.degree);
        Complex::<f64>::one() / (self.power_below(x) * n) + x * ((n - 1.0) / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex<f64>, b: Complex<f64>) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn rejects_degrees_out_of_range() {
        assert!(Polynomial::new(0).is_err());
        assert!(Polynomial::new(10).is_err());
        assert!(Polynomial::new(1).is_ok());
        assert!(Polynomial::new(9).is_ok());
    }

    #[test]
    fn every_degree_has_degree_many_roots_of_unity() {
        for degree in MIN_DEGREE..=MAX_DEGREE {
            let p = Polynomial::new(degree).unwrap();
            assert_eq!(p.roots().len(), degree as usize);
            assert_eq!(p.roots()[0], Complex::new(1.0, 0.0));
            for root in p.roots() {
                assert!(close(p.value(*root), Complex::new(0.0, 0.0)), "{} {}", degree, root);
            }
        }
    }

    #[test]
    fn roots_are_distinct() {
        for degree in MIN_DEGREE..=MAX_DEGREE {
            let p = Polynomial::new(degree).unwrap();
            for (i, a) in p.roots().iter().enumerate() {
                for b in &p.roots()[i + 1..] {
                    assert!(!close(*a, *b), "degree {} repeats {}", degree, a);
                }
            }
        }
    }

    #[test]
    fn root_order_is_stable() {
        let p = Polynomial::new(4).unwrap();
        assert_eq!(
            p.roots(),
            &[
                Complex::new(1.0, 0.0),
                Complex::new(-1.0, 0.0),
                Complex::new(0.0, -1.0),
                Complex::new(0.0, 1.0),
            ][..]
        );

        let p = Polynomial::new(3).unwrap();
        assert!(close(p.roots()[1], Complex::new(-0.5, -(3.0f64).sqrt() / 2.0)));
        assert!(close(p.roots()[2], Complex::new(-0.5, (3.0f64).sqrt() / 2.0)));
    }

    #[test]
    fn newton_step_matches_its_definition() {
        let x = Complex::new(0.7, -1.3);
        for degree in 2..=MAX_DEGREE {
            let p = Polynomial::new(degree).unwrap();
            let expected = x - p.value(x) / p.derivative(x);
            assert!(close(p.next(x), expected), "degree {}", degree);
        }
    }

    #[test]
    fn quadratic_step_from_two() {
        // 1 / (2 * 2) + 2 / 2, with every term exact in binary.
        let p = Polynomial::new(2).unwrap();
        assert_eq!(p.next(Complex::new(2.0, 0.0)), Complex::new(1.25, 0.0));
        assert_eq!(p.next(Complex::new(-2.0, 0.0)), Complex::new(-1.25, 0.0));
    }

    #[test]
    fn linear_step_is_the_root() {
        let p = Polynomial::new(1).unwrap();
        assert_eq!(p.next(Complex::new(-1.5, 0.25)), Complex::new(1.0, 0.0));
    }

    #[test]
    fn roots_are_fixed_points() {
        for degree in MIN_DEGREE..=MAX_DEGREE {
            let p = Polynomial::new(degree).unwrap();
            for root in p.roots() {
                assert!(close(p.next(*root), *root));
            }
        }
    }
}
