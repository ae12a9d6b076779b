use crate::numerical::riemann::Interval;
use crate::symbolic::poly_error::PolyError;
use crate::symbolic::polynomial::{Polynomial, is_negligible};
use log::debug;

/// x^degree with 0^0 = 1
fn power(x: f64, degree: u32) -> f64 {
    match i32::try_from(degree) {
        Ok(exp) => x.powi(exp),
        Err(_) => x.powf(degree as f64),
    }
}

impl Polynomial {
    /// POLYNOMIAL CALCULUS

    /// value of the polynomial at x: sum of coefficient * x^degree over the non-negligible terms
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms()
            .filter(|(_, coefficient)| !is_negligible(*coefficient))
            .map(|(degree, coefficient)| coefficient * power(x, degree))
            .sum()
    }

    /// Indefinite integral with zero integration constant:
    /// ∫ c x^n dx = c/(n+1) x^(n+1)
    pub fn antiderivative(&self) -> Result<Polynomial, PolyError> {
        let mut integral = Polynomial::new();
        for (degree, coefficient) in self.terms() {
            let new_degree = degree
                .checked_add(1)
                .ok_or(PolyError::DegreeOverflow { degree })?;
            integral = integral.add_term(new_degree, coefficient / new_degree as f64);
        }
        Ok(integral)
    }

    /// Definite integration using the fundamental theorem of calculus, exact up to
    /// floating point rounding. Works for any order of the bounds.
    pub fn definite_integral(&self, lower: f64, upper: f64) -> Result<f64, PolyError> {
        let integral = self.antiderivative()?;
        Ok(integral.evaluate(upper) - integral.evaluate(lower))
    }

    /// self - other, degree-wise over every degree stored in either polynomial.
    /// Degrees where both coincide stay in the map with a zero coefficient.
    pub fn difference(&self, other: &Polynomial) -> Polynomial {
        Polynomial::from_terms(
            self.degrees_union(other)
                .into_iter()
                .map(|degree| (degree, self.coefficient(degree) - other.coefficient(degree))),
        )
    }

    /// |∫_a^b (self - other) dx|
    ///
    /// This is the absolute value of the signed integral, it equals the geometric area between
    /// the curves only when they do not cross inside (a, b). `left_riemann_area` measures the
    /// geometric area instead.
    pub fn abs_area_between(&self, other: &Polynomial, a: f64, b: f64) -> Result<f64, PolyError> {
        let interval = Interval::new(a, b)?;
        let diff = self.difference(other);
        debug!("difference polynomial: {}", diff);
        let area = diff.definite_integral(interval.a(), interval.b())?.abs();
        Ok(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn poly(terms: Vec<(u32, f64)>) -> Polynomial {
        Polynomial::from_terms(terms)
    }

    #[test]
    fn test_evaluate() {
        // 2x^2 + 3x + 4
        let p = poly(vec![(0, 4.0), (1, 3.0), (2, 2.0)]);
        assert_eq!(p.evaluate(0.0), 4.0);
        assert_eq!(p.evaluate(2.0), 18.0);
        assert_eq!(p.evaluate(-1.0), 3.0);
    }

    #[test]
    fn test_evaluate_constant_at_zero() {
        let p = Polynomial::constant(7.0);
        assert_eq!(p.evaluate(0.0), 7.0);
        assert_eq!(Polynomial::new().evaluate(3.0), 0.0);
    }

    #[test]
    fn test_evaluate_skips_negligible_terms() {
        let p = Polynomial::parse("0.00000000001x^5").unwrap();
        assert_eq!(p.to_string(), "0");
        assert!(p.is_zero());
        assert_eq!(p.evaluate(1e4), 0.0);
        let q = poly(vec![(5, 1e-11), (1, 2.0)]);
        assert_eq!(q.evaluate(1e4), 2e4);
    }

    #[test]
    fn test_evaluate_large_degree() {
        let p = poly(vec![(u32::MAX, 1.0)]);
        assert_eq!(p.evaluate(1.0), 1.0);
        assert_eq!(p.evaluate(0.5), 0.0);
    }

    #[test]
    fn test_antiderivative() {
        // ∫ (3x^2 + 2x + 1) dx = x^3 + x^2 + x
        let p = poly(vec![(2, 3.0), (1, 2.0), (0, 1.0)]);
        let integral = p.antiderivative().unwrap();
        assert_abs_diff_eq!(integral, poly(vec![(3, 1.0), (2, 1.0), (1, 1.0)]));
        assert_eq!(integral.coefficient(0), 0.0);
    }

    #[test]
    fn test_antiderivative_does_not_mutate_input() {
        let p = poly(vec![(1, 2.0)]);
        let _ = p.antiderivative().unwrap();
        assert_eq!(p, poly(vec![(1, 2.0)]));
    }

    #[test]
    fn test_antiderivative_degree_overflow() {
        let p = poly(vec![(u32::MAX, 1.0)]);
        assert_eq!(
            p.antiderivative(),
            Err(PolyError::DegreeOverflow { degree: u32::MAX })
        );
    }

    #[test]
    fn test_definite_integral_exact() {
        // ∫_0^2 x dx = 2
        let p = poly(vec![(1, 1.0)]);
        assert_eq!(p.definite_integral(0.0, 2.0).unwrap(), 2.0);
        // ∫_0^1 x^2 dx = 1/3
        let p = poly(vec![(2, 1.0)]);
        assert_relative_eq!(p.definite_integral(0.0, 1.0).unwrap(), 1.0 / 3.0, epsilon = 1e-15);
        // reversed bounds flip the sign
        assert_relative_eq!(p.definite_integral(1.0, 0.0).unwrap(), -1.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_difference() {
        let p = poly(vec![(2, 1.0), (1, 2.0)]);
        let q = poly(vec![(1, 2.0), (0, 5.0)]);
        let diff = p.difference(&q);
        assert_eq!(diff.len(), 3);
        assert_eq!(diff.coefficient(2), 1.0);
        assert_eq!(diff.coefficient(1), 0.0);
        assert_eq!(diff.coefficient(0), -5.0);
        assert_eq!(diff.to_string(), "x^2 - 5");
        assert_eq!(q.difference(&p).coefficient(0), 5.0);
    }

    #[test]
    fn test_abs_area_between() {
        // between x^2 and 0 on [0, 1]
        let p = poly(vec![(2, 1.0)]);
        let zero = Polynomial::new();
        assert_relative_eq!(p.abs_area_between(&zero, 0.0, 1.0).unwrap(), 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(zero.abs_area_between(&p, 0.0, 1.0).unwrap(), 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_abs_area_between_crossing_curves_cancels() {
        // x and 0 on [-1, 1]: signed integral is 0 while the geometric area is 1
        let p = poly(vec![(1, 1.0)]);
        let area = p.abs_area_between(&Polynomial::new(), -1.0, 1.0).unwrap();
        assert_abs_diff_eq!(area, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_abs_area_between_rejects_bad_interval() {
        let p = poly(vec![(1, 1.0)]);
        let zero = Polynomial::new();
        assert_eq!(
            p.abs_area_between(&zero, 1.0, 1.0),
            Err(PolyError::InvalidInterval { a: 1.0, b: 1.0 })
        );
        assert!(matches!(
            p.abs_area_between(&zero, 2.0, -1.0),
            Err(PolyError::InvalidInterval { .. })
        ));
        assert!(p.abs_area_between(&zero, 0.0, f64::NAN).is_err());
    }
}
