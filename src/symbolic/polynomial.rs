//! # Polynomial Module
//!
//! Sparse representation of a polynomial in one variable: a map from degree to
//! coefficient. Degrees that are not stored have coefficient 0.
//!
//! ## Main Structures and Methods
//! - `Polynomial` - the immutable value type, every operation returns a new polynomial
//! - `from_terms` - builds a polynomial accumulating coefficients that share a degree
//! - `pruned` - drops entries whose magnitude is below `ZERO_TOLERANCE`
//! - `AbsDiffEq`/`RelativeEq` - degree-wise comparison with a missing degree read as 0
//!
//! Coefficients that end up close to zero after subtraction or integration stay in
//! the map; evaluation, formatting and comparison skip them.

use approx::{AbsDiffEq, RelativeEq};
use std::collections::BTreeMap;

/// coefficients with magnitude below this are treated as exactly zero
pub const ZERO_TOLERANCE: f64 = 1e-10;

/// tolerance-based zero test used by evaluation, formatting and comparison
pub fn is_negligible(coefficient: f64) -> bool {
    coefficient.abs() < ZERO_TOLERANCE
}

/// Polynomial in one variable stored as degree -> coefficient.
///
/// # Examples
/// ```
/// use RustedPolyArea::symbolic::polynomial::Polynomial;
/// // 2x^2 + 3x + 4
/// let p = Polynomial::from_terms(vec![(2, 2.0), (1, 3.0), (0, 4.0)]);
/// assert_eq!(p.coefficient(1), 3.0);
/// assert_eq!(p.coefficient(7), 0.0);
/// assert_eq!(p.degree(), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polynomial {
    terms: BTreeMap<u32, f64>,
}

impl Polynomial {
    /// the zero polynomial (no stored terms)
    pub fn new() -> Self {
        Polynomial {
            terms: BTreeMap::new(),
        }
    }

    pub fn constant(value: f64) -> Self {
        Polynomial::new().add_term(0, value)
    }

    /// Builds a polynomial from (degree, coefficient) pairs. Pairs sharing a degree are summed,
    /// never overwritten, so the order of the pairs does not matter.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        terms
            .into_iter()
            .fold(Polynomial::new(), |acc, (degree, coefficient)| {
                acc.add_term(degree, coefficient)
            })
    }

    /// returns a new polynomial with `coefficient` added to the entry of `degree`
    pub fn add_term(mut self, degree: u32, coefficient: f64) -> Self {
        *self.terms.entry(degree).or_insert(0.0) += coefficient;
        self
    }

    /// coefficient of the given degree, 0 for absent degrees
    pub fn coefficient(&self, degree: u32) -> f64 {
        self.terms.get(&degree).copied().unwrap_or(0.0)
    }

    /// stored (degree, coefficient) pairs in increasing degree order, including near-zero entries
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (u32, f64)> + '_ {
        self.terms.iter().map(|(&degree, &coefficient)| (degree, coefficient))
    }

    /// all degrees stored in either polynomial, increasing
    pub fn degrees_union(&self, other: &Polynomial) -> Vec<u32> {
        let mut degrees: Vec<u32> = self.terms.keys().chain(other.terms.keys()).copied().collect();
        degrees.sort_unstable();
        degrees.dedup();
        degrees
    }

    /// number of stored entries
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// true if every stored coefficient is negligible
    pub fn is_zero(&self) -> bool {
        self.terms.values().all(|&c| is_negligible(c))
    }

    /// highest degree with a non-negligible coefficient, `None` for the zero polynomial
    pub fn degree(&self) -> Option<u32> {
        self.terms
            .iter()
            .rev()
            .find(|(_, c)| !is_negligible(**c))
            .map(|(&degree, _)| degree)
    }

    /// copy without the negligible entries
    pub fn pruned(&self) -> Polynomial {
        Polynomial {
            terms: self
                .terms
                .iter()
                .filter(|(_, c)| !is_negligible(**c))
                .map(|(&d, &c)| (d, c))
                .collect(),
        }
    }
}

impl AbsDiffEq for Polynomial {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        ZERO_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.degrees_union(other).into_iter().all(|degree| {
            self.coefficient(degree)
                .abs_diff_eq(&other.coefficient(degree), epsilon)
        })
    }
}

impl RelativeEq for Polynomial {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.degrees_union(other).into_iter().all(|degree| {
            self.coefficient(degree)
                .relative_eq(&other.coefficient(degree), epsilon, max_relative)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_from_terms_accumulates_same_degree() {
        let p = Polynomial::from_terms(vec![(1, 1.0), (1, 2.0), (0, 5.0)]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.coefficient(1), 3.0);
        assert_eq!(p.coefficient(0), 5.0);
    }

    #[test]
    fn test_absent_degree_is_zero() {
        let p = Polynomial::constant(2.0);
        assert_eq!(p.coefficient(3), 0.0);
        assert_eq!(Polynomial::new().coefficient(0), 0.0);
    }

    #[test]
    fn test_add_term_returns_new_value() {
        let p = Polynomial::constant(1.0);
        let q = p.clone().add_term(2, 4.0);
        assert_eq!(p.len(), 1);
        assert_eq!(q.len(), 2);
        assert_eq!(q.coefficient(2), 4.0);
    }

    #[test]
    fn test_degree_skips_negligible_entries() {
        let p = Polynomial::from_terms(vec![(3, 1e-12), (1, 2.0)]);
        assert_eq!(p.degree(), Some(1));
        assert_eq!(Polynomial::new().degree(), None);
        assert_eq!(Polynomial::constant(1e-11).degree(), None);
    }

    #[test]
    fn test_zero_detection() {
        assert!(Polynomial::new().is_zero());
        assert!(Polynomial::from_terms(vec![(2, 1e-11), (0, -1e-13)]).is_zero());
        assert!(!Polynomial::constant(1e-9).is_zero());
    }

    #[test]
    fn test_pruned_drops_negligible_entries() {
        let p = Polynomial::from_terms(vec![(2, 0.0), (1, 1e-11), (0, 3.0)]);
        let pruned = p.pruned();
        assert_eq!(pruned.len(), 1);
        assert_eq!(pruned.coefficient(0), 3.0);
    }

    #[test]
    fn test_degrees_union() {
        let p = Polynomial::from_terms(vec![(0, 1.0), (3, 1.0)]);
        let q = Polynomial::from_terms(vec![(1, 1.0), (3, 2.0)]);
        assert_eq!(p.degrees_union(&q), vec![0, 1, 3]);
    }

    #[test]
    fn test_approx_comparison_treats_missing_as_zero() {
        let p = Polynomial::from_terms(vec![(2, 0.0), (1, 1.0)]);
        let q = Polynomial::from_terms(vec![(1, 1.0 + 1e-12)]);
        assert_abs_diff_eq!(p, q);
        assert_relative_eq!(p, q);
        let r = Polynomial::from_terms(vec![(1, 1.0), (0, 0.5)]);
        assert!(!p.abs_diff_eq(&r, ZERO_TOLERANCE));
    }
}
