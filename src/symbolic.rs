//! # Polynomials in one variable
//!
//! a module
//! 1) turns a String like "2x^2 + 3x + 4" into a sparse polynomial (degree -> coefficient)
//! 2) turns a polynomial back into a canonical string for printing and control of results
//! 3) evaluates, integrates and subtracts polynomials
//!
//!# Example
//! ```
//! use RustedPolyArea::symbolic::polynomial::Polynomial;
//! let f1 = Polynomial::parse("x^2 + 1").unwrap();
//! let f2 = Polynomial::parse("x").unwrap();
//! println!("f1(x) = {}, f2(x) = {}", f1, f2);
//! assert_eq!(f1.evaluate(2.0), 5.0);
//! // ∫_0^3 x dx = 4.5
//! assert_eq!(f2.definite_integral(0.0, 3.0).unwrap(), 4.5);
//! // |∫_0^1 (x^2 + 1 - x) dx| = 5/6
//! let area = f1.abs_area_between(&f2, 0.0, 1.0).unwrap();
//! assert!((area - 5.0 / 6.0).abs() < 1e-12);
//! ```
/// sparse polynomial type, zero tolerance and approximate comparison
pub mod polynomial;
/// errors of parsing and area computations
pub mod poly_error;
/// tokenizer and parser: String -> Polynomial
pub mod parse_poly;
/// Polynomial -> canonical String
pub mod poly_format;
/// evaluation, antiderivative, definite integral, difference of polynomials
pub mod poly_calculus;
