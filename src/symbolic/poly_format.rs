//! turns a `Polynomial` back into a canonical human-readable string
//!
//! Terms go from the highest degree down, negligible coefficients are skipped and the zero
//! polynomial prints as "0". The output is valid input for `Polynomial::parse`.
//!
//! Only the leading term keeps its sign glued to the coefficient ("-x^2"); later terms are
//! joined with a spaced operator and their magnitude, so -x after x^2 prints as "x^2 - x".
use crate::symbolic::parse_poly::VARIABLE;
use crate::symbolic::polynomial::{Polynomial, is_negligible};
use itertools::Itertools;
use std::fmt;

// coefficient * x^degree with the sign kept on the coefficient
fn render_term(degree: u32, coefficient: f64) -> String {
    let variable_part = match degree {
        0 => return format!("{}", coefficient),
        1 => VARIABLE.to_string(),
        _ => format!("{}^{}", VARIABLE, degree),
    };
    if coefficient == 1.0 {
        variable_part
    } else if coefficient == -1.0 {
        format!("-{}", variable_part)
    } else {
        format!("{}{}", coefficient, variable_part)
    }
}

/// canonical string of a polynomial, e.g. "2x^2 + 3x - 4"
pub fn format_polynomial(polynomial: &Polynomial) -> String {
    let rendered = polynomial
        .terms()
        .rev()
        .filter(|(_, coefficient)| !is_negligible(*coefficient))
        .enumerate()
        .map(|(i, (degree, coefficient))| match (i, coefficient < 0.0) {
            (0, _) => render_term(degree, coefficient),
            (_, true) => format!("- {}", render_term(degree, -coefficient)),
            (_, false) => format!("+ {}", render_term(degree, coefficient)),
        })
        .join(" ");
    if rendered.is_empty() {
        "0".to_string()
    } else {
        rendered
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_polynomial(self))
    }
}
