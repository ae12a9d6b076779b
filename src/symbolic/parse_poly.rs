//! a module turns a String polynomial like "2x^2 + 3x - 4" into a `Polynomial`
//!
//! Parsing happens in two passes:
//! 1) the whitespace-free text is split by `nom` combinators into a stream of tokens,
//!    each one either a variable term (`-2.5x^3`, `x`, `-x^2`) or a constant term (`4`, `-0.5`)
//! 2) the tokens are reduced into the degree -> coefficient map, summing coefficients of equal degree
//!
//! Any text that is not a term is an error, nothing is skipped silently. Every term after
//! the first must start with its sign, so "x^2.5" or "2x3" are rejected instead of being read
//! as two glued terms.
//!
//!# Example
//! ```
//! use RustedPolyArea::symbolic::polynomial::Polynomial;
//! let p = Polynomial::parse("2x^2 + 3x - x + 4").unwrap();
//! assert_eq!(p.coefficient(2), 2.0);
//! assert_eq!(p.coefficient(1), 2.0);
//! assert_eq!(p.coefficient(0), 4.0);
//! ```
//                  token stream for "-x^3+2.5x-4"
//                |  sign | number | x | ^exp |     token          |
//                |_______|________|___|______|____________________|
//                |   -   |        | x |  3   | Variable(-1, 3)    |
//                |   +   |  2.5   | x |      | Variable(2.5, 1)   |
//                |   -   |  4     |   |      | Constant(-4)       |
use crate::symbolic::poly_error::PolyError;
use crate::symbolic::polynomial::Polynomial;
use log::debug;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1, one_of},
    combinator::{map, opt, verify},
    sequence::preceded,
};
use std::str::FromStr;

/// the only variable symbol the grammar knows
pub const VARIABLE: char = 'x';

/// term recognised by the tokenizer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// coefficient * x^degree
    Variable { coefficient: f64, degree: u32 },
    /// constant term, degree 0
    Constant(f64),
}

impl Token {
    pub fn degree(&self) -> u32 {
        match self {
            Token::Variable { degree, .. } => *degree,
            Token::Constant(_) => 0,
        }
    }

    pub fn coefficient(&self) -> f64 {
        match self {
            Token::Variable { coefficient, .. } => *coefficient,
            Token::Constant(value) => *value,
        }
    }
}

/// token with its offset and text in the whitespace-free input
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub position: usize,
    pub text: String,
}

// pieces of a term as they appear in the text, before numeric conversion
struct RawTerm<'a> {
    sign: Option<char>,
    number: Option<&'a str>,
    exponent: Option<&'a str>,
    has_variable: bool,
}

fn sign(input: &str) -> IResult<&str, Option<char>> {
    opt(one_of("+-")).parse(input)
}

/// "12", "12.", "12.5" or ".5": the whole run of digits and dots, at most one dot
fn number(input: &str) -> IResult<&str, &str> {
    verify(
        take_while1(|c: char| c.is_ascii_digit() || c == '.'),
        |digits: &str| digits != "." && digits.matches('.').count() <= 1,
    )
    .parse(input)
}

fn exponent(input: &str) -> IResult<&str, &str> {
    preceded(char('^'), digit1).parse(input)
}

fn variable_term(input: &str) -> IResult<&str, RawTerm<'_>> {
    map(
        (sign, opt(number), char(VARIABLE), opt(exponent)),
        |(sign, number, _, exponent)| RawTerm {
            sign,
            number,
            exponent,
            has_variable: true,
        },
    )
    .parse(input)
}

fn constant_term(input: &str) -> IResult<&str, RawTerm<'_>> {
    map((sign, number), |(sign, number)| RawTerm {
        sign,
        number: Some(number),
        exponent: None,
        has_variable: false,
    })
    .parse(input)
}

fn raw_term(input: &str) -> IResult<&str, RawTerm<'_>> {
    alt((variable_term, constant_term)).parse(input)
}

fn malformed(fragment: &str, position: usize, reason: &str) -> PolyError {
    PolyError::MalformedTerm {
        fragment: fragment.to_string(),
        position,
        reason: reason.to_string(),
    }
}

// why no term could be read at the start of `rest`
fn unmatched_reason(rest: &str) -> &'static str {
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some('^'), _) => "'^' must follow x and be followed by a non-negative integer exponent",
        (Some('+' | '-'), None) => "sign without a term",
        (Some('+' | '-'), Some('+' | '-')) => "repeated sign",
        _ => "expected a number or 'x'",
    }
}

fn to_token(raw: &RawTerm, text: &str, position: usize) -> Result<Token, PolyError> {
    let negative = raw.sign == Some('-');
    let magnitude = match raw.number {
        Some(digits) => {
            let value = f64::from_str(digits)
                .map_err(|e| malformed(text, position, &format!("bad number: {}", e)))?;
            if !value.is_finite() {
                return Err(malformed(text, position, "coefficient is not finite"));
            }
            value
        }
        // "x", "+x", "-x"
        None => 1.0,
    };
    let coefficient = if negative { -magnitude } else { magnitude };
    if !raw.has_variable {
        return Ok(Token::Constant(coefficient));
    }
    let degree = match raw.exponent {
        Some(digits) => u32::from_str(digits).map_err(|_| {
            malformed(
                text,
                position,
                &format!("exponent does not fit in {} bits", u32::BITS),
            )
        })?,
        None => 1,
    };
    Ok(Token::Variable {
        coefficient,
        degree,
    })
}

/// Splits a polynomial string into terms. Whitespace anywhere in the input is ignored;
/// reported positions refer to the input with whitespace removed.
pub fn tokenize(text: &str) -> Result<Vec<SpannedToken>, PolyError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut tokens = Vec::new();
    let mut rest = compact.as_str();
    while !rest.is_empty() {
        let position = compact.len() - rest.len();
        let (remaining, raw) =
            raw_term(rest).map_err(|_| malformed(rest, position, unmatched_reason(rest)))?;
        let consumed = &rest[..rest.len() - remaining.len()];
        // with an optional sign "x^2.5" would read as x^2 + 0.5
        if !tokens.is_empty() && raw.sign.is_none() {
            return Err(malformed(
                consumed,
                position,
                "missing '+' or '-' between terms",
            ));
        }
        let token = to_token(&raw, consumed, position)?;
        tokens.push(SpannedToken {
            token,
            position,
            text: consumed.to_string(),
        });
        rest = remaining;
    }
    debug!("tokens of '{}': {:?}", compact, tokens);
    Ok(tokens)
}

/// sums the tokens degree-wise into a polynomial
pub fn reduce_tokens(tokens: &[SpannedToken]) -> Polynomial {
    Polynomial::from_terms(
        tokens
            .iter()
            .map(|spanned| (spanned.token.degree(), spanned.token.coefficient())),
    )
}

pub fn parse_polynomial(text: &str) -> Result<Polynomial, PolyError> {
    let tokens = tokenize(text)?;
    let polynomial = reduce_tokens(&tokens);
    debug!("parsed '{}' into {:?}", text, polynomial);
    Ok(polynomial)
}

impl Polynomial {
    /// parse a string like "2x^2 + 3x + 4"; empty input gives the zero polynomial
    pub fn parse(text: &str) -> Result<Polynomial, PolyError> {
        parse_polynomial(text)
    }
}

impl FromStr for Polynomial {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_polynomial(s)
    }
}
