use std::fmt;

/// Error types for polynomial parsing and area computations
#[derive(Debug, Clone, PartialEq)]
pub enum PolyError {
    /// text at `position` (offset in the whitespace-free input) is neither a variable term nor a constant
    MalformedTerm {
        fragment: String,
        position: usize,
        reason: String,
    },
    /// interval with b <= a or a non-finite bound
    InvalidInterval { a: f64, b: f64 },
    /// non-positive number of Riemann sub-intervals
    InvalidSubdivision { requested: i64 },
    /// integrating a term of degree u32::MAX would need degree u32::MAX + 1
    DegreeOverflow { degree: u32 },
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PolyError::MalformedTerm {
                fragment,
                position,
                reason,
            } => write!(
                f,
                "malformed term '{}' at position {}: {}",
                fragment, position, reason
            ),
            PolyError::InvalidInterval { a, b } => write!(
                f,
                "invalid interval [{}, {}]: b must be finite and greater than a",
                a, b
            ),
            PolyError::InvalidSubdivision { requested } => write!(
                f,
                "invalid number of rectangles {}: must be positive",
                requested
            ),
            PolyError::DegreeOverflow { degree } => {
                write!(f, "cannot integrate term of degree {}: degree overflow", degree)
            }
        }
    }
}

impl std::error::Error for PolyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PolyError::MalformedTerm {
            fragment: "y".to_string(),
            position: 2,
            reason: "unexpected character".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed term 'y' at position 2: unexpected character"
        );
        let err = PolyError::InvalidSubdivision { requested: -3 };
        assert!(err.to_string().contains("-3"));
        let err = PolyError::InvalidInterval { a: 2.0, b: 1.0 };
        assert!(err.to_string().contains("[2, 1]"));
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PolyError::DegreeOverflow { degree: 7 });
        assert!(err.to_string().contains("degree 7"));
    }
}
