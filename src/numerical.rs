//! numerical part: the left Riemann sum of the area between two polynomial curves
//! and its comparison with the analytic area
///  Example
/// ```
/// use RustedPolyArea::symbolic::polynomial::Polynomial;
/// use RustedPolyArea::numerical::riemann::{Interval, left_riemann_area};
/// use RustedPolyArea::numerical::area_comparison::AreaReport;
/// let f1 = Polynomial::parse("x^2").unwrap();
/// let f2 = Polynomial::parse("0").unwrap();
/// let area = left_riemann_area(&f1, &f2, 0.0, 1.0, 1000).unwrap();
/// assert!((area - 1.0 / 3.0).abs() < 1e-3);
/// let interval = Interval::new(0.0, 1.0).unwrap();
/// let report = AreaReport::compute(&f1, &f2, &interval, 1000).unwrap();
/// println!("analytic {}, Riemann {}, error {}", report.analytic, report.riemann, report.abs_error);
/// ```
pub mod riemann;
/// analytic vs numeric area report
pub mod area_comparison;
