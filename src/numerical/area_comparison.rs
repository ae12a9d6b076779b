use crate::numerical::riemann::{Interval, left_riemann_area};
use crate::symbolic::poly_error::PolyError;
use crate::symbolic::polynomial::Polynomial;
use log::{info, warn};

/// relative disagreement above which the two areas are reported as suspicious
pub const CROSSING_WARNING_THRESHOLD: f64 = 0.05;

/// analytic and numeric area between two curves computed over the same interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaReport {
    /// |∫_a^b (f1 - f2) dx|
    pub analytic: f64,
    /// left Riemann sum of |f1 - f2|
    pub riemann: f64,
    /// |analytic - riemann|
    pub abs_error: f64,
    pub subdivisions: usize,
}

impl AreaReport {
    /// Computes both areas independently. The caller gets an error for n = 0 or b <= a
    /// before any arithmetic is done.
    pub fn compute(
        first: &Polynomial,
        second: &Polynomial,
        interval: &Interval,
        n: usize,
    ) -> Result<AreaReport, PolyError> {
        let analytic = first.abs_area_between(second, interval.a(), interval.b())?;
        let riemann = left_riemann_area(first, second, interval.a(), interval.b(), n)?;
        let report = AreaReport {
            analytic,
            riemann,
            abs_error: (analytic - riemann).abs(),
            subdivisions: n,
        };
        info!(
            "area by definite integral: {}, by left Riemann sum: {}, absolute error: {}",
            report.analytic, report.riemann, report.abs_error
        );
        if report.relative_error() > CROSSING_WARNING_THRESHOLD {
            warn!(
                "areas differ by {:.1}%: the curves may cross inside [{}, {}] or n = {} is too small",
                100.0 * report.relative_error(),
                interval.a(),
                interval.b(),
                n
            );
        }
        Ok(report)
    }

    /// abs_error relative to the larger of the two areas, 0 when both are 0
    pub fn relative_error(&self) -> f64 {
        let scale = self.analytic.abs().max(self.riemann.abs());
        if scale == 0.0 {
            0.0
        } else {
            self.abs_error / scale
        }
    }
}
