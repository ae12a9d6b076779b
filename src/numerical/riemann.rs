//! # Left Riemann sums
//!
//! Numerical approximation of the area between two polynomial curves by rectangles sampled
//! at the left end of every sub-interval:
//!
//!   A ≈ Σ_{i=0}^{n-1} |f1(x_i) - f2(x_i)| dx,   x_i = a + i dx,   dx = (b - a)/n
//!
//! The height is the pointwise absolute difference, so the sum converges to the geometric area
//! between the curves even when they cross, unlike `Polynomial::abs_area_between`.
//! The module also prepares the data a plot needs: the rectangles themselves and evenly
//! spaced samples of a curve.
use crate::symbolic::poly_error::PolyError;
use crate::symbolic::polynomial::Polynomial;
use log::{debug, info};

/// closed interval [a, b] with finite a < b and a finite width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Result<Interval, PolyError> {
        if !a.is_finite() || !b.is_finite() || b <= a || !(b - a).is_finite() {
            return Err(PolyError::InvalidInterval { a, b });
        }
        Ok(Interval { a, b })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn length(&self) -> f64 {
        self.b - self.a
    }

    /// width of each of n equal sub-intervals
    pub fn step(&self, n: usize) -> f64 {
        self.length() / n as f64
    }
}

/// converts a user supplied rectangle count into a usable one, rejecting n <= 0
pub fn check_subdivisions(requested: i64) -> Result<usize, PolyError> {
    match usize::try_from(requested) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(PolyError::InvalidSubdivision { requested }),
    }
}

fn subdivisions(n: usize) -> Result<usize, PolyError> {
    if n == 0 {
        return Err(PolyError::InvalidSubdivision { requested: 0 });
    }
    Ok(n)
}

/// one rectangle of the left Riemann sum between two curves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiemannRectangle {
    /// left edge, where both curves are sampled
    pub x: f64,
    pub width: f64,
    /// |f1(x) - f2(x)|
    pub height: f64,
    /// min(f1(x), f2(x)), the lower edge of the rectangle
    pub base: f64,
}

impl RiemannRectangle {
    pub fn area(&self) -> f64 {
        self.height * self.width
    }
}

/// left Riemann sum of |first - second| over [a, b] with n rectangles
pub fn left_riemann_area(
    first: &Polynomial,
    second: &Polynomial,
    a: f64,
    b: f64,
    n: usize,
) -> Result<f64, PolyError> {
    let interval = Interval::new(a, b)?;
    let n = subdivisions(n)?;
    let dx = interval.step(n);
    let mut sum = 0.0;
    for i in 0..n {
        let x = interval.a() + i as f64 * dx;
        let height = (first.evaluate(x) - second.evaluate(x)).abs();
        sum += height * dx;
    }
    info!("left Riemann sum with {} rectangles on [{}, {}]: {}", n, a, b, sum);
    Ok(sum)
}

/// the rectangles of `left_riemann_area`, left to right
pub fn riemann_rectangles(
    first: &Polynomial,
    second: &Polynomial,
    interval: &Interval,
    n: usize,
) -> Result<Vec<RiemannRectangle>, PolyError> {
    let n = subdivisions(n)?;
    let dx = interval.step(n);
    let rectangles = (0..n)
        .map(|i| {
            let x = interval.a() + i as f64 * dx;
            let y1 = first.evaluate(x);
            let y2 = second.evaluate(x);
            RiemannRectangle {
                x,
                width: dx,
                height: (y1 - y2).abs(),
                base: y1.min(y2),
            }
        })
        .collect();
    Ok(rectangles)
}

/// `samples` evenly spaced x values from a to b inclusive
pub fn linspace(interval: &Interval, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![interval.a()],
        _ => {
            let step = interval.length() / (samples - 1) as f64;
            (0..samples)
                .map(|i| {
                    if i == samples - 1 {
                        interval.b()
                    } else {
                        interval.a() + i as f64 * step
                    }
                })
                .collect()
        }
    }
}

/// (x, p(x)) pairs on a uniform grid over the interval
pub fn sample_curve(polynomial: &Polynomial, interval: &Interval, samples: usize) -> Vec<(f64, f64)> {
    let points: Vec<(f64, f64)> = linspace(interval, samples)
        .into_iter()
        .map(|x| (x, polynomial.evaluate(x)))
        .collect();
    debug!("sampled {} points of {}", points.len(), polynomial);
    points
}
