use crate::numerical::riemann::{Interval, riemann_rectangles, sample_curve};
use crate::symbolic::polynomial::Polynomial;
use plotters::prelude::*;
use std::path::Path;

/// number of points each curve is sampled at
pub const CURVE_SAMPLES: usize = 200;

/// y range covering the points, padded by 10% on both sides
pub fn padded_y_range(points: &[(f64, f64)]) -> (f64, f64) {
    let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    if !y_min.is_finite() || !y_max.is_finite() {
        return (-1.0, 1.0);
    }
    let padding = (y_max - y_min) * 0.1;
    if padding == 0.0 {
        // flat curves: give the chart some height
        (y_min - 1.0, y_max + 1.0)
    } else {
        (y_min - padding, y_max + padding)
    }
}

/// Draws f1 and f2 over the interval into a PNG: both curves, the region between them shaded
/// and, if `n` is given, the n rectangles of the left Riemann sum.
pub fn plot_area_between<P: AsRef<Path>>(
    filename: P,
    first: &Polynomial,
    second: &Polynomial,
    interval: &Interval,
    n: Option<usize>,
) -> Result<(), String> {
    let curve1 = sample_curve(first, interval, CURVE_SAMPLES);
    let curve2 = sample_curve(second, interval, CURVE_SAMPLES);
    let all_points: Vec<(f64, f64)> = curve1.iter().chain(curve2.iter()).copied().collect();
    let (y_min, y_max) = padded_y_range(&all_points);

    let root_area = BitMapBackend::new(filename.as_ref(), (1000, 600)).into_drawing_area();
    root_area.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(
            format!("f1(x) = {},  f2(x) = {}  on [{}, {}]", first, second, interval.a(), interval.b()),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(interval.a()..interval.b(), y_min..y_max)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(|e| e.to_string())?;

    // region between the curves: along f1, back along f2
    let region: Vec<(f64, f64)> = curve1.iter().chain(curve2.iter().rev()).copied().collect();
    chart
        .draw_series(std::iter::once(Polygon::new(region, BLACK.mix(0.15).filled())))
        .map_err(|e| e.to_string())?;

    if let Some(n) = n {
        let rectangles = riemann_rectangles(first, second, interval, n).map_err(|e| e.to_string())?;
        chart
            .draw_series(rectangles.iter().map(|r| {
                Rectangle::new(
                    [(r.x, r.base), (r.x + r.width, r.base + r.height)],
                    CYAN.mix(0.3).filled(),
                )
            }))
            .map_err(|e| e.to_string())?;
        chart
            .draw_series(rectangles.iter().map(|r| {
                Rectangle::new(
                    [(r.x, r.base), (r.x + r.width, r.base + r.height)],
                    BLACK.stroke_width(1),
                )
            }))
            .map_err(|e| e.to_string())?;
    }

    chart
        .draw_series(LineSeries::new(curve1, BLUE.stroke_width(2)))
        .map_err(|e| e.to_string())?
        .label("f1(x)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .draw_series(LineSeries::new(curve2, RED.stroke_width(2)))
        .map_err(|e| e.to_string())?
        .label("f2(x)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| e.to_string())?;

    root_area.present().map_err(|e| e.to_string())?;
    log::info!("plot saved to {}", filename.as_ref().display());
    Ok(())
}
