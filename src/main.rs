#![allow(non_snake_case)]
use RustedPolyArea::Utils::export::save_samples_to_csv;
use RustedPolyArea::Utils::logger::{LogLevel, init_logger};
use RustedPolyArea::Utils::plots::{CURVE_SAMPLES, plot_area_between};
use RustedPolyArea::Utils::task_config::CalcTask;
use RustedPolyArea::numerical::area_comparison::AreaReport;
use RustedPolyArea::numerical::riemann::{Interval, check_subdivisions};
use RustedPolyArea::symbolic::polynomial::Polynomial;
use log::info;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

const DEFAULT_PLOT: &str = "area_between.png";

#[derive(Tabled)]
struct ReportRow {
    method: String,
    area: String,
}

fn prompt<R: BufRead>(reader: &mut R, message: &str) -> Result<String, String> {
    print!("{}", message);
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("unexpected end of input".to_string());
    }
    Ok(line.trim().to_string())
}

/// asks for f1, f2, a, b and n, in this order
fn read_task<R: BufRead>(reader: &mut R) -> Result<CalcTask, String> {
    println!("Enter a polynomial in x like '2x^2 + 3x + 4':");
    let f1 = prompt(reader, "f1(x) = ")?;
    println!("Enter a polynomial in x like '2x^2 + 3x + 4':");
    let f2 = prompt(reader, "f2(x) = ")?;
    let a = prompt(reader, "a = ")?;
    let a: f64 = a.parse().map_err(|_| format!("'{}' is not a number", a))?;
    let b = prompt(reader, "b = ")?;
    let b: f64 = b.parse().map_err(|_| format!("'{}' is not a number", b))?;
    let n = prompt(reader, "number of rectangles for the Riemann sum: ")?;
    let n: i64 = n.parse().map_err(|_| format!("'{}' is not an integer", n))?;
    Ok(CalcTask {
        f1,
        f2,
        a,
        b,
        n,
        loglevel: LogLevel::default(),
        log_file: false,
        plot: Some(PathBuf::from(DEFAULT_PLOT)),
        csv: None,
    })
}

fn report_table(report: &AreaReport) -> Table {
    let rows = vec![
        ReportRow {
            method: "Definite integral".to_string(),
            area: report.analytic.to_string(),
        },
        ReportRow {
            method: format!("Left Riemann sum, n = {}", report.subdivisions),
            area: report.riemann.to_string(),
        },
        ReportRow {
            method: "Absolute error".to_string(),
            area: format!("{:.6}", report.abs_error),
        },
    ];
    let mut table = Table::new(&rows);
    table.with(Style::modern_rounded());
    table
}

fn run(task: &CalcTask) -> Result<AreaReport, Box<dyn Error>> {
    let n = check_subdivisions(task.n)?;
    let interval = Interval::new(task.a, task.b)?;
    let f1 = Polynomial::parse(&task.f1)?;
    let f2 = Polynomial::parse(&task.f2)?;

    println!("\nParsed polynomials:");
    println!("f1(x) = {}", f1);
    println!("f2(x) = {}", f2);

    let report = AreaReport::compute(&f1, &f2, &interval, n)?;
    println!("\nArea between f1(x) and f2(x) on [{}, {}]", interval.a(), interval.b());
    println!("{}", report_table(&report));

    if let Some(path) = &task.csv {
        save_samples_to_csv(path, &f1, &f2, &interval, CURVE_SAMPLES)?;
        info!("samples saved to {}", path.display());
    }
    if let Some(path) = &task.plot {
        plot_area_between(path, &f1, &f2, &interval, Some(n))?;
        println!("plot saved to {}", path.display());
    }
    Ok(report)
}

fn main() {
    let task = match std::env::args().nth(1) {
        Some(path) => CalcTask::from_file(&path),
        None => read_task(&mut io::stdin().lock()),
    };
    let result = task.map_err(|e| Box::<dyn Error>::from(e)).and_then(|task| {
        init_logger(task.loglevel, task.log_file);
        run(&task)
    });
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    fn task(f1: &str, f2: &str, a: f64, b: f64, n: i64) -> CalcTask {
        CalcTask {
            f1: f1.to_string(),
            f2: f2.to_string(),
            a,
            b,
            n,
            loglevel: LogLevel::Off,
            log_file: false,
            plot: None,
            csv: None,
        }
    }

    #[test]
    fn test_read_task_from_prompts() {
        let mut input = Cursor::new("2x^2 + 3x + 4\nx\n0\n1.5\n100\n");
        let task = read_task(&mut input).unwrap();
        assert_eq!(task.f1, "2x^2 + 3x + 4");
        assert_eq!(task.f2, "x");
        assert_eq!(task.a, 0.0);
        assert_eq!(task.b, 1.5);
        assert_eq!(task.n, 100);
        assert_eq!(task.plot, Some(PathBuf::from(DEFAULT_PLOT)));
    }

    #[test]
    fn test_read_task_rejects_bad_numbers() {
        let mut input = Cursor::new("x\n0\nzero\n1\n10\n");
        assert!(read_task(&mut input).unwrap_err().contains("zero"));
        let mut input = Cursor::new("x\n0\n0\n1\nten\n");
        assert!(read_task(&mut input).unwrap_err().contains("ten"));
        let mut input = Cursor::new("x\n");
        assert!(read_task(&mut input).is_err());
    }

    #[test]
    fn test_run_reports_both_areas() {
        let report = run(&task("x^2", "0", 0.0, 1.0, 1000)).unwrap();
        assert_relative_eq!(report.analytic, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(report.riemann, 1.0 / 3.0, epsilon = 1e-3);
    }

    #[test]
    fn test_run_surfaces_errors() {
        let err = run(&task("x", "0", 0.0, 1.0, 0)).unwrap_err();
        assert!(err.to_string().contains("rectangles"));
        let err = run(&task("x", "0", 1.0, 0.0, 10)).unwrap_err();
        assert!(err.to_string().contains("interval"));
        let err = run(&task("x + y", "0", 0.0, 1.0, 10)).unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_run_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut t = task("x", "1", 0.0, 1.0, 10);
        t.csv = Some(dir.path().join("samples.csv"));
        run(&t).unwrap();
        let content = std::fs::read_to_string(dir.path().join("samples.csv")).unwrap();
        assert_eq!(content.lines().count(), CURVE_SAMPLES + 1);
    }

    #[test]
    fn test_report_table_rows() {
        let report = AreaReport {
            analytic: 0.5,
            riemann: 0.25,
            abs_error: 0.25,
            subdivisions: 4,
        };
        let rendered = report_table(&report).to_string();
        assert!(rendered.contains("Definite integral"));
        assert!(rendered.contains("Left Riemann sum, n = 4"));
        assert!(rendered.contains("0.250000"));
    }
}
