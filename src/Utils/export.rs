use crate::numerical::riemann::{Interval, linspace};
use crate::symbolic::polynomial::Polynomial;
use csv::Writer;
use std::fs::File;
use std::io;
use std::path::Path;

/// Writes x, f1(x), f2(x) on a uniform grid of `samples` points into a CSV file
/// with a header row.
pub fn save_samples_to_csv<P: AsRef<Path>>(
    filename: P,
    first: &Polynomial,
    second: &Polynomial,
    interval: &Interval,
    samples: usize,
) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(["x", "f1(x)", "f2(x)"])?;
    for x in linspace(interval, samples) {
        writer.write_record(&[
            x.to_string(),
            first.evaluate(x).to_string(),
            second.evaluate(x).to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
