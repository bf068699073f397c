use std::io::Write;

use super::telemetry::{Reporter, StateRecord};
use crate::errors::SimulationResult;

pub const CSV_HEADER: &str =
    "t (s),h (m),P (Pa),Isp (sec),Σf (N),m (kg),a (m/s^2),Δh (m),Vf (m/s)";

/// Writes the record stream as comma-separated rows, one per step.
pub struct CsvReporter<W: Write> {
    writer: W,
}

impl<W: Write> CsvReporter<W> {
    /// Creates the reporter and writes the header line.
    pub fn new(mut writer: W) -> SimulationResult<Self> {
        writeln!(writer, "{}", CSV_HEADER)?;
        Ok(CsvReporter { writer })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn format_row(record: &StateRecord) -> String {
        format!(
            "{:.4},{:.1},{:.0},{:.2},{:.0},{:.0},{:.4},{:.2},{}",
            record.time,
            record.altitude,
            record.pressure,
            record.specific_impulse,
            record.net_force,
            record.mass,
            record.acceleration,
            record.altitude_increment,
            format_general(record.velocity),
        )
    }
}

impl<W: Write> Reporter for CsvReporter<W> {
    fn record(&mut self, record: &StateRecord) -> SimulationResult<()> {
        writeln!(self.writer, "{}", Self::format_row(record))?;
        Ok(())
    }

    fn finish(&mut self) -> SimulationResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

const GENERAL_PRECISION: i32 = 6;

/// Shortest of fixed or scientific notation with six significant digits,
/// trailing zeros removed. Matches the `%g` conversion of C's printf.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exponent after rounding to the requested number of significant digits.
    let scientific = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => (scientific.clone(), 0),
    };

    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(&mantissa), sign, exponent.abs())
    } else {
        let decimals = (GENERAL_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    }
}

fn trim_fraction(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}
