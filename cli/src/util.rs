// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, BufWriter};

use caltool_ical::{CalError, Calendar, DateRange, read_calendar};
use jiff::Zoned;
use jiff::civil::Date;

use crate::arg::Input;

const TODAY: &str = "today";

/// Parse a date argument: `today` or `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<Date, String> {
    if s.eq_ignore_ascii_case(TODAY) {
        Ok(Zoned::now().date())
    } else {
        s.parse::<Date>()
            .map_err(|e| format!("Invalid date `{s}`, expected `today` or YYYY-MM-DD: {e}"))
    }
}

/// The range from the start of `from` to the end of `to`.
pub fn date_range(from: Option<Date>, to: Option<Date>) -> Result<DateRange, Box<dyn Error>> {
    let from = from.map(|d| d.at(0, 0, 0, 0));
    let to = to.map(|d| d.at(23, 59, 59, 0));
    if let (Some(from), Some(to)) = (from, to)
        && from >= to
    {
        return Err("filter start date is not before end date".into());
    }
    Ok(DateRange::new(from, to))
}

/// Read and validate a calendar, describing failures with their source.
#[tracing::instrument(skip_all, fields(%input))]
pub fn read_input(input: &Input) -> Result<Calendar, Box<dyn Error>> {
    let reader = input
        .open()
        .map_err(|e| format!("Failed to open {input}: {e}"))?;
    read_calendar(reader).map_err(|e| read_error(input, &e).into())
}

fn read_error(input: &Input, err: &CalError) -> String {
    let span = err.span();
    format!(
        "{} reported while reading {input}, lines {}-{}: {err}",
        err.kind(),
        span.from,
        span.to
    )
}

/// Buffered standard output.
pub fn stdout() -> BufWriter<io::StdoutLock<'static>> {
    BufWriter::new(io::stdout().lock())
}

/// Check the outcome of writing to stdout; a closed pipe is not a failure.
pub fn written(result: Result<usize, CalError>) -> Result<(), Box<dyn Error>> {
    match result {
        Ok(lines) => {
            tracing::debug!(lines, "output written");
            Ok(())
        }
        Err(CalError::Io { source, .. }) if source.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("output closed early");
            Ok(())
        }
        Err(e) => Err(format!("{} reported while writing output: {e}", e.kind()).into()),
    }
}
