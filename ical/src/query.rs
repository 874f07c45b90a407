// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Queries and transformations over a parsed calendar.
//!
//! Reports (info, extract) are plain text, one item per line. Filter and
//! combine produce borrowing views that are written by the formatter; the
//! input trees are never modified.

pub mod combine;
pub mod datetime;
pub mod extract;
pub mod filter;
pub mod info;
pub mod summary;

use std::fmt::Display;
use std::io::Write;

use crate::error::{CalError, LineSpan};

pub use crate::query::combine::{CombinedCalendar, combine_calendars};
pub use crate::query::datetime::{DateRange, parse_date_value};
pub use crate::query::extract::{
    EventEntry, ExtractKind, ExtractOptions, extract_events, extract_x_properties, write_extract,
};
pub use crate::query::filter::{ContentKind, FilteredCalendar, filter_calendar};
pub use crate::query::info::{CalendarInfo, write_info};
pub use crate::query::summary::{ComponentSummary, component_summaries};

/// Write report lines, each followed by a newline, returning how many were written.
pub(crate) fn write_report<I>(mut writer: impl Write, lines: I) -> Result<usize, CalError>
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut count = 0;
    for line in lines {
        count += 1;
        writeln!(writer, "{line}").map_err(|e| CalError::io(LineSpan::at(count), e))?;
    }
    writer
        .flush()
        .map_err(|e| CalError::io(LineSpan::at(count), e))?;
    Ok(count)
}
