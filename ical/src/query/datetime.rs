// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date values of date-valued properties.
//!
//! Values are read as civil (floating) date-times; a trailing `Z` is
//! accepted and ignored, and a bare date means midnight. Time zones are not
//! resolved.

use jiff::civil::{Date, DateTime, Time};

use crate::component::Property;
use crate::keyword::{
    KW_COMPLETED, KW_CREATED, KW_DTEND, KW_DTSTAMP, KW_DTSTART, KW_DUE, KW_LAST_MODIFIED,
};

/// Date properties considered when summarizing a calendar.
pub const INFO_DATE_PROPERTIES: [&str; 7] = [
    KW_COMPLETED,
    KW_DTSTART,
    KW_DTEND,
    KW_DUE,
    KW_CREATED,
    KW_DTSTAMP,
    KW_LAST_MODIFIED,
];

/// Date properties considered when filtering by a date range.
pub const FILTER_DATE_PROPERTIES: [&str; 4] = [KW_COMPLETED, KW_DTEND, KW_DUE, KW_DTSTART];

const FORMAT_DATE_TIME: &str = "%Y%m%dT%H%M%S";
const FORMAT_DATE: &str = "%Y%m%d";

/// Parse a `DATE-TIME` (`20240101T120000`, optionally `Z`-suffixed) or
/// `DATE` (`20240101`) value.
#[must_use]
pub fn parse_date_value(value: &str) -> Option<DateTime> {
    let value = value.trim();
    let value = value
        .strip_suffix('Z')
        .or_else(|| value.strip_suffix('z'))
        .unwrap_or(value);

    DateTime::strptime(FORMAT_DATE_TIME, value)
        .ok()
        .or_else(|| {
            Date::strptime(FORMAT_DATE, value)
                .ok()
                .map(|date| date.to_datetime(Time::midnight()))
        })
}

/// The date of a date-valued property, logging values that cannot be read.
#[must_use]
pub fn property_date(property: &Property) -> Option<DateTime> {
    let date = parse_date_value(&property.value);
    if date.is_none() {
        tracing::warn!(
            property = %property.name,
            value = %property.value,
            "ignoring unrecognized date value"
        );
    }
    date
}

/// Dates of all properties among `properties` whose name is in `names`.
pub fn dates_of<'a>(
    properties: impl Iterator<Item = &'a Property>,
    names: &[&str],
) -> impl Iterator<Item = DateTime> {
    properties
        .filter(|p| names.contains(&p.name.as_str()))
        .filter_map(property_date)
}

/// An inclusive range of date-times; either bound may be absent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest accepted date-time
    pub from: Option<DateTime>,
    /// Latest accepted date-time
    pub to: Option<DateTime>,
}

impl DateRange {
    /// Create a range from optional bounds
    #[must_use]
    pub const fn new(from: Option<DateTime>, to: Option<DateTime>) -> Self {
        Self { from, to }
    }

    /// Whether neither bound is set
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether `date` lies within the bounds
    #[must_use]
    pub fn contains(&self, date: DateTime) -> bool {
        self.from.is_none_or(|from| from <= date) && self.to.is_none_or(|to| date <= to)
    }
}
