// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Read, validate, query and write iCalendar documents.
//!
//! Documents are parsed into a generic [`Component`] tree: names, parameters
//! and values are kept as text, so unknown components and properties survive
//! a round trip. Queries ([`CalendarInfo`], [`extract_events`],
//! [`FilteredCalendar`], [`CombinedCalendar`]) work on that tree without
//! modifying it.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else)]

pub mod component;
pub mod error;
pub mod formatter;
pub mod keyword;
mod parser;
pub mod query;
pub mod syntax;

pub use crate::component::{Component, ComponentView, Parameter, Property};
pub use crate::error::{CalError, ErrorKind, LineSpan};
pub use crate::formatter::{
    FoldingStyle, FormatOptions, Formatter, format_calendar, write_calendar,
};
pub use crate::parser::{Calendar, parse_calendar, read_calendar};
pub use crate::query::{
    CalendarInfo, CombinedCalendar, ComponentSummary, ContentKind, DateRange, EventEntry,
    ExtractKind, ExtractOptions, FilteredCalendar, combine_calendars, component_summaries,
    extract_events, extract_x_properties, filter_calendar, write_extract, write_info,
};
