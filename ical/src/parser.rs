// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::BufRead;
use std::str::FromStr;

use crate::component::{Component, ComponentView};
use crate::error::{CalError, LineSpan};
use crate::keyword::{KW_PRODID, KW_VERSION, KW_VERSION_2_0};
use crate::syntax::{BuiltTree, LineReader, build_tree};

/// A parsed and validated calendar document.
///
/// Owns its component tree; dropping it releases the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    /// The root VCALENDAR component
    pub root: Component,
    /// Number of physical lines read from the source
    pub lines: usize,
}

/// Read a calendar document from a byte stream.
///
/// ## Errors
///
/// Returns the first structural or validation error found, tagged with the
/// physical lines it pertains to. No partial tree is returned.
///
/// ## Examples
///
/// ```
/// # use caltool_ical::read_calendar;
/// let src = "\
/// BEGIN:VCALENDAR\r\n\
/// VERSION:2.0\r\n\
/// PRODID:-//Example//EN\r\n\
/// BEGIN:VEVENT\r\n\
/// SUMMARY:Test Event\r\n\
/// END:VEVENT\r\n\
/// END:VCALENDAR\r\n\
/// ";
/// let calendar = read_calendar(src.as_bytes()).unwrap();
/// assert_eq!(calendar.root.children.len(), 1);
/// assert_eq!(calendar.lines, 7);
/// ```
///
/// Invalid documents report an error kind and line span
///
/// ```
/// # use caltool_ical::{ErrorKind, read_calendar};
/// let src = "\
/// BEGIN:VCALENDAR\r\n\
/// BEGIN:VEVENT\r\n\
/// SUMMARY:Test Event\r\n\
/// END:VCALENDAR\r\n\
/// ";
/// let err = read_calendar(src.as_bytes()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::BeginEnd);
/// assert_eq!(err.span().from, 4);
/// ```
#[tracing::instrument(skip_all)]
pub fn read_calendar<R: BufRead>(reader: R) -> Result<Calendar, CalError> {
    let mut lines = LineReader::new(reader);
    let BuiltTree { root, end_span } = build_tree(&mut lines)?;
    check_document(&root, end_span)?;

    if let Some(extra) = lines.next_line()? {
        return Err(CalError::AfterEnd { span: extra.span });
    }

    let lines = lines.lines_read();
    tracing::debug!(lines, components = root.children.len(), "calendar read");
    Ok(Calendar { root, lines })
}

/// Parse a calendar document held in memory.
///
/// ## Errors
///
/// See [`read_calendar`].
pub fn parse_calendar(src: &str) -> Result<Calendar, CalError> {
    read_calendar(src.as_bytes())
}

impl FromStr for Calendar {
    type Err = CalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_calendar(s)
    }
}

/// Whole-document checks, run in order once the root has been closed.
fn check_document(root: &Component, span: LineSpan) -> Result<(), CalError> {
    let is_calendar_component = |c: &Component| c.name.starts_with('V');
    let has_content = root.children.iter().any(|child| {
        is_calendar_component(child) || child.children.iter().any(is_calendar_component)
    });
    if !has_content {
        return Err(CalError::NoCalendar {
            reason: "calendar contains no V components",
            span,
        });
    }

    let mut versions = root.properties_named(KW_VERSION);
    match (versions.next(), versions.next()) {
        (Some(version), None) if version.value == KW_VERSION_2_0 => {}
        _ => {
            return Err(CalError::BadVersion {
                expected: KW_VERSION_2_0,
                span,
            });
        }
    }

    if root.properties_named(KW_PRODID).count() != 1 {
        return Err(CalError::NoProductId { span });
    }

    tracing::debug!("document checks passed");
    Ok(())
}
