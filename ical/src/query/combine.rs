// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Merging two calendars without touching either of them.

use std::io::Write;

use crate::component::{Component, ComponentView, Property};
use crate::error::CalError;
use crate::formatter::{FormatOptions, write_calendar};
use crate::keyword::{KW_PRODID, KW_VERSION};

/// Two calendars seen as one.
///
/// Properties are the first calendar's followed by the second's without its
/// `VERSION` and `PRODID`; children are the first calendar's followed by the
/// second's. Both trees are only borrowed.
#[derive(Debug, Clone, Copy)]
pub struct CombinedCalendar<'a> {
    first: &'a Component,
    second: &'a Component,
}

impl<'a> CombinedCalendar<'a> {
    /// Combine `second` into `first`; the result is named after `first`
    #[must_use]
    pub const fn new(first: &'a Component, second: &'a Component) -> Self {
        Self { first, second }
    }
}

fn is_calendar_identity(property: &Property) -> bool {
    property.name == KW_VERSION || property.name == KW_PRODID
}

impl ComponentView for CombinedCalendar<'_> {
    fn name(&self) -> &str {
        &self.first.name
    }

    fn properties(&self) -> impl Iterator<Item = &Property> {
        let (first, second): (&Component, &Component) = (self.first, self.second);
        first.properties.iter().chain(
            second
                .properties
                .iter()
                .filter(|p| !is_calendar_identity(p)),
        )
    }

    fn children(&self) -> impl Iterator<Item = &Component> {
        let (first, second): (&Component, &Component) = (self.first, self.second);
        first.children.iter().chain(&second.children)
    }
}

/// Write `first` and `second` merged into one calendar.
///
/// Returns the number of physical lines written.
///
/// # Errors
///
/// Returns [`CalError::Io`] if the writer fails.
#[tracing::instrument(skip_all)]
pub fn combine_calendars(
    first: &Component,
    second: &Component,
    writer: impl Write,
    options: FormatOptions,
) -> Result<usize, CalError> {
    let combined = CombinedCalendar::new(first, second);
    tracing::debug!(
        properties = combined.properties().count(),
        components = combined.children().count(),
        "combined calendar"
    );
    write_calendar(&combined, writer, options)
}
