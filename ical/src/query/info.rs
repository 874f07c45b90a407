// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Summary statistics of a calendar.

use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::io::Write;

use jiff::civil::DateTime;

use crate::component::Component;
use crate::error::CalError;
use crate::keyword::{KW_CN, KW_ORGANIZER, KW_VEVENT, KW_VTODO};
use crate::query::datetime::{INFO_DATE_PROPERTIES, dates_of};
use crate::query::write_report;

const FORMAT_DAY: &str = "%Y-%b-%d";

/// Counts, date range and organizers of a calendar.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CalendarInfo {
    /// Physical lines in the source
    pub lines: usize,
    /// Top-level components
    pub components: usize,
    /// Top-level `VEVENT`s
    pub events: usize,
    /// Top-level `VTODO`s
    pub todos: usize,
    /// Top-level components that are neither events nor to-dos
    pub others: usize,
    /// Components nested inside top-level components
    pub subcomponents: usize,
    /// Properties anywhere in the tree, the root's included
    pub properties: usize,
    /// Earliest and latest date below the root
    pub dates: Option<(DateTime, DateTime)>,
    /// Distinct organizer common names as stored, quotes included, sorted
    pub organizers: Vec<String>,
}

impl CalendarInfo {
    /// Collect statistics of the calendar rooted at `root`, read from `lines` physical lines.
    #[must_use]
    pub fn collect(root: &Component, lines: usize) -> Self {
        let mut info = Self {
            lines,
            components: root.children.len(),
            properties: root.total_properties(),
            ..Self::default()
        };

        let mut organizers = BTreeSet::new();
        for child in &root.children {
            match child.name.as_str() {
                KW_VEVENT => info.events += 1,
                KW_VTODO => info.todos += 1,
                _ => info.others += 1,
            }
            info.subcomponents += child.children.len();
            info.visit(child, &mut organizers);
        }
        info.organizers = organizers.into_iter().collect();
        info
    }

    fn visit(&mut self, component: &Component, organizers: &mut BTreeSet<String>) {
        for date in dates_of(component.properties.iter(), &INFO_DATE_PROPERTIES) {
            self.dates = Some(match self.dates {
                Some((first, last)) => (first.min(date), last.max(date)),
                None => (date, date),
            });
        }

        let names = component
            .properties
            .iter()
            .filter(|p| p.name == KW_ORGANIZER)
            .flat_map(|p| &p.parameters)
            .filter(|param| param.name == KW_CN)
            .flat_map(|param| param.values.iter().cloned());
        organizers.extend(names);

        for child in &component.children {
            self.visit(child, organizers);
        }
    }

    /// Report lines, without terminators.
    #[must_use]
    pub fn report(&self) -> Vec<String> {
        let mut lines = vec![
            counted(self.lines, "line", "lines"),
            format!(
                "{}: {}, {}, {}",
                counted(self.components, "component", "components"),
                counted(self.events, "event", "events"),
                counted(self.todos, "todo", "todos"),
                counted(self.others, "other", "others"),
            ),
            counted(self.subcomponents, "subcomponent", "subcomponents"),
            counted(self.properties, "property", "properties"),
        ];

        lines.push(match self.dates {
            Some((first, last)) => format!(
                "From {} to {}",
                first.strftime(FORMAT_DAY),
                last.strftime(FORMAT_DAY)
            ),
            None => "No dates".to_string(),
        });

        if self.organizers.is_empty() {
            lines.push("No organizers".to_string());
        } else {
            lines.push("Organizers:".to_string());
            lines.extend(self.organizers.iter().cloned());
        }
        lines
    }
}

impl Display for CalendarInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.report() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn counted(n: usize, singular: &str, plural: &str) -> String {
    format!("{n} {}", if n == 1 { singular } else { plural })
}

/// Write the statistics report, returning the number of lines written.
///
/// # Errors
///
/// Returns [`CalError::Io`] with the report line being written if the writer fails.
#[tracing::instrument(skip_all)]
pub fn write_info(info: &CalendarInfo, writer: impl Write) -> Result<usize, CalError> {
    write_report(writer, info.report())
}
