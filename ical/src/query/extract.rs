// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Sorted extraction of events and non-standard property names.

use std::collections::BTreeSet;
use std::io::Write;

use jiff::civil::DateTime;

use crate::component::{Component, ComponentView};
use crate::error::CalError;
use crate::keyword::{KW_DTSTART, KW_SUMMARY, KW_VEVENT, KW_X_PREFIX};
use crate::query::datetime::property_date;
use crate::query::write_report;

const FORMAT_EVENT_START: &str = "%Y-%b-%d %l:%M %p";

/// What to extract from a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ExtractKind {
    /// Event start times with their summaries
    #[cfg_attr(feature = "clap", clap(name = "event", alias = "e"))]
    #[strum(to_string = "event", serialize = "e")]
    Events,

    /// Names of `X-` properties
    #[cfg_attr(feature = "clap", clap(name = "prop", alias = "x"))]
    #[strum(to_string = "prop", serialize = "x")]
    Properties,
}

/// Options of the extract report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Text shown for events without a summary.
    ///
    /// Default: `(na)`.
    pub placeholder: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            placeholder: "(na)".to_string(),
        }
    }
}

impl ExtractOptions {
    /// Set the placeholder for missing summaries.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// An event start with its summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEntry {
    /// Start of the event
    pub start: DateTime,
    /// First `SUMMARY` of the event, if any
    pub summary: Option<String>,
}

impl EventEntry {
    /// Render as `<date> <time>: <summary>`
    #[must_use]
    pub fn render(&self, options: &ExtractOptions) -> String {
        let summary = match self.summary.as_deref() {
            Some(summary) if !summary.is_empty() => summary,
            _ => options.placeholder.as_str(),
        };
        format!("{}: {summary}", self.start.strftime(FORMAT_EVENT_START))
    }
}

/// Events with an interpretable `DTSTART`, sorted by start.
///
/// Events directly below the root and one level further down are considered;
/// events starting at the same time keep their document order.
#[must_use]
pub fn extract_events(root: &Component) -> Vec<EventEntry> {
    let mut events: Vec<_> = root
        .children
        .iter()
        .flat_map(|child| std::iter::once(child).chain(&child.children))
        .filter(|c| c.name == KW_VEVENT)
        .filter_map(|event| {
            let Some(start) = event.property(KW_DTSTART).and_then(property_date) else {
                tracing::debug!("skipping event without start");
                return None;
            };
            Some(EventEntry {
                start,
                summary: event.property(KW_SUMMARY).map(|p| p.value.clone()),
            })
        })
        .collect();

    events.sort_by_key(|event| event.start);
    events
}

/// Distinct names of `X-` properties anywhere in the tree, sorted.
#[must_use]
pub fn extract_x_properties(root: &Component) -> Vec<String> {
    fn visit<'a>(component: &'a Component, names: &mut BTreeSet<&'a str>) {
        names.extend(
            component
                .properties
                .iter()
                .map(|p| p.name.as_str())
                .filter(|name| name.starts_with(KW_X_PREFIX)),
        );
        for child in &component.children {
            visit(child, names);
        }
    }

    let mut names = BTreeSet::new();
    visit(root, &mut names);
    names.into_iter().map(str::to_string).collect()
}

/// Write the extract report, returning the number of lines written.
///
/// # Errors
///
/// Returns [`CalError::Io`] with the report line being written if the writer fails.
#[tracing::instrument(skip(root, options, writer))]
pub fn write_extract(
    root: &Component,
    kind: ExtractKind,
    options: &ExtractOptions,
    writer: impl Write,
) -> Result<usize, CalError> {
    match kind {
        ExtractKind::Events => write_report(
            writer,
            extract_events(root).iter().map(|event| event.render(options)),
        ),
        ExtractKind::Properties => write_report(writer, extract_x_properties(root)),
    }
}
