// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Borrowing views that keep a subset of a calendar's top-level components.

use std::io::Write;

use crate::component::{Component, ComponentView, Property};
use crate::error::{CalError, LineSpan};
use crate::formatter::{FormatOptions, write_calendar};
use crate::keyword::{KW_VEVENT, KW_VTODO};
use crate::query::datetime::{DateRange, FILTER_DATE_PROPERTIES, dates_of};

/// Kind of top-level component to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ContentKind {
    /// `VEVENT` components
    #[cfg_attr(feature = "clap", clap(name = "event", alias = "e"))]
    #[strum(to_string = "event", serialize = "e")]
    Events,

    /// `VTODO` components
    #[cfg_attr(feature = "clap", clap(name = "todo", alias = "t"))]
    #[strum(to_string = "todo", serialize = "t")]
    Todos,
}

impl ContentKind {
    /// Name of the components of this kind
    #[must_use]
    pub const fn component_name(self) -> &'static str {
        match self {
            Self::Events => KW_VEVENT,
            Self::Todos => KW_VTODO,
        }
    }
}

/// A calendar root with a selection of its top-level components.
///
/// The view borrows the original tree; it owns nothing but the list of
/// selected children and cannot outlive the tree it was made from.
#[derive(Debug, Clone)]
pub struct FilteredCalendar<'a> {
    root: &'a Component,
    children: Vec<&'a Component>,
}

impl<'a> FilteredCalendar<'a> {
    /// Keep the top-level components of `kind`.
    ///
    /// When `range` has a bound, only components with a date property
    /// (`COMPLETED`, `DTEND`, `DUE` or `DTSTART`, on the component or one of
    /// its children) inside the range are kept.
    #[must_use]
    pub fn new(root: &'a Component, kind: ContentKind, range: DateRange) -> Self {
        let name = kind.component_name();
        let children = root
            .children
            .iter()
            .filter(|c| c.name == name)
            .filter(|c| range.is_unbounded() || has_date_in(c, range))
            .collect::<Vec<_>>();

        tracing::debug!(
            %kind,
            ?range,
            kept = children.len(),
            total = root.children.len(),
            "filtered calendar"
        );
        Self { root, children }
    }

    /// Keep every top-level component except those at `indices`.
    #[must_use]
    pub fn excluding(root: &'a Component, indices: &[usize]) -> Self {
        let children = root
            .children
            .iter()
            .enumerate()
            .filter(|(i, _)| !indices.contains(i))
            .map(|(_, c)| c)
            .collect();
        Self { root, children }
    }

    /// Number of kept components
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether no component was kept
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

fn has_date_in(component: &Component, range: DateRange) -> bool {
    let properties = component
        .properties
        .iter()
        .chain(component.children.iter().flat_map(|c| &c.properties));
    dates_of(properties, &FILTER_DATE_PROPERTIES).any(|date| range.contains(date))
}

impl ComponentView for FilteredCalendar<'_> {
    fn name(&self) -> &str {
        &self.root.name
    }

    fn properties(&self) -> impl Iterator<Item = &Property> {
        let root: &Component = self.root;
        root.properties.iter()
    }

    fn children(&self) -> impl Iterator<Item = &Component> {
        self.children.iter().map(|child| &**child)
    }
}

/// Write the calendar keeping only top-level components of `kind` within `range`.
///
/// Returns the number of physical lines written.
///
/// # Errors
///
/// - [`CalError::NoCalendar`] with [`LineSpan::NONE`] if no component is
///   left; nothing is written then
/// - [`CalError::Io`] if the writer fails
#[tracing::instrument(skip(root, writer, options))]
pub fn filter_calendar(
    root: &Component,
    kind: ContentKind,
    range: DateRange,
    writer: impl Write,
    options: FormatOptions,
) -> Result<usize, CalError> {
    let view = FilteredCalendar::new(root, kind, range);
    if view.is_empty() {
        return Err(CalError::NoCalendar {
            reason: "no components left after filtering",
            span: LineSpan::NONE,
        });
    }
    write_calendar(&view, writer, options)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::error::ErrorKind;
    use crate::formatter::format_calendar;

    use super::*;

    fn component(name: &str, props: &[(&str, &str)]) -> Component {
        let mut c = Component::new(name);
        c.properties
            .extend(props.iter().map(|(n, v)| Property::new(*n, *v)));
        c
    }

    fn calendar() -> Component {
        let mut root = component("VCALENDAR", &[("VERSION", "2.0"), ("PRODID", "x")]);
        root.children
            .push(component("VEVENT", &[("UID", "e1"), ("DTSTART", "20240105T100000")]));
        root.children
            .push(component("VTODO", &[("UID", "t1"), ("DUE", "20240110T100000")]));
        root.children.push(component("VEVENT", &[("UID", "e2")]));

        let mut alarmed = component("VEVENT", &[("UID", "e3")]);
        alarmed
            .children
            .push(component("VALARM", &[("DTSTART", "20240301T000000")]));
        root.children.push(alarmed);
        root
    }

    fn uids(view: &FilteredCalendar<'_>) -> Vec<String> {
        view.children()
            .filter_map(|c| c.property("UID"))
            .map(|p| p.value.clone())
            .collect()
    }

    #[test]
    fn keeps_kind_without_bounds() {
        let root = calendar();
        let view = FilteredCalendar::new(&root, ContentKind::Events, DateRange::default());
        assert_eq!(uids(&view), ["e1", "e2", "e3"]);
        assert!(view.children().all(|c| c.name == "VEVENT"));

        let view = FilteredCalendar::new(&root, ContentKind::Todos, DateRange::default());
        assert_eq!(uids(&view), ["t1"]);
    }

    #[test]
    fn keeps_components_dated_within_bounds() {
        let root = calendar();
        let day = |m, d| Some(date(2024, m, d).at(0, 0, 0, 0));

        let view = FilteredCalendar::new(
            &root,
            ContentKind::Events,
            DateRange::new(day(1, 1), day(1, 31)),
        );
        assert_eq!(uids(&view), ["e1"]);

        // dates of immediate children count too
        let view = FilteredCalendar::new(&root, ContentKind::Events, DateRange::new(day(2, 1), None));
        assert_eq!(uids(&view), ["e3"]);

        let view = FilteredCalendar::new(&root, ContentKind::Events, DateRange::new(None, day(1, 1)));
        assert!(view.is_empty());
    }

    #[test]
    fn keeps_root_properties() {
        let root = calendar();
        let view = FilteredCalendar::new(&root, ContentKind::Todos, DateRange::default());
        assert_eq!(view.name(), "VCALENDAR");
        assert_eq!(view.properties().count(), 2);
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn excludes_indices() {
        let root = calendar();
        let view = FilteredCalendar::excluding(&root, &[1, 3]);
        assert_eq!(uids(&view), ["e1", "e2"]);

        let text = format_calendar(&view, FormatOptions::default()).unwrap();
        assert!(!text.contains("VTODO"));
        assert_eq!(root.children.len(), 4);
    }

    #[test]
    fn refuses_to_write_empty_result() {
        let root = calendar();
        let mut out = Vec::new();
        let range = DateRange::new(Some(date(2030, 1, 1).at(0, 0, 0, 0)), None);
        let err = filter_calendar(
            &root,
            ContentKind::Todos,
            range,
            &mut out,
            FormatOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoCalendar);
        assert!(err.span().is_none());
        assert_eq!(
            err.to_string(),
            "no components left after filtering (line n/a)"
        );
        assert!(out.is_empty());
    }
}
