// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! One-line descriptions of top-level components, for list displays.

use std::fmt::{self, Display};

use crate::component::{Component, ComponentView};
use crate::keyword::KW_SUMMARY;

/// Shape of a top-level component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSummary<'a> {
    /// Component name
    pub name: &'a str,
    /// Number of own properties
    pub properties: usize,
    /// Number of direct children
    pub components: usize,
    /// Value of the first `SUMMARY`, if any
    pub summary: Option<&'a str>,
}

impl<'a> ComponentSummary<'a> {
    /// Describe `component`
    #[must_use]
    pub fn of(component: &'a Component) -> Self {
        Self {
            name: &component.name,
            properties: component.properties.len(),
            components: component.children.len(),
            summary: component.property(KW_SUMMARY).map(|p| p.value.as_str()),
        }
    }
}

/// Renders as `NAME,<properties>,<components>[,<summary>]`
impl Display for ComponentSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.name, self.properties, self.components)?;
        if let Some(summary) = self.summary {
            write!(f, ",{summary}")?;
        }
        Ok(())
    }
}

/// Display strings of every top-level component, in document order.
#[must_use]
pub fn component_summaries(root: &Component) -> Vec<String> {
    root.children
        .iter()
        .map(|c| ComponentSummary::of(c).to_string())
        .collect()
}
