// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory component tree built by the parser.
//!
//! A [`Component`] owns its properties and children; the whole tree is
//! released by dropping the root. Read-only consumers such as the formatter
//! work through the [`ComponentView`] trait, so borrowing views over a tree
//! (filtered or combined calendars) can be written without copying it.

/// A property parameter, e.g. `CN="John Smith"` or `MEMBER=A,B`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name, upper-cased
    pub name: String,
    /// Values in source order; quoted values keep their quotes and case
    pub values: Vec<String>,
}

impl Parameter {
    /// Whether a stored parameter value was quoted in the source
    #[must_use]
    pub fn is_quoted(value: &str) -> bool {
        value.starts_with('"')
    }
}

/// A content line inside a component, `NAME[;PARAM...]:VALUE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name, upper-cased
    pub name: String,
    /// Parameters in source order
    pub parameters: Vec<Parameter>,
    /// Raw value, case preserved
    pub value: String,
}

impl Property {
    /// Create a property without parameters
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            value: value.into(),
        }
    }

    /// The first parameter with the given (upper-case) name
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// A `BEGIN:<NAME>` ... `END:<NAME>` block.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Component {
    /// Component name, upper-cased
    pub name: String,
    /// Properties in source order
    pub properties: Vec<Property>,
    /// Nested components in source order
    pub children: Vec<Component>,
}

impl Component {
    /// Create an empty component
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Whether the component has neither properties nor children
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.children.is_empty()
    }

    /// Number of properties in this component and all its descendants
    #[must_use]
    pub fn total_properties(&self) -> usize {
        self.properties.len()
            + self
                .children
                .iter()
                .map(Component::total_properties)
                .sum::<usize>()
    }

    /// Depth of the subtree rooted here, counting this component as 1
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Component::depth).max().unwrap_or(0)
    }
}

/// Read-only access to a component-shaped structure.
///
/// Implemented by the owning [`Component`] and by views that borrow from
/// one or more trees.
pub trait ComponentView {
    /// Component name
    fn name(&self) -> &str;

    /// Properties in output order
    fn properties(&self) -> impl Iterator<Item = &Property>;

    /// Child components in output order
    fn children(&self) -> impl Iterator<Item = &Component>;

    /// All properties with the given (upper-case) name
    fn properties_named<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s Property> {
        self.properties().filter(move |p| p.name == name)
    }

    /// The first property with the given (upper-case) name
    fn property(&self, name: &str) -> Option<&Property> {
        self.properties().find(|p| p.name == name)
    }
}

impl ComponentView for Component {
    fn name(&self) -> &str {
        &self.name
    }

    fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    fn children(&self) -> impl Iterator<Item = &Component> {
        self.children.iter()
    }
}
