// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tree builder for constructing the component hierarchy from content lines.
//!
//! # Architecture
//!
//! ```text
//! Logical Lines → Scanner → Properties → Tree Builder → Component Tree
//! ```
//!
//! # Algorithm
//!
//! The tree builder uses a stack-based algorithm:
//! 1. On BEGIN:X, push the current component and open X
//! 2. On property, add to the current component
//! 3. On END:X, close the current component and add it to its parent
//!
//! The root must be a VCALENDAR and at most [`MAX_DEPTH`] levels may be
//! open at once.

use std::io::BufRead;
use std::mem;

use crate::component::{Component, Property};
use crate::error::{CalError, LineSpan};
use crate::keyword::{KW_BEGIN, KW_END, KW_VCALENDAR, MAX_DEPTH};
use crate::syntax::scanner::parse_property;
use crate::syntax::unfold::{LineReader, LogicalLine};

/// A closed root component with the span of its END line.
#[derive(Debug, Clone)]
pub struct BuiltTree {
    /// The root VCALENDAR
    pub root: Component,
    /// Span of the `END:VCALENDAR` line
    pub end_span: LineSpan,
}

/// Build a component tree from the logical lines of `reader`.
///
/// Consumes lines up to and including the root's END line, nothing more.
///
/// # Errors
///
/// - [`CalError::NoCalendar`] if the first line is not `BEGIN:VCALENDAR`
/// - [`CalError::SubComponent`] if components are nested too deeply
/// - [`CalError::BeginEnd`] on mismatched END or input ending inside a component
/// - [`CalError::NoData`] if a component is empty
/// - [`CalError::Syntax`] if a line is not a valid content line
/// - any error of the [`LineReader`]
pub fn build_tree<R: BufRead>(reader: &mut LineReader<R>) -> Result<BuiltTree, CalError> {
    let Some(first) = reader.next_line()? else {
        return Err(CalError::NoCalendar {
            reason: "input contains no calendar",
            span: LineSpan::new(1, reader.lines_read().max(1)),
        });
    };

    let first_prop = property(&first)?;
    if first_prop.name != KW_BEGIN || !first_prop.value.eq_ignore_ascii_case(KW_VCALENDAR) {
        return Err(CalError::NoCalendar {
            reason: "input does not start with BEGIN:VCALENDAR",
            span: first.span,
        });
    }

    let mut builder = TreeBuilder::new(KW_VCALENDAR);
    loop {
        let Some(line) = reader.next_line()? else {
            return Err(CalError::BeginEnd {
                expected: builder.current.name.clone(),
                found: "end of input".to_string(),
                span: LineSpan::at(reader.lines_read()),
            });
        };

        let prop = property(&line)?;
        match prop.name.as_str() {
            KW_BEGIN => builder.begin(&prop.value, line.span)?,
            KW_END => {
                if let Some(root) = builder.end(&prop.value, line.span)? {
                    return Ok(BuiltTree {
                        root,
                        end_span: line.span,
                    });
                }
            }
            _ => builder.current.properties.push(prop),
        }
    }
}

fn property(line: &LogicalLine) -> Result<Property, CalError> {
    parse_property(&line.text).map_err(|source| CalError::Syntax {
        span: line.span,
        source,
    })
}

/// The open component and its open ancestors.
#[derive(Debug)]
struct TreeBuilder {
    current: Component,
    parents: Vec<Component>,
}

impl TreeBuilder {
    fn new(root: &str) -> Self {
        tracing::debug!(name = root, depth = 1, "open component");
        Self {
            current: Component::new(root),
            parents: Vec::new(),
        }
    }

    const fn depth(&self) -> usize {
        self.parents.len() + 1
    }

    fn begin(&mut self, name: &str, span: LineSpan) -> Result<(), CalError> {
        let name = name.to_ascii_uppercase();
        let depth = self.depth();
        if depth >= MAX_DEPTH {
            return Err(CalError::SubComponent { name, depth, span });
        }

        tracing::debug!(%name, depth = depth + 1, "open component");
        let parent = mem::replace(&mut self.current, Component::new(name));
        self.parents.push(parent);
        Ok(())
    }

    /// Close the current component, returning the root once it is closed.
    fn end(&mut self, name: &str, span: LineSpan) -> Result<Option<Component>, CalError> {
        let name = name.to_ascii_uppercase();
        if name != self.current.name {
            return Err(CalError::BeginEnd {
                expected: self.current.name.clone(),
                found: format!("{KW_END}:{name}"),
                span,
            });
        } else if self.current.is_empty() {
            return Err(CalError::NoData { name, span });
        }

        tracing::debug!(
            %name,
            properties = self.current.properties.len(),
            children = self.current.children.len(),
            "close component"
        );
        match self.parents.pop() {
            Some(parent) => {
                let child = mem::replace(&mut self.current, parent);
                self.current.children.push(child);
                Ok(None)
            }
            None => Ok(Some(mem::take(&mut self.current))),
        }
    }
}
