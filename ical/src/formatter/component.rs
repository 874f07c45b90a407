// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component formatting for iCalendar components.

use std::io::{self, Write};

use crate::component::ComponentView;
use crate::formatter::Formatter;
use crate::formatter::property::write_property;
use crate::keyword::{KW_BEGIN, KW_END};

/// Format a component with its properties and all nested children.
pub fn write_component<W: Write>(
    f: &mut Formatter<W>,
    component: &impl ComponentView,
) -> io::Result<()> {
    with_block(f, component.name(), |f| {
        for prop in component.properties() {
            write_property(f, prop)?;
        }

        for child in component.children() {
            write_component(f, child)?;
        }

        Ok(())
    })
}

fn with_block<W: Write, F: FnOnce(&mut Formatter<W>) -> io::Result<()>>(
    f: &mut Formatter<W>,
    name: &str,
    write_content: F,
) -> io::Result<()> {
    write!(f, "{KW_BEGIN}:{name}")?;
    f.writeln()?;

    write_content(f)?;

    write!(f, "{KW_END}:{name}")?;
    f.writeln()
}
