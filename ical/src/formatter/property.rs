// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property formatting, `NAME[;PARAM=V1,V2...]*:VALUE`.

use std::io::{self, Write};

use crate::component::{Parameter, Property};
use crate::formatter::Formatter;

/// Format a single property as one content line.
pub fn write_property<W: Write>(f: &mut Formatter<W>, property: &Property) -> io::Result<()> {
    write!(f, "{}", property.name)?;
    for param in &property.parameters {
        write_parameter(f, param)?;
    }
    write!(f, ":{}", property.value)?;
    f.writeln()
}

/// Format a single parameter (with semicolon prefix).
fn write_parameter<W: Write>(f: &mut Formatter<W>, param: &Parameter) -> io::Result<()> {
    write!(f, ";{}=", param.name)?;
    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}
