// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scanner for iCalendar content lines.
//!
//! Converts one unfolded logical line into a [`Property`]:
//!
//! ```text
//! contentline = name *(";" param) ":" value
//! param       = param-name "=" param-value *("," param-value)
//! ```
//!
//! A `"` toggles quoting; delimiters inside a quoted segment are plain text.
//! Names and unquoted parameter values are upper-cased, quoted values are
//! kept verbatim including their quotes, the property value is kept as is.

use crate::component::{Parameter, Property};
use crate::syntax::lexer::{Span, SpannedToken, Token, tokenize};

/// Errors that can occur when scanning a content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContentLineError {
    /// Missing colon separator.
    ///
    /// Example: `PROPNAME value` instead of `PROPNAME:value`
    #[error("missing colon in property")]
    MissingColon,

    /// Empty property name.
    ///
    /// Example: `:value`
    #[error("empty property name")]
    EmptyName,

    /// Invalid parameter syntax.
    #[error("{kind} (parameter {index})")]
    InvalidParameter {
        /// Zero-based position of the parameter on the line
        index: usize,
        /// Specific error details
        kind: ParameterErrorKind,
    },
}

/// Specific parameter parsing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParameterErrorKind {
    /// Missing equals sign.
    ///
    /// Example: `TZID America/New_York`
    #[error("missing equals in parameter")]
    MissingEquals,

    /// Empty parameter name.
    ///
    /// Example: `;=value`
    #[error("empty parameter name")]
    EmptyName,

    /// Parameter name containing a space.
    ///
    /// Example: `MY PARAM=value`
    #[error("space in parameter name")]
    NameWithSpace,
}

/// Parse one logical line into a property.
///
/// # Errors
///
/// Returns a [`ContentLineError`] if the line is not a valid content line.
pub fn parse_property(line: &str) -> Result<Property, ContentLineError> {
    let delimiters = unquoted_delimiters(line);

    let name_end = delimiters
        .iter()
        .find(|(tok, _)| matches!(tok, Token::Semicolon | Token::Colon))
        .ok_or(ContentLineError::MissingColon)?;
    let colon = delimiters
        .iter()
        .find(|(tok, _)| *tok == Token::Colon)
        .ok_or(ContentLineError::MissingColon)?;

    let name = slice(line, 0, name_end.1.start);
    if name.is_empty() {
        return Err(ContentLineError::EmptyName);
    }

    let parameters = if name_end.0 == Token::Semicolon {
        let segment: Vec<_> = delimiters
            .iter()
            .filter(|(_, span)| span.start > name_end.1.start && span.start < colon.1.start)
            .copied()
            .collect();
        parse_parameters(line, name_end.1.end, colon.1.start, &segment)?
    } else {
        Vec::new()
    };

    Ok(Property {
        name: name.to_ascii_uppercase(),
        parameters,
        value: slice(line, colon.1.end, line.len()).to_string(),
    })
}

/// Parse the parameter segment `start..end`, given the unquoted delimiters inside it.
fn parse_parameters(
    line: &str,
    start: usize,
    end: usize,
    delimiters: &[(Token<'_>, Span)],
) -> Result<Vec<Parameter>, ContentLineError> {
    let mut parameters = Vec::new();
    let mut assignment_start = start;
    let mut rest = delimiters;

    loop {
        let split = rest.iter().position(|(tok, _)| *tok == Token::Semicolon);
        let (inner, assignment_end) = match split.and_then(|i| rest.get(i).map(|d| (i, d.1))) {
            Some((i, span)) => (rest.get(..i).unwrap_or_default(), span.start),
            None => (rest, end),
        };

        let parameter = parse_parameter(line, assignment_start, assignment_end, inner)
            .map_err(|kind| ContentLineError::InvalidParameter {
                index: parameters.len(),
                kind,
            })?;
        parameters.push(parameter);

        match split {
            Some(i) => {
                rest = rest.get(i + 1..).unwrap_or_default();
                assignment_start = assignment_end + 1;
            }
            None => break,
        }
    }

    Ok(parameters)
}

fn parse_parameter(
    line: &str,
    start: usize,
    end: usize,
    delimiters: &[(Token<'_>, Span)],
) -> Result<Parameter, ParameterErrorKind> {
    let Some(equal) = delimiters.iter().find(|(tok, _)| *tok == Token::Equal) else {
        return Err(if start == end {
            ParameterErrorKind::EmptyName
        } else {
            ParameterErrorKind::MissingEquals
        });
    };

    let name = slice(line, start, equal.1.start);
    if name.is_empty() {
        return Err(ParameterErrorKind::EmptyName);
    } else if name.contains(' ') {
        return Err(ParameterErrorKind::NameWithSpace);
    }

    let mut values = Vec::new();
    let mut value_start = equal.1.end;
    for (_, span) in delimiters
        .iter()
        .filter(|(tok, span)| *tok == Token::Comma && span.start > equal.1.start)
    {
        values.push(normalize_value(slice(line, value_start, span.start)));
        value_start = span.end;
    }
    values.push(normalize_value(slice(line, value_start, end)));

    Ok(Parameter {
        name: name.to_ascii_uppercase(),
        values,
    })
}

fn normalize_value(value: &str) -> String {
    if Parameter::is_quoted(value) {
        value.to_string()
    } else {
        value.to_ascii_uppercase()
    }
}

/// Collect delimiter tokens that are outside quoted segments.
fn unquoted_delimiters(line: &str) -> Vec<(Token<'_>, Span)> {
    let mut quoted = false;
    let mut delimiters = Vec::new();
    for SpannedToken(tok, span) in tokenize(line) {
        match tok {
            Token::DQuote => quoted = !quoted,
            Token::Semicolon | Token::Colon | Token::Equal | Token::Comma if !quoted => {
                delimiters.push((tok, span));
            }
            _ => {}
        }
    }
    delimiters
}

fn slice(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or_default()
}
