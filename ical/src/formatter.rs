// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) formatter module.
//!
//! This module writes any [`ComponentView`] in the RFC 5545 text format to
//! any `std::io::Write` implementer, folding long lines on the fly.
//!
//! # Example
//!
//! ```
//! use caltool_ical::{FormatOptions, format_calendar, parse_calendar};
//!
//! let src = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//x//\r\n\
//!            BEGIN:VTODO\r\nSUMMARY:Write docs\r\nEND:VTODO\r\nEND:VCALENDAR\r\n";
//! let calendar = parse_calendar(src).unwrap();
//! let ics = format_calendar(&calendar.root, FormatOptions::default()).unwrap();
//! assert_eq!(ics, src);
//! ```

mod component;
mod property;

use std::io::{self, Write};

use crate::component::ComponentView;
use crate::error::{CalError, LineSpan};
use crate::formatter::component::write_component;
use crate::keyword::FOLD_LENGTH;

/// Write a component tree or view, returning the number of physical lines written.
///
/// # Errors
///
/// Returns [`CalError::Io`] with the span of the line being written if the
/// writer fails. Output already written is not rolled back.
#[tracing::instrument(skip_all, fields(name = calendar.name()))]
pub fn write_calendar(
    calendar: &impl ComponentView,
    writer: impl Write,
    options: FormatOptions,
) -> Result<usize, CalError> {
    let mut formatter = Formatter::new(writer, options);
    match formatter.write(calendar).and_then(|()| formatter.flush()) {
        Ok(()) => {
            tracing::debug!(lines = formatter.lines_written(), "calendar written");
            Ok(formatter.lines_written())
        }
        Err(e) => Err(CalError::io(
            LineSpan::at(formatter.lines_written() + 1),
            e,
        )),
    }
}

/// Convenience function to format a component tree or view to a `String`.
///
/// # Errors
///
/// Returns an error if the output contains invalid UTF-8 data.
pub fn format_calendar(
    calendar: &impl ComponentView,
    options: FormatOptions,
) -> Result<String, CalError> {
    let mut buffer = Vec::new();
    let lines = write_calendar(calendar, &mut buffer, options)?;
    String::from_utf8(buffer).map_err(|e| {
        CalError::io(
            LineSpan::new(1, lines),
            io::Error::new(io::ErrorKind::InvalidData, e),
        )
    })
}

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(FOLD_LENGTH),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub const fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    /// Get the folding sequence for this style.
    #[must_use]
    pub(crate) const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }

    /// Get the length of the continuation character after CRLF.
    #[must_use]
    pub(crate) const fn continuation_len() -> usize {
        1 // Both SPACE and TAB are 1 byte
    }
}

/// iCalendar formatter that writes to any `Write` implementer.
///
/// Bytes written through its `Write` implementation are folded according to
/// the options; [`Formatter::writeln`] ends the current content line.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    /// The underlying writer.
    writer: W,
    /// Formatting options.
    options: FormatOptions,
    /// Current line length in bytes (excluding the pending CRLF).
    line_length: usize,
    /// Physical lines terminated so far.
    lines: usize,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub const fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line_length: 0,
            lines: 0,
        }
    }

    /// Number of physical lines terminated so far, folds included.
    #[must_use]
    pub const fn lines_written(&self) -> usize {
        self.lines
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a component tree or view to the underlying writer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&mut self, calendar: &impl ComponentView) -> io::Result<()> {
        write_component(self, calendar)
    }

    /// Write a CRLF line ending.
    pub(crate) fn writeln(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n")?;
        self.line_length = 0;
        self.lines += 1;
        Ok(())
    }

    /// Insert line folding: CRLF + whitespace.
    fn insert_fold(&mut self) -> io::Result<()> {
        self.writer
            .write_all(self.options.folding_style.as_bytes())?;
        self.line_length = FoldingStyle::continuation_len();
        self.lines += 1;
        Ok(())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(max_len) = self.options.folding else {
            // Folding disabled, write directly
            self.writer.write_all(buf)?;
            self.line_length += buf.len();
            return Ok(buf.len());
        };

        let mut remaining = buf;
        while !remaining.is_empty() {
            if self.line_length >= max_len {
                self.insert_fold()?;
            }

            let available = max_len.saturating_sub(self.line_length);
            let mut bytes_to_write = find_safe_write_length(remaining, available);
            if bytes_to_write == 0 {
                // The next character does not fit on this line
                if self.line_length > FoldingStyle::continuation_len() {
                    self.insert_fold()?;
                    continue;
                }
                bytes_to_write = utf8_char_len(remaining);
            }

            let (chunk, rest) = remaining.split_at(bytes_to_write);
            self.writer.write_all(chunk)?;
            self.line_length += chunk.len();
            remaining = rest;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Find the maximum number of bytes we can write without breaking a UTF-8 sequence.
///
/// UTF-8 continuation bytes look like `10xxxxxx`; the cut is moved back
/// until it sits before the start byte of a sequence.
fn find_safe_write_length(buf: &[u8], max_bytes: usize) -> usize {
    if max_bytes >= buf.len() {
        return buf.len();
    }

    let mut pos = max_bytes;
    while pos > 0 && buf.get(pos).is_some_and(|&b| (b & 0xC0) == 0x80) {
        pos -= 1;
    }
    pos
}

/// Length of the UTF-8 sequence starting at the beginning of `buf`.
fn utf8_char_len(buf: &[u8]) -> usize {
    let len = match buf.first() {
        Some(0xC0..=0xDF) => 2,
        Some(0xE0..=0xEF) => 3,
        Some(0xF0..=0xFF) => 4,
        _ => 1,
    };
    len.min(buf.len())
}
