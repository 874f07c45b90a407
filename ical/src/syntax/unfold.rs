// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Line unfolding for iCalendar streams.
//!
//! Physical lines end with CRLF. A physical line starting with a SPACE or
//! HTAB continues the previous one; the continuation character is dropped
//! (RFC 5545 Section 3.1). The reader keeps its own physical line counter so
//! every logical line knows which source lines it was assembled from.

use std::io::{self, BufRead};

use crate::error::{CalError, LineSpan};

/// An unfolded content line with the physical lines it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Unfolded text, without terminator
    pub text: String,
    /// Physical lines the text was assembled from
    pub span: LineSpan,
}

/// Lazily reads logical lines from a byte stream.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    line: usize,
    failed: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Create a reader positioned before the first physical line
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            failed: false,
        }
    }

    /// Number of physical lines consumed so far
    #[must_use]
    pub const fn lines_read(&self) -> usize {
        self.line
    }

    /// Read the next logical line.
    ///
    /// Returns `Ok(None)` at a clean end of input. After the first error the
    /// reader is exhausted and keeps returning `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - [`CalError::NoCrlf`] if a physical line is not terminated by CRLF
    /// - [`CalError::Io`] if the underlying stream fails
    pub fn next_line(&mut self) -> Result<Option<LogicalLine>, CalError> {
        if self.failed {
            return Ok(None);
        }

        let result = self.read_logical_line();
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    fn read_logical_line(&mut self) -> Result<Option<LogicalLine>, CalError> {
        let mut buf = Vec::new();
        let mut start = self.line + 1;

        loop {
            match self.next_byte(start)? {
                None => {
                    if buf.is_empty() {
                        return Ok(None);
                    }

                    // unterminated final line
                    self.line += 1;
                    return Ok((!is_blank(&buf)).then(|| self.finish(buf, start)));
                }
                Some(b'\r') => {
                    if self.next_byte(start)? != Some(b'\n') {
                        return Err(CalError::NoCrlf {
                            span: LineSpan::new(start, self.line + 1),
                        });
                    }
                    self.line += 1;

                    if matches!(self.peek_byte(start)?, Some(b' ' | b'\t')) {
                        self.reader.consume(1);
                        continue;
                    }

                    if is_blank(&buf) {
                        buf.clear();
                        start = self.line + 1;
                        continue;
                    }

                    return Ok(Some(self.finish(buf, start)));
                }
                Some(b'\n') => {
                    return Err(CalError::NoCrlf {
                        span: LineSpan::new(start, self.line + 1),
                    });
                }
                Some(byte) => buf.push(byte),
            }
        }
    }

    fn finish(&self, buf: Vec<u8>, start: usize) -> LogicalLine {
        let text = String::from_utf8(buf)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
        let span = LineSpan::new(start, self.line);
        tracing::trace!(%span, %text, "logical line");
        LogicalLine { text, span }
    }

    fn peek_byte(&mut self, start: usize) -> Result<Option<u8>, CalError> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(CalError::io(LineSpan::new(start, self.line + 1), e)),
            }
        }
    }

    fn next_byte(&mut self, start: usize) -> Result<Option<u8>, CalError> {
        let byte = self.peek_byte(start)?;
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<LogicalLine, CalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

fn is_blank(buf: &[u8]) -> bool {
    buf.iter().all(u8::is_ascii_whitespace)
}
