// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Errors reported while reading, validating and writing calendars.

use std::fmt::{self, Display};
use std::io;

use crate::syntax::scanner::ContentLineError;

/// Inclusive range of physical (folded) lines in the source, 1-based.
///
/// Errors raised after reading, such as a filter that leaves nothing to
/// write, are not tied to source lines and carry [`LineSpan::NONE`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSpan {
    /// First physical line
    pub from: usize,
    /// Last physical line
    pub to: usize,
}

impl LineSpan {
    /// No source lines; line numbers start at 1
    pub const NONE: Self = Self::new(0, 0);

    /// Create a new span covering `from..=to`
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Create a span covering exactly one physical line
    #[must_use]
    pub const fn at(line: usize) -> Self {
        Self::new(line, line)
    }

    /// Whether the span points at source lines
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.from == 0
    }
}

impl Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("n/a")
        } else if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}-{}", self.from, self.to)
        }
    }
}

/// Error kind of a [`CalError`], rendered as the classic short status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
pub enum ErrorKind {
    /// More text found after the end of the calendar
    #[strum(serialize = "AFTEND")]
    AfterEnd,

    /// Version missing, duplicated or wrong
    #[strum(serialize = "BADVER")]
    BadVersion,

    /// BEGIN...END not found as expected
    #[strum(serialize = "BEGEND")]
    BeginEnd,

    /// I/O error
    #[strum(serialize = "IOERR")]
    Io,

    /// Outer block not VCALENDAR, or no V components found
    #[strum(serialize = "NOCAL")]
    NoCalendar,

    /// CRLF missing at end of line
    #[strum(serialize = "NOCRNL")]
    NoCrlf,

    /// Nothing between BEGIN...END
    #[strum(serialize = "NODATA")]
    NoData,

    /// PRODID missing or duplicated
    #[strum(serialize = "NOPROD")]
    NoProductId,

    /// Subcomponent not allowed at this depth
    #[strum(serialize = "SUBCOM")]
    SubComponent,

    /// Property not in valid form
    #[strum(serialize = "SYNTAX")]
    Syntax,
}

/// Errors that can occur while reading, validating, transforming or writing a calendar.
///
/// Every variant carries the inclusive physical-line span it pertains to,
/// or [`LineSpan::NONE`] when no source line is involved.
#[derive(Debug, thiserror::Error)]
pub enum CalError {
    /// Logical line found after `END:VCALENDAR`
    #[error("content after the end of the calendar (line {span})")]
    AfterEnd {
        /// Span of the trailing line
        span: LineSpan,
    },

    /// `VERSION` is missing, duplicated, or not the accepted version
    #[error("calendar version is missing, duplicated or not {expected} (line {span})")]
    BadVersion {
        /// The accepted version string
        expected: &'static str,
        /// Span of the line that closed the calendar
        span: LineSpan,
    },

    /// `END` does not match the open component, or the input ended inside one
    #[error("expected END:{expected}, found {found} (line {span})")]
    BeginEnd {
        /// Name of the component that is still open
        expected: String,
        /// What was found instead
        found: String,
        /// Span of the offending line
        span: LineSpan,
    },

    /// I/O failure on the underlying stream
    #[error("I/O error at line {span}: {source}")]
    Io {
        /// Span of the line being read or written
        span: LineSpan,
        /// The underlying error
        #[source]
        source: io::Error,
    },

    /// The document is not a calendar, or has no calendar content
    #[error("{reason} (line {span})")]
    NoCalendar {
        /// Description of what is missing
        reason: &'static str,
        /// Span of the offending line
        span: LineSpan,
    },

    /// Line terminator is not CRLF
    #[error("line is not terminated by CRLF (line {span})")]
    NoCrlf {
        /// Span of the logical line being assembled
        span: LineSpan,
    },

    /// A component has neither properties nor subcomponents
    #[error("component {name} has no content (line {span})")]
    NoData {
        /// Name of the empty component
        name: String,
        /// Span of the END line
        span: LineSpan,
    },

    /// `PRODID` is missing or duplicated
    #[error("calendar product id is missing or duplicated (line {span})")]
    NoProductId {
        /// Span of the line that closed the calendar
        span: LineSpan,
    },

    /// `BEGIN` at a depth where no further nesting is allowed
    #[error("subcomponent {name} not allowed at depth {depth} (line {span})")]
    SubComponent {
        /// Name of the rejected component
        name: String,
        /// Depth of the component that was open
        depth: usize,
        /// Span of the BEGIN line
        span: LineSpan,
    },

    /// A property or its parameters are malformed
    #[error("invalid property: {source} (line {span})")]
    Syntax {
        /// Span of the logical line
        span: LineSpan,
        /// Why the line was rejected
        #[source]
        source: ContentLineError,
    },
}

impl CalError {
    /// The kind of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AfterEnd { .. } => ErrorKind::AfterEnd,
            Self::BadVersion { .. } => ErrorKind::BadVersion,
            Self::BeginEnd { .. } => ErrorKind::BeginEnd,
            Self::Io { .. } => ErrorKind::Io,
            Self::NoCalendar { .. } => ErrorKind::NoCalendar,
            Self::NoCrlf { .. } => ErrorKind::NoCrlf,
            Self::NoData { .. } => ErrorKind::NoData,
            Self::NoProductId { .. } => ErrorKind::NoProductId,
            Self::SubComponent { .. } => ErrorKind::SubComponent,
            Self::Syntax { .. } => ErrorKind::Syntax,
        }
    }

    /// The physical lines this error pertains to
    #[must_use]
    pub const fn span(&self) -> LineSpan {
        match self {
            Self::AfterEnd { span }
            | Self::BadVersion { span, .. }
            | Self::BeginEnd { span, .. }
            | Self::Io { span, .. }
            | Self::NoCalendar { span, .. }
            | Self::NoCrlf { span }
            | Self::NoData { span, .. }
            | Self::NoProductId { span }
            | Self::SubComponent { span, .. }
            | Self::Syntax { span, .. } => *span,
        }
    }

    pub(crate) fn io(span: LineSpan, source: io::Error) -> Self {
        Self::Io { span, source }
    }
}
