// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545.

pub const KW_BEGIN: &str = "BEGIN";
pub const KW_END: &str = "END";

// Section 3.6 - Calendar Components
pub const KW_VCALENDAR: &str = "VCALENDAR";
pub const KW_VEVENT: &str = "VEVENT";
pub const KW_VTODO: &str = "VTODO";

// Section 3.2 - Property Parameters
pub const KW_CN: &str = "CN";

// Section 3.7 - Calendar Properties
pub const KW_PRODID: &str = "PRODID";
pub const KW_VERSION: &str = "VERSION";

/// The only calendar version accepted on read.
pub const KW_VERSION_2_0: &str = "2.0";

// Section 3.8 - Component Properties
pub const KW_COMPLETED: &str = "COMPLETED";
pub const KW_CREATED: &str = "CREATED";
pub const KW_DTEND: &str = "DTEND";
pub const KW_DTSTAMP: &str = "DTSTAMP";
pub const KW_DTSTART: &str = "DTSTART";
pub const KW_DUE: &str = "DUE";
pub const KW_LAST_MODIFIED: &str = "LAST-MODIFIED";
pub const KW_ORGANIZER: &str = "ORGANIZER";
pub const KW_SUMMARY: &str = "SUMMARY";

/// Prefix of non-standard (experimental) property names.
pub const KW_X_PREFIX: &str = "X-";

/// Maximum line length in octets before folding.
pub const FOLD_LENGTH: usize = 75;

/// Maximum nesting depth, counting the root calendar as 1.
pub const MAX_DEPTH: usize = 3;
