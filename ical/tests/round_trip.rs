// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Round-trip tests for the iCalendar reader and formatter.
//!
//! These tests verify that parsing, formatting and parsing again produces
//! an equivalent tree.

use caltool_ical::{FormatOptions, format_calendar, parse_calendar};

fn round_trip(src: &str) {
    let first = parse_calendar(src).unwrap();
    let formatted = format_calendar(&first.root, FormatOptions::default()).unwrap();
    let second = parse_calendar(&formatted).unwrap();
    assert_eq!(first.root, second.root);

    // formatting is stable once normalized
    let again = format_calendar(&second.root, FormatOptions::default()).unwrap();
    assert_eq!(formatted, again);
}

#[test]
fn round_trip_simple_calendar() {
    round_trip(
        "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp.//Cal Client 1.0//EN\r\n\
BEGIN:VEVENT\r\n\
UID:12345@example.com\r\n\
DTSTAMP:20250110T120000Z\r\n\
DTSTART:20250110T140000Z\r\n\
DTEND:20250110T150000Z\r\n\
SUMMARY:Test Event\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n",
    );
}

#[test]
fn round_trip_nested_and_unknown_components() {
    round_trip(
        "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//x//\r\n\
X-WR-CALNAME:Home\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Berlin\r\n\
BEGIN:STANDARD\r\n\
DTSTART:19701025T030000\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
BEGIN:VTODO\r\n\
UID:t1\r\n\
DUE;TZID=Europe/Berlin:20250301T090000\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER;RELATED=END:-PT15M\r\n\
END:VALARM\r\n\
END:VTODO\r\n\
BEGIN:X-VENDOR\r\n\
X-SETTING;X-PARAM=\"a;b\",c:value:with:colons\r\n\
END:X-VENDOR\r\n\
END:VCALENDAR\r\n",
    );
}

#[test]
fn round_trip_long_property_line() {
    let description = format!("{} caf\u{e9} \u{2615} {}", "a".repeat(70), "z".repeat(90));
    let src = format!(
        "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//x//\r\n\
BEGIN:VEVENT\r\n\
DESCRIPTION:{description}\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n"
    );

    let calendar = parse_calendar(&src).unwrap();
    let formatted = format_calendar(&calendar.root, FormatOptions::default()).unwrap();
    assert!(formatted.split("\r\n").all(|line| line.len() <= 75));

    let reread = parse_calendar(&formatted).unwrap();
    assert!(reread.lines > calendar.lines);
    assert_eq!(reread.root.children[0].properties[0].value, description);
    assert_eq!(reread.root, calendar.root);
}
