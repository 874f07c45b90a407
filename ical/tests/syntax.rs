// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for reading and validating iCalendar documents
//!
//! These tests run the whole reader on realistic documents and check the
//! error kind and line span reported for each kind of defect.

use caltool_ical::{CalError, Calendar, ErrorKind, LineSpan, parse_calendar, read_calendar};

/// Test helper to parse and return the error of an invalid document
fn parse_err(src: &str) -> CalError {
    parse_calendar(src).unwrap_err()
}

const HEADER: &str = "VERSION:2.0\r\nPRODID:-//Example Corp.//CalDAV Client//EN\r\n";

#[test]
fn syntax_minimal_calendar() {
    let src = format!(
        "BEGIN:VCALENDAR\r\n{HEADER}BEGIN:VEVENT\r\nDTSTART:20240101T120000\r\nSUMMARY:Lunch\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n"
    );
    let calendar = parse_calendar(&src).unwrap();
    assert_eq!(calendar.lines, 8);
    assert_eq!(calendar.root.name, "VCALENDAR");
    assert_eq!(calendar.root.properties.len(), 2);
    assert_eq!(calendar.root.children.len(), 1);

    let event = &calendar.root.children[0];
    assert_eq!(event.name, "VEVENT");
    assert_eq!(event.properties[0].name, "DTSTART");
    assert_eq!(event.properties[1].value, "Lunch");
}

#[test]
fn syntax_parameters_and_values() {
    let src = format!(
        "BEGIN:VCALENDAR\r\n{HEADER}BEGIN:VEVENT\r\n\
ATTENDEE;role=req-participant;CN=\"Doe, Jane\";DELEGATED-FROM=\"mailto:a@x\",\"mailto:b@x\":mailto:jane@example.com\r\n\
DESCRIPTION:Keep ; and : in values\r\n\
END:VEVENT\r\nEND:VCALENDAR\r\n"
    );
    let calendar = parse_calendar(&src).unwrap();
    let event = &calendar.root.children[0];

    let attendee = &event.properties[0];
    assert_eq!(attendee.name, "ATTENDEE");
    assert_eq!(attendee.value, "mailto:jane@example.com");
    assert_eq!(attendee.parameters.len(), 3);
    assert_eq!(attendee.parameters[0].name, "ROLE");
    assert_eq!(attendee.parameters[0].values, ["REQ-PARTICIPANT"]);
    assert_eq!(attendee.parameters[1].values, ["\"Doe, Jane\""]);
    assert_eq!(
        attendee.parameters[2].values,
        ["\"mailto:a@x\"", "\"mailto:b@x\""]
    );

    assert_eq!(event.properties[1].value, "Keep ; and : in values");
}

#[test]
fn syntax_folded_lines() {
    let src = format!(
        "BEGIN:VCALENDAR\r\n{HEADER}BEGIN:VTODO\r\nSUMMARY:This is a long\r\n  summary that\r\n\tcontinues\r\nEND:VTODO\r\nEND:VCALENDAR\r\n"
    );
    let calendar = parse_calendar(&src).unwrap();
    assert_eq!(calendar.lines, 9);
    assert_eq!(
        calendar.root.children[0].properties[0].value,
        "This is a long summary thatcontinues"
    );
}

#[test]
fn syntax_blank_lines_are_skipped() {
    let src = format!(
        "BEGIN:VCALENDAR\r\n\r\n{HEADER}BEGIN:VEVENT\r\n\r\nUID:1\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n"
    );
    let calendar = parse_calendar(&src).unwrap();
    assert_eq!(calendar.lines, 9);
    assert_eq!(calendar.root.children[0].properties.len(), 1);
}

#[test]
fn syntax_mismatched_end() {
    let src = format!(
        "BEGIN:VCALENDAR\r\n{HEADER}BEGIN:VEVENT\r\nUID:1\r\nEND:VTODO\r\nEND:VCALENDAR\r\n"
    );
    let err = parse_err(&src);
    assert_eq!(err.kind(), ErrorKind::BeginEnd);
    assert_eq!(err.span(), LineSpan::at(6));
}

#[test]
fn syntax_input_ends_inside_component() {
    let src = format!("BEGIN:VCALENDAR\r\n{HEADER}BEGIN:VEVENT\r\nUID:1\r\n");
    let err = parse_err(&src);
    assert_eq!(err.kind(), ErrorKind::BeginEnd);
    assert_eq!(err.span(), LineSpan::at(5));
}

#[test]
fn syntax_bare_line_feed() {
    let src = "BEGIN:VCALENDAR\r\nVERSION:2.0\nPRODID:x\r\nEND:VCALENDAR\r\n";
    let err = parse_err(src);
    assert_eq!(err.kind(), ErrorKind::NoCrlf);
    assert_eq!(err.span(), LineSpan::at(2));
}

#[test]
fn syntax_nesting_too_deep() {
    let src = format!(
        "BEGIN:VCALENDAR\r\n{HEADER}BEGIN:VEVENT\r\nBEGIN:VALARM\r\nBEGIN:X-DEEP\r\nX-A:1\r\nEND:X-DEEP\r\nEND:VALARM\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n"
    );
    let err = parse_err(&src);
    assert_eq!(err.kind(), ErrorKind::SubComponent);
    assert_eq!(err.span(), LineSpan::at(6));
}

#[test]
fn syntax_empty_component() {
    let src = format!(
        "BEGIN:VCALENDAR\r\n{HEADER}BEGIN:VEVENT\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n"
    );
    let err = parse_err(&src);
    assert_eq!(err.kind(), ErrorKind::NoData);
    assert_eq!(err.span(), LineSpan::at(5));
}

#[test]
fn syntax_malformed_property() {
    let src = format!(
        "BEGIN:VCALENDAR\r\n{HEADER}BEGIN:VEVENT\r\nNO COLON HERE\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n"
    );
    let err = parse_err(&src);
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.span(), LineSpan::at(5));
}

#[test]
fn validation_not_a_calendar() {
    assert_eq!(parse_err("").kind(), ErrorKind::NoCalendar);

    let err = parse_err("BEGIN:VCARD\r\nFN:Jane\r\nEND:VCARD\r\n");
    assert_eq!(err.kind(), ErrorKind::NoCalendar);
    assert_eq!(err.span(), LineSpan::at(1));

    // only X- components
    let src = format!(
        "BEGIN:VCALENDAR\r\n{HEADER}BEGIN:X-THING\r\nX-A:1\r\nEND:X-THING\r\nEND:VCALENDAR\r\n"
    );
    let err = parse_err(&src);
    assert_eq!(err.kind(), ErrorKind::NoCalendar);
    assert_eq!(err.span(), LineSpan::at(7));
}

#[test]
fn validation_version_and_product_id() {
    let event = "BEGIN:VEVENT\r\nUID:1\r\nEND:VEVENT\r\n";

    let src = format!("BEGIN:VCALENDAR\r\nPRODID:x\r\n{event}END:VCALENDAR\r\n");
    assert_eq!(parse_err(&src).kind(), ErrorKind::BadVersion);

    let src = format!("BEGIN:VCALENDAR\r\nVERSION:1.0\r\nPRODID:x\r\n{event}END:VCALENDAR\r\n");
    assert_eq!(parse_err(&src).kind(), ErrorKind::BadVersion);

    let src = format!(
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nVERSION:2.0\r\nPRODID:x\r\n{event}END:VCALENDAR\r\n"
    );
    assert_eq!(parse_err(&src).kind(), ErrorKind::BadVersion);

    let src = format!("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n{event}END:VCALENDAR\r\n");
    let err = parse_err(&src);
    assert_eq!(err.kind(), ErrorKind::NoProductId);
    assert_eq!(err.span(), LineSpan::at(6));
}

#[test]
fn validation_content_after_end() {
    let src = format!(
        "BEGIN:VCALENDAR\r\n{HEADER}BEGIN:VEVENT\r\nUID:1\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n\r\nX-TRAILING:1\r\n"
    );
    let err = parse_err(&src);
    assert_eq!(err.kind(), ErrorKind::AfterEnd);
    assert_eq!(err.span(), LineSpan::at(9));
}

#[test]
fn validation_error_codes() {
    let codes: Vec<&str> = [
        ErrorKind::AfterEnd,
        ErrorKind::BadVersion,
        ErrorKind::BeginEnd,
        ErrorKind::Io,
        ErrorKind::NoCalendar,
        ErrorKind::NoCrlf,
        ErrorKind::NoData,
        ErrorKind::NoProductId,
        ErrorKind::SubComponent,
        ErrorKind::Syntax,
    ]
    .into_iter()
    .map(Into::into)
    .collect();
    assert_eq!(
        codes,
        [
            "AFTEND", "BADVER", "BEGEND", "IOERR", "NOCAL", "NOCRNL", "NODATA", "NOPROD",
            "SUBCOM", "SYNTAX"
        ]
    );
}

#[test]
fn reads_from_any_buffered_reader() {
    let src = format!(
        "BEGIN:VCALENDAR\r\n{HEADER}BEGIN:VEVENT\r\nUID:1\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n"
    );
    let reader = std::io::BufReader::with_capacity(3, src.as_bytes());
    let calendar = read_calendar(reader).unwrap();
    assert_eq!(calendar, src.parse::<Calendar>().unwrap());
}
