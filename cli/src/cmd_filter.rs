// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use caltool_ical::{ContentKind, filter_calendar};
use clap::{ArgMatches, Command, arg, value_parser};
use jiff::civil::Date;

use crate::arg::{CommonArgs, Input};
use crate::config::Config;
use crate::util::{date_range, parse_date, read_input, stdout, written};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdFilter {
    pub kind: ContentKind,
    pub from: Option<Date>,
    pub to: Option<Date>,
    pub input: Input,
}

impl CmdFilter {
    pub const NAME: &str = "filter";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("f")
            .about("Keep only the events or to-dos of a calendar, optionally within dates")
            .arg(
                arg!(kind: <KIND> "Which components to keep")
                    .value_parser(value_parser!(ContentKind)),
            )
            .arg(
                arg!(--from <DATE> "Keep components dated on or after this day (`today` or YYYY-MM-DD)")
                    .value_parser(parse_date),
            )
            .arg(
                arg!(--to <DATE> "Keep components dated on or before this day (`today` or YYYY-MM-DD)")
                    .value_parser(parse_date),
            )
            .arg(CommonArgs::input())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let kind = match matches.get_one::<ContentKind>("kind") {
            Some(kind) => *kind,
            None => unreachable!("kind is required"),
        };
        Self {
            kind,
            from: matches.get_one::<Date>("from").copied(),
            to: matches.get_one::<Date>("to").copied(),
            input: CommonArgs::get_input(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "filtering calendar...");
        let range = date_range(self.from, self.to)?;
        let calendar = read_input(&self.input)?;
        written(filter_calendar(
            &calendar.root,
            self.kind,
            range,
            stdout(),
            config.format_options(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn parse(args: &[&str]) -> CmdFilter {
        let cmd = Command::new("test").subcommand(CmdFilter::command());
        let matches = cmd
            .try_get_matches_from(["test", "filter"].iter().chain(args))
            .unwrap();
        CmdFilter::from(matches.subcommand_matches("filter").unwrap())
    }

    #[test]
    fn test_parse_filter() {
        let parsed = parse(&["t", "--from", "2024-01-01", "--to", "2024-01-31", "cal.ics"]);
        assert_eq!(parsed.kind, ContentKind::Todos);
        assert_eq!(parsed.from, Some(date(2024, 1, 1)));
        assert_eq!(parsed.to, Some(date(2024, 1, 31)));
        assert_eq!(parsed.input, Input::File("cal.ics".into()));

        let parsed = parse(&["event"]);
        assert_eq!(parsed.kind, ContentKind::Events);
        assert_eq!((parsed.from, parsed.to), (None, None));
        assert_eq!(parsed.input, Input::Stdin);
    }

    #[test]
    fn test_reject_invalid_date() {
        let cmd = Command::new("test").subcommand(CmdFilter::command());
        let result = cmd.try_get_matches_from(["test", "filter", "e", "--from", "yesterday"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reject_reversed_dates() {
        let cmd = parse(&["e", "--from", "2024-02-01", "--to", "2024-01-01"]);
        let err = cmd.run(&Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "filter start date is not before end date");
    }
}
