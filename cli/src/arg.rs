// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};

/// Where a calendar is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        Ok(match self {
            Self::Stdin => Box::new(io::stdin().lock()),
            Self::File(path) => Box::new(BufReader::new(File::open(path)?)),
        })
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "stdin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show debug logs on stderr").global(true)
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn input() -> Arg {
        arg!(file: [FILE] "The calendar file to read, `-` or nothing for stdin")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_input(matches: &ArgMatches) -> Input {
        matches
            .get_one::<PathBuf>("file")
            .cloned()
            .map_or(Input::Stdin, Input::from)
    }
}

#[cfg(test)]
mod tests {
    use clap::Command;

    use super::*;

    #[test]
    fn parses_input() {
        let cmd = Command::new("test").arg(CommonArgs::input());

        let matches = cmd.clone().try_get_matches_from(["test", "a.ics"]).unwrap();
        let input = CommonArgs::get_input(&matches);
        assert_eq!(input, Input::File(PathBuf::from("a.ics")));
        assert_eq!(input.to_string(), "a.ics");

        let matches = cmd.clone().try_get_matches_from(["test", "-"]).unwrap();
        assert_eq!(CommonArgs::get_input(&matches), Input::Stdin);

        let matches = cmd.try_get_matches_from(["test"]).unwrap();
        let input = CommonArgs::get_input(&matches);
        assert_eq!(input, Input::Stdin);
        assert_eq!(input.to_string(), "stdin");
    }

    #[test]
    fn opens_missing_file() {
        let input = Input::File(PathBuf::from("/nonexistent/calendar.ics"));
        assert!(input.open().is_err());
    }
}
