// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use caltool_ical::combine_calendars;
use clap::{ArgMatches, Command, ValueHint, arg, value_parser};

use crate::arg::{CommonArgs, Input};
use crate::config::Config;
use crate::util::{read_input, stdout, written};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdCombine {
    pub other: Input,
    pub input: Input,
}

impl CmdCombine {
    pub const NAME: &str = "combine";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("c")
            .about("Merge the components and properties of another calendar into a calendar")
            .arg(
                arg!(other: <OTHER> "The calendar file to merge in")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(CommonArgs::input())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let other = match matches.get_one::<PathBuf>("other") {
            Some(path) => Input::from(path.clone()),
            None => unreachable!("other is required"),
        };
        Self {
            other,
            input: CommonArgs::get_input(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "combining calendars...");
        if self.other == Input::Stdin && self.input == Input::Stdin {
            return Err("Both calendars cannot be read from stdin".into());
        }

        let first = read_input(&self.input)?;
        let second = read_input(&self.other)?;
        written(combine_calendars(
            &first.root,
            &second.root,
            stdout(),
            config.format_options(),
        ))
    }
}
