// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use caltool_ical::{ExtractKind, write_extract};
use clap::{ArgMatches, Command, arg, value_parser};

use crate::arg::{CommonArgs, Input};
use crate::config::Config;
use crate::util::{read_input, stdout, written};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdExtract {
    pub kind: ExtractKind,
    pub input: Input,
}

impl CmdExtract {
    pub const NAME: &str = "extract";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("x")
            .about("List event start times or the X- properties of a calendar")
            .arg(
                arg!(kind: <KIND> "What to extract: events or X- property names")
                    .value_parser(value_parser!(ExtractKind)),
            )
            .arg(CommonArgs::input())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let kind = match matches.get_one::<ExtractKind>("kind") {
            Some(kind) => *kind,
            None => unreachable!("kind is required"),
        };
        Self {
            kind,
            input: CommonArgs::get_input(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "extracting...");
        let calendar = read_input(&self.input)?;
        let options = config.extract_options();
        written(write_extract(
            &calendar.root,
            self.kind,
            &options,
            stdout(),
        ))
    }
}
