// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use caltool_ical::{CalendarInfo, write_info};
use clap::{ArgMatches, Command};

use crate::arg::{CommonArgs, Input};
use crate::config::Config;
use crate::util::{read_input, stdout, written};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdInfo {
    pub input: Input,
}

impl CmdInfo {
    pub const NAME: &str = "info";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("i")
            .about("Validate a calendar and show its statistics")
            .arg(CommonArgs::input())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            input: CommonArgs::get_input(matches),
        }
    }

    pub fn run(self, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "collecting calendar info...");
        let calendar = read_input(&self.input)?;
        let info = CalendarInfo::collect(&calendar.root, calendar.lines);
        written(write_info(&info, stdout()))
    }
}
