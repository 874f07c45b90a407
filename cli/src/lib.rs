// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of `caltool`.

mod arg;
mod cli;
mod cmd_combine;
mod cmd_extract;
mod cmd_filter;
mod cmd_generate_completion;
mod cmd_info;
mod config;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;

/// Name of the application, used for the binary and the config directory.
pub const APP_NAME: &str = "caltool";
