// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! caltool - Parse, validate, query and merge iCalendar files

use std::process::ExitCode;

fn main() -> ExitCode {
    caltool_cli::run()
}
