// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, Write};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Shell as ClapShell, generate};
use clap_complete_nushell::Nushell;

use crate::{APP_NAME, Cli};

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the completion script of caltool for a shell")
            .hide(true)
            .arg(arg!(shell: <SHELL> "The target shell").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<Shell>("shell") {
            Some(shell) => Self { shell: *shell },
            None => unreachable!("shell is required"),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        let mut stdout = io::stdout().lock();
        self.generate(&mut stdout);
        stdout.flush()?;
        Ok(())
    }

    pub fn generate(self, buf: &mut impl Write) {
        let mut cmd = Cli::command();
        match self.shell.builtin() {
            Some(shell) => generate(shell, &mut cmd, APP_NAME, buf),
            None => generate(Nushell {}, &mut cmd, APP_NAME, buf),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// The generator shipped with `clap_complete`, if any
    const fn builtin(self) -> Option<ClapShell> {
        match self {
            Self::Bash => Some(ClapShell::Bash),
            Self::Elvish => Some(ClapShell::Elvish),
            Self::Fish => Some(ClapShell::Fish),
            Self::PowerShell => Some(ClapShell::PowerShell),
            Self::Zsh => Some(ClapShell::Zsh),
            Self::Nushell => None,
        }
    }
}
