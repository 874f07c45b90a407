// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use caltool_ical::{ExtractOptions, FormatOptions};

use crate::APP_NAME;

const CALTOOL_CONFIG_ENV: &str = "CALTOOL_CONFIG";

/// Load the configuration.
///
/// The file is taken from `path`, else from `CALTOOL_CONFIG`, else from the
/// user config directory. Only the last one may be missing.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CALTOOL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let Some(config) = get_config_dir().map(|dir| dir.join(format!("{APP_NAME}/config.toml")))
        else {
            tracing::debug!("no user config directory, using defaults");
            return Ok(Config::default());
        };
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e).into())
}

/// Configuration of the caltool application.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output formatting
    pub format: FormatConfig,

    /// The extract report
    pub extract: ExtractConfig,
}

impl Config {
    pub fn format_options(&self) -> FormatOptions {
        let folding = match self.format.folding {
            0 => None,
            n => Some(n),
        };
        FormatOptions::default().folding(folding)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::default().placeholder(self.extract.placeholder.clone())
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Fold lines longer than this many octets, 0 to disable
    pub folding: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            folding: caltool_ical::keyword::FOLD_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// Shown for events without a summary
    pub placeholder: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            placeholder: ExtractOptions::default().placeholder,
        }
    }
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use std::sync::{Mutex, MutexGuard, OnceLock};

    use tempfile::TempDir;

    use super::*;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_config(dir: &TempDir, name: &str, placeholder: &str) -> PathBuf {
        let path = dir.path().join(name);
        let content = format!(
            r#"
[format]
folding = 0

[extract]
placeholder = "{placeholder}"
"#
        );
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parses_keys_and_defaults() {
        let config: Config = "[extract]\nplaceholder = \"-\"\n".parse().unwrap();
        assert_eq!(config.extract.placeholder, "-");
        assert_eq!(config.format.folding, 75);
        assert_eq!(config.format_options(), FormatOptions::default());
        assert_eq!(config.extract_options().placeholder, "-");

        let config: Config = "[format]\nfolding = 0\n".parse().unwrap();
        assert_eq!(config.format_options().folding, None);

        assert!("[format]\nwidth = 3\n".parse::<Config>().is_err());
    }

    #[test]
    fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let cli_path = write_config(&temp_dir, "cli.toml", "cli");
        let env_path = write_config(&temp_dir, "env.toml", "env");

        let _guard = env_lock();
        unsafe {
            std::env::set_var(CALTOOL_CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(Some(cli_path)).unwrap();
        assert_eq!(config.extract.placeholder, "cli");

        let config = parse_config(None).unwrap();
        assert_eq!(config.extract.placeholder, "env");

        unsafe {
            std::env::remove_var(CALTOOL_CONFIG_ENV);
        }
    }

    #[cfg(unix)]
    #[test]
    fn uses_default_location_when_present() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(APP_NAME)).unwrap();
        write_config(&temp_dir, &format!("{APP_NAME}/config.toml"), "xdg");

        let _guard = env_lock();
        unsafe {
            std::env::remove_var(CALTOOL_CONFIG_ENV);
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let config = parse_config(None).unwrap();
        assert_eq!(config.extract.placeholder, "xdg");

        let empty = TempDir::new().unwrap();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", empty.path());
        }
        assert_eq!(parse_config(None).unwrap(), Config::default());

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    fn returns_error_for_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = parse_config(Some(temp_dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn returns_error_for_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[format\n").unwrap();
        let err = parse_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
