use crate::cli::env_util;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use vfspath::Separator;

pub const CONFIG_ENV: &str = "VFSPATH_CONFIG";
pub const SEPARATOR_ENV: &str = "VFSPATH_SEPARATOR";
pub const VERBOSE_ENV: &str = "VFSPATH_VERBOSE";

const CONFIG_FILE_NAME: &str = "vfspath.toml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub separator: Option<String>,
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorSource {
    Flag,
    Env,
    ConfigFile,
    Default,
}

impl fmt::Display for SeparatorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeparatorSource::Flag => "--separator",
            SeparatorSource::Env => SEPARATOR_ENV,
            SeparatorSource::ConfigFile => "config file",
            SeparatorSource::Default => "default",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub separator: Separator,
    pub separator_source: SeparatorSource,
    pub verbose: bool,
    pub config_path: Option<PathBuf>,
    pub config_found: bool,
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(override_path) = env_util::env_path_override(CONFIG_ENV) {
        return Some(override_path);
    }

    directories::ProjectDirs::from("", "", "vfspath")
        .map(|d| d.config_dir().join(CONFIG_FILE_NAME))
}

/// Reads the config file at `path`. A missing file yields `Ok(None)`.
pub fn load(path: &Path) -> Result<Option<FileConfig>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file {}", path.display()));
        }
    };
    parse(strip_utf8_bom(&content), path).map(Some)
}

fn strip_utf8_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

fn parse(content: &str, path: &Path) -> Result<FileConfig> {
    toml::from_str(content).with_context(|| format!("invalid TOML in {}", path.display()))
}

fn parse_separator(value: &str, source: SeparatorSource) -> Result<Separator> {
    value
        .parse::<Separator>()
        .with_context(|| format!("invalid separator `{value}` from {source}"))
}

/// Resolves the effective settings. The separator comes from the first of
/// flag, environment, config file that provides one, else `/`.
pub fn resolve(flag_separator: Option<&str>, flag_verbose: bool) -> Result<Settings> {
    let config_path = config_path();
    let file_config = match &config_path {
        Some(path) => load(path)?,
        None => None,
    };
    let config_found = file_config.is_some();
    let file_config = file_config.unwrap_or_default();

    let env_separator = env_util::env_value(SEPARATOR_ENV);
    let (separator, separator_source) = if let Some(value) = flag_separator {
        (parse_separator(value, SeparatorSource::Flag)?, SeparatorSource::Flag)
    } else if let Some(value) = env_separator.as_deref() {
        (parse_separator(value, SeparatorSource::Env)?, SeparatorSource::Env)
    } else if let Some(value) = file_config.separator.as_deref() {
        (
            parse_separator(value, SeparatorSource::ConfigFile)?,
            SeparatorSource::ConfigFile,
        )
    } else {
        (Separator::DEFAULT, SeparatorSource::Default)
    };

    let verbose = flag_verbose
        || env_util::env_flag_enabled(VERBOSE_ENV)
        || file_config.verbose.unwrap_or(false);

    Ok(Settings {
        separator,
        separator_source,
        verbose,
        config_path,
        config_found,
    })
}
