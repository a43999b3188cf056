//! Settings resolution.
//!
//! Each setting is taken from the first source that has it:
//! 1. Command-line flag
//! 2. Environment variable (handled by clap's `env` attribute)
//! 3. TOML config file
//! 4. Compiled default

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Args;
use courtmap_core::period::DEFAULT_YEAR;
use courtmap_sync::http::DEFAULT_RAYON_PATH;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://opros.sot.kg";

/// Flags shared by every subcommand.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Config file (default: <config dir>/courtmap/config.toml if present)
    #[arg(long, global = true, env = "COURTMAP_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Survey API base URL
    #[arg(long, global = true, env = "COURTMAP_BASE_URL")]
    pub base_url: Option<String>,

    /// Survey year used for detail requests
    #[arg(long, global = true, env = "COURTMAP_YEAR")]
    pub year: Option<i32>,

    /// Bearer token for the survey API
    #[arg(long, global = true, env = "COURTMAP_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub rayon_path: Option<String>,
    pub year: Option<i32>,
    pub token: Option<String>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub rayon_path: String,
    pub year: i32,
    pub token: Option<String>,
}

impl Settings {
    pub fn resolve(args: &GlobalArgs) -> anyhow::Result<Self> {
        let file = match &args.config {
            Some(path) => load_file(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => load_file(&path)?,
                None => FileConfig::default(),
            },
        };
        Ok(Self::merge(args, file))
    }

    fn merge(args: &GlobalArgs, file: FileConfig) -> Self {
        Self {
            base_url: args
                .base_url
                .clone()
                .or(file.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            rayon_path: file
                .rayon_path
                .unwrap_or_else(|| DEFAULT_RAYON_PATH.to_string()),
            year: args.year.or(file.year).unwrap_or(DEFAULT_YEAR),
            token: args.token.clone().or(file.token),
        }
    }

    /// The bearer token, required by every network command.
    pub fn require_token(&self) -> anyhow::Result<&str> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => bail!("no bearer token: pass --token or set COURTMAP_TOKEN"),
        }
    }
}

fn load_file(path: &Path) -> anyhow::Result<FileConfig> {
    debug!(path = %path.display(), "loading config file");
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("courtmap").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_nothing_set() {
        let s = Settings::merge(&GlobalArgs::default(), FileConfig::default());
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
        assert_eq!(s.rayon_path, DEFAULT_RAYON_PATH);
        assert_eq!(s.year, DEFAULT_YEAR);
        assert_eq!(s.token, None);
    }

    #[test]
    fn flags_override_file() {
        let args = GlobalArgs {
            base_url: Some("http://localhost:8000".into()),
            year: Some(2024),
            ..Default::default()
        };
        let file = FileConfig {
            base_url: Some("https://example.kg".into()),
            year: Some(2023),
            token: Some("from-file".into()),
            rayon_path: Some("/api/v2/rayon/".into()),
        };
        let s = Settings::merge(&args, file);
        assert_eq!(s.base_url, "http://localhost:8000");
        assert_eq!(s.year, 2024);
        assert_eq!(s.token.as_deref(), Some("from-file"));
        assert_eq!(s.rayon_path, "/api/v2/rayon/");
    }

    #[test]
    fn loads_toml_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "base_url = \"https://survey.test\"\nyear = 2026").unwrap();
        let args = GlobalArgs {
            config: Some(f.path().to_path_buf()),
            ..Default::default()
        };
        let s = Settings::resolve(&args).unwrap();
        assert_eq!(s.base_url, "https://survey.test");
        assert_eq!(s.year, 2026);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let args = GlobalArgs {
            config: Some(PathBuf::from("/nonexistent/courtmap.toml")),
            ..Default::default()
        };
        assert!(Settings::resolve(&args).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "base_uri = \"typo\"").unwrap();
        assert!(load_file(f.path()).is_err());
    }

    #[test]
    fn token_is_required_and_non_empty() {
        let mut s = Settings::merge(&GlobalArgs::default(), FileConfig::default());
        assert!(s.require_token().is_err());
        s.token = Some(String::new());
        assert!(s.require_token().is_err());
        s.token = Some("abc".into());
        assert_eq!(s.require_token().unwrap(), "abc");
    }
}
