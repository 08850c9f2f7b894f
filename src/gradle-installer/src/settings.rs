use crate::download::{DownloadTool, DownloadTools};
use crate::errors::GradleError;
use anyhow::{Context, Result};
use config::{Config as RConfig, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_GRADLE_DIR: &str = "~/.gradle-fastlane";
pub const ENV_PREFIX: &str = "FL_GRADLE";

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    /// Directory that versioned installations are placed in
    pub dir: PathBuf,
    pub download_tool_linux: String,
    pub download_tool_macos: String,
}

impl Settings {
    pub fn download_tools(&self) -> Result<DownloadTools, GradleError> {
        Ok(DownloadTools {
            linux: self.download_tool_linux.parse()?,
            macos: self.download_tool_macos.parse()?,
        })
    }
}

/// Values given on the command line; these win over every other source.
#[derive(Clone, Debug, Default)]
pub struct SettingsOverrides {
    pub dir: Option<PathBuf>,
    pub download_tool_linux: Option<String>,
    pub download_tool_macos: Option<String>,
}

pub struct SettingsLoader;

impl SettingsLoader {
    pub fn default_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gradle-installer").join("config.toml"))
    }

    /// Layers, lowest precedence first: built-in defaults, the TOML config file, `FL_GRADLE_*`
    /// environment variables, command line overrides. A config file passed explicitly must
    /// exist; the default one is optional.
    pub fn load(config_file: Option<&Path>, overrides: &SettingsOverrides) -> Result<Settings> {
        let mut builder = RConfig::builder()
            .set_default("dir", DEFAULT_GRADLE_DIR)?
            .set_default("download_tool_linux", DownloadTool::Wget.program())?
            .set_default("download_tool_macos", DownloadTool::Curl.program())?;

        let file = config_file
            .map(Path::to_path_buf)
            .or_else(Self::default_config_file);
        if let Some(file) = file {
            builder = builder.add_source(
                File::new(&file.to_string_lossy(), FileFormat::Toml)
                    .required(config_file.is_some()),
            );
        }

        builder = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option(
                "dir",
                overrides
                    .dir
                    .as_ref()
                    .map(|dir| dir.to_string_lossy().into_owned()),
            )?
            .set_override_option("download_tool_linux", overrides.download_tool_linux.clone())?
            .set_override_option("download_tool_macos", overrides.download_tool_macos.clone())?;

        let settings: Settings = builder
            .build()?
            .try_deserialize()
            .context("failed to parse gradle-installer settings")?;
        tracing::debug!(?settings, "settings loaded");

        Ok(settings)
    }
}
