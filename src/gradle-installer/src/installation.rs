use crate::errors::GradleError;
use crate::paths::expand_path;
use crate::platform::Platform;
use crate::version::GradleVersion;
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no install path is given explicitly.
pub const GRADLE_HOME_ENV_VAR: &str = "GRADLE_HOME";
pub const GRADLE_SH_ENV_VAR: &str = "GRADLE_SH";

/// Where a Gradle distribution lives. Constructing one says nothing about whether the
/// installation exists; check `binary_path` before relying on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedInstallation {
    pub install_path: PathBuf,
    pub binary_path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    /// `KEY=value` lines, suitable for `eval` or `$GITHUB_ENV`
    Env,
    Json,
}

impl ResolvedInstallation {
    /// `<install_dir>/gradle-<version>`, with `install_dir` expanded to an absolute path.
    pub fn for_version(
        install_dir: &Path,
        version: &GradleVersion,
        platform: Platform,
    ) -> Result<Self, GradleError> {
        let install_dir = expand_path(install_dir)?;
        Self::at(&install_dir.join(version.dist_name()), platform)
    }

    pub fn at(install_path: &Path, platform: Platform) -> Result<Self, GradleError> {
        let install_path = expand_path(install_path)?;
        let binary_path = install_path.join(platform.capabilities().binary_subpath);
        Ok(Self {
            install_path,
            binary_path,
        })
    }

    pub fn is_installed(&self) -> bool {
        self.binary_path.is_file()
    }

    pub fn publish(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        let install_path = self.install_path.display();
        let binary_path = self.binary_path.display();
        let out = match format {
            OutputFormat::Text => {
                format!("Gradle home:   {install_path}\nGradle binary: {binary_path}\n")
            }
            OutputFormat::Env => format!(
                "{GRADLE_HOME_ENV_VAR}={install_path}\n{GRADLE_SH_ENV_VAR}={binary_path}\n"
            ),
            OutputFormat::Json => serde_json::to_string_pretty(self)? + "\n",
        };
        Ok(out)
    }
}

/// Picks the installation the wrapper should use: an explicit path wins, then an installation
/// resolved earlier in the same run, then `GRADLE_HOME`.
pub fn resolve_install_path(
    explicit: Option<&Path>,
    published: Option<&ResolvedInstallation>,
    env_home: Option<OsString>,
) -> Result<PathBuf, GradleError> {
    let path = if let Some(path) = explicit {
        path.to_path_buf()
    } else if let Some(installation) = published {
        installation.install_path.clone()
    } else if let Some(home) = env_home.filter(|home| !home.is_empty()) {
        PathBuf::from(home)
    } else {
        return Err(GradleError::InstallPathUnknown);
    };
    Ok(expand_path(&path)?)
}
