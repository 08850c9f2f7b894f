use gradle_common::command::ProcessError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradleError {
    #[error("Your OS is currently not supported: {0}")]
    UnsupportedPlatform(String),

    #[error("Unknown download tool `{0}`, expected `curl` or `wget`")]
    UnknownDownloadTool(String),

    #[error("Invalid gradle version `{0}`")]
    InvalidVersion(String),

    #[error(
        "No gradle installation path given. Pass --gradle-dir, set GRADLE_HOME, \
        or run `gradle-installer install` first."
    )]
    InstallPathUnknown,

    #[error(
        "No gradle installation found at {}. Run `gradle-installer install` first.",
        .0.display()
    )]
    InstallationMissing(PathBuf),

    #[error("Android project directory does not exist: {}", .0.display())]
    ProjectDirMissing(PathBuf),

    #[error(
        "Extracted archive did not produce a gradle binary at {}",
        .0.display()
    )]
    IncompleteInstallation(PathBuf),

    #[error(transparent)]
    Subprocess(#[from] ProcessError),

    #[error("Invalid distribution url: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
