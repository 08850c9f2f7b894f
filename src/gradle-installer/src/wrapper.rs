use crate::errors::GradleError;
use crate::installation::ResolvedInstallation;
use crate::paths::expand_path;
use crate::platform::Platform;
use crate::version::GradleVersion;
use gradle_common::command::{CommandRunner, ShellCommand};
use gradle_common::{info_message, success_message};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct WrapperRequest {
    pub project_dir: PathBuf,
    pub gradle_version: GradleVersion,
    pub validate_url: bool,
    pub install_path: PathBuf,
}

pub struct WrapperInvoker<R: CommandRunner> {
    pub platform: Platform,
    pub runner: R,
}

impl<R: CommandRunner> WrapperInvoker<R> {
    pub fn new(platform: Platform, runner: R) -> Self {
        Self { platform, runner }
    }

    /// Regenerates the wrapper files of `request.project_dir` using the installed launcher.
    pub fn invoke(&mut self, request: &WrapperRequest) -> Result<(), GradleError> {
        let installation = ResolvedInstallation::at(&request.install_path, self.platform)?;
        if !installation.is_installed() {
            return Err(GradleError::InstallationMissing(installation.install_path));
        }
        info_message!(
            "Using existing gradle at {}",
            installation.install_path.display()
        );

        let project_dir = expand_path(&request.project_dir)?;
        if !project_dir.is_dir() {
            return Err(GradleError::ProjectDirMissing(project_dir));
        }

        let command = wrapper_command(
            &installation.binary_path,
            &request.gradle_version,
            request.validate_url,
            &project_dir,
        );
        self.runner.run(&command)?;

        success_message!(
            "Gradle wrapper {} generated in {}",
            request.gradle_version,
            project_dir.display()
        );
        Ok(())
    }
}

pub fn wrapper_command(
    binary: &Path,
    version: &GradleVersion,
    validate_url: bool,
    project_dir: &Path,
) -> ShellCommand {
    let command = ShellCommand::new(binary)
        .args(["wrapper", "--gradle-version", version.as_str()])
        .current_dir(project_dir);
    if validate_url {
        command.arg("--validate-url")
    } else {
        command
    }
}
