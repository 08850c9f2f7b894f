use crate::installation::OutputFormat;
use crate::settings::SettingsOverrides;
use crate::version::GradleVersion;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gradle-installer",
    version,
    about = "Installs Gradle distributions and regenerates Gradle wrappers"
)]
pub struct GradleInstallerCli {
    /// TOML settings file (default: <config dir>/gradle-installer/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write debug logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct InstallArgs {
    /// Gradle version to be installed
    #[arg(long, env = "FL_GRADLE_VERSION")]
    pub gradle_version: GradleVersion,

    /// Directory for Gradle installations [default: ~/.gradle-fastlane]
    #[arg(long)]
    pub gradle_dir: Option<PathBuf>,

    /// Download tool used on Linux, `curl` or `wget` [default: wget]
    #[arg(long)]
    pub download_tool_linux: Option<String>,

    /// Download tool used on macOS, `curl` or `wget` [default: curl]
    #[arg(long)]
    pub download_tool_macos: Option<String>,
}

impl InstallArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            dir: self.gradle_dir.clone(),
            download_tool_linux: self.download_tool_linux.clone(),
            download_tool_macos: self.download_tool_macos.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install a Gradle distribution unless it is already present, then print its paths
    Install {
        #[command(flatten)]
        install: InstallArgs,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Regenerate a project's Gradle wrapper using an installed Gradle
    Wrapper {
        /// Gradle version the wrapper should use
        #[arg(long, env = "FL_GRADLE_VERSION")]
        gradle_version: GradleVersion,

        /// Folder where Gradle is installed [default: $GRADLE_HOME]
        #[arg(long, env = "FL_GRADLE_DIRECTORY")]
        gradle_dir: Option<PathBuf>,

        /// Folder where the android project resides
        #[arg(long, env = "FL_GRADLE_ANDROID_PROJECT_DIR")]
        android_project_dir: PathBuf,

        /// Ask Gradle to check that the distribution url is reachable
        #[arg(long, env = "FL_GRADLE_VALIDATE_URL")]
        validate_url: bool,
    },

    /// Install Gradle, then regenerate the project's wrapper with it
    Bootstrap {
        #[command(flatten)]
        install: InstallArgs,

        /// Folder where the android project resides
        #[arg(long, env = "FL_GRADLE_ANDROID_PROJECT_DIR")]
        android_project_dir: PathBuf,

        /// Version for the wrapper, if different from the installed version
        #[arg(long)]
        wrapper_version: Option<GradleVersion>,

        /// Ask Gradle to check that the distribution url is reachable
        #[arg(long, env = "FL_GRADLE_VALIDATE_URL")]
        validate_url: bool,
    },

    /// Report whether this machine can install the requested version
    Check {
        #[command(flatten)]
        install: InstallArgs,
    },
}
