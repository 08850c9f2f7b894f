use anyhow::{bail, Context, Result};
use clap::Parser;
use gradle_common::command::SystemRunner;
use gradle_common::error_message;
use gradle_installer::check::CheckManager;
use gradle_installer::cli::{Command, GradleInstallerCli, InstallArgs};
use gradle_installer::installation::{resolve_install_path, GRADLE_HOME_ENV_VAR};
use gradle_installer::installer::Installer;
use gradle_installer::logging::setup_logging;
use gradle_installer::platform::Platform;
use gradle_installer::settings::{Settings, SettingsLoader};
use gradle_installer::wrapper::{WrapperInvoker, WrapperRequest};
use gradle_installer::ResolvedInstallation;
use std::path::Path;

fn main() {
    let cli = GradleInstallerCli::parse();

    if let Err(err) = setup_logging(cli.verbose, cli.log_file.as_deref()) {
        error_message!("{err:#}");
        std::process::exit(1);
    }

    if let Err(err) = run(cli) {
        error_message!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: GradleInstallerCli) -> Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        Command::Install { install, format } => {
            let platform = Platform::detect()?;
            let installation = install_gradle(platform, config, &install)?;
            print!("{}", installation.publish(format)?);
        }
        Command::Wrapper {
            gradle_version,
            gradle_dir,
            android_project_dir,
            validate_url,
        } => {
            let platform = Platform::detect()?;
            let install_path = resolve_install_path(
                gradle_dir.as_deref(),
                None,
                std::env::var_os(GRADLE_HOME_ENV_VAR),
            )?;
            let request = WrapperRequest {
                project_dir: android_project_dir,
                gradle_version,
                validate_url,
                install_path,
            };
            WrapperInvoker::new(platform, SystemRunner).invoke(&request)?;
        }
        Command::Bootstrap {
            install,
            android_project_dir,
            wrapper_version,
            validate_url,
        } => {
            let platform = Platform::detect()?;
            let installation = install_gradle(platform, config, &install)?;
            let request = WrapperRequest {
                project_dir: android_project_dir,
                gradle_version: wrapper_version.unwrap_or(install.gradle_version),
                validate_url,
                install_path: resolve_install_path(None, Some(&installation), None)?,
            };
            WrapperInvoker::new(platform, SystemRunner).invoke(&request)?;
        }
        Command::Check { install } => {
            let platform = Platform::detect()?;
            let settings = load_settings(config, &install)?;
            let installation = ResolvedInstallation::for_version(
                &settings.dir,
                &install.gradle_version,
                platform,
            )?;
            let tool = settings.download_tools()?.for_platform(platform);
            if !CheckManager::new(platform, tool, installation).run_all() {
                bail!("preflight checks failed");
            }
        }
    }

    Ok(())
}

fn load_settings(config: Option<&Path>, install: &InstallArgs) -> Result<Settings> {
    SettingsLoader::load(config, &install.overrides()).context("Failed to load settings")
}

fn install_gradle(
    platform: Platform,
    config: Option<&Path>,
    install: &InstallArgs,
) -> Result<ResolvedInstallation> {
    let settings = load_settings(config, install)?;
    let mut installer = Installer::new(platform, settings.download_tools()?, SystemRunner);
    Ok(installer.resolve(&install.gradle_version, &settings.dir)?)
}
