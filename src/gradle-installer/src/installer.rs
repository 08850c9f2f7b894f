use crate::download::{mkdir_command, unzip_command, DownloadTools};
use crate::errors::GradleError;
use crate::installation::ResolvedInstallation;
use crate::paths::expand_path;
use crate::platform::Platform;
use crate::url_builder::distribution_url;
use crate::version::GradleVersion;
use gradle_common::command::CommandRunner;
use gradle_common::{info_message, success_message};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use url::Url;

pub struct Installer<R: CommandRunner> {
    pub platform: Platform,
    pub tools: DownloadTools,
    pub runner: R,
}

impl<R: CommandRunner> Installer<R> {
    pub fn new(platform: Platform, tools: DownloadTools, runner: R) -> Self {
        Self {
            platform,
            tools,
            runner,
        }
    }

    /// Makes sure `version` is installed below `install_dir`:
    /// - An existing launcher at the expected path is reused as-is
    /// - Otherwise the distribution archive is downloaded with the platform's download tool
    ///   and unpacked into `install_dir`
    ///
    /// The temporary archive is removed on every path out of here.
    pub fn resolve(
        &mut self,
        version: &GradleVersion,
        install_dir: &Path,
    ) -> Result<ResolvedInstallation, GradleError> {
        let installation = ResolvedInstallation::for_version(install_dir, version, self.platform)?;

        if installation.is_installed() {
            info_message!(
                "Using existing gradle at {}",
                installation.install_path.display()
            );
            return Ok(installation);
        }

        info_message!(
            "Downloading gradle to {}",
            installation.install_path.display()
        );
        let url = distribution_url(version)?;
        self.download_and_extract(&url, version, &expand_path(install_dir)?)?;

        if !installation.is_installed() {
            return Err(GradleError::IncompleteInstallation(installation.binary_path));
        }

        success_message!(
            "Gradle {} installed to {}",
            version,
            installation.install_path.display()
        );
        Ok(installation)
    }

    fn download_and_extract(
        &mut self,
        url: &Url,
        version: &GradleVersion,
        install_dir: &Path,
    ) -> Result<(), GradleError> {
        let archive = TempArchive::new(version)?;
        let tool = self.tools.for_platform(self.platform);
        tracing::debug!(
            %url,
            %tool,
            archive = %archive.path().display(),
            "downloading distribution"
        );

        self.runner.run(&tool.download_command(url, archive.path()))?;
        self.runner.run(&mkdir_command(install_dir))?;
        self.runner
            .run(&unzip_command(self.platform, archive.path(), install_dir))?;

        Ok(())
    }
}

/// Download target for the distribution archive. The enclosing temporary directory, and the
/// archive with it, is deleted when this is dropped.
struct TempArchive {
    _dir: TempDir,
    path: PathBuf,
}

impl TempArchive {
    fn new(version: &GradleVersion) -> std::io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("gradle-download-").tempdir()?;
        let path = dir.path().join(version.archive_name());
        Ok(Self { _dir: dir, path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::DownloadTool;
    use gradle_common::command::{MockCommandRunner, ProcessError, ShellCommand};
    use mockall::Sequence;
    use rstest::{fixture, rstest};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    const DIST_URL: &str = "https://services.gradle.org/distributions/gradle-7.6-bin.zip";

    type Captured = Arc<Mutex<Option<PathBuf>>>;

    #[fixture]
    fn install_dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    fn version() -> GradleVersion {
        "7.6".parse().unwrap()
    }

    fn binary(install_dir: &Path) -> PathBuf {
        install_dir.join("gradle-7.6").join("bin").join("gradle")
    }

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "#!/bin/sh\n").unwrap();
    }

    fn outcome(command: &ShellCommand, fails: bool) -> Result<(), ProcessError> {
        if fails {
            Err(ProcessError::Failed {
                command: command.to_string(),
                status: "exit status: 1".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// The file a curl or wget command writes to.
    fn download_output(command: &ShellCommand) -> Option<PathBuf> {
        let flag = match command.get_program().to_str()? {
            "curl" => "-o",
            "wget" => "-O",
            _ => return None,
        };
        let args = command.get_args();
        let index = args.iter().position(|arg| arg == flag)?;
        args.get(index + 1).map(PathBuf::from)
    }

    /// Expects one download with `tool`. The download leaves a file behind like the real tools
    /// do, and its path is captured.
    fn expect_download(
        runner: &mut MockCommandRunner,
        seq: &mut Sequence,
        tool: &'static str,
        fails: bool,
    ) -> Captured {
        let captured = Captured::default();
        let archive = captured.clone();
        runner
            .expect_run()
            .withf(move |command| command.get_program() == tool)
            .times(1)
            .in_sequence(seq)
            .returning(move |command| {
                let out = download_output(command).unwrap();
                touch(&out);
                *archive.lock().unwrap() = Some(out);
                outcome(command, fails)
            });
        captured
    }

    fn expect_step(
        runner: &mut MockCommandRunner,
        seq: &mut Sequence,
        program: &'static str,
        creates: Option<PathBuf>,
        fails: bool,
    ) {
        runner
            .expect_run()
            .withf(move |command| command.get_program() == program)
            .times(1)
            .in_sequence(seq)
            .returning(move |command| {
                if let Some(path) = &creates {
                    touch(path);
                }
                outcome(command, fails)
            });
    }

    fn archive(captured: &Captured) -> PathBuf {
        captured.lock().unwrap().clone().unwrap()
    }

    #[rstest]
    fn test_existing_installation_is_reused(install_dir: TempDir) {
        let binary = binary(install_dir.path());
        touch(&binary);

        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let mut installer = Installer::new(Platform::Linux, DownloadTools::default(), runner);
        let installation = installer.resolve(&version(), install_dir.path()).unwrap();

        assert_eq!(installation.binary_path, binary);
        assert_eq!(installation.install_path, install_dir.path().join("gradle-7.6"));
    }

    #[rstest]
    fn test_fresh_install_downloads_and_extracts(install_dir: TempDir) {
        let dir = install_dir.path().to_path_buf();
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();

        let captured = Captured::default();
        let download_archive = captured.clone();
        runner
            .expect_run()
            .withf(|command| command.get_program() == "wget")
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |command| {
                let out = download_output(command).unwrap();
                assert_eq!(
                    command.to_string(),
                    format!("wget -O {} {}", out.display(), DIST_URL)
                );
                touch(&out);
                *download_archive.lock().unwrap() = Some(out);
                Ok(())
            });

        let mkdir = format!("mkdir -p {}", dir.display());
        runner
            .expect_run()
            .withf(move |command| command.to_string() == mkdir)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let unzip_archive = captured.clone();
        let unzip_dir = dir.clone();
        runner
            .expect_run()
            .withf(|command| command.get_program() == "unzip")
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |command| {
                let archive = archive(&unzip_archive);
                assert!(archive.exists());
                assert_eq!(
                    command.to_string(),
                    format!("unzip -qo {} -d {}", archive.display(), unzip_dir.display())
                );
                touch(&binary(&unzip_dir));
                Ok(())
            });

        let mut installer = Installer::new(Platform::Linux, DownloadTools::default(), runner);
        let installation = installer.resolve(&version(), &dir).unwrap();
        installer.runner.checkpoint();

        let archive = archive(&captured);
        assert_eq!(
            archive.file_name().unwrap().to_str().unwrap(),
            "gradle-7.6-bin.zip"
        );
        assert!(!archive.exists());
        assert!(!archive.parent().unwrap().exists());
        assert_eq!(installation.install_path, dir.join("gradle-7.6"));
        assert_eq!(installation.binary_path, binary(&dir));
    }

    #[rstest]
    fn test_configured_tool_is_used(install_dir: TempDir) {
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();
        let captured = Captured::default();
        let download_archive = captured.clone();
        runner
            .expect_run()
            .withf(|command| command.get_program() == "curl")
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |command| {
                let out = download_output(command).unwrap();
                assert_eq!(
                    command.to_string(),
                    format!("curl -L {} -o {}", DIST_URL, out.display())
                );
                touch(&out);
                *download_archive.lock().unwrap() = Some(out);
                Ok(())
            });
        expect_step(&mut runner, &mut seq, "mkdir", None, false);
        expect_step(
            &mut runner,
            &mut seq,
            "unzip",
            Some(binary(install_dir.path())),
            false,
        );

        let tools = DownloadTools {
            linux: DownloadTool::Curl,
            macos: DownloadTool::Curl,
        };
        let mut installer = Installer::new(Platform::Linux, tools, runner);
        installer.resolve(&version(), install_dir.path()).unwrap();

        assert!(!archive(&captured).exists());
    }

    #[rstest]
    #[case::download(0)]
    #[case::mkdir(1)]
    #[case::unzip(2)]
    fn test_archive_removed_when_a_step_fails(install_dir: TempDir, #[case] failing: usize) {
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();
        let captured = expect_download(&mut runner, &mut seq, "wget", failing == 0);
        if failing >= 1 {
            expect_step(&mut runner, &mut seq, "mkdir", None, failing == 1);
        }
        if failing >= 2 {
            expect_step(&mut runner, &mut seq, "unzip", None, failing == 2);
        }

        let mut installer = Installer::new(Platform::Linux, DownloadTools::default(), runner);
        let err = installer.resolve(&version(), install_dir.path()).unwrap_err();

        assert!(matches!(
            err,
            GradleError::Subprocess(ProcessError::Failed { .. })
        ));
        assert!(!archive(&captured).exists());
    }

    #[rstest]
    fn test_archive_without_launcher_is_reported(install_dir: TempDir) {
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();
        let captured = expect_download(&mut runner, &mut seq, "wget", false);
        expect_step(&mut runner, &mut seq, "mkdir", None, false);
        expect_step(&mut runner, &mut seq, "unzip", None, false);

        let mut installer = Installer::new(Platform::Linux, DownloadTools::default(), runner);
        let err = installer.resolve(&version(), install_dir.path()).unwrap_err();

        let expected = binary(install_dir.path());
        assert!(
            matches!(err, GradleError::IncompleteInstallation(ref path) if *path == expected)
        );
        assert!(!archive(&captured).exists());
    }

    #[rstest]
    fn test_macos_install_uses_curl(install_dir: TempDir) {
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();
        let captured = expect_download(&mut runner, &mut seq, "curl", false);
        expect_step(&mut runner, &mut seq, "mkdir", None, false);
        expect_step(
            &mut runner,
            &mut seq,
            "unzip",
            Some(binary(install_dir.path())),
            false,
        );

        let mut installer = Installer::new(Platform::Macos, DownloadTools::default(), runner);
        let installation = installer.resolve(&version(), install_dir.path()).unwrap();

        assert_eq!(
            installation.install_path,
            install_dir.path().join("gradle-7.6")
        );
        assert_eq!(installation.binary_path, binary(install_dir.path()));
        assert!(!archive(&captured).exists());
    }
}
