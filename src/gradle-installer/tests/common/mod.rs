use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The binary under test, isolated from the user's settings file and `FL_GRADLE_*` variables.
/// Keep the returned config file alive for as long as the command is used.
pub fn gradle_installer() -> (NamedTempFile, Command) {
    let config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    let mut cmd = Command::cargo_bin("gradle-installer").unwrap();
    cmd.arg("--config").arg(config.path());
    for var in [
        "FL_GRADLE_DIR",
        "FL_GRADLE_DIRECTORY",
        "FL_GRADLE_VERSION",
        "FL_GRADLE_ANDROID_PROJECT_DIR",
        "FL_GRADLE_VALIDATE_URL",
        "FL_GRADLE_DOWNLOAD_TOOL_LINUX",
        "FL_GRADLE_DOWNLOAD_TOOL_MACOS",
    ] {
        cmd.env_remove(var);
    }
    (config, cmd)
}

/// Lays out `<install_path>/bin/gradle` as a script that records its working directory and
/// arguments into `$FAKE_GRADLE_RECORD`, then exits with `$FAKE_GRADLE_EXIT` (default 0).
pub fn fake_gradle(install_path: &Path) -> PathBuf {
    let bin = install_path.join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    let script = bin.join("gradle");
    std::fs::write(
        &script,
        "#!/bin/sh\n\
         if [ -n \"$FAKE_GRADLE_RECORD\" ]; then\n\
         \x20 printf '%s\\n%s\\n' \"$(pwd -P)\" \"$*\" > \"$FAKE_GRADLE_RECORD\"\n\
         fi\n\
         exit \"${FAKE_GRADLE_EXIT:-0}\"\n",
    )
    .unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    script
}

/// Working directory and arguments recorded by [`fake_gradle`].
pub fn read_invocation(record: &Path) -> (PathBuf, String) {
    let contents = std::fs::read_to_string(record).unwrap();
    let mut lines = contents.lines();
    let cwd = PathBuf::from(lines.next().unwrap());
    let args = lines.next().unwrap_or_default().to_string();
    (cwd, args)
}
