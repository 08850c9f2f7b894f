use crate::errors::GradleError;
use crate::platform::Platform;
use gradle_common::command::ShellCommand;
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadTool {
    Curl,
    Wget,
}

impl DownloadTool {
    pub fn program(self) -> &'static str {
        match self {
            Self::Curl => "curl",
            Self::Wget => "wget",
        }
    }

    /// Fetch `url` into the file at `out`.
    pub fn download_command(self, url: &Url, out: &Path) -> ShellCommand {
        match self {
            Self::Curl => ShellCommand::new("curl")
                .arg("-L")
                .arg(url.as_str())
                .arg("-o")
                .arg(out),
            Self::Wget => ShellCommand::new("wget")
                .arg("-O")
                .arg(out)
                .arg(url.as_str()),
        }
    }
}

impl FromStr for DownloadTool {
    type Err = GradleError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "curl" => Ok(Self::Curl),
            "wget" => Ok(Self::Wget),
            _ => Err(GradleError::UnknownDownloadTool(input.to_string())),
        }
    }
}

impl Display for DownloadTool {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Download tool chosen per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadTools {
    pub linux: DownloadTool,
    pub macos: DownloadTool,
}

impl DownloadTools {
    pub fn for_platform(&self, platform: Platform) -> DownloadTool {
        match platform {
            Platform::Linux => self.linux,
            Platform::Macos => self.macos,
        }
    }
}

impl Default for DownloadTools {
    fn default() -> Self {
        Self {
            linux: Platform::Linux.capabilities().default_download_tool,
            macos: Platform::Macos.capabilities().default_download_tool,
        }
    }
}

pub fn mkdir_command(dir: &Path) -> ShellCommand {
    ShellCommand::new("mkdir").arg("-p").arg(dir)
}

/// Extract `archive` into `dest`, overwriting existing files without prompting.
pub fn unzip_command(platform: Platform, archive: &Path, dest: &Path) -> ShellCommand {
    ShellCommand::new(platform.capabilities().extract_program)
        .arg("-qo")
        .arg(archive)
        .arg("-d")
        .arg(dest)
}
