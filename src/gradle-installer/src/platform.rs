use crate::download::DownloadTool;
use crate::errors::GradleError;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Macos,
}

/// What differs between supported platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    pub default_download_tool: DownloadTool,
    /// Location of the launcher inside an installation.
    pub binary_subpath: &'static str,
    pub extract_program: &'static str,
}

impl Platform {
    pub fn detect() -> Result<Self, GradleError> {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(raw_os: &str) -> Result<Self, GradleError> {
        match raw_os {
            "linux" => Ok(Self::Linux),
            "macos" => Ok(Self::Macos),
            other => Err(GradleError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub const fn capabilities(self) -> PlatformCapabilities {
        match self {
            Self::Linux => PlatformCapabilities {
                default_download_tool: DownloadTool::Wget,
                binary_subpath: "bin/gradle",
                extract_program: "unzip",
            },
            Self::Macos => PlatformCapabilities {
                default_download_tool: DownloadTool::Curl,
                binary_subpath: "bin/gradle",
                extract_program: "unzip",
            },
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => f.write_str("linux"),
            Self::Macos => f.write_str("macos"),
        }
    }
}
