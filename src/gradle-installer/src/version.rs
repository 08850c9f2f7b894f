use crate::errors::GradleError;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A Gradle release name such as `7.6`, `8.10.2` or `8.11-rc-1`.
///
/// The version ends up in a directory name and in the distribution url, so only characters
/// that are safe in both are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradleVersion(String);

impl GradleVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the directory the distribution archive unpacks to.
    pub fn dist_name(&self) -> String {
        format!("gradle-{}", self.0)
    }

    pub fn archive_name(&self) -> String {
        format!("gradle-{}-bin.zip", self.0)
    }
}

impl FromStr for GradleVersion {
    type Err = GradleError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let version = input.trim();
        let starts_ok = version
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric());
        let chars_ok = version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '+'));

        if starts_ok && chars_ok {
            Ok(Self(version.to_string()))
        } else {
            Err(GradleError::InvalidVersion(input.to_string()))
        }
    }
}

impl Display for GradleVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
