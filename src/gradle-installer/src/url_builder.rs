use crate::errors::GradleError;
use crate::version::GradleVersion;
use url::Url;

pub const GRADLE_DISTRIBUTIONS_URL: &str = "https://services.gradle.org/distributions";

pub fn distribution_url(version: &GradleVersion) -> Result<Url, GradleError> {
    let url = format!("{}/{}", GRADLE_DISTRIBUTIONS_URL, version.archive_name());
    Ok(url.parse()?)
}
