pub mod check;
pub mod cli;
pub mod download;
pub mod errors;
pub mod installation;
pub mod installer;
pub mod logging;
pub mod paths;
pub mod platform;
pub mod settings;
pub mod url_builder;
pub mod version;
pub mod wrapper;

pub use errors::GradleError;
pub use installation::ResolvedInstallation;
