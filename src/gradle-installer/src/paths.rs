use std::io;
use std::path::{self, Path, PathBuf};

/// Expands a leading `~` to the home directory and makes the result absolute against the
/// current directory. The path is not required to exist.
pub fn expand_path(path: &Path) -> io::Result<PathBuf> {
    let expanded = match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "cannot determine home directory")
            })?;
            if rest.as_os_str().is_empty() {
                home
            } else {
                home.join(rest)
            }
        }
        Err(_) => path.to_path_buf(),
    };
    path::absolute(expanded)
}
