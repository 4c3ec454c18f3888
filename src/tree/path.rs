//! Path and URL normalization utilities

use crate::error::ManifestError;
use std::path::Path;

/// Compute the URL path of `path` relative to `root`.
///
/// Components are joined with `/` and any backslash left inside a component is
/// converted too, so the result never contains a backslash on any platform.
/// A component that is not valid UTF-8 is an error rather than a lossy URL.
pub fn relative_url_path(root: &Path, path: &Path) -> Result<String, ManifestError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| ManifestError::DirectoryAccess {
            path: path.to_path_buf(),
            message: format!("path is not below {}", root.display()),
        })?;

    let components = relative
        .components()
        .map(|component| {
            component
                .as_os_str()
                .to_str()
                .ok_or_else(|| ManifestError::DirectoryAccess {
                    path: path.to_path_buf(),
                    message: "file name is not valid UTF-8".to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let joined = components.join("/");

    Ok(normalize_separators(&joined))
}

/// Convert backslash separators to forward slashes
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Strip every trailing slash from a base URL. Nothing else is validated.
pub fn normalize_base_url(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Join a base URL and a relative URL path with exactly one separator from the base side
pub fn join_url(base_url: &str, relative_path: &str) -> String {
    format!("{}/{}", normalize_base_url(base_url), relative_path)
}
