//! Secret handling utilities.
//!
//! Re-exports secrecy types and resolves file-delivered secrets, the
//! container-mount convention where `FOO_FILE` points at a file holding `FOO`.

pub use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};
use std::path::Path;

/// Read a secret from `path`, trimming surrounding whitespace.
///
/// A trailing newline is the usual shape of a mounted secret, so
/// `"hunter2\n"` resolves to `hunter2`.
///
/// # Errors
/// [`Error::PasswordFileNotFound`] if nothing exists at `path`,
/// [`Error::PasswordFileRead`] if it exists but cannot be read as UTF-8 text.
pub fn read_secret_file(path: &Path) -> Result<SecretString> {
    if !path.exists() {
        return Err(Error::PasswordFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| Error::PasswordFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "resolved secret from file");
    Ok(SecretString::from(contents.trim().to_string()))
}
