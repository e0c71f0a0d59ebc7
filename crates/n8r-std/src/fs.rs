use std::fs;
use std::io::{ErrorKind, Write};

use anyhow::{anyhow, Context};
use camino::Utf8Path;
use tempfile::NamedTempFile;

use crate::N8rStdError;

/// Interact with a file system
#[derive(Default, Copy, Clone)]
pub struct Fs {}

impl Fs {
    /// reads a file from disk, returning `None` if nothing exists at `path`
    pub fn read_file_if_exists<P>(path: P) -> Result<Option<String>, N8rStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(metadata) => {
                if !metadata.is_file() {
                    return Err(anyhow!("'{}' is not a file", path).into());
                }
                tracing::info!("reading {} from disk", &path);
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("could not read {}", &path))?;
                if contents.is_empty() {
                    Err(N8rStdError::EmptyFile {
                        empty_file: path.to_string(),
                    })
                } else {
                    Ok(Some(contents))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("nothing to read at {}", &path);
                Ok(None)
            }
            Err(e) => Err(anyhow!("could not inspect '{}'", path).context(e).into()),
        }
    }

    /// Replaces the file at `path` with `contents` in one step.
    ///
    /// The contents are written to a temporary file next to `path` and renamed
    /// over it, so readers only ever observe the old or the new file. The file
    /// is readable and writable by the current user only. Missing parent
    /// directories are created.
    pub fn write_file_private<P, C>(path: P, contents: C) -> Result<(), N8rStdError>
    where
        P: AsRef<Utf8Path>,
        C: AsRef<[u8]>,
    {
        let path = path.as_ref();
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .ok_or_else(|| anyhow!("cannot write file to root or prefix {path}"))?;
        Self::create_dir_all(parent)?;

        let mut file = NamedTempFile::new_in(parent)
            .with_context(|| format!("could not create a temporary file in {}", parent))?;
        restrict_permissions(file.as_file())
            .with_context(|| format!("could not restrict permissions on a file in {}", parent))?;
        file.write_all(contents.as_ref())
            .with_context(|| format!("could not write {}", path))?;
        file.as_file()
            .sync_all()
            .with_context(|| format!("could not flush {}", path))?;

        tracing::info!("writing {} to disk", &path);
        file.persist(path)
            .with_context(|| format!("could not replace {}", path))?;
        Ok(())
    }

    /// Removes a file. Returns `false` if there was nothing to remove.
    pub fn remove_file_if_exists<P>(path: P) -> Result<bool, N8rStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        match fs::remove_file(path) {
            Ok(()) => {
                tracing::info!("removed {}", &path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(anyhow!("could not remove {}", path).context(e).into()),
        }
    }

    /// creates a directory
    pub fn create_dir_all<P>(path: P) -> Result<(), N8rStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        tracing::debug!("creating {} directory", &path);
        fs::create_dir_all(path)
            .with_context(|| format!("could not create {} directory", &path))?;
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
