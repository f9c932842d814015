use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::GenerationError;

/// A fully written temporary file waiting to replace its destination.
///
/// Dropping it without [`StagedFile::commit`] removes the temporary file, so
/// the destination is either untouched or fully replaced.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    tmp_path: PathBuf,
    committed: bool,
}

impl StagedFile {
    /// Run `write` against a temporary path next to `path`.
    pub fn stage<T, F>(path: &Path, write: F) -> Result<(Self, T), GenerationError>
    where
        F: FnOnce(&Path) -> Result<T, GenerationError>,
    {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent).map_err(|source| GenerationError::write(path, source))?;
            }
        }

        let staged = Self {
            path: path.to_path_buf(),
            tmp_path: temp_path(path)?,
            committed: false,
        };
        let value = write(&staged.tmp_path).map_err(|err| err.at_path(path))?;
        Ok((staged, value))
    }

    /// Stage raw bytes for `path`.
    pub fn stage_bytes(path: &Path, data: &[u8]) -> Result<Self, GenerationError> {
        let (staged, ()) = Self::stage(path, |tmp_path| {
            let mut file = OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(tmp_path)?;
            file.write_all(data)?;
            file.sync_all()?;
            Ok(())
        })?;
        Ok(staged)
    }

    /// Destination the file will be renamed to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rename the temporary file over the destination.
    pub fn commit(mut self) -> Result<(), GenerationError> {
        std::fs::rename(&self.tmp_path, &self.path)
            .map_err(|source| GenerationError::write(&self.path, source))?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.tmp_path);
        }
    }
}

/// Stage and immediately commit `path`.
pub fn write_atomic_with<T, F>(path: &Path, write: F) -> Result<T, GenerationError>
where
    F: FnOnce(&Path) -> Result<T, GenerationError>,
{
    let (staged, value) = StagedFile::stage(path, write)?;
    staged.commit()?;
    Ok(value)
}

fn temp_path(path: &Path) -> Result<PathBuf, GenerationError> {
    let file_name = path.file_name().ok_or_else(|| {
        GenerationError::write(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}
