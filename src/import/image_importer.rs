use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::error::ImportError;

/// Something the user picked that can be opened for reading image bytes.
pub trait ImageSource {
    type Reader: Read;

    /// Open a fresh byte stream
    fn open(&self) -> io::Result<Self::Reader>;

    /// Human-readable name for logs and errors
    fn describe(&self) -> String;
}

impl ImageSource for Path {
    type Reader = File;

    fn open(&self) -> io::Result<File> {
        File::open(self)
    }

    fn describe(&self) -> String {
        self.display().to_string()
    }
}

impl ImageSource for PathBuf {
    type Reader = File;

    fn open(&self) -> io::Result<File> {
        self.as_path().open()
    }

    fn describe(&self) -> String {
        self.as_path().describe()
    }
}

/// Copies picked images into one fixed local file.
///
/// Every import overwrites the same destination, so only the most recent
/// picture is kept.
#[derive(Debug, Clone)]
pub struct ImageImporter {
    destination: PathBuf,
}

impl ImageImporter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// The file every import writes to
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// The destination resolved against the current directory.
    ///
    /// The returned path is what gets stored in the profile, so it must keep
    /// resolving after the working directory changes.
    pub fn absolute_destination(&self) -> Result<PathBuf, ImportError> {
        std::path::absolute(&self.destination).map_err(|source| ImportError::Destination {
            path: self.destination.clone(),
            source,
        })
    }

    /// Copy the full contents of `source` into the destination file and return its
    /// absolute path.
    ///
    /// Bytes are staged in a temp file next to the destination and renamed over it
    /// only once the copy completes. On any error the temp file is removed and the
    /// previous destination content is left as it was.
    pub fn import_from<S: ImageSource + ?Sized>(&self, source: &S) -> Result<PathBuf, ImportError> {
        let destination = self.absolute_destination()?;

        let mut reader = source.open().map_err(|err| {
            warn!("Cannot open image source {}: {}", source.describe(), err);
            ImportError::OpenSource {
                source_ref: source.describe(),
                source: err,
            }
        })?;

        let dir = destination.parent().unwrap_or_else(|| Path::new("/"));

        fs::create_dir_all(dir).map_err(|source| ImportError::Destination {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut staged = NamedTempFile::new_in(dir).map_err(|source| ImportError::Destination {
            path: dir.to_path_buf(),
            source,
        })?;

        // Dropping `staged` on an early return deletes the partial file
        let bytes = io::copy(&mut reader, staged.as_file_mut()).map_err(|err| {
            warn!("Image copy from {} failed: {}", source.describe(), err);
            ImportError::Copy(err)
        })?;
        staged.as_file().sync_all().map_err(ImportError::Copy)?;
        drop(reader);

        staged
            .persist(&destination)
            .map_err(|err| ImportError::Persist {
                path: destination.clone(),
                source: err.error,
            })?;

        info!(
            "📸 Imported {} bytes from {} into {}",
            bytes,
            source.describe(),
            destination.display()
        );
        Ok(destination)
    }
}
