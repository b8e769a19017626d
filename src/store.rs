use std::io;
use std::path::{Path, PathBuf};

use fs_err as fs;

use crate::catalog::CardCode;

/// Bookkeeping for the directory downloaded or processed images land in.
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Creates the directory, along with any missing parents, and returns
    /// a handle to it.
    pub fn create(root: &Path) -> io::Result<Self> {
        fs::create_dir_all(root)?;

        Ok(Self {
            root: root.to_owned(),
        })
    }

    pub fn image_path(&self, code: &CardCode) -> PathBuf {
        self.root.join(format!("{}.jpg", code))
    }

    pub fn write_image(&self, code: &CardCode, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.image_path(code);
        fs::write(&path, bytes)?;

        Ok(path)
    }
}
