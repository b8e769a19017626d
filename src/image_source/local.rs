use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use fs_err as fs;

use super::{ImageSource, ImageSourceError};
use crate::catalog::CardCode;

/// Serves card images from a directory of `{code}.jpg` files, the layout
/// produced by `download-cards`.
pub struct ImageDir {
    root: PathBuf,
}

impl ImageDir {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn image_path(&self, code: &CardCode) -> PathBuf {
        self.root.join(format!("{}.jpg", code))
    }
}

#[async_trait]
impl ImageSource for ImageDir {
    async fn fetch_image(&self, code: &CardCode) -> Result<Vec<u8>, ImageSourceError> {
        let path = self.image_path(code);

        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(ImageSourceError::NotFound { code: code.clone() })
            }
            Err(err) => Err(ImageSourceError::Io {
                code: code.clone(),
                source: err,
            }),
        }
    }
}
