mod local;
mod ygoprodeck;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

pub use local::*;
pub use ygoprodeck::*;

use crate::catalog::CardCode;

/// Where card artwork comes from: the public image host while
/// downloading, or a local directory while reprocessing.
#[async_trait]
pub trait ImageSource {
    /// Fetch the encoded artwork for one card.
    async fn fetch_image(&self, code: &CardCode) -> Result<Vec<u8>, ImageSourceError>;
}

#[derive(Debug, Error)]
pub enum ImageSourceError {
    #[error("image host HTTP error")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("image host returned HTTP {status} for card {code}")]
    ResponseError { status: StatusCode, code: CardCode },

    #[error("no stored image for card {code}")]
    NotFound { code: CardCode },

    #[error("failed to read image for card {code}")]
    Io {
        code: CardCode,
        #[source]
        source: std::io::Error,
    },
}
