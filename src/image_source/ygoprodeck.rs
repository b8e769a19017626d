use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{ImageSource, ImageSourceError};
use crate::catalog::CardCode;

/// The YGOPRODeck CDN, which serves one JPEG per card code.
pub const DEFAULT_IMAGE_HOST: &str = "https://images.ygoprodeck.com/images/cards";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("cardstock/", env!("CARGO_PKG_VERSION"));

pub struct YgoProDeckClient {
    base_url: String,
    client: Client,
}

impl YgoProDeckClient {
    pub fn new(base_url: String) -> Result<Self, ImageSourceError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { base_url, client })
    }

    fn image_url(&self, code: &CardCode) -> String {
        format!("{}/{}.jpg", self.base_url.trim_end_matches('/'), code)
    }
}

#[async_trait]
impl ImageSource for YgoProDeckClient {
    async fn fetch_image(&self, code: &CardCode) -> Result<Vec<u8>, ImageSourceError> {
        let url = self.image_url(code);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ImageSourceError::ResponseError {
                status: response.status(),
                code: code.clone(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_urls_follow_the_host_layout() {
        let client = YgoProDeckClient::new(DEFAULT_IMAGE_HOST.to_owned()).unwrap();

        assert_eq!(
            client.image_url(&CardCode::from("46986414")),
            "https://images.ygoprodeck.com/images/cards/46986414.jpg"
        );
    }

    #[test]
    fn trailing_slashes_do_not_double_up() {
        let client = YgoProDeckClient::new("https://cards.example/art/".to_owned()).unwrap();

        assert_eq!(
            client.image_url(&CardCode::from("123")),
            "https://cards.example/art/123.jpg"
        );
    }
}
