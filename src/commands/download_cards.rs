use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use log::{info, warn};

use crate::catalog::{Card, CardCode, Catalog};
use crate::image_source::{ImageSource, YgoProDeckClient};
use crate::options::Global;
use crate::store::OutputDir;

#[derive(Debug, Args)]
pub struct DownloadCardsOptions {
    /// The path to the card catalog file.
    #[clap(default_value = "cards.json")]
    pub cards: PathBuf,

    /// The directory to download card images into.
    #[clap(long = "output", short, default_value = "downloaded_cards")]
    pub output: PathBuf,

    /// Seconds to wait between downloads, to stay polite to the image
    /// host.
    #[clap(long = "delay", short, default_value_t = 0.1)]
    pub delay: f64,

    /// Stamp each downloaded image with the card's points badge.
    #[clap(long)]
    pub badge: bool,
}

/// A code must be present and non-blank to form a fetch URL.
fn downloadable_code(card: &Card) -> Option<&CardCode> {
    card.code.as_ref().filter(|code| !code.is_empty())
}

pub async fn download_cards(global: Global, options: DownloadCardsOptions) -> anyhow::Result<()> {
    let catalog = Catalog::load(&options.cards)
        .with_context(|| format!("failed to load catalog {}", options.cards.display()))?;

    let source = YgoProDeckClient::new(global.image_host)?;
    let output = OutputDir::create(&options.output).with_context(|| {
        format!(
            "failed to create output directory {}",
            options.output.display()
        )
    })?;

    let total = catalog.cards().len();
    info!("downloading {} cards to {}", total, options.output.display());

    let mut downloaded: usize = 0;
    let mut failed: usize = 0;

    for (index, card) in catalog.cards().iter().enumerate() {
        let Some(code) = downloadable_code(card) else {
            warn!("skipping {}: no code in catalog", card.display_name());
            failed += 1;
            continue;
        };

        match source.fetch_image(code).await {
            Ok(bytes) => {
                let bytes = if options.badge {
                    badger::render_badge(&bytes, card.points, badger::DEFAULT_FONT_SCALE)
                        .into_owned()
                } else {
                    bytes
                };

                match output.write_image(code, &bytes) {
                    Ok(path) => {
                        info!("downloaded {} to {}", card.display_name(), path.display());
                        downloaded += 1;
                    }
                    Err(err) => {
                        warn!("failed to write {}: {}", card.display_name(), err);
                        failed += 1;
                    }
                }
            }
            Err(err) => {
                warn!("failed to download {}: {}", card.display_name(), err);
                failed += 1;
            }
        }

        if options.delay > 0.0 && index + 1 < total {
            tokio::time::sleep(Duration::from_secs_f64(options.delay)).await;
        }
    }

    info!(
        "download complete: {} downloaded, {} failed",
        downloaded, failed
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_codes_are_treated_as_missing() {
        let coded: Card = serde_json::from_str(r#"{"code": "123"}"#).unwrap();
        let blank: Card = serde_json::from_str(r#"{"code": ""}"#).unwrap();
        let absent: Card = serde_json::from_str(r#"{"name": "left blank"}"#).unwrap();

        assert!(downloadable_code(&coded).is_some());
        assert!(downloadable_code(&blank).is_none());
        assert!(downloadable_code(&absent).is_none());
    }
}
