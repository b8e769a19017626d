use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use log::{debug, info, warn};

use crate::catalog::{AliasMap, Catalog};
use crate::image_source::{ImageDir, ImageSource, ImageSourceError};
use crate::options::Global;
use crate::store::OutputDir;

/// Alias art carries a smaller badge than downloaded originals.
pub const ALIAS_FONT_SCALE: f32 = 0.5;

#[derive(Debug, Args)]
pub struct AliasOverlayOptions {
    /// The path to the card catalog file.
    #[clap(long = "cards", short, default_value = "cards.json")]
    pub cards: PathBuf,

    /// The path to the alias mapping file.
    #[clap(long = "alias", short, default_value = "alias.json")]
    pub alias: PathBuf,

    /// The directory containing alias images named `{code}.jpg`.
    #[clap(long = "images", short, default_value = "selected_images")]
    pub images: PathBuf,

    /// The directory processed images are written to. Defaults to the
    /// images directory with a `_processed` suffix.
    #[clap(long = "output", short)]
    pub output: Option<PathBuf>,

    /// Multiplier on the badge font size.
    #[clap(long = "font-scale", default_value_t = ALIAS_FONT_SCALE)]
    pub font_scale: f32,
}

/// `{images}` becomes `{images}_processed`, keeping the parent directory.
/// Trailing separators are dropped first so the suffix always lands on
/// the directory name itself.
fn processed_dir(images: &Path) -> PathBuf {
    let mut name = OsString::from(images.components().as_path().as_os_str());
    name.push("_processed");
    PathBuf::from(name)
}

pub async fn alias_overlay(_: Global, options: AliasOverlayOptions) -> anyhow::Result<()> {
    let catalog = Catalog::load(&options.cards)
        .with_context(|| format!("failed to load catalog {}", options.cards.display()))?;
    let aliases = AliasMap::load(&options.alias)
        .with_context(|| format!("failed to load alias map {}", options.alias.display()))?;

    let index = catalog.index();
    let source = ImageDir::new(options.images.clone());

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| processed_dir(&options.images));
    let output = OutputDir::create(&output_path).with_context(|| {
        format!(
            "failed to create output directory {}",
            output_path.display()
        )
    })?;

    info!("applying badges to aliases of {} cards", aliases.len());

    let mut processed: usize = 0;
    let mut skipped: usize = 0;
    let mut errors: usize = 0;

    for (original, alias_codes) in aliases.iter() {
        let Some(card) = index.get(original) else {
            warn!(
                "original card {} is not in the catalog, skipping {} aliases",
                original,
                alias_codes.len()
            );
            skipped += alias_codes.len();
            continue;
        };

        for alias in alias_codes {
            let bytes = match source.fetch_image(alias).await {
                Ok(bytes) => bytes,
                Err(ImageSourceError::NotFound { .. }) => {
                    warn!(
                        "no image for alias {} of {}, skipping",
                        alias,
                        card.display_name()
                    );
                    skipped += 1;
                    continue;
                }
                Err(err) => {
                    warn!("failed to read alias {}: {}", alias, err);
                    errors += 1;
                    continue;
                }
            };

            let badged = badger::render_badge(&bytes, card.points, options.font_scale);

            match output.write_image(alias, &badged) {
                Ok(path) => {
                    debug!("wrote {}", path.display());
                    processed += 1;
                }
                Err(err) => {
                    warn!("failed to write alias {}: {}", alias, err);
                    errors += 1;
                }
            }
        }
    }

    info!(
        "alias overlay complete: {} processed, {} skipped, {} errors",
        processed, skipped, errors
    );

    Ok(())
}
