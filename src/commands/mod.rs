mod alias_overlay;
mod badge_image;
mod download_cards;

use clap::Subcommand;

pub use alias_overlay::*;
pub use badge_image::*;
pub use download_cards::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Downloads card artwork for every record in a catalog file, with an
    /// optional points badge stamped on each image.
    DownloadCards(DownloadCardsOptions),

    /// Re-applies points badges to alias images, using the points of the
    /// original card each alias maps to.
    AliasOverlay(AliasOverlayOptions),

    /// Stamps a points badge onto a single local image.
    BadgeImage(BadgeImageOptions),
}
