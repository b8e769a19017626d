use std::borrow::Cow;
use std::path::PathBuf;

use clap::Args;
use fs_err as fs;
use log::{info, warn};

use crate::options::Global;

#[derive(Debug, Args)]
pub struct BadgeImageOptions {
    /// The path to the image to stamp.
    pub path: PathBuf,

    /// The points value to show in the badge.
    #[clap(long, allow_hyphen_values(true))]
    pub points: i64,

    /// The path to write the stamped image to.
    #[clap(long)]
    pub output: PathBuf,

    /// Multiplier on the badge font size.
    #[clap(long = "font-scale", default_value_t = badger::DEFAULT_FONT_SCALE)]
    pub font_scale: f32,
}

pub async fn badge_image(_: Global, options: BadgeImageOptions) -> anyhow::Result<()> {
    let image = fs::read(&options.path)?;

    let badged = badger::render_badge(&image, options.points, options.font_scale);

    match &badged {
        Cow::Owned(_) => info!("badge applied with {} points", options.points),
        Cow::Borrowed(_) => warn!("badge could not be applied, writing the image unchanged"),
    }

    fs::write(&options.output, badged.as_ref())?;
    info!("wrote {}", options.output.display());

    Ok(())
}
