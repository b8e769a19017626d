use clap::Parser;

use crate::commands::Command;
use crate::image_source::DEFAULT_IMAGE_HOST;

#[derive(Debug, Parser)]
#[clap(about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Options {
    #[command(flatten)]
    pub global: Global,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Parser)]
pub struct Global {
    /// The base URL card artwork is fetched from. Card codes are appended
    /// as `{code}.jpg`.
    #[clap(
        long = "image-host",
        global(true),
        env("CARDSTOCK_IMAGE_HOST"),
        default_value = DEFAULT_IMAGE_HOST
    )]
    pub image_host: String,

    /// Sets verbosity level. Can be specified multiple times to increase the verbosity
    /// of this program.
    #[clap(long = "verbose", short, global(true), action(clap::ArgAction::Count))]
    pub verbosity: u8,
}
