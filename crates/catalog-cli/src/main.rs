#[macro_use]
extern crate log;

mod config;
mod run;

use std::path::PathBuf;

use catalog_normalizer::options::CoverMode;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(version, about = "Normalize raw comic API payloads into catalog entries")]
struct Opts {
    /// Strip bracketed annotations from titles
    #[clap(long)]
    shorten_title: bool,
    /// Chapter page used as cover of mature titles: off, first or latest
    #[clap(long)]
    cover_mode: Option<CoverMode>,
    /// Pattern removed from titles after shortening
    #[clap(long)]
    title_pattern: Option<String>,
    /// Host prefixed to root-relative cover paths
    #[clap(long)]
    thumbnail_host: Option<String>,
    /// JSON list of source preferences, flags take precedence
    #[clap(short, long)]
    preferences: Option<PathBuf>,
    #[clap(subcommand)]
    subcmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a comic details response
    Details { file: Option<PathBuf> },
    /// Normalize a search response
    Search { file: Option<PathBuf> },
    /// Normalize a chapter list response
    Chapters { file: Option<PathBuf> },
    /// Extract page urls from a chapter pages response
    Pages { file: Option<PathBuf> },
    /// Print the effective preferences
    Preferences,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts: Opts = Opts::parse();

    let options = config::load(&opts).await?;
    debug!("{options:?}");

    run::run(opts.subcmd, &options).await
}
