use std::path::Path;

use anyhow::{Context, Result};
use catalog_lib::models::Input;
use catalog_normalizer::{options::NormalizeOptions, title::TitlePattern};

use crate::Opts;

/// Build normalize options from the preferences file, then command line flags
pub async fn load(opts: &Opts) -> Result<NormalizeOptions> {
    let mut options = match &opts.preferences {
        Some(path) => read_preferences(path).await?,
        None => NormalizeOptions::default(),
    };

    if opts.shorten_title {
        options.shorten_title = true;
    }
    if let Some(cover_mode) = opts.cover_mode {
        options.cover_mode = cover_mode;
    }
    if let Some(pattern) = &opts.title_pattern {
        options.custom_title_pattern = TitlePattern::new(pattern)?;
    }
    if let Some(host) = &opts.thumbnail_host {
        options.thumbnail_host = host.clone();
    }

    Ok(options)
}

async fn read_preferences(path: &Path) -> Result<NormalizeOptions> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read preferences {}", path.display()))?;
    let preferences: Vec<Input> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse preferences {}", path.display()))?;

    info!("loaded {} preferences from {}", preferences.len(), path.display());

    Ok(NormalizeOptions::from_preferences(&preferences)?)
}
