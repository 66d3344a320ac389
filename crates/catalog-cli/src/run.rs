use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use catalog_normalizer::{options::NormalizeOptions, response};
use serde::Serialize;
use tokio::io::AsyncReadExt;

use crate::Command;

pub async fn run(command: Command, options: &NormalizeOptions) -> Result<()> {
    match command {
        Command::Details { file } => {
            let payload = response::parse_details(&read_input(file).await?)?;
            print(&response::normalize_details(&payload, options)?)
        }
        Command::Search { file } => {
            let payload = response::parse_search(&read_input(file).await?)?;
            print(&response::normalize_search(&payload, options)?)
        }
        Command::Chapters { file } => {
            let payload = response::parse_chapter_list(&read_input(file).await?)?;
            print(&response::normalize_chapter_list(&payload)?)
        }
        Command::Pages { file } => {
            let payload = response::parse_page_list(&read_input(file).await?)?;
            print(&response::page_list(&payload))
        }
        Command::Preferences => print(&options.preferences()),
    }
}

// payload from file, or stdin when no file is given
async fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => read_file(&path).await,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
