//! Normalization of whole query responses, as handed over by the fetch layer.

use catalog_lib::{
    error::{Error, Result},
    models::{CatalogEntry, ChapterEntry},
};
use serde::de::DeserializeOwned;

use crate::{
    chapter::normalize_chapter,
    dto::{ChapterListResponse, DetailsResponse, PageListResponse, SearchResponse},
    entry::normalize_comic,
    options::NormalizeOptions,
};

fn parse<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::Json(e.to_string()))
}

pub fn parse_search(body: &str) -> Result<SearchResponse> {
    parse(body)
}

pub fn parse_details(body: &str) -> Result<DetailsResponse> {
    parse(body)
}

pub fn parse_chapter_list(body: &str) -> Result<ChapterListResponse> {
    parse(body)
}

pub fn parse_page_list(body: &str) -> Result<PageListResponse> {
    parse(body)
}

pub fn normalize_search(
    response: &SearchResponse,
    options: &NormalizeOptions,
) -> Result<Vec<CatalogEntry>> {
    response
        .data
        .search_comics
        .items
        .iter()
        .map(|item| normalize_comic(&item.data, options))
        .collect()
}

pub fn normalize_details(
    response: &DetailsResponse,
    options: &NormalizeOptions,
) -> Result<CatalogEntry> {
    normalize_comic(&response.data.comic.data, options)
}

/// Chapters in the order the source lists them
pub fn normalize_chapter_list(response: &ChapterListResponse) -> Result<Vec<ChapterEntry>> {
    let chapters = response
        .data
        .chapter_list
        .iter()
        .map(|chapter| normalize_chapter(&chapter.data))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "normalized {} chapters, {} releases",
        chapters.len(),
        chapters.iter().map(ChapterEntry::release_count).sum::<usize>()
    );

    Ok(chapters)
}

pub fn page_list(response: &PageListResponse) -> Vec<String> {
    response.data.chapter_pages.data.urls().to_vec()
}
