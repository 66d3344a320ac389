//! Wire model of the upstream comic API.
//!
//! Field names follow the GraphQL payload. Required fields are plain values so
//! a payload missing one fails to decode; everything else is optional.

use serde::{Deserialize, Serialize};

/// `{ "data": ... }` wrapper used by every node in the payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Data<T> {
    pub data: T,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

pub type SearchResponse = Data<SearchComics>;
pub type DetailsResponse = Data<ComicNode>;
pub type ChapterListResponse = Data<ChapterList>;
pub type PageListResponse = Data<ChapterPages>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchComics {
    #[serde(rename = "get_searchComic")]
    pub search_comics: Items<Data<RawComic>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComicNode {
    #[serde(rename = "get_comicNode")]
    pub comic: Data<RawComic>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChapterList {
    #[serde(rename = "get_comicChapterList")]
    pub chapter_list: Vec<Data<RawChapter>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChapterPages {
    #[serde(rename = "get_chapterNode")]
    pub chapter_pages: Data<ImageFiles>,
}

/// A comic as returned by search and details queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComic {
    pub id: String,
    pub name: String,
    pub alt_names: Option<Vec<String>>,
    pub authors: Option<Vec<String>>,
    pub artists: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub original_status: Option<String>,
    pub upload_status: Option<String>,
    pub summary: Option<String>,
    pub extra_info: Option<String>,
    #[serde(rename = "urlCoverOri")]
    pub cover: Option<String>,
    pub url_path: String,
    #[serde(rename = "max_chapterNode")]
    pub latest_chapter: Option<Data<ImageFiles>>,
    #[serde(rename = "first_chapterNode")]
    pub first_chapter: Option<Data<ImageFiles>>,
}

/// A chapter, with alternate releases of the same chapter nested in `dup_chapters`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChapter {
    pub id: String,
    #[serde(rename = "dname")]
    pub display_name: String,
    pub title: Option<String>,
    pub date_create: Option<i64>,
    pub date_modify: Option<i64>,
    pub url_path: String,
    pub src_title: Option<String>,
    pub user_node: Option<Data<Name>>,
    #[serde(default)]
    pub dup_chapters: Vec<Data<RawChapter>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Name {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFiles {
    pub image_file: Option<UrlList>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlList {
    #[serde(default)]
    pub url_list: Vec<String>,
}

impl ImageFiles {
    pub fn urls(&self) -> &[String] {
        self.image_file
            .as_ref()
            .map(|file| file.url_list.as_slice())
            .unwrap_or_default()
    }

    pub fn first_url(&self) -> Option<&str> {
        self.urls().first().map(String::as_str)
    }
}

impl From<Vec<String>> for ImageFiles {
    fn from(url_list: Vec<String>) -> Self {
        Self {
            image_file: Some(UrlList { url_list }),
        }
    }
}
