use catalog_lib::{
    error::{Error, Result},
    models::{join_url, CatalogEntry, Status},
};
use scraper::{Html, Node};

use crate::{
    dto::RawComic,
    options::{CoverMode, NormalizeOptions},
    title::sanitize,
};

const MATURE_GENRE: &str = "hentai";
const LONG_STRIP_GENRE: &str = "webtoon";

/// Map a raw comic into a catalog entry.
///
/// Fails only when identifier, name or canonical path is missing.
pub fn normalize_comic(raw: &RawComic, options: &NormalizeOptions) -> Result<CatalogEntry> {
    let url = join_url("comic", &raw.url_path, &raw.id)?;
    if raw.name.trim().is_empty() {
        return Err(Error::MissingField {
            record: "comic",
            field: "name",
        });
    }

    let sanitized = sanitize(
        &raw.name,
        options.shorten_title,
        &options.custom_title_pattern,
    );
    debug!(
        "normalized {url}: {:?} -> {:?}, removed {:?}",
        raw.name, sanitized.title, sanitized.removed
    );

    Ok(CatalogEntry {
        url,
        title: sanitized.title,
        thumbnail_url: resolve_cover(raw, options),
        author: raw.authors.as_ref().map(|authors| authors.join(", ")),
        artist: raw.artists.as_ref().map(|artists| artists.join(", ")),
        description: build_description(raw, &sanitized.removed),
        genre: raw.genres.as_ref().map(|genres| {
            genres
                .iter()
                .map(|genre| title_case(&genre.replace('_', " ")))
                .collect::<Vec<_>>()
                .join(", ")
        }),
        status: map_status(raw.original_status.as_deref(), raw.upload_status.as_deref()),
        initialized: true,
    })
}

/// Original status wins over upload status. A completed story that is still
/// being uploaded is [`Status::PublishingFinished`].
pub fn map_status(original: Option<&str>, upload: Option<&str>) -> Status {
    match original.or(upload) {
        Some("ongoing") => Status::Ongoing,
        Some("completed") if upload == Some("ongoing") => Status::PublishingFinished,
        Some("completed") => Status::Completed,
        Some("hiatus") => Status::OnHiatus,
        Some("cancelled") => Status::Cancelled,
        _ => Status::Unknown,
    }
}

fn resolve_cover(raw: &RawComic, options: &NormalizeOptions) -> Option<String> {
    let cover_url = raw.cover.as_deref().and_then(|cover| {
        if cover.starts_with("http") {
            Some(cover.to_string())
        } else if cover.starts_with('/') {
            Some(format!("https://{}{cover}", options.thumbnail_host))
        } else {
            None
        }
    });

    if options.cover_mode == CoverMode::Off || !uses_page_as_cover(raw.genres.as_deref()) {
        return cover_url;
    }

    let chapter = match options.cover_mode {
        CoverMode::First => raw.first_chapter.as_ref(),
        _ => raw.latest_chapter.as_ref(),
    };

    chapter
        .and_then(|chapter| chapter.data.first_url())
        .map(str::to_string)
        .or(cover_url)
}

// covers of mature titles are blurred upstream, except for long strips
fn uses_page_as_cover(genres: Option<&[String]>) -> bool {
    let genres = genres.unwrap_or_default();
    genres.iter().any(|genre| genre == MATURE_GENRE)
        && !genres.iter().any(|genre| genre == LONG_STRIP_GENRE)
}

fn build_description(raw: &RawComic, removed: &[String]) -> String {
    let mut description = String::new();

    if let Some(summary) = &raw.summary {
        description.push_str(html_to_text(summary).trim());
        description.push_str("\n\n");
    }

    if let Some(extra_info) = raw
        .extra_info
        .as_deref()
        .filter(|extra_info| !extra_info.trim().is_empty())
    {
        description.push_str("\n\n----\n#### **Extra Info**\n");
        description.push_str(html_to_text(extra_info).trim());
        description.push_str("\n\n");
    }

    if let Some(alt_names) = raw.alt_names.as_ref().filter(|names| !names.is_empty()) {
        description.push_str("\n\n----\n#### **Alternative Titles**\n");
        description.push_str(
            &alt_names
                .iter()
                .map(|name| format!("- {}", name.trim()))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    if !removed.is_empty() {
        description.push_str("\n\n----\n#### **Removed from title**\n");
        for fragment in removed {
            description.push_str(&format!("- `{fragment}`\n"));
        }
    }

    description.trim().to_string()
}

/// Reduce rich text to the concatenation of its text nodes, `<br>` as newline
fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);

    let mut text = String::with_capacity(html.len());
    for node in fragment.root_element().descendants() {
        match node.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(e) if e.name() == "br" => text.push('\n'),
            _ => {}
        }
    }

    text
}

fn title_case(label: &str) -> String {
    let mut result = String::with_capacity(label.len());
    let mut capitalize = true;
    for c in label.chars() {
        if capitalize {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
        capitalize = c.is_whitespace();
    }

    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dto::{Data, ImageFiles},
        title::TitlePattern,
    };

    fn comic() -> RawComic {
        RawComic {
            id: "75577".to_string(),
            name: "Solo Leveling (Manhwa) [Official]".to_string(),
            url_path: "/title/75577-en-solo-leveling".to_string(),
            ..Default::default()
        }
    }

    fn pages(urls: &[&str]) -> Option<Data<ImageFiles>> {
        Some(Data {
            data: urls
                .iter()
                .map(|url| url.to_string())
                .collect::<Vec<_>>()
                .into(),
        })
    }

    #[test]
    fn test_map_status() {
        assert_eq!(map_status(Some("completed"), Some("ongoing")), Status::PublishingFinished);
        assert_eq!(map_status(Some("completed"), None), Status::Completed);
        assert_eq!(map_status(Some("completed"), Some("completed")), Status::Completed);
        assert_eq!(map_status(None, None), Status::Unknown);
        assert_eq!(map_status(Some("ongoing"), Some("completed")), Status::Ongoing);
        assert_eq!(map_status(None, Some("hiatus")), Status::OnHiatus);
        assert_eq!(map_status(Some("cancelled"), None), Status::Cancelled);
        assert_eq!(map_status(Some("pending"), Some("ongoing")), Status::Unknown);
    }

    #[test]
    fn test_map_status_upload_fallback_is_never_publishing_finished() {
        assert_eq!(map_status(None, Some("completed")), Status::Completed);
        assert_eq!(map_status(None, Some("ongoing")), Status::Ongoing);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("slice of life"), "Slice Of Life");
        assert_eq!(title_case("SCI-FI"), "Sci-fi");
        assert_eq!(title_case("gender  bender"), "Gender  Bender");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_genre_normalized_and_joined() {
        let raw = RawComic {
            genres: Some(vec![
                "shounen_ai".to_string(),
                "ACTION".to_string(),
                "slice_of_life".to_string(),
            ]),
            ..comic()
        };

        let entry = normalize_comic(&raw, &NormalizeOptions::default()).unwrap();

        assert_eq!(entry.genre.as_deref(), Some("Shounen Ai, Action, Slice Of Life"));
    }

    #[test]
    fn test_people_joined() {
        let raw = RawComic {
            authors: Some(vec!["Chugong".to_string(), "h-goon".to_string()]),
            artists: Some(vec![]),
            ..comic()
        };

        let entry = normalize_comic(&raw, &NormalizeOptions::default()).unwrap();

        assert_eq!(entry.author.as_deref(), Some("Chugong, h-goon"));
        assert_eq!(entry.artist.as_deref(), Some(""));
        assert_eq!(entry.genre, None);
    }

    #[test]
    fn test_url_and_title() {
        let options = NormalizeOptions {
            shorten_title: true,
            ..Default::default()
        };

        let entry = normalize_comic(&comic(), &options).unwrap();

        assert_eq!(entry.url, "/title/75577-en-solo-leveling#75577");
        assert_eq!(entry.title, "Solo Leveling");
        assert!(entry.initialized);

        let entry = normalize_comic(&comic(), &NormalizeOptions::default()).unwrap();
        assert_eq!(entry.title, "Solo Leveling (Manhwa) [Official]");
    }

    #[test]
    fn test_title_can_become_empty() {
        let raw = RawComic {
            name: "[Oneshot]".to_string(),
            ..comic()
        };
        let options = NormalizeOptions {
            shorten_title: true,
            ..Default::default()
        };

        let entry = normalize_comic(&raw, &options).unwrap();

        assert_eq!(entry.title, "");
        assert_eq!(entry.description, "----\n#### **Removed from title**\n- `[Oneshot]`");
    }

    #[test]
    fn test_missing_required_fields() {
        let raw = RawComic {
            name: " ".to_string(),
            ..comic()
        };
        assert_eq!(
            normalize_comic(&raw, &NormalizeOptions::default()),
            Err(Error::MissingField {
                record: "comic",
                field: "name"
            })
        );

        let raw = RawComic {
            id: String::new(),
            ..comic()
        };
        assert_eq!(
            normalize_comic(&raw, &NormalizeOptions::default()),
            Err(Error::MissingField {
                record: "comic",
                field: "id"
            })
        );
    }

    #[test]
    fn test_cover_absolute_relative_and_unusable() {
        let options = NormalizeOptions::default();

        let raw = RawComic {
            cover: Some("https://xfs-n01.mpcdn.org/thumb/75577.jpg".to_string()),
            ..comic()
        };
        assert_eq!(
            resolve_cover(&raw, &options).as_deref(),
            Some("https://xfs-n01.mpcdn.org/thumb/75577.jpg")
        );

        let raw = RawComic {
            cover: Some("/thumb/75577.jpg".to_string()),
            ..comic()
        };
        assert_eq!(
            resolve_cover(&raw, &options).as_deref(),
            Some("https://mangapark.net/thumb/75577.jpg")
        );

        let options = NormalizeOptions {
            thumbnail_host: "127.0.0.1:8080".to_string(),
            ..Default::default()
        };
        assert_eq!(
            resolve_cover(&raw, &options).as_deref(),
            Some("https://127.0.0.1:8080/thumb/75577.jpg")
        );

        let raw = RawComic {
            cover: Some("thumb/75577.jpg".to_string()),
            ..comic()
        };
        assert_eq!(resolve_cover(&raw, &options), None);
    }

    #[test]
    fn test_cover_replaced_by_first_page_for_mature_titles() {
        let raw = RawComic {
            genres: Some(vec!["hentai".to_string()]),
            cover: Some("https://cdn.example/cover.jpg".to_string()),
            first_chapter: pages(&["a.jpg", "b.jpg"]),
            latest_chapter: pages(&["z.jpg"]),
            ..comic()
        };

        let first = NormalizeOptions {
            cover_mode: CoverMode::First,
            ..Default::default()
        };
        let latest = NormalizeOptions {
            cover_mode: CoverMode::Latest,
            ..Default::default()
        };

        assert_eq!(normalize_comic(&raw, &first).unwrap().thumbnail_url.as_deref(), Some("a.jpg"));
        assert_eq!(normalize_comic(&raw, &latest).unwrap().thumbnail_url.as_deref(), Some("z.jpg"));
        assert_eq!(
            normalize_comic(&raw, &NormalizeOptions::default()).unwrap().thumbnail_url.as_deref(),
            Some("https://cdn.example/cover.jpg")
        );
    }

    #[test]
    fn test_cover_not_replaced_for_long_strips() {
        let raw = RawComic {
            genres: Some(vec!["hentai".to_string(), "webtoon".to_string()]),
            cover: Some("https://cdn.example/cover.jpg".to_string()),
            first_chapter: pages(&["a.jpg"]),
            ..comic()
        };
        let options = NormalizeOptions {
            cover_mode: CoverMode::First,
            ..Default::default()
        };

        let entry = normalize_comic(&raw, &options).unwrap();

        assert_eq!(entry.thumbnail_url.as_deref(), Some("https://cdn.example/cover.jpg"));
    }

    #[test]
    fn test_cover_falls_back_when_chapter_has_no_pages() {
        let raw = RawComic {
            genres: Some(vec!["hentai".to_string()]),
            cover: Some("/thumb/1.jpg".to_string()),
            first_chapter: pages(&[]),
            latest_chapter: None,
            ..comic()
        };

        for cover_mode in [CoverMode::First, CoverMode::Latest] {
            let options = NormalizeOptions {
                cover_mode,
                ..Default::default()
            };
            assert_eq!(
                resolve_cover(&raw, &options).as_deref(),
                Some("https://mangapark.net/thumb/1.jpg")
            );
        }
    }

    #[test]
    fn test_description_sections_in_order() {
        let raw = RawComic {
            summary: Some("<p>In a world where <b>hunters</b> fight.</p>".to_string()),
            extra_info: Some("Official English by <i>Yen Press</i>".to_string()),
            alt_names: Some(vec![" 나 혼자만 레벨업 ".to_string(), "Only I Level Up".to_string()]),
            ..comic()
        };

        let entry = normalize_comic(&raw, &NormalizeOptions::default()).unwrap();

        assert_eq!(
            entry.description,
            "In a world where hunters fight.\n\n\n\n\
             ----\n#### **Extra Info**\nOfficial English by Yen Press\n\n\n\n\
             ----\n#### **Alternative Titles**\n- 나 혼자만 레벨업\n- Only I Level Up"
        );
    }

    #[test]
    fn test_description_skips_absent_and_blank_sections() {
        let raw = RawComic {
            summary: Some("Summary".to_string()),
            extra_info: Some("  \n ".to_string()),
            alt_names: Some(vec![]),
            ..comic()
        };

        let entry = normalize_comic(&raw, &NormalizeOptions::default()).unwrap();

        assert_eq!(entry.description, "Summary");

        let entry = normalize_comic(&comic(), &NormalizeOptions::default()).unwrap();
        assert_eq!(entry.description, "");
    }

    #[test]
    fn test_description_lists_removed_fragments() {
        let raw = RawComic {
            summary: Some("Summary".to_string()),
            ..comic()
        };
        let options = NormalizeOptions {
            shorten_title: true,
            custom_title_pattern: TitlePattern::new("Leveling").unwrap(),
            ..Default::default()
        };

        let entry = normalize_comic(&raw, &options).unwrap();

        assert_eq!(entry.title, "Solo");
        assert_eq!(
            entry.description,
            "Summary\n\n\n\n----\n#### **Removed from title**\n\
             - `(Manhwa)`\n- `[Official]`\n- `Leveling`"
        );
    }

    #[test]
    fn test_description_lists_custom_matches_without_shortening() {
        let options = NormalizeOptions {
            custom_title_pattern: TitlePattern::new(r"\[Official\]").unwrap(),
            ..Default::default()
        };

        let entry = normalize_comic(&comic(), &options).unwrap();

        assert_eq!(entry.title, "Solo Leveling (Manhwa)");
        assert_eq!(entry.description, "----\n#### **Removed from title**\n- `[Official]`");
    }

    #[test]
    fn test_html_to_text() {
        assert_eq!(html_to_text("a<br>b &amp; <em>c</em>"), "a\nb & c");
        assert_eq!(html_to_text("plain"), "plain");
        assert_eq!(html_to_text(""), "");
    }
}
