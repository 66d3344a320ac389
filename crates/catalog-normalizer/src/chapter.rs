use catalog_lib::{
    error::{Error, Result},
    models::{join_url, ChapterEntry, UNKNOWN_SCANLATOR},
};

use crate::dto::RawChapter;

/// Map a raw chapter, and each of its alternate releases, into a chapter entry
pub fn normalize_chapter(raw: &RawChapter) -> Result<ChapterEntry> {
    let url = join_url("chapter", &raw.url_path, &raw.id)?;
    if raw.display_name.trim().is_empty() {
        return Err(Error::MissingField {
            record: "chapter",
            field: "dname",
        });
    }

    let mut name = raw.display_name.clone();
    if let Some(title) = raw.title.as_deref().filter(|title| !title.trim().is_empty()) {
        name.push_str(": ");
        name.push_str(title);
    }

    // uploader, then source title, blank counts as absent
    let scanlator = [
        raw.user_node.as_ref().map(|user| user.data.name.as_str()),
        raw.src_title.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|scanlator| !scanlator.trim().is_empty())
    .unwrap_or(UNKNOWN_SCANLATOR)
    .to_string();

    let duplicates = raw
        .dup_chapters
        .iter()
        .map(|dup| normalize_chapter(&dup.data))
        .collect::<Result<Vec<_>>>()?;

    Ok(ChapterEntry {
        url,
        name,
        date_upload: raw.date_modify.or(raw.date_create).unwrap_or(0),
        scanlator,
        duplicates,
    })
}
