use crate::error::{Error, Result};

/// Separates canonical path and source identifier in a record url
pub const URL_DELIMITER: char = '#';

/// Join canonical path and identifier into a record url.
///
/// Both parts are required and must not contain [`URL_DELIMITER`], otherwise
/// the url could not be split back into the same pair.
pub fn join_url(record: &'static str, path: &str, id: &str) -> Result<String> {
    for (field, value) in [("urlPath", path), ("id", id)] {
        if value.trim().is_empty() {
            return Err(Error::MissingField { record, field });
        }
        if value.contains(URL_DELIMITER) {
            return Err(Error::InvalidField {
                record,
                field,
                reason: format!("contains url delimiter `{URL_DELIMITER}`"),
            });
        }
    }

    Ok(format!("{path}{URL_DELIMITER}{id}"))
}

/// Split a record url back into canonical path and identifier
pub fn split_url(url: &str) -> Option<(&str, &str)> {
    url.rsplit_once(URL_DELIMITER)
        .filter(|(path, id)| !path.is_empty() && !id.is_empty())
}
