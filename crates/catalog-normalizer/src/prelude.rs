pub use catalog_lib::prelude::*;

pub use crate::chapter::normalize_chapter;
pub use crate::dto::*;
pub use crate::entry::{map_status, normalize_comic};
pub use crate::options::{CoverMode, NormalizeOptions, DEFAULT_THUMBNAIL_HOST};
pub use crate::response::*;
pub use crate::title::{sanitize, Sanitized, TitlePattern};
