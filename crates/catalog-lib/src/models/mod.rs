pub mod catalog_entry;
pub use catalog_entry::*;

pub mod chapter_entry;
pub use chapter_entry::*;

pub mod status;
pub use status::*;

pub mod input;
pub use input::*;

pub mod url;
pub use url::*;
