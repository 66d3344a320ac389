#[macro_use]
extern crate log;

pub mod chapter;
pub mod dto;
pub mod entry;
pub mod options;
pub mod prelude;
pub mod response;
pub mod title;
