pub use crate::error::{Error, Result};
pub use crate::models::*;
