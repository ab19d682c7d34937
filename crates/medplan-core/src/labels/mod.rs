//! Drug label parsing and hint extraction.
//!
//! Pipeline: Label document → Flatten → Pattern scan → [`LabelHints`](crate::models::LabelHints)

mod document;
mod hints;

pub use document::*;
pub use hints::*;
