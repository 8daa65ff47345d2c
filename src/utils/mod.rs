pub mod ids;
pub mod text;

pub use text::{extract_text, ExtractText};
