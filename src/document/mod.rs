pub mod loader;
pub mod sentences;

pub use loader::{Document, load_files};
pub use sentences::split_sentences;
