//! CSS engine: structural scanner, selector normalization, line resolution.

pub mod scanner;
pub mod selector;
pub mod preprocess;
pub mod lines;
pub mod parser;
pub mod stylesheet;

pub use lines::LineIndex;
pub use parser::parse;
pub use selector::normalize_selector;
pub use stylesheet::Stylesheet;
