pub mod io;
pub mod latex;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use latex::latex_to_text;
pub use models::{Block, ChecklistItem, ListStyle, ParagraphStyle};
pub use parsing::parse_markdown;
