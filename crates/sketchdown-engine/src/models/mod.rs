pub mod block;

pub use block::{Block, ChecklistItem, ListStyle, ParagraphStyle};
