//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters and match patterns.
//! The classifier and builder call into these; they never hardcode `` ``` ``
//! or `>` themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::ListItem;
pub use thematic_break::ThematicBreak;
