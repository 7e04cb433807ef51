//! # Markdown Block Parsing
//!
//! Single-pass, line-oriented conversion of markdown-ish text into the
//! editor's block model.
//!
//! ## Parsing Phases
//!
//! 1. **Line classification** (`classify`): each trimmed line is classified
//!    into a [`classify::LineKind`] containing only local facts.
//! 2. **Block construction** (`builder`): a [`BlockBuilder`] folds classified
//!    lines into blocks, carrying the open-run state (code fence, list,
//!    checklist, ordered list, blockquote) across lines.
//!
//! A whole-input fast path short-circuits both phases when the entire input
//! is a single fenced code block.
//!
//! ## Modules
//!
//! - **`kinds`**: block-specific types that own their delimiters and patterns
//! - **`classify`**: `LineClassifier` produces a `LineClass` per line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//! - **`inline`**: inline markup rewriting for paragraph text
//!
//! ## Key Invariants
//!
//! - Parsing never fails: malformed constructs degrade to paragraphs and an
//!   unterminated fence flushes at end of input rather than dropping text.
//! - A run of contiguous same-kind lines collapses into one block; any line
//!   that does not continue a run closes it, blank lines included.
//! - Fenced code blocks are raw zones: no classification applies inside.

pub mod builder;
pub mod classify;
pub mod inline;
pub mod kinds;

use crate::models::Block;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineKind};
pub use inline::rewrite_inline;

use kinds::CodeFence;

/// Parses markdown text into an ordered list of [`Block`]s.
///
/// Pure and infallible: any input produces a (possibly empty) block list.
/// Empty or whitespace-only input yields no blocks.
pub fn parse_markdown(markdown: &str) -> Vec<Block> {
    let trimmed = markdown.trim();
    if trimmed.is_empty() {
        log::warn!("no markdown content provided");
        return vec![];
    }

    // Whole-input fast path: the entire content is one fenced code block.
    if let Some((language, code)) = CodeFence::whole_input(trimmed) {
        return vec![Block::Code {
            code,
            language: language.to_string(),
        }];
    }

    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in markdown.split('\n') {
        builder.push(&classifier.classify(line));
    }

    builder.finish()
}
