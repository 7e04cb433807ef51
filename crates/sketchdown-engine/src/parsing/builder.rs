use crate::models::{Block, ChecklistItem, ListStyle, ParagraphStyle};

use super::{
    classify::{LineClass, LineKind},
    inline::rewrite_inline,
    kinds::ThematicBreak,
};

/// An open code fence accumulating verbatim lines.
#[derive(Debug)]
struct FenceRun {
    language: String,
    lines: Vec<String>,
}

/// The one non-fence run that may be accumulating lines.
///
/// Runs are opened on their first item, so an open run is never empty and
/// every emitted `List`/`Checklist` block has at least one item.
#[derive(Debug)]
enum OpenRun {
    None,
    Bulleted(Vec<String>),
    Ordered(Vec<String>),
    Checklist(Vec<ChecklistItem>),
    Quote(Vec<String>),
}

/// State machine that folds classified lines into blocks.
///
/// At most the fence and one [`OpenRun`] are open at once. Opening a fence
/// deliberately leaves the other run untouched (the fence delimiter is an
/// unconditional toggle), so a fence that opens and closes mid-run emits its
/// `Code` block before the surrounding run flushes.
pub struct BlockBuilder {
    fence: Option<FenceRun>,
    run: OpenRun,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            fence: None,
            run: OpenRun::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, lc: &LineClass) {
        // While a fence is open every line belongs to it, blank lines included.
        if self.fence.is_some() {
            self.consume_fence_line(lc);
            return;
        }

        if let LineKind::Fence { language } = &lc.kind {
            self.fence = Some(FenceRun {
                language: language.clone(),
                lines: vec![],
            });
            return;
        }

        // Any line that does not continue an open blockquote closes it before
        // the line is evaluated further. This includes blank lines.
        if !matches!(lc.kind, LineKind::Quote { .. }) && matches!(self.run, OpenRun::Quote(_)) {
            self.flush_run();
        }

        match &lc.kind {
            // Handled above.
            LineKind::Fence { .. } => {}

            LineKind::Blank => self.flush_run(),

            LineKind::Quote { rest } => {
                if !matches!(self.run, OpenRun::Quote(_)) {
                    self.flush_run();
                    self.run = OpenRun::Quote(vec![]);
                }
                if let OpenRun::Quote(lines) = &mut self.run {
                    lines.push(rest.clone());
                }
            }

            LineKind::Heading { level, text } => {
                self.flush_run();
                self.out.push(Block::Header {
                    text: text.clone(),
                    level: *level,
                });
            }

            LineKind::Checklist { text, checked } => {
                if !matches!(self.run, OpenRun::Checklist(_)) {
                    self.flush_run();
                    self.run = OpenRun::Checklist(vec![]);
                }
                if let OpenRun::Checklist(items) = &mut self.run {
                    items.push(ChecklistItem::new(text.clone(), *checked));
                }
            }

            LineKind::Bullet { text } => {
                if !matches!(self.run, OpenRun::Bulleted(_)) {
                    self.flush_run();
                    self.run = OpenRun::Bulleted(vec![]);
                }
                if let OpenRun::Bulleted(items) = &mut self.run {
                    items.push(text.clone());
                }
            }

            LineKind::Ordered { text } => {
                if !matches!(self.run, OpenRun::Ordered(_)) {
                    self.flush_run();
                    self.run = OpenRun::Ordered(vec![]);
                }
                if let OpenRun::Ordered(items) = &mut self.run {
                    items.push(text.clone());
                }
            }

            LineKind::Break => {
                self.flush_run();
                self.out.push(Block::Paragraph {
                    text: ThematicBreak::TEXT.to_string(),
                    style: ParagraphStyle::HorizontalRule,
                });
            }

            LineKind::Text => {
                self.flush_run();
                self.out.push(Block::Paragraph {
                    text: rewrite_inline(&lc.text),
                    style: ParagraphStyle::Normal,
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush. An open run always predates an open fence (the fence
        // swallows every later line), so the run flushes first to keep
        // blocks in line order.
        self.flush_run();
        if let Some(fence) = self.fence.take() {
            // Unterminated fence: emit with whatever was buffered.
            self.out.push(Self::code_block(fence));
        }
        self.out
    }

    fn consume_fence_line(&mut self, lc: &LineClass) {
        if matches!(lc.kind, LineKind::Fence { .. }) {
            if let Some(fence) = self.fence.take() {
                self.out.push(Self::code_block(fence));
            }
        } else if let Some(fence) = self.fence.as_mut() {
            fence.lines.push(lc.text.clone());
        }
    }

    fn flush_run(&mut self) {
        match std::mem::replace(&mut self.run, OpenRun::None) {
            OpenRun::None => {}
            OpenRun::Bulleted(items) => self.out.push(Block::List {
                style: ListStyle::Unordered,
                items,
            }),
            OpenRun::Ordered(items) => self.out.push(Block::List {
                style: ListStyle::Ordered,
                items,
            }),
            OpenRun::Checklist(items) => self.out.push(Block::Checklist { items }),
            OpenRun::Quote(lines) => self.out.push(Block::Paragraph {
                text: lines.join("\n"),
                style: ParagraphStyle::Blockquote,
            }),
        }
    }

    fn code_block(fence: FenceRun) -> Block {
        Block::Code {
            code: fence.lines.join("\n"),
            language: fence.language,
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
