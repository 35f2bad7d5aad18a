//! `[[ ... ]]` blocks: dispatch, labels and bracket recovery.

use super::Block;
use crate::description::Description;
use crate::diagnostics::DiagnosticKind;
use crate::parser::chunks::{ASSIGN_SEP, CLOSE_LINK, Chunk, ChunkKind, PIPE, PROPERTY_SEP, Stop};
use crate::parser::core::ParseState;

/// Extra `]]` lookups after a misplaced symbol.
const RESYNC_LOOKUPS: usize = 2;

impl<'a> ParseState<'a> {
    /// Parses one block whose `[[` was just consumed.
    ///
    /// Returns the block's description and whether it restricts the
    /// namespace on its own.
    pub(super) fn parse_link_block(&mut self, open: Chunk<'a>) -> (Option<Description>, bool) {
        let first = self.read(Stop::Default, true, false);

        let block = if let Some(kind) = self.patterns.class_kind(&first) {
            tracing::trace!(?kind, "class block");
            self.parse_class_block(kind)
        } else if self.starts_property(&first) {
            tracing::trace!(name = first.text.trim(), "property block");
            self.parse_property_block(first)
        } else {
            tracing::trace!("article block");
            self.parse_article_block(first)
        };

        let has_ns = block.has_ns;
        let description = self.finish_link_block(open, block);
        (description, has_ns)
    }

    /// A name followed by `::` or `:=`, unless escaped with a leading `:`.
    fn starts_property(&mut self, first: &Chunk<'a>) -> bool {
        if first.kind != ChunkKind::Text || first.text.trim_start().starts_with(':') {
            return false;
        }
        let next = self.peek_chunk();
        next.is(PROPERTY_SEP) || next.is(ASSIGN_SEP)
    }

    /// Records a missing result, reads a `|label`, and resynchronizes on the
    /// closing `]]` when the block ended on anything else.
    fn finish_link_block(&mut self, open: Chunk<'a>, block: Block<'a>) -> Option<Description> {
        let mut terminator = block.terminator;

        if block.description.is_none() {
            let span = open.span.cover(terminator.span);
            self.error(DiagnosticKind::BadQueryAtom, span);
        }

        if terminator.is(PIPE) {
            let label = self.read(Stop::Label, true, false);
            if label.kind == ChunkKind::Text {
                self.label.push_str(label.text);
                terminator = self.read(Stop::Label, true, true);
            } else {
                terminator = label;
            }
        }

        if terminator.is(CLOSE_LINK) {
            return block.description;
        }

        if terminator.is_end() {
            let span = open.span.cover(terminator.span);
            self.error(DiagnosticKind::NoClosingBrackets, span);
            return block.description;
        }

        self.error_msg(DiagnosticKind::MisplacedSymbol, terminator.span, terminator.text);
        let mut closed = false;
        for _ in 0..RESYNC_LOOKUPS {
            let chunk = self.read(Stop::Label, true, true);
            if chunk.is(CLOSE_LINK) {
                closed = true;
                break;
            }
            if chunk.is_end() {
                break;
            }
        }
        if !closed {
            let span = open.span.cover(self.eof_range());
            self.error(DiagnosticKind::NoClosingBrackets, span);
        }

        block.description
    }
}
