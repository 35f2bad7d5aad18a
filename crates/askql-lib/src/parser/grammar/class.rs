//! `[[Category:A||B]]` and `[[Concept:C]]`.

use super::Block;
use crate::description::Description;
use crate::diagnostics::DiagnosticKind;
use crate::parser::chunks::{ALTERNATIVE, ChunkKind, ClassKind};
use crate::parser::core::ParseState;
use crate::title::valid_title;

impl<'a> ParseState<'a> {
    /// Names after the prefix, `||`-separated for categories. `+` stands for
    /// any member and adds no condition of its own.
    pub(super) fn parse_class_block(&mut self, kind: ClassKind) -> Block<'a> {
        let mut result: Option<Description> = None;
        let mut wildcard = false;

        let terminator = loop {
            let chunk = self.next_chunk();
            if chunk.kind != ChunkKind::Text {
                break chunk;
            }

            if chunk.text == "+" {
                wildcard = true;
            } else {
                match valid_title(chunk.text) {
                    Some(name) => {
                        let desc = match kind {
                            ClassKind::Category => Description::Class(name),
                            ClassKind::Concept => Description::Concept(name),
                        };
                        result = self.combine(result, Some(desc), false, chunk.span);
                    }
                    None => self.error_msg(DiagnosticKind::InvalidTitle, chunk.span, chunk.text),
                }
            }

            let next = self.next_chunk();
            if next.is(ALTERNATIVE) && kind == ClassKind::Category {
                continue;
            }
            break next;
        };

        if result.is_none() && wildcard {
            result = Some(Description::Thing);
        }
        Block::new(result, terminator)
    }
}
