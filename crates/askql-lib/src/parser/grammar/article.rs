//! `[[Page]]`, `[[Talk:Page||Other]]` and namespace restrictions `[[Help:+]]`.

use rowan::TextRange;

use super::Block;
use crate::description::{Comparator, DataValue, Description, ValueDescription};
use crate::diagnostics::DiagnosticKind;
use crate::namespaces::MAIN;
use crate::parser::chunks::{ALTERNATIVE, CLOSE_SUBQUERY, Chunk, ChunkKind, OPEN_SUBQUERY, Stop};
use crate::parser::core::ParseState;
use crate::resolve::parse_page;

impl<'a> ParseState<'a> {
    pub(super) fn parse_article_block(&mut self, first: Chunk<'a>) -> Block<'a> {
        if first.is(OPEN_SUBQUERY) {
            self.error(DiagnosticKind::MisplacedSubquery, first.span);
            self.discard_subquery();
            return Block::new(None, self.next_chunk());
        }
        if first.ends_block() || first.is(ALTERNATIVE) {
            return Block::new(None, first);
        }

        let mut result: Option<Description> = None;
        let mut has_ns = false;
        let (mut value, mut span) = self.article_text(first);

        let terminator = loop {
            if !value.trim().is_empty() {
                let atom = self.parse_article_atom(&value, span);
                if atom.is_some() {
                    has_ns = true;
                }
                result = self.combine(result, atom, false, span);
            }

            let next = self.next_chunk();
            if !next.is(ALTERNATIVE) {
                break next;
            }

            let more = self.read(Stop::Value, false, false);
            if more.kind == ChunkKind::Text {
                self.read(Stop::Value, true, false);
                value = more.text.to_string();
                span = more.span;
            } else {
                value.clear();
            }
        };

        Block::new(result, terminator).with_ns(has_ns)
    }

    /// The first value: the chunk plus anything up to the next link or pipe
    /// token, so `[[:Foo::Bar]]` names the page `Foo::Bar`.
    fn article_text(&mut self, first: Chunk<'a>) -> (String, TextRange) {
        let mut value = first.text.to_string();
        let mut span = first.span;

        let more = self.read(Stop::Value, false, false);
        if more.kind == ChunkKind::Text {
            self.read(Stop::Value, true, false);
            value.push_str(more.text);
            span = span.cover(more.span);
        }
        (value, span)
    }

    /// One fixed page or `Namespace:+` restriction.
    fn parse_article_atom(&mut self, value: &str, span: TextRange) -> Option<Description> {
        let value = value.trim();
        let mut parts: Vec<&str> = value.splitn(3, ':').collect();
        if parts.len() == 3 && parts[0].trim().is_empty() {
            parts.remove(0);
        }

        if let [namespace, rest] = parts.as_slice()
            && rest.trim() == "+"
        {
            let namespace = namespace.trim();
            let id = if namespace.is_empty() {
                Some(MAIN)
            } else {
                self.config.namespaces.id(namespace)
            };
            let Some(id) = id else {
                self.error_msg(DiagnosticKind::UnknownNamespace, span, namespace);
                return None;
            };
            return Some(Description::Namespace(self.config.namespaces.reference(id)));
        }

        match parse_page(&self.config.namespaces, value) {
            Ok(page) => {
                self.fixed_subject = true;
                Some(Description::Value(ValueDescription {
                    property: None,
                    comparator: Comparator::Equal,
                    value: DataValue::Page(page),
                }))
            }
            Err(_) => {
                self.error_msg(DiagnosticKind::InvalidTitle, span, value);
                None
            }
        }
    }

    /// Parses a nested block whose result has no place to go.
    fn discard_subquery(&mut self) {
        if !self.enter_recursion() {
            self.skip_subquery();
            return;
        }
        self.push_delimiter(CLOSE_SUBQUERY);
        let _ = self.parse_level(false);
        self.exit_recursion();
    }
}
