//! `[[property.chain::value||value]]`.

use rowan::TextRange;

use super::Block;
use crate::description::Description;
use crate::diagnostics::DiagnosticKind;
use crate::parser::chunks::{
    ALTERNATIVE, CLOSE_LINK, CLOSE_SUBQUERY, Chunk, ChunkKind, OPEN_LINK, OPEN_SUBQUERY, PIPE,
    Stop, range,
};
use crate::parser::core::ParseState;
use crate::resolve::PropertyRef;

impl<'a> ParseState<'a> {
    /// Parses a property block from its name chunk; the `::` is still unread.
    ///
    /// The chain is resolved left to right and wrapped around the values in
    /// reverse, so the first name is the outermost `SomeProperty`.
    pub(super) fn parse_property_block(&mut self, name: Chunk<'a>) -> Block<'a> {
        let (chain, complete) = self.resolve_chain(name);
        self.next_chunk(); // `::` or `:=`

        let Some(last) = chain.last() else {
            self.skip_values();
            return Block::new(None, self.next_chunk());
        };

        let (inner, terminator, has_ns) = if complete {
            self.parse_values(last, name.span)
        } else {
            self.skip_values();
            (Description::Thing, self.next_chunk(), false)
        };

        let description = chain
            .into_iter()
            .rev()
            .fold(inner, |inner, property| Description::some_property(property, inner));
        Block::new(Some(description), terminator).with_ns(has_ns)
    }

    /// Resolves the dotted chain. A leading space keeps the name whole.
    ///
    /// Resolution stops at the first unknown name, or after a non-page
    /// property that is followed by more names; `complete` is `false` then.
    fn resolve_chain(&mut self, name: Chunk<'a>) -> (Vec<PropertyRef>, bool) {
        let names: Vec<&str> = if name.text.starts_with(char::is_whitespace) {
            vec![name.text.trim()]
        } else {
            name.text.split('.').collect()
        };
        let span = trimmed_span(name);

        let mut chain = Vec::with_capacity(names.len());
        for (i, part) in names.iter().enumerate() {
            let property = match self.resolver.resolve(part) {
                Ok(property) => property,
                Err(err) => {
                    self.error_msg(DiagnosticKind::UnknownProperty, span, err.to_string());
                    return (chain, false);
                }
            };

            let page_like = property.is_page_like();
            chain.push(property);
            if !page_like && let Some(next) = names.get(i + 1) {
                self.error_msg(DiagnosticKind::SubpropertyOnValue, span, next.trim());
                return (chain, false);
            }
        }
        (chain, true)
    }

    /// The `||`-separated value conditions of `property`, combined
    /// disjunctively. Returns the conditions, the terminator, and whether
    /// default namespaces were injected.
    fn parse_values(
        &mut self,
        property: &PropertyRef,
        name_span: TextRange,
    ) -> (Description, Chunk<'a>, bool) {
        let mut inner: Option<Description> = None;
        let mut produced = false;
        let mut has_ns = false;

        let terminator = loop {
            let chunk = self.peek_chunk();
            if chunk.ends_block() {
                break self.next_chunk();
            }
            if chunk.is(ALTERNATIVE) {
                self.next_chunk();
                continue;
            }

            let (desc, span) = if chunk.is_text("+") {
                self.next_chunk();
                let (desc, injected) = self.any_value(property);
                has_ns |= injected;
                (desc, chunk.span)
            } else if chunk.is(OPEN_SUBQUERY) {
                self.next_chunk();
                let desc = self.parse_value_subquery(property, chunk);
                (desc, self.span_from(chunk.span))
            } else {
                let (raw, span) = self.scan_value();
                match self.values.parse_value(property, &raw) {
                    Ok(desc) => (desc, span),
                    Err(err) => {
                        self.error_msg(DiagnosticKind::InvalidValue, span, err.to_string());
                        (Description::Thing, span)
                    }
                }
            };
            inner = self.combine(inner, Some(desc), false, span);
            produced = true;

            let next = self.next_chunk();
            if !next.is(ALTERNATIVE) {
                break next;
            }
        };

        if !produced {
            let (desc, injected) = self.any_value(property);
            has_ns |= injected;
            let span = name_span.cover(terminator.span);
            self.error_msg(DiagnosticKind::NoUsableValue, span, property.to_string());
            inner = Some(desc);
        }

        (inner.unwrap_or(Description::Thing), terminator, has_ns)
    }

    /// `+`: any page in the default namespaces, or anything at all.
    fn any_value(&self, property: &PropertyRef) -> (Description, bool) {
        match self.default_ns {
            Some(default_ns) if property.is_page_like() => (default_ns.clone(), true),
            _ => (Description::Thing, false),
        }
    }

    /// `<q>...</q>` as a value; only pages can be described by a subquery.
    fn parse_value_subquery(&mut self, property: &PropertyRef, open: Chunk<'a>) -> Description {
        if !property.is_page_like() {
            self.error_msg(DiagnosticKind::ValueSubquery, open.span, property.to_string());
            self.skip_subquery();
            return Description::Thing;
        }
        if !self.enter_recursion() {
            self.error(DiagnosticKind::NestingTooDeep, open.span);
            self.skip_subquery();
            return Description::Thing;
        }
        self.push_delimiter(CLOSE_SUBQUERY);
        let (desc, _) = self.parse_level(true);
        self.exit_recursion();
        desc.unwrap_or(Description::Thing)
    }

    /// Reads one raw value up to `||`, `|` or the closing `]]`, keeping
    /// nested `[[...]]` links intact.
    fn scan_value(&mut self) -> (String, TextRange) {
        let start = self.offset;
        let mut raw = String::new();
        let mut depth = 1u32;

        loop {
            let piece = self.read(Stop::Value, false, false);
            match piece.kind {
                ChunkKind::End => break,
                ChunkKind::Text => {}
                ChunkKind::Delimiter => {
                    if piece.is(OPEN_LINK) {
                        depth += 1;
                    } else if piece.is(CLOSE_LINK) {
                        if depth <= 1 {
                            break;
                        }
                        depth -= 1;
                    } else if (piece.is(PIPE) || piece.is(ALTERNATIVE)) && depth <= 1 {
                        break;
                    }
                }
            }
            self.read(Stop::Value, true, false);
            raw.push_str(piece.text);
        }

        let trimmed = raw.trim();
        let lead = raw.len() - raw.trim_start().len();
        let span_start = (start + lead).min(self.offset);
        let span = range(span_start, (span_start + trimmed.len()).min(self.source.len()));
        (trimmed.to_string(), span)
    }

    /// Skips the values of a chain that could not be resolved.
    fn skip_values(&mut self) {
        let mut depth = 1u32;
        loop {
            let piece = self.read(Stop::Value, false, false);
            match piece.kind {
                ChunkKind::End => return,
                ChunkKind::Text => {}
                ChunkKind::Delimiter => {
                    if piece.is(OPEN_LINK) {
                        depth += 1;
                    } else if piece.is(CLOSE_LINK) {
                        if depth <= 1 {
                            return;
                        }
                        depth -= 1;
                    } else if piece.is(PIPE) && depth <= 1 {
                        return;
                    }
                }
            }
            self.read(Stop::Value, true, false);
        }
    }
}

fn trimmed_span(chunk: Chunk<'_>) -> TextRange {
    let lead = chunk.text.len() - chunk.text.trim_start().len();
    let start = u32::from(chunk.span.start()) as usize + lead;
    range(start, start + chunk.text.trim().len())
}
