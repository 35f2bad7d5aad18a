//! Per-call parse state and the low-level operations the grammar uses.

use rowan::TextRange;

use super::chunks::{CLOSE_SUBQUERY, Chunk, OPEN_SUBQUERY, Patterns, Stop, range, read_chunk};
use crate::config::ParserConfig;
use crate::description::{self, Description};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::resolve::{PropertyResolver, ValueParser};

/// Mutable state of one `parse` call, threaded through every production.
///
/// Created fresh for each query, so nested subqueries of one call share a
/// delimiter stack while separate calls never do.
pub(super) struct ParseState<'a> {
    pub(super) source: &'a str,
    pub(super) offset: usize,
    pub(super) patterns: &'a Patterns,
    pub(super) config: &'a ParserConfig,
    pub(super) resolver: &'a dyn PropertyResolver,
    pub(super) values: &'a dyn ValueParser,
    pub(super) default_ns: Option<&'a Description>,
    /// Closing tokens expected by the enclosing subquery levels.
    pub(super) stack: Vec<&'static str>,
    pub(super) label: String,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) fixed_subject: bool,
    pub(super) debug_fuel: std::cell::Cell<u32>,
}

impl<'a> ParseState<'a> {
    pub(super) fn new(
        source: &'a str,
        patterns: &'a Patterns,
        config: &'a ParserConfig,
        resolver: &'a dyn PropertyResolver,
        values: &'a dyn ValueParser,
        default_ns: Option<&'a Description>,
    ) -> Self {
        Self {
            source,
            offset: 0,
            patterns,
            config,
            resolver,
            values,
            default_ns,
            stack: Vec::with_capacity(4),
            label: String::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            fixed_subject: false,
            debug_fuel: std::cell::Cell::new(256),
        }
    }

    /// Reads the next chunk; with `consume == false` this is a lookahead.
    pub(super) fn read(&mut self, stop: Stop, consume: bool, trim: bool) -> Chunk<'a> {
        let (chunk, next) = read_chunk(self.source, self.offset, self.patterns.get(stop), trim);
        if consume {
            if next > self.offset {
                self.reset_debug_fuel();
            }
            self.offset = next;
        } else {
            self.ensure_progress();
        }
        chunk
    }

    pub(super) fn next_chunk(&mut self) -> Chunk<'a> {
        self.read(Stop::Default, true, true)
    }

    pub(super) fn peek_chunk(&mut self) -> Chunk<'a> {
        self.read(Stop::Default, false, true)
    }

    pub(super) fn eof_range(&self) -> TextRange {
        range(self.source.len(), self.source.len())
    }

    /// Span from `start` to the current position.
    pub(super) fn span_from(&self, start: TextRange) -> TextRange {
        let end = range(self.offset, self.offset);
        start.cover(end)
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind, range: TextRange) {
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn error_msg(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        detail: impl Into<String>,
    ) {
        self.diagnostics.report(kind, range).message(detail).emit();
    }

    /// [`description::combine`] under the configured features; a rejected
    /// fragment is reported at `range`.
    pub(super) fn combine(
        &mut self,
        current: Option<Description>,
        new: Option<Description>,
        conjunctive: bool,
        range: TextRange,
    ) -> Option<Description> {
        let (combined, rejected) =
            description::combine(current, new, conjunctive, self.config.features);
        if let Some(rejection) = rejected {
            self.error_msg(rejection.kind, range, rejection.fragment);
        }
        combined
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.config.recursion_limit {
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(super) fn push_delimiter(&mut self, token: &'static str) {
        self.stack.push(token);
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<&'static str> {
        self.stack.pop()
    }

    /// Consumes a `<q>` block whose opener was already read, without
    /// building anything. Stops after the matching `</q>` or at the end.
    pub(super) fn skip_subquery(&mut self) {
        let mut depth = 1u32;
        loop {
            let chunk = self.next_chunk();
            if chunk.is_end() {
                return;
            }
            if chunk.is(OPEN_SUBQUERY) {
                depth += 1;
            } else if chunk.is(CLOSE_SUBQUERY) {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
        }
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }
}
