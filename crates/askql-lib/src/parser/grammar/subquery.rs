//! One subquery level: conjuncts between `OR`/`||` boundaries.

use rowan::TextRange;

use crate::description::Description;
use crate::diagnostics::DiagnosticKind;
use crate::parser::chunks::{ALTERNATIVE, CLOSE_SUBQUERY, OPEN_LINK, OPEN_SUBQUERY, range};
use crate::parser::core::ParseState;

impl ParseState<'_> {
    /// Parses up to the `</q>` closing this level, or to the end at top level.
    ///
    /// `must_set_ns` says default namespaces must be added to every
    /// alternative that does not restrict the namespace itself. It flips to
    /// `true` the first time an alternative brings its own restriction; the
    /// alternatives collected before that point get the defaults retrofitted.
    /// Returns the level's description (`None` if nothing usable) and the
    /// final `must_set_ns`.
    pub(super) fn parse_level(&mut self, mut must_set_ns: bool) -> (Option<Description>, bool) {
        let nested = !self.stack.is_empty();
        let level_start = self.offset;
        tracing::trace!(depth = self.depth, nested, must_set_ns, "enter level");

        let mut disjuncts: Vec<Description> = Vec::new();
        let mut conjunct: Option<Description> = None;
        let mut has_ns = false;
        let mut attempted = false;
        let mut plus = false;
        let mut empty_reported = false;

        loop {
            let chunk = self.next_chunk();

            if chunk.is(OPEN_LINK) {
                attempted = true;
                let (desc, block_ns) = self.parse_link_block(chunk);
                has_ns |= block_ns;
                let span = self.span_from(chunk.span);
                conjunct = self.combine(conjunct, desc, true, span);
                continue;
            }

            if chunk.is(OPEN_SUBQUERY) {
                attempted = true;
                if !self.enter_recursion() {
                    self.error(DiagnosticKind::NestingTooDeep, chunk.span);
                    self.skip_subquery();
                    continue;
                }
                self.push_delimiter(CLOSE_SUBQUERY);
                let (desc, nested_ns) = self.parse_level(must_set_ns);
                self.exit_recursion();
                has_ns |= nested_ns;
                let span = self.span_from(chunk.span);
                conjunct = self.combine(conjunct, desc, true, span);
                continue;
            }

            if chunk.is_text("+") {
                attempted = true;
                plus = true;
                continue;
            }

            let boundary = chunk.is_end()
                || chunk.is(CLOSE_SUBQUERY)
                || chunk.is(ALTERNATIVE)
                || chunk.is_text("OR");
            if !boundary {
                self.error_msg(DiagnosticKind::UnexpectedFragment, chunk.span, chunk.text);
                continue;
            }

            if plus && conjunct.is_none() {
                conjunct = Some(Description::Thing);
            }

            if let Some(default_ns) = self.default_ns {
                if has_ns && !must_set_ns {
                    for disjunct in std::mem::take(&mut disjuncts) {
                        let retrofitted = self.restrict(Some(disjunct), default_ns, chunk.span);
                        disjuncts.extend(retrofitted);
                    }
                    must_set_ns = true;
                } else if !has_ns && must_set_ns {
                    conjunct = self.restrict(conjunct, default_ns, chunk.span);
                }
            }

            empty_reported = false;
            match conjunct.take() {
                Some(desc) => disjuncts.push(desc),
                None if !attempted => {
                    self.error(DiagnosticKind::EmptySubquery, chunk.span);
                    empty_reported = true;
                }
                None => {}
            }
            has_ns = false;
            attempted = false;
            plus = false;

            if chunk.is(CLOSE_SUBQUERY) {
                if self.pop_delimiter() != Some(CLOSE_SUBQUERY) {
                    self.error(DiagnosticKind::TooManyClosing, chunk.span);
                    tracing::trace!("level aborted");
                    return (None, must_set_ns);
                }
                break;
            }

            if chunk.is_end() {
                if nested {
                    let open = range(level_start, level_start);
                    self.error(DiagnosticKind::UnclosedSubquery, open.cover(chunk.span));
                    self.pop_delimiter();
                }
                break;
            }
        }

        let span = range(level_start, self.offset);
        if disjuncts.is_empty() && !empty_reported {
            self.error(DiagnosticKind::EmptySubquery, span);
        }

        let mut result = None;
        for disjunct in disjuncts {
            result = self.combine(result, Some(disjunct), false, span);
        }

        tracing::trace!(depth = self.depth, must_set_ns, found = result.is_some(), "exit level");
        (result, must_set_ns)
    }

    /// Conjoins the default namespaces; a bare `Thing` is replaced by them.
    fn restrict(
        &mut self,
        desc: Option<Description>,
        default_ns: &Description,
        span: TextRange,
    ) -> Option<Description> {
        match desc {
            Some(Description::Thing) => self
                .combine(None, Some(default_ns.clone()), true, span)
                .or(Some(Description::Thing)),
            Some(desc) => self.combine(Some(desc), Some(default_ns.clone()), true, span),
            None => None,
        }
    }
}
