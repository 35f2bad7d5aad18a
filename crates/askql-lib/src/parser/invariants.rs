//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::ParseState;

impl ParseState<'_> {
    #[inline]
    pub(super) fn ensure_progress(&self) {
        assert!(
            self.debug_fuel.get() != 0,
            "parser is stuck: too many lookaheads"
        );
        self.debug_fuel.set(self.debug_fuel.get() - 1);
    }

    #[inline]
    pub(super) fn assert_balanced(&self) {
        assert!(
            self.stack.is_empty(),
            "broken parser invariant: unclosed delimiters {:?} after top level",
            self.stack
        );
        assert_eq!(self.depth, 0, "broken parser invariant: recursion depth leaked");
    }
}
