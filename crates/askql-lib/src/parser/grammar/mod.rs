//! Grammar productions for the query language.
//!
//! Every `parse_*` method is an extension of [`ParseState`]. A subquery level
//! (`subquery.rs`) collects conjuncts and alternatives; each `[[...]]` block
//! is dispatched (`link.rs`) to the class, property or article production.

mod article;
mod class;
mod link;
mod property;
mod subquery;

use super::chunks::{Chunk, range};
use super::core::ParseState;
use crate::description::Description;

/// What a link-block production hands back to the dispatcher.
pub(super) struct Block<'a> {
    pub description: Option<Description>,
    /// The chunk that ended the block's content, usually `]]`.
    pub terminator: Chunk<'a>,
    /// The block restricts the namespace itself.
    pub has_ns: bool,
}

impl<'a> Block<'a> {
    fn new(description: Option<Description>, terminator: Chunk<'a>) -> Self {
        Self {
            description,
            terminator,
            has_ns: false,
        }
    }

    fn with_ns(mut self, has_ns: bool) -> Self {
        self.has_ns = has_ns;
        self
    }
}

impl<'a> ParseState<'a> {
    /// Parses the whole query as the top level.
    ///
    /// Default namespaces are conjoined unless the level already applied
    /// them to every alternative. Returns `Thing` when nothing usable was
    /// found, and whether the namespaces are already constrained.
    pub(super) fn parse_query(&mut self) -> (Description, bool) {
        let (result, ns_set) = self.parse_level(false);

        let result = match self.default_ns {
            Some(default_ns) if !ns_set => {
                let whole = range(0, self.source.len());
                let result = result.filter(|desc| *desc != Description::Thing);
                self.combine(Some(default_ns.clone()), result, true, whole)
            }
            _ => result,
        };

        self.assert_balanced();
        (result.unwrap_or(Description::Thing), ns_set)
    }
}
