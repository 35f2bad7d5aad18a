//! Chunk reader: splits the remaining input at the next delimiter.
//!
//! A chunk is either a delimiter token or the literal run before the next
//! delimiter. Which delimiters count depends on the [`Stop`] set: the default
//! set knows the whole query syntax, the value set only the link and pipe
//! tokens (so raw values may contain `::` or `<q>`), and the label set only
//! the closing brackets.
//!
//! All stop sets are compiled once per parser.

use regex_automata::meta::Regex;
use regex_automata::util::syntax;
use rowan::{TextRange, TextSize};

use crate::config::ParserConfig;
use crate::{Error, Result};

pub(crate) const OPEN_LINK: &str = "[[";
pub(crate) const CLOSE_LINK: &str = "]]";
pub(crate) const PROPERTY_SEP: &str = "::";
pub(crate) const ASSIGN_SEP: &str = ":=";
pub(crate) const OPEN_SUBQUERY: &str = "<q>";
pub(crate) const CLOSE_SUBQUERY: &str = "</q>";
pub(crate) const ALTERNATIVE: &str = "||";
pub(crate) const PIPE: &str = "|";

const CANONICAL_CATEGORY: &str = "Category";
const CANONICAL_CONCEPT: &str = "Concept";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Delimiter,
    Text,
    /// Input exhausted.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'src> {
    pub kind: ChunkKind,
    pub text: &'src str,
    pub span: TextRange,
}

impl<'src> Chunk<'src> {
    /// Whether this is the delimiter `token` (ASCII case-insensitive).
    pub fn is(&self, token: &str) -> bool {
        self.kind == ChunkKind::Delimiter && self.text.eq_ignore_ascii_case(token)
    }

    pub fn is_end(&self) -> bool {
        self.kind == ChunkKind::End
    }

    pub fn is_text(&self, text: &str) -> bool {
        self.kind == ChunkKind::Text && self.text.trim() == text
    }

    /// `]]`, `|` or end of input: closes a link block.
    pub fn ends_block(&self) -> bool {
        self.is_end() || self.is(CLOSE_LINK) || self.is(PIPE)
    }
}

/// Which delimiter set a read stops at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    Default,
    Value,
    Label,
}

/// A compiled alternation of delimiters.
#[derive(Debug, Clone)]
pub struct StopSet {
    regex: Regex,
}

impl StopSet {
    fn compile(alternatives: &[String]) -> Result<Self> {
        let pattern = alternatives.join("|");
        let regex = Regex::builder()
            .syntax(syntax::Config::new().case_insensitive(true))
            .build(&pattern)
            .map_err(|e| Error::Pattern(e.to_string()))?;
        Ok(Self { regex })
    }

    fn tokens(tokens: &[&str]) -> Result<Self> {
        let alternatives: Vec<String> = tokens.iter().map(|t| regex_syntax::escape(t)).collect();
        Self::compile(&alternatives)
    }
}

/// Whether a class block names categories or concepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Category,
    Concept,
}

/// The stop sets of one parser, plus the prefix names they were built from.
#[derive(Debug, Clone)]
pub struct Patterns {
    default: StopSet,
    value: StopSet,
    label: StopSet,
    category_prefixes: Vec<String>,
    concept_prefixes: Vec<String>,
}

impl Patterns {
    pub fn new(config: &ParserConfig) -> Result<Self> {
        let category_prefixes = prefix_names(&config.category_prefix, CANONICAL_CATEGORY);
        let concept_prefixes = prefix_names(&config.concept_prefix, CANONICAL_CONCEPT);

        let mut alternatives: Vec<String> = [
            OPEN_LINK,
            CLOSE_LINK,
            PROPERTY_SEP,
            ASSIGN_SEP,
            OPEN_SUBQUERY,
            CLOSE_SUBQUERY,
        ]
        .iter()
        .map(|t| regex_syntax::escape(t))
        .collect();
        for prefix in category_prefixes.iter().chain(&concept_prefixes) {
            alternatives.push(format!(r"^\s*{}\s*:", regex_syntax::escape(prefix)));
        }
        alternatives.push(regex_syntax::escape(ALTERNATIVE));
        alternatives.push(regex_syntax::escape(PIPE));

        Ok(Self {
            default: StopSet::compile(&alternatives)?,
            value: StopSet::tokens(&[OPEN_LINK, CLOSE_LINK, ALTERNATIVE, PIPE])?,
            label: StopSet::tokens(&[CLOSE_LINK])?,
            category_prefixes,
            concept_prefixes,
        })
    }

    pub fn get(&self, stop: Stop) -> &StopSet {
        match stop {
            Stop::Default => &self.default,
            Stop::Value => &self.value,
            Stop::Label => &self.label,
        }
    }

    /// Class kind introduced by a prefix delimiter such as `Category:`.
    pub fn class_kind(&self, chunk: &Chunk<'_>) -> Option<ClassKind> {
        if chunk.kind != ChunkKind::Delimiter {
            return None;
        }
        let name = prefix_key(chunk.text.trim().strip_suffix(':')?);
        if self.category_prefixes.contains(&name) {
            Some(ClassKind::Category)
        } else if self.concept_prefixes.contains(&name) {
            Some(ClassKind::Concept)
        } else {
            None
        }
    }
}

fn prefix_names(localized: &str, canonical: &str) -> Vec<String> {
    let mut names = vec![prefix_key(canonical)];
    let localized = prefix_key(localized);
    if !localized.is_empty() && !names.contains(&localized) {
        names.push(localized);
    }
    names
}

fn prefix_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Reads one chunk of `source` starting at byte `offset`.
///
/// Returns the chunk and the offset after it. A literal run that is only
/// whitespace is skipped in favour of the delimiter that follows it; a
/// literal run leaves that delimiter unconsumed.
pub fn read_chunk<'src>(
    source: &'src str,
    offset: usize,
    stop: &StopSet,
    trim: bool,
) -> (Chunk<'src>, usize) {
    let rest = &source[offset..];

    let Some(found) = stop.regex.find(rest) else {
        if rest.trim().is_empty() {
            return (end_chunk(source), source.len());
        }
        let chunk = text_chunk(source, offset, rest, trim);
        return (chunk, source.len());
    };

    let before = &rest[..found.start()];
    if before.trim().is_empty() {
        let matched = &rest[found.start()..found.end()];
        let token = matched.trim();
        let lead = matched.len() - matched.trim_start().len();
        let start = offset + found.start() + lead;
        let chunk = Chunk {
            kind: ChunkKind::Delimiter,
            text: token,
            span: range(start, start + token.len()),
        };
        return (chunk, offset + found.end());
    }

    (
        text_chunk(source, offset, before, trim),
        offset + found.start(),
    )
}

fn text_chunk<'src>(source: &'src str, offset: usize, text: &'src str, trim: bool) -> Chunk<'src> {
    let (text, start) = if trim {
        let lead = text.len() - text.trim_start().len();
        (text.trim(), offset + lead)
    } else {
        (text, offset)
    };
    debug_assert!(start + text.len() <= source.len());
    Chunk {
        kind: ChunkKind::Text,
        text,
        span: range(start, start + text.len()),
    }
}

fn end_chunk(source: &str) -> Chunk<'_> {
    Chunk {
        kind: ChunkKind::End,
        text: "",
        span: TextRange::empty(TextSize::from(source.len() as u32)),
    }
}

pub(crate) fn range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}
