use rowan::TextRange;
use serde::Serialize;

/// Diagnostic codes, grouped by how they affect the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiagnosticKind {
    // Nesting problems; the affected level is dropped or cut short
    TooManyClosing,
    UnclosedSubquery,
    NestingTooDeep,

    // Link-block syntax
    NoClosingBrackets,
    MisplacedSymbol,
    MisplacedSubquery,
    BadQueryAtom,

    // Subquery level syntax
    UnexpectedFragment,
    EmptySubquery,

    // Valid syntax, invalid semantics
    UnknownProperty,
    SubpropertyOnValue,
    ValueSubquery,
    InvalidValue,
    InvalidTitle,
    UnknownNamespace,

    // Constructs switched off by the feature set
    FeatureDisabled,
    NoConjunctions,
    NoDisjunctions,

    NoUsableValue,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::NoUsableValue => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Stable key used to look the message up in a [`super::MessageCatalog`].
    pub fn key(&self) -> &'static str {
        match self {
            Self::TooManyClosing => "too-many-closing",
            Self::UnclosedSubquery => "unclosed-subquery",
            Self::NestingTooDeep => "nesting-too-deep",
            Self::NoClosingBrackets => "no-closing-brackets",
            Self::MisplacedSymbol => "misplaced-symbol",
            Self::MisplacedSubquery => "misplaced-subquery",
            Self::BadQueryAtom => "bad-query-atom",
            Self::UnexpectedFragment => "unexpected-fragment",
            Self::EmptySubquery => "empty-subquery",
            Self::UnknownProperty => "unknown-property",
            Self::SubpropertyOnValue => "subproperty-on-value",
            Self::ValueSubquery => "value-subquery",
            Self::InvalidValue => "invalid-value",
            Self::InvalidTitle => "invalid-title",
            Self::UnknownNamespace => "unknown-namespace",
            Self::FeatureDisabled => "feature-disabled",
            Self::NoConjunctions => "no-conjunctions",
            Self::NoDisjunctions => "no-disjunctions",
            Self::NoUsableValue => "no-usable-value",
        }
    }

    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::TooManyClosing => Some("every `</q>` must close an earlier `<q>`"),
            Self::UnclosedSubquery => Some("add `</q>` to close the subquery"),
            Self::NoClosingBrackets => Some("conditions are written as `[[...]]`"),
            Self::MisplacedSubquery => Some("use `[[property::<q>...</q>]]` to nest a query"),
            Self::ValueSubquery => Some("only page-valued properties accept `<q>` subqueries"),
            Self::SubpropertyOnValue => {
                Some("only page-valued properties can be followed by `.` in a chain")
            }
            _ => None,
        }
    }

    /// Message used when no detail is supplied.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::TooManyClosing => "too many closing `</q>`",
            Self::UnclosedSubquery => "missing closing `</q>`",
            Self::NestingTooDeep => "subqueries are nested too deeply",
            Self::NoClosingBrackets => "missing closing `]]`",
            Self::MisplacedSymbol => "misplaced symbol",
            Self::MisplacedSubquery => "subquery is not allowed here",
            Self::BadQueryAtom => "condition could not be understood",
            Self::UnexpectedFragment => "unexpected fragment",
            Self::EmptySubquery => "empty subquery or alternative",
            Self::UnknownProperty => "unknown property",
            Self::SubpropertyOnValue => "cannot query a value for sub-properties",
            Self::ValueSubquery => "subquery on a property without page values",
            Self::InvalidValue => "invalid value",
            Self::InvalidTitle => "invalid title",
            Self::UnknownNamespace => "unknown namespace",
            Self::FeatureDisabled => "query feature is disabled",
            Self::NoConjunctions => "conjunctions are disabled",
            Self::NoDisjunctions => "disjunctions are disabled",
            Self::NoUsableValue => "no usable value",
        }
    }

    /// Template for messages with detail. `{}` is replaced by the detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::MisplacedSymbol => "misplaced symbol `{}`".to_string(),
            Self::UnexpectedFragment => "unexpected fragment `{}`".to_string(),
            Self::UnknownProperty => "unknown property: {}".to_string(),
            Self::SubpropertyOnValue => {
                "cannot query sub-property `{}` of a property without page values".to_string()
            }
            Self::ValueSubquery => "`{}` does not have page values; subquery ignored".to_string(),
            Self::InvalidTitle => "`{}` is not a valid title".to_string(),
            Self::UnknownNamespace => "`{}` is not a known namespace".to_string(),
            Self::FeatureDisabled => "query feature is disabled, dropped `{}`".to_string(),
            Self::NoConjunctions => "conjunctions are disabled, dropped `{}`".to_string(),
            Self::NoDisjunctions => "disjunctions are disabled, dropped `{}`".to_string(),
            Self::NoUsableValue => "no usable value for `{}`, matching any value".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// `None` → fallback message, `Some(detail)` → custom template filled in.
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One recorded problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) range: TextRange,
    /// Parameter substituted into the message template.
    pub(crate) detail: Option<String>,
    pub(crate) message: String,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            detail: None,
            message: kind.fallback_message().to_string(),
            hints: kind.default_hint().map(str::to_string).into_iter().collect(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
