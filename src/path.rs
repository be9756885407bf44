//! Bracket-path parsing for form field names.
//!
//! A field name such as `pet[0][name]` is split into an ordered list of
//! [`Step`]s, each addressing one level of the tree the encoder builds.
//!
//! # Grammar
//!
//! ```text
//! name     := first segment*  append?
//! first    := one or more characters other than "["
//! segment  := "[" digit+ "]"            (array step, decimal index)
//!           | "[" (not "]")+ "]"        (object step, literal key)
//! append   := "[]"                      (only at the very end)
//! ```
//!
//! A segment that starts with a digit must consist of digits only: `a[1x]` is
//! malformed rather than an object key `"1x"`. An object key may itself
//! contain `[`, since only `]` closes a segment.
//!
//! # Malformed names
//!
//! Parsing never fails. Any name that does not match the grammar (empty first
//! segment, unterminated bracket, trailing text after a segment, `[]` that is
//! not at the end, an index above the configured limit) becomes a single
//! object step whose key is the entire, unmodified name:
//!
//! ```rust
//! use form_json::path::{parse_path, StepKey};
//!
//! let parsed = parse_path("error[bad");
//! assert!(parsed.is_fallback());
//! assert_eq!(parsed.steps()[0].key, StepKey::Name("error[bad".to_string()));
//! ```

use std::fmt;
use tracing::debug;

/// Largest array index accepted by [`parse_path`].
///
/// Indices beyond a signed 32-bit integer are treated like any other
/// malformed name.
pub const DEFAULT_MAX_INDEX: u32 = i32::MAX as u32;

/// The kind of container a step addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    Object,
    Array,
}

/// The key a step addresses within its container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepKey {
    /// A property name, from the first segment or a non-numeric `[key]`.
    Name(String),
    /// An array index, from a numeric `[n]`.
    Index(usize),
}

impl StepKey {
    /// The key as an object property name. Indices use their decimal form.
    #[must_use]
    pub fn to_property(&self) -> String {
        match self {
            StepKey::Name(name) => name.clone(),
            StepKey::Index(index) => index.to_string(),
        }
    }
}

impl fmt::Display for StepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKey::Name(name) => f.write_str(name),
            StepKey::Index(index) => write!(f, "{}", index),
        }
    }
}

/// One parsed segment of a field name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub key: StepKey,
    /// Set only on the final step of a name.
    pub last: bool,
    /// Set on the final step when the name ends in `[]`.
    pub append: bool,
    /// The kind of the following step; `None` on the last step.
    pub next_kind: Option<StepKind>,
}

impl Step {
    fn new(key: StepKey) -> Self {
        Step {
            key,
            last: false,
            append: false,
            next_kind: None,
        }
    }

    /// A standalone last step keyed by a property name.
    #[must_use]
    pub fn last_named(name: impl Into<String>) -> Self {
        Step {
            last: true,
            ..Step::new(StepKey::Name(name.into()))
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> StepKind {
        match self.key {
            StepKey::Name(_) => StepKind::Object,
            StepKey::Index(_) => StepKind::Array,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{:?}]", self.key, self.kind())
    }
}

/// The outcome of parsing a field name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedPath {
    /// The name matched the bracket grammar.
    Steps(Vec<Step>),
    /// The name was malformed and is used verbatim as one top-level key.
    Fallback(Step),
}

impl ParsedPath {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedPath::Fallback(_))
    }

    /// The parsed steps. Never empty; only the final step is `last`.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        match self {
            ParsedPath::Steps(steps) => steps,
            ParsedPath::Fallback(step) => std::slice::from_ref(step),
        }
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        match self {
            ParsedPath::Steps(steps) => steps,
            ParsedPath::Fallback(step) => vec![step],
        }
    }
}

/// Parses a field name with the default index limit.
///
/// # Examples
///
/// ```rust
/// use form_json::path::{parse_path, StepKey, StepKind};
///
/// let parsed = parse_path("pet[0][name]");
/// let steps = parsed.steps();
///
/// assert_eq!(steps.len(), 3);
/// assert_eq!(steps[0].key, StepKey::Name("pet".to_string()));
/// assert_eq!(steps[0].next_kind, Some(StepKind::Array));
/// assert_eq!(steps[1].key, StepKey::Index(0));
/// assert!(steps[2].last);
/// ```
#[must_use]
pub fn parse_path(name: &str) -> ParsedPath {
    parse_path_with_limit(name, DEFAULT_MAX_INDEX)
}

/// Parses a field name, treating any array index above `max_index` as malformed.
#[must_use]
pub fn parse_path_with_limit(name: &str, max_index: u32) -> ParsedPath {
    match parse_steps(name, max_index) {
        Some(steps) => ParsedPath::Steps(steps),
        None => {
            debug!(name, "malformed field name, using it as a literal key");
            ParsedPath::Fallback(Step::last_named(name))
        }
    }
}

/// Returns `None` for any name that must fall back to a literal key.
fn parse_steps(name: &str, max_index: u32) -> Option<Vec<Step>> {
    let first_len = name.find('[').unwrap_or(name.len());
    if first_len == 0 {
        return None;
    }

    let mut steps = vec![Step::new(StepKey::Name(name[..first_len].to_string()))];
    let mut rest = &name[first_len..];

    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;

        if let Some(after) = inner.strip_prefix(']') {
            if !after.is_empty() {
                return None;
            }
            steps.last_mut()?.append = true;
            break;
        }

        let close = inner.find(']')?;
        let key = &inner[..close];
        rest = &inner[close + 1..];

        let step_key = if key.starts_with(|c: char| c.is_ascii_digit()) {
            StepKey::Index(parse_index(key, max_index)?)
        } else {
            StepKey::Name(key.to_string())
        };
        steps.push(Step::new(step_key));
    }

    let next_kinds: Vec<StepKind> = steps.iter().skip(1).map(Step::kind).collect();
    for (step, next) in steps.iter_mut().zip(next_kinds) {
        step.next_kind = Some(next);
    }
    if let Some(last) = steps.last_mut() {
        last.last = true;
    }

    Some(steps)
}

fn parse_index(digits: &str, max_index: u32) -> Option<usize> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Leading zeros are allowed; the value, not the length, is bounded.
    let trimmed = digits.trim_start_matches('0');
    if trimmed.len() > 10 {
        return None;
    }
    let value: u64 = if trimmed.is_empty() {
        0
    } else {
        trimmed.parse().ok()?
    };
    if value > u64::from(max_index) {
        return None;
    }
    usize::try_from(value).ok()
}
