//! Validation output types.
//!
//! A validation run produces one `ValidationResult`: an insertion-ordered
//! collection of `ValidationError` records, each attributed to an element
//! kind and an element identity. Violations are data, not failures; a run
//! always completes and the caller decides what to do with the findings.

use std::fmt;

/// A recorded constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError<K> {
    /// Kind of the offending element.
    pub kind: K,
    /// Identity of the offending element (name or id rendering).
    pub element: String,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

impl<K: fmt::Display> fmt::Display for ValidationError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.element, self.message)
    }
}

/// Accumulator for one validation run.
///
/// Scoped to exactly one `validate` call: validators create a fresh result
/// per call, so repeated validation of the same model yields identical
/// contents.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult<K> {
    errors: Vec<ValidationError<K>>,
}

impl<K: Copy + PartialEq> ValidationResult<K> {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record a violation unless the predicate held.
    ///
    /// Nothing is recorded when `held` is true; a violation is appended in
    /// input order when it is false.
    pub fn record_if_failed(
        &mut self,
        held: bool,
        kind: K,
        element: impl Into<String>,
        message: impl Into<String>,
    ) {
        if !held {
            self.errors.push(ValidationError {
                kind,
                element: element.into(),
                message: message.into(),
            });
        }
    }

    /// All recorded violations, in recording order.
    pub fn all(&self) -> &[ValidationError<K>] {
        &self.errors
    }

    /// Violations recorded for one element kind, in recording order.
    pub fn errors_for(&self, kind: K) -> impl Iterator<Item = &ValidationError<K>> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    /// Returns true if no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl<K> IntoIterator for ValidationResult<K> {
    type Item = ValidationError<K>;
    type IntoIter = std::vec::IntoIter<ValidationError<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a ValidationResult<K> {
    type Item = &'a ValidationError<K>;
    type IntoIter = std::slice::Iter<'a, ValidationError<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
