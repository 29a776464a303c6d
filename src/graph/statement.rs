//! Statement: a subject–predicate–object assertion with optional provenance

use super::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single assertion in a graph
///
/// Identity covers all four fields: the same triple contributed by two
/// documents is two distinct statements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    /// Document the statement was obtained from (`None` = asserted locally)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
}

impl Statement {
    /// Create a statement with no provenance
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            why: None,
        }
    }

    /// Attach a provenance document
    pub fn with_why(mut self, why: impl Into<String>) -> Self {
        self.why = Some(why.into());
        self
    }

    /// True if the statement matches every given position
    ///
    /// `None` acts as a wildcard.
    pub fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        why: Option<&str>,
    ) -> bool {
        subject.map_or(true, |s| *s == self.subject)
            && predicate.map_or(true, |p| *p == self.predicate)
            && object.map_or(true, |o| *o == self.object)
            && why.map_or(true, |w| self.why.as_deref() == Some(w))
    }
}

/// N-Triples line (provenance is rendered as the N-Quads graph label)
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if let Some(why) = &self.why {
            write!(f, " <{}>", why)?;
        }
        write!(f, " .")
    }
}
