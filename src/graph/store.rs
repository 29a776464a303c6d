//! Graph: an append-only multiset of statements

use super::statement::Statement;
use super::term::Term;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An in-memory RDF graph
///
/// Statements are kept in insertion order and never removed. Duplicates are
/// permitted; two identical four-field statements are both retained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    statements: Vec<Statement>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement built from its parts
    pub fn add(&mut self, subject: Term, predicate: Term, object: Term, why: Option<&str>) {
        self.statements.push(Statement {
            subject,
            predicate,
            object,
            why: why.map(str::to_string),
        });
    }

    /// Append an existing statement
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    /// All statements matching the pattern, in insertion order
    ///
    /// `None` in any position is a wildcard.
    pub fn statements_matching(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        why: Option<&str>,
    ) -> Vec<&Statement> {
        self.statements
            .iter()
            .filter(|st| st.matches(subject, predicate, object, why))
            .collect()
    }

    /// First term filling the single wildcard position of the pattern
    ///
    /// With subject and predicate given this returns an object; with
    /// predicate and object given, a subject. Otherwise the object of the
    /// first matching statement is returned.
    pub fn any(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Option<&Term> {
        let st = self
            .statements
            .iter()
            .find(|st| st.matches(subject, predicate, object, None))?;
        match (subject, predicate, object) {
            (None, Some(_), Some(_)) => Some(&st.subject),
            (Some(_), None, Some(_)) => Some(&st.predicate),
            _ => Some(&st.object),
        }
    }

    /// Every object of `subject predicate ?o`, in insertion order
    pub fn each(&self, subject: &Term, predicate: &Term) -> Vec<&Term> {
        self.statements
            .iter()
            .filter(|st| st.matches(Some(subject), Some(predicate), None, None))
            .map(|st| &st.object)
            .collect()
    }

    /// Distinct provenance documents present in the graph
    pub fn documents(&self) -> BTreeSet<&str> {
        self.statements
            .iter()
            .filter_map(|st| st.why.as_deref())
            .collect()
    }

    /// Append statements from `source` into this graph
    ///
    /// With a provenance URL, only statements of `source` tagged with it are
    /// copied, and they keep that tag. Without one, every statement is
    /// copied with its original tag. Nothing already present is touched.
    /// Returns the number of statements appended.
    pub fn merge_from(&mut self, source: &Graph, why: Option<&str>) -> usize {
        let before = self.statements.len();
        for st in source.statements_matching(None, None, None, why) {
            self.statements.push(Statement {
                subject: st.subject.clone(),
                predicate: st.predicate.clone(),
                object: st.object.clone(),
                why: why.map(str::to_string).or_else(|| st.why.clone()),
            });
        }
        self.statements.len() - before
    }

    /// Render as N-Quads (N-Triples for statements without provenance)
    pub fn to_ntriples(&self) -> String {
        let mut out = String::new();
        for st in &self.statements {
            out.push_str(&st.to_string());
            out.push('\n');
        }
        out
    }
}

impl FromIterator<Statement> for Graph {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self {
            statements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Statement> for Graph {
    fn extend<I: IntoIterator<Item = Statement>>(&mut self, iter: I) {
        self.statements.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
