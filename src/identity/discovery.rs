//! Link discovery: which documents describe the profile's subject

use crate::graph::{Graph, Term};
use crate::vocab::{FOAF, OWL, PIM, RDFS};
use crate::web::document_url;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a linked document relates to the primary subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// `owl:sameAs`
    SameAs,
    /// `rdfs:seeAlso`
    SeeAlso,
    /// `pim:preferencesFile`
    PreferencesFile,
}

impl Relation {
    pub const ALL: [Relation; 3] = [Self::SameAs, Self::SeeAlso, Self::PreferencesFile];

    /// Predicate term for this relation
    pub fn predicate(&self) -> Term {
        match self {
            Self::SameAs => OWL.term("sameAs"),
            Self::SeeAlso => RDFS.term("seeAlso"),
            Self::PreferencesFile => PIM.term("preferencesFile"),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameAs => write!(f, "sameAs"),
            Self::SeeAlso => write!(f, "seeAlso"),
            Self::PreferencesFile => write!(f, "preferencesFile"),
        }
    }
}

/// Related documents found in a profile, one sequence per relation
///
/// Order follows the graph's statement order. Nothing is sorted or
/// de-duplicated; a URL may appear under several relations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSet {
    /// The resolved primary subject (the WebID), if any
    pub subject: Option<Term>,
    pub same_as: Vec<String>,
    pub see_also: Vec<String>,
    pub preferences: Vec<String>,
}

impl LinkSet {
    /// Total number of linked documents to fetch
    pub fn len(&self) -> usize {
        self.same_as.len() + self.see_also.len() + self.preferences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn targets(&self, relation: Relation) -> &[String] {
        match relation {
            Relation::SameAs => &self.same_as,
            Relation::SeeAlso => &self.see_also,
            Relation::PreferencesFile => &self.preferences,
        }
    }

    /// Every (relation, target) pair, relations in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Relation, &str)> {
        Relation::ALL.into_iter().flat_map(move |relation| {
            self.targets(relation)
                .iter()
                .map(move |target| (relation, target.as_str()))
        })
    }
}

/// Find the subject a profile document is about
///
/// Looks for `<seed> foaf:primaryTopic ?webid`, first with the URL as given
/// and then with its fragment stripped, since profiles usually state the
/// topic of the document itself (`<> foaf:primaryTopic <#me>`).
pub fn primary_topic<'g>(graph: &'g Graph, seed_url: &str) -> Option<&'g Term> {
    let predicate = FOAF.term("primaryTopic");
    let doc = document_url(seed_url);
    let mut candidates = vec![seed_url];
    if doc != seed_url {
        candidates.push(doc);
    }
    candidates
        .into_iter()
        .find_map(|subject| graph.any(Some(&Term::iri(subject)), Some(&predicate), None))
}

/// Collect the documents linked from the profile's primary subject
///
/// Without a primary topic all three sequences are empty.
pub fn discover_links(graph: &Graph, seed_url: &str) -> LinkSet {
    let Some(subject) = primary_topic(graph, seed_url) else {
        return LinkSet::default();
    };
    let objects = |relation: Relation| -> Vec<String> {
        graph
            .each(subject, &relation.predicate())
            .into_iter()
            .map(|object| object.value().to_string())
            .collect()
    };
    LinkSet {
        same_as: objects(Relation::SameAs),
        see_also: objects(Relation::SeeAlso),
        preferences: objects(Relation::PreferencesFile),
        subject: Some(subject.clone()),
    }
}
