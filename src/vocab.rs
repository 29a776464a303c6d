//! Vocabulary namespaces used for discovery and LDP requests

use crate::graph::Term;

/// An IRI prefix that mints terms by local name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace(&'static str);

impl Namespace {
    pub const fn new(base: &'static str) -> Self {
        Self(base)
    }

    pub fn base(&self) -> &'static str {
        self.0
    }

    /// Full IRI for a local name
    pub fn iri(&self, local: &str) -> String {
        format!("{}{}", self.0, local)
    }

    /// Named-node term for a local name
    pub fn term(&self, local: &str) -> Term {
        Term::Iri(self.iri(local))
    }
}

pub const RDF: Namespace = Namespace::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#");
pub const RDFS: Namespace = Namespace::new("http://www.w3.org/2000/01/rdf-schema#");
pub const FOAF: Namespace = Namespace::new("http://xmlns.com/foaf/0.1/");
pub const OWL: Namespace = Namespace::new("http://www.w3.org/2002/07/owl#");
pub const PIM: Namespace = Namespace::new("http://www.w3.org/ns/pim/space#");
pub const UI: Namespace = Namespace::new("http://www.w3.org/ns/ui#");
pub const DCT: Namespace = Namespace::new("http://purl.org/dc/terms/");
pub const LDP: Namespace = Namespace::new("http://www.w3.org/ns/ldp#");
