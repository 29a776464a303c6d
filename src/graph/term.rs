//! RDF terms: IRIs, blank nodes and literals

use serde::{Deserialize, Serialize};
use std::fmt;

/// XSD string datatype, implied by plain literals
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// A literal value with optional datatype or language tag
///
/// Plain strings carry neither. A language-tagged literal never carries a
/// datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// Lexical form
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Literal {
    /// Create a plain string literal
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// Create a typed literal
    ///
    /// `xsd:string` is normalized away so that `"a"` and `"a"^^xsd:string`
    /// compare equal.
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        let datatype = datatype.into();
        Self {
            value: value.into(),
            datatype: (datatype != XSD_STRING).then_some(datatype),
            language: None,
        }
    }

    /// Create a language-tagged literal
    pub fn lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: Some(language.into().to_ascii_lowercase()),
        }
    }
}

/// A node or value appearing in a statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Term {
    /// Named node
    Iri(String),
    /// Blank node label (without the `_:` prefix)
    Blank(String),
    Literal(Literal),
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Self::Blank(label.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(Literal::plain(value))
    }

    /// The IRI, blank node label, or lexical form
    pub fn value(&self) -> &str {
        match self {
            Self::Iri(iri) => iri,
            Self::Blank(label) => label,
            Self::Literal(lit) => &lit.value,
        }
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Self::Iri(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

/// N-Triples rendering
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{}>", iri),
            Self::Blank(label) => write!(f, "_:{}", label),
            Self::Literal(lit) => {
                write!(f, "\"{}\"", escape_literal(&lit.value))?;
                if let Some(lang) = &lit.language {
                    write!(f, "@{}", lang)
                } else if let Some(dt) = &lit.datatype {
                    write!(f, "^^<{}>", dt)
                } else {
                    Ok(())
                }
            }
        }
    }
}

fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_of_each_kind() {
        assert_eq!(Term::iri("https://example.org/a").value(), "https://example.org/a");
        assert_eq!(Term::blank("b0").value(), "b0");
        assert_eq!(Term::literal("hello").value(), "hello");
    }

    #[test]
    fn xsd_string_is_normalized() {
        assert_eq!(Literal::typed("a", XSD_STRING), Literal::plain("a"));
    }

    #[test]
    fn display_renders_ntriples() {
        assert_eq!(Term::iri("https://example.org/a").to_string(), "<https://example.org/a>");
        assert_eq!(Term::blank("b0").to_string(), "_:b0");
        assert_eq!(
            Term::from(Literal::lang("Bonjour", "FR")).to_string(),
            "\"Bonjour\"@fr"
        );
        assert_eq!(
            Term::from(Literal::typed("42", "http://www.w3.org/2001/XMLSchema#integer"))
                .to_string(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }

    #[test]
    fn display_escapes_quotes_and_newlines() {
        let term = Term::literal("say \"hi\"\nnow");
        assert_eq!(term.to_string(), "\"say \\\"hi\\\"\\nnow\"");
    }
}
