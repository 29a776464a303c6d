//! RDF response bodies → `Graph`

use crate::graph::{Graph, Literal, Statement, Term, XSD_STRING};
use oxrdfio::{RdfFormat, RdfParser};

/// Pick a syntax from a `Content-Type` value, defaulting to Turtle
///
/// N-Triples and `text/plain` are read as Turtle, which accepts both.
pub fn format_for(content_type: Option<&str>) -> RdfFormat {
    match content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .and_then(RdfFormat::from_media_type)
    {
        Some(RdfFormat::NTriples) | None => RdfFormat::Turtle,
        Some(format) => format,
    }
}

/// Parse `body` with `document` as base IRI
///
/// Every statement is tagged with `document` as provenance. Blank node
/// labels are renamed so two documents never share a blank node.
pub fn parse_document(body: &str, format: RdfFormat, document: &str) -> Result<Graph, String> {
    let parser = RdfParser::from_format(format)
        .with_base_iri(document)
        .map_err(|e| e.to_string())?
        .rename_blank_nodes();

    let mut graph = Graph::new();
    for quad in parser.for_reader(body.as_bytes()) {
        let quad = quad.map_err(|e| e.to_string())?;
        graph.push(
            Statement::new(
                convert_term(oxrdf::Term::from(quad.subject)),
                Term::Iri(quad.predicate.into_string()),
                convert_term(quad.object),
            )
            .with_why(document),
        );
    }
    Ok(graph)
}

fn convert_term(term: oxrdf::Term) -> Term {
    match term {
        oxrdf::Term::NamedNode(node) => Term::Iri(node.into_string()),
        oxrdf::Term::BlankNode(node) => Term::Blank(node.as_str().to_string()),
        oxrdf::Term::Literal(lit) => {
            let lit = if let Some(lang) = lit.language() {
                Literal::lang(lit.value(), lang)
            } else if lit.datatype().as_str() == XSD_STRING {
                Literal::plain(lit.value())
            } else {
                Literal::typed(lit.value(), lit.datatype().as_str())
            };
            Term::Literal(lit)
        }
        #[allow(unreachable_patterns)]
        other => Term::Literal(Literal::plain(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::FOAF;

    const DOC: &str = "https://example.org/profile";

    #[test]
    fn content_type_selects_format() {
        assert_eq!(format_for(Some("text/turtle; charset=utf-8")), RdfFormat::Turtle);
        assert_eq!(format_for(Some("application/n-triples")), RdfFormat::Turtle);
        assert_eq!(format_for(Some("application/rdf+xml")), RdfFormat::RdfXml);
        assert_eq!(format_for(None), RdfFormat::Turtle);
    }

    #[test]
    fn plain_text_body_is_read_as_turtle() {
        let body = "@prefix foaf: <http://xmlns.com/foaf/0.1/> .\n<> foaf:primaryTopic <#me> .";
        let format = format_for(Some("text/plain; charset=utf-8"));
        assert_eq!(format, RdfFormat::Turtle);

        let graph = parse_document(body, format, DOC).unwrap();
        let topic = graph.any(Some(&Term::iri(DOC)), Some(&FOAF.term("primaryTopic")), None);
        assert_eq!(topic, Some(&Term::iri("https://example.org/profile#me")));
    }

    #[test]
    fn turtle_resolves_relative_iris_against_document() {
        let body = r#"
            @prefix foaf: <http://xmlns.com/foaf/0.1/> .
            <> foaf:primaryTopic <#me> .
            <#me> foaf:name "Alice"@en .
        "#;
        let graph = parse_document(body, RdfFormat::Turtle, DOC).unwrap();
        assert_eq!(graph.len(), 2);

        let topic = graph.any(Some(&Term::iri(DOC)), Some(&FOAF.term("primaryTopic")), None);
        assert_eq!(topic, Some(&Term::iri("https://example.org/profile#me")));

        let name = graph.any(Some(&Term::iri("https://example.org/profile#me")), Some(&FOAF.term("name")), None);
        assert_eq!(name, Some(&Term::Literal(Literal::lang("Alice", "en"))));
    }

    #[test]
    fn statements_are_tagged_with_document() {
        let body = "<#me> <http://xmlns.com/foaf/0.1/nick> \"al\" .";
        let graph = parse_document(body, RdfFormat::Turtle, DOC).unwrap();
        assert!(graph.iter().all(|st| st.why.as_deref() == Some(DOC)));
    }

    #[test]
    fn typed_literals_keep_datatype() {
        let body = "<#me> <http://example.org/age> 42 .";
        let graph = parse_document(body, RdfFormat::Turtle, DOC).unwrap();
        let st = graph.iter().next().unwrap();
        assert_eq!(
            st.object,
            Term::Literal(Literal::typed("42", "http://www.w3.org/2001/XMLSchema#integer"))
        );
    }

    #[test]
    fn blank_nodes_are_renamed_per_document() {
        let body = "_:b0 <http://xmlns.com/foaf/0.1/name> \"x\" .";
        let a = parse_document(body, RdfFormat::Turtle, DOC).unwrap();
        let b = parse_document(body, RdfFormat::Turtle, DOC).unwrap();
        let subject = |g: &Graph| g.iter().next().unwrap().subject.clone();
        assert!(matches!(subject(&a), Term::Blank(_)));
        assert_ne!(subject(&a), subject(&b));
    }

    #[test]
    fn syntax_error_is_reported() {
        let err = parse_document("<#me> foaf:name", RdfFormat::Turtle, DOC).unwrap_err();
        assert!(!err.is_empty());
    }
}
