//! HTTP `Link` header parsing
//!
//! Maps each relation name to its target, e.g.
//! `<.acl>; rel="acl", <.meta>; rel="describedBy"` gives
//! `{"acl": ".acl", "describedBy": ".meta"}`.

use std::collections::HashMap;

/// Parse a `Link` header into `rel → target`
///
/// Malformed entries are skipped. When a rel appears twice the later
/// target wins. Multi-valued rels (`rel="acl meta"`) map every value.
pub fn parse_link_header(header: &str) -> HashMap<String, String> {
    let mut rels = HashMap::new();
    for entry in split_outside_quotes(header, ',') {
        let Some((target, params)) = split_target(entry) else {
            continue;
        };
        for param in split_outside_quotes(params, ';') {
            let Some((name, value)) = param.split_once('=') else {
                continue;
            };
            if !name.trim().eq_ignore_ascii_case("rel") {
                continue;
            }
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            for rel in value.split_whitespace() {
                rels.insert(rel.to_string(), target.to_string());
            }
        }
    }
    rels
}

/// `<target> ; params` → (`target`, `params`)
fn split_target(entry: &str) -> Option<(&str, &str)> {
    let entry = entry.trim();
    let rest = entry.strip_prefix('<')?;
    let end = rest.find('>')?;
    Some((&rest[..end], &rest[end + 1..]))
}

/// Split on `sep` while ignoring separators inside quotes or angle brackets
fn split_outside_quotes(input: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut in_angle = false;
    let mut start = 0;
    for (i, c) in input.char_indices() {
        match c {
            '"' if !in_angle => in_quotes = !in_quotes,
            '<' if !in_quotes => in_angle = true,
            '>' if !in_quotes => in_angle = false,
            c if c == sep && !in_quotes && !in_angle => {
                parts.push(&input[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts.into_iter().filter(|p| !p.trim().is_empty()).collect()
}
