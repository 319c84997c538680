//! A single hypermedia link, possibly templated.

use serde::{Deserialize, Serialize};

/// A link discovered from a `_links` section.
///
/// When `templated` is true, `href` is an RFC6570-style URI template and
/// must be resolved with [`Link::resolve`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub templated: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into(), templated: false }
    }

    pub fn templated(href: impl Into<String>) -> Self {
        Self { href: href.into(), templated: true }
    }

    /// Resolve this link to a concrete (still possibly relative) URI.
    ///
    /// Non-templated links are returned verbatim. Templated links expand
    /// the subset of RFC6570 the API uses: simple `{var}`, reserved
    /// `{+var}`, form-style query `{?a,b}` and continuation `{&a}`.
    /// Parameters missing from `parameters` are omitted from the
    /// expansion, never an error.
    pub fn resolve(&self, parameters: &[(&str, &str)]) -> String {
        if !self.templated {
            return self.href.clone();
        }
        expand_template(&self.href, parameters)
    }
}

fn expand_template(template: &str, parameters: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                out.push_str(&expand_expression(&after[..end], parameters));
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated expression; emit verbatim.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

fn expand_expression(expression: &str, parameters: &[(&str, &str)]) -> String {
    let (operator, variables) = match expression.chars().next() {
        Some(op @ ('+' | '?' | '&')) => (Some(op), &expression[1..]),
        _ => (None, expression),
    };

    let lookup = |name: &str| {
        parameters.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    };

    match operator {
        Some('?') | Some('&') => {
            let pairs: Vec<String> = variables
                .split(',')
                .filter_map(|name| {
                    lookup(name).map(|value| format!("{name}={}", urlencoding::encode(value)))
                })
                .collect();
            if pairs.is_empty() {
                String::new()
            } else {
                let prefix = if operator == Some('?') { '?' } else { '&' };
                format!("{prefix}{}", pairs.join("&"))
            }
        }
        // Reserved expansion keeps characters like '/' usable in values.
        Some(_) => variables.split(',').filter_map(lookup).collect::<Vec<_>>().join(","),
        None => variables
            .split(',')
            .filter_map(|name| lookup(name).map(|value| urlencoding::encode(value).into_owned()))
            .collect::<Vec<_>>()
            .join(","),
    }
}
