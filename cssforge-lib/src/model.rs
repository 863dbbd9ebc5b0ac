//! The fully-resolved pieces a stylesheet is made of.

use std::fmt;

/// One `@import` directive, kept in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDirective {
    pub url: String,
    /// Rendered after the url, joined with `, `.
    pub media_queries: Vec<String>,
}

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// A rule whose selectors are final, e.g. "nav a", "nav a:hover".
///
/// Nested blocks never end up here, only the leaves they produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRule {
    /// Never empty.
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Declaration {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ImportDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@import url(\"{}\")", self.url)?;
        if !self.media_queries.is_empty() {
            write!(f, " {}", self.media_queries.join(", "))?;
        }
        writeln!(f, ";")
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\t{}: {};", self.property, self.value)
    }
}

impl fmt::Display for ResolvedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{{\n", self.selectors.join(",\n"))?;
        for decl in &self.declarations {
            write!(f, "{}", decl)?;
        }
        write!(f, "}}\n\n")
    }
}
