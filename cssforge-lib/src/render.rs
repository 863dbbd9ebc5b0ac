//! Serializes a stylesheet to CSS text.
//!
//! Layout of the output, in order: the signature comment, the imports, one
//! blank separator line, then every rule block.

use std::fmt;

use crate::model::{ImportDirective, ResolvedRule};

/// Text used for the signature comment when the caller does not supply one.
pub const DEFAULT_SIGNATURE: &str = concat!(
    "Generated with ",
    env!("CARGO_PKG_NAME"),
    " (",
    env!("CARGO_PKG_VERSION"),
    ")."
);

/// The comment placed at the top of the rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Signature {
    /// `/* Generated with ... */`
    #[default]
    Default,
    /// No comment at all.
    Omitted,
    Custom(String),
}

impl Signature {
    fn text(&self) -> Option<&str> {
        match self {
            Signature::Default => Some(DEFAULT_SIGNATURE),
            Signature::Omitted => None,
            Signature::Custom(text) => Some(text),
        }
    }
}

impl From<&str> for Signature {
    fn from(text: &str) -> Self {
        Signature::Custom(text.to_string())
    }
}

impl From<String> for Signature {
    fn from(text: String) -> Self {
        Signature::Custom(text)
    }
}

/// `None` leaves the comment out.
impl From<Option<String>> for Signature {
    fn from(text: Option<String>) -> Self {
        text.map_or(Signature::Omitted, Signature::Custom)
    }
}

/// A read-only view of a stylesheet paired with its signature.
pub struct CssDocument<'a> {
    pub imports: &'a [ImportDirective],
    pub rules: &'a [ResolvedRule],
    pub signature: &'a Signature,
}

impl fmt::Display for CssDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.signature.text() {
            write!(f, "/* {} */\n\n", text)?;
        }
        for import in self.imports {
            write!(f, "{}", import)?;
        }
        writeln!(f)?;
        for rule in self.rules {
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}

pub fn render_css(
    imports: &[ImportDirective],
    rules: &[ResolvedRule],
    signature: &Signature,
) -> String {
    CssDocument {
        imports,
        rules,
        signature,
    }
    .to_string()
}
