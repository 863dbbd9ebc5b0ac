//! JSON descriptions of a stylesheet, replayed through the builder.
//!
//! ```json
//! {
//!   "imports": [["print.css", "print"]],
//!   "rules": [
//!     { "args": ["nav"], "nested": [
//!         { "args": ["a", { "color": "red" }] },
//!         { "combine": "compound", "args": [":hover", { "color": "blue" }] }
//!     ] }
//!   ]
//! }
//! ```

use log::debug;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::builder::args::Arg;
use crate::builder::combinator::Combination;
use crate::builder::subcontext::Subcontext;
use crate::error::ArgumentError;
use crate::stylesheet::Stylesheet;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetDocument {
    /// Argument lists of `import` calls.
    #[serde(default)]
    pub imports: Vec<Vec<Value>>,
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// One `rule` (or, nested, `spec`) call.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    #[serde(default)]
    pub combine: Combination,
    pub args: Vec<Value>,
    /// Replayed by an assembler appended after `args`.
    pub nested: Option<Vec<RuleEntry>>,
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid stylesheet document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("imports[{index}]: {source}")]
    Import {
        index: usize,
        #[source]
        source: ArgumentError,
    },
    #[error("rules[{index}]: {source}")]
    Rule {
        index: usize,
        #[source]
        source: ArgumentError,
    },
    #[error("rules[{index}]: compound rules need an enclosing rule")]
    CompoundAtRoot { index: usize },
}

/// Parses `text` and builds the stylesheet it describes.
pub fn load(text: &str) -> Result<Stylesheet, DocumentError> {
    SheetDocument::from_json(text)?.build()
}

impl SheetDocument {
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn build(&self) -> Result<Stylesheet, DocumentError> {
        let mut sheet = Stylesheet::new();

        for (index, import) in self.imports.iter().enumerate() {
            sheet
                .import(import.iter().cloned().map(Arg::Value))
                .map_err(|source| DocumentError::Import { index, source })?;
        }

        for (index, entry) in self.rules.iter().enumerate() {
            if entry.combine == Combination::Compound {
                return Err(DocumentError::CompoundAtRoot { index });
            }
            sheet
                .rule(entry_args(entry))
                .map_err(|source| DocumentError::Rule { index, source })?;
        }

        debug!(
            "document built {} imports and {} rules",
            sheet.imports().len(),
            sheet.rules().len()
        );
        Ok(sheet)
    }
}

fn entry_args(entry: &RuleEntry) -> Vec<Arg<'_>> {
    let mut args: Vec<Arg<'_>> = entry.args.iter().cloned().map(Arg::Value).collect();
    if let Some(nested) = &entry.nested {
        args.push(Arg::assembler(move |ctx| replay(ctx, nested)));
    }
    args
}

fn replay(ctx: &mut Subcontext<'_>, entries: &[RuleEntry]) -> Result<(), ArgumentError> {
    for entry in entries {
        match entry.combine {
            Combination::Descendant => ctx.rule(entry_args(entry))?,
            Combination::Compound => ctx.spec(entry_args(entry))?,
        };
    }
    Ok(())
}
