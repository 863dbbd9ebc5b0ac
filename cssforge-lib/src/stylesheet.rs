use std::fmt;

use log::debug;

use crate::builder::args::Arg;
use crate::builder::descriptor::{parse_nest, parse_rule};
use crate::builder::subcontext::expand;
use crate::error::ArgumentError;
use crate::model::{ImportDirective, ResolvedRule};
use crate::render::{self, CssDocument, Signature};

/// Selector used for root rules declared without one.
pub const WILDCARD_SELECTOR: &str = "*";

/// An append-only stylesheet under construction.
///
/// Every builder call either succeeds completely or leaves the sheet unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    imports: Vec<ImportDirective>,
    rules: Vec<ResolvedRule>,
}

/// Creates an empty [`Stylesheet`].
pub fn make_stylesheet() -> Stylesheet {
    Stylesheet::new()
}

impl Stylesheet {
    pub fn new() -> Self {
        Stylesheet {
            imports: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn imports(&self) -> &[ImportDirective] {
        &self.imports
    }

    /// The resolved leaf rules, in the order they were produced.
    pub fn rules(&self) -> &[ResolvedRule] {
        &self.rules
    }

    /// `rule(selectors.., declarations | assembler)`.
    ///
    /// Without selectors the rule applies to `*`. An assembler receives a
    /// [`Subcontext`](crate::Subcontext) scoped to the selectors.
    pub fn rule<'a, I>(&mut self, args: I) -> Result<&mut Self, ArgumentError>
    where
        I: IntoIterator<Item = Arg<'a>>,
    {
        self.add(args.into_iter().collect())?;
        Ok(self)
    }

    pub fn r<'a, I>(&mut self, args: I) -> Result<&mut Self, ArgumentError>
    where
        I: IntoIterator<Item = Arg<'a>>,
    {
        self.rule(args)
    }

    /// Same as `rule(selector, assembler)`, with the pair validated first.
    pub fn nest<'a>(
        &mut self,
        selector: impl Into<Arg<'a>>,
        assembler: impl Into<Arg<'a>>,
    ) -> Result<&mut Self, ArgumentError> {
        let args = parse_nest(selector.into(), assembler.into())?;
        self.add(args)?;
        Ok(self)
    }

    pub fn n<'a>(
        &mut self,
        selector: impl Into<Arg<'a>>,
        assembler: impl Into<Arg<'a>>,
    ) -> Result<&mut Self, ArgumentError> {
        self.nest(selector, assembler)
    }

    /// `import(url, media_queries..)`.
    pub fn import<'a, I>(&mut self, args: I) -> Result<&mut Self, ArgumentError>
    where
        I: IntoIterator<Item = Arg<'a>>,
    {
        let mut parts = args
            .into_iter()
            .map(|arg| arg.into_text().map_err(|_| ArgumentError::import_shape()));
        let url = parts.next().ok_or(ArgumentError::NoArguments)??;
        let media_queries = parts.collect::<Result<Vec<_>, _>>()?;

        debug!("import {:?} {:?}", url, media_queries);
        self.imports.push(ImportDirective { url, media_queries });
        Ok(self)
    }

    pub fn i<'a, I>(&mut self, args: I) -> Result<&mut Self, ArgumentError>
    where
        I: IntoIterator<Item = Arg<'a>>,
    {
        self.import(args)
    }

    /// Renders the sheet. Repeated calls return identical text.
    pub fn render_css(&self, signature: impl Into<Signature>) -> String {
        let signature = signature.into();
        debug!(
            "rendering {} imports and {} rules",
            self.imports.len(),
            self.rules.len()
        );
        render::render_css(&self.imports, &self.rules, &signature)
    }

    fn add(&mut self, args: Vec<Arg<'_>>) -> Result<(), ArgumentError> {
        let descriptor = parse_rule(args)?;
        let selectors = if descriptor.selectors.is_empty() {
            vec![WILDCARD_SELECTOR.to_string()]
        } else {
            descriptor.selectors
        };
        debug!("rule {:?}", selectors);
        expand(&mut self.rules, selectors, descriptor.body)
    }
}

/// Renders with the default signature.
impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let document = CssDocument {
            imports: &self.imports,
            rules: &self.rules,
            signature: &Signature::Default,
        };
        write!(f, "{}", document)
    }
}
