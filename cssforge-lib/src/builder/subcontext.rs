//! Scoped builders for nested rule blocks.
//!
//! A [`Subcontext`] carries the already-combined selectors of its enclosing
//! block and a borrow of the stylesheet's rule list. Each nested call derives
//! a fresh prefix set, so sibling blocks never see each other's selectors.

use log::trace;

use crate::builder::args::Arg;
use crate::builder::combinator::{combine, Combination};
use crate::builder::descriptor::{parse_nest, parse_rule, Body};
use crate::error::ArgumentError;
use crate::model::ResolvedRule;

pub struct Subcontext<'s> {
    rules: &'s mut Vec<ResolvedRule>,
    prefixes: Vec<String>,
}

impl<'s> Subcontext<'s> {
    pub(crate) fn new(rules: &'s mut Vec<ResolvedRule>, prefixes: Vec<String>) -> Self {
        Subcontext { rules, prefixes }
    }

    /// Selectors every rule added here is combined with.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Adds a rule whose selectors are descendants of this block's selectors.
    pub fn rule<'a, I>(&mut self, args: I) -> Result<&mut Self, ArgumentError>
    where
        I: IntoIterator<Item = Arg<'a>>,
    {
        self.add(args.into_iter().collect(), Combination::Descendant)?;
        Ok(self)
    }

    pub fn r<'a, I>(&mut self, args: I) -> Result<&mut Self, ArgumentError>
    where
        I: IntoIterator<Item = Arg<'a>>,
    {
        self.rule(args)
    }

    /// Adds a rule whose selectors are appended directly to this block's selectors.
    pub fn spec<'a, I>(&mut self, args: I) -> Result<&mut Self, ArgumentError>
    where
        I: IntoIterator<Item = Arg<'a>>,
    {
        self.add(args.into_iter().collect(), Combination::Compound)?;
        Ok(self)
    }

    pub fn s<'a, I>(&mut self, args: I) -> Result<&mut Self, ArgumentError>
    where
        I: IntoIterator<Item = Arg<'a>>,
    {
        self.spec(args)
    }

    /// Same as `rule(selector, assembler)`, with the pair validated first.
    pub fn nest<'a>(
        &mut self,
        selector: impl Into<Arg<'a>>,
        assembler: impl Into<Arg<'a>>,
    ) -> Result<&mut Self, ArgumentError> {
        let args = parse_nest(selector.into(), assembler.into())?;
        self.add(args, Combination::Descendant)?;
        Ok(self)
    }

    pub fn n<'a>(
        &mut self,
        selector: impl Into<Arg<'a>>,
        assembler: impl Into<Arg<'a>>,
    ) -> Result<&mut Self, ArgumentError> {
        self.nest(selector, assembler)
    }

    fn add(&mut self, args: Vec<Arg<'_>>, mode: Combination) -> Result<(), ArgumentError> {
        let descriptor = parse_rule(args)?;
        let children = if descriptor.selectors.is_empty() {
            vec![String::new()]
        } else {
            descriptor.selectors
        };
        let selectors = combine(&self.prefixes, &children, mode);
        expand(self.rules, selectors, descriptor.body)
    }
}

/// Stores a terminal body, or runs an assembler in a subcontext scoped to `selectors`.
///
/// Rules pushed by a failing assembler are dropped again before the error is returned.
pub(crate) fn expand(
    rules: &mut Vec<ResolvedRule>,
    selectors: Vec<String>,
    body: Body<'_>,
) -> Result<(), ArgumentError> {
    match body {
        Body::Declarations(declarations) => {
            trace!("resolved rule {:?} ({} declarations)", selectors, declarations.len());
            rules.push(ResolvedRule {
                selectors,
                declarations,
            });
            Ok(())
        }
        Body::Assembler(assembler) => {
            trace!("entering nested block {:?}", selectors);
            let mark = rules.len();
            let outcome = assembler(&mut Subcontext::new(rules, selectors));
            if outcome.is_err() {
                rules.truncate(mark);
            }
            outcome
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args, decls};
    use pretty_assertions::assert_eq;

    fn selectors_of(rules: &[ResolvedRule]) -> Vec<Vec<String>> {
        rules.iter().map(|r| r.selectors.clone()).collect()
    }

    #[test]
    fn test_rule_and_spec_modes() {
        let mut rules = Vec::new();
        let mut ctx = Subcontext::new(&mut rules, vec!["a".to_string()]);
        ctx.rule(args!["span", decls! { "x" => 1 }])
            .unwrap()
            .spec(args![":hover", decls! { "x" => 2 }])
            .unwrap()
            .r(args![decls! { "x" => 3 }])
            .unwrap()
            .s(args![decls! { "x" => 4 }])
            .unwrap();
        assert_eq!(
            selectors_of(&rules),
            vec![
                vec!["a span".to_string()],
                vec!["a:hover".to_string()],
                vec!["a ".to_string()],
                vec!["a".to_string()],
            ]
        );
    }

    #[test]
    fn test_nested_prefixes_are_rederived() {
        let mut rules = Vec::new();
        let mut ctx = Subcontext::new(&mut rules, vec!["ul".to_string()]);
        ctx.rule(vec![
            Arg::from("li"),
            Arg::assembler(|inner| {
                assert_eq!(inner.prefixes(), ["ul li".to_string()]);
                inner.spec(args![".active", decls! { "x" => 1 }])?;
                Ok(())
            }),
        ])
        .unwrap()
        .rule(args!["p", decls! { "x" => 2 }])
        .unwrap();
        assert_eq!(
            selectors_of(&rules),
            vec![vec!["ul li.active".to_string()], vec!["ul p".to_string()]]
        );
    }

    #[test]
    fn test_failing_assembler_leaves_no_rules() {
        let mut rules = Vec::new();
        let mut ctx = Subcontext::new(&mut rules, vec!["div".to_string()]);
        let err = ctx
            .rule(vec![
                Arg::from("p"),
                Arg::assembler(|inner| {
                    inner.rule(args!["b", decls! { "x" => 1 }])?;
                    inner.rule(args!["i"])?;
                    Ok(())
                }),
            ])
            .err();
        assert_eq!(err, Some(ArgumentError::NoDeclarations));
        assert!(rules.is_empty());
    }

    #[test]
    fn test_nest_joins_with_space() {
        let mut rules = Vec::new();
        let mut ctx = Subcontext::new(&mut rules, vec!["table".to_string()]);
        ctx.nest("tr", Arg::assembler(|inner| inner.rule(args!["td", decls! { "x" => 1 }]).map(|_| ())))
            .unwrap();
        assert_eq!(selectors_of(&rules), vec![vec!["table tr td".to_string()]]);
    }
}
