//! Turns the arguments of a variadic builder call into a [`RuleDescriptor`].
//!
//! This is the only place where the shape of the trailing argument is
//! inspected; everything downstream dispatches on [`Body`].

use serde_json::Value;

use crate::builder::args::{Arg, Assembler};
use crate::decls::Declarations;
use crate::error::ArgumentError;
use crate::model::Declaration;

/// What follows the selectors of a call.
pub enum Body<'a> {
    Declarations(Vec<Declaration>),
    Assembler(Assembler<'a>),
}

pub struct RuleDescriptor<'a> {
    /// Verbatim, possibly empty.
    pub selectors: Vec<String>,
    pub body: Body<'a>,
}

pub fn parse_rule(mut args: Vec<Arg<'_>>) -> Result<RuleDescriptor<'_>, ArgumentError> {
    let last = args.pop().ok_or(ArgumentError::NoArguments)?;
    if args.is_empty() && last.as_text().is_some() {
        return Err(ArgumentError::NoDeclarations);
    }

    let selectors = args
        .into_iter()
        .map(|arg| arg.into_text().map_err(|_| ArgumentError::SelectorNotString))
        .collect::<Result<Vec<_>, _>>()?;

    let body = match last {
        Arg::Map(decls) => Body::Declarations(decls.into_vec()),
        Arg::Maps(list) => Body::Declarations(Declarations::merge(list).into_vec()),
        Arg::Assembler(assembler) => Body::Assembler(assembler),
        Arg::Value(value) => Body::Declarations(declarations_from_value(value)?.into_vec()),
        Arg::Text(_) => return Err(ArgumentError::declarations_shape()),
    };

    Ok(RuleDescriptor { selectors, body })
}

/// Checks the `nest(selector, assembler)` pair and turns it into plain rule arguments.
pub fn parse_nest<'a>(selector: Arg<'a>, assembler: Arg<'a>) -> Result<Vec<Arg<'a>>, ArgumentError> {
    let selector = match selector.into_text() {
        Ok(text) if !text.is_empty() => text,
        Ok(_) => return Err(ArgumentError::MissingNestSelector),
        Err(_) => return Err(ArgumentError::SelectorNotString),
    };
    match assembler {
        Arg::Assembler(_) => Ok(vec![Arg::Text(selector), assembler]),
        _ => Err(ArgumentError::MissingNestAssembler),
    }
}

/// An object is one mapping, an array of objects is merged left to right.
fn declarations_from_value(value: Value) -> Result<Declarations, ArgumentError> {
    match value {
        Value::Object(map) => mapping_from_object(map),
        Value::Array(items) => {
            let mut sources = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(map) => sources.push(mapping_from_object(map)?),
                    _ => return Err(ArgumentError::declarations_shape()),
                }
            }
            Ok(Declarations::merge(sources))
        }
        _ => Err(ArgumentError::declarations_shape()),
    }
}

fn mapping_from_object(map: serde_json::Map<String, Value>) -> Result<Declarations, ArgumentError> {
    let mut decls = Declarations::new();
    for (property, value) in map {
        decls.insert(property, stringify_value(&value)?);
    }
    Ok(decls)
}

/// Stringifies a declaration value. Arrays join their items with `,`.
fn stringify_value(value: &Value) -> Result<String, ArgumentError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(stringify_number(number)),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(stringify_value)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parts.join(","))
        }
        Value::Object(_) => Err(ArgumentError::value_shape()),
    }
}

/// Integers print as-is, floats through `f64`'s `Display`, so `1.0` becomes `1`.
fn stringify_number(number: &serde_json::Number) -> String {
    if let Some(int) = number.as_i64() {
        int.to_string()
    } else if let Some(uint) = number.as_u64() {
        uint.to_string()
    } else {
        number
            .as_f64()
            .map_or_else(|| number.to_string(), |float| float.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args, decls};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn declarations_of(descriptor: RuleDescriptor<'_>) -> Vec<(String, String)> {
        match descriptor.body {
            Body::Declarations(decls) => decls.into_iter().map(|d| (d.property, d.value)).collect(),
            Body::Assembler(_) => panic!("expected a terminal descriptor"),
        }
    }

    fn parse_err(args: Vec<Arg<'_>>) -> ArgumentError {
        match parse_rule(args) {
            Ok(_) => panic!("expected the call to be rejected"),
            Err(err) => err,
        }
    }

    #[test]
    fn test_zero_arguments() {
        assert_eq!(parse_err(args![]), ArgumentError::NoArguments);
    }

    #[test]
    fn test_selector_only() {
        assert_eq!(parse_err(args!["div"]), ArgumentError::NoDeclarations);
        assert_eq!(parse_err(args![json!("div")]), ArgumentError::NoDeclarations);
    }

    #[test]
    fn test_non_string_selector() {
        assert_eq!(
            parse_err(args![decls! { "a" => 1 }, decls! { "b" => 2 }]),
            ArgumentError::SelectorNotString
        );
        assert_eq!(
            parse_err(args![json!(3), json!({ "color": "red" })]),
            ArgumentError::SelectorNotString
        );
    }

    #[test]
    fn test_trailing_string_is_not_declarations() {
        assert_eq!(parse_err(args!["a", "b"]), ArgumentError::declarations_shape());
        assert_eq!(parse_err(args!["a", json!(12)]), ArgumentError::declarations_shape());
        assert_eq!(
            parse_err(args!["a", json!([{ "color": "red" }, 4])]),
            ArgumentError::declarations_shape()
        );
    }

    #[test]
    fn test_selectors_are_verbatim() {
        let descriptor = parse_rule(args!["  h1 ", "h2", decls! { "margin" => 0 }]).unwrap();
        assert_eq!(descriptor.selectors, vec!["  h1 ".to_string(), "h2".to_string()]);
    }

    #[test]
    fn test_no_selectors_is_allowed() {
        let descriptor = parse_rule(args![decls! { "margin" => 0 }]).unwrap();
        assert!(descriptor.selectors.is_empty());
    }

    #[test]
    fn test_sequence_of_mappings_is_merged() {
        let descriptor = parse_rule(args![
            "p",
            vec![decls! { "color" => "red", "margin" => 0 }, decls! { "color" => "blue" }]
        ])
        .unwrap();
        assert_eq!(
            declarations_of(descriptor),
            vec![
                ("color".to_string(), "blue".to_string()),
                ("margin".to_string(), "0".to_string())
            ]
        );
    }

    #[test]
    fn test_json_values_are_stringified() {
        let descriptor = parse_rule(args![
            json!("p"),
            json!({ "z-index": 3, "hidden": false, "font-family": ["Arial", "sans-serif"], "content": "x" })
        ])
        .unwrap();
        assert_eq!(
            declarations_of(descriptor),
            vec![
                ("z-index".to_string(), "3".to_string()),
                ("hidden".to_string(), "false".to_string()),
                ("font-family".to_string(), "Arial,sans-serif".to_string()),
                ("content".to_string(), "x".to_string()),
            ]
        );
    }

    #[test]
    fn test_json_numbers_match_typed_numbers() {
        let descriptor = parse_rule(args![json!({
            "opacity": 1.0,
            "line-height": 1.5,
            "margin": -2,
            "z-index": u64::MAX
        })])
        .unwrap();
        assert_eq!(
            declarations_of(descriptor),
            vec![
                ("opacity".to_string(), 1.0_f64.to_string()),
                ("line-height".to_string(), "1.5".to_string()),
                ("margin".to_string(), "-2".to_string()),
                ("z-index".to_string(), u64::MAX.to_string()),
            ]
        );

        let typed = parse_rule(args![decls! { "opacity" => 1.0 }]).unwrap();
        assert_eq!(
            declarations_of(typed),
            vec![("opacity".to_string(), "1".to_string())]
        );
    }

    #[test]
    fn test_json_array_of_objects_is_merged() {
        let descriptor = parse_rule(args![json!([{ "a": "1", "b": "2" }, { "a": "3" }])]).unwrap();
        assert_eq!(
            declarations_of(descriptor),
            vec![("a".to_string(), "3".to_string()), ("b".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn test_nested_object_value_is_rejected() {
        assert_eq!(
            parse_err(args![json!({ "margin": { "top": 0 } })]),
            ArgumentError::value_shape()
        );
    }

    #[test]
    fn test_assembler_descriptor() {
        let descriptor = parse_rule(vec![Arg::from("nav"), Arg::assembler(|_| Ok(()))]).unwrap();
        assert_eq!(descriptor.selectors, vec!["nav".to_string()]);
        assert!(matches!(descriptor.body, Body::Assembler(_)));
    }

    #[test]
    fn test_nest_validation() {
        let ok = parse_nest(Arg::from("nav"), Arg::assembler(|_| Ok(()))).unwrap();
        assert_eq!(ok.len(), 2);

        let err = parse_nest(Arg::from(""), Arg::assembler(|_| Ok(()))).unwrap_err();
        assert_eq!(err, ArgumentError::MissingNestSelector);

        let err = parse_nest(Arg::from("nav"), Arg::from(decls! { "a" => 1 })).unwrap_err();
        assert_eq!(err, ArgumentError::MissingNestAssembler);
    }
}
