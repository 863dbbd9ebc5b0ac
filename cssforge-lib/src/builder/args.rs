use std::fmt;

use serde_json::Value;

use crate::builder::subcontext::Subcontext;
use crate::decls::Declarations;
use crate::error::ArgumentError;

/// A nested-block callback. It runs synchronously inside the call that received it.
pub type Assembler<'a> = Box<dyn FnOnce(&mut Subcontext<'_>) -> Result<(), ArgumentError> + 'a>;

/// One argument of a variadic builder call.
///
/// Leading arguments are selectors; the last one decides whether the call
/// declares properties or opens a nested block.
pub enum Arg<'a> {
    Text(String),
    Map(Declarations),
    Maps(Vec<Declarations>),
    Assembler(Assembler<'a>),
    /// Loosely typed input, classified by the descriptor parser.
    Value(Value),
}

impl<'a> Arg<'a> {
    /// Wraps a closure as a nested-block argument.
    pub fn assembler<F>(f: F) -> Self
    where
        F: FnOnce(&mut Subcontext<'_>) -> Result<(), ArgumentError> + 'a,
    {
        Arg::Assembler(Box::new(f))
    }

    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            Arg::Text(text) => Some(text),
            Arg::Value(Value::String(text)) => Some(text),
            _ => None,
        }
    }

    pub(crate) fn into_text(self) -> Result<String, Self> {
        match self {
            Arg::Text(text) | Arg::Value(Value::String(text)) => Ok(text),
            other => Err(other),
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Arg::Map(decls) => f.debug_tuple("Map").field(decls).finish(),
            Arg::Maps(list) => f.debug_tuple("Maps").field(list).finish(),
            Arg::Assembler(_) => f.write_str("Assembler(..)"),
            Arg::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

impl From<&str> for Arg<'_> {
    fn from(text: &str) -> Self {
        Arg::Text(text.to_string())
    }
}

impl From<String> for Arg<'_> {
    fn from(text: String) -> Self {
        Arg::Text(text)
    }
}

impl From<&String> for Arg<'_> {
    fn from(text: &String) -> Self {
        Arg::Text(text.clone())
    }
}

impl From<Declarations> for Arg<'_> {
    fn from(decls: Declarations) -> Self {
        Arg::Map(decls)
    }
}

impl From<Vec<Declarations>> for Arg<'_> {
    fn from(list: Vec<Declarations>) -> Self {
        Arg::Maps(list)
    }
}

impl From<Value> for Arg<'_> {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

/// Collects builder arguments: `args!["nav", "aside", decls! { "margin" => 0 }]`.
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        vec![$($crate::Arg::from($arg)),+]
    };
}
