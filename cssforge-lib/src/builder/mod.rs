//! The fluent builder: argument parsing, selector combination and nested contexts.

pub mod args;
pub mod combinator;
pub mod descriptor;
pub mod subcontext;
