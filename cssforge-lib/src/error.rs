use thiserror::Error;

/// Raised synchronously by a builder call whose arguments have the wrong shape.
///
/// A call that fails leaves the stylesheet exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("No arguments provided.")]
    NoArguments,
    #[error("No declarations provided.")]
    NoDeclarations,
    #[error("Selectors must be strings.")]
    SelectorNotString,
    #[error("{role} must be {shape}.")]
    Shape {
        role: &'static str,
        shape: &'static str,
    },
    #[error("A selector must be provided for the nested rules.")]
    MissingNestSelector,
    #[error("An assembler function must be provided for the nested rules.")]
    MissingNestAssembler,
}

impl ArgumentError {
    pub(crate) fn declarations_shape() -> Self {
        ArgumentError::Shape {
            role: "Declarations",
            shape: "a mapping, a sequence of mappings or an assembler",
        }
    }

    pub(crate) fn value_shape() -> Self {
        ArgumentError::Shape {
            role: "Declaration values",
            shape: "strings, numbers, booleans or sequences of them",
        }
    }

    pub(crate) fn import_shape() -> Self {
        ArgumentError::Shape {
            role: "Import arguments",
            shape: "strings",
        }
    }
}
