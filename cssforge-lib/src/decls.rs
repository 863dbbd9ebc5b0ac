//! Insertion-ordered declaration mappings.
//!
//! A `Declarations` value plays the part of a `{ property: value }` object:
//! keys keep the order they were first inserted in, and writing a key twice
//! replaces the value without moving it.

use crate::model::Declaration;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<Declaration>,
}

impl Declarations {
    pub fn new() -> Self {
        Declarations {
            entries: Vec::new(),
        }
    }

    /// Sets `property`, overriding an earlier value in place.
    pub fn insert(&mut self, property: impl Into<String>, value: impl ToString) -> &mut Self {
        let property = property.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|d| d.property == property) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Declaration { property, value }),
        }
        self
    }

    /// Chaining form of [`Declarations::insert`].
    pub fn with(mut self, property: impl Into<String>, value: impl ToString) -> Self {
        self.insert(property, value);
        self
    }

    /// Folds a sequence of mappings into one, later keys winning.
    pub fn merge<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Declarations>,
    {
        let mut merged = Declarations::new();
        for source in sources {
            for decl in source.entries {
                merged.insert(decl.property, decl.value);
            }
        }
        merged
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.entries.iter()
    }

    /// Flattens into the declaration list stored on a rule.
    pub fn into_vec(self) -> Vec<Declaration> {
        self.entries
    }
}

impl<K, V> FromIterator<(K, V)> for Declarations
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut decls = Declarations::new();
        for (property, value) in iter {
            decls.insert(property, value);
        }
        decls
    }
}

impl IntoIterator for Declarations {
    type Item = Declaration;
    type IntoIter = std::vec::IntoIter<Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Builds a [`Declarations`] mapping: `decls! { "color" => "red", "margin" => 0 }`.
#[macro_export]
macro_rules! decls {
    () => {
        $crate::Declarations::new()
    };
    ($($property:expr => $value:expr),+ $(,)?) => {{
        let mut decls = $crate::Declarations::new();
        $( decls.insert($property, $value); )+
        decls
    }};
}
