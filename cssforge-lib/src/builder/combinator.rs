use serde::Deserialize;

/// How a nested selector is attached to the selectors of its enclosing block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combination {
    /// `"{prefix} {child}"`, the descendant combinator.
    #[default]
    Descendant,
    /// `"{prefix}{child}"`, extends the compound selector.
    Compound,
}

impl Combination {
    /// An empty `child` under `Descendant` yields `"{prefix} "`. Output depends on that trailing space.
    pub fn join(self, prefix: &str, child: &str) -> String {
        match self {
            Combination::Descendant => format!("{} {}", prefix, child),
            Combination::Compound => format!("{}{}", prefix, child),
        }
    }
}

/// Cross product of `prefixes` and `children`, prefixes in the outer loop.
pub fn combine(prefixes: &[String], children: &[String], mode: Combination) -> Vec<String> {
    let mut combined = Vec::with_capacity(prefixes.len() * children.len());
    for prefix in prefixes {
        for child in children {
            combined.push(mode.join(prefix, child));
        }
    }
    combined
}
