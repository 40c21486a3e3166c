//! Named text transforms applied to whole file contents.
//!
//! Only `upper` and `lower` change text. Any other name is accepted and
//! passes content through untouched, keeping the name so it can still be
//! used for output naming.

use std::{convert::Infallible, fmt, str::FromStr};

/// A text transform selected by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Transform {
    #[default]
    Upper,
    Lower,
    /// Identity transform for names that are not recognised.
    Passthrough(String),
}

impl Transform {
    pub const DEFAULT_NAME: &'static str = "upper";

    pub fn from_name(name: &str) -> Self {
        match name {
            "upper" => Self::Upper,
            "lower" => Self::Lower,
            other => Self::Passthrough(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Passthrough(name) => name,
        }
    }

    /// Whether the transform actually rewrites text.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Passthrough(_))
    }

    /// Apply the transform. Case mappings are length preserving in characters:
    /// a character whose mapping expands to several characters is kept as is.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Upper => text.chars().map(upper_char).collect(),
            Self::Lower => text.chars().map(lower_char).collect(),
            Self::Passthrough(_) => text.to_owned(),
        }
    }
}

impl FromStr for Transform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn upper_char(c: char) -> char {
    single(c, c.to_uppercase())
}

fn lower_char(c: char) -> char {
    single(c, c.to_lowercase())
}

fn single(original: char, mut mapped: impl Iterator<Item = char>) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(m), None) => m,
        _ => original,
    }
}
