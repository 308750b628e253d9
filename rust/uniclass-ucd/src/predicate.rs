use std::fmt;

use crate::{GeneralCategory, Subcategory};

/// A codepoint classification that gets its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Space,
    IdStart,
    IdContinue,
    Graphic,
    Category(GeneralCategory),
    Subcategory(Subcategory),
}

impl Predicate {
    /// The predicates every aggregation produces.
    pub const CORE: [Predicate; 3] = [Predicate::Space, Predicate::IdStart, Predicate::IdContinue];

    /// Stable snake_case identifier (`space`, `id_start`, `gc_lu`).
    pub fn key(&self) -> String {
        match self {
            Predicate::Space => "space".to_string(),
            Predicate::IdStart => "id_start".to_string(),
            Predicate::IdContinue => "id_continue".to_string(),
            Predicate::Graphic => "graphic".to_string(),
            Predicate::Category(c) => format!("gc_{}", c.code().to_ascii_lowercase()),
            Predicate::Subcategory(s) => format!("gc_{}", s.code().to_ascii_lowercase()),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
