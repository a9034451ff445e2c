use serde::{ Deserialize, Serialize };
use std::fmt;

/// The laws an equality relation has to obey
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawKind {
    Reflexivity,
    Symmetry,
    Transitivity,
    Consistency,
    NullSafety,
    /// Equal values must hash equally. Only checked on request.
    HashAgreement,
}

impl LawKind {
    /// The five laws run by a plain `verify`, in run order
    pub const CONTRACT: [LawKind; 5] = [
        LawKind::Reflexivity,
        LawKind::Symmetry,
        LawKind::Transitivity,
        LawKind::Consistency,
        LawKind::NullSafety,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LawKind::Reflexivity => "reflexivity",
            LawKind::Symmetry => "symmetry",
            LawKind::Transitivity => "transitivity",
            LawKind::Consistency => "consistency",
            LawKind::NullSafety => "null-safety",
            LawKind::HashAgreement => "hash-agreement",
        }
    }

    /// One-line statement of the law
    pub fn statement(&self) -> &'static str {
        match self {
            LawKind::Reflexivity => "eq(x, x) is true for every x",
            LawKind::Symmetry => "eq(x, y) equals eq(y, x) for every x and y",
            LawKind::Transitivity => "eq(x, y) and eq(y, z) imply eq(x, z)",
            LawKind::Consistency => "repeated calls of eq(x, y) return the same result",
            LawKind::NullSafety => "eq(x, absent) is false and never fails",
            LawKind::HashAgreement => "eq(x, y) implies hash(x) == hash(y)",
        }
    }
}

impl fmt::Display for LawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
