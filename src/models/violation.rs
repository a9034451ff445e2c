use serde::{ Deserialize, Serialize };
use std::fmt;

use crate::models::law::LawKind;

/// What a single predicate call produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Returned(bool),
    /// The predicate returned an error or panicked
    Raised(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Returned(value) => write!(f, "{}", value),
            Outcome::Raised(msg) => write!(f, "raised({})", msg),
        }
    }
}

/// One broken law with its counter-example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub law: LawKind,
    /// One to three sample indices, in the order they were passed to the predicate
    pub indices: Vec<usize>,
    /// Observed outcomes, in call order
    pub outcomes: Vec<Outcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Violation {
    pub fn new(law: LawKind, indices: Vec<usize>, outcomes: Vec<Outcome>) -> Self {
        Self { law, indices, outcomes, note: None }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices = self.indices
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let outcomes = self.outcomes
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} violated at ({}): [{}]", self.law, indices, outcomes)?;
        if let Some(note) = &self.note {
            write!(f, " {}", note)?;
        }
        Ok(())
    }
}
