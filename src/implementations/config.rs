use log::debug;
use serde::{ Deserialize, Serialize };
use std::collections::{ HashMap, HashSet };
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::traits::predicate::{ EqualityPredicate, PredicateFailure };

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON config file: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Sample label {0:?} appears more than once")]
    DuplicateSample(String),

    #[error("Pair refers to unknown label {0:?}")]
    UnknownLabel(String),

    #[error("Absent sentinel {0:?} is also used as a sample label")]
    SentinelCollision(String),
}

fn default_absent() -> String {
    "null".to_string()
}

/// A relation described as data: labelled samples plus the ordered pairs
/// that compare equal.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RelationConfig {
    /// Display name for the relation
    #[serde(default)]
    pub name: Option<String>,

    /// Sample labels, in verification order
    pub samples: Vec<String>,

    /// Label standing for "no value"
    #[serde(default = "default_absent")]
    pub absent: String,

    /// Ordered pairs `[left, right]` for which the relation answers true
    #[serde(default)]
    pub equal: Vec<(String, String)>,

    /// Treat every listed pair as holding in both directions
    #[serde(default)]
    pub symmetric: bool,
}

impl RelationConfig {
    /// Load a relation from a YAML or JSON file, chosen by extension
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        debug!("Loading relation from {} as {}", path.display(), if is_json { "JSON" } else { "YAML" });

        if is_json {
            Ok(serde_json::from_str(&contents)?)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Check labels and build the lookup table.
    ///
    /// Labels are resolved to indices here once; the sentinel takes the
    /// index just past the last sample.
    pub fn into_table(self) -> Result<RelationTable, ConfigError> {
        let mut index = HashMap::new();
        for (i, label) in self.samples.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(ConfigError::DuplicateSample(label.clone()));
            }
        }
        if index.contains_key(&self.absent) {
            return Err(ConfigError::SentinelCollision(self.absent));
        }
        index.insert(self.absent.clone(), self.samples.len());

        let mut pairs = HashSet::new();
        for (left, right) in &self.equal {
            let l = *index.get(left).ok_or_else(|| ConfigError::UnknownLabel(left.clone()))?;
            let r = *index.get(right).ok_or_else(|| ConfigError::UnknownLabel(right.clone()))?;
            if self.symmetric {
                pairs.insert((r, l));
            }
            pairs.insert((l, r));
        }

        Ok(RelationTable {
            name: self.name.unwrap_or_else(|| "relation".to_string()),
            samples: self.samples,
            absent: self.absent,
            index,
            pairs,
        })
    }
}

/// Lookup-backed equality over string labels
#[derive(Debug, Clone)]
pub struct RelationTable {
    pub name: String,
    pub samples: Vec<String>,
    pub absent: String,
    index: HashMap<String, usize>,
    pairs: HashSet<(usize, usize)>,
}

impl RelationTable {
    /// Whether `left` compares equal to `right`; unknown labels never do
    pub fn holds(&self, left: &str, right: &str) -> bool {
        match (self.index.get(left), self.index.get(right)) {
            (Some(&l), Some(&r)) => self.pairs.contains(&(l, r)),
            _ => false,
        }
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}

impl EqualityPredicate<String> for RelationTable {
    fn test(&self, left: &String, right: &String) -> Result<bool, PredicateFailure> {
        Ok(self.holds(left, right))
    }
}
