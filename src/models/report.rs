use serde::{ Deserialize, Serialize };
use std::fmt;

use crate::errors::EqlawResult;
use crate::models::law::LawKind;
use crate::models::violation::Violation;

/// Attached to every report. Sampling is finite, so a clean report is
/// evidence about the samples and nothing more.
pub const SAMPLING_LIMITATION: &str =
    "Laws were checked over the supplied samples only; a clean report is not a proof that the relation is an equivalence on all values.";

/// Pass/fail summary for one law
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawVerdict {
    pub law: LawKind,
    pub passed: bool,
    /// Number of samples, pairs or triples examined
    pub cases_checked: usize,
    pub violations: usize,
}

/// Result of running the law battery over a sample set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub sample_count: usize,
    pub repeats: usize,
    pub verdicts: Vec<LawVerdict>,
    pub violations: Vec<Violation>,
    pub limitation: String,
}

impl VerificationReport {
    pub fn new(sample_count: usize, repeats: usize) -> Self {
        Self {
            sample_count,
            repeats,
            verdicts: Vec::new(),
            violations: Vec::new(),
            limitation: SAMPLING_LIMITATION.to_string(),
        }
    }

    /// Append the result of one law check
    pub fn record(&mut self, law: LawKind, cases_checked: usize, violations: Vec<Violation>) {
        self.verdicts.push(LawVerdict {
            law,
            passed: violations.is_empty(),
            cases_checked,
            violations: violations.len(),
        });
        self.violations.extend(violations);
    }

    /// True when every checked law held
    pub fn passed(&self) -> bool {
        self.verdicts.iter().all(|v| v.passed)
    }

    /// Verdict for a law, `None` if the law was not checked
    pub fn passed_law(&self, law: LawKind) -> Option<bool> {
        self.verdict(law).map(|v| v.passed)
    }

    pub fn verdict(&self, law: LawKind) -> Option<&LawVerdict> {
        self.verdicts.iter().find(|v| v.law == law)
    }

    pub fn violations_of(&self, law: LawKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.law == law)
    }

    pub fn failed_laws(&self) -> Vec<LawKind> {
        self.verdicts
            .iter()
            .filter(|v| !v.passed)
            .map(|v| v.law)
            .collect()
    }

    pub fn to_json(&self) -> EqlawResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> EqlawResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "samples: {}, repeats: {}", self.sample_count, self.repeats)?;
        for verdict in &self.verdicts {
            writeln!(
                f,
                "  {:<15} {} ({} cases, {} violations)",
                verdict.law.name(),
                if verdict.passed { "pass" } else { "FAIL" },
                verdict.cases_checked,
                verdict.violations
            )?;
        }
        for violation in &self.violations {
            writeln!(f, "  - {}", violation)?;
        }
        write!(f, "{}", self.limitation)
    }
}
