use log::{ debug, info, warn };
use std::collections::hash_map::DefaultHasher;
use std::hash::{ Hash, Hasher };

use crate::config::VerifierOptions;
use crate::errors::{ EqlawError, EqlawResult };
use crate::implementations::law_checks::{
    Consistency,
    HashAgreement,
    NullSafety,
    Reflexivity,
    Symmetry,
    Transitivity,
};
use crate::models::law::LawKind;
use crate::models::report::VerificationReport;
use crate::models::violation::Violation;
use crate::traits::law_check::LawCheck;
use crate::traits::predicate::EqualityPredicate;

/// Runs the equality contract over a sample set.
///
/// Holds no state between calls; the same inputs always yield the same
/// report.
#[derive(Debug, Clone, Default)]
pub struct ContractVerifier {
    options: VerifierOptions,
}

impl ContractVerifier {
    pub fn new(options: VerifierOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &VerifierOptions {
        &self.options
    }

    /// Run reflexivity, symmetry, transitivity, consistency and null-safety, in that order
    pub fn verify<T, P>(&self, samples: &[T], eq: &P, absent: &T) -> EqlawResult<VerificationReport>
        where P: EqualityPredicate<T>
    {
        let consistency = Consistency { repeats: self.options.repeats };
        let null_safety = NullSafety::new(absent);
        let checks: [&dyn LawCheck<T>; 5] = [
            &Reflexivity,
            &Symmetry,
            &Transitivity,
            &consistency,
            &null_safety,
        ];
        self.run_checks(samples, eq, &checks)
    }

    /// The five contract laws followed by hash agreement
    pub fn verify_with_hash<T, P, H>(
        &self,
        samples: &[T],
        eq: &P,
        absent: &T,
        hash: H
    ) -> EqlawResult<VerificationReport>
        where P: EqualityPredicate<T>, H: Fn(&T) -> u64
    {
        let consistency = Consistency { repeats: self.options.repeats };
        let null_safety = NullSafety::new(absent);
        let hash_agreement = HashAgreement::new(hash);
        let checks: [&dyn LawCheck<T>; 6] = [
            &Reflexivity,
            &Symmetry,
            &Transitivity,
            &consistency,
            &null_safety,
            &hash_agreement,
        ];
        self.run_checks(samples, eq, &checks)
    }

    fn run_checks<T, P>(
        &self,
        samples: &[T],
        eq: &P,
        checks: &[&dyn LawCheck<T>]
    ) -> EqlawResult<VerificationReport>
        where P: EqualityPredicate<T>
    {
        // Input problems surface before the predicate is ever called
        self.options.validate()?;
        if samples.is_empty() {
            let law = checks
                .first()
                .map(|c| c.law())
                .unwrap_or(LawKind::Reflexivity);
            return Err(EqlawError::EmptySamples { law });
        }

        info!(
            "Verifying {} laws over {} samples (repeats: {})",
            checks.len(),
            samples.len(),
            self.options.repeats
        );

        let mut report = VerificationReport::new(samples.len(), self.options.repeats);
        for check in checks {
            let outcome = check.run(samples, eq)?;
            if outcome.violations.is_empty() {
                debug!("{} held over {} cases", check.law(), outcome.cases_checked);
            } else {
                warn!(
                    "{} violated {} times over {} cases",
                    check.law(),
                    outcome.violations.len(),
                    outcome.cases_checked
                );
            }
            report.record(check.law(), outcome.cases_checked, outcome.violations);
        }

        info!(
            "Verification finished: {}",
            if report.passed() {
                "all laws held".to_string()
            } else {
                format!("{} violations", report.violations.len())
            }
        );
        Ok(report)
    }
}

pub fn check_reflexivity<T, P>(samples: &[T], eq: &P) -> EqlawResult<Vec<Violation>>
    where P: EqualityPredicate<T>
{
    Ok(Reflexivity.run(samples, eq)?.violations)
}

pub fn check_symmetry<T, P>(samples: &[T], eq: &P) -> EqlawResult<Vec<Violation>>
    where P: EqualityPredicate<T>
{
    Ok(Symmetry.run(samples, eq)?.violations)
}

pub fn check_transitivity<T, P>(samples: &[T], eq: &P) -> EqlawResult<Vec<Violation>>
    where P: EqualityPredicate<T>
{
    Ok(Transitivity.run(samples, eq)?.violations)
}

pub fn check_consistency<T, P>(samples: &[T], eq: &P, repeats: usize) -> EqlawResult<Vec<Violation>>
    where P: EqualityPredicate<T>
{
    Ok(Consistency { repeats }.run(samples, eq)?.violations)
}

pub fn check_null_safety<T, P>(samples: &[T], eq: &P, absent: &T) -> EqlawResult<Vec<Violation>>
    where P: EqualityPredicate<T>
{
    Ok(NullSafety::new(absent).run(samples, eq)?.violations)
}

pub fn check_hash_agreement<T, P, H>(samples: &[T], eq: &P, hash: H) -> EqlawResult<Vec<Violation>>
    where P: EqualityPredicate<T>, H: Fn(&T) -> u64
{
    Ok(HashAgreement::new(hash).run(samples, eq)?.violations)
}

/// Run the five contract laws with the given repeat count
pub fn verify<T, P>(samples: &[T], eq: &P, absent: &T, repeats: usize) -> EqlawResult<VerificationReport>
    where P: EqualityPredicate<T>
{
    ContractVerifier::new(VerifierOptions::with_repeats(repeats)).verify(samples, eq, absent)
}

/// Deterministic hash through the standard `Hash` impl
pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
