use crate::errors::{ EqlawError, EqlawResult };
use crate::models::law::LawKind;
use crate::models::violation::Violation;
use crate::traits::predicate::{ invoke, EqualityPredicate };

/// What one law check found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawOutcome {
    /// Number of samples, pairs or triples examined
    pub cases_checked: usize,
    pub violations: Vec<Violation>,
}

/// A single law of the equality contract
pub trait LawCheck<T> {
    /// The law this check enforces
    fn law(&self) -> LawKind;

    /// Run the law over the samples.
    ///
    /// Returns an error only for malformed input or a predicate that fails
    /// on an ordinary pair; broken laws go into `LawOutcome::violations`.
    fn run(&self, samples: &[T], eq: &dyn EqualityPredicate<T>) -> EqlawResult<LawOutcome>;

    /// Reject sample sets this law cannot be evaluated on
    fn ensure_samples(&self, samples: &[T]) -> EqlawResult<()> {
        if samples.is_empty() {
            return Err(EqlawError::EmptySamples { law: self.law() });
        }
        Ok(())
    }
}

/// Evaluate `eq(samples[left], samples[right])`, treating a failure as an input error
pub(crate) fn require<T>(
    law: LawKind,
    eq: &dyn EqualityPredicate<T>,
    samples: &[T],
    left: usize,
    right: usize
) -> EqlawResult<bool> {
    invoke(eq, &samples[left], &samples[right]).map_err(|failure| EqlawError::PredicateFailed {
        law,
        left,
        right,
        message: failure.message,
    })
}
