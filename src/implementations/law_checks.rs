use log::{ debug, trace };

use crate::errors::{ EqlawError, EqlawResult };
use crate::models::law::LawKind;
use crate::models::violation::{ Outcome, Violation };
use crate::traits::law_check::{ require, LawCheck, LawOutcome };
use crate::traits::predicate::{ invoke, EqualityPredicate };

/// `eq(x, x)` must hold for every sample
#[derive(Debug, Clone, Copy, Default)]
pub struct Reflexivity;

impl<T> LawCheck<T> for Reflexivity {
    fn law(&self) -> LawKind {
        LawKind::Reflexivity
    }

    fn run(&self, samples: &[T], eq: &dyn EqualityPredicate<T>) -> EqlawResult<LawOutcome> {
        self.ensure_samples(samples)?;
        let mut violations = Vec::new();

        for i in 0..samples.len() {
            let holds = require(LawKind::Reflexivity, eq, samples, i, i)?;
            if !holds {
                trace!("eq({i}, {i}) returned false");
                violations.push(
                    Violation::new(LawKind::Reflexivity, vec![i], vec![Outcome::Returned(holds)])
                );
            }
        }

        Ok(LawOutcome { cases_checked: samples.len(), violations })
    }
}

/// `eq(x, y) == eq(y, x)`, each unordered pair visited once
#[derive(Debug, Clone, Copy, Default)]
pub struct Symmetry;

impl<T> LawCheck<T> for Symmetry {
    fn law(&self) -> LawKind {
        LawKind::Symmetry
    }

    fn run(&self, samples: &[T], eq: &dyn EqualityPredicate<T>) -> EqlawResult<LawOutcome> {
        self.ensure_samples(samples)?;
        let n = samples.len();
        let mut violations = Vec::new();
        let mut cases = 0;

        for i in 0..n {
            for j in i + 1..n {
                cases += 1;
                let forward = require(LawKind::Symmetry, eq, samples, i, j)?;
                let backward = require(LawKind::Symmetry, eq, samples, j, i)?;
                if forward != backward {
                    trace!("eq({i}, {j}) = {forward} but eq({j}, {i}) = {backward}");
                    violations.push(
                        Violation::new(
                            LawKind::Symmetry,
                            vec![i, j],
                            vec![Outcome::Returned(forward), Outcome::Returned(backward)]
                        )
                    );
                }
            }
        }

        Ok(LawOutcome { cases_checked: cases, violations })
    }
}

/// `eq(x, y) && eq(y, z) => eq(x, z)` over ordered triples of distinct samples.
///
/// Cubic in the sample count; keep sample sets to tens of values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transitivity;

impl<T> LawCheck<T> for Transitivity {
    fn law(&self) -> LawKind {
        LawKind::Transitivity
    }

    fn run(&self, samples: &[T], eq: &dyn EqualityPredicate<T>) -> EqlawResult<LawOutcome> {
        self.ensure_samples(samples)?;
        let n = samples.len();
        let mut violations = Vec::new();
        let mut cases = 0;

        for i in 0..n {
            for j in 0..n {
                if j == i {
                    continue;
                }
                for k in 0..n {
                    if k == i || k == j {
                        continue;
                    }
                    cases += 1;
                    let xy = require(LawKind::Transitivity, eq, samples, i, j)?;
                    if !xy {
                        continue;
                    }
                    let yz = require(LawKind::Transitivity, eq, samples, j, k)?;
                    if !yz {
                        continue;
                    }
                    let xz = require(LawKind::Transitivity, eq, samples, i, k)?;
                    if !xz {
                        trace!("eq({i}, {j}) and eq({j}, {k}) hold but eq({i}, {k}) does not");
                        violations.push(
                            Violation::new(
                                LawKind::Transitivity,
                                vec![i, j, k],
                                vec![
                                    Outcome::Returned(xy),
                                    Outcome::Returned(yz),
                                    Outcome::Returned(xz)
                                ]
                            )
                        );
                    }
                }
            }
        }

        Ok(LawOutcome { cases_checked: cases, violations })
    }
}

/// Every ordered pair, compared `repeats` times in a row, must give one answer.
///
/// Non-determinism that does not show up within `repeats` calls goes unseen.
#[derive(Debug, Clone, Copy)]
pub struct Consistency {
    pub repeats: usize,
}

impl<T> LawCheck<T> for Consistency {
    fn law(&self) -> LawKind {
        LawKind::Consistency
    }

    fn run(&self, samples: &[T], eq: &dyn EqualityPredicate<T>) -> EqlawResult<LawOutcome> {
        if self.repeats < 1 {
            return Err(EqlawError::InvalidRepeats(self.repeats));
        }
        self.ensure_samples(samples)?;
        let n = samples.len();
        let mut violations = Vec::new();

        for i in 0..n {
            for j in 0..n {
                let mut observed = Vec::with_capacity(self.repeats);
                for _ in 0..self.repeats {
                    observed.push(require(LawKind::Consistency, eq, samples, i, j)?);
                }
                if observed.windows(2).any(|w| w[0] != w[1]) {
                    trace!("eq({i}, {j}) changed across calls: {:?}", observed);
                    violations.push(
                        Violation::new(
                            LawKind::Consistency,
                            vec![i, j],
                            observed.into_iter().map(Outcome::Returned).collect()
                        )
                    );
                }
            }
        }

        Ok(LawOutcome { cases_checked: n * n, violations })
    }
}

/// `eq(x, absent)` must return false. Failing on the sentinel counts as a
/// violation, not an error.
#[derive(Debug, Clone, Copy)]
pub struct NullSafety<'a, T> {
    pub absent: &'a T,
}

impl<'a, T> NullSafety<'a, T> {
    pub fn new(absent: &'a T) -> Self {
        Self { absent }
    }
}

impl<'a, T> LawCheck<T> for NullSafety<'a, T> {
    fn law(&self) -> LawKind {
        LawKind::NullSafety
    }

    fn run(&self, samples: &[T], eq: &dyn EqualityPredicate<T>) -> EqlawResult<LawOutcome> {
        self.ensure_samples(samples)?;
        let mut violations = Vec::new();

        for (i, sample) in samples.iter().enumerate() {
            let outcome = match invoke(eq, sample, self.absent) {
                Ok(false) => continue,
                Ok(true) => Outcome::Returned(true),
                Err(failure) => {
                    debug!("Predicate failed on sentinel for sample {i}: {}", failure);
                    Outcome::Raised(failure.message)
                }
            };
            violations.push(Violation::new(LawKind::NullSafety, vec![i], vec![outcome]));
        }

        Ok(LawOutcome { cases_checked: samples.len(), violations })
    }
}

/// Samples the predicate calls equal must share a hash
pub struct HashAgreement<H> {
    pub hash: H,
}

impl<H> HashAgreement<H> {
    pub fn new(hash: H) -> Self {
        Self { hash }
    }
}

impl<T, H> LawCheck<T> for HashAgreement<H> where H: Fn(&T) -> u64 {
    fn law(&self) -> LawKind {
        LawKind::HashAgreement
    }

    fn run(&self, samples: &[T], eq: &dyn EqualityPredicate<T>) -> EqlawResult<LawOutcome> {
        self.ensure_samples(samples)?;
        let hashes: Vec<u64> = samples
            .iter()
            .map(|s| (self.hash)(s))
            .collect();
        let n = samples.len();
        let mut violations = Vec::new();
        let mut cases = 0;

        for i in 0..n {
            for j in i + 1..n {
                cases += 1;
                let equal = require(LawKind::HashAgreement, eq, samples, i, j)?;
                if equal && hashes[i] != hashes[j] {
                    violations.push(
                        Violation::new(
                            LawKind::HashAgreement,
                            vec![i, j],
                            vec![Outcome::Returned(equal)]
                        ).with_note(format!("hash {:#x} != {:#x}", hashes[i], hashes[j]))
                    );
                }
            }
        }

        Ok(LawOutcome { cases_checked: cases, violations })
    }
}
