pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ VerifierOptions, DEFAULT_REPEATS };
pub use errors::{ EqlawError, EqlawResult };
pub use implementations::config::{ ConfigError, RelationConfig, RelationTable };
pub use implementations::law_checks::{
    Consistency,
    HashAgreement,
    NullSafety,
    Reflexivity,
    Symmetry,
    Transitivity,
};
pub use implementations::projection::{ by_key, ByKey };
pub use implementations::verifier::{
    check_consistency,
    check_hash_agreement,
    check_null_safety,
    check_reflexivity,
    check_symmetry,
    check_transitivity,
    hash_of,
    verify,
    ContractVerifier,
};
pub use models::{
    law::LawKind,
    violation::{ Outcome, Violation },
    report::{ LawVerdict, VerificationReport, SAMPLING_LIMITATION },
};
pub use traits::{ fallible, EqualityPredicate, Fallible, LawCheck, LawOutcome, PredicateFailure };
