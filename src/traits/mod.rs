pub mod predicate;
pub mod law_check;

// Re-export traits
pub use predicate::{ fallible, Fallible, EqualityPredicate, PredicateFailure };
pub use law_check::{ LawCheck, LawOutcome };
