use std::fmt::Display;
use std::marker::PhantomData;
use std::panic::{ self, AssertUnwindSafe };
use thiserror::Error;

/// The predicate could not produce an answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PredicateFailure {
    pub message: String,
}

impl PredicateFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// A caller-supplied equality relation over `T`.
///
/// Implementations should be pure. The consistency law exists to catch the
/// ones that are not.
pub trait EqualityPredicate<T> {
    fn test(&self, left: &T, right: &T) -> Result<bool, PredicateFailure>;
}

impl<T, F> EqualityPredicate<T> for F where F: Fn(&T, &T) -> bool {
    fn test(&self, left: &T, right: &T) -> Result<bool, PredicateFailure> {
        Ok(self(left, right))
    }
}

/// Adapter for predicates that report failure through `Result`
pub struct Fallible<F, E> {
    f: F,
    _err: PhantomData<fn() -> E>,
}

/// Wrap a closure returning `Result<bool, E>` as an [`EqualityPredicate`]
pub fn fallible<T, E, F>(f: F) -> Fallible<F, E> where F: Fn(&T, &T) -> Result<bool, E>, E: Display {
    Fallible { f, _err: PhantomData }
}

impl<T, E, F> EqualityPredicate<T> for Fallible<F, E> where F: Fn(&T, &T) -> Result<bool, E>, E: Display {
    fn test(&self, left: &T, right: &T) -> Result<bool, PredicateFailure> {
        (self.f)(left, right).map_err(|e| PredicateFailure::new(e.to_string()))
    }
}

/// Call the predicate once, turning a panic into a `PredicateFailure`.
///
/// The panic hook is left untouched, so a caught panic still prints the
/// usual "thread panicked at" line on stderr (plus a backtrace when
/// `RUST_BACKTRACE` is set). Callers that want quiet runs over predicates
/// known to panic should install their own hook with `std::panic::set_hook`.
pub fn invoke<T>(
    eq: &dyn EqualityPredicate<T>,
    left: &T,
    right: &T
) -> Result<bool, PredicateFailure> {
    match panic::catch_unwind(AssertUnwindSafe(|| eq.test(left, right))) {
        Ok(result) => result,
        Err(payload) => {
            let message = if let Some(s) = payload.downcast_ref::<&str>() {
                format!("panicked: {}", s)
            } else if let Some(s) = payload.downcast_ref::<String>() {
                format!("panicked: {}", s)
            } else {
                "panicked".to_string()
            };
            Err(PredicateFailure::new(message))
        }
    }
}
