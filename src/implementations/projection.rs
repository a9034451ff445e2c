use std::marker::PhantomData;

use crate::traits::predicate::{ EqualityPredicate, PredicateFailure };

/// Equality through a projection: `x` equals `y` when `key(x) == key(y)`.
///
/// When two kinds of value need to compare with each other, project both to
/// a common view and compare views of the same type. A relation built this
/// way is reflexive, symmetric and transitive as long as `K`'s own equality
/// is.
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

pub fn by_key<T, K, F>(key: F) -> ByKey<F, K> where F: Fn(&T) -> K, K: PartialEq {
    ByKey { key, _key: PhantomData }
}

impl<T, K, F> EqualityPredicate<T> for ByKey<F, K> where F: Fn(&T) -> K, K: PartialEq {
    fn test(&self, left: &T, right: &T) -> Result<bool, PredicateFailure> {
        Ok((self.key)(left) == (self.key)(right))
    }
}
