//! What counts as "the same state" when looking for a revisit.
//!
//! Every detector compares values through a `SameState` policy. The
//! set-based detector additionally needs a hashable key, provided by
//! `StateKey`, and its key equality must agree with `same_state`.
//!
//! Policies compare by value. Two distinct allocations holding the same
//! coordinates are the same state; comparing addresses instead would make
//! every detector miss every cycle.

use std::hash::Hash;

/// Equality predicate used by the pointer-chasing detectors
pub trait SameState<T> {
    fn same_state(&self, a: &T, b: &T) -> bool;
}

/// A `SameState` policy that can also key values for a visited set.
///
/// `key(a) == key(b)` must hold exactly when `same_state(a, b)` does.
pub trait StateKey<T>: SameState<T> {
    type Key: Hash + Eq;

    fn key(&self, value: &T) -> Self::Key;
}

/// Structural equality via `PartialEq`; keys are clones of the values
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueEq;

impl<T: PartialEq> SameState<T> for ValueEq {
    fn same_state(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: Hash + Eq + Clone> StateKey<T> for ValueEq {
    type Key = T;

    fn key(&self, value: &T) -> T {
        value.clone()
    }
}

/// Compare values by a projected key, e.g. only the coordinates of a
/// richer game state
#[derive(Debug, Clone, Copy)]
pub struct KeyedBy<F>(pub F);

impl<T, K, F> SameState<T> for KeyedBy<F>
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    fn same_state(&self, a: &T, b: &T) -> bool {
        (self.0)(a) == (self.0)(b)
    }
}

impl<T, K, F> StateKey<T> for KeyedBy<F>
where
    F: Fn(&T) -> K,
    K: Hash + Eq,
{
    type Key = K;

    fn key(&self, value: &T) -> K {
        (self.0)(value)
    }
}

/// Any `Fn(&T, &T) -> bool` is a policy for the pointer-chasing detectors
impl<T, F> SameState<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn same_state(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Cell {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_value_eq_is_structural() {
        let a = Rc::new(Cell { x: 1, y: 2 });
        let b = Rc::new(Cell { x: 1, y: 2 });

        assert!(!Rc::ptr_eq(&a, &b));
        assert!(ValueEq.same_state(&*a, &*b));
        assert_eq!(ValueEq.key(&*a), ValueEq.key(&*b));
    }

    #[test]
    fn test_value_eq_distinguishes() {
        assert!(!ValueEq.same_state(&Cell { x: 0, y: 1 }, &Cell { x: 1, y: 0 }));
    }

    #[test]
    fn test_keyed_by_projection() {
        let by_x = KeyedBy(|c: &Cell| c.x);
        assert!(by_x.same_state(&Cell { x: 3, y: 0 }, &Cell { x: 3, y: 9 }));
        assert!(!by_x.same_state(&Cell { x: 3, y: 0 }, &Cell { x: 4, y: 0 }));
        assert_eq!(by_x.key(&Cell { x: 3, y: 7 }), 3);
    }

    #[test]
    fn test_closure_policy() {
        let parity = |a: &u32, b: &u32| a % 2 == b % 2;
        assert!(parity.same_state(&2, &4));
        assert!(!parity.same_state(&2, &3));
    }
}
