use std::{cell::RefCell, rc::Rc};

/// Describes how a memoized value decides whether its inputs changed.
///
/// Strings are compared by value and shared maps by pointer identity, which mirrors how
/// a render cycle tracks the dependencies of a memoized callback.
pub trait Dependencies {
    fn same_as(&self, previous: &Self) -> bool;
}

impl Dependencies for String {
    fn same_as(&self, previous: &Self) -> bool {
        self == previous
    }
}

impl<T> Dependencies for Rc<T> {
    fn same_as(&self, previous: &Self) -> bool {
        Rc::ptr_eq(self, previous)
    }
}

impl<A: Dependencies, B: Dependencies, C: Dependencies, D: Dependencies> Dependencies
    for (A, B, C, D)
{
    fn same_as(&self, previous: &Self) -> bool {
        self.0.same_as(&previous.0)
            && self.1.same_as(&previous.1)
            && self.2.same_as(&previous.2)
            && self.3.same_as(&previous.3)
    }
}

/// A single-slot memoization cell.
///
/// Keeps the last dependencies together with the value computed from them and hands
/// out the same `Rc` until the dependencies change.
#[derive(Debug)]
pub struct Memorion<D, V> {
    slot: RefCell<Option<(D, Rc<V>)>>,
}

impl<D, V> Default for Memorion<D, V> {
    fn default() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }
}

impl<D: Dependencies, V> Memorion<D, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value when `deps` match the previous ones, otherwise runs
    /// `compute`, stores its result together with `deps` and returns it.
    pub fn get_or_compute<F>(&self, deps: D, compute: F) -> Rc<V>
    where
        F: FnOnce() -> V,
    {
        if let Some((previous, value)) = self.slot.borrow().as_ref() {
            if deps.same_as(previous) {
                tracing::trace!("Memoized value reused; dependencies unchanged.");

                return Rc::clone(value);
            }
        }

        tracing::debug!("Dependencies changed; recomputing memoized value.");

        let value = Rc::new(compute());
        *self.slot.borrow_mut() = Some((deps, Rc::clone(&value)));

        value
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::Memorion;

    #[test]
    fn test_reuses_value_while_dependencies_are_equal() {
        let memo: Memorion<String, String> = Memorion::new();
        let calls = Cell::new(0);

        let compute = || {
            calls.set(calls.get() + 1);
            "computed".to_string()
        };

        let first = memo.get_or_compute("a".to_string(), compute);
        let second = memo.get_or_compute("a".to_string(), || unreachable!());

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_recomputes_when_dependencies_change() {
        let memo: Memorion<String, usize> = Memorion::new();

        let first = memo.get_or_compute("a".to_string(), || 1);
        let second = memo.get_or_compute("b".to_string(), || 2);

        assert_eq!((*first, *second), (1, 2));
    }

    #[test]
    fn test_shared_dependencies_compare_by_identity() {
        let memo: Memorion<Rc<Vec<u8>>, usize> = Memorion::new();
        let deps = Rc::new(vec![1, 2]);

        memo.get_or_compute(Rc::clone(&deps), || 1);
        let same = memo.get_or_compute(Rc::clone(&deps), || 2);
        let equal_content = memo.get_or_compute(Rc::new(vec![1, 2]), || 3);

        assert_eq!(*same, 1);
        assert_eq!(*equal_content, 3);
    }
}
