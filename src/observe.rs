//! Observer side channel shared by the solvers.
//!
//! Solvers emit events while they run. Observers receive them by reference
//! and can log, print or record them, but cannot steer the solver: the
//! returned outcome is the same whichever observer is attached.

/// Receives solver events.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer<E> {
    fn observe(&mut self, event: &E);
}

impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event)
    }
}

/// No-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
