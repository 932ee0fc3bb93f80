/// Receives solver events and decides how the iteration should proceed.
///
/// An iterative solver hands each step to its observer, which can report
/// progress, record a trace, or steer the solver through a solver-specific
/// action type `A`.
///
/// `observe` returns `Some(action)` to request an action and `None` to let the
/// solver continue unchanged.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is a
/// no-op observer that never acts.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
