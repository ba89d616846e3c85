//! Pull-based derived views.

/// A derived view that re-evaluates its closure on every
/// [`get`](Computed::get).
///
/// This is the crate's stand-in for a framework's dependency-tracked
/// computed: re-deriving per read guarantees the result is never stale with
/// respect to the shared state the closure captures, without needing a
/// scheduler or invalidation graph.
pub struct Computed<T> {
    read: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> Computed<T> {
    pub fn new(read: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Computed {
            read: Box::new(read),
        }
    }

    /// Evaluate the view against the current state of its dependencies.
    pub fn get(&self) -> T {
        (self.read)()
    }
}
