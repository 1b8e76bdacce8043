//! Cursors over primitive integer elements.

use primcol_types::{DynInt, Primitive};

pub mod empty;
pub mod singleton;


pub use empty::{empty, EmptyCursor};
pub use singleton::SingletonCursor;

/// Error returned by [`PrimitiveCursor`] operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The cursor has no more elements.
    #[error("cursor is exhausted, no next element")]
    Exhausted,
    /// Remove was called without a preceding successful extraction.
    #[error("remove called without a preceding successful next")]
    InvalidState,
}

/// A cursor over primitive integer elements.
///
/// Very similar to [`std::iter::Iterator`] except extraction is fallible,
/// elements can be removed as they are visited, and elements can also be read
/// in a dynamically typed form via [`DynInt`]. Callers that only know "some
/// elements may be here" can hold a `&mut dyn PrimitiveCursor<Elem = _>` and
/// treat empty and non-empty cursors uniformly.
pub trait PrimitiveCursor {
    type Elem: Primitive;

    /// Returns `true` if another element is available.
    fn has_next(&self) -> bool;

    /// Extract the next element.
    ///
    /// # Errors
    ///
    /// * [`Error::Exhausted`] if no elements remain.
    fn next_elem(&mut self) -> Result<Self::Elem, Error>;

    /// Extract the next element as a dynamically typed [`DynInt`].
    ///
    /// Both extraction forms report exhaustion the same way, this one just
    /// wraps the element before handing it back.
    ///
    /// # Errors
    ///
    /// * [`Error::Exhausted`] if no elements remain.
    fn next_dyn(&mut self) -> Result<DynInt, Error> {
        self.next_elem().map(Primitive::into_dyn)
    }

    /// Remove the element most recently returned by a successful extraction.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidState`] if no element was extracted since the last
    ///   removal, or if nothing was ever extracted.
    fn remove(&mut self) -> Result<(), Error>;

    /// Feed every remaining element to `consumer`.
    fn for_each_remaining(&mut self, consumer: &mut dyn FnMut(Self::Elem)) {
        let mut count = 0_usize;
        while let Ok(elem) = self.next_elem() {
            consumer(elem);
            count += 1;
        }
        tracing::trace!(count, "drained cursor");
    }

    /// Feed every remaining element to `consumer` as dynamically typed values.
    fn for_each_dyn(&mut self, consumer: &mut dyn FnMut(DynInt)) {
        self.for_each_remaining(&mut |elem| consumer(elem.into_dyn()));
    }
}
