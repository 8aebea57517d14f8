//! Scoped query iterators
//!
//! [`ScopedIterator`] owns a [`ResultsIterator`] and guarantees it is closed
//! exactly once: explicitly via [`ScopedIterator::close`], or on drop when a
//! caller returns early.

use tracing::warn;

use crate::error::Result;
use crate::traits::ResultsIterator;

/// Closes the wrapped iterator when it goes out of scope
pub struct ScopedIterator<'a, T> {
    inner: Box<dyn ResultsIterator<T> + 'a>,
    closed: bool,
}

impl<'a, T> ScopedIterator<'a, T> {
    /// Take ownership of an open iterator
    pub fn new(inner: Box<dyn ResultsIterator<T> + 'a>) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// Close the iterator, reporting a failure to release it
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.inner.close()
    }

    /// Read every remaining entry, then close
    ///
    /// Stops at the first failing entry; the iterator is still released.
    pub fn drain(mut self) -> Result<Vec<T>> {
        let mut entries = Vec::new();
        for entry in self.by_ref() {
            entries.push(entry?);
        }
        self.close()?;
        Ok(entries)
    }
}

impl<T> Iterator for ScopedIterator<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed {
            return None;
        }
        self.inner.next()
    }
}

impl<T> Drop for ScopedIterator<'_, T> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.inner.close() {
            warn!(error = %e, "failed to close query iterator");
        }
    }
}
