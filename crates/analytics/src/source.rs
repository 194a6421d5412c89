use std::sync::{Arc, Mutex, PoisonError};

/// The state of a live data source at the moment it was polled.
///
/// A tagged variant rather than an `Option` so that call sites spell out the
/// live/unavailable decision instead of leaning on truthiness.
#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T> {
    /// A live snapshot is available.
    Live(T),
    /// No live snapshot exists (pending, cleared, or never published).
    /// This is not an error condition.
    Unavailable,
}

impl<T> DataState<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, DataState::Live(_))
    }
}

/// The contract between the normalizer and whatever supplies live data.
///
/// A single synchronous read: "ready with value" or "not ready". Anything
/// async (fetching, refreshing, cancellation) belongs to the implementor,
/// which keeps the normalization layer pure.
pub trait LiveSource<T> {
    fn poll(&self) -> DataState<T>;
}

/// An in-memory `LiveSource` over a shared option cell.
///
/// Publishers (ingest endpoints, background jobs, tests) replace the cell's
/// value; readers get a cloned snapshot per poll so no lock is held while a
/// payload is built. Cloning the source shares the same cell.
#[derive(Debug)]
pub struct SharedSource<T> {
    cell: Arc<Mutex<Option<T>>>,
}

impl<T> SharedSource<T> {
    pub fn new() -> Self {
        Self {
            cell: Arc::new(Mutex::new(None)),
        }
    }

    /// Replaces the current snapshot. Subsequent polls see the new value.
    pub fn publish(&self, value: T) {
        *self.lock() = Some(value);
    }

    /// Drops the current snapshot, returning the source to `Unavailable`.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<T>> {
        // A poisoned cell still holds a coherent Option; keep serving it.
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for SharedSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SharedSource<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: Clone> LiveSource<T> for SharedSource<T> {
    fn poll(&self) -> DataState<T> {
        match self.lock().as_ref() {
            Some(value) => DataState::Live(value.clone()),
            None => DataState::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unavailable() {
        let source: SharedSource<u32> = SharedSource::new();
        assert_eq!(source.poll(), DataState::Unavailable);
    }

    #[test]
    fn publish_then_clear_round_trip() {
        let source = SharedSource::new();
        source.publish(7u32);
        assert_eq!(source.poll(), DataState::Live(7));

        source.clear();
        assert_eq!(source.poll(), DataState::Unavailable);
    }

    #[test]
    fn clones_share_the_same_cell() {
        let source = SharedSource::new();
        let reader = source.clone();
        source.publish("snapshot".to_string());
        assert!(reader.poll().is_live());
    }
}
