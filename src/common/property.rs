use std::fmt::Debug;

use futures::stream::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A reactive value holder that can be watched for changes.
///
/// Writers update the value synchronously; every watcher stream yields
/// the current value on subscription and again on each change. No async
/// runtime is needed unless a change stream is actually consumed, so
/// properties are safe to use from plain synchronous code.
#[derive(Clone)]
pub struct Property<T: Clone + Send + Sync + 'static> {
    tx: watch::Sender<T>,
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(initial: T) -> Self {
        Self {
            tx: watch::Sender::new(initial),
        }
    }

    /// Replace the current value, notifying watchers when it changed.
    ///
    /// Crate-internal so external code cannot push values into bindings
    /// the engine owns.
    pub(crate) fn set(&self, value: T)
    where
        T: PartialEq,
    {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }

    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Stream of values: the current one immediately, then every change.
    pub fn watch(&self) -> impl Stream<Item = T> + Send {
        WatchStream::new(self.tx.subscribe())
    }
}

impl<T: Clone + Send + Sync + Debug + 'static> Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.tx.borrow())
            .finish()
    }
}
