//! Screen-size notifications.
//!
//! A tooltip lays itself out against the screen, so it has to know the
//! current size and hear about rotations. The provider side is a trait so a
//! backend can plug in its own window events; [`ScreenBroadcaster`] is a
//! ready-made implementation on top of `async-channel`.

use std::sync::{Mutex, PoisonError};

use async_channel::{Receiver, Sender, TryRecvError};
use waterui_tooltip_geometry::Size;

use crate::{Error, Result};

/// Source of the current screen size and of size changes.
pub trait ScreenSizeProvider {
    /// The size of the screen right now, in logical pixels.
    fn current(&self) -> Size;

    /// Starts listening for size changes. Dropping the subscription ends it.
    fn subscribe(&self) -> ScreenSubscription;
}

/// A live registration for screen-size changes.
#[derive(Debug)]
pub struct ScreenSubscription {
    receiver: Receiver<Size>,
}

impl ScreenSubscription {
    /// Wraps the receiving end of a size channel.
    #[must_use]
    pub const fn new(receiver: Receiver<Size>) -> Self {
        Self { receiver }
    }

    /// Returns the next pending size change without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SubscriptionClosed`] once the provider is gone and
    /// every queued change has been read.
    pub fn try_next(&self) -> Result<Option<Size>> {
        match self.receiver.try_recv() {
            Ok(size) => Ok(Some(size)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Closed) => Err(Error::SubscriptionClosed),
        }
    }

    /// Waits for the next size change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SubscriptionClosed`] once the provider is gone.
    pub async fn next(&self) -> Result<Size> {
        self.receiver
            .recv()
            .await
            .map_err(|_| Error::SubscriptionClosed)
    }
}

/// Screen-size provider that fans changes out to every subscriber.
#[derive(Debug)]
pub struct ScreenBroadcaster {
    size: Mutex<Size>,
    subscribers: Mutex<Vec<Sender<Size>>>,
}

impl ScreenBroadcaster {
    /// Creates a broadcaster reporting `size`.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            size: Mutex::new(size),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Records a new screen size and notifies live subscribers.
    ///
    /// Subscriptions that were dropped are pruned.
    pub fn set_size(&self, size: Size) {
        *self.size.lock().unwrap_or_else(PoisonError::into_inner) = size;

        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|sender| sender.try_send(size).is_ok());
        tracing::debug!(
            width = size.width,
            height = size.height,
            subscribers = subscribers.len(),
            "screen size changed"
        );
    }

    /// Number of live subscriptions as of the last broadcast.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|sender| !sender.is_closed());
        subscribers.len()
    }
}

impl ScreenSizeProvider for ScreenBroadcaster {
    fn current(&self) -> Size {
        *self.size.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn subscribe(&self) -> ScreenSubscription {
        let (sender, receiver) = async_channel::unbounded();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sender);
        ScreenSubscription::new(receiver)
    }
}
