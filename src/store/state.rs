//! Channel-backed state store and its take-first subscription.

use futures_util::stream::{self, BoxStream, Stream, StreamExt};
use tokio::sync::mpsc;

use super::StoreError;

/// Boxed stream of snapshots as seen by a subscriber.
pub type StoreStream<S> = BoxStream<'static, Result<S, StoreError>>;

/// A push-based sequence of state snapshots owned by a single request.
pub struct StateStore<S> {
    stream: StoreStream<S>,
}

impl<S: Send + 'static> StateStore<S> {
    /// Create a store together with the handle that feeds it.
    ///
    /// The stream completes once every handle has been dropped.
    pub fn channel() -> (StoreHandle<S>, Self) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let stream = stream::poll_fn(move |cx| rx.poll_recv(cx)).boxed();
        (StoreHandle { tx }, Self { stream })
    }

    /// A store whose state is already settled.
    pub fn ready(state: S) -> Self {
        Self::from_stream(stream::once(async move { Ok(state) }))
    }

    /// A store that completes without emitting.
    pub fn empty() -> Self {
        Self::from_stream(stream::empty())
    }

    /// A store whose stream fails immediately.
    pub fn failed(error: StoreError) -> Self {
        Self::from_stream(stream::once(async move { Err(error) }))
    }

    pub fn from_stream<St>(stream: St) -> Self
    where
        St: Stream<Item = Result<S, StoreError>> + Send + 'static,
    {
        Self {
            stream: stream.boxed(),
        }
    }
}

impl<S> StateStore<S> {
    /// Subscribe to the snapshot stream. Consumes the store, so a store can
    /// only ever be subscribed once.
    pub fn subscribe(self) -> Subscription<S> {
        Subscription {
            stream: self.stream,
        }
    }
}

impl<S> std::fmt::Debug for StateStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore").finish_non_exhaustive()
    }
}

/// Producer side of a channel-backed store.
pub struct StoreHandle<S> {
    tx: mpsc::UnboundedSender<Result<S, StoreError>>,
}

impl<S> StoreHandle<S> {
    /// Push a snapshot. Returns `false` once the subscriber is gone.
    pub fn emit(&self, state: S) -> bool {
        self.tx.send(Ok(state)).is_ok()
    }

    /// Fail the stream. Consumes the handle.
    pub fn fail(self, error: StoreError) -> bool {
        self.tx.send(Err(error)).is_ok()
    }

    /// Whether the subscriber has already taken its snapshot or gone away.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<S> Clone for StoreHandle<S> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// How a take-first subscription terminated.
#[derive(Debug)]
pub enum First<S> {
    Value(S),
    Completed,
    Failed(StoreError),
}

/// A live subscription that yields at most one item.
pub struct Subscription<S> {
    stream: StoreStream<S>,
}

impl<S> Subscription<S> {
    /// Wait for the first item, then tear the subscription down whether or
    /// not the stream would emit more.
    pub async fn first(mut self) -> First<S> {
        let first = match self.stream.next().await {
            Some(Ok(state)) => First::Value(state),
            Some(Err(error)) => First::Failed(error),
            None => First::Completed,
        };
        drop(self.stream);
        first
    }
}
