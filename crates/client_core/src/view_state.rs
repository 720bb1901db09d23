//! Per-collection view state machine and the controller that drives it
//! through fetches, slug changes, and teardown.

use std::{future::Future, sync::Arc};

use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
};
use tracing::debug;

use crate::error::FetchError;

/// Loading/error/data triad for one fetched collection.
///
/// `idle -> loading -> {ready | failed}`, with `ready`/`failed` allowed back
/// to `loading` on an explicit re-fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    pub fn has_error(&self) -> bool {
        matches!(self, ViewState::Failed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> ViewState<Vec<T>> {
    /// Distinguishes a legitimately empty collection from loading/error so
    /// pages can show explicit empty-state copy.
    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Ready(items) if items.is_empty())
    }
}

struct ControllerInner<T> {
    state: ViewState<T>,
    key: Option<String>,
    epoch: u64,
    task: Option<JoinHandle<()>>,
}

/// Owns the `ViewState` for one collection and applies fetch results with
/// last-request-wins semantics.
///
/// Every `load` bumps an epoch; a result is applied only if its epoch is
/// still current. A slug change therefore invalidates the previous fetch
/// even if its response arrives later, and `detach` (unmount) orphans any
/// in-flight fetch so nothing is applied after teardown.
pub struct FetchController<T> {
    inner: Mutex<ControllerInner<T>>,
    changed: broadcast::Sender<u64>,
}

impl<T: Send + 'static> FetchController<T> {
    pub fn new() -> Arc<Self> {
        let (changed, _) = broadcast::channel(64);
        Arc::new(Self {
            inner: Mutex::new(ControllerInner {
                state: ViewState::Idle,
                key: None,
                epoch: 0,
                task: None,
            }),
            changed,
        })
    }

    /// Notifies with the epoch of every applied transition.
    pub fn subscribe(&self) -> broadcast::Receiver<u64> {
        self.changed.subscribe()
    }

    pub async fn key(&self) -> Option<String> {
        self.inner.lock().await.key.clone()
    }

    /// Starts a fetch for `key`, moving the machine to `loading`.
    ///
    /// A duplicate call for the same key while that key is already loading is
    /// ignored, so pages cannot start concurrent duplicate fetches. A call
    /// with a different key restarts at `loading` immediately; the superseded
    /// fetch is aborted and its result can no longer be applied.
    pub async fn load<Fut>(self: &Arc<Self>, key: impl Into<String>, fetch: Fut)
    where
        Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let key = key.into();
        let epoch = {
            let mut inner = self.inner.lock().await;
            if inner.state.is_loading() && inner.key.as_deref() == Some(key.as_str()) {
                debug!(%key, "fetch already in flight; ignoring duplicate");
                return;
            }
            inner.epoch += 1;
            inner.key = Some(key.clone());
            inner.state = ViewState::Loading;
            if let Some(task) = inner.task.take() {
                task.abort();
            }
            let epoch = inner.epoch;
            let controller = Arc::clone(self);
            inner.task = Some(tokio::spawn(async move {
                let outcome = fetch.await;
                controller.apply(epoch, outcome).await;
            }));
            epoch
        };
        let _ = self.changed.send(epoch);
    }

    async fn apply(&self, epoch: u64, outcome: Result<T, FetchError>) {
        let mut inner = self.inner.lock().await;
        if inner.epoch != epoch {
            // Superseded by a newer load or by detach; drop the stale result.
            debug!(stale = epoch, current = inner.epoch, "discarding stale fetch result");
            return;
        }
        inner.state = match outcome {
            Ok(value) => ViewState::Ready(value),
            Err(err) => ViewState::Failed(err.to_string()),
        };
        inner.task = None;
        drop(inner);
        let _ = self.changed.send(epoch);
    }

    /// Teardown for component unmount: aborts any in-flight fetch and bumps
    /// the epoch so a result that already escaped the abort is still never
    /// applied.
    pub async fn detach(&self) {
        let mut inner = self.inner.lock().await;
        inner.epoch += 1;
        if let Some(task) = inner.task.take() {
            task.abort();
        }
    }
}

impl<T: Clone + Send + 'static> FetchController<T> {
    pub async fn state(&self) -> ViewState<T> {
        self.inner.lock().await.state.clone()
    }
}
