//! Single-slot debouncer
//!
//! Scheduling a task aborts whichever task is still pending, so only the last
//! input within the delay window ever runs. The returned future must be spawned
//! by the caller on its executor.

use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};

#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` after `delay` unless another task is scheduled first.
    ///
    /// Resolves to `None` when the task was superseded or cancelled.
    pub fn schedule<F, T>(&mut self, delay: Duration, task: F) -> impl Future<Output = Option<T>> + use<F, T>
    where
        F: Future<Output = T>,
    {
        self.cancel();
        let (handle, registration) = AbortHandle::new_pair();
        self.pending = Some(handle);

        let delayed = async move {
            if !delay.is_zero() {
                sleep(delay).await;
            }
            task.await
        };
        async move { Abortable::new(delayed, registration).await.ok() }
    }

    /// Abort the pending task, if any. Returns true when one was aborted.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_aborted() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
