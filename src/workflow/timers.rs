use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::task::AbortHandle;

/// Delayed continuations owned by a form.
///
/// Every task spawned through the registry is aborted by [`Timers::close`],
/// and nothing can be scheduled afterwards. [`Timers::cancel_pending`] aborts
/// the same tasks without closing the registry.
#[derive(Debug, Default)]
pub struct Timers {
    inner: Mutex<TimersState>,
}

#[derive(Debug, Default)]
struct TimersState {
    closed: bool,
    handles: Vec<AbortHandle>,
}

impl Timers {
    /// Spawn `task` on the runtime and keep a handle to abort it later.
    ///
    /// Returns `false`, without spawning, once the registry is closed.
    pub fn spawn<F>(&self, task: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut state = self.lock();
        if state.closed {
            tracing::debug!("Timers are closed, dropping continuation");
            return false;
        }
        state.handles.retain(|handle| !handle.is_finished());
        let handle = tokio::spawn(task);
        state.handles.push(handle.abort_handle());
        true
    }

    /// Abort every pending continuation. Idempotent.
    pub fn close(&self) {
        let mut state = self.lock();
        state.closed = true;
        Self::abort_all(&mut state);
    }

    /// Abort every pending continuation but keep accepting new ones.
    pub fn cancel_pending(&self) {
        Self::abort_all(&mut self.lock());
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        self.lock()
            .handles
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    fn abort_all(state: &mut TimersState) {
        let pending = std::mem::take(&mut state.handles);
        if !pending.is_empty() {
            tracing::debug!(count = pending.len(), "Aborting pending continuations");
        }
        for handle in pending {
            handle.abort();
        }
    }

    fn lock(&self) -> MutexGuard<'_, TimersState> {
        // The state is a flag and a list of handles; a panic elsewhere cannot
        // leave it half-updated.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Timers {
    fn drop(&mut self) {
        self.close();
    }
}
