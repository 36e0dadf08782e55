use parking_lot::Mutex;
use std::future::Future;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info};

/// Work that outlives the request that started it. Shutdown waits for all of
/// it to finish.
#[derive(Default)]
pub struct BackgroundTasks {
    tasks: Mutex<JoinSet<()>>,
}

impl BackgroundTasks {
    pub fn new() -> BackgroundTasks {
        BackgroundTasks::default()
    }

    /// Finished tasks are reaped on every spawn so the set doesn't grow
    /// without bound.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock();

        while let Some(res) = tasks.try_join_next() {
            log_result(res);
        }

        tasks.spawn(future);
    }

    pub fn len(&self) -> usize {
        self.tasks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.lock().is_empty()
    }

    /// Waits for every task, including any spawned while draining.
    pub async fn drain(&self) {
        loop {
            let mut tasks = std::mem::take(&mut *self.tasks.lock());
            if tasks.is_empty() {
                break;
            }

            info!(count = tasks.len(), "Waiting for background tasks");

            while let Some(res) = tasks.join_next().await {
                log_result(res);
            }
        }

        debug!("Background tasks drained");
    }
}

fn log_result(res: Result<(), JoinError>) {
    if let Err(e) = res {
        error!(error = %e, "Background task panicked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_drain_waits_for_tasks() {
        let tasks = BackgroundTasks::new();
        let done = Arc::new(AtomicUsize::new(0));

        for i in 0..3 {
            let done = Arc::clone(&done);
            tasks.spawn(async move {
                tokio::time::sleep(Duration::from_millis(10 * i)).await;
                done.fetch_add(1, Ordering::SeqCst);
            });
        }

        tasks.drain().await;

        assert_eq!(done.load(Ordering::SeqCst), 3);
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_panics_are_contained() {
        let tasks = BackgroundTasks::new();
        tasks.spawn(async { panic!("handler bug") });

        tasks.drain().await;
        assert!(tasks.is_empty());
    }
}
