use std::time::Duration;

use tokio::task::JoinHandle;

/// One-shot timer behind the splash banner.
///
/// `on_finish` runs once after `delay`. Dropping the timer first aborts it,
/// and the callback never runs against a torn-down session.
pub struct SplashTimer {
    handle: JoinHandle<()>,
}

impl SplashTimer {
    pub fn start<F>(delay: Duration, on_finish: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_finish();
        });

        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
