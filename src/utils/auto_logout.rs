use std::{future::Future, time::Duration};

use crate::utils::debounce::Debouncer;

/// Idle timer: fires `on_logout` once `timeout` passes without
/// [`activity`](AutoLogout::activity). Armed as soon as it is created.
pub struct AutoLogout {
    timer: Debouncer<()>,
}

impl AutoLogout {
    pub fn start<F, Fut>(timeout: Duration, on_logout: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let timer = Debouncer::new(timeout, move |()| on_logout());
        timer.push(());
        Self { timer }
    }

    pub fn activity(&self) {
        self.timer.push(());
    }

    pub fn stop(&self) {
        self.timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    fn counting(timeout: Duration) -> (Arc<AtomicUsize>, AutoLogout) {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let timer = AutoLogout::start(timeout, move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        (fired, timer)
    }

    #[tokio::test(start_paused = true)]
    async fn logs_out_after_idle_timeout() {
        let (fired, _timer) = counting(Duration::from_secs(60));

        tokio::time::sleep(Duration::from_secs(59)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(600)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn activity_postpones_logout() {
        let (fired, timer) = counting(Duration::from_secs(60));

        for _ in 0..5 {
            tokio::time::sleep(Duration::from_secs(45)).await;
            timer.activity();
        }
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_timer_never_fires() {
        let (fired, timer) = counting(Duration::from_secs(60));
        timer.stop();
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
