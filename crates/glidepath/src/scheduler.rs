//! Time source and frame scheduling for animations and settle timers.
//!
//! Responsibilities:
//! - Provide the monotonic clock the pointer and flow compare deadlines against.
//! - Let the renderer ask its host for another frame ("schedule next tick").
//! - Offer a manual implementation so tests drive time deterministically.
//!
//! Does NOT handle:
//! - Running the frame loop (hosts call `FlowManager::tick` / `Pointer::tick`).
//!
//! Invariants:
//! - `now()` never goes backwards.
//! - `request_frame()` is cheap and idempotent between frames.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::Notify;

/// Capability injected into the renderer for reading time and requesting frames.
pub trait Scheduler: Send + Sync {
    /// Time elapsed since the scheduler's origin.
    fn now(&self) -> Duration;

    /// Ask the host to call `tick` again on its next frame.
    fn request_frame(&self);
}

/// Wall-clock scheduler used by the terminal runtime.
#[derive(Debug)]
pub struct SystemScheduler {
    origin: Instant,
    frame_requested: AtomicBool,
    notify: Notify,
}

impl SystemScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            origin: Instant::now(),
            frame_requested: AtomicBool::new(false),
            notify: Notify::new(),
        })
    }

    /// Consume a pending frame request, returning whether one was pending.
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.swap(false, Ordering::AcqRel)
    }

    /// Wait until a frame is requested.
    pub async fn frame_requested(&self) {
        if self.frame_requested.load(Ordering::Acquire) {
            return;
        }
        self.notify.notified().await;
    }
}

impl Scheduler for SystemScheduler {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn request_frame(&self) {
        self.frame_requested.store(true, Ordering::Release);
        self.notify.notify_one();
    }
}

/// Manually advanced clock for deterministic tests and headless embedding.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_nanos: AtomicU64,
    frame_requests: AtomicUsize,
}

impl ManualScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.now_nanos.fetch_add(nanos, Ordering::AcqRel);
    }

    /// Total number of frame requests received so far.
    pub fn frame_requests(&self) -> usize {
        self.frame_requests.load(Ordering::Acquire)
    }

    /// Reset the frame request counter, returning the previous count.
    pub fn take_frame_requests(&self) -> usize {
        self.frame_requests.swap(0, Ordering::AcqRel)
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.now_nanos.load(Ordering::Acquire))
    }

    fn request_frame(&self) {
        self.frame_requests.fetch_add(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_advances() {
        let sched = ManualScheduler::new();
        assert_eq!(sched.now(), Duration::ZERO);
        sched.advance(Duration::from_millis(16));
        sched.advance(Duration::from_millis(4));
        assert_eq!(sched.now(), Duration::from_millis(20));
    }

    #[test]
    fn test_manual_scheduler_counts_frames() {
        let sched = ManualScheduler::new();
        sched.request_frame();
        sched.request_frame();
        assert_eq!(sched.frame_requests(), 2);
        assert_eq!(sched.take_frame_requests(), 2);
        assert_eq!(sched.frame_requests(), 0);
    }

    #[test]
    fn test_system_scheduler_frame_flag() {
        let sched = SystemScheduler::new();
        assert!(!sched.take_frame_request());
        sched.request_frame();
        assert!(sched.take_frame_request());
        assert!(!sched.take_frame_request());
    }

    #[tokio::test]
    async fn test_system_scheduler_wakes_waiter() {
        let sched = SystemScheduler::new();
        let waiter = Arc::clone(&sched);
        let handle = tokio::spawn(async move { waiter.frame_requested().await });
        tokio::task::yield_now().await;
        sched.request_frame();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("waiter should be woken")
            .unwrap();
    }
}
