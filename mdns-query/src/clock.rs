use std::time::Instant;

/// Monotonic elapsed-millisecond source, injected so the renewal
/// predicate in [`crate::cached_response::CachedResponse`] can be tested
/// deterministically. Wall-clock time is never consulted (§9).
pub trait Clock: Send + Sync {
    fn elapsed_millis(&self) -> u64;
}

/// Production clock: milliseconds elapsed since this instance was
/// constructed. Callers construct one `MonotonicClock` at startup and
/// share it with every planner invocation, the same way a cache would
/// record TTL deadlines against it.
#[derive(Debug)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn elapsed_millis(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

/// Test clock that reports whatever value it was told to.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeClock(pub u64);

impl Clock for FakeClock {
    fn elapsed_millis(&self) -> u64 {
        self.0
    }
}
