//! Request pacing.
//!
//! Story batches are fetched one item at a time, and each request waits on a
//! [`RequestGate`] first. Keeping the gate separate from the loader lets the
//! interval be swapped (or zeroed in tests) and measured on its own.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Awaited before every paced request.
#[async_trait]
pub trait RequestGate: Send + Sync {
    /// Resolve when the next request may be issued.
    async fn acquire(&self);

    /// Configured spacing between requests.
    fn interval(&self) -> Duration;
}

/// Hands out request slots at least `interval` apart.
///
/// Each caller reserves the slot one interval after the later of now and the
/// previous slot, then sleeps until it. Callers sharing one gate are spaced
/// out just like a single sequential caller.
#[derive(Debug)]
pub struct FixedIntervalGate {
    interval: Duration,
    last_slot: Mutex<Option<Instant>>,
}

impl FixedIntervalGate {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_slot: Mutex::new(None),
        }
    }

    /// A gate that never waits.
    pub fn unpaced() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for FixedIntervalGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[async_trait]
impl RequestGate for FixedIntervalGate {
    async fn acquire(&self) {
        if self.interval.is_zero() {
            return;
        }
        let slot = {
            let mut last = self.last_slot.lock().await;
            let now = Instant::now();
            let base = last.map_or(now, |prev| prev.max(now));
            let slot = base + self.interval;
            *last = Some(slot);
            slot
        };
        tokio::time::sleep_until(slot).await;
    }

    fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_default_interval() {
        assert_eq!(
            FixedIntervalGate::default().interval(),
            Duration::from_millis(100)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_acquire_waits_interval() {
        let gate = FixedIntervalGate::new(Duration::from_millis(100));
        let start = Instant::now();

        for _ in 0..3 {
            gate.acquire().await;
        }

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(300), "{:?}", elapsed);
        assert!(elapsed < Duration::from_millis(400), "{:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shared_gate_spaces_concurrent_callers() {
        let gate = Arc::new(FixedIntervalGate::new(Duration::from_millis(100)));
        let start = Instant::now();

        let tasks: Vec<_> = (0..3)
            .map(|_| {
                let gate = Arc::clone(&gate);
                tokio::spawn(async move {
                    gate.acquire().await;
                    Instant::now()
                })
            })
            .collect();
        let mut released = Vec::new();
        for task in tasks {
            released.push(task.await.unwrap() - start);
        }
        released.sort();

        assert_eq!(
            released,
            vec![
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(300),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_gate_does_not_bank_slots() {
        let gate = FixedIntervalGate::new(Duration::from_millis(100));
        gate.acquire().await;
        tokio::time::sleep(Duration::from_secs(1)).await;

        let start = Instant::now();
        gate.acquire().await;

        assert_eq!(start.elapsed(), Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unpaced_gate_does_not_wait() {
        let gate = FixedIntervalGate::unpaced();
        let start = Instant::now();

        gate.acquire().await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
