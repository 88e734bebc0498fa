use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Token-bucket limiter: `permits` events per `per`, with a burst equal to
/// the permit count. Non-blocking; callers that are denied fail fast.
pub struct RateLimiter {
    capacity: f64,
    refill_per_sec: f64,
    state: Mutex<BucketState>,
}

struct BucketState {
    tokens: f64,
    last_refill: Instant,
}

impl RateLimiter {
    pub fn new(permits: u32, per: Duration) -> Self {
        let capacity = permits as f64;
        let refill_per_sec = if per.is_zero() {
            f64::INFINITY
        } else {
            capacity / per.as_secs_f64()
        };
        Self {
            capacity,
            refill_per_sec,
            state: Mutex::new(BucketState {
                tokens: capacity,
                last_refill: Instant::now(),
            }),
        }
    }

    /// A limiter that never denies.
    pub fn unlimited() -> Self {
        Self {
            capacity: f64::INFINITY,
            refill_per_sec: f64::INFINITY,
            state: Mutex::new(BucketState {
                tokens: f64::INFINITY,
                last_refill: Instant::now(),
            }),
        }
    }

    pub fn allow(&self) -> bool {
        let mut state = self.state.lock();
        let now = Instant::now();
        let elapsed = now.duration_since(state.last_refill).as_secs_f64();
        state.tokens = (state.tokens + elapsed * self.refill_per_sec).min(self.capacity);
        state.last_refill = now;

        if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}
