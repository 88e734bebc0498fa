use std::time::Duration;

use rand::Rng;

/// Latency and failure characteristics of a simulated upstream. Tests use
/// [`SimulationProfile::instant`] so adapter behavior stays deterministic.
#[derive(Debug, Clone, Copy)]
pub struct SimulationProfile {
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    pub failure_rate: f64,
}

impl SimulationProfile {
    pub const fn new(min_latency_ms: u64, max_latency_ms: u64, failure_rate: f64) -> Self {
        Self {
            min_latency_ms,
            max_latency_ms,
            failure_rate,
        }
    }

    /// No latency, no injected failures.
    pub const fn instant() -> Self {
        Self::new(0, 0, 0.0)
    }

    pub(crate) async fn apply_latency(&self) {
        if self.max_latency_ms == 0 {
            return;
        }
        let delay_ms = rand::thread_rng().gen_range(self.min_latency_ms..=self.max_latency_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    pub(crate) fn roll_failure(&self) -> bool {
        self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_profile_never_fails() {
        let profile = SimulationProfile::instant();
        for _ in 0..100 {
            assert!(!profile.roll_failure());
        }
    }

    #[test]
    fn certain_failure_always_fails() {
        let profile = SimulationProfile::new(0, 0, 1.0);
        assert!(profile.roll_failure());
    }
}
