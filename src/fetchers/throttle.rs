use rand::Rng;
use std::time::Duration;
use tokio::time::Instant;

/// Stand-in deadline when the configured gap does not fit in an `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Enforces a minimum gap between the starts of consecutive requests
#[derive(Debug)]
pub struct Throttle {
    delay: Duration,
    jitter: Duration,
    last_request: Option<Instant>,
}

impl Throttle {
    pub fn new(delay: Duration, jitter: Duration) -> Self {
        Self {
            delay,
            jitter,
            last_request: None,
        }
    }

    /// Sleep until the next request is allowed, then record it as started.
    /// The first call never sleeps.
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let ready_at = self.ready_at(last);
            let remaining = ready_at.saturating_duration_since(Instant::now());
            if !remaining.is_zero() {
                ::log::debug!("Throttling for {:.2}s", remaining.as_secs_f64());
                tokio::time::sleep_until(ready_at).await;
            }
        }
        self.last_request = Some(Instant::now());
    }

    /// Earliest start of the request following one started at `last`
    fn ready_at(&self, last: Instant) -> Instant {
        self.delay
            .checked_add(self.sample_jitter())
            .and_then(|gap| last.checked_add(gap))
            .unwrap_or_else(|| last + FAR_FUTURE)
    }

    fn sample_jitter(&self) -> Duration {
        if self.jitter.is_zero() {
            return Duration::ZERO;
        }
        let secs = rand::thread_rng().gen_range(0.0..=self.jitter.as_secs_f64());
        Duration::try_from_secs_f64(secs).unwrap_or(self.jitter)
    }
}
