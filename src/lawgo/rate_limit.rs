// Request pacing for the registry API.
//
// law.go.kr throttles aggressive clients, and the service itself asks for
// roughly one request per second. The pacer enforces a minimum interval
// between requests across any number of concurrent tasks: whoever acquires
// first goes through, everyone else sleeps and re-checks.

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Enforces a minimum interval between requests.
///
/// Share by reference — all pacing state lives behind an async mutex.
pub struct RateLimiter {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// A limiter that spaces requests at least `interval` apart.
    pub fn min_interval(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// A limiter allowing `requests_per_second` requests per second.
    /// The rate must be positive.
    pub fn per_second(requests_per_second: f64) -> Self {
        Self::min_interval(Duration::from_secs_f64(1.0 / requests_per_second))
    }

    /// Wait until a request is allowed, then return.
    ///
    /// The lock is released while sleeping, and the slot is re-checked
    /// afterwards — a concurrent waiter may have taken it.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut last = self.last.lock().await;
                let now = Instant::now();
                match *last {
                    Some(prev) if now.duration_since(prev) < self.interval => {
                        self.interval - now.duration_since(prev)
                    }
                    _ => {
                        *last = Some(now);
                        return;
                    }
                }
            };
            tokio::time::sleep(wait).await;
        }
    }
}
