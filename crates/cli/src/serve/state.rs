//! Shared server state and per-IP rate limiting.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::Instant;

use tokio::sync::Mutex;

use super::RATE_LIMIT_WINDOW_SECS;

/// One client's request count inside the current window.
struct Window {
    count: u64,
    started: Instant,
}

/// Simple fixed-window rate limiter keyed by client IP.
pub(crate) struct RateLimiter {
    windows: Mutex<HashMap<IpAddr, Window>>,
    max_requests: u64,
}

impl RateLimiter {
    pub(crate) fn new(max_requests: u64) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            max_requests,
        }
    }

    /// Record a request from `ip`. Returns `Err(retry_after_secs)` when the
    /// window budget is exhausted.
    pub(crate) async fn check(&self, ip: IpAddr) -> Result<(), u64> {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;

        let window = windows.entry(ip).or_insert(Window {
            count: 0,
            started: now,
        });
        if window.started.elapsed().as_secs() >= RATE_LIMIT_WINDOW_SECS {
            // Stale window, start counting afresh.
            *window = Window {
                count: 0,
                started: now,
            };
        }

        window.count += 1;
        if window.count > self.max_requests {
            let retry_after =
                RATE_LIMIT_WINDOW_SECS.saturating_sub(window.started.elapsed().as_secs());
            return Err(retry_after);
        }

        Ok(())
    }
}

/// State shared by all request handlers. The pricing tables themselves are
/// `'static` data compiled into the core crate, so nothing here guards them.
pub(crate) struct AppState {
    pub(crate) rate_limiter: RateLimiter,
    pub(crate) api_key: Option<String>,
}
