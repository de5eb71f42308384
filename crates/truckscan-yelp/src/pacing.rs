//! Fixed-interval pacing between Yelp requests.
//!
//! The collector waits a short interval after every business and a longer one
//! after every city. [`Pacer`] owns those intervals and delegates the actual
//! wait to a [`Sleep`] implementation so tests can observe the schedule
//! without real delays. There is no jitter and no backoff.

use std::future::Future;
use std::time::Duration;

/// Something that can suspend the current task for a duration.
pub trait Sleep {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// [`Sleep`] backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleep;

impl Sleep for TokioSleep {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Waits a fixed interval after each business and after each city.
#[derive(Debug, Clone)]
pub struct Pacer<S = TokioSleep> {
    business_delay: Duration,
    city_delay: Duration,
    sleeper: S,
}

impl Pacer<TokioSleep> {
    #[must_use]
    pub fn new(business_delay_ms: u64, city_delay_ms: u64) -> Self {
        Self::with_sleeper(business_delay_ms, city_delay_ms, TokioSleep)
    }
}

impl<S: Sleep> Pacer<S> {
    #[must_use]
    pub fn with_sleeper(business_delay_ms: u64, city_delay_ms: u64, sleeper: S) -> Self {
        Self {
            business_delay: Duration::from_millis(business_delay_ms),
            city_delay: Duration::from_millis(city_delay_ms),
            sleeper,
        }
    }

    /// Called once per business, after its detail fetch (successful or not).
    pub async fn after_business(&self) {
        self.wait(self.business_delay).await;
    }

    /// Called once per city, after all of its businesses.
    pub async fn after_city(&self) {
        self.wait(self.city_delay).await;
    }

    #[must_use]
    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    async fn wait(&self, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        tracing::debug!(delay_ms = delay.as_millis(), "pacing");
        self.sleeper.sleep(delay).await;
    }
}
