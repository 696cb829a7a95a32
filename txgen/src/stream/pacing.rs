use rand::Rng;
use std::future::Future;
use std::time::Duration;

/// Inclusive range of milliseconds to wait between two transactions.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub min_millis: u64,
    pub max_millis: u64,
}

impl Pacing {
    pub const fn new(min_millis: u64, max_millis: u64) -> Self {
        Self {
            min_millis,
            max_millis,
        }
    }

    /// Draws the next pause, uniform over `[min_millis, max_millis]`.
    ///
    /// A reversed range collapses to `min_millis`.
    ///
    pub fn next_pause<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let max = self.max_millis.max(self.min_millis);
        Duration::from_millis(rng.random_range(self.min_millis..=max))
    }
}

/// Suspends the emission path between two transactions.
///
/// Production code sleeps on the tokio timer; tests swap in [`NoDelay`] or
/// their own recorder so they never wait on a real clock.
///
pub trait Delay {
    fn pause(&mut self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Waits for real using `tokio::time::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sleep;

impl Delay for Sleep {
    fn pause(&mut self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn pause(&mut self, _duration: Duration) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}
