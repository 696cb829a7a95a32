use crate::stream::pacing::Pacing;

/// Shortest pause between two transactions, in milliseconds.
pub const MIN_PAUSE_MILLIS: u64 = 500;

/// Longest pause between two transactions, in milliseconds.
pub const MAX_PAUSE_MILLIS: u64 = 3000;

/// Compiled-in settings of the generator.
///
/// There is no file or environment layer, the process always runs with
/// `Config::default()`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Delay range between two emitted transactions.
    pub pacing: Pacing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pacing: Pacing::new(MIN_PAUSE_MILLIS, MAX_PAUSE_MILLIS),
        }
    }
}
