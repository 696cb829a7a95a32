pub mod pacing;
pub mod transactions;
