use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    /// The transaction could not be turned into a JSON line. Recovered by
    /// skipping the record.
    #[error("failed to serialize transaction: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The output sink rejected a line. Stops the emission loop.
    #[error("failed to write to output sink: {0}")]
    Sink(#[from] io::Error),
}
