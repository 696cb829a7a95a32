use crate::core::prelude::*;
use crate::domain::prelude::*;
use futures::{Stream, StreamExt};
use std::future::Future;
use tracing::info;

pub use encoder::{Encoder, Json};
pub use sink::{LogSink, MemorySink, Sink};

/// Module for the output sinks.
///
/// A sink receives every serialized transaction as one line, plus the
/// diagnostics raised while emitting.
///
pub mod sink {
    use std::io;
    use tracing::{error, info};

    /// Destination of emitted transaction lines.
    ///
    pub trait Sink {
        /// Writes one serialized transaction. The line is written whole or
        /// not at all; an error stops the emission loop.
        fn emit(&mut self, line: &str) -> io::Result<()>;

        /// Reports a non-fatal problem in place of a record.
        fn diagnostic(&mut self, message: &str);
    }

    /// Logs every line through `tracing`, letting the subscriber add the
    /// timestamp framing.
    ///
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LogSink;

    impl Sink for LogSink {
        fn emit(&mut self, line: &str) -> io::Result<()> {
            info!("{line}");
            Ok(())
        }

        fn diagnostic(&mut self, message: &str) {
            error!("{message}");
        }
    }

    /// Keeps everything in memory, in the order it was emitted.
    ///
    #[derive(Debug, Default, Clone)]
    pub struct MemorySink {
        pub lines: Vec<String>,
        pub diagnostics: Vec<String>,
    }

    impl Sink for MemorySink {
        fn emit(&mut self, line: &str) -> io::Result<()> {
            self.lines.push(line.to_owned());
            Ok(())
        }

        fn diagnostic(&mut self, message: &str) {
            self.diagnostics.push(message.to_owned());
        }
    }
}

/// Module for turning transactions into output lines.
///
pub mod encoder {
    use crate::core::prelude::*;
    use crate::domain::prelude::*;

    pub trait Encoder {
        fn encode(&self, transaction: &Transaction) -> Result<String, EmitError>;
    }

    /// Single-line JSON, field names as declared on [`Transaction`].
    #[derive(Debug, Default, Clone, Copy)]
    pub struct Json;

    impl Encoder for Json {
        fn encode(&self, transaction: &Transaction) -> Result<String, EmitError> {
            Ok(serde_json::to_string(transaction)?)
        }
    }
}

/// Counts of what a run did with the transactions it received.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub emitted: u64,
    pub skipped: u64,
}

/// Serializes transactions and writes them to a sink, one line each.
///
pub struct Emitter<K, E = Json> {
    sink: K,
    encoder: E,
}

impl<K: Sink> Emitter<K, Json> {
    pub fn new(sink: K) -> Self {
        Self {
            sink,
            encoder: Json,
        }
    }
}

impl<K: Sink, E: Encoder> Emitter<K, E> {
    pub fn with_encoder<E2: Encoder>(self, encoder: E2) -> Emitter<K, E2> {
        Emitter {
            sink: self.sink,
            encoder,
        }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Runs the emission loop.
    ///
    /// Pulls transactions from `transactions` one at a time and emits each
    /// before asking for the next, so output order is generation order.
    /// The loop ends when the stream ends or `shutdown` resolves, whichever
    /// comes first; shutdown is checked before every transaction.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::Sink`] as soon as the sink fails to write a line.
    /// Serialization failures never end the loop, they are reported to the
    /// sink as diagnostics and the record is skipped.
    ///
    pub async fn run<S, F>(&mut self, transactions: S, shutdown: F) -> Result<Report, EmitError>
    where
        S: Stream<Item = Transaction>,
        F: Future<Output = ()>,
    {
        tokio::pin!(transactions);
        tokio::pin!(shutdown);

        let mut report = Report::default();
        loop {
            let transaction = tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("shutdown requested, stopping emission");
                    break;
                }
                next = transactions.next() => match next {
                    Some(transaction) => transaction,
                    None => break,
                },
            };

            self.emit(&transaction, &mut report)?;
        }

        Ok(report)
    }

    /// Encodes and writes a single transaction.
    ///
    fn emit(&mut self, transaction: &Transaction, report: &mut Report) -> Result<(), EmitError> {
        match self.encoder.encode(transaction) {
            Ok(line) => {
                self.sink.emit(&line)?;
                report.emitted += 1;
            }
            Err(err) => {
                self.sink.diagnostic(&err.to_string());
                report.skipped += 1;
            }
        }
        Ok(())
    }
}
