use rand::{rngs::StdRng, SeedableRng};
use std::io::IsTerminal;
use tracing::{error, info};
use txgen::{
    core::prelude::*,
    emit::{Emitter, LogSink},
    stream::{pacing::Sleep, transactions::stream_from_rng},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    info!("--- Transaction Logger Started ---");

    let config = Config::default();
    let transactions = stream_from_rng(StdRng::from_os_rng(), Sleep, config.pacing);

    let mut emitter = Emitter::new(LogSink);
    let report = emitter.run(transactions, shutdown_signal()).await?;

    info!(
        emitted = report.emitted,
        skipped = report.skipped,
        "transaction logger stopped"
    );
    Ok(())
}

/// Resolves on ctrl-c. If the signal handler cannot be installed the
/// generator keeps running until it is killed.
///
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(?err, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
