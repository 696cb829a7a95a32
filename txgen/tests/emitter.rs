mod common;

use common::ConstRng;
use futures::StreamExt;
use rand::{rngs::StdRng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use txgen::{
    core::prelude::*,
    domain::prelude::*,
    emit::{Emitter, MemorySink, Report},
    stream::{
        pacing::{Delay, NoDelay},
        transactions::stream_from_rng,
    },
};

async fn emit_lines<R: rand::Rng + Send + 'static>(rng: R, count: usize) -> (Report, Vec<String>) {
    let config = Config::default();
    let transactions = stream_from_rng(rng, NoDelay, config.pacing).take(count);

    let mut emitter = Emitter::new(MemorySink::default());
    let report = emitter
        .run(transactions, std::future::pending())
        .await
        .unwrap();

    let sink = emitter.into_sink();
    assert!(sink.diagnostics.is_empty());
    (report, sink.lines)
}

/// Records every pause instead of sleeping.
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Duration>>>);

impl Delay for Recorder {
    fn pause(&mut self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.0.lock().unwrap().push(duration);
        std::future::ready(())
    }
}

#[tokio::test]
async fn test_three_transactions_from_fixed_seed() {
    let recorder = Recorder::default();
    let config = Config::default();
    let transactions =
        stream_from_rng(ChaCha8Rng::seed_from_u64(42), recorder.clone(), config.pacing).take(3);

    let mut emitter = Emitter::new(MemorySink::default());
    let report = emitter
        .run(transactions, std::future::pending())
        .await
        .unwrap();

    assert_eq!(report, Report { emitted: 3, skipped: 0 });
    assert_eq!(
        emitter.sink().lines,
        vec![
            r#"{"transaction_id":"a15b5d39-b5bf-40ae-8891-7925c63f45f3","card_number":"5436726133186782","value":2534.83,"currency":"GBP","status":"Normal"}"#,
            r#"{"transaction_id":"4d0398c5-8e71-4d97-aa17-27e5a08992ba","card_number":"4195111420916326","value":392.95,"currency":"GBP","status":"Suspicious"}"#,
            r#"{"transaction_id":"7111fb2f-d88d-4bd6-bdce-58569aea69c2","card_number":"5666568022820706","value":2122.25,"currency":"EUR","status":"Suspicious"}"#,
        ]
    );
    assert_eq!(
        *recorder.0.lock().unwrap(),
        vec![Duration::from_millis(2893), Duration::from_millis(1154)]
    );
}

#[tokio::test]
async fn test_three_transactions_from_low_source() {
    let (report, lines) = emit_lines(ConstRng(0), 3).await;

    assert_eq!(report, Report { emitted: 3, skipped: 0 });
    let expected = r#"{"transaction_id":"00000000-0000-4000-8000-000000000000","card_number":"4000000000000000","value":1.0,"currency":"USD","status":"Suspicious"}"#;
    assert_eq!(lines, vec![expected; 3]);
}

#[tokio::test]
async fn test_three_transactions_from_high_source() {
    let (report, lines) = emit_lines(ConstRng(u64::MAX), 3).await;

    assert_eq!(report, Report { emitted: 3, skipped: 0 });
    let expected = r#"{"transaction_id":"ffffffff-ffff-4fff-bfff-ffffffffffff","card_number":"5999999999999999","value":5000.0,"currency":"CAD","status":"Normal"}"#;
    assert_eq!(lines, vec![expected; 3]);
}

#[tokio::test]
async fn test_seeded_run_is_reproducible() {
    let (_, first) = emit_lines(StdRng::seed_from_u64(42), 3).await;
    let (_, second) = emit_lines(StdRng::seed_from_u64(42), 3).await;
    assert_eq!(first, second);

    let (_, other) = emit_lines(StdRng::seed_from_u64(43), 3).await;
    assert_ne!(first, other);
}

#[tokio::test]
async fn test_emitted_lines_hold_valid_transactions() {
    let (report, lines) = emit_lines(StdRng::seed_from_u64(2024), 2_000).await;
    assert_eq!(report.emitted, 2_000);

    let mut ids = HashSet::new();
    for line in &lines {
        let raw: serde_json::Value = serde_json::from_str(line).unwrap();
        let keys: HashSet<&str> = raw.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            HashSet::from(["transaction_id", "card_number", "value", "currency", "status"])
        );

        let tx: Transaction = serde_json::from_str(line).unwrap();
        assert!(tx.card_number.len() == 16 && tx.card_number.chars().all(|c| c.is_ascii_digit()));
        assert!(tx.card_number.starts_with('4') || tx.card_number.starts_with('5'));
        assert!((1.0..=5000.0).contains(&tx.value));
        assert!(Currency::ALL.contains(&tx.currency));
        assert!(ids.insert(tx.id));
    }
}
