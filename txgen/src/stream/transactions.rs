use futures::Stream;
use rand::Rng;

use crate::domain::prelude::*;
use crate::stream::pacing::{Delay, Pacing};

/// A never-ending stream of random transactions.
///
/// The first transaction is yielded right away. Every following one is
/// generated only after a pause drawn from `pacing` has elapsed on `delay`,
/// so a consumer that emits each item before polling again sees the
/// generate, emit, pause cycle in order.
///
/// Pauses and transaction fields are drawn from the same `rng`; seeding it
/// makes the whole sequence reproducible. Bound the stream with
/// `StreamExt::take` to stop after a fixed number of transactions.
///
pub fn stream_from_rng<R, D>(
    rng: R,
    delay: D,
    pacing: Pacing,
) -> impl Stream<Item = Transaction> + Send
where
    R: Rng + Send + 'static,
    D: Delay + Send + 'static,
{
    let stream = futures::stream::unfold(
        (rng, delay, false),
        move |(mut rng, mut delay, started)| async move {
            if started {
                let pause = pacing.next_pause(&mut rng);
                delay.pause(pause).await;
            }

            let transaction = Transaction::random(&mut rng);
            Some((transaction, (rng, delay, true)))
        },
    );

    Box::pin(stream)
}
