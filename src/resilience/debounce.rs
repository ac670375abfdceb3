use std::time::Duration;

use tokio::{sync::mpsc, time::sleep};

/// Posts `event` after `quiet` has elapsed.
///
/// Nothing is cancelled when newer input arrives; the receiver compares the
/// token carried by `event` with its current one and drops stale wake-ups.
pub fn schedule<E>(tx: mpsc::Sender<E>, quiet: Duration, event: E)
where
    E: Send + 'static,
{
    tokio::spawn(async move {
        sleep(quiet).await;
        let _ = tx.send(event).await;
    });
}
