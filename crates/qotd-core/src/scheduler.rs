//! Periodic sync scheduler
//!
//! Repeats a task on a fixed interval until a shutdown signal arrives.
//! Modeled as an explicit cancellable loop rather than a fire-and-forget
//! timer, so tests can drive ticks deterministically under paused time.

use crate::storage::KvStore;
use crate::store::QuoteStore;
use crate::sync::{self, RemoteClient};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// How often a reconcile pass runs unless configured otherwise
pub const DEFAULT_SYNC_INTERVAL: Duration = Duration::from_secs(60);

/// A unit of work the scheduler fires on every tick
#[allow(async_fn_in_trait)]
pub trait PeriodicTask {
    async fn run_once(&mut self);
}

/// Drives a [`PeriodicTask`] on a fixed interval
pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Run `task` until `shutdown` changes or its sender goes away.
    ///
    /// The first tick fires immediately. Ticks are serialized; any tick
    /// that comes due while the task is still running is dropped, not
    /// queued up behind it, and a pending shutdown always wins over a due
    /// tick.
    pub async fn run(&self, task: &mut impl PeriodicTask, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.changed() => break,
                _ = ticker.tick() => {
                    task.run_once().await;
                    // A deadline that elapsed during the run would complete
                    // as one late tick on the next poll; reset the timer so
                    // it is dropped instead
                    ticker.reset();
                }
            }
        }
    }
}

/// The tick body of the watch command: one reconcile pass against the
/// remote feed, with the outcome logged instead of returned
pub struct ReconcileTask<'a, S: KvStore> {
    client: &'a RemoteClient,
    store: &'a mut QuoteStore<S>,
}

impl<'a, S: KvStore> ReconcileTask<'a, S> {
    pub fn new(client: &'a RemoteClient, store: &'a mut QuoteStore<S>) -> Self {
        Self { client, store }
    }
}

impl<S: KvStore> PeriodicTask for ReconcileTask<'_, S> {
    async fn run_once(&mut self) {
        match sync::reconcile(self.client, self.store).await {
            Ok(report) if report.merged > 0 => {
                tracing::info!(
                    "Merged {} new quotes from server ({} fetched)",
                    report.merged,
                    report.fetched
                );
            }
            Ok(report) => {
                tracing::debug!("Collection already up to date ({} fetched)", report.fetched);
            }
            Err(error) => tracing::warn!("Sync tick failed: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting {
        ticks: usize,
    }

    impl PeriodicTask for Counting {
        async fn run_once(&mut self) {
            self.ticks += 1;
        }
    }

    struct Slow {
        ticks: usize,
    }

    impl PeriodicTask for Slow {
        async fn run_once(&mut self) {
            self.ticks += 1;
            tokio::time::sleep(Duration::from_secs(130)).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_until_shutdown() {
        let scheduler = Scheduler::new(Duration::from_secs(60));
        let (stop_tx, stop_rx) = watch::channel(false);
        let mut task = Counting { ticks: 0 };

        let driver = scheduler.run(&mut task, stop_rx);
        let stopper = async {
            tokio::time::sleep(Duration::from_secs(150)).await;
            stop_tx.send(true).unwrap();
        };
        tokio::join!(driver, stopper);

        // Immediate tick, then one at 60s and one at 120s
        assert_eq!(task.ticks, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_task_drops_missed_ticks() {
        let scheduler = Scheduler::new(Duration::from_secs(60));
        let (stop_tx, stop_rx) = watch::channel(false);
        let mut task = Slow { ticks: 0 };

        let driver = scheduler.run(&mut task, stop_rx);
        let stopper = async {
            tokio::time::sleep(Duration::from_secs(150)).await;
            stop_tx.send(true).unwrap();
        };
        tokio::join!(driver, stopper);

        // The first run outlives the 60s and 120s ticks; both are skipped
        // rather than fired back to back when it ends
        assert_eq!(task.ticks, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_during_slow_run_exits_promptly() {
        let scheduler = Scheduler::new(Duration::from_secs(60));
        let (stop_tx, stop_rx) = watch::channel(false);
        let mut task = Slow { ticks: 0 };

        let driver = scheduler.run(&mut task, stop_rx);
        let stopper = async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            stop_tx.send(true).unwrap();
        };
        tokio::join!(driver, stopper);

        // The signal arrived mid-run; the tick that elapsed in the
        // meantime must not fire on the way out
        assert_eq!(task.ticks, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_sender_dropped() {
        let scheduler = Scheduler::new(Duration::from_secs(60));
        let (stop_tx, stop_rx) = watch::channel(false);
        let mut task = Counting { ticks: 0 };

        let driver = scheduler.run(&mut task, stop_rx);
        let dropper = async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(stop_tx);
        };
        tokio::join!(driver, dropper);

        assert_eq!(task.ticks, 1);
    }
}
