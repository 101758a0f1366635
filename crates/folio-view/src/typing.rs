//! Typing-animation timer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::update::Message;

/// Delay between revealed characters.
pub const DEFAULT_TYPING_INTERVAL: Duration = Duration::from_millis(100);

/// A repeating timer that emits one [`Message::TypeNextChar`] per interval.
///
/// The first tick fires one interval after start. The timer stops by itself
/// after `ticks` messages, when the receiving side goes away, or when
/// cancelled. Dropping the handle cancels it.
#[derive(Debug)]
pub struct TypingTimer {
    handle: Option<JoinHandle<()>>,
}

impl TypingTimer {
    /// Start the timer on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(ticks: usize, interval: Duration, tx: mpsc::UnboundedSender<Message>) -> Self {
        if ticks == 0 {
            return Self { handle: None };
        }

        // tokio intervals reject a zero period
        let period = interval.max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

            for _ in 0..ticks {
                timer.tick().await;
                if tx.send(Message::TypeNextChar).is_err() {
                    tracing::debug!("Typing timer receiver dropped");
                    return;
                }
            }

            tracing::debug!("Typing timer finished after {} ticks", ticks);
        });

        Self {
            handle: Some(handle),
        }
    }

    /// Abort the timer task.
    ///
    /// A tick already being sent may still land; receivers that must not
    /// see one close their end as well.
    pub fn cancel(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    /// Whether the timer task has stopped, on its own or through `cancel`.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }
}

impl Drop for TypingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = Instant::now();
        let _timer = TypingTimer::start(3, Duration::from_millis(100), tx);

        let mut count = 0;
        while let Some(msg) = rx.recv().await {
            assert_eq!(msg, Message::TypeNextChar);
            count += 1;
        }

        assert_eq!(count, 3);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(300), "{:?}", elapsed);
        assert!(elapsed < Duration::from_millis(400), "{:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_further_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TypingTimer::start(10, Duration::from_millis(100), tx);

        sleep(Duration::from_millis(250)).await;
        timer.cancel();

        let mut delivered = 0;
        while rx.recv().await.is_some() {
            delivered += 1;
        }
        assert_eq!(delivered, 2);

        sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_reports_finished_before_its_last_tick() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut timer = TypingTimer::start(10, Duration::from_millis(100), tx);

        sleep(Duration::from_millis(250)).await;
        assert!(!timer.is_finished());

        timer.cancel();
        sleep(Duration::from_millis(10)).await;

        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = TypingTimer::start(10, Duration::from_millis(100), tx);

        drop(timer);

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn zero_ticks_never_spawns() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = TypingTimer::start(0, Duration::from_millis(100), tx);

        assert!(timer.is_finished());
        assert!(rx.recv().await.is_none());
    }
}
