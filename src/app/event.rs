//! Terminal event subscription.
//!
//! Wraps crossterm events into a simpler enum and runs a background reader
//! that forwards them over a channel so the main loop stays non-blocking.
//! The reader lives exactly as long as the [`EventReader`] that owns it.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Consecutive terminal read failures before the reader gives up.
const MAX_READ_ERRORS: u32 = 20;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    /// The terminal window lost focus (cancels any drag in progress).
    FocusLost,
    Tick,
}

/// Handle to the background reader.  Dropping it unsubscribes.
pub struct EventReader {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    stop: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl EventReader {
    /// Start polling the terminal.  A `Tick` is sent whenever `tick_rate`
    /// passes without input.
    pub fn spawn(tick_rate: Duration) -> Self {
        Self::spawn_with(tick_rate, |timeout| {
            if event::poll(timeout)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })
    }

    /// Run the reader over any event source.  `source` blocks for at most
    /// the given timeout and returns `None` when nothing arrived.
    fn spawn_with<F>(tick_rate: Duration, mut source: F) -> Self
    where
        F: FnMut(Duration) -> io::Result<Option<CtEvent>> + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        // crossterm's poll/read block, so keep them off the async workers.
        let task = tokio::task::spawn_blocking(move || {
            let mut failures = 0;
            while !stop_flag.load(Ordering::Relaxed) {
                let app_event = match source(tick_rate) {
                    Ok(None) => AppEvent::Tick,
                    Ok(Some(CtEvent::Key(k))) => AppEvent::Key(k),
                    Ok(Some(CtEvent::Mouse(m))) => AppEvent::Mouse(m),
                    Ok(Some(CtEvent::Resize(_, _))) => AppEvent::Resize,
                    Ok(Some(CtEvent::FocusLost)) => AppEvent::FocusLost,
                    Ok(Some(_)) => continue,
                    Err(err) => {
                        failures += 1;
                        tracing::warn!(%err, failures, "terminal read failed");
                        if failures >= MAX_READ_ERRORS {
                            break;
                        }
                        std::thread::sleep(tick_rate);
                        continue;
                    }
                };
                failures = 0;
                if tx.send(app_event).is_err() {
                    break; // receiver dropped
                }
            }
            tracing::debug!("event reader stopped");
        });

        Self {
            rx,
            stop,
            task: Some(task),
        }
    }

    /// Next event, or `None` once the reader has stopped.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        // The blocking task sees the flag within one tick and exits.
        self.stop.store(true, Ordering::Relaxed);
        self.task.take();
    }
}
