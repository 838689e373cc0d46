//! Delayed, cancellable notifications.
//!
//! At most one alert is pending at a time. Scheduling a new one aborts the previous timer,
//! and every delivery carries the token of the schedule call that produced it, so an alert
//! that fired just before being replaced is dropped instead of shown.

use log::{debug, warn};
use reel::Notification;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type AlertToken = u64;

#[derive(Debug)]
struct ScheduledAlert {
    token: AlertToken,
    notification: Notification,
}

struct PendingAlert {
    token: AlertToken,
    handle: Option<JoinHandle<()>>,
}

pub struct AlertScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<ScheduledAlert>,
    rx: mpsc::UnboundedReceiver<ScheduledAlert>,
    pending: Option<PendingAlert>,
    last_token: AlertToken,
}

impl AlertScheduler {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            tx,
            rx,
            pending: None,
            last_token: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending alert with `notification`, due after the configured delay.
    ///
    /// Needs a Tokio runtime. Without one the alert is dropped with a warning.
    pub fn schedule(&mut self, notification: Notification) -> AlertToken {
        self.cancel();
        self.last_token += 1;
        let token = self.last_token;

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let tx = self.tx.clone();
                let delay = self.delay;
                Some(runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(ScheduledAlert {
                        token,
                        notification,
                    });
                }))
            }
            Err(_) => {
                warn!("No async runtime available; alert {} will not fire", token);
                None
            }
        };

        debug!("Alert {} scheduled in {:?}", token, self.delay);
        self.pending = Some(PendingAlert { token, handle });
        token
    }

    /// Aborts the pending alert, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                if let Some(handle) = pending.handle {
                    handle.abort();
                }
                debug!("Alert {} cancelled", pending.token);
                true
            }
            None => false,
        }
    }

    pub fn pending_token(&self) -> Option<AlertToken> {
        self.pending
            .as_ref()
            .filter(|p| p.handle.is_some())
            .map(|p| p.token)
    }

    pub fn has_pending(&self) -> bool {
        self.pending_token().is_some()
    }

    /// Waits for the pending alert. Returns `None` straight away when nothing is pending.
    pub async fn next(&mut self) -> Option<Notification> {
        loop {
            let expected = self.pending_token()?;
            let alert = self.rx.recv().await?;
            if let Some(notification) = self.accept(alert, expected) {
                return Some(notification);
            }
        }
    }

    /// Non-blocking variant of [`next`](Self::next).
    pub fn try_next(&mut self) -> Option<Notification> {
        while let Ok(alert) = self.rx.try_recv() {
            let Some(expected) = self.pending_token() else {
                debug!("Discarding alert {}: nothing pending", alert.token);
                continue;
            };
            if let Some(notification) = self.accept(alert, expected) {
                return Some(notification);
            }
        }
        None
    }

    fn accept(&mut self, alert: ScheduledAlert, expected: AlertToken) -> Option<Notification> {
        if alert.token != expected {
            debug!(
                "Discarding stale alert {} (pending {})",
                alert.token, expected
            );
            return None;
        }
        self.pending = None;
        Some(alert.notification)
    }
}

impl Drop for AlertScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
