//! Core worker utilities

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
    cancel: CancellationToken,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>, cancel: CancellationToken) -> Self {
        Self { sender, cancel }
    }

    /// Send a generic event. Gives up if the session is cancelled while the queue is full.
    pub async fn send_event(&self, event: Event) {
        tokio::select! {
            _ = self.cancel.cancelled() => {}
            _ = self.sender.send(event) => {}
        }
    }

    pub async fn send_poller_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::poller_with_level(message, event_type, log_level))
            .await;
    }
}
