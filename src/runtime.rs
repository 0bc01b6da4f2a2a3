//! Owned handle over the polling session

use crate::api::SensorApi;
use crate::consts::cli_consts::{COMMAND_QUEUE_SIZE, EVENT_QUEUE_SIZE};
use crate::events::Event;
use crate::reading::DisplayZone;
use crate::workers::core::EventSender;
use crate::workers::fetcher::ReadingFetcher;
use crate::workers::poller::{PollCommand, Poller, PollerConfig};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to a running poller. Both of its timers stop when the handle is shut down or dropped.
#[derive(Debug)]
pub struct PollerHandle {
    commands: mpsc::Sender<PollCommand>,
    cancel: CancellationToken,
    join_handle: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Ask for an immediate fetch. Returns false if the poller is gone or backed up.
    pub fn request_refresh(&self) -> bool {
        self.commands.try_send(PollCommand::Refresh).is_ok()
    }

    /// Cancel the timers and in-flight fetches, then wait for the task to finish.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.join_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Start polling `api` on the current tokio runtime.
pub fn start_poller(
    api: Arc<dyn SensorApi>,
    config: PollerConfig,
    zone: DisplayZone,
) -> (mpsc::Receiver<Event>, PollerHandle) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (command_sender, command_receiver) = mpsc::channel::<PollCommand>(COMMAND_QUEUE_SIZE);
    let cancel = CancellationToken::new();
    let event_sender = EventSender::new(event_sender, cancel.clone());

    let fetcher = ReadingFetcher::new(api, event_sender.clone(), zone);
    let poller = Poller::new(fetcher, event_sender, config, command_receiver);

    let join_handle = tokio::spawn(poller.run(cancel.clone()));

    (
        event_receiver,
        PollerHandle {
            commands: command_sender,
            cancel,
            join_handle: Some(join_handle),
        },
    )
}
