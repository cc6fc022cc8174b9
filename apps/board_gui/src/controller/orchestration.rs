//! Queueing of UI events raised while a frame is being drawn.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::UiEvent;

pub const UI_EVENT_QUEUE_CAPACITY: usize = 256;

pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent, status: &mut String) {
    let name = event.name();

    match ui_tx.try_send(event) {
        Ok(()) => tracing::trace!(event = name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            *status = "UI event queue is full; please retry".to_string();
            tracing::warn!(event = name, "ui event queue full; event dropped");
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "UI event queue disconnected".to_string();
            tracing::error!(event = name, "ui event queue disconnected");
        }
    }
}

/// Handle given to widgets for the duration of one frame.
pub struct EventSink<'a> {
    ui_tx: &'a Sender<UiEvent>,
    status: &'a mut String,
    sent: usize,
}

impl<'a> EventSink<'a> {
    pub fn new(ui_tx: &'a Sender<UiEvent>, status: &'a mut String) -> Self {
        Self {
            ui_tx,
            status,
            sent: 0,
        }
    }

    pub fn emit(&mut self, event: impl Into<UiEvent>) {
        dispatch_ui_event(self.ui_tx, event.into(), self.status);
        self.sent += 1;
    }

    pub fn sent(&self) -> usize {
        self.sent
    }
}
