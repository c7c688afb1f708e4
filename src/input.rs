//! Input event queue
//!
//! The listener thread only produces discrete events into a bounded channel;
//! the tick loop drains them once per tick, so every state mutation happens
//! on the simulation side and nothing races.

use std::sync::mpsc::{Receiver, SyncSender, TrySendError, sync_channel};

/// Queue capacity; more than enough for one tick's worth of keystrokes
pub const QUEUE_CAPACITY: usize = 64;

/// A discrete input command, decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Space: resume movement
    EnableMovement,
    /// Escape: freeze in place
    DisableMovement,
    /// Unstick key: recenter, reset lives, freeze until re-enabled
    Unstick,
    /// Shift: spend one banked slow charge (speed -1)
    UseSlowCharge,
    TurnLeft,
    TurnRight,
}

/// Producer half, cloned into the listener thread
#[derive(Clone)]
pub struct InputSender {
    tx: SyncSender<InputEvent>,
}

impl InputSender {
    /// Push an event; a full queue drops it (input is inherently lossy)
    pub fn send(&self, event: InputEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                log::debug!("input queue full, dropping {:?}", event);
            }
            Err(TrySendError::Disconnected(_)) => {}
        }
    }
}

/// Consumer half, drained by the tick loop
pub struct InputQueue {
    rx: Receiver<InputEvent>,
}

impl InputQueue {
    /// Create a connected (producer, consumer) pair
    pub fn channel() -> (InputSender, InputQueue) {
        let (tx, rx) = sync_channel(QUEUE_CAPACITY);
        (InputSender { tx }, InputQueue { rx })
    }

    /// Take every event queued since the last drain
    pub fn drain(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}
