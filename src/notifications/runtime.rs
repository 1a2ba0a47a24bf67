// SPDX-License-Identifier: MPL-2.0
//! Async driver for a [`ToastStore`].
//!
//! The runtime owns the store on a tokio task. Handles send commands over a
//! bounded channel and the loop sleeps until the next timer deadline, so
//! mutations stay serialized as in a UI event loop.

use super::clock::TokioClock;
use super::event::ToastEvent;
use super::item::{ToastId, ToastSnapshot};
use super::options::ToastOptions;
use super::store::ToastStore;
use crate::config::{ToastConfig, COMMAND_CHANNEL_CAPACITY, EVENT_CHANNEL_CAPACITY};
use crate::error::{Error, Result};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;

enum Command {
    Show {
        message: String,
        options: ToastOptions,
        reply: oneshot::Sender<Option<ToastId>>,
    },
    Hide {
        id: ToastId,
        reply: oneshot::Sender<bool>,
    },
    HideAll {
        reply: oneshot::Sender<usize>,
    },
    HideGroup {
        group: String,
        reply: oneshot::Sender<usize>,
    },
    Click {
        id: ToastId,
        reply: oneshot::Sender<bool>,
    },
    Snapshot {
        reply: oneshot::Sender<Vec<ToastSnapshot>>,
    },
    Shutdown,
}

/// Cloneable handle to a running [`ToastRuntime`].
///
/// The runtime stops once every handle has been dropped or
/// [`ToastHandle::shutdown`] is called.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    commands: mpsc::Sender<Command>,
    events: broadcast::Sender<ToastEvent>,
}

impl ToastHandle {
    /// Shows a toast. See [`ToastStore::show`].
    pub async fn show(
        &self,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> Result<Option<ToastId>> {
        let message = message.into();
        self.request(|reply| Command::Show {
            message,
            options,
            reply,
        })
        .await
    }

    pub async fn error(&self, message: impl Into<String>) -> Result<Option<ToastId>> {
        self.show(message, ToastOptions::error()).await
    }

    pub async fn success(&self, message: impl Into<String>) -> Result<Option<ToastId>> {
        self.show(message, ToastOptions::success()).await
    }

    pub async fn warning(&self, message: impl Into<String>) -> Result<Option<ToastId>> {
        self.show(message, ToastOptions::warning()).await
    }

    pub async fn info(&self, message: impl Into<String>) -> Result<Option<ToastId>> {
        self.show(message, ToastOptions::info()).await
    }

    pub async fn hide(&self, id: ToastId) -> Result<bool> {
        self.request(|reply| Command::Hide { id, reply }).await
    }

    pub async fn hide_all(&self) -> Result<usize> {
        self.request(|reply| Command::HideAll { reply }).await
    }

    pub async fn hide_group(&self, group: impl Into<String>) -> Result<usize> {
        let group = group.into();
        self.request(|reply| Command::HideGroup { group, reply })
            .await
    }

    pub async fn click(&self, id: ToastId) -> Result<bool> {
        self.request(|reply| Command::Click { id, reply }).await
    }

    /// Returns every tracked toast in insertion order, closing ones included.
    pub async fn snapshot(&self) -> Result<Vec<ToastSnapshot>> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Subscribes to lifecycle events from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.events.subscribe()
    }

    /// Asks the runtime loop to stop. Pending timers are dropped.
    pub async fn shutdown(&self) -> Result<()> {
        self.commands
            .send(Command::Shutdown)
            .await
            .map_err(|_| Error::RuntimeClosed)
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .await
            .map_err(|_| Error::RuntimeClosed)?;
        response.await.map_err(|_| Error::RuntimeClosed)
    }
}

/// Owns a [`ToastStore`] and fires its timers on time.
pub struct ToastRuntime {
    store: ToastStore,
    commands: mpsc::Receiver<Command>,
    events: broadcast::Sender<ToastEvent>,
}

impl ToastRuntime {
    /// Spawns the runtime loop on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    #[must_use]
    pub fn spawn(config: ToastConfig) -> (ToastHandle, JoinHandle<()>) {
        let store = ToastStore::with_clock(config, Arc::new(TokioClock)).record_events();
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let runtime = Self {
            store,
            commands: command_rx,
            events: event_tx.clone(),
        };
        let task = tokio::spawn(runtime.run());

        (
            ToastHandle {
                commands: command_tx,
                events: event_tx,
            },
            task,
        )
    }

    async fn run(mut self) {
        tracing::debug!("toast runtime started");
        loop {
            self.store.tick();
            self.publish_events();

            let deadline = self.store.next_deadline();
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::Shutdown) | None => break,
                    Some(command) => {
                        // Timers due by now fire before the command is applied.
                        self.store.tick();
                        self.handle(command);
                    }
                },
                () = sleep_until(deadline) => {}
            }
        }
        self.publish_events();
        tracing::debug!(remaining = self.store.len(), "toast runtime stopped");
    }

    fn handle(&mut self, command: Command) {
        // A dropped reply receiver only means the caller stopped waiting.
        match command {
            Command::Show {
                message,
                options,
                reply,
            } => {
                let _ = reply.send(self.store.show(message, options));
            }
            Command::Hide { id, reply } => {
                let _ = reply.send(self.store.hide(id));
            }
            Command::HideAll { reply } => {
                let _ = reply.send(self.store.hide_all());
            }
            Command::HideGroup { group, reply } => {
                let _ = reply.send(self.store.hide_group(&group));
            }
            Command::Click { id, reply } => {
                let _ = reply.send(self.store.click(id));
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(self.store.items().map(|item| item.snapshot()).collect());
            }
            Command::Shutdown => {}
        }
    }

    fn publish_events(&mut self) {
        for event in self.store.drain_events() {
            // No subscribers is fine.
            let _ = self.events.send(event);
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::event::CloseReason;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn show_and_hide_through_handle() {
        let (handle, task) = ToastRuntime::spawn(ToastConfig::default());

        let id = handle.info("hello").await.unwrap().unwrap();
        assert!(handle.hide(id).await.unwrap());
        assert!(!handle.hide(id).await.unwrap());

        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot[0].closed);

        handle.shutdown().await.unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn auto_close_emits_expired_event() {
        let (handle, _task) = ToastRuntime::spawn(ToastConfig::default());
        let mut events = handle.subscribe();
        let start = tokio::time::Instant::now();

        let id = handle
            .show("Saved", ToastOptions::success().duration_secs(3.0))
            .await
            .unwrap()
            .unwrap();

        assert!(matches!(events.recv().await.unwrap(), ToastEvent::Shown(s) if s.id == id));
        assert_eq!(
            events.recv().await.unwrap(),
            ToastEvent::Closed {
                id,
                reason: CloseReason::Expired
            }
        );
        assert!(start.elapsed() >= Duration::from_secs(3));
        assert_eq!(events.recv().await.unwrap(), ToastEvent::Removed { id });
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_every_handle_stops_runtime() {
        let (handle, task) = ToastRuntime::spawn(ToastConfig::default());
        handle.info("bye").await.unwrap();
        drop(handle);
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn handle_errors_after_shutdown() {
        let (handle, task) = ToastRuntime::spawn(ToastConfig::default());
        handle.shutdown().await.unwrap();
        task.await.unwrap();

        assert!(matches!(handle.info("late").await, Err(Error::RuntimeClosed)));
    }
}
