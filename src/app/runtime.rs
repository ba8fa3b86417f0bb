// SPDX-License-Identifier: MPL-2.0
//! Event loop driving a [`Viewer`] from user input and timer ticks.

use super::{Message, Viewer};
use crate::application::port::{CaptureBackend, Renderer, TimerId, TimerScheduler};
use tokio::sync::mpsc;

/// Runs the session until the message channel closes.
///
/// Messages and ticks are handled strictly one after the other on the
/// calling task. Every timer is cancelled before returning.
pub async fn run<B, R, T>(
    viewer: &mut Viewer<B, R, T>,
    mut messages: mpsc::UnboundedReceiver<Message>,
    mut ticks: mpsc::UnboundedReceiver<TimerId>,
) where
    B: CaptureBackend,
    R: Renderer,
    T: TimerScheduler,
{
    loop {
        let message = tokio::select! {
            message = messages.recv() => match message {
                Some(message) => message,
                None => break,
            },
            Some(id) = ticks.recv() => Message::Tick(id),
        };
        viewer.dispatch(message).await;
    }
    viewer.shutdown();
    log::debug!("Session ended");
}
