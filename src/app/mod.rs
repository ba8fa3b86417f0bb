// SPDX-License-Identifier: MPL-2.0
//! Viewer session wiring the selection, playback and hierarchy together.
//!
//! A [`Viewer`] is driven exclusively through [`Viewer::update`]: every user
//! action and every timer tick arrives as a [`Message`] and runs to
//! completion before the next one is handled. Renderers only ever see
//! snapshots produced after a message has been fully applied.

mod message;
pub mod runtime;

pub use message::Message;

use crate::application::port::{CaptureBackend, Renderer, TimerId, TimerScheduler};
use crate::application::query::SelectionState;
use crate::application::{Confirmation, DeleteOutcome, MetadataStore};
use crate::catalog::Hierarchy;
use crate::error::{Error, Result};
use crate::playback::{PlaybackConfig, PlaybackController, StopReason, TickOutcome};

/// One browsing session against a capture backend.
pub struct Viewer<B, R, T> {
    store: MetadataStore<B>,
    selection: SelectionState,
    playback: PlaybackController,
    /// Live state of the auto-advance toggle and interval input.
    controls: PlaybackConfig,
    renderer: R,
    timers: T,
}

impl<B, R, T> Viewer<B, R, T>
where
    B: CaptureBackend,
    R: Renderer,
    T: TimerScheduler,
{
    pub fn new(
        backend: B,
        renderer: R,
        timers: T,
        controls: PlaybackConfig,
        mask_visible: bool,
    ) -> Self {
        Self {
            store: MetadataStore::new(backend),
            selection: SelectionState::with_mask_visibility(mask_visible),
            playback: PlaybackController::new(),
            controls,
            renderer,
            timers,
        }
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        self.store.hierarchy()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn controls(&self) -> &PlaybackConfig {
        &self.controls
    }

    pub fn backend(&self) -> &B {
        self.store.backend()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    /// Applies one message.
    ///
    /// Backend failures are returned to the caller with the selection left
    /// as it was before the message.
    pub async fn update(&mut self, message: Message) -> Result<()> {
        match message {
            Message::LoadHierarchy => {
                let hierarchy = self.store.load_hierarchy().await?;
                self.renderer.render_hierarchy(hierarchy);
            }
            Message::SelectGroup(key) => self.select_group(&key).await?,
            Message::RestartGroup => {
                if self.selection.group().is_some() {
                    self.playback.stop(&mut self.timers);
                    self.selection.restart();
                    self.render_selection();
                    self.playback.start(&self.controls, &mut self.timers);
                }
            }
            Message::Step(offset) => {
                self.selection.step(offset);
                self.render_selection();
            }
            Message::Scrub(position) => {
                if self.selection.scrub(position) {
                    self.render_selection();
                }
            }
            Message::SetAutoAdvance(enabled) => {
                self.controls.enabled = enabled;
                if enabled && self.selection.group().is_some() {
                    self.playback.start(&self.controls, &mut self.timers);
                } else {
                    self.playback.stop(&mut self.timers);
                }
            }
            Message::SetInterval(interval) => {
                self.controls.interval = interval;
                self.playback.reconfigure(&self.controls, &mut self.timers);
            }
            Message::SetMaskVisibility(visible) => self.selection.set_filter(visible),
            Message::Tick(id) => self.tick(id),
            Message::Refresh => {
                self.playback.stop(&mut self.timers);
                let hierarchy = self.store.refresh().await?;
                self.renderer.render_hierarchy(hierarchy);
            }
            Message::DeleteCurrentGroup(confirmation) => {
                self.delete_current_group(confirmation).await?;
            }
        }
        Ok(())
    }

    /// Applies one message, reporting a failure through the renderer.
    pub async fn dispatch(&mut self, message: Message) {
        if let Err(err) = self.update(message).await {
            log::warn!("{}", err);
            self.renderer.render_error(&err);
        }
    }

    /// Ends the session, cancelling every timer.
    pub fn shutdown(&mut self) {
        self.playback.stop(&mut self.timers);
    }

    async fn select_group(&mut self, key: &str) -> Result<()> {
        // No tick of the previous session may land after this point.
        self.playback.stop(&mut self.timers);

        let group = self
            .store
            .hierarchy()
            .find_group(key)
            .cloned()
            .ok_or_else(|| Error::UnknownGroup(key.to_string()))?;
        let images = self
            .store
            .load_group_images(&group, self.selection.filter())
            .await?;

        self.selection.select_group(group, images);
        self.render_selection();
        self.playback.start(&self.controls, &mut self.timers);
        Ok(())
    }

    fn tick(&mut self, id: TimerId) {
        let outcome = self.playback.on_tick(
            id,
            &self.controls,
            &mut self.selection,
            &mut self.timers,
        );
        match outcome {
            TickOutcome::Advanced { .. } | TickOutcome::Stopped(StopReason::EndOfList) => {
                self.render_selection();
            }
            TickOutcome::Stale
            | TickOutcome::Restarted { .. }
            | TickOutcome::Stopped(StopReason::Disabled) => {}
        }
    }

    async fn delete_current_group(&mut self, confirmation: Confirmation) -> Result<()> {
        let Some(group) = self.selection.group().cloned() else {
            log::info!("No group open, nothing to delete");
            return Ok(());
        };
        if confirmation == Confirmation::Confirmed {
            self.playback.stop(&mut self.timers);
        }
        if self.store.delete_group(&group, confirmation).await? == DeleteOutcome::Deleted {
            self.selection.clear();
            self.renderer.render_hierarchy(self.store.hierarchy());
        }
        Ok(())
    }

    fn render_selection(&mut self) {
        if let Some(snapshot) = self.selection.snapshot() {
            self.renderer.render_selection(&snapshot);
        }
    }
}
