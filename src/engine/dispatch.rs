use tracing::debug;

use super::{BindState, Deck};
use crate::controls::{ControlAction, ControlKind};
use crate::playback::Volume;

impl Deck {
    /// Route an interaction with a bound control to playback.
    ///
    /// This is the single delegated interaction handler: it looks up
    /// the control's action — resolved once when the control was built —
    /// and dispatches, passing the control's current value for sliders.
    /// Interactions with unbound roles, display-only controls and
    /// disposed decks are ignored.
    pub fn interact(&mut self, kind: ControlKind) {
        if self.state == BindState::Disposed {
            return;
        }
        let Some(control) = self.controls.get(kind).cloned() else {
            return;
        };
        let Some(action) = control.action() else {
            return;
        };

        if self.config.debug {
            debug!(source = %self.source, ?action, "control interaction");
        }

        match action {
            ControlAction::Play => self.playback.play(),
            ControlAction::Pause => self.playback.pause(),
            ControlAction::Stop => self.stop(),
            ControlAction::Mute => self.playback.toggle_mute(&self.last_audible),
            ControlAction::SetVolume => {
                self.playback.set_volume(Volume::new(control.value()));
            }
            ControlAction::Seek => self.playback.seek(control.value()),
        }
    }

    /// Synthesized stop: pause, rewind to zero, refresh the displays.
    ///
    /// The underlying resource has no native stop, so no lifecycle
    /// event follows — the configured `on_stop` callback is invoked
    /// here instead. Ignored on disposed decks.
    pub fn stop(&self) {
        if self.state == BindState::Disposed {
            return;
        }

        self.playback.pause();
        self.playback.seek(0.0);
        self.render_times();

        if let Some(callback) = &self.config.on_stop {
            callback(&self.playback);
        }
    }

    /// Enter a scrub gesture (pointer down on the scrubber).
    ///
    /// Snapshots whether the resource was already paused, then suspends
    /// playback for the whole gesture. Nested or stray gestures on an
    /// already-scrubbing or disposed deck are ignored.
    pub fn begin_scrub(&mut self) {
        if self.state != BindState::Bound {
            return;
        }

        let was_paused = self.playback.paused();
        self.playback.pause();
        self.state = BindState::Scrubbing { was_paused };

        if self.config.debug {
            debug!(source = %self.source, was_paused, "scrub started");
        }
    }

    /// Leave a scrub gesture (pointer up).
    ///
    /// Resumes playback only when the resource was playing at gesture
    /// start — scrubbing a paused resource never auto-resumes it. The
    /// seek itself arrives separately through the scrubber's change
    /// interaction.
    pub fn end_scrub(&mut self) {
        let BindState::Scrubbing { was_paused } = self.state else {
            return;
        };

        self.state = BindState::Bound;
        if !was_paused {
            self.playback.play();
        }

        if self.config.debug {
            debug!(source = %self.source, resumed = !was_paused, "scrub ended");
        }
    }
}
