use tracing::{debug, error};

use super::{BindState, DEFAULT_VOLUME, Deck};
use crate::controls::ControlKind;
use crate::persist::PersistedState;
use crate::playback::{MediaEvent, Volume};
use crate::timecode::format_timecode;

impl Deck {
    /// Process one lifecycle event from the playback runtime.
    ///
    /// Events must be delivered in emission order; each handler runs to
    /// completion before the next event. A disposed deck ignores
    /// everything. After the state synchronization for the event, the
    /// matching user callback (if configured) receives the playback
    /// facade.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        if self.state == BindState::Disposed {
            return;
        }

        if self.config.debug {
            debug!(source = %self.source, ?event, "media event");
        }

        match &event {
            MediaEvent::LoadStart => self.init_default_volume(),
            MediaEvent::LoadedMetadata => {
                self.render_times();
                self.restore_persisted();
            }
            MediaEvent::TimeUpdate => {
                self.render_times();
                self.persist_snapshot();
            }
            MediaEvent::VolumeChange => self.mirror_volume(),
            MediaEvent::Error(message) => {
                error!(source = %self.source, "playback error: {message}");
            }
            _ => {}
        }

        if let Some(callback) = self.config.callback_for(&event) {
            callback(&self.playback);
        }
    }

    /// Write the current position into the timers and the scrubber,
    /// and the duration into the total timer and scrubber bounds once
    /// metadata has resolved.
    pub(super) fn render_times(&self) {
        let position = self.playback.position();
        let duration = self.playback.duration();

        if let Some(timer) = self.controls.get(ControlKind::CurrentTime) {
            timer.set_text(&format_timecode(position));
        }
        if let Some(timer) = self.controls.get(ControlKind::TotalTime)
            && let Some(duration) = duration
        {
            timer.set_text(&format_timecode(duration));
        }
        if let Some(scrubber) = self.controls.get(ControlKind::Scrubber) {
            if let Some(duration) = duration {
                scrubber.set_bounds(0.0, duration);
            }
            scrubber.set_value(position);
        }
    }

    /// Apply the 0.5 default volume exactly once per resource load.
    ///
    /// Skipped entirely when no volume control is bound, so a deck
    /// without a volume feature never touches the resource's volume.
    fn init_default_volume(&mut self) {
        if self.volume_initialized {
            return;
        }
        let Some(volume_control) = self.controls.get(ControlKind::Volume) else {
            return;
        };

        let default = Volume::new(DEFAULT_VOLUME);
        self.playback.set_volume(default);
        volume_control.set_value(DEFAULT_VOLUME);
        self.last_audible.set(default);
        self.volume_initialized = true;
    }

    /// Mirror a resource-side volume change into the volume control.
    ///
    /// A volume of exactly zero is mirrored nowhere: the control keeps
    /// its place and the last-audible record keeps the pre-mute value,
    /// so unmuting restores something useful.
    fn mirror_volume(&self) {
        let Some(volume_control) = self.controls.get(ControlKind::Volume) else {
            return;
        };

        let volume = self.playback.volume();
        if volume.is_audible() {
            volume_control.set_value(*volume);
            self.last_audible.set(volume);
        }
    }

    /// Save the current playback snapshot under the resource's source
    /// identifier.
    ///
    /// Runs on every position tick with no coalescing; the store is a
    /// no-op when persistence is disabled.
    fn persist_snapshot(&self) {
        let state = PersistedState {
            time: Some(self.playback.position()),
            volume: Some(*self.playback.volume()),
            paused: Some(self.playback.paused()),
        };
        self.store.save(&self.source, &state);
    }

    /// Apply a previously saved snapshot, field by field.
    ///
    /// Presence decides: a saved zero position or zero volume is
    /// restored like any other value. `paused: true` forces a pause;
    /// `paused: false` is deliberately not turned into a `play()`, so a
    /// reload never auto-starts playback on its own.
    fn restore_persisted(&self) {
        let Some(saved) = self.store.load(&self.source) else {
            return;
        };

        if self.config.debug {
            debug!(source = %self.source, ?saved, "restoring persisted state");
        }

        if let Some(time) = saved.time {
            self.playback.seek(time);
        }
        if let Some(volume) = saved.volume {
            let volume = Volume::new(volume);
            self.playback.set_volume(volume);
            if let Some(control) = self.controls.get(ControlKind::Volume) {
                control.set_value(*volume);
            }
            if volume.is_audible() {
                self.last_audible.set(volume);
            }
        }
        if saved.paused == Some(true) {
            self.playback.pause();
        }

        self.render_times();
    }
}
