use std::sync::Arc;

use super::{MediaBackend, Volume};
use crate::common::Property;

/// Narrow facade over the media backend.
///
/// This is the only surface the synchronization engine (and user
/// callbacks) use to read or drive playback. Calls are thin pass-throughs
/// with two pieces of policy layered on top: setting a volume always
/// clears the muted flag, and mute toggling remembers the last audible
/// volume outside the resource, since the resource itself may not retain
/// it.
#[derive(Clone)]
pub struct Playback {
    backend: Arc<dyn MediaBackend>,
}

impl Playback {
    /// Wrap a backend.
    pub fn new(backend: Arc<dyn MediaBackend>) -> Self {
        Self { backend }
    }

    /// Stable identifier of the loaded media asset.
    pub fn source_id(&self) -> String {
        self.backend.source_id()
    }

    /// Current playback position in seconds.
    pub fn position(&self) -> f64 {
        self.backend.position()
    }

    /// Seek to an absolute position, clamped to non-negative.
    pub fn seek(&self, seconds: f64) {
        self.backend.set_position(seconds.max(0.0));
    }

    /// Current volume.
    pub fn volume(&self) -> Volume {
        Volume::new(self.backend.volume())
    }

    /// Set the volume. Always un-mutes the resource.
    pub fn set_volume(&self, volume: Volume) {
        self.backend.set_volume(*volume);
        self.backend.set_muted(false);
    }

    /// Whether the resource is muted.
    pub fn muted(&self) -> bool {
        self.backend.muted()
    }

    /// Whether playback is currently suspended.
    pub fn paused(&self) -> bool {
        self.backend.paused()
    }

    /// Start or resume playback.
    pub fn play(&self) {
        self.backend.play();
    }

    /// Suspend playback.
    pub fn pause(&self) {
        self.backend.pause();
    }

    /// Total duration in seconds, unknown until metadata has loaded.
    pub fn duration(&self) -> Option<f64> {
        self.backend.duration()
    }

    /// Toggle between muted and the last audible volume.
    ///
    /// Muting records the current volume in `last_audible` (only when it
    /// is actually audible, so repeated mutes cannot overwrite the
    /// remembered value with zero), then drops the resource to silent.
    /// Unmuting restores the remembered volume through
    /// [`set_volume`](Self::set_volume), which clears the muted flag.
    ///
    /// `last_audible` lives on the deck's volume binding rather than the
    /// resource; it is passed in so the facade itself stays stateless.
    pub fn toggle_mute(&self, last_audible: &Property<Volume>) {
        if self.backend.muted() {
            self.set_volume(last_audible.get());
        } else {
            let current = self.volume();
            if current.is_audible() {
                last_audible.set(current);
            }
            self.backend.set_volume(0.0);
            self.backend.set_muted(true);
        }
    }
}

impl std::fmt::Debug for Playback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Playback")
            .field("source", &self.backend.source_id())
            .field("position", &self.backend.position())
            .field("paused", &self.backend.paused())
            .field("volume", &self.backend.volume())
            .field("muted", &self.backend.muted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::SimPlayer;

    fn facade() -> Playback {
        Playback::new(SimPlayer::new("test.ogg"))
    }

    #[test]
    fn set_volume_clears_muted() {
        let playback = facade();

        playback.toggle_mute(&Property::new(Volume::new(0.5)));
        assert!(playback.muted());

        playback.set_volume(Volume::new(0.3));

        assert!(!playback.muted());
        assert_eq!(*playback.volume(), 0.3);
    }

    #[test]
    fn mute_round_trip_restores_volume() {
        let playback = facade();
        let last_audible = Property::new(Volume::new(0.5));

        playback.set_volume(Volume::new(0.7));
        playback.toggle_mute(&last_audible);
        assert!(playback.muted());
        assert_eq!(*playback.volume(), 0.0);

        playback.toggle_mute(&last_audible);
        assert!(!playback.muted());
        assert_eq!(*playback.volume(), 0.7);
    }

    #[test]
    fn muting_at_zero_volume_keeps_remembered_value() {
        let playback = facade();
        let last_audible = Property::new(Volume::new(0.5));

        playback.set_volume(Volume::new(0.0));
        playback.toggle_mute(&last_audible);
        playback.toggle_mute(&last_audible);

        assert_eq!(*playback.volume(), 0.5);
    }

    #[test]
    fn seek_clamps_to_zero() {
        let playback = facade();

        playback.seek(-5.0);

        assert_eq!(playback.position(), 0.0);
    }
}
