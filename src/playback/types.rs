use std::fmt;
use std::ops::Deref;

/// Volume of a media resource as a fraction of full scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Volume(f64);

impl Volume {
    /// Create a new volume, clamping the value into `[0, 1]`.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// Whether this volume is audible (strictly above zero).
    pub fn is_audible(self) -> bool {
        self.0 > 0.0
    }
}

impl Deref for Volume {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<f64> for Volume {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Lifecycle event emitted by the playback runtime.
///
/// The runtime that owns the media resource delivers these to
/// [`Deck::handle_media_event`](crate::engine::Deck::handle_media_event)
/// in emission order. Handlers run to completion before the next event
/// is processed; the engine never reorders or coalesces.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// The resource has started loading
    LoadStart,

    /// Duration and other metadata are now known
    LoadedMetadata,

    /// Playback was requested to start
    Play,

    /// Playback was suspended
    Pause,

    /// Playback actually progressed after a play or a stall
    Playing,

    /// The playback position advanced
    TimeUpdate,

    /// The resource's volume or muted flag changed
    VolumeChange,

    /// A seek operation began
    Seeking,

    /// A seek operation completed
    Seeked,

    /// More of the resource was buffered
    Progress,

    /// Playback reached the end of the resource
    Ended,

    /// Native playback failure (decode, network, ...)
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_clamps_to_unit_range() {
        assert_eq!(*Volume::new(1.5), 1.0);
        assert_eq!(*Volume::new(-0.2), 0.0);
        assert_eq!(*Volume::new(0.4), 0.4);
        assert_eq!(*Volume::new(f64::NAN), 0.0);
    }

    #[test]
    fn audibility_is_strictly_positive() {
        assert!(!Volume::new(0.0).is_audible());
        assert!(Volume::new(0.01).is_audible());
    }
}
