/// The native playback primitive a deck observes and drives.
///
/// Implementations wrap whatever media element or player process is
/// actually present. All operations are synchronous; failures that the
/// underlying runtime reports asynchronously arrive later as
/// [`MediaEvent::Error`](super::MediaEvent::Error). The resource is
/// owned and mutated by its runtime — a backend only exposes its public
/// state, it never implements playback itself.
///
/// Positions, durations and volumes are plain seconds and fractions so
/// they flow unchanged into slider values and persisted records.
pub trait MediaBackend: Send + Sync {
    /// Stable identifier of the loaded media asset.
    ///
    /// Used as the persistence key, so it must not change across
    /// sessions for the same asset.
    fn source_id(&self) -> String;

    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Move the playback position.
    fn set_position(&self, seconds: f64);

    /// Current volume as a fraction in `[0, 1]`.
    fn volume(&self) -> f64;

    /// Set the volume fraction.
    fn set_volume(&self, volume: f64);

    /// Whether the resource is muted.
    fn muted(&self) -> bool;

    /// Set the muted flag.
    fn set_muted(&self, muted: bool);

    /// Whether playback is currently suspended.
    fn paused(&self) -> bool;

    /// Start or resume playback.
    fn play(&self);

    /// Suspend playback.
    fn pause(&self);

    /// Total duration in seconds, unknown until metadata has loaded.
    fn duration(&self) -> Option<f64>;
}
