use std::sync::{Arc, Mutex};

use super::MediaBackend;

#[derive(Debug)]
struct SimState {
    position: f64,
    volume: f64,
    muted: bool,
    paused: bool,
    duration: Option<f64>,
}

/// Scriptable in-memory media backend.
///
/// Behaves like an idle media element: starts paused at position zero
/// with full volume and an unknown duration. Tests and headless
/// embedders script it directly — call [`load_metadata`](Self::load_metadata)
/// and [`tick`](Self::tick) to simulate what a real playback runtime
/// would do, then deliver the matching [`MediaEvent`](super::MediaEvent)s
/// to the deck.
#[derive(Debug)]
pub struct SimPlayer {
    source: String,
    state: Mutex<SimState>,
}

impl SimPlayer {
    /// Create a player for the given source identifier.
    pub fn new(source: &str) -> Arc<Self> {
        Arc::new(Self {
            source: source.to_owned(),
            state: Mutex::new(SimState {
                position: 0.0,
                volume: 1.0,
                muted: false,
                paused: true,
                duration: None,
            }),
        })
    }

    /// Create a player whose metadata has already resolved.
    pub fn with_duration(source: &str, duration: f64) -> Arc<Self> {
        let player = Self::new(source);
        player.load_metadata(duration);
        player
    }

    /// Resolve the resource's duration, as a loading runtime would.
    pub fn load_metadata(&self, duration: f64) {
        self.lock().duration = Some(duration);
    }

    /// Advance the playback position, clamping to the known duration.
    pub fn tick(&self, seconds: f64) {
        let mut state = self.lock();
        let next = state.position + seconds;
        state.position = match state.duration {
            Some(duration) => next.clamp(0.0, duration),
            None => next.max(0.0),
        };
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SimState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl MediaBackend for SimPlayer {
    fn source_id(&self) -> String {
        self.source.clone()
    }

    fn position(&self) -> f64 {
        self.lock().position
    }

    fn set_position(&self, seconds: f64) {
        let mut state = self.lock();
        state.position = match state.duration {
            Some(duration) => seconds.clamp(0.0, duration),
            None => seconds.max(0.0),
        };
    }

    fn volume(&self) -> f64 {
        self.lock().volume
    }

    fn set_volume(&self, volume: f64) {
        self.lock().volume = volume.clamp(0.0, 1.0);
    }

    fn muted(&self) -> bool {
        self.lock().muted
    }

    fn set_muted(&self, muted: bool) {
        self.lock().muted = muted;
    }

    fn paused(&self) -> bool {
        self.lock().paused
    }

    fn play(&self) {
        self.lock().paused = false;
    }

    fn pause(&self) {
        self.lock().paused = true;
    }

    fn duration(&self) -> Option<f64> {
        self.lock().duration
    }
}
