//! Per-deck configuration: labels, visibility, callbacks.

use std::sync::Arc;

use crate::controls::ControlKind;
use crate::playback::{MediaEvent, Playback};

/// Callback invoked with the playback facade when a lifecycle event fires.
pub type EventCallback = Arc<dyn Fn(&Playback) + Send + Sync>;

/// Configuration for one deck.
///
/// Every field has a usable default: all controls visible, persistence
/// on, diagnostics off, no callbacks. Labels feed the control registry
/// verbatim; an empty label for a visible control is a configuration
/// error and that control is skipped.
#[derive(Clone)]
pub struct DeckConfig {
    /// Label for the play button
    pub play_label: String,
    /// Label for the pause button
    pub pause_label: String,
    /// Label for the stop button
    pub stop_label: String,
    /// Label for the mute button
    pub mute_label: String,
    /// Label for the volume slider
    pub volume_label: String,
    /// Label for the timeline scrubber
    pub scrubber_label: String,
    /// Label for the elapsed-time timer
    pub current_time_label: String,
    /// Label for the total-time timer
    pub total_time_label: String,

    /// Whether to build a mute button
    pub show_mute: bool,
    /// Whether to build a stop button
    pub show_stop: bool,
    /// Whether to build the elapsed/total timers
    pub show_timer: bool,
    /// Whether to build a volume slider
    pub show_volume: bool,
    /// Whether to build a timeline scrubber
    pub show_scrubber: bool,

    /// Enables the deck's debug-level diagnostic logging
    pub debug: bool,
    /// Enables saving and restoring playback state
    pub persist: bool,

    /// Invoked on [`MediaEvent::Play`]
    pub on_play: Option<EventCallback>,
    /// Invoked on [`MediaEvent::Pause`]
    pub on_pause: Option<EventCallback>,
    /// Invoked on [`MediaEvent::Error`]
    pub on_error: Option<EventCallback>,
    /// Invoked on [`MediaEvent::LoadStart`]
    pub on_loadstart: Option<EventCallback>,
    /// Invoked on [`MediaEvent::Ended`]
    pub on_ended: Option<EventCallback>,
    /// Invoked on [`MediaEvent::Playing`]
    pub on_playing: Option<EventCallback>,
    /// Invoked on [`MediaEvent::Progress`]
    pub on_progress: Option<EventCallback>,
    /// Invoked on [`MediaEvent::Seeking`]
    pub on_seeking: Option<EventCallback>,
    /// Invoked on [`MediaEvent::Seeked`]
    pub on_seeked: Option<EventCallback>,
    /// Invoked on [`MediaEvent::TimeUpdate`]
    pub on_timeupdate: Option<EventCallback>,
    /// Invoked on [`MediaEvent::VolumeChange`]
    pub on_volumechange: Option<EventCallback>,
    /// Invoked after the synthesized stop action completes.
    ///
    /// Stop has no native lifecycle event, so the engine calls this
    /// explicitly instead of routing it through an event.
    pub on_stop: Option<EventCallback>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            play_label: "Play".to_owned(),
            pause_label: "Pause".to_owned(),
            stop_label: "Stop".to_owned(),
            mute_label: "Mute".to_owned(),
            volume_label: "Volume".to_owned(),
            scrubber_label: "Seek".to_owned(),
            current_time_label: "Elapsed".to_owned(),
            total_time_label: "Total".to_owned(),
            show_mute: true,
            show_stop: true,
            show_timer: true,
            show_volume: true,
            show_scrubber: true,
            debug: false,
            persist: true,
            on_play: None,
            on_pause: None,
            on_error: None,
            on_loadstart: None,
            on_ended: None,
            on_playing: None,
            on_progress: None,
            on_seeking: None,
            on_seeked: None,
            on_timeupdate: None,
            on_volumechange: None,
            on_stop: None,
        }
    }
}

impl DeckConfig {
    /// Whether a control of this kind should be built.
    pub fn shows(&self, kind: ControlKind) -> bool {
        match kind {
            ControlKind::Play | ControlKind::Pause => true,
            ControlKind::Stop => self.show_stop,
            ControlKind::Mute => self.show_mute,
            ControlKind::Volume => self.show_volume,
            ControlKind::Scrubber => self.show_scrubber,
            ControlKind::CurrentTime | ControlKind::TotalTime => self.show_timer,
        }
    }

    /// The configured label for a control kind.
    pub fn label_for(&self, kind: ControlKind) -> &str {
        match kind {
            ControlKind::Play => &self.play_label,
            ControlKind::Pause => &self.pause_label,
            ControlKind::Stop => &self.stop_label,
            ControlKind::Mute => &self.mute_label,
            ControlKind::Volume => &self.volume_label,
            ControlKind::Scrubber => &self.scrubber_label,
            ControlKind::CurrentTime => &self.current_time_label,
            ControlKind::TotalTime => &self.total_time_label,
        }
    }

    /// The callback registered for a lifecycle event, if any.
    pub(crate) fn callback_for(&self, event: &MediaEvent) -> Option<&EventCallback> {
        match event {
            MediaEvent::LoadStart => self.on_loadstart.as_ref(),
            MediaEvent::LoadedMetadata => None,
            MediaEvent::Play => self.on_play.as_ref(),
            MediaEvent::Pause => self.on_pause.as_ref(),
            MediaEvent::Playing => self.on_playing.as_ref(),
            MediaEvent::TimeUpdate => self.on_timeupdate.as_ref(),
            MediaEvent::VolumeChange => self.on_volumechange.as_ref(),
            MediaEvent::Seeking => self.on_seeking.as_ref(),
            MediaEvent::Seeked => self.on_seeked.as_ref(),
            MediaEvent::Progress => self.on_progress.as_ref(),
            MediaEvent::Ended => self.on_ended.as_ref(),
            MediaEvent::Error(_) => self.on_error.as_ref(),
        }
    }
}
