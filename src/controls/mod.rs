//! Contract between the synchronization engine and whatever renders
//! the actual controls.
//!
//! The engine never constructs markup or widgets. It asks a
//! [`ControlRegistry`] for a control of a given kind, keeps the returned
//! [`ControlHandle`] in a role-keyed [`ControlSet`], and from then on only
//! reads and writes the handle's text, value and bounds. Each actionable
//! control carries a [`ControlAction`] resolved once at build time, so
//! interaction routing is a plain match instead of a name lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// In-memory control implementation for tests and headless embedders
pub mod panel;

pub use panel::{PanelControl, PanelRegistry};

/// Semantic role of a control within a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Starts playback
    Play,

    /// Suspends playback
    Pause,

    /// Stops playback and rewinds to the start
    Stop,

    /// Toggles between muted and the last audible volume
    Mute,

    /// Slider over the volume range
    Volume,

    /// Slider over the playback timeline
    Scrubber,

    /// Timer showing the elapsed position
    CurrentTime,

    /// Timer showing the total duration
    TotalTime,
}

impl ControlKind {
    /// Every control kind, in the order controls are laid out.
    pub const ALL: [Self; 8] = [
        Self::Play,
        Self::Pause,
        Self::Stop,
        Self::Mute,
        Self::Volume,
        Self::Scrubber,
        Self::CurrentTime,
        Self::TotalTime,
    ];

    /// Role-scoped class name identifying this control in rendered output.
    pub fn role_class(self) -> &'static str {
        match self {
            Self::Play => "deck-play",
            Self::Pause => "deck-pause",
            Self::Stop => "deck-stop",
            Self::Mute => "deck-mute",
            Self::Volume => "deck-volume",
            Self::Scrubber => "deck-scrubber",
            Self::CurrentTime => "deck-current-time",
            Self::TotalTime => "deck-total-time",
        }
    }

    /// The playback action this control triggers, resolved at build time.
    ///
    /// Timers are display-only and carry no action.
    pub fn action(self) -> Option<ControlAction> {
        match self {
            Self::Play => Some(ControlAction::Play),
            Self::Pause => Some(ControlAction::Pause),
            Self::Stop => Some(ControlAction::Stop),
            Self::Mute => Some(ControlAction::Mute),
            Self::Volume => Some(ControlAction::SetVolume),
            Self::Scrubber => Some(ControlAction::Seek),
            Self::CurrentTime | Self::TotalTime => None,
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role_class())
    }
}

/// Playback operation a control invokes when interacted with.
///
/// Buttons dispatch on click, sliders on value change. The variant is
/// attached to the control when it is built, so no string-keyed method
/// lookup happens per interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Start playback
    Play,

    /// Suspend playback
    Pause,

    /// Synthesized stop: pause, then rewind to zero
    Stop,

    /// Toggle mute, restoring the last audible volume on unmute
    Mute,

    /// Apply the control's current value as the volume
    SetVolume,

    /// Seek to the control's current value
    Seek,
}

/// A single bound control as seen by the synchronization engine.
///
/// Implementations wrap whatever the rendering layer produced. Text and
/// slider operations default to no-ops so button-like controls only need
/// to report their identity.
pub trait ControlHandle: Send + Sync {
    /// Semantic role this control was built for.
    fn kind(&self) -> ControlKind;

    /// Action dispatched when this control is interacted with.
    fn action(&self) -> Option<ControlAction> {
        self.kind().action()
    }

    /// Replace the control's display text (labels, timers).
    fn set_text(&self, _text: &str) {}

    /// Current display text.
    fn text(&self) -> String {
        String::new()
    }

    /// Current numeric value (sliders).
    fn value(&self) -> f64 {
        0.0
    }

    /// Move the slider to a new value.
    fn set_value(&self, _value: f64) {}

    /// Adjust the slider's valid range.
    fn set_bounds(&self, _min: f64, _max: f64) {}
}

/// External collaborator that produces concrete controls.
///
/// The returned handle must report the `kind` it was built for and carry
/// the action resolved from that kind.
pub trait ControlRegistry: Send + Sync {
    /// Build a renderable, interactive control of the given kind.
    fn build(&self, kind: ControlKind, label: &str) -> Arc<dyn ControlHandle>;
}

/// Role-keyed lookup of the controls bound to one container.
///
/// Created once at bind time and immutable afterwards, apart from being
/// cleared on disposal.
#[derive(Default)]
pub struct ControlSet {
    controls: HashMap<ControlKind, Arc<dyn ControlHandle>>,
}

impl ControlSet {
    /// Register a freshly built control under its role.
    pub(crate) fn insert(&mut self, control: Arc<dyn ControlHandle>) {
        self.controls.insert(control.kind(), control);
    }

    /// Look up the control bound to a role, if that role was built.
    pub fn get(&self, kind: ControlKind) -> Option<&Arc<dyn ControlHandle>> {
        self.controls.get(&kind)
    }

    /// Whether a control for this role exists.
    pub fn contains(&self, kind: ControlKind) -> bool {
        self.controls.contains_key(&kind)
    }

    /// Iterate over all bound controls.
    pub fn handles(&self) -> impl Iterator<Item = &Arc<dyn ControlHandle>> {
        self.controls.values()
    }

    /// Number of bound controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether no controls are bound.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.controls.clear();
    }
}

impl fmt::Debug for ControlSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.controls.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_carry_no_action() {
        assert_eq!(ControlKind::CurrentTime.action(), None);
        assert_eq!(ControlKind::TotalTime.action(), None);
    }

    #[test]
    fn actionable_kinds_resolve_their_action() {
        assert_eq!(ControlKind::Play.action(), Some(ControlAction::Play));
        assert_eq!(ControlKind::Volume.action(), Some(ControlAction::SetVolume));
        assert_eq!(ControlKind::Scrubber.action(), Some(ControlAction::Seek));
    }

    #[test]
    fn role_classes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in ControlKind::ALL {
            assert!(seen.insert(kind.role_class()), "duplicate class for {kind}");
        }
    }
}
