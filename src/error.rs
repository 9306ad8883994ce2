//! Error types for deck construction and wiring.

use crate::controls::ControlKind;

/// Errors that can occur while binding a deck to a media container.
///
/// All of these are configuration problems scoped to a single container.
/// [`Deck::bind_all`](crate::engine::Deck::bind_all) logs them and keeps
/// going, so one broken container never takes down the rest of the page.
#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    /// The container exists but holds no inner playback element
    #[error("container {container:?} has no playback element")]
    MissingPlayback {
        /// Diagnostic name of the affected container
        container: String,
    },

    /// A control was requested but its label is empty
    #[error("control {kind} requested without a label")]
    MissingLabel {
        /// Kind of the control that could not be built
        kind: ControlKind,
    },
}
