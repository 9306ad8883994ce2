//! Mediadeck - synchronization engine for custom media playback controls.
//!
//! Mediadeck replaces a native playback control surface with a themeable
//! set of custom controls and keeps the two sides consistent: resource
//! lifecycle events update the controls' displayed state, control
//! interactions drive playback, scrub gestures are arbitrated against
//! autoplay, and playback position survives reloads through a pluggable
//! persistence store. The main pieces are:
//!
//! - A [`Deck`](engine::Deck) per media container, the bidirectional binding
//! - A [`Playback`](playback::Playback) facade over whatever playback primitive is present
//! - A [`ControlRegistry`](controls::ControlRegistry) contract for the layer that renders controls
//! - A [`PersistenceStore`](persist::PersistenceStore) for keyed save/restore of playback state
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use mediadeck::config::DeckConfig;
//! use mediadeck::controls::{ControlKind, PanelRegistry};
//! use mediadeck::engine::{Deck, StaticContainer};
//! use mediadeck::persist::MemoryStore;
//! use mediadeck::playback::{MediaEvent, SimPlayer};
//!
//! fn main() -> Result<(), mediadeck::DeckError> {
//!     let player = SimPlayer::with_duration("intro.ogg", 90.0);
//!     let container = StaticContainer::new("intro", player);
//!
//!     let mut deck = Deck::bind(
//!         &container,
//!         &PanelRegistry,
//!         Arc::new(MemoryStore::new()),
//!         DeckConfig::default(),
//!     )?;
//!
//!     deck.handle_media_event(MediaEvent::LoadedMetadata);
//!
//!     let total = deck.controls().get(ControlKind::TotalTime).map(|c| c.text());
//!     assert_eq!(total.as_deref(), Some("1:30"));
//!     Ok(())
//! }
//! ```

/// Shared utilities used across the crate.
pub mod common;

/// Per-deck configuration: labels, visibility toggles, callbacks.
pub mod config;

/// Contract between the engine and the control rendering layer.
pub mod controls;

/// The synchronization engine binding containers to controls.
pub mod engine;

/// Error types for deck construction and wiring.
pub mod error;

/// Keyed persistence of playback state across sessions.
pub mod persist;

/// Access to the underlying playback primitive.
pub mod playback;

/// Rendering of playback clocks as display strings.
pub mod timecode;

pub use config::DeckConfig;
pub use engine::Deck;
pub use error::DeckError;
