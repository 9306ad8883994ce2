//! Access to the underlying playback primitive.
//!
//! The engine never talks to a concrete media element. It drives a
//! [`MediaBackend`] through the [`Playback`] facade and reacts to the
//! [`MediaEvent`]s the playback runtime delivers. Anything that can
//! report a position, a volume and a paused flag can sit behind the
//! trait.

/// The native playback primitive contract
pub mod backend;
/// Narrow facade the engine reads and drives playback through
pub mod facade;
/// Scriptable in-memory backend for tests and headless embedding
pub mod sim;
/// Playback-domain value types and lifecycle events
pub mod types;

pub use backend::MediaBackend;
pub use facade::Playback;
pub use sim::SimPlayer;
pub use types::{MediaEvent, Volume};
