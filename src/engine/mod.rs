//! The synchronization engine.
//!
//! A [`Deck`] is the bidirectional binding between one media container
//! and its generated controls: resource lifecycle events flow in through
//! [`Deck::handle_media_event`] and update the controls' displayed
//! state, control interactions flow back through [`Deck::interact`] and
//! drive the playback facade. The deck also arbitrates scrub gestures
//! against playback and opportunistically saves position, volume and
//! paused state on every position tick.
//!
//! Decks are single-threaded state machines: every handler runs to
//! completion, `&mut self` enforces exclusive access, and events are
//! processed strictly in delivery order.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::common::Property;
use crate::config::DeckConfig;
use crate::controls::{ControlKind, ControlRegistry, ControlSet};
use crate::error::DeckError;
use crate::persist::{NoopStore, PersistenceStore};
use crate::playback::{Playback, Volume};

/// Container abstraction and ready-made implementations
pub mod container;
mod dispatch;
mod events;

pub use container::{MediaContainer, StaticContainer};

/// Volume applied once when a resource starts loading.
const DEFAULT_VOLUME: f64 = 0.5;

/// Lifecycle of a bound deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BindState {
    /// Wired and synchronizing
    Bound,

    /// A scrub gesture is in progress; playback is suspended for its
    /// whole duration
    Scrubbing {
        /// Whether the resource was already paused at gesture start
        was_paused: bool,
    },

    /// Torn down; all events and interactions are ignored
    Disposed,
}

/// Synchronization engine for one media container.
pub struct Deck {
    playback: Playback,
    controls: ControlSet,
    store: Arc<dyn PersistenceStore>,
    config: DeckConfig,
    state: BindState,
    volume_initialized: bool,
    /// Last audible volume, kept on the binding rather than the
    /// resource so unmuting can restore it even when the resource
    /// forgets its pre-mute volume.
    last_audible: Property<Volume>,
    source: String,
}

impl Deck {
    /// Bind a deck to a container.
    ///
    /// Builds one control per visible role through the registry, mounts
    /// the set into the container and wires the synchronization state.
    /// A visible control with an empty label is logged and skipped;
    /// the rest of the deck keeps working without it. When persistence
    /// is disabled in `config`, the given store is replaced with a
    /// no-op one.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::MissingPlayback`] when the container holds
    /// no inner playback element.
    pub fn bind(
        container: &dyn MediaContainer,
        registry: &dyn ControlRegistry,
        store: Arc<dyn PersistenceStore>,
        config: DeckConfig,
    ) -> Result<Self, DeckError> {
        let Some(backend) = container.media() else {
            return Err(DeckError::MissingPlayback {
                container: container.name().to_owned(),
            });
        };

        let playback = Playback::new(backend);
        let source = playback.source_id();

        let mut controls = ControlSet::default();
        for kind in ControlKind::ALL {
            if !config.shows(kind) {
                continue;
            }
            let label = config.label_for(kind);
            if label.is_empty() {
                warn!(
                    container = container.name(),
                    "{}",
                    DeckError::MissingLabel { kind }
                );
                continue;
            }
            controls.insert(registry.build(kind, label));
        }
        container.mount(&controls);

        let store: Arc<dyn PersistenceStore> = if config.persist {
            store
        } else {
            Arc::new(NoopStore)
        };

        if config.debug {
            debug!(
                source = %source,
                controls = controls.len(),
                "deck bound"
            );
        }

        Ok(Self {
            playback,
            controls,
            store,
            config,
            state: BindState::Bound,
            volume_initialized: false,
            last_audible: Property::new(Volume::new(DEFAULT_VOLUME)),
            source,
        })
    }

    /// Bind a deck to every container, skipping the broken ones.
    ///
    /// A container without a playback element is reported and left
    /// unbound; the remaining containers are unaffected.
    pub fn bind_all(
        containers: &[&dyn MediaContainer],
        registry: &dyn ControlRegistry,
        store: Arc<dyn PersistenceStore>,
        config: &DeckConfig,
    ) -> Vec<Self> {
        containers
            .iter()
            .filter_map(|container| {
                match Self::bind(*container, registry, Arc::clone(&store), config.clone()) {
                    Ok(deck) => Some(deck),
                    Err(e) => {
                        error!("skipping container: {e}");
                        None
                    }
                }
            })
            .collect()
    }

    /// The playback facade this deck drives.
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// The controls bound to this deck.
    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    /// Whether a scrub gesture is currently in progress.
    pub fn scrubbing(&self) -> bool {
        matches!(self.state, BindState::Scrubbing { .. })
    }

    /// Whether this deck has been torn down.
    pub fn disposed(&self) -> bool {
        self.state == BindState::Disposed
    }

    /// Tear the deck down.
    ///
    /// Clears all control bindings; every later event or interaction is
    /// ignored. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.config.debug {
            debug!(source = %self.source, "deck disposed");
        }
        self.controls.clear();
        self.state = BindState::Disposed;
    }
}

impl std::fmt::Debug for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deck")
            .field("source", &self.source)
            .field("state", &self.state)
            .field("controls", &self.controls)
            .finish()
    }
}
