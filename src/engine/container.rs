use std::sync::Arc;

use crate::controls::ControlSet;
use crate::playback::MediaBackend;

/// A managed instance holding at most one inner playback element.
///
/// Containers are how decks find their media resource and where the
/// generated controls end up. A container whose playback element is
/// missing — a markup or configuration mistake — reports `None` from
/// [`media`](Self::media); binding then fails for that container alone.
pub trait MediaContainer {
    /// Diagnostic name used in logs and errors.
    fn name(&self) -> &str;

    /// The inner playback element, absent when misconfigured.
    fn media(&self) -> Option<Arc<dyn MediaBackend>>;

    /// Receives the generated control set once binding succeeds.
    ///
    /// Rendering layers attach the controls to their widget tree here.
    /// Headless containers can keep the default no-op.
    fn mount(&self, _controls: &ControlSet) {}
}

/// Container with a fixed backend, for tests and headless embedding.
pub struct StaticContainer {
    name: String,
    media: Option<Arc<dyn MediaBackend>>,
}

impl StaticContainer {
    /// Container wrapping the given playback element.
    pub fn new(name: &str, media: Arc<dyn MediaBackend>) -> Self {
        Self {
            name: name.to_owned(),
            media: Some(media),
        }
    }

    /// Container missing its playback element.
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            media: None,
        }
    }
}

impl MediaContainer for StaticContainer {
    fn name(&self) -> &str {
        &self.name
    }

    fn media(&self) -> Option<Arc<dyn MediaBackend>> {
        self.media.clone()
    }
}

impl std::fmt::Debug for StaticContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticContainer")
            .field("name", &self.name)
            .field("has_media", &self.media.is_some())
            .finish()
    }
}
