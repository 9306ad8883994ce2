use std::sync::Arc;

use futures::stream::Stream;

use super::{ControlHandle, ControlKind, ControlRegistry};
use crate::common::Property;

/// A control backed by reactive in-memory state instead of a widget tree.
///
/// Panel controls let the engine run headless: tests, terminal frontends
/// and examples read the same text/value surface a markup-backed control
/// would render. Each field is a [`Property`], so embedders can watch for
/// display updates instead of polling.
pub struct PanelControl {
    kind: ControlKind,
    text: Property<String>,
    value: Property<f64>,
    bounds: Property<(f64, f64)>,
}

impl PanelControl {
    /// Build a panel control for a role, labelled with its initial text.
    pub fn new(kind: ControlKind, label: &str) -> Self {
        Self {
            kind,
            text: Property::new(label.to_owned()),
            value: Property::new(0.0),
            bounds: Property::new((0.0, 0.0)),
        }
    }

    /// Stream of display-text updates, starting with the current text.
    pub fn text_changes(&self) -> impl Stream<Item = String> + Send {
        self.text.watch()
    }

    /// Stream of slider-value updates, starting with the current value.
    pub fn value_changes(&self) -> impl Stream<Item = f64> + Send {
        self.value.watch()
    }

    /// Current slider bounds as `(min, max)`.
    pub fn bounds(&self) -> (f64, f64) {
        self.bounds.get()
    }
}

impl ControlHandle for PanelControl {
    fn kind(&self) -> ControlKind {
        self.kind
    }

    fn set_text(&self, text: &str) {
        self.text.set(text.to_owned());
    }

    fn text(&self) -> String {
        self.text.get()
    }

    fn value(&self) -> f64 {
        self.value.get()
    }

    fn set_value(&self, value: f64) {
        self.value.set(value);
    }

    fn set_bounds(&self, min: f64, max: f64) {
        self.bounds.set((min, max));
    }
}

/// Registry producing [`PanelControl`] instances.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanelRegistry;

impl ControlRegistry for PanelRegistry {
    fn build(&self, kind: ControlKind, label: &str) -> Arc<dyn ControlHandle> {
        Arc::new(PanelControl::new(kind, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_control_reflects_writes() {
        let control = PanelControl::new(ControlKind::Scrubber, "Seek");

        control.set_value(42.0);
        control.set_bounds(0.0, 90.0);

        assert_eq!(control.value(), 42.0);
        assert_eq!(control.bounds(), (0.0, 90.0));
        assert_eq!(control.text(), "Seek");
    }

    #[test]
    fn registry_tags_the_requested_kind() {
        let control = PanelRegistry.build(ControlKind::Mute, "Mute");

        assert_eq!(control.kind(), ControlKind::Mute);
        assert_eq!(
            control.action(),
            Some(crate::controls::ControlAction::Mute)
        );
    }
}
