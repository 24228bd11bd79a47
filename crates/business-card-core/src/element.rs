//! Host-agnostic lifecycle of one mounted widget.
//!
//! `CardElement` is what a host (a Dioxus tree, a test, an HTML export)
//! drives: attribute changes in, snapshot and popover state out. It also
//! owns the outside-click listener registration so that a floating
//! widget holds exactly one while mounted and none after unmount.

use crate::attributes::{Attribute, AttributeChange, AttributeSet};
use crate::popover::{PopoverEvent, PopoverState};
use crate::snapshot::CardSnapshot;

#[derive(Debug, Clone, Default)]
pub struct CardElement {
    attributes: AttributeSet,
    snapshot: CardSnapshot,
    popover: PopoverState,
    mounted: bool,
    dismiss_listener: bool,
    renders: u64,
}

impl CardElement {
    pub fn new(attributes: AttributeSet) -> Self {
        let snapshot = CardSnapshot::from_attributes(&attributes);
        Self {
            attributes,
            snapshot,
            ..Default::default()
        }
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn snapshot(&self) -> &CardSnapshot {
        &self.snapshot
    }

    pub fn popover(&self) -> PopoverState {
        self.popover
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the outside-click listener is currently registered.
    pub fn has_dismiss_listener(&self) -> bool {
        self.dismiss_listener
    }

    /// Number of renders since construction.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Attach to the host and perform the initial render.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::debug!(floating = self.snapshot.floating, "card mounted");
        self.render();
    }

    /// Detach from the host, dropping the popover state and listener.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.popover = PopoverState::Closed;
        self.sync_listener();
        tracing::debug!("card unmounted");
    }

    /// Record an attribute change reported by the host.
    ///
    /// `None` means the attribute was removed. Observed changes rebuild
    /// the snapshot and re-render, which closes the popover.
    pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> AttributeChange {
        let change = self.attributes.apply(name, value);
        match change {
            AttributeChange::Observed(attr) => {
                tracing::debug!(attribute = %attr, ?value, "attribute changed");
                self.snapshot = CardSnapshot::from_attributes(&self.attributes);
                if self.mounted {
                    self.render();
                }
            }
            AttributeChange::Ignored => {
                tracing::trace!(attribute = name, "unobserved attribute ignored");
            }
        }
        change
    }

    /// Replace the whole attribute set at once, as a host re-render does.
    ///
    /// Compares observed attribute values, not the derived snapshot, so a
    /// change like `show-qr=""` to `show-qr="false"` still re-renders and
    /// closes the popover. Returns the observed attributes that changed.
    pub fn sync_attributes(&mut self, attributes: &AttributeSet) -> Vec<Attribute> {
        let changed: Vec<Attribute> = Attribute::ALL
            .into_iter()
            .filter(|attr| self.attributes.observed(*attr) != attributes.observed(*attr))
            .collect();
        self.attributes = attributes.clone();

        if changed.is_empty() {
            tracing::trace!("no observed attribute changed");
            return changed;
        }

        tracing::debug!(?changed, "attributes synced");
        self.snapshot = CardSnapshot::from_attributes(&self.attributes);
        if self.mounted {
            self.render();
        }
        changed
    }

    /// Route a popover event to the matching operation.
    pub fn handle(&mut self, event: PopoverEvent) -> PopoverState {
        match event {
            PopoverEvent::ToggleClicked => self.toggle_clicked(),
            PopoverEvent::OutsideClicked => self.outside_clicked(),
            PopoverEvent::AttributesChanged => {
                if self.mounted {
                    self.render();
                }
                self.popover
            }
        }
    }

    /// Click on the floating button. Ignored unless floating and mounted.
    pub fn toggle_clicked(&mut self) -> PopoverState {
        if self.mounted && self.snapshot.floating {
            self.popover = self.popover.on(PopoverEvent::ToggleClicked);
        }
        self.popover
    }

    /// Document click whose target lies outside the widget.
    pub fn outside_clicked(&mut self) -> PopoverState {
        if self.dismiss_listener {
            self.popover = self.popover.on(PopoverEvent::OutsideClicked);
        }
        self.popover
    }

    fn render(&mut self) {
        self.renders += 1;
        self.popover = self.popover.on(PopoverEvent::AttributesChanged);
        self.sync_listener();
    }

    fn sync_listener(&mut self) {
        let wanted = self.mounted && self.snapshot.floating;
        if wanted != self.dismiss_listener {
            self.dismiss_listener = wanted;
            if wanted {
                tracing::debug!("outside-click listener registered");
            } else {
                tracing::debug!("outside-click listener released");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floating() -> CardElement {
        let mut el = CardElement::new(AttributeSet::new().with("floating", ""));
        el.mount();
        el
    }

    #[test]
    fn toggle_then_toggle_closes() {
        let mut el = floating();
        assert_eq!(el.toggle_clicked(), PopoverState::Open);
        assert_eq!(el.toggle_clicked(), PopoverState::Closed);
    }

    #[test]
    fn outside_click_closes_open_popover() {
        let mut el = floating();
        el.toggle_clicked();
        assert_eq!(el.outside_clicked(), PopoverState::Closed);
    }

    #[test]
    fn observed_change_resets_popover() {
        let mut el = floating();
        el.toggle_clicked();
        el.attribute_changed("brand", Some("Acme"));
        assert_eq!(el.popover(), PopoverState::Closed);
        assert_eq!(el.snapshot().brand.as_deref(), Some("Acme"));
    }

    #[test]
    fn unobserved_change_keeps_popover_open() {
        let mut el = floating();
        el.toggle_clicked();
        let renders = el.render_count();
        assert_eq!(el.attribute_changed("data-id", Some("1")), AttributeChange::Ignored);
        assert_eq!(el.popover(), PopoverState::Open);
        assert_eq!(el.render_count(), renders);
    }

    #[test]
    fn listener_follows_floating_and_mount() {
        let mut el = CardElement::new(AttributeSet::new());
        el.mount();
        assert!(!el.has_dismiss_listener());

        el.attribute_changed("floating", Some(""));
        assert!(el.has_dismiss_listener());

        for i in 0..10 {
            el.attribute_changed("brand", Some(&format!("Brand {i}")));
        }
        assert!(el.has_dismiss_listener());

        el.unmount();
        assert!(!el.has_dismiss_listener());
    }

    #[test]
    fn removing_floating_releases_listener() {
        let mut el = floating();
        el.attribute_changed("floating", None);
        assert!(!el.has_dismiss_listener());
        assert_eq!(el.toggle_clicked(), PopoverState::Closed);
    }

    #[test]
    fn sync_closes_on_changes_that_keep_the_snapshot() {
        let cases = [
            (
                AttributeSet::new().with("floating", "").with("show-qr", ""),
                AttributeSet::new().with("floating", "").with("show-qr", "false"),
            ),
            (
                AttributeSet::new().with("floating", "").with("variant", "wine"),
                AttributeSet::new().with("floating", ""),
            ),
            (
                AttributeSet::new().with("floating", "").with("brand", ""),
                AttributeSet::new().with("floating", ""),
            ),
        ];

        for (before, after) in cases {
            assert_eq!(
                CardSnapshot::from_attributes(&before),
                CardSnapshot::from_attributes(&after)
            );
            let mut el = CardElement::new(before);
            el.mount();
            el.toggle_clicked();
            assert_eq!(el.sync_attributes(&after).len(), 1);
            assert_eq!(el.popover(), PopoverState::Closed);
            assert_eq!(el.attributes(), &after);
        }
    }

    #[test]
    fn sync_ignores_unobserved_changes() {
        let mut el = floating();
        el.toggle_clicked();
        let renders = el.render_count();
        let next = el.attributes().clone().with("data-id", "7");
        assert!(el.sync_attributes(&next).is_empty());
        assert_eq!(el.popover(), PopoverState::Open);
        assert_eq!(el.render_count(), renders);
        assert_eq!(el.attributes().get("data-id"), Some("7"));
    }

    #[test]
    fn handle_drives_the_toggle_sequence() {
        let mut el = floating();
        assert_eq!(el.handle(PopoverEvent::ToggleClicked), PopoverState::Open);
        assert_eq!(el.handle(PopoverEvent::ToggleClicked), PopoverState::Closed);
        assert_eq!(el.handle(PopoverEvent::ToggleClicked), PopoverState::Open);
        assert_eq!(el.handle(PopoverEvent::OutsideClicked), PopoverState::Closed);
        assert_eq!(el.handle(PopoverEvent::OutsideClicked), PopoverState::Closed);
        el.handle(PopoverEvent::ToggleClicked);
        assert_eq!(el.handle(PopoverEvent::AttributesChanged), PopoverState::Closed);
    }

    #[test]
    fn inline_card_ignores_clicks() {
        let mut el = CardElement::new(AttributeSet::new());
        el.mount();
        assert_eq!(el.handle(PopoverEvent::ToggleClicked), PopoverState::Closed);
        assert!(!el.has_dismiss_listener());
    }

    #[test]
    fn changes_before_mount_do_not_render() {
        let mut el = CardElement::new(AttributeSet::new());
        el.attribute_changed("brand", Some("Acme"));
        assert_eq!(el.render_count(), 0);
        el.mount();
        assert_eq!(el.render_count(), 1);
        assert_eq!(el.snapshot().brand.as_deref(), Some("Acme"));
    }
}
