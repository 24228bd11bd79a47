//! Open/closed state of the floating popover.

/// Whether the floating popover is showing the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopoverState {
    #[default]
    Closed,
    Open,
}

/// Inputs that move the popover between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverEvent {
    /// The floating button was clicked.
    ToggleClicked,
    /// A click landed outside the widget.
    OutsideClicked,
    /// An observed attribute changed and the widget re-rendered.
    AttributesChanged,
}

impl PopoverState {
    pub fn is_open(self) -> bool {
        self == PopoverState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            PopoverState::Closed => PopoverState::Open,
            PopoverState::Open => PopoverState::Closed,
        }
    }

    /// Next state after `event`.
    pub fn on(self, event: PopoverEvent) -> Self {
        let next = match event {
            PopoverEvent::ToggleClicked => self.toggled(),
            PopoverEvent::OutsideClicked | PopoverEvent::AttributesChanged => PopoverState::Closed,
        };
        if next != self {
            tracing::debug!(?event, from = ?self, to = ?next, "popover transition");
        }
        next
    }

    /// Class suffix for the wrapper element.
    pub fn class(self) -> &'static str {
        match self {
            PopoverState::Closed => "",
            PopoverState::Open => "open",
        }
    }
}
