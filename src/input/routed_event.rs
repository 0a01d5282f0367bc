//! Routed Event Module - Event descriptors and routing strategies
//!
//! A routed event is identified by its owner and name and travels the
//! element path in one of three directions. The keyboard events raised by
//! [`KeyboardDevice`](super::KeyboardDevice) are declared here.

use std::fmt;

/// Direction a routed event travels along the element path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoutingStrategy {
    /// Root to target. Preview events.
    Tunnel,
    /// Target to root.
    Bubble,
    /// Target only.
    Direct,
}

/// Routed event descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoutedEvent {
    pub name: &'static str,
    pub owner: &'static str,
    pub strategy: RoutingStrategy,
}

impl RoutedEvent {
    pub const fn new(name: &'static str, owner: &'static str, strategy: RoutingStrategy) -> Self {
        Self {
            name,
            owner,
            strategy,
        }
    }

    pub fn is_preview(&self) -> bool {
        self.strategy == RoutingStrategy::Tunnel
    }
}

impl fmt::Display for RoutedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

// =============================================================================
// KEYBOARD EVENTS
// =============================================================================

const KEYBOARD: &str = "Keyboard";

pub const PREVIEW_KEY_DOWN: RoutedEvent =
    RoutedEvent::new("PreviewKeyDown", KEYBOARD, RoutingStrategy::Tunnel);
pub const KEY_DOWN: RoutedEvent = RoutedEvent::new("KeyDown", KEYBOARD, RoutingStrategy::Bubble);
pub const PREVIEW_KEY_UP: RoutedEvent =
    RoutedEvent::new("PreviewKeyUp", KEYBOARD, RoutingStrategy::Tunnel);
pub const KEY_UP: RoutedEvent = RoutedEvent::new("KeyUp", KEYBOARD, RoutingStrategy::Bubble);

pub const PREVIEW_GOT_KEYBOARD_FOCUS: RoutedEvent =
    RoutedEvent::new("PreviewGotKeyboardFocus", KEYBOARD, RoutingStrategy::Tunnel);
pub const GOT_KEYBOARD_FOCUS: RoutedEvent =
    RoutedEvent::new("GotKeyboardFocus", KEYBOARD, RoutingStrategy::Bubble);
pub const PREVIEW_LOST_KEYBOARD_FOCUS: RoutedEvent =
    RoutedEvent::new("PreviewLostKeyboardFocus", KEYBOARD, RoutingStrategy::Tunnel);
pub const LOST_KEYBOARD_FOCUS: RoutedEvent =
    RoutedEvent::new("LostKeyboardFocus", KEYBOARD, RoutingStrategy::Bubble);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_events_tunnel() {
        for event in [
            PREVIEW_KEY_DOWN,
            PREVIEW_KEY_UP,
            PREVIEW_GOT_KEYBOARD_FOCUS,
            PREVIEW_LOST_KEYBOARD_FOCUS,
        ] {
            assert!(event.is_preview(), "{event}");
        }

        for event in [KEY_DOWN, KEY_UP, GOT_KEYBOARD_FOCUS, LOST_KEYBOARD_FOCUS] {
            assert_eq!(event.strategy, RoutingStrategy::Bubble, "{event}");
        }
    }

    #[test]
    fn test_identity() {
        assert_eq!(KEY_DOWN, RoutedEvent::new("KeyDown", "Keyboard", RoutingStrategy::Bubble));
        assert_ne!(KEY_DOWN, KEY_UP);
        assert_eq!(KEY_DOWN.to_string(), "Keyboard.KeyDown");
    }
}
