//! Core types for presentation-input.
//!
//! Element identity, timestamps and modifier flags shared by the key table,
//! the keyboard device and the event arguments.

use std::fmt;
use std::rc::{Rc, Weak};

// =============================================================================
// Elements
// =============================================================================

/// Stable identity of an input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything that can receive keyboard input and focus.
///
/// The input layer only needs identity and the two focus gates; the element
/// tree, layout and rendering live elsewhere.
pub trait InputElement {
    fn id(&self) -> ElementId;

    /// Whether the element accepts keyboard focus at all.
    fn is_focusable(&self) -> bool {
        true
    }

    /// Disabled elements never take focus.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Human-readable name for logs.
    fn name(&self) -> String {
        self.id().to_string()
    }
}

/// Owning element handle.
pub type ElementRef = Rc<dyn InputElement>;

/// Non-owning element handle, as held by focus events and the device.
pub type WeakElementRef = Weak<dyn InputElement>;

/// Upgrade an optional weak element handle.
pub(crate) fn upgrade(element: &Option<WeakElementRef>) -> Option<ElementRef> {
    element.as_ref().and_then(Weak::upgrade)
}

/// Id of an optional weak element handle, if the element is still alive.
pub(crate) fn element_id(element: &Option<WeakElementRef>) -> Option<ElementId> {
    upgrade(element).map(|e| e.id())
}

// =============================================================================
// Timestamp
// =============================================================================

/// Input timestamp in milliseconds. Opaque origin, monotonic per device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }
}

// =============================================================================
// Modifier keys (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Modifier keys currently held.
    ///
    /// Combine with bitwise OR: `ModifierKeys::CONTROL | ModifierKeys::SHIFT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierKeys: u8 {
        const NONE = 0;
        const ALT = 1 << 0;
        const CONTROL = 1 << 1;
        const SHIFT = 1 << 2;
        const WINDOWS = 1 << 3;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal element used across the crate's tests.
    pub struct TestElement {
        pub id: ElementId,
        pub focusable: bool,
        pub enabled: bool,
    }

    impl TestElement {
        pub fn new(id: u64) -> ElementRef {
            Rc::new(Self {
                id: ElementId(id),
                focusable: true,
                enabled: true,
            })
        }

        pub fn with_gates(id: u64, focusable: bool, enabled: bool) -> ElementRef {
            Rc::new(Self {
                id: ElementId(id),
                focusable,
                enabled,
            })
        }
    }

    impl InputElement for TestElement {
        fn id(&self) -> ElementId {
            self.id
        }

        fn is_focusable(&self) -> bool {
            self.focusable
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    #[test]
    fn test_element_defaults() {
        struct Plain;
        impl InputElement for Plain {
            fn id(&self) -> ElementId {
                ElementId(7)
            }
        }

        assert!(Plain.is_focusable());
        assert!(Plain.is_enabled());
        assert_eq!(Plain.name(), "#7");
    }

    #[test]
    fn test_weak_helpers() {
        let element = TestElement::new(3);
        let weak = Some(Rc::downgrade(&element));
        assert_eq!(element_id(&weak), Some(ElementId(3)));

        drop(element);
        assert!(upgrade(&weak).is_none());
        assert_eq!(element_id(&None), None);
    }

    #[test]
    fn test_modifier_flags() {
        let mods = ModifierKeys::CONTROL | ModifierKeys::SHIFT;
        assert!(mods.contains(ModifierKeys::CONTROL));
        assert!(!mods.contains(ModifierKeys::ALT));
        assert_eq!(ModifierKeys::default(), ModifierKeys::NONE);
    }

    #[test]
    fn test_timestamp_order() {
        assert!(Timestamp::from_millis(5) < Timestamp(6));
        assert_eq!(Timestamp(42).as_millis(), 42);
    }
}
