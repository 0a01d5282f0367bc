//! Event Arguments - What handlers receive
//!
//! Argument types for keyboard routed events:
//!
//! - `InputEventArgs` - Routed event, original source, timestamp, handled flag
//! - `KeyboardEventArgs` - Adds the originating keyboard device
//! - `KeyEventArgs` - A key went down or up
//! - `KeyboardFocusChangedEventArgs` - Keyboard focus moved between elements
//! - `KeyboardEvent` - Closed union of the two leaf kinds
//!
//! Each argument kind has its own handler signature. `invoke_handler` calls a
//! handler only when its signature matches the argument kind, otherwise it
//! defers to the base behaviour: a `Routed` handler accepts any kind, every
//! other mismatch is a no-op.
//!
//! # Example
//!
//! ```ignore
//! use presentation_input::input::{EventHandler, KeyboardEvent};
//!
//! let handler = EventHandler::key(|sender, args| {
//!     println!("{} got {}", sender.name(), args.key());
//! });
//! let invoked = event.invoke_handler(&handler, target.as_ref());
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use super::device::KeyboardDevice;
use super::key::{Key, KeyStates};
use super::routed_event::RoutedEvent;
use crate::types::{element_id, upgrade, ElementRef, InputElement, Timestamp, WeakElementRef};

// =============================================================================
// HANDLER TYPES
// =============================================================================

/// Handler for key transitions.
pub type KeyEventHandler = Rc<dyn Fn(&dyn InputElement, &KeyEventArgs)>;

/// Handler for keyboard focus changes.
pub type KeyboardFocusChangedEventHandler =
    Rc<dyn Fn(&dyn InputElement, &KeyboardFocusChangedEventArgs)>;

/// Handler accepting any input event through its base arguments.
pub type RoutedEventHandler = Rc<dyn Fn(&dyn InputElement, &InputEventArgs)>;

/// A handler of any of the supported signatures.
#[derive(Clone)]
pub enum EventHandler {
    Key(KeyEventHandler),
    FocusChanged(KeyboardFocusChangedEventHandler),
    Routed(RoutedEventHandler),
}

impl EventHandler {
    pub fn key<F>(handler: F) -> Self
    where
        F: Fn(&dyn InputElement, &KeyEventArgs) + 'static,
    {
        EventHandler::Key(Rc::new(handler))
    }

    pub fn focus_changed<F>(handler: F) -> Self
    where
        F: Fn(&dyn InputElement, &KeyboardFocusChangedEventArgs) + 'static,
    {
        EventHandler::FocusChanged(Rc::new(handler))
    }

    pub fn routed<F>(handler: F) -> Self
    where
        F: Fn(&dyn InputElement, &InputEventArgs) + 'static,
    {
        EventHandler::Routed(Rc::new(handler))
    }

    fn kind(&self) -> &'static str {
        match self {
            EventHandler::Key(_) => "key",
            EventHandler::FocusChanged(_) => "focus-changed",
            EventHandler::Routed(_) => "routed",
        }
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventHandler::{}", self.kind())
    }
}

// =============================================================================
// INPUT EVENT ARGS
// =============================================================================

/// Fields common to every input event.
pub struct InputEventArgs {
    routed_event: RoutedEvent,
    original_source: Option<WeakElementRef>,
    timestamp: Timestamp,
    handled: Cell<bool>,
}

impl InputEventArgs {
    pub fn new(
        routed_event: RoutedEvent,
        original_source: Option<&ElementRef>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            routed_event,
            original_source: original_source.map(Rc::downgrade),
            timestamp,
            handled: Cell::new(false),
        }
    }

    pub fn routed_event(&self) -> RoutedEvent {
        self.routed_event
    }

    /// Element the event was raised on, if it is still alive.
    pub fn original_source(&self) -> Option<ElementRef> {
        upgrade(&self.original_source)
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn handled(&self) -> bool {
        self.handled.get()
    }

    /// Mark the event handled. Later handlers on the route are skipped
    /// unless they asked for handled events too.
    pub fn set_handled(&self, handled: bool) {
        self.handled.set(handled);
    }

    /// Base dispatch: only a `Routed` handler can take base arguments.
    pub fn invoke_handler(&self, handler: &EventHandler, target: &dyn InputElement) -> bool {
        match handler {
            EventHandler::Routed(handler) => {
                handler(target, self);
                true
            }
            other => {
                tracing::trace!(
                    event = %self.routed_event,
                    handler = other.kind(),
                    target = %target.id(),
                    "handler signature does not match event arguments"
                );
                false
            }
        }
    }
}

impl fmt::Debug for InputEventArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputEventArgs")
            .field("routed_event", &self.routed_event)
            .field("original_source", &element_id(&self.original_source))
            .field("timestamp", &self.timestamp)
            .field("handled", &self.handled.get())
            .finish()
    }
}

// =============================================================================
// KEYBOARD EVENT ARGS
// =============================================================================

/// Input event raised by a keyboard device.
#[derive(Debug)]
pub struct KeyboardEventArgs {
    input: InputEventArgs,
    keyboard_device: Rc<KeyboardDevice>,
}

impl KeyboardEventArgs {
    pub fn new(
        routed_event: RoutedEvent,
        original_source: Option<&ElementRef>,
        keyboard_device: &Rc<KeyboardDevice>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            input: InputEventArgs::new(routed_event, original_source, timestamp),
            keyboard_device: Rc::clone(keyboard_device),
        }
    }

    pub fn input(&self) -> &InputEventArgs {
        &self.input
    }

    pub fn keyboard_device(&self) -> &Rc<KeyboardDevice> {
        &self.keyboard_device
    }

    pub fn routed_event(&self) -> RoutedEvent {
        self.input.routed_event()
    }

    pub fn timestamp(&self) -> Timestamp {
        self.input.timestamp()
    }

    pub fn invoke_handler(&self, handler: &EventHandler, target: &dyn InputElement) -> bool {
        self.input.invoke_handler(handler, target)
    }
}

// =============================================================================
// KEY EVENT ARGS
// =============================================================================

/// A key transitioned up or down.
#[derive(Debug)]
pub struct KeyEventArgs {
    keyboard: KeyboardEventArgs,
    key: Key,
    key_states: KeyStates,
    is_repeat: bool,
}

impl KeyEventArgs {
    pub fn new(
        routed_event: RoutedEvent,
        original_source: Option<&ElementRef>,
        keyboard_device: &Rc<KeyboardDevice>,
        timestamp: Timestamp,
        key: Key,
        key_states: KeyStates,
        is_repeat: bool,
    ) -> Self {
        Self {
            keyboard: KeyboardEventArgs::new(
                routed_event,
                original_source,
                keyboard_device,
                timestamp,
            ),
            key,
            key_states,
            is_repeat,
        }
    }

    pub fn keyboard(&self) -> &KeyboardEventArgs {
        &self.keyboard
    }

    pub fn input(&self) -> &InputEventArgs {
        self.keyboard.input()
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn key_states(&self) -> KeyStates {
        self.key_states
    }

    pub fn is_up(&self) -> bool {
        self.key_states == KeyStates::None
    }

    pub fn is_down(&self) -> bool {
        self.key_states == KeyStates::Down
    }

    /// Down transition of a key that was already down (auto-repeat).
    pub fn is_repeat(&self) -> bool {
        self.is_repeat
    }

    pub fn invoke_handler(&self, handler: &EventHandler, target: &dyn InputElement) -> bool {
        match handler {
            EventHandler::Key(handler) => {
                handler(target, self);
                true
            }
            _ => self.keyboard.invoke_handler(handler, target),
        }
    }
}

// =============================================================================
// FOCUS CHANGED EVENT ARGS
// =============================================================================

/// Keyboard focus moved from one element to another.
///
/// Both ends are held weakly; an element dropped after the event was created
/// reads back as `None`.
pub struct KeyboardFocusChangedEventArgs {
    keyboard: KeyboardEventArgs,
    old_focus: Option<WeakElementRef>,
    new_focus: Option<WeakElementRef>,
}

impl KeyboardFocusChangedEventArgs {
    pub fn new(
        routed_event: RoutedEvent,
        original_source: Option<&ElementRef>,
        keyboard_device: &Rc<KeyboardDevice>,
        timestamp: Timestamp,
        old_focus: Option<WeakElementRef>,
        new_focus: Option<WeakElementRef>,
    ) -> Self {
        Self {
            keyboard: KeyboardEventArgs::new(
                routed_event,
                original_source,
                keyboard_device,
                timestamp,
            ),
            old_focus,
            new_focus,
        }
    }

    pub fn keyboard(&self) -> &KeyboardEventArgs {
        &self.keyboard
    }

    pub fn input(&self) -> &InputEventArgs {
        self.keyboard.input()
    }

    pub fn old_focus(&self) -> Option<ElementRef> {
        upgrade(&self.old_focus)
    }

    pub fn new_focus(&self) -> Option<ElementRef> {
        upgrade(&self.new_focus)
    }

    pub fn invoke_handler(&self, handler: &EventHandler, target: &dyn InputElement) -> bool {
        match handler {
            EventHandler::FocusChanged(handler) => {
                handler(target, self);
                true
            }
            _ => self.keyboard.invoke_handler(handler, target),
        }
    }
}

impl fmt::Debug for KeyboardFocusChangedEventArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardFocusChangedEventArgs")
            .field("keyboard", &self.keyboard)
            .field("old_focus", &element_id(&self.old_focus))
            .field("new_focus", &element_id(&self.new_focus))
            .finish()
    }
}

// =============================================================================
// KEYBOARD EVENT
// =============================================================================

/// A keyboard event of either kind.
#[derive(Debug)]
pub enum KeyboardEvent {
    Key(KeyEventArgs),
    FocusChanged(KeyboardFocusChangedEventArgs),
}

impl KeyboardEvent {
    pub fn keyboard(&self) -> &KeyboardEventArgs {
        match self {
            KeyboardEvent::Key(args) => args.keyboard(),
            KeyboardEvent::FocusChanged(args) => args.keyboard(),
        }
    }

    pub fn input(&self) -> &InputEventArgs {
        self.keyboard().input()
    }

    pub fn routed_event(&self) -> RoutedEvent {
        self.input().routed_event()
    }

    pub fn as_key(&self) -> Option<&KeyEventArgs> {
        match self {
            KeyboardEvent::Key(args) => Some(args),
            KeyboardEvent::FocusChanged(_) => None,
        }
    }

    pub fn as_focus_changed(&self) -> Option<&KeyboardFocusChangedEventArgs> {
        match self {
            KeyboardEvent::FocusChanged(args) => Some(args),
            KeyboardEvent::Key(_) => None,
        }
    }

    /// Invoke `handler` on `target` if its signature fits this event.
    /// Returns whether the handler ran.
    pub fn invoke_handler(&self, handler: &EventHandler, target: &dyn InputElement) -> bool {
        match self {
            KeyboardEvent::Key(args) => args.invoke_handler(handler, target),
            KeyboardEvent::FocusChanged(args) => args.invoke_handler(handler, target),
        }
    }
}

impl From<KeyEventArgs> for KeyboardEvent {
    fn from(args: KeyEventArgs) -> Self {
        KeyboardEvent::Key(args)
    }
}

impl From<KeyboardFocusChangedEventArgs> for KeyboardEvent {
    fn from(args: KeyboardFocusChangedEventArgs) -> Self {
        KeyboardEvent::FocusChanged(args)
    }
}

// =============================================================================
// RAISE HELPERS
// =============================================================================

/// Call `handler` if one is set.
pub fn raise(handler: Option<&KeyEventHandler>, sender: &dyn InputElement, args: &KeyEventArgs) {
    if let Some(handler) = handler {
        handler(sender, args);
    }
}

/// Call `handler` if one is set.
pub fn raise_focus_changed(
    handler: Option<&KeyboardFocusChangedEventHandler>,
    sender: &dyn InputElement,
    args: &KeyboardFocusChangedEventArgs,
) {
    if let Some(handler) = handler {
        handler(sender, args);
    }
}

/// Weak handle to an element, for building focus arguments by hand.
pub fn weak(element: &ElementRef) -> WeakElementRef {
    Rc::downgrade(element)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::routed_event::{GOT_KEYBOARD_FOCUS, KEY_DOWN, KEY_UP};
    use crate::types::tests::TestElement;
    use crate::types::ElementId;
    use std::cell::Cell;

    fn device() -> Rc<KeyboardDevice> {
        Rc::new(KeyboardDevice::new())
    }

    fn key_args(states: KeyStates) -> KeyEventArgs {
        let source = TestElement::new(1);
        KeyEventArgs::new(
            KEY_DOWN,
            Some(&source),
            &device(),
            Timestamp(10),
            Key::A,
            states,
            false,
        )
    }

    fn focus_args(old: &ElementRef, new: &ElementRef) -> KeyboardFocusChangedEventArgs {
        KeyboardFocusChangedEventArgs::new(
            GOT_KEYBOARD_FOCUS,
            Some(new),
            &device(),
            Timestamp(20),
            Some(weak(old)),
            Some(weak(new)),
        )
    }

    #[test]
    fn test_up_down_exclusive() {
        for states in [KeyStates::None, KeyStates::Down] {
            let args = key_args(states);
            assert_ne!(args.is_up(), args.is_down());
            assert_eq!(args.is_down(), states == KeyStates::Down);
            assert_eq!(args.key_states(), states);
        }
    }

    #[test]
    fn test_fields_exposed() {
        let source = TestElement::new(4);
        let dev = device();
        let args = KeyEventArgs::new(
            KEY_UP,
            Some(&source),
            &dev,
            Timestamp(99),
            Key::Enter,
            KeyStates::None,
            true,
        );

        assert_eq!(args.key(), Key::Return);
        assert!(args.is_repeat());
        assert_eq!(args.keyboard().routed_event(), KEY_UP);
        assert_eq!(args.keyboard().timestamp(), Timestamp(99));
        assert!(Rc::ptr_eq(args.keyboard().keyboard_device(), &dev));
        assert_eq!(args.input().original_source().map(|e| e.id()), Some(ElementId(4)));
        assert!(!args.input().handled());
    }

    #[test]
    fn test_key_handler_matches_key_event() {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let handler = EventHandler::key(move |_, args| {
            assert_eq!(args.key(), Key::A);
            count_clone.set(count_clone.get() + 1);
        });

        let target = TestElement::new(1);
        let event = KeyboardEvent::from(key_args(KeyStates::Down));
        assert!(event.invoke_handler(&handler, target.as_ref()));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_focus_handler_matches_focus_event() {
        let old = TestElement::new(1);
        let new = TestElement::new(2);
        let seen = Rc::new(Cell::new(None));
        let seen_clone = seen.clone();
        let handler = EventHandler::focus_changed(move |_, args| {
            seen_clone.set(args.new_focus().map(|e| e.id()));
        });

        let event = KeyboardEvent::from(focus_args(&old, &new));
        assert!(event.invoke_handler(&handler, new.as_ref()));
        assert_eq!(seen.get(), Some(ElementId(2)));
    }

    #[test]
    fn test_mismatched_handler_falls_through() {
        let count = Rc::new(Cell::new(0));
        let key_count = count.clone();
        let focus_count = count.clone();
        let key_handler = EventHandler::key(move |_, _| key_count.set(key_count.get() + 1));
        let focus_handler =
            EventHandler::focus_changed(move |_, _| focus_count.set(focus_count.get() + 1));

        let old = TestElement::new(1);
        let new = TestElement::new(2);
        let focus_event = KeyboardEvent::from(focus_args(&old, &new));
        let key_event = KeyboardEvent::from(key_args(KeyStates::Down));

        assert!(!focus_event.invoke_handler(&key_handler, new.as_ref()));
        assert!(!key_event.invoke_handler(&focus_handler, new.as_ref()));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_routed_handler_accepts_any_kind() {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let handler = EventHandler::routed(move |_, args| {
            args.set_handled(true);
            count_clone.set(count_clone.get() + 1);
        });

        let old = TestElement::new(1);
        let new = TestElement::new(2);
        let key_event = KeyboardEvent::from(key_args(KeyStates::Down));
        let focus_event = KeyboardEvent::from(focus_args(&old, &new));

        assert!(key_event.invoke_handler(&handler, new.as_ref()));
        assert!(focus_event.invoke_handler(&handler, new.as_ref()));
        assert_eq!(count.get(), 2);
        assert!(key_event.input().handled());
        assert!(focus_event.input().handled());
    }

    #[test]
    fn test_focus_refs_are_weak() {
        let old = TestElement::new(1);
        let new = TestElement::new(2);
        let args = focus_args(&old, &new);

        assert_eq!(args.old_focus().map(|e| e.id()), Some(ElementId(1)));
        drop(old);
        assert!(args.old_focus().is_none());
        assert_eq!(args.new_focus().map(|e| e.id()), Some(ElementId(2)));
    }

    #[test]
    fn test_raise_unset_is_noop() {
        let sender = TestElement::new(1);
        let args = key_args(KeyStates::Down);
        raise(None, sender.as_ref(), &args);

        let old = TestElement::new(2);
        let focus = focus_args(&old, &sender);
        raise_focus_changed(None, sender.as_ref(), &focus);
    }

    #[test]
    fn test_raise_set_handler() {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let handler: KeyEventHandler = Rc::new(move |_: &dyn InputElement, _: &KeyEventArgs| {
            count_clone.set(count_clone.get() + 1)
        });

        let sender = TestElement::new(1);
        raise(Some(&handler), sender.as_ref(), &key_args(KeyStates::None));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_raise_focus_changed_set_handler() {
        let seen = Rc::new(Cell::new(None));
        let seen_clone = seen.clone();
        let handler: KeyboardFocusChangedEventHandler = Rc::new(
            move |sender: &dyn InputElement, args: &KeyboardFocusChangedEventArgs| {
                let new_id = args.new_focus().map(|e| e.id());
                seen_clone.set(Some((sender.id(), new_id)));
            },
        );

        let old = TestElement::new(1);
        let new = TestElement::new(2);
        raise_focus_changed(Some(&handler), new.as_ref(), &focus_args(&old, &new));
        assert_eq!(seen.get(), Some((ElementId(2), Some(ElementId(2)))));
    }

    #[test]
    fn test_variant_accessors() {
        let event = KeyboardEvent::from(key_args(KeyStates::Down));
        assert!(event.as_key().is_some());
        assert!(event.as_focus_changed().is_none());
        assert_eq!(event.routed_event(), KEY_DOWN);
    }
}
