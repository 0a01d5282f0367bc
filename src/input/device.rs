//! Keyboard Device - Pressed keys, modifiers and keyboard focus
//!
//! The device turns raw key transitions and focus requests into keyboard
//! event arguments. It owns:
//! - the set of keys currently down (repeat detection, `is_key_down`)
//! - `modifiers` signal (derived from held modifier keys)
//! - `focused_id` signal plus a weak handle to the focused element
//!
//! It does NOT route events; pass the returned events to an
//! [`EventRoute`](super::EventRoute).
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use presentation_input::input::{Key, KeyStates, KeyboardDevice};
//!
//! let device = Rc::new(KeyboardDevice::new());
//! device.focus(Some(&text_box), Timestamp(0))?;
//!
//! let [preview, key_down] = device.process_key(Key::A, KeyStates::Down, Timestamp(5));
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use super::args::{KeyEventArgs, KeyboardEvent, KeyboardFocusChangedEventArgs};
use super::key::{Key, KeyStates};
use super::routed_event::{
    RoutedEvent, GOT_KEYBOARD_FOCUS, KEY_DOWN, KEY_UP, LOST_KEYBOARD_FOCUS,
    PREVIEW_GOT_KEYBOARD_FOCUS, PREVIEW_KEY_DOWN, PREVIEW_KEY_UP, PREVIEW_LOST_KEYBOARD_FOCUS,
};
use crate::types::{ElementId, ElementRef, ModifierKeys, Timestamp, WeakElementRef, upgrade};

// =============================================================================
// ERRORS
// =============================================================================

/// Why a focus request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusError {
    Disabled(ElementId),
    NotFocusable(ElementId),
}

impl fmt::Display for FocusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusError::Disabled(id) => write!(f, "element {id} is disabled"),
            FocusError::NotFocusable(id) => write!(f, "element {id} is not focusable"),
        }
    }
}

impl std::error::Error for FocusError {}

// =============================================================================
// DEVICE
// =============================================================================

pub struct KeyboardDevice {
    pressed: RefCell<HashSet<Key>>,
    // Modifiers reported without matching key transitions (terminal input).
    reported_modifiers: Cell<ModifierKeys>,
    modifiers: Signal<ModifierKeys>,
    focused: RefCell<Option<WeakElementRef>>,
    focused_id: Signal<Option<ElementId>>,
}

impl KeyboardDevice {
    pub fn new() -> Self {
        Self {
            pressed: RefCell::new(HashSet::new()),
            reported_modifiers: Cell::new(ModifierKeys::NONE),
            modifiers: signal(ModifierKeys::NONE),
            focused: RefCell::new(None),
            focused_id: signal(None),
        }
    }

    // -------------------------------------------------------------------------
    // Key state
    // -------------------------------------------------------------------------

    pub fn key_states(&self, key: Key) -> KeyStates {
        if self.pressed.borrow().contains(&key) {
            KeyStates::Down
        } else {
            KeyStates::None
        }
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.key_states(key) == KeyStates::Down
    }

    pub fn is_key_up(&self, key: Key) -> bool {
        !self.is_key_down(key)
    }

    /// Keys currently down, in code order.
    pub fn pressed_keys(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = self.pressed.borrow().iter().copied().collect();
        keys.sort();
        keys
    }

    /// Modifiers currently held (reactive).
    pub fn modifiers(&self) -> ModifierKeys {
        self.modifiers.get()
    }

    /// Signal backing `modifiers`, for effects and deriveds.
    pub fn modifiers_signal(&self) -> Signal<ModifierKeys> {
        self.modifiers.clone()
    }

    /// Record modifiers from a source that reports them as flags rather than
    /// as key transitions.
    pub fn sync_modifiers(&self, modifiers: ModifierKeys) {
        self.reported_modifiers.set(modifiers);
        self.refresh_modifiers();
    }

    fn refresh_modifiers(&self) {
        let held = self
            .pressed
            .borrow()
            .iter()
            .filter_map(|key| key.modifier_flag())
            .fold(ModifierKeys::NONE, |acc, flag| acc | flag);
        let modifiers = held | self.reported_modifiers.get();

        if self.modifiers.get() != modifiers {
            self.modifiers.set(modifiers);
        }
    }

    /// Apply a key transition and build the preview/bubble event pair.
    ///
    /// The events are sourced at the focused element. A `Down` for a key
    /// that is already down is reported as a repeat.
    pub fn process_key(
        self: &Rc<Self>,
        key: Key,
        states: KeyStates,
        timestamp: Timestamp,
    ) -> [KeyboardEvent; 2] {
        self.transition(key, states, timestamp, false)
    }

    pub(crate) fn transition(
        self: &Rc<Self>,
        key: Key,
        states: KeyStates,
        timestamp: Timestamp,
        force_repeat: bool,
    ) -> [KeyboardEvent; 2] {
        let was_down = self.is_key_down(key);

        // Key::None carries no state
        if key != Key::None {
            let mut pressed = self.pressed.borrow_mut();
            match states {
                KeyStates::Down => {
                    pressed.insert(key);
                }
                KeyStates::None => {
                    pressed.remove(&key);
                }
            }
        }
        self.refresh_modifiers();

        let is_repeat = states == KeyStates::Down && (was_down || force_repeat);
        if is_repeat {
            tracing::trace!(%key, "key repeat");
        }

        let (preview, bubble) = match states {
            KeyStates::Down => (PREVIEW_KEY_DOWN, KEY_DOWN),
            KeyStates::None => (PREVIEW_KEY_UP, KEY_UP),
        };

        let source = self.focused_element();
        let build = |routed_event: RoutedEvent| {
            KeyboardEvent::Key(KeyEventArgs::new(
                routed_event,
                source.as_ref(),
                self,
                timestamp,
                key,
                states,
                is_repeat,
            ))
        };

        [build(preview), build(bubble)]
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// Currently focused element, if it is still alive.
    pub fn focused_element(&self) -> Option<ElementRef> {
        upgrade(&self.focused.borrow())
    }

    /// Id of the focused element (reactive).
    pub fn focused_id(&self) -> Option<ElementId> {
        self.focused_id.get()
    }

    /// Signal backing `focused_id`, for effects and deriveds.
    pub fn focused_id_signal(&self) -> Signal<Option<ElementId>> {
        self.focused_id.clone()
    }

    pub fn has_focus(&self) -> bool {
        self.focused_element().is_some()
    }

    pub fn is_focused(&self, id: ElementId) -> bool {
        self.focused_element().is_some_and(|e| e.id() == id)
    }

    /// Move keyboard focus to `element`, or clear it with `None`.
    ///
    /// Returns the focus events in raise order: preview-lost and lost on the
    /// old element (if any), then preview-got and got on the new one (if
    /// any). Focusing the already focused element returns no events.
    pub fn focus(
        self: &Rc<Self>,
        element: Option<&ElementRef>,
        timestamp: Timestamp,
    ) -> Result<Vec<KeyboardEvent>, FocusError> {
        if let Some(element) = element {
            if !element.is_enabled() {
                tracing::warn!(element = %element.name(), "focus refused: element disabled");
                return Err(FocusError::Disabled(element.id()));
            }
            if !element.is_focusable() {
                tracing::warn!(element = %element.name(), "focus refused: element not focusable");
                return Err(FocusError::NotFocusable(element.id()));
            }
        }

        let old = self.focused_element();
        let old_id = old.as_ref().map(|e| e.id());
        let new_id = element.map(|e| e.id());

        // No change, no events. A dead focused element still gets cleared.
        if old_id == new_id {
            if self.focused_id.get() != new_id {
                *self.focused.borrow_mut() = element.map(Rc::downgrade);
                self.focused_id.set(new_id);
                tracing::debug!(new = ?new_id, "stale keyboard focus cleared");
            }
            return Ok(Vec::new());
        }

        let old_weak = old.as_ref().map(Rc::downgrade);
        let new_weak = element.map(Rc::downgrade);

        let build = |routed_event: RoutedEvent, source: &ElementRef| {
            KeyboardEvent::FocusChanged(KeyboardFocusChangedEventArgs::new(
                routed_event,
                Some(source),
                self,
                timestamp,
                old_weak.clone(),
                new_weak.clone(),
            ))
        };

        let mut events = Vec::with_capacity(4);
        if let Some(old) = &old {
            events.push(build(PREVIEW_LOST_KEYBOARD_FOCUS, old));
            events.push(build(LOST_KEYBOARD_FOCUS, old));
        }
        if let Some(new) = element {
            events.push(build(PREVIEW_GOT_KEYBOARD_FOCUS, new));
            events.push(build(GOT_KEYBOARD_FOCUS, new));
        }

        *self.focused.borrow_mut() = new_weak.clone();
        self.focused_id.set(new_id);

        tracing::debug!(old = ?old_id, new = ?new_id, "keyboard focus changed");

        Ok(events)
    }

    /// Release every key and drop focus without raising events.
    pub fn reset(&self) {
        self.pressed.borrow_mut().clear();
        self.reported_modifiers.set(ModifierKeys::NONE);
        self.refresh_modifiers();
        *self.focused.borrow_mut() = None;
        self.focused_id.set(None);
    }
}

impl Default for KeyboardDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KeyboardDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardDevice")
            .field("pressed", &self.pressed_keys())
            .field("modifiers", &self.modifiers())
            .field("focused", &self.focused_id())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
