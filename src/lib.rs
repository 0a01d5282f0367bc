//! # presentation-input
//!
//! Keyboard input for a retained-mode presentation framework.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for the
//! device's reactive focus and modifier state.
//!
//! ## Architecture
//!
//! A keyboard device turns raw key transitions and focus requests into event
//! arguments. Events travel a caller-supplied element path and reach the
//! handlers registered along it:
//! ```text
//! crossterm KeyEvent → KeyboardDevice → [preview, bubble] KeyboardEvent → EventRoute → handlers
//! ```
//!
//! Argument kinds form a closed union ([`input::KeyboardEvent`]). A handler
//! runs only when its signature matches the argument kind; everything else
//! falls through to the base behaviour.
//!
//! ## Modules
//!
//! - [`types`] - Element identity, timestamps, modifier flags
//! - [`input`] - Keys, routed events, arguments, device, routing, terminal bridge

pub mod input;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use input::{
    // Keys
    canonical_name, Key, KeyStates, ParseKeyError, KEY_COUNT, KEY_NAMES,
    // Routed events
    RoutedEvent, RoutingStrategy,
    GOT_KEYBOARD_FOCUS, KEY_DOWN, KEY_UP, LOST_KEYBOARD_FOCUS,
    PREVIEW_GOT_KEYBOARD_FOCUS, PREVIEW_KEY_DOWN, PREVIEW_KEY_UP, PREVIEW_LOST_KEYBOARD_FOCUS,
    // Arguments and handlers
    EventHandler, InputEventArgs, KeyEventArgs, KeyEventHandler, KeyboardEvent,
    KeyboardEventArgs, KeyboardFocusChangedEventArgs, KeyboardFocusChangedEventHandler,
    RoutedEventHandler, raise, raise_focus_changed,
    // Device and routing
    FocusError, KeyboardDevice, EventRoute, HandlerOptions, HandlerRegistry,
    // Terminal
    convert_key_code, convert_key_event, KeyInput, TerminalOptions,
};
