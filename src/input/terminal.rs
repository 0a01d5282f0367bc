//! Terminal Input - crossterm key events as key transitions
//!
//! Bridges crossterm's key events onto [`Key`] codes so terminal applications
//! drive the same keyboard device and routes as any other input source.
//!
//! Most terminals only report presses. By default a release is synthesized
//! right after each press so the device never sees a key stuck down.
//!
//! # API
//!
//! - `convert_key_code` - crossterm KeyCode to our Key
//! - `convert_key_event` - crossterm KeyEvent to a `KeyInput`
//! - `KeyboardDevice::process_terminal_key` - Feed a crossterm event to a device

use std::rc::Rc;

use crossterm::event::{
    KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers, MediaKeyCode,
    ModifierKeyCode,
};

use super::args::KeyboardEvent;
use super::device::KeyboardDevice;
use super::key::{Key, KeyStates};
use crate::types::{ModifierKeys, Timestamp};

// =============================================================================
// OPTIONS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalOptions {
    /// Follow every press with a synthesized release.
    pub synthesize_release: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            synthesize_release: true,
        }
    }
}

// =============================================================================
// KEY INPUT
// =============================================================================

/// A converted terminal key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub states: KeyStates,
    pub is_repeat: bool,
    pub modifiers: ModifierKeys,
}

// =============================================================================
// CONVERSION
// =============================================================================

/// Convert crossterm KeyCode to our Key. Unmapped codes become `Key::None`.
pub fn convert_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => convert_char(c),
        KeyCode::Backspace => Key::Back,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::F(n) => Key::function(n).unwrap_or(Key::None),
        KeyCode::Esc => Key::Escape,
        KeyCode::CapsLock => Key::CapsLock,
        KeyCode::ScrollLock => Key::Scroll,
        KeyCode::NumLock => Key::NumLock,
        KeyCode::PrintScreen => Key::PrintScreen,
        KeyCode::Pause => Key::Pause,
        KeyCode::Menu => Key::Apps,
        KeyCode::KeypadBegin => Key::Clear,
        KeyCode::Media(media) => convert_media(media),
        KeyCode::Modifier(modifier) => convert_modifier_key(modifier),
        _ => Key::None,
    }
}

// US layout; shifted symbols map to the key that produces them.
fn convert_char(c: char) -> Key {
    if let Some(key) = Key::from_letter(c).or_else(|| Key::from_digit(c)) {
        return key;
    }

    match c {
        ' ' => Key::Space,
        '\t' => Key::Tab,
        '\n' | '\r' => Key::Enter,
        ')' => Key::D0,
        '!' => Key::D1,
        '@' => Key::D2,
        '#' => Key::D3,
        '$' => Key::D4,
        '%' => Key::D5,
        '^' => Key::D6,
        '&' => Key::D7,
        '*' => Key::D8,
        '(' => Key::D9,
        ';' | ':' => Key::OemSemicolon,
        '=' | '+' => Key::OemPlus,
        ',' | '<' => Key::OemComma,
        '-' | '_' => Key::OemMinus,
        '.' | '>' => Key::OemPeriod,
        '/' | '?' => Key::OemQuestion,
        '`' | '~' => Key::OemTilde,
        '[' | '{' => Key::OemOpenBrackets,
        '\\' | '|' => Key::OemPipe,
        ']' | '}' => Key::OemCloseBrackets,
        '\'' | '"' => Key::OemQuotes,
        _ => Key::None,
    }
}

fn needs_shift(c: char) -> bool {
    c.is_ascii_uppercase() || "~!@#$%^&*()_+{}|:\"<>?".contains(c)
}

fn convert_media(media: MediaKeyCode) -> Key {
    match media {
        MediaKeyCode::Play => Key::Play,
        MediaKeyCode::Pause | MediaKeyCode::PlayPause => Key::MediaPlayPause,
        MediaKeyCode::Stop => Key::MediaStop,
        MediaKeyCode::TrackNext => Key::MediaNextTrack,
        MediaKeyCode::TrackPrevious => Key::MediaPreviousTrack,
        MediaKeyCode::LowerVolume => Key::VolumeDown,
        MediaKeyCode::RaiseVolume => Key::VolumeUp,
        MediaKeyCode::MuteVolume => Key::VolumeMute,
        _ => Key::None,
    }
}

fn convert_modifier_key(modifier: ModifierKeyCode) -> Key {
    match modifier {
        ModifierKeyCode::LeftShift => Key::LeftShift,
        ModifierKeyCode::RightShift => Key::RightShift,
        ModifierKeyCode::LeftControl => Key::LeftCtrl,
        ModifierKeyCode::RightControl => Key::RightCtrl,
        ModifierKeyCode::LeftAlt => Key::LeftAlt,
        ModifierKeyCode::RightAlt => Key::RightAlt,
        ModifierKeyCode::LeftSuper => Key::LWin,
        ModifierKeyCode::RightSuper => Key::RWin,
        _ => Key::None,
    }
}

/// Convert crossterm KeyModifiers to our ModifierKeys
fn convert_modifiers(mods: KeyModifiers) -> ModifierKeys {
    let mut out = ModifierKeys::NONE;
    if mods.contains(KeyModifiers::CONTROL) {
        out |= ModifierKeys::CONTROL;
    }
    if mods.contains(KeyModifiers::ALT) {
        out |= ModifierKeys::ALT;
    }
    if mods.contains(KeyModifiers::SHIFT) {
        out |= ModifierKeys::SHIFT;
    }
    if mods.contains(KeyModifiers::SUPER) {
        out |= ModifierKeys::WINDOWS;
    }
    out
}

/// Convert crossterm KeyEvent to a key transition.
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyInput {
    let (states, is_repeat) = match event.kind {
        KeyEventKind::Press => (KeyStates::Down, false),
        KeyEventKind::Repeat => (KeyStates::Down, true),
        KeyEventKind::Release => (KeyStates::None, false),
    };

    let mut modifiers = convert_modifiers(event.modifiers);
    let implied_shift = match event.code {
        KeyCode::BackTab => true,
        KeyCode::Char(c) => needs_shift(c),
        _ => false,
    };
    if implied_shift {
        modifiers |= ModifierKeys::SHIFT;
    }

    KeyInput {
        key: convert_key_code(event.code),
        states,
        is_repeat,
        modifiers,
    }
}

// =============================================================================
// DEVICE INTEGRATION
// =============================================================================

impl KeyboardDevice {
    /// Feed a crossterm key event to the device.
    ///
    /// Returns the events to raise in order: the preview/bubble pair for the
    /// transition, followed by a synthesized up pair when
    /// `synthesize_release` is set and the event was not itself a release.
    /// Unmapped keys produce no events.
    pub fn process_terminal_key(
        self: &Rc<Self>,
        event: CrosstermKeyEvent,
        timestamp: Timestamp,
        options: &TerminalOptions,
    ) -> Vec<KeyboardEvent> {
        let input = convert_key_event(event);
        if input.key == Key::None {
            tracing::trace!(code = ?event.code, "unmapped terminal key");
            return Vec::new();
        }

        self.sync_modifiers(input.modifiers);

        let mut events = Vec::with_capacity(4);
        events.extend(self.transition(input.key, input.states, timestamp, input.is_repeat));
        if options.synthesize_release && input.states == KeyStates::Down {
            events.extend(self.transition(input.key, KeyStates::None, timestamp, false));
        }
        events
    }
}

// =============================================================================
// TESTS
// =============================================================================
