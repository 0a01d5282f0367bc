//! Key Module - Platform key codes
//!
//! The closed set of keys a keyboard device reports, numbered 0..=172.
//! Several codes carry more than one name (legacy and regional keyboard
//! naming). The first declared name is the enum variant; every other name
//! is an associated constant with the identical value, so `Key::Enter` and
//! `Key::Return` are the same key and compare equal.
//!
//! # API
//!
//! - `Key::code` / `Key::from_code` - Numeric code lookup
//! - `Key::name` / `Key::from_name` - Symbolic name lookup (aliases accepted)
//! - `Key::aliases` - Every name sharing a key's code
//! - `canonical_name` - Map any name onto the canonical one
//! - `KeyStates` - Up/down state of a key transition
//!
//! # Example
//!
//! ```ignore
//! use presentation_input::input::Key;
//!
//! assert_eq!(Key::Enter, Key::Return);
//! assert_eq!(Key::from_name("Prior"), Some(Key::PageUp));
//! assert_eq!(Key::PageUp.code(), 19);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::types::ModifierKeys;

// =============================================================================
// KEY STATES
// =============================================================================

/// State a key transitioned into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyStates {
    /// Released
    #[default]
    None,
    /// Pressed
    Down,
}

// =============================================================================
// KEY
// =============================================================================

/// Number of distinct key codes.
pub const KEY_COUNT: usize = 173;

/// Platform key code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Key {
    #[default]
    None = 0,
    Cancel = 1,
    Back = 2,
    Tab = 3,
    LineFeed = 4,
    Clear = 5,
    Return = 6,
    Pause = 7,
    CapsLock = 8,
    HangulMode = 9,
    JunjaMode = 10,
    FinalMode = 11,
    KanjiMode = 12,
    Escape = 13,
    ImeConvert = 14,
    ImeNonConvert = 15,
    ImeAccept = 16,
    ImeModeChange = 17,
    Space = 18,
    PageUp = 19,
    PageDown = 20,
    End = 21,
    Home = 22,
    Left = 23,
    Up = 24,
    Right = 25,
    Down = 26,
    Select = 27,
    Print = 28,
    Execute = 29,
    Snapshot = 30,
    Insert = 31,
    Delete = 32,
    Help = 33,
    D0 = 34,
    D1 = 35,
    D2 = 36,
    D3 = 37,
    D4 = 38,
    D5 = 39,
    D6 = 40,
    D7 = 41,
    D8 = 42,
    D9 = 43,
    A = 44,
    B = 45,
    C = 46,
    D = 47,
    E = 48,
    F = 49,
    G = 50,
    H = 51,
    I = 52,
    J = 53,
    K = 54,
    L = 55,
    M = 56,
    N = 57,
    O = 58,
    P = 59,
    Q = 60,
    R = 61,
    S = 62,
    T = 63,
    U = 64,
    V = 65,
    W = 66,
    X = 67,
    Y = 68,
    Z = 69,
    LWin = 70,
    RWin = 71,
    Apps = 72,
    Sleep = 73,
    NumPad0 = 74,
    NumPad1 = 75,
    NumPad2 = 76,
    NumPad3 = 77,
    NumPad4 = 78,
    NumPad5 = 79,
    NumPad6 = 80,
    NumPad7 = 81,
    NumPad8 = 82,
    NumPad9 = 83,
    Multiply = 84,
    Add = 85,
    Separator = 86,
    Subtract = 87,
    Decimal = 88,
    Divide = 89,
    F1 = 90,
    F2 = 91,
    F3 = 92,
    F4 = 93,
    F5 = 94,
    F6 = 95,
    F7 = 96,
    F8 = 97,
    F9 = 98,
    F10 = 99,
    F11 = 100,
    F12 = 101,
    F13 = 102,
    F14 = 103,
    F15 = 104,
    F16 = 105,
    F17 = 106,
    F18 = 107,
    F19 = 108,
    F20 = 109,
    F21 = 110,
    F22 = 111,
    F23 = 112,
    F24 = 113,
    NumLock = 114,
    Scroll = 115,
    LeftShift = 116,
    RightShift = 117,
    LeftCtrl = 118,
    RightCtrl = 119,
    LeftAlt = 120,
    RightAlt = 121,
    BrowserBack = 122,
    BrowserForward = 123,
    BrowserRefresh = 124,
    BrowserStop = 125,
    BrowserSearch = 126,
    BrowserFavorites = 127,
    BrowserHome = 128,
    VolumeMute = 129,
    VolumeDown = 130,
    VolumeUp = 131,
    MediaNextTrack = 132,
    MediaPreviousTrack = 133,
    MediaStop = 134,
    MediaPlayPause = 135,
    LaunchMail = 136,
    SelectMedia = 137,
    LaunchApplication1 = 138,
    LaunchApplication2 = 139,
    OemSemicolon = 140,
    OemPlus = 141,
    OemComma = 142,
    OemMinus = 143,
    OemPeriod = 144,
    OemQuestion = 145,
    OemTilde = 146,
    AbntC1 = 147,
    AbntC2 = 148,
    OemOpenBrackets = 149,
    OemPipe = 150,
    OemCloseBrackets = 151,
    OemQuotes = 152,
    Oem8 = 153,
    OemBackslash = 154,
    ImeProcessed = 155,
    System = 156,
    OemAttn = 157,
    OemFinish = 158,
    DbeHiragana = 159,
    DbeSbcsChar = 160,
    DbeDbcsChar = 161,
    OemBackTab = 162,
    DbeNoRoman = 163,
    CrSel = 164,
    ExSel = 165,
    EraseEof = 166,
    Play = 167,
    DbeNoCodeInput = 168,
    NoName = 169,
    DbeEnterDialogConversionMode = 170,
    OemClear = 171,
    DeadCharProcessed = 172,
}

// Alternate names. Each one shares the code of the variant it points at.
#[allow(non_upper_case_globals)]
impl Key {
    pub const Enter: Key = Key::Return;
    pub const Capital: Key = Key::CapsLock;
    pub const KanaMode: Key = Key::HangulMode;
    pub const HanjaMode: Key = Key::KanjiMode;
    pub const Prior: Key = Key::PageUp;
    pub const Next: Key = Key::PageDown;
    pub const PrintScreen: Key = Key::Snapshot;
    pub const Oem1: Key = Key::OemSemicolon;
    pub const Oem2: Key = Key::OemQuestion;
    pub const Oem3: Key = Key::OemTilde;
    pub const Oem4: Key = Key::OemOpenBrackets;
    pub const Oem5: Key = Key::OemPipe;
    pub const Oem6: Key = Key::OemCloseBrackets;
    pub const Oem7: Key = Key::OemQuotes;
    pub const Oem102: Key = Key::OemBackslash;
    pub const DbeAlphanumeric: Key = Key::OemAttn;
    pub const DbeKatakana: Key = Key::OemFinish;
    pub const OemCopy: Key = Key::DbeHiragana;
    pub const OemAuto: Key = Key::DbeSbcsChar;
    pub const OemEnlw: Key = Key::DbeDbcsChar;
    pub const DbeRoman: Key = Key::OemBackTab;
    pub const Attn: Key = Key::DbeNoRoman;
    pub const DbeEnterWordRegisterMode: Key = Key::CrSel;
    pub const DbeEnterImeConfigureMode: Key = Key::ExSel;
    pub const DbeFlushString: Key = Key::EraseEof;
    pub const DbeCodeInput: Key = Key::Play;
    pub const Zoom: Key = Key::DbeNoCodeInput;
    pub const DbeDetermineString: Key = Key::NoName;
    pub const Pa1: Key = Key::DbeEnterDialogConversionMode;
}

impl Key {
    /// Numeric code of this key.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a key by numeric code. Returns None above 172.
    pub fn from_code(code: u8) -> Option<Key> {
        CANONICAL.get(code as usize).copied()
    }

    /// Canonical (first declared) name of this key.
    pub fn name(self) -> &'static str {
        self.aliases().next().unwrap_or("None")
    }

    /// Every name sharing this key's code, canonical name first.
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        KEY_NAMES
            .iter()
            .filter(move |(_, key)| *key == self)
            .map(|(name, _)| *name)
    }

    /// Look up a key by canonical or alias name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Key> {
        KEY_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, key)| *key)
    }

    /// All keys in declaration order, one per code.
    pub fn all() -> impl Iterator<Item = Key> {
        CANONICAL.iter().copied()
    }

    /// Letter key for an ASCII letter, either case.
    pub fn from_letter(c: char) -> Option<Key> {
        if c.is_ascii_alphabetic() {
            let offset = c.to_ascii_uppercase() as u8 - b'A';
            Key::from_code(Key::A.code() + offset)
        } else {
            None
        }
    }

    /// Top-row digit key for an ASCII digit.
    pub fn from_digit(c: char) -> Option<Key> {
        c.to_digit(10)
            .and_then(|d| Key::from_code(Key::D0.code() + d as u8))
    }

    /// Function key F1..=F24.
    pub fn function(n: u8) -> Option<Key> {
        if (1..=24).contains(&n) {
            Key::from_code(Key::F1.code() + n - 1)
        } else {
            None
        }
    }

    pub fn is_letter(self) -> bool {
        (Key::A..=Key::Z).contains(&self)
    }

    pub fn is_digit(self) -> bool {
        (Key::D0..=Key::D9).contains(&self)
    }

    pub fn is_function_key(self) -> bool {
        (Key::F1..=Key::F24).contains(&self)
    }

    /// Numeric keypad digits and operators.
    pub fn is_numpad(self) -> bool {
        (Key::NumPad0..=Key::Divide).contains(&self)
    }

    /// Shift, Ctrl, Alt and Windows keys.
    pub fn is_modifier(self) -> bool {
        self.modifier_flag().is_some()
    }

    /// The modifier this key contributes while held.
    pub fn modifier_flag(self) -> Option<ModifierKeys> {
        match self {
            Key::LeftShift | Key::RightShift => Some(ModifierKeys::SHIFT),
            Key::LeftCtrl | Key::RightCtrl => Some(ModifierKeys::CONTROL),
            Key::LeftAlt | Key::RightAlt => Some(ModifierKeys::ALT),
            Key::LWin | Key::RWin => Some(ModifierKeys::WINDOWS),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Key> for u8 {
    fn from(key: Key) -> u8 {
        key.code()
    }
}

impl TryFrom<u8> for Key {
    type Error = ParseKeyError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Key::from_code(code).ok_or(ParseKeyError::UnknownCode(code))
    }
}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::from_name(s).ok_or_else(|| ParseKeyError::UnknownName(s.to_string()))
    }
}

/// Map any key name (canonical or alias) onto its canonical name.
pub fn canonical_name(name: &str) -> Option<&'static str> {
    Key::from_name(name).map(Key::name)
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseKeyError {
    UnknownName(String),
    UnknownCode(u8),
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseKeyError::UnknownName(name) => write!(f, "unknown key name: {name}"),
            ParseKeyError::UnknownCode(code) => write!(f, "unknown key code: {code}"),
        }
    }
}

impl std::error::Error for ParseKeyError {}

// =============================================================================
// TABLES
// =============================================================================

/// Keys indexed by code.
static CANONICAL: [Key; KEY_COUNT] = [
    Key::None,
    Key::Cancel,
    Key::Back,
    Key::Tab,
    Key::LineFeed,
    Key::Clear,
    Key::Return,
    Key::Pause,
    Key::CapsLock,
    Key::HangulMode,
    Key::JunjaMode,
    Key::FinalMode,
    Key::KanjiMode,
    Key::Escape,
    Key::ImeConvert,
    Key::ImeNonConvert,
    Key::ImeAccept,
    Key::ImeModeChange,
    Key::Space,
    Key::PageUp,
    Key::PageDown,
    Key::End,
    Key::Home,
    Key::Left,
    Key::Up,
    Key::Right,
    Key::Down,
    Key::Select,
    Key::Print,
    Key::Execute,
    Key::Snapshot,
    Key::Insert,
    Key::Delete,
    Key::Help,
    Key::D0,
    Key::D1,
    Key::D2,
    Key::D3,
    Key::D4,
    Key::D5,
    Key::D6,
    Key::D7,
    Key::D8,
    Key::D9,
    Key::A,
    Key::B,
    Key::C,
    Key::D,
    Key::E,
    Key::F,
    Key::G,
    Key::H,
    Key::I,
    Key::J,
    Key::K,
    Key::L,
    Key::M,
    Key::N,
    Key::O,
    Key::P,
    Key::Q,
    Key::R,
    Key::S,
    Key::T,
    Key::U,
    Key::V,
    Key::W,
    Key::X,
    Key::Y,
    Key::Z,
    Key::LWin,
    Key::RWin,
    Key::Apps,
    Key::Sleep,
    Key::NumPad0,
    Key::NumPad1,
    Key::NumPad2,
    Key::NumPad3,
    Key::NumPad4,
    Key::NumPad5,
    Key::NumPad6,
    Key::NumPad7,
    Key::NumPad8,
    Key::NumPad9,
    Key::Multiply,
    Key::Add,
    Key::Separator,
    Key::Subtract,
    Key::Decimal,
    Key::Divide,
    Key::F1,
    Key::F2,
    Key::F3,
    Key::F4,
    Key::F5,
    Key::F6,
    Key::F7,
    Key::F8,
    Key::F9,
    Key::F10,
    Key::F11,
    Key::F12,
    Key::F13,
    Key::F14,
    Key::F15,
    Key::F16,
    Key::F17,
    Key::F18,
    Key::F19,
    Key::F20,
    Key::F21,
    Key::F22,
    Key::F23,
    Key::F24,
    Key::NumLock,
    Key::Scroll,
    Key::LeftShift,
    Key::RightShift,
    Key::LeftCtrl,
    Key::RightCtrl,
    Key::LeftAlt,
    Key::RightAlt,
    Key::BrowserBack,
    Key::BrowserForward,
    Key::BrowserRefresh,
    Key::BrowserStop,
    Key::BrowserSearch,
    Key::BrowserFavorites,
    Key::BrowserHome,
    Key::VolumeMute,
    Key::VolumeDown,
    Key::VolumeUp,
    Key::MediaNextTrack,
    Key::MediaPreviousTrack,
    Key::MediaStop,
    Key::MediaPlayPause,
    Key::LaunchMail,
    Key::SelectMedia,
    Key::LaunchApplication1,
    Key::LaunchApplication2,
    Key::OemSemicolon,
    Key::OemPlus,
    Key::OemComma,
    Key::OemMinus,
    Key::OemPeriod,
    Key::OemQuestion,
    Key::OemTilde,
    Key::AbntC1,
    Key::AbntC2,
    Key::OemOpenBrackets,
    Key::OemPipe,
    Key::OemCloseBrackets,
    Key::OemQuotes,
    Key::Oem8,
    Key::OemBackslash,
    Key::ImeProcessed,
    Key::System,
    Key::OemAttn,
    Key::OemFinish,
    Key::DbeHiragana,
    Key::DbeSbcsChar,
    Key::DbeDbcsChar,
    Key::OemBackTab,
    Key::DbeNoRoman,
    Key::CrSel,
    Key::ExSel,
    Key::EraseEof,
    Key::Play,
    Key::DbeNoCodeInput,
    Key::NoName,
    Key::DbeEnterDialogConversionMode,
    Key::OemClear,
    Key::DeadCharProcessed,
];

/// Every key name in declaration order. Canonical names precede their aliases.
pub const KEY_NAMES: &[(&str, Key)] = &[
    ("None", Key::None),
    ("Cancel", Key::Cancel),
    ("Back", Key::Back),
    ("Tab", Key::Tab),
    ("LineFeed", Key::LineFeed),
    ("Clear", Key::Clear),
    ("Return", Key::Return),
    ("Enter", Key::Enter),
    ("Pause", Key::Pause),
    ("CapsLock", Key::CapsLock),
    ("Capital", Key::Capital),
    ("HangulMode", Key::HangulMode),
    ("KanaMode", Key::KanaMode),
    ("JunjaMode", Key::JunjaMode),
    ("FinalMode", Key::FinalMode),
    ("KanjiMode", Key::KanjiMode),
    ("HanjaMode", Key::HanjaMode),
    ("Escape", Key::Escape),
    ("ImeConvert", Key::ImeConvert),
    ("ImeNonConvert", Key::ImeNonConvert),
    ("ImeAccept", Key::ImeAccept),
    ("ImeModeChange", Key::ImeModeChange),
    ("Space", Key::Space),
    ("PageUp", Key::PageUp),
    ("Prior", Key::Prior),
    ("PageDown", Key::PageDown),
    ("Next", Key::Next),
    ("End", Key::End),
    ("Home", Key::Home),
    ("Left", Key::Left),
    ("Up", Key::Up),
    ("Right", Key::Right),
    ("Down", Key::Down),
    ("Select", Key::Select),
    ("Print", Key::Print),
    ("Execute", Key::Execute),
    ("Snapshot", Key::Snapshot),
    ("PrintScreen", Key::PrintScreen),
    ("Insert", Key::Insert),
    ("Delete", Key::Delete),
    ("Help", Key::Help),
    ("D0", Key::D0),
    ("D1", Key::D1),
    ("D2", Key::D2),
    ("D3", Key::D3),
    ("D4", Key::D4),
    ("D5", Key::D5),
    ("D6", Key::D6),
    ("D7", Key::D7),
    ("D8", Key::D8),
    ("D9", Key::D9),
    ("A", Key::A),
    ("B", Key::B),
    ("C", Key::C),
    ("D", Key::D),
    ("E", Key::E),
    ("F", Key::F),
    ("G", Key::G),
    ("H", Key::H),
    ("I", Key::I),
    ("J", Key::J),
    ("K", Key::K),
    ("L", Key::L),
    ("M", Key::M),
    ("N", Key::N),
    ("O", Key::O),
    ("P", Key::P),
    ("Q", Key::Q),
    ("R", Key::R),
    ("S", Key::S),
    ("T", Key::T),
    ("U", Key::U),
    ("V", Key::V),
    ("W", Key::W),
    ("X", Key::X),
    ("Y", Key::Y),
    ("Z", Key::Z),
    ("LWin", Key::LWin),
    ("RWin", Key::RWin),
    ("Apps", Key::Apps),
    ("Sleep", Key::Sleep),
    ("NumPad0", Key::NumPad0),
    ("NumPad1", Key::NumPad1),
    ("NumPad2", Key::NumPad2),
    ("NumPad3", Key::NumPad3),
    ("NumPad4", Key::NumPad4),
    ("NumPad5", Key::NumPad5),
    ("NumPad6", Key::NumPad6),
    ("NumPad7", Key::NumPad7),
    ("NumPad8", Key::NumPad8),
    ("NumPad9", Key::NumPad9),
    ("Multiply", Key::Multiply),
    ("Add", Key::Add),
    ("Separator", Key::Separator),
    ("Subtract", Key::Subtract),
    ("Decimal", Key::Decimal),
    ("Divide", Key::Divide),
    ("F1", Key::F1),
    ("F2", Key::F2),
    ("F3", Key::F3),
    ("F4", Key::F4),
    ("F5", Key::F5),
    ("F6", Key::F6),
    ("F7", Key::F7),
    ("F8", Key::F8),
    ("F9", Key::F9),
    ("F10", Key::F10),
    ("F11", Key::F11),
    ("F12", Key::F12),
    ("F13", Key::F13),
    ("F14", Key::F14),
    ("F15", Key::F15),
    ("F16", Key::F16),
    ("F17", Key::F17),
    ("F18", Key::F18),
    ("F19", Key::F19),
    ("F20", Key::F20),
    ("F21", Key::F21),
    ("F22", Key::F22),
    ("F23", Key::F23),
    ("F24", Key::F24),
    ("NumLock", Key::NumLock),
    ("Scroll", Key::Scroll),
    ("LeftShift", Key::LeftShift),
    ("RightShift", Key::RightShift),
    ("LeftCtrl", Key::LeftCtrl),
    ("RightCtrl", Key::RightCtrl),
    ("LeftAlt", Key::LeftAlt),
    ("RightAlt", Key::RightAlt),
    ("BrowserBack", Key::BrowserBack),
    ("BrowserForward", Key::BrowserForward),
    ("BrowserRefresh", Key::BrowserRefresh),
    ("BrowserStop", Key::BrowserStop),
    ("BrowserSearch", Key::BrowserSearch),
    ("BrowserFavorites", Key::BrowserFavorites),
    ("BrowserHome", Key::BrowserHome),
    ("VolumeMute", Key::VolumeMute),
    ("VolumeDown", Key::VolumeDown),
    ("VolumeUp", Key::VolumeUp),
    ("MediaNextTrack", Key::MediaNextTrack),
    ("MediaPreviousTrack", Key::MediaPreviousTrack),
    ("MediaStop", Key::MediaStop),
    ("MediaPlayPause", Key::MediaPlayPause),
    ("LaunchMail", Key::LaunchMail),
    ("SelectMedia", Key::SelectMedia),
    ("LaunchApplication1", Key::LaunchApplication1),
    ("LaunchApplication2", Key::LaunchApplication2),
    ("OemSemicolon", Key::OemSemicolon),
    ("Oem1", Key::Oem1),
    ("OemPlus", Key::OemPlus),
    ("OemComma", Key::OemComma),
    ("OemMinus", Key::OemMinus),
    ("OemPeriod", Key::OemPeriod),
    ("OemQuestion", Key::OemQuestion),
    ("Oem2", Key::Oem2),
    ("OemTilde", Key::OemTilde),
    ("Oem3", Key::Oem3),
    ("AbntC1", Key::AbntC1),
    ("AbntC2", Key::AbntC2),
    ("OemOpenBrackets", Key::OemOpenBrackets),
    ("Oem4", Key::Oem4),
    ("OemPipe", Key::OemPipe),
    ("Oem5", Key::Oem5),
    ("OemCloseBrackets", Key::OemCloseBrackets),
    ("Oem6", Key::Oem6),
    ("OemQuotes", Key::OemQuotes),
    ("Oem7", Key::Oem7),
    ("Oem8", Key::Oem8),
    ("OemBackslash", Key::OemBackslash),
    ("Oem102", Key::Oem102),
    ("ImeProcessed", Key::ImeProcessed),
    ("System", Key::System),
    ("OemAttn", Key::OemAttn),
    ("DbeAlphanumeric", Key::DbeAlphanumeric),
    ("OemFinish", Key::OemFinish),
    ("DbeKatakana", Key::DbeKatakana),
    ("DbeHiragana", Key::DbeHiragana),
    ("OemCopy", Key::OemCopy),
    ("DbeSbcsChar", Key::DbeSbcsChar),
    ("OemAuto", Key::OemAuto),
    ("DbeDbcsChar", Key::DbeDbcsChar),
    ("OemEnlw", Key::OemEnlw),
    ("OemBackTab", Key::OemBackTab),
    ("DbeRoman", Key::DbeRoman),
    ("DbeNoRoman", Key::DbeNoRoman),
    ("Attn", Key::Attn),
    ("CrSel", Key::CrSel),
    ("DbeEnterWordRegisterMode", Key::DbeEnterWordRegisterMode),
    ("ExSel", Key::ExSel),
    ("DbeEnterImeConfigureMode", Key::DbeEnterImeConfigureMode),
    ("EraseEof", Key::EraseEof),
    ("DbeFlushString", Key::DbeFlushString),
    ("Play", Key::Play),
    ("DbeCodeInput", Key::DbeCodeInput),
    ("DbeNoCodeInput", Key::DbeNoCodeInput),
    ("Zoom", Key::Zoom),
    ("NoName", Key::NoName),
    ("DbeDetermineString", Key::DbeDetermineString),
    ("DbeEnterDialogConversionMode", Key::DbeEnterDialogConversionMode),
    ("Pa1", Key::Pa1),
    ("OemClear", Key::OemClear),
    ("DeadCharProcessed", Key::DeadCharProcessed),
];

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_match_declaration() {
        assert_eq!(Key::None.code(), 0);
        assert_eq!(Key::Return.code(), 6);
        assert_eq!(Key::Space.code(), 18);
        assert_eq!(Key::A.code(), 44);
        assert_eq!(Key::Z.code(), 69);
        assert_eq!(Key::F24.code(), 113);
        assert_eq!(Key::OemClear.code(), 171);
        assert_eq!(Key::DeadCharProcessed.code(), 172);
    }

    #[test]
    fn test_aliases_share_value() {
        let pairs = [
            (Key::Enter, Key::Return),
            (Key::Capital, Key::CapsLock),
            (Key::Prior, Key::PageUp),
            (Key::Next, Key::PageDown),
            (Key::PrintScreen, Key::Snapshot),
            (Key::Oem1, Key::OemSemicolon),
            (Key::Oem2, Key::OemQuestion),
            (Key::Oem3, Key::OemTilde),
            (Key::Oem4, Key::OemOpenBrackets),
            (Key::Oem5, Key::OemPipe),
            (Key::Oem6, Key::OemCloseBrackets),
            (Key::Oem7, Key::OemQuotes),
            (Key::Oem102, Key::OemBackslash),
            (Key::Zoom, Key::DbeNoCodeInput),
            (Key::Pa1, Key::DbeEnterDialogConversionMode),
        ];

        for (alias, canonical) in pairs {
            assert_eq!(alias, canonical);
            assert_eq!(alias.code(), canonical.code());
        }
    }

    #[test]
    fn test_alias_names_resolve_to_same_code() {
        let pairs = [
            ("Enter", "Return"),
            ("Prior", "PageUp"),
            ("Next", "PageDown"),
            ("KanaMode", "HangulMode"),
            ("HanjaMode", "KanjiMode"),
            ("Oem1", "OemSemicolon"),
            ("Capital", "CapsLock"),
            ("Attn", "DbeNoRoman"),
        ];

        for (alias, canonical) in pairs {
            let a = Key::from_name(alias).expect(alias);
            let c = Key::from_name(canonical).expect(canonical);
            assert_eq!(a.code(), c.code(), "{alias} vs {canonical}");
        }
    }

    #[test]
    fn test_every_code_has_one_variant() {
        let keys: Vec<Key> = Key::all().collect();
        assert_eq!(keys.len(), KEY_COUNT);

        for (code, key) in keys.iter().enumerate() {
            assert_eq!(key.code() as usize, code);
        }
    }

    #[test]
    fn test_names_unique() {
        let mut seen = HashSet::new();
        for (name, _) in KEY_NAMES {
            assert!(seen.insert(*name), "duplicate name {name}");
        }
        assert_eq!(KEY_NAMES.len(), KEY_COUNT + 29);
    }

    #[test]
    fn test_non_aliased_names_do_not_collide() {
        // Only the first name per code is canonical; every later name for the
        // same code must be a declared alias, never a second canonical.
        let mut canonical_codes = HashSet::new();
        for key in Key::all() {
            assert!(canonical_codes.insert(key.code()));
            assert_eq!(Key::from_name(key.name()), Some(key));
        }

        let alias_count = KEY_NAMES
            .iter()
            .filter(|(name, key)| key.name() != *name)
            .count();
        assert_eq!(alias_count, 29);
    }

    #[test]
    fn test_canonical_name() {
        assert_eq!(Key::Enter.name(), "Return");
        assert_eq!(canonical_name("Enter"), Some("Return"));
        assert_eq!(canonical_name("Return"), Some("Return"));
        assert_eq!(canonical_name("Oem2"), Some("OemQuestion"));
        assert_eq!(canonical_name("Nope"), None);
    }

    #[test]
    fn test_aliases_listed_canonical_first() {
        let names: Vec<&str> = Key::PageUp.aliases().collect();
        assert_eq!(names, vec!["PageUp", "Prior"]);

        let names: Vec<&str> = Key::Tab.aliases().collect();
        assert_eq!(names, vec!["Tab"]);
    }

    #[test]
    fn test_from_code_bounds() {
        assert_eq!(Key::from_code(0), Some(Key::None));
        assert_eq!(Key::from_code(172), Some(Key::DeadCharProcessed));
        assert_eq!(Key::from_code(173), None);
        assert_eq!(Key::try_from(200u8), Err(ParseKeyError::UnknownCode(200)));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Escape".parse::<Key>(), Ok(Key::Escape));
        assert_eq!("Enter".parse::<Key>(), Ok(Key::Return));
        assert_eq!(
            "escape".parse::<Key>(),
            Err(ParseKeyError::UnknownName("escape".to_string()))
        );
        assert_eq!(Key::Enter.to_string(), "Return");
        assert_eq!(
            ParseKeyError::UnknownName("x".to_string()).to_string(),
            "unknown key name: x"
        );
    }

    #[test]
    fn test_character_helpers() {
        assert_eq!(Key::from_letter('a'), Some(Key::A));
        assert_eq!(Key::from_letter('Q'), Some(Key::Q));
        assert_eq!(Key::from_letter('1'), None);
        assert_eq!(Key::from_digit('0'), Some(Key::D0));
        assert_eq!(Key::from_digit('9'), Some(Key::D9));
        assert_eq!(Key::from_digit('x'), None);
        assert_eq!(Key::function(1), Some(Key::F1));
        assert_eq!(Key::function(24), Some(Key::F24));
        assert_eq!(Key::function(0), None);
        assert_eq!(Key::function(25), None);
    }

    #[test]
    fn test_classification() {
        assert!(Key::M.is_letter());
        assert!(!Key::D5.is_letter());
        assert!(Key::D5.is_digit());
        assert!(Key::F12.is_function_key());
        assert!(Key::NumPad7.is_numpad());
        assert!(Key::Divide.is_numpad());
        assert!(!Key::NumLock.is_numpad());

        assert!(Key::LeftShift.is_modifier());
        assert!(Key::RWin.is_modifier());
        assert!(!Key::CapsLock.is_modifier());
        assert_eq!(Key::RightCtrl.modifier_flag(), Some(ModifierKeys::CONTROL));
        assert_eq!(Key::A.modifier_flag(), None);
    }

    #[test]
    fn test_alias_in_pattern() {
        let describe = |key: Key| match key {
            Key::Enter => "enter",
            Key::Prior => "page up",
            _ => "other",
        };
        assert_eq!(describe(Key::Return), "enter");
        assert_eq!(describe(Key::PageUp), "page up");
        assert_eq!(describe(Key::Tab), "other");
    }

    #[test]
    fn test_key_states_default() {
        assert_eq!(KeyStates::default(), KeyStates::None);
    }
}
