//! Input Module - Keyboard input events
//!
//! - **Key** - Platform key codes and aliases
//! - **Routed events** - Descriptors and routing strategies
//! - **Args** - Event arguments, handler signatures, typed dispatch
//! - **Device** - Pressed keys, modifiers, keyboard focus
//! - **Route** - Handler registry and tunnel/bubble dispatch
//! - **Terminal** - crossterm key events as key transitions

mod args;
mod device;
mod key;
mod route;
mod routed_event;
mod terminal;

pub use args::*;
pub use device::*;
pub use key::*;
pub use route::*;
pub use routed_event::*;
pub use terminal::*;
