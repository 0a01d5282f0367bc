//! Event Route - Handler registry and routed dispatch
//!
//! Handlers are registered per element and routed event. A route is the
//! element path from the event target up to the root, supplied by the
//! caller (the element tree is not this crate's concern). Raising an event
//! walks the path according to the event's strategy:
//!
//! - **Tunnel** - root to target (preview events)
//! - **Bubble** - target to root
//! - **Direct** - target only
//!
//! Once a handler marks the event handled, the remaining handlers are
//! skipped unless they were registered with `handled_events_too`.
//!
//! # Example
//!
//! ```ignore
//! let registry = HandlerRegistry::new();
//! let cleanup = registry.add_handler(
//!     text_box.id(),
//!     KEY_DOWN,
//!     EventHandler::key(|_, args| args.input().set_handled(true)),
//!     HandlerOptions::default(),
//! );
//!
//! let route = EventRoute::new(vec![text_box, panel, window]);
//! let handled = route.raise_all(&registry, &device.process_key(Key::A, KeyStates::Down, ts));
//!
//! cleanup();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::args::{EventHandler, KeyboardEvent};
use super::routed_event::{RoutedEvent, RoutingStrategy};
use crate::types::{ElementId, ElementRef};

// =============================================================================
// OPTIONS
// =============================================================================

/// Per-registration options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandlerOptions {
    /// Run even after an earlier handler marked the event handled.
    pub handled_events_too: bool,
}

impl HandlerOptions {
    pub fn handled_events_too() -> Self {
        Self {
            handled_events_too: true,
        }
    }
}

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct Registration {
    id: usize,
    handler: EventHandler,
    options: HandlerOptions,
}

#[derive(Default)]
struct RegistryInner {
    handlers: HashMap<(ElementId, RoutedEvent), Vec<Registration>>,
    next_id: usize,
}

impl RegistryInner {
    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Handlers by element and routed event, in registration order.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Returns cleanup function.
    pub fn add_handler(
        &self,
        element: ElementId,
        routed_event: RoutedEvent,
        handler: EventHandler,
        options: HandlerOptions,
    ) -> impl FnOnce() + use<> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id();
            inner
                .handlers
                .entry((element, routed_event))
                .or_default()
                .push(Registration {
                    id,
                    handler,
                    options,
                });
            id
        };

        let inner: Weak<RefCell<RegistryInner>> = Rc::downgrade(&self.inner);
        move || {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let mut inner = inner.borrow_mut();
            let key = (element, routed_event);
            if let Some(list) = inner.handlers.get_mut(&key) {
                list.retain(|reg| reg.id != id);
                if list.is_empty() {
                    inner.handlers.remove(&key);
                }
            }
        }
    }

    /// Drop every handler registered on an element.
    /// Called when the element is destroyed.
    pub fn remove_element(&self, element: ElementId) {
        self.inner
            .borrow_mut()
            .handlers
            .retain(|(id, _), _| *id != element);
    }

    pub fn handler_count(&self, element: ElementId, routed_event: RoutedEvent) -> usize {
        self.inner
            .borrow()
            .handlers
            .get(&(element, routed_event))
            .map_or(0, Vec::len)
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.handlers.clear();
        inner.next_id = 0;
    }

    // Snapshot so handlers may register or remove handlers while running.
    fn handlers_for(
        &self,
        element: ElementId,
        routed_event: RoutedEvent,
    ) -> Vec<(EventHandler, HandlerOptions)> {
        self.inner
            .borrow()
            .handlers
            .get(&(element, routed_event))
            .map(|list| {
                list.iter()
                    .map(|reg| (reg.handler.clone(), reg.options))
                    .collect()
            })
            .unwrap_or_default()
    }
}

// =============================================================================
// EVENT ROUTE
// =============================================================================

/// Element path an event travels, target first.
pub struct EventRoute {
    path: Vec<ElementRef>,
}

impl EventRoute {
    /// `path` runs from the event target up to the root.
    pub fn new(path: Vec<ElementRef>) -> Self {
        Self { path }
    }

    pub fn target(&self) -> Option<&ElementRef> {
        self.path.first()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    fn ordered(&self, strategy: RoutingStrategy) -> Vec<&ElementRef> {
        match strategy {
            RoutingStrategy::Direct => self.path.iter().take(1).collect(),
            RoutingStrategy::Bubble => self.path.iter().collect(),
            RoutingStrategy::Tunnel => self.path.iter().rev().collect(),
        }
    }

    /// Raise one event along the route. Returns whether it ended handled.
    pub fn raise(&self, registry: &HandlerRegistry, event: &KeyboardEvent) -> bool {
        let routed_event = event.routed_event();
        let input = event.input();

        for element in self.ordered(routed_event.strategy) {
            for (handler, options) in registry.handlers_for(element.id(), routed_event) {
                if input.handled() && !options.handled_events_too {
                    continue;
                }
                tracing::trace!(
                    event = %routed_event,
                    element = %element.name(),
                    "invoking handler"
                );
                event.invoke_handler(&handler, element.as_ref());
            }
        }

        input.handled()
    }

    /// Raise a sequence of events, such as the preview/bubble pair from
    /// [`KeyboardDevice::process_key`](super::KeyboardDevice::process_key).
    ///
    /// A handled tunnel event marks the event that follows it handled before
    /// it is raised. Returns whether any event ended handled.
    pub fn raise_all(&self, registry: &HandlerRegistry, events: &[KeyboardEvent]) -> bool {
        let mut any_handled = false;
        let mut carry = false;

        for event in events {
            if carry {
                event.input().set_handled(true);
            }
            let handled = self.raise(registry, event);
            carry = handled && event.routed_event().is_preview();
            any_handled |= handled;
        }

        any_handled
    }
}

// =============================================================================
// TESTS
// =============================================================================
