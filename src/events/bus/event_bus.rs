// events/bus/event_bus.rs
//
// Core event bus implementation.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately in subscription order
// 2. Deterministic - same events → same result
// 3. Type-safe - events are strongly typed
// 4. No magic - explicit, straightforward code

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::events::types::DomainEvent;

/// Type-erased event handler function
/// Takes a reference to Any (downcasted to concrete event type inside)
type EventHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// The Event Bus
///
/// Central coordination point for domain events. Services emit facts here;
/// subscribers (including the host UI layer) react without either side
/// depending on the other.
///
/// Handlers run on the emitting thread, in subscription order. A panicking
/// handler is isolated so the remaining handlers still execute.
pub struct EventBus {
    /// Map from event TypeId to list of handlers
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Subscribe to a specific event type.
    ///
    /// Example:
    /// ```ignore
    /// bus.subscribe::<SubtypeOptionsFetched, _>(|event| {
    ///     println!("options for {}: {}", event.resource_type, event.payload);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<E>();

        // Wrap the typed handler in a type-erased closure
        let wrapped: EventHandler = Box::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            } else {
                log::error!(
                    "failed to downcast event in handler for {}",
                    std::any::type_name::<E>()
                );
            }
        });

        let mut handlers = self.handlers.write().unwrap();
        handlers.entry(type_id).or_insert_with(Vec::new).push(wrapped);
    }

    /// Emit an event.
    ///
    /// Executes all handlers for this event type in subscription order and
    /// returns once they have run (synchronous).
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let type_id = TypeId::of::<E>();

        let handlers = self.handlers.read().unwrap();
        let event_handlers = handlers.get(&type_id);
        let handler_count = event_handlers.map(|h| h.len()).unwrap_or(0);

        log::debug!(
            "[EVENT] {} (id: {}) | {} handlers",
            event.event_type(),
            event.event_id(),
            handler_count
        );

        if let Some(handlers) = event_handlers {
            for (idx, handler) in handlers.iter().enumerate() {
                // Catch panics to prevent one handler from breaking others
                let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    handler(&event as &dyn Any);
                }));

                if result.is_err() {
                    log::error!("handler {} for {} panicked", idx, event.event_type());
                }
            }
        }
    }

    /// Get the number of subscribers for a specific event type
    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        let type_id = TypeId::of::<E>();
        let handlers = self.handlers.read().unwrap();
        handlers.get(&type_id).map(|h| h.len()).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Make EventBus cloneable (shared reference)
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Visibility;
    use crate::events::types::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<ResourceTypeChanged, _>(move |_event| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(ResourceTypeChanged::new("doc".to_string()));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_multiple_handlers_execute_in_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(RwLock::new(Vec::new()));

        let seq1 = Arc::clone(&sequence);
        bus.subscribe::<SubtypeVisibilityChanged, _>(move |_| {
            seq1.write().unwrap().push(1);
        });

        let seq2 = Arc::clone(&sequence);
        bus.subscribe::<SubtypeVisibilityChanged, _>(move |_| {
            seq2.write().unwrap().push(2);
        });

        let seq3 = Arc::clone(&sequence);
        bus.subscribe::<SubtypeVisibilityChanged, _>(move |_| {
            seq3.write().unwrap().push(3);
        });

        bus.emit(SubtypeVisibilityChanged::new(
            "obs".to_string(),
            Visibility::Hidden,
        ));

        let result = sequence.read().unwrap();
        assert_eq!(*result, vec![1, 2, 3]);
    }

    #[test]
    fn test_subscriber_count() {
        let bus = EventBus::new();

        assert_eq!(bus.subscriber_count::<ResourceTypeChanged>(), 0);

        bus.subscribe::<ResourceTypeChanged, _>(|_| {});
        assert_eq!(bus.subscriber_count::<ResourceTypeChanged>(), 1);

        bus.subscribe::<ResourceTypeChanged, _>(|_| {});
        assert_eq!(bus.subscriber_count::<ResourceTypeChanged>(), 2);

        // Different event type
        assert_eq!(bus.subscriber_count::<SubtypeFetchFailed>(), 0);
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        // First handler panics
        bus.subscribe::<SubtypeFetchFailed, _>(|_| {
            panic!("Intentional panic");
        });

        // Second handler should still execute
        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<SubtypeFetchFailed, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(SubtypeFetchFailed::new(
            "doc".to_string(),
            "error".to_string(),
            "boom".to_string(),
        ));

        // Second handler executed despite first one panicking
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
