//! Event dispatch for widgets.
//!
//! [`EventDispatcher`] holds a single callback slot per payload type;
//! [`EventLog`] is the string-event variant that writes to the tracing
//! sink instead of dispatching.

/// Single-subscriber callback holder for events of type `T`.
///
/// At most one callback is registered at a time; registering replaces,
/// never adds. Triggering with no callback is a no-op.
///
/// # Example
///
/// ```
/// use mullion_widgets::EventDispatcher;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let mut dispatcher = EventDispatcher::new();
/// let seen = Rc::new(Cell::new(0));
/// let sink = Rc::clone(&seen);
/// dispatcher.set_callback(move |event: &i32| sink.set(*event));
/// dispatcher.trigger(&5);
/// assert_eq!(seen.get(), 5);
/// ```
pub struct EventDispatcher<T> {
    callback: Option<Box<dyn FnMut(&T)>>,
}

impl<T> EventDispatcher<T> {
    pub fn new() -> Self {
        Self { callback: None }
    }

    /// Register a callback, replacing any previous one.
    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Invoke the registered callback with `event`, if one is present.
    pub fn trigger(&mut self, event: &T) {
        if let Some(callback) = &mut self.callback {
            callback(event);
        }
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl<T> Default for EventDispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EventDispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("has_callback", &self.has_callback())
            .finish()
    }
}

/// String-event variant that logs instead of dispatching.
///
/// A separate type rather than a callback registration: events routed here
/// bypass the callback slot entirely and land in the tracing sink under
/// the `mullion::events` target.
#[derive(Debug, Default)]
pub struct EventLog;

impl EventLog {
    pub fn new() -> Self {
        Self
    }

    /// Write an event message to the logging sink.
    pub fn log_event(&self, message: &str) {
        tracing::info!(target: "mullion::events", "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_trigger_without_callback_is_noop() {
        let mut dispatcher = EventDispatcher::<i32>::new();
        assert!(!dispatcher.has_callback());
        dispatcher.trigger(&5);
    }

    #[test]
    fn test_trigger_invokes_callback_once() {
        let mut dispatcher = EventDispatcher::new();
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        dispatcher.set_callback(move |event: &i32| {
            assert_eq!(*event, 5);
            sink.set(sink.get() + 1);
        });

        dispatcher.trigger(&5);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_set_callback_replaces_previous() {
        let mut dispatcher = EventDispatcher::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let sink = Rc::clone(&first);
        dispatcher.set_callback(move |_: &u8| sink.set(sink.get() + 1));
        let sink = Rc::clone(&second);
        dispatcher.set_callback(move |_: &u8| sink.set(sink.get() + 1));

        dispatcher.trigger(&0);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_callback_can_mutate_captured_state() {
        let mut dispatcher = EventDispatcher::new();
        let mut total = 0;
        let sum = Rc::new(Cell::new(0));
        let sink = Rc::clone(&sum);
        dispatcher.set_callback(move |event: &i32| {
            total += *event;
            sink.set(total);
        });

        dispatcher.trigger(&2);
        dispatcher.trigger(&3);
        assert_eq!(sum.get(), 5);
    }

    #[test]
    fn test_event_log_does_not_panic_without_subscriber() {
        let log = EventLog::new();
        log.log_event("widget created");
    }
}
