//! Widget factory with explicit create/destroy lifecycle.

use crate::error::{WidgetError, WidgetResult};
use crate::widgets::{Button, Label, Widget, WidgetId};
use indexmap::IndexMap;
use mullion_core::collections::HashSet;

/// Constructor registered for a type tag. Takes the widget name.
pub type WidgetConstructor = fn(&str) -> Box<dyn Widget>;

/// Constructs widget variants by string tag and tracks their lifecycle.
///
/// Every widget created here is recorded as live until handed back through
/// [`WidgetFactory::destroy`]; destroying a widget the factory does not
/// consider live is a reported error, never undefined behavior.
///
/// # Example
///
/// ```
/// use mullion_widgets::WidgetFactory;
///
/// let mut factory = WidgetFactory::new();
/// let widget = factory.create("button", "Ok").unwrap();
/// assert_eq!(factory.live_count(), 1);
/// factory.destroy(widget).unwrap();
/// assert_eq!(factory.live_count(), 0);
/// ```
pub struct WidgetFactory {
    /// Tag to constructor, in registration order.
    constructors: IndexMap<String, WidgetConstructor>,
    /// Ids of widgets created here and not yet destroyed.
    live: HashSet<WidgetId>,
}

impl WidgetFactory {
    /// Create a factory pre-seeded with the built-in tags `"button"` and
    /// `"label"`. Tags are matched exactly (case-sensitive).
    pub fn new() -> Self {
        let mut factory = Self {
            constructors: IndexMap::new(),
            live: HashSet::default(),
        };
        factory.register("button", |name| Box::new(Button::new(name)));
        factory.register("label", |name| Box::new(Label::new(name)));
        factory
    }

    /// Register a constructor for a tag, replacing any previous one.
    pub fn register(&mut self, tag: impl Into<String>, constructor: WidgetConstructor) {
        let tag = tag.into();
        tracing::debug!(target: "mullion::factory", "registering widget tag {:?}", tag);
        self.constructors.insert(tag, constructor);
    }

    /// Construct a widget for `tag` and return exclusive ownership of it.
    ///
    /// The widget's id is recorded as live. An unknown tag fails with
    /// [`WidgetError::UnknownTag`] and leaves the live set untouched.
    pub fn create(&mut self, tag: &str, name: &str) -> WidgetResult<Box<dyn Widget>> {
        let constructor = self
            .constructors
            .get(tag)
            .ok_or_else(|| WidgetError::UnknownTag {
                tag: tag.to_string(),
            })?;

        let widget = constructor(name);
        self.live.insert(widget.id());
        tracing::debug!(
            target: "mullion::factory",
            "created widget {} (tag {:?}, name {:?})",
            widget.id().get(),
            tag,
            name
        );
        Ok(widget)
    }

    /// Take ownership of a widget back and release it.
    ///
    /// Fails with [`WidgetError::AlreadyDestroyed`] when the widget's id is
    /// not live: it was already destroyed through a clone, or it was never
    /// created by this factory.
    pub fn destroy(&mut self, widget: Box<dyn Widget>) -> WidgetResult<()> {
        let id = widget.id();
        if !self.live.remove(&id) {
            return Err(WidgetError::AlreadyDestroyed { id });
        }
        tracing::debug!(target: "mullion::factory", "destroyed widget {}", id.get());
        drop(widget);
        Ok(())
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Number of widgets created here and not yet destroyed.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Whether the given id belongs to a live widget of this factory.
    pub fn is_live(&self, id: WidgetId) -> bool {
        self.live.contains(&id)
    }

    /// Drop all live records. Outstanding widgets remain valid values but
    /// can no longer be destroyed through this factory.
    pub fn clear(&mut self) {
        tracing::debug!(
            target: "mullion::factory",
            "clearing {} live widget records",
            self.live.len()
        );
        self.live.clear();
    }
}

impl Default for WidgetFactory {
    fn default() -> Self {
        Self::new()
    }
}
