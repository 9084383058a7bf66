//! Widget trait and concrete variants.

use std::any::Any;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a widget instance.
///
/// Allocated from a process-wide counter starting at 1; niche-optimized so
/// `Option<WidgetId>` costs nothing extra.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(NonZeroU64);

impl WidgetId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        let raw = NEXT.fetch_add(1, Ordering::Relaxed);
        // The counter starts at 1 and only increments
        Self(unsafe { NonZeroU64::new(raw).unwrap_unchecked() })
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

static_assertions::assert_eq_size!(WidgetId, Option<WidgetId>);

/// Base trait for all widgets.
///
/// Widgets are headless: `render` produces the widget's textual output
/// instead of drawing to a backend, and `update` advances per-frame state.
pub trait Widget: Any {
    /// Get the widget's unique identifier.
    fn id(&self) -> WidgetId;

    /// Get the widget's name.
    fn name(&self) -> &str;

    /// Set the widget's name.
    fn set_name(&mut self, name: &str);

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Produce the widget's render output.
    fn render(&self) -> String;

    /// Advance per-frame state. `delta_time` is in seconds.
    fn update(&mut self, delta_time: f32);

    /// Get the widget's name for debugging.
    fn debug_name(&self) -> &str {
        "Widget"
    }

    /// Get widget type as Any for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get mutable widget type as Any for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone the widget into a box. The clone keeps the same [`WidgetId`].
    fn clone_box(&self) -> Box<dyn Widget>;
}

impl std::fmt::Debug for dyn Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(self.debug_name())
            .field("id", &self.id())
            .field("name", &self.name())
            .finish()
    }
}

impl Clone for Box<dyn Widget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Button widget - pressable with a latched state.
#[derive(Clone)]
pub struct Button {
    id: WidgetId,
    name: String,
    visible: bool,
    pressed: bool,
}

impl Button {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            name: name.into(),
            visible: true,
            pressed: false,
        }
    }

    /// Latch the button into the pressed state.
    ///
    /// There is no un-press operation; `pressed` stays `true` for the rest
    /// of the widget's life.
    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl Widget for Button {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn render(&self) -> String {
        format!("Rendering button: {}", self.name)
    }

    fn update(&mut self, _delta_time: f32) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

/// Label widget - displays text.
#[derive(Clone)]
pub struct Label {
    id: WidgetId,
    name: String,
    visible: bool,
    text: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            name: name.into(),
            visible: true,
            text: String::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Get the current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text content (for incremental updates).
    /// Returns true if the content changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text != text {
            self.text = text.to_string();
            true
        } else {
            false
        }
    }
}

impl Widget for Label {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn render(&self) -> String {
        format!("Rendering label: {} [{}]", self.name, self.text)
    }

    fn update(&mut self, _delta_time: f32) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}
