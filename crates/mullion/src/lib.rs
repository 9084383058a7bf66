//! Mullion - a headless widget-toolkit core
//!
//! Mullion provides small, reusable UI-toolkit abstractions with no
//! rendering backend:
//!
//! - **Bounded collections**: a capacity-bounded container with reported
//!   overflow instead of silent drops
//! - **Widget hierarchy**: a polymorphic [`Widget`](widgets::Widget) trait
//!   with textual rendering and concrete variants
//! - **Event dispatch**: a single-subscriber callback holder per payload
//!   type, plus a string-event variant that logs instead
//! - **Widget factory**: string-tag construction with an explicit
//!   create/destroy lifecycle
//!
//! # Quick Start
//!
//! ```
//! use mullion::collections::BoundedVec;
//! use mullion::widgets::{Widget, WidgetFactory};
//!
//! let mut factory = WidgetFactory::new();
//! let widget = factory.create("button", "Ok").unwrap();
//!
//! let mut panel: BoundedVec<Box<dyn Widget>> = BoundedVec::with_capacity(8);
//! panel.push(widget).unwrap();
//!
//! for widget in &panel {
//!     println!("{}", widget.render());
//! }
//! ```

// Re-export core types
pub use mullion_core as core;
pub use mullion_core::collections;
pub use mullion_core::config::Config;
pub use mullion_core::logging::LogLevel;
pub use mullion_core::{logging, math};

// Re-export sub-crates based on features
#[cfg(feature = "widgets")]
pub use mullion_widgets as widgets;

#[cfg(feature = "widgets")]
pub use mullion_widgets::{
    Button, EventDispatcher, EventLog, Label, Widget, WidgetError, WidgetFactory, WidgetId,
    WidgetResult,
};
