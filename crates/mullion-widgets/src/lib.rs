//! Mullion Widgets - headless widget hierarchy for the mullion toolkit
//!
//! This crate provides the polymorphic widget layer of mullion:
//! - The [`Widget`] trait with textual rendering and per-frame updates
//! - Concrete variants ([`Button`], [`Label`])
//! - A single-subscriber [`EventDispatcher`] and the logging [`EventLog`]
//! - A [`WidgetFactory`] constructing widgets by string tag with explicit
//!   create/destroy lifecycle
//!
//! ## Quick Start
//!
//! ```
//! use mullion_widgets::{Widget, WidgetFactory};
//!
//! let mut factory = WidgetFactory::new();
//! let widget = factory.create("button", "Ok").unwrap();
//! assert_eq!(widget.render(), "Rendering button: Ok");
//! factory.destroy(widget).unwrap();
//! ```

pub mod error;
pub mod event;
pub mod factory;
pub mod widgets;

pub use error::{WidgetError, WidgetResult};
pub use event::{EventDispatcher, EventLog};
pub use factory::{WidgetConstructor, WidgetFactory};
pub use widgets::{Button, Label, Widget, WidgetId};
