//! Placard - position-based rendering of content items.
//!
//! Layouts declare named positions; a configuration store assigns item
//! elements to those positions per application group, item type and layout.
//! The [`ItemRenderer`] checks which positions produce output and renders
//! them, filtering elements by access and value presence and announcing
//! display events around items and elements.
//!
//! Template resolution is left to a [`TemplateEngine`] supplied by the
//! caller.

pub mod config;
pub mod event;
pub mod layout;
pub mod positions;

mod context;
mod error;
mod renderer;
mod store;
mod template;

pub use placard_core::{element, item, params, user, value};

pub use context::RenderContext;
pub use error::PlacardError;
pub use renderer::{ItemRenderer, ItemRendererBuilder};
pub use template::{TemplateArgs, TemplateEngine};
