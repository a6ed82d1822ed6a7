//! The seam to the template engine.
//!
//! Placard does not resolve or evaluate templates itself. A
//! [`TemplateEngine`] turns a template name plus [`TemplateArgs`] into HTML,
//! and may call back into the [`ItemRenderer`] it is given to render or check
//! positions of the current item.

use placard_core::{element::Element, item::Item, params::Params, value::ValueMap};

use crate::{context::RenderContext, error::PlacardError, renderer::ItemRenderer};

/// Arguments handed to a template.
pub enum TemplateArgs<'a> {
    /// A layout template, e.g. `item.full`.
    Layout {
        item: Option<&'a dyn Item>,
        vars: &'a ValueMap,
    },
    /// An element template, `element.<style>`.
    Element {
        element: &'a dyn Element,
        params: &'a Params,
    },
}

/// Renders named templates.
pub trait TemplateEngine {
    /// Renders `template` with `args`.
    ///
    /// `ctx` is scoped to this template: its layout is the last segment of
    /// `template`. Nested calls made through `renderer` with `ctx` cannot
    /// affect the caller's context.
    ///
    /// # Errors
    ///
    /// Implementations return [`PlacardError::Template`] for unknown or
    /// failing templates and propagate errors from nested renderer calls.
    fn render(
        &self,
        renderer: &ItemRenderer,
        ctx: &RenderContext<'_>,
        template: &str,
        args: &TemplateArgs<'_>,
    ) -> Result<String, PlacardError>;
}
