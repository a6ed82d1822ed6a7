//! Call-scoped rendering state.

use std::fmt;

use placard_core::item::Item;

use crate::error::PlacardError;

/// The item and layout a render or check operates on.
///
/// Contexts are small `Copy` values passed down every call. Nested renders
/// derive their own context, so the caller's item and layout are never
/// changed by what happens below it.
#[derive(Clone, Copy, Default)]
pub struct RenderContext<'a> {
    item: Option<&'a dyn Item>,
    layout: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    /// Creates a context from its optional parts.
    pub fn new(item: Option<&'a dyn Item>, layout: Option<&'a str>) -> Self {
        Self { item, layout }
    }

    /// A context rendering `item` in `layout`.
    ///
    /// ```
    /// # use placard::{RenderContext, item::{Item, Record}};
    /// let record = Record::new("1", "blog", "article");
    /// let ctx = RenderContext::for_item(&record, "full");
    /// assert_eq!(ctx.layout(), Some("full"));
    /// assert_eq!(ctx.item().map(|item| item.id()), Some("1"));
    /// ```
    pub fn for_item(item: &'a dyn Item, layout: &'a str) -> Self {
        Self::new(Some(item), Some(layout))
    }

    pub fn item(&self) -> Option<&'a dyn Item> {
        self.item
    }

    pub fn layout(&self) -> Option<&'a str> {
        self.layout
    }

    /// Derives a context with the same item and another layout.
    pub fn with_layout<'b>(&self, layout: &'b str) -> RenderContext<'b>
    where
        'a: 'b,
    {
        RenderContext {
            item: self.item,
            layout: Some(layout),
        }
    }

    /// Returns the item and layout, failing if either is unset.
    pub(crate) fn require(
        &self,
        position: &str,
    ) -> Result<(&'a dyn Item, &'a str), PlacardError> {
        let item = self.item.ok_or_else(|| PlacardError::MissingItem {
            position: position.to_string(),
        })?;
        let layout = self.layout.ok_or_else(|| PlacardError::MissingLayout {
            position: position.to_string(),
        })?;
        Ok((item, layout))
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("item", &self.item.map(|item| item.id()))
            .field("layout", &self.layout)
            .finish()
    }
}
