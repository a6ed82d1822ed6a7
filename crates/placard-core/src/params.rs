//! Parameter records passed to elements and templates.
//!
//! # Overview
//!
//! - [`Params`] - The per-element record built while checking or rendering a
//!   position. Named fields carry the metadata the renderer computes; the
//!   `extra` map carries descriptor data and caller pass-through values.
//! - [`PositionArgs`] - Caller arguments for rendering one position.
//! - [`LayoutArgs`] - Caller arguments for rendering a whole layout.

use crate::{
    item::Item,
    value::{Value, ValueMap},
};

/// Parameters for a single element within a position.
///
/// Built from a position descriptor (`element` plus display options), the
/// layout and position being processed and the descriptor's index. The
/// `first`/`last` flags are only known once the surviving element set of a
/// render is known, so they are `None` during existence checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    element: String,
    layout: String,
    position: String,
    index: usize,
    first: Option<bool>,
    last: Option<bool>,
    style: Option<String>,
    extra: ValueMap,
}

impl Params {
    /// Creates a parameter record for the descriptor at `index` of `position`.
    pub fn new(
        element: impl Into<String>,
        layout: impl Into<String>,
        position: impl Into<String>,
        index: usize,
    ) -> Self {
        Self {
            element: element.into(),
            layout: layout.into(),
            position: position.into(),
            index,
            first: None,
            last: None,
            style: None,
            extra: ValueMap::new(),
        }
    }

    /// Adds descriptor display options, overriding keys already present.
    pub fn with_extra<'a>(
        mut self,
        values: impl IntoIterator<Item = (&'a String, &'a Value)>,
    ) -> Self {
        for (key, value) in values {
            self.extra.insert(key.clone(), value.clone());
        }
        self
    }

    /// Merges caller arguments on top of the descriptor options.
    ///
    /// Caller keys win over descriptor keys. An explicit style is recorded so
    /// element templates can see which style selected them.
    pub fn with_args(mut self, args: &PositionArgs) -> Self {
        if let Some(style) = args.style() {
            self.style = Some(style.to_string());
        }
        self.with_extra(args.extra())
    }

    /// Sets the positional flags within the rendered element set.
    ///
    /// Same-named display options are dropped so they cannot contradict the
    /// computed flags.
    pub fn with_bounds(mut self, first: bool, last: bool) -> Self {
        self.extra.shift_remove("first");
        self.extra.shift_remove("last");
        self.first = Some(first);
        self.last = Some(last);
        self
    }

    /// Name of the element this record was built for.
    pub fn element(&self) -> &str {
        &self.element
    }

    /// Layout being rendered.
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Position being rendered.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Index of the descriptor in the position configuration.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this is the first rendered element, if known.
    pub fn first(&self) -> Option<bool> {
        self.first
    }

    /// Whether this is the last rendered element, if known.
    pub fn last(&self) -> Option<bool> {
        self.last
    }

    /// Style explicitly requested by the caller.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Display options from the descriptor and the caller.
    pub fn extra(&self) -> &ValueMap {
        &self.extra
    }

    /// Looks up a display option.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Looks up a boolean display option, treating absence as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }
}

/// Arguments for rendering one position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionArgs {
    style: Option<String>,
    extra: ValueMap,
}

impl PositionArgs {
    /// Creates empty arguments: default style, no pass-through values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the element template style (`element.<style>`).
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Adds a pass-through value for element templates.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The requested style, if any.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Pass-through values.
    pub fn extra(&self) -> &ValueMap {
        &self.extra
    }
}

/// Arguments for rendering a layout.
///
/// The item is optional: static layouts render without one.
#[derive(Clone, Default)]
pub struct LayoutArgs<'a> {
    item: Option<&'a dyn Item>,
    vars: ValueMap,
}

impl<'a> LayoutArgs<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments rendering `item`.
    pub fn for_item(item: &'a dyn Item) -> Self {
        Self {
            item: Some(item),
            vars: ValueMap::new(),
        }
    }

    /// Adds a template variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn item(&self) -> Option<&'a dyn Item> {
        self.item
    }

    pub fn vars(&self) -> &ValueMap {
        &self.vars
    }
}

impl std::fmt::Debug for LayoutArgs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutArgs")
            .field("item", &self.item.map(|item| item.id()))
            .field("vars", &self.vars)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> ValueMap {
        let mut map = ValueMap::new();
        map.insert("link".to_string(), Value::Bool(false));
        map.insert("label".to_string(), Value::from("Title"));
        map
    }

    #[test]
    fn test_new_has_no_bounds() {
        let params = Params::new("name", "full", "title", 2);
        assert_eq!(params.element(), "name");
        assert_eq!(params.layout(), "full");
        assert_eq!(params.position(), "title");
        assert_eq!(params.index(), 2);
        assert_eq!(params.first(), None);
        assert_eq!(params.last(), None);
    }

    #[test]
    fn test_args_override_descriptor() {
        let args = PositionArgs::new().with("link", true).with("class", "big");
        let params = Params::new("name", "full", "title", 0)
            .with_extra(&descriptor())
            .with_args(&args);

        assert!(params.flag("link"));
        assert_eq!(params.get("label").and_then(Value::as_str), Some("Title"));
        assert_eq!(params.get("class").and_then(Value::as_str), Some("big"));
        assert_eq!(params.style(), None);
    }

    #[test]
    fn test_explicit_style_recorded() {
        let args = PositionArgs::new().with_style("block");
        let params = Params::new("name", "full", "title", 0).with_args(&args);
        assert_eq!(params.style(), Some("block"));
    }

    #[test]
    fn test_with_bounds() {
        let params = Params::new("name", "full", "title", 0).with_bounds(true, false);
        assert_eq!(params.first(), Some(true));
        assert_eq!(params.last(), Some(false));
    }

    #[test]
    fn test_bounds_replace_display_options() {
        let args = PositionArgs::new().with("first", false).with("last", true);
        let params = Params::new("name", "full", "title", 0)
            .with_args(&args)
            .with_bounds(true, false);

        assert_eq!(params.first(), Some(true));
        assert_eq!(params.last(), Some(false));
        assert_eq!(params.get("first"), None);
        assert_eq!(params.get("last"), None);
    }

    #[test]
    fn test_flag_defaults_to_false() {
        let params = Params::new("name", "full", "title", 0).with_extra(&descriptor());
        assert!(!params.flag("link"));
        assert!(!params.flag("missing"));
    }
}
