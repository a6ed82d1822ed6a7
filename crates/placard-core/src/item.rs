//! Items: the content records being displayed.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::element::{Element, Field};

/// A content record with named elements.
///
/// Position configuration is scoped by the item's application group and
/// content type, so both are part of the contract.
pub trait Item {
    /// Identifier used in logs and diagnostics.
    fn id(&self) -> &str;

    /// Application group the item belongs to, e.g. `"blog"`.
    fn group(&self) -> &str;

    /// Content type identifier, e.g. `"article"`.
    fn type_id(&self) -> &str;

    /// Resolves an element by name.
    fn element(&self, name: &str) -> Option<&dyn Element>;
}

/// An item whose elements are [`Field`]s, loadable from TOML.
///
/// ```
/// # use placard_core::item::{Item, Record};
/// let record: Record = toml::from_str(r#"
///     id = "hello"
///     group = "blog"
///     type = "article"
///
///     [elements.title]
///     values = ["Hello"]
/// "#).unwrap();
///
/// assert_eq!(record.type_id(), "article");
/// assert!(record.element("title").is_some());
/// assert!(record.element("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Record {
    id: String,
    group: String,
    #[serde(rename = "type")]
    type_id: String,
    #[serde(default)]
    elements: IndexMap<String, Field>,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        group: impl Into<String>,
        type_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            type_id: type_id.into(),
            elements: IndexMap::new(),
        }
    }

    /// Adds or replaces an element.
    pub fn with_element(mut self, name: impl Into<String>, field: Field) -> Self {
        self.elements.insert(name.into(), field);
        self
    }
}

impl Item for Record {
    fn id(&self) -> &str {
        &self.id
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn type_id(&self) -> &str {
        &self.type_id
    }

    fn element(&self, name: &str) -> Option<&dyn Element> {
        self.elements.get(name).map(|field| field as &dyn Element)
    }
}
