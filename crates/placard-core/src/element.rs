//! Elements: the typed, positionable fields of an item.
//!
//! The renderer only needs three facts about an element: whether the acting
//! user may see it, whether it has a value for a given parameter record, and
//! the HTML of its value. [`Element`] captures exactly that. [`Field`] is a
//! plain implementation backed by a list of text values, used for items
//! loaded from TOML.

use serde::Deserialize;

use crate::{params::Params, user::User};

/// A named field of an item that can be placed in a layout position.
pub trait Element {
    /// The element type, e.g. `"text"` or `"image"`.
    fn kind(&self) -> &str;

    /// Whether `user` may see this element.
    fn can_access(&self, user: &User) -> bool;

    /// Whether the element produces a value for the given parameters.
    fn has_value(&self, params: &Params) -> bool;

    /// Renders the element value as HTML.
    fn render(&self, params: &Params) -> String;
}

/// Who may see a [`Field`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Everyone, including guests.
    #[default]
    Public,
    /// Any signed-in user.
    Registered,
    /// Members of the named group.
    Group(String),
}

impl Access {
    /// Evaluates this access rule for `user`.
    pub fn allows(&self, user: &User) -> bool {
        match self {
            Self::Public => true,
            Self::Registered => !user.is_guest(),
            Self::Group(group) => user.in_group(group),
        }
    }
}

/// A text-valued element.
///
/// ```
/// # use placard_core::{element::{Access, Element, Field}, params::Params, user::User};
/// let field = Field::new("text", ["Hello", "World"]).with_access(Access::Registered);
///
/// assert!(!field.can_access(&User::guest()));
/// assert!(field.has_value(&Params::new("title", "full", "title", 0)));
/// assert_eq!(field.render(&Params::new("title", "full", "title", 0)), "Hello, World");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Field {
    #[serde(default = "default_kind")]
    kind: String,

    #[serde(default)]
    values: Vec<String>,

    #[serde(default)]
    access: Access,
}

fn default_kind() -> String {
    "text".to_string()
}

impl Field {
    /// Creates a public field with the given values.
    pub fn new<I, S>(kind: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: kind.into(),
            values: values.into_iter().map(Into::into).collect(),
            access: Access::Public,
        }
    }

    /// Restricts who may see the field.
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn access(&self) -> &Access {
        &self.access
    }
}

impl Element for Field {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn can_access(&self, user: &User) -> bool {
        self.access.allows(user)
    }

    fn has_value(&self, _params: &Params) -> bool {
        self.values.iter().any(|value| !value.trim().is_empty())
    }

    /// Joins the non-blank values with the `separator` option (`", "` by
    /// default), escaping HTML.
    fn render(&self, params: &Params) -> String {
        let separator = params
            .get("separator")
            .and_then(|value| value.as_str())
            .unwrap_or(", ");

        self.values
            .iter()
            .filter(|value| !value.trim().is_empty())
            .map(|value| escape_html(value))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Escapes the HTML special characters of `text`.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
