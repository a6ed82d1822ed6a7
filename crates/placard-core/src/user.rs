//! The acting user that element access checks are evaluated against.

use std::collections::BTreeSet;

/// A user viewing rendered items.
///
/// A user without an id is a guest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    id: Option<String>,
    groups: BTreeSet<String>,
}

impl User {
    /// An anonymous visitor.
    pub fn guest() -> Self {
        Self::default()
    }

    /// A signed-in user.
    pub fn registered(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            groups: BTreeSet::new(),
        }
    }

    /// Adds the user to an access group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_guest(&self) -> bool {
        self.id.is_none()
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest() {
        let user = User::guest();
        assert!(user.is_guest());
        assert_eq!(user.id(), None);
    }

    #[test]
    fn test_registered_with_groups() {
        let user = User::registered("ada").with_group("editors");
        assert!(!user.is_guest());
        assert_eq!(user.id(), Some("ada"));
        assert!(user.in_group("editors"));
        assert!(!user.in_group("admins"));
    }
}
