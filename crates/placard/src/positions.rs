//! Position assignments: which elements render in which position.
//!
//! Assignments live in the configuration store under the renderer's
//! namespace (`item` by default) and are keyed by
//! `<group>.<type>.<layout>`, then by position name. Each position holds an
//! ordered array of descriptors naming an element plus arbitrary display
//! options:
//!
//! ```toml
//! [blog.article.full]
//! title = [{ element = "name" }]
//! meta = [
//!     { element = "author", label = "Written by" },
//!     { element = "created" },
//! ]
//! ```

use std::{path::PathBuf, rc::Rc};

use log::warn;
use serde::Deserialize;

use placard_core::{
    params::Params,
    value::{Value, ValueMap},
};

use crate::{error::PlacardError, store::FileCache};

/// File holding the position assignments of a configuration namespace.
pub const CONFIG_FILE: &str = "config.toml";

/// One element assigned to a position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PositionEntry {
    element: String,

    /// Index of the descriptor in the configured array.
    #[serde(skip)]
    index: usize,

    #[serde(flatten)]
    params: ValueMap,
}

impl PositionEntry {
    pub fn new(element: impl Into<String>, index: usize) -> Self {
        Self {
            element: element.into(),
            index,
            params: ValueMap::new(),
        }
    }

    /// Adds a display option.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Name of the assigned element.
    pub fn element(&self) -> &str {
        &self.element
    }

    /// Index of the descriptor in the configured array.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display options of the assignment.
    pub fn params(&self) -> &ValueMap {
        &self.params
    }

    /// Builds the parameter record for this descriptor in `position` of
    /// `layout`.
    pub fn to_params(&self, layout: &str, position: &str) -> Params {
        Params::new(&self.element, layout, position, self.index).with_extra(&self.params)
    }
}

/// A parsed configuration namespace.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ConfigData(toml::Table);

impl ConfigData {
    /// Looks up a value by dotted path through nested tables.
    pub fn get(&self, path: &str) -> Option<&toml::Value> {
        let mut segments = path.split('.');
        let first = self.0.get(segments.next()?)?;
        segments.try_fold(first, |value, segment| value.as_table()?.get(segment))
    }

    /// Returns the descriptors assigned to `position` under `key`, in
    /// configured order.
    ///
    /// Missing keys yield an empty list. Malformed descriptors are skipped
    /// without shifting the index of the ones after them.
    pub fn position_entries(&self, key: &str, position: &str) -> Vec<PositionEntry> {
        let Some(value) = self.get(key).and_then(|layout| layout.get(position)) else {
            return Vec::new();
        };

        let Some(entries) = value.as_array() else {
            warn!(key, position; "Position configuration is not an array");
            return Vec::new();
        };

        entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match PositionEntry::deserialize(entry.clone()) {
                Ok(entry) => Some(PositionEntry { index, ..entry }),
                Err(err) => {
                    warn!(key, position, index, err:%; "Skipping malformed position entry");
                    None
                }
            })
            .collect()
    }
}

/// Configuration store for position assignments, cached per namespace.
pub struct PositionStore {
    files: FileCache<ConfigData>,
}

impl PositionStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self {
            files: FileCache::new(None, CONFIG_FILE),
        }
    }

    /// Creates a store reading `<root>/<dir>/config.toml` on demand.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            files: FileCache::new(Some(root.into()), CONFIG_FILE),
        }
    }

    /// Registers the configuration of namespace `dir` from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PlacardError::Config`] if `source` is not valid TOML.
    pub fn insert_str(&self, dir: &str, source: &str) -> Result<(), PlacardError> {
        self.files.insert_str(dir, source)
    }

    /// Returns the configuration of namespace `dir`. An absent namespace is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed.
    pub fn config(&self, dir: &str) -> Result<Rc<ConfigData>, PlacardError> {
        self.files.load(dir)
    }
}

impl Default for PositionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PositionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionStore")
            .field("root", &self.files.root())
            .finish()
    }
}
