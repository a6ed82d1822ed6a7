//! Layout paths and the positions each layout declares.
//!
//! Layouts are addressed by dotted paths whose last segment is the layout
//! name: `item.full` is the `full` layout of the `item` renderer directory.
//! A directory declares its layouts in `positions.toml`:
//!
//! ```toml
//! [full]
//! name = "Full"
//!
//! [full.positions]
//! title = "Title"
//! meta = "Meta"
//! content = "Content"
//! ```
//!
//! Declaration order of positions is preserved.

use std::{path::PathBuf, rc::Rc};

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::{error::PlacardError, store::FileCache};

/// File declaring the layouts of a renderer directory.
pub const POSITIONS_FILE: &str = "positions.toml";

/// Returns the layout name of a dotted layout path (its last segment).
///
/// ```
/// # use placard::layout::layout_name;
/// assert_eq!(layout_name("item.full"), "full");
/// assert_eq!(layout_name("element.default"), "default");
/// assert_eq!(layout_name("teaser"), "teaser");
/// ```
pub fn layout_name(path: &str) -> &str {
    split_layout_path(path).1
}

/// Splits a dotted layout path into its directory and layout name.
///
/// A path without separator has an empty directory.
pub fn split_layout_path(path: &str) -> (&str, &str) {
    path.rsplit_once('.').unwrap_or(("", path))
}

/// The positions declared by one layout.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LayoutPositions {
    /// Human readable layout name.
    #[serde(default)]
    name: Option<String>,

    /// Position names mapped to their titles, in declaration order.
    #[serde(default)]
    positions: IndexMap<String, String>,
}

impl LayoutPositions {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Declared position names in declaration order.
    pub fn positions(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
struct LayoutDeclarations(IndexMap<String, LayoutPositions>);

/// Lookup of declared positions per layout path, cached per directory.
pub struct PositionCatalog {
    files: FileCache<LayoutDeclarations>,
}

impl PositionCatalog {
    /// Creates an empty in-memory catalog.
    pub fn new() -> Self {
        Self {
            files: FileCache::new(None, POSITIONS_FILE),
        }
    }

    /// Creates a catalog reading `<root>/<dir>/positions.toml` on demand.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            files: FileCache::new(Some(root.into()), POSITIONS_FILE),
        }
    }

    /// Registers the declarations of renderer directory `dir` from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PlacardError::Config`] if `source` is not a valid
    /// declaration file.
    pub fn insert_str(&self, dir: &str, source: &str) -> Result<(), PlacardError> {
        self.files.insert_str(dir, source)
    }

    /// Returns the positions declared for the layout at `path`, or `None`
    /// when the directory or the layout is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration file exists but cannot be read or
    /// parsed.
    pub fn positions(&self, path: &str) -> Result<Option<LayoutPositions>, PlacardError> {
        let (dir, layout) = split_layout_path(path);
        let declarations: Rc<LayoutDeclarations> = self.files.load(dir)?;
        let positions = declarations.0.get(layout).cloned();
        if positions.is_none() {
            debug!(path; "Layout declares no positions");
        }
        Ok(positions)
    }
}

impl Default for PositionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PositionCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionCatalog")
            .field("root", &self.files.root())
            .finish()
    }
}
