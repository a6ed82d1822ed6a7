//! Cached loading of per-directory TOML files.
//!
//! Renderer directories are addressed by dotted paths (`item`, `item.teaser`)
//! relative to a root. Each store reads one file name per directory and keeps
//! the parsed result for the lifetime of the store.

use std::{
    cell::RefCell,
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    rc::Rc,
};

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::error::PlacardError;

/// A lazily populated cache of parsed files, keyed by dotted directory path.
///
/// Without a root the cache only holds what was inserted explicitly.
pub(crate) struct FileCache<T> {
    root: Option<PathBuf>,
    file_name: &'static str,
    entries: RefCell<HashMap<String, Rc<T>>>,
}

impl<T: DeserializeOwned + Default> FileCache<T> {
    pub(crate) fn new(root: Option<PathBuf>, file_name: &'static str) -> Self {
        Self {
            root,
            file_name,
            entries: RefCell::new(HashMap::new()),
        }
    }

    pub(crate) fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Returns the parsed file for `dir`, reading it on first access.
    ///
    /// A missing file, an invalid directory path or a cache without root all
    /// yield `T::default()`.
    pub(crate) fn load(&self, dir: &str) -> Result<Rc<T>, PlacardError> {
        if let Some(cached) = self.entries.borrow().get(dir) {
            return Ok(Rc::clone(cached));
        }

        let value = match &self.root {
            Some(root) => match dir_path(dir) {
                Some(relative) => read_toml(&root.join(relative).join(self.file_name))?,
                None => {
                    warn!(dir; "Ignoring invalid renderer directory");
                    T::default()
                }
            },
            None => T::default(),
        };

        let value = Rc::new(value);
        self.entries
            .borrow_mut()
            .insert(dir.to_string(), Rc::clone(&value));
        Ok(value)
    }

    /// Parses `source` and stores it as the file for `dir`.
    pub(crate) fn insert_str(&self, dir: &str, source: &str) -> Result<(), PlacardError> {
        let path = Path::new(dir).join(self.file_name);
        let value: T = toml::from_str(source)
            .map_err(|err| PlacardError::new_config_error(path, err.to_string()))?;
        self.entries
            .borrow_mut()
            .insert(dir.to_string(), Rc::new(value));
        Ok(())
    }
}

fn read_toml<T: DeserializeOwned + Default>(path: &Path) -> Result<T, PlacardError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = path.display().to_string(); "Renderer file not found");
            return Ok(T::default());
        }
        Err(err) => return Err(err.into()),
    };

    debug!(path = path.display().to_string(); "Loading renderer file");
    toml::from_str(&content).map_err(|err| PlacardError::new_config_error(path, err.to_string()))
}

/// Converts a dotted directory path into a relative filesystem path.
///
/// Every segment must be non-empty and consist of ASCII alphanumerics, `_`
/// or `-`.
pub(crate) fn dir_path(dir: &str) -> Option<PathBuf> {
    dir.split('.')
        .map(|segment| is_valid_segment(segment).then_some(segment))
        .collect::<Option<PathBuf>>()
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
