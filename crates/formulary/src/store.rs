use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use indexmap::IndexMap;

use crate::error::FormularyError;

/// Category label mapped to its ordered medication entries
pub type Catalog = IndexMap<String, Vec<String>>;

/// Process-local medication template store backed by a single JSON file
///
/// The in-memory catalog is the working copy; every successful mutation
/// rewrites the whole file atomically so the two never diverge. One store
/// instance owns one file — concurrent processes writing the same file are
/// not coordinated.
#[derive(Debug)]
pub struct FormularyStore {
    path: PathBuf,
    catalog: RwLock<Catalog>,
}

impl FormularyStore {
    /// Open the store, loading the catalog from `path`
    ///
    /// A missing file yields an empty catalog. A file that exists but does
    /// not parse as a map of category to entry list is `CatalogCorrupt`.
    ///
    /// # Errors
    ///
    /// Returns `FormularyError::CatalogCorrupt` when the file is unreadable
    /// or malformed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FormularyError> {
        let path = path.into();
        let catalog = read_catalog(&path)?;

        Ok(Self {
            path,
            catalog: RwLock::new(catalog),
        })
    }

    /// Append `entry` to `category`, creating the category if needed
    ///
    /// Both inputs are trimmed; either being empty after trimming is
    /// `InvalidArgument` and leaves the catalog untouched. New entries
    /// always land at the end of the category. The full catalog is
    /// rewritten to disk before returning; a failed write is retried once,
    /// after which the in-memory append is kept and `Persistence` surfaces
    /// so the caller can decide whether to retry.
    ///
    /// # Errors
    ///
    /// Returns `FormularyError::InvalidArgument` or
    /// `FormularyError::Persistence`.
    pub fn add_entry(&self, category: &str, entry: &str) -> Result<(), FormularyError> {
        let category = category.trim();
        let entry = entry.trim();

        if category.is_empty() {
            return Err(FormularyError::InvalidArgument("category must not be empty"));
        }
        if entry.is_empty() {
            return Err(FormularyError::InvalidArgument("medication entry must not be empty"));
        }

        let mut catalog = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        catalog.entry(category.to_owned()).or_default().push(entry.to_owned());

        tracing::debug!(category, entry, "medication entry added");

        self.persist(&catalog)
    }

    /// Entries where `keyword` occurs literally in the category name or the
    /// entry text, formatted as `[category] entry`
    ///
    /// Matching is case-sensitive with no normalization. The empty keyword
    /// matches every entry. Results follow catalog order: categories by
    /// insertion, entries by insertion within each category.
    pub fn search(&self, keyword: &str) -> Vec<String> {
        let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);

        let mut results = Vec::new();
        for (category, entries) in catalog.iter() {
            for entry in entries {
                if category.contains(keyword) || entry.contains(keyword) {
                    results.push(format!("[{category}] {entry}"));
                }
            }
        }

        results
    }

    /// Snapshot of the full catalog in insertion order
    pub fn list_all(&self) -> Catalog {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of categories in the catalog
    pub fn len(&self) -> usize {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the catalog holds no categories
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn persist(&self, catalog: &Catalog) -> Result<(), FormularyError> {
        if let Err(first) = write_catalog(&self.path, catalog) {
            tracing::warn!(error = %first, path = %self.path.display(), "catalog write failed, retrying");

            write_catalog(&self.path, catalog).map_err(|e| {
                tracing::error!(error = %e, path = %self.path.display(), "catalog write failed after retry");
                FormularyError::Persistence(e)
            })
        } else {
            Ok(())
        }
    }
}

fn read_catalog(path: &Path) -> Result<Catalog, FormularyError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Catalog::new()),
        Err(e) => return Err(FormularyError::CatalogCorrupt(format!("unreadable catalog file: {e}"))),
    };

    serde_json::from_str(&raw).map_err(|e| FormularyError::CatalogCorrupt(e.to_string()))
}

/// Serialize the catalog into a temp file beside its destination, then
/// rename into place
///
/// The rename is the commit point: a crash mid-write leaves the previous
/// file intact. Non-ASCII category and entry text is written literally.
fn write_catalog(path: &Path, catalog: &Catalog) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, catalog)?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
