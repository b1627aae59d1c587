//! Category registry
//!
//! Holds the ordered set of expense category names. Names are unique
//! case-sensitively and kept in insertion order, which is significant for
//! display. Removing a category does not touch transactions that reference
//! it; they keep the stale label.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};
use crate::storage::file_io::{read_json, write_json_atomic};

/// Categories seeded on first run, when no categories file exists yet
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Food & Dining",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Shopping",
    "Education",
    "Other",
];

/// Serializable category file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<String>,
}

/// Ordered set of expense category names with write-through persistence
pub struct CategoryRegistry {
    path: PathBuf,
    data: RwLock<Vec<String>>,
}

impl CategoryRegistry {
    /// Create a new registry backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk, seeding the default list when no file
    /// exists yet
    pub fn load(&self) -> TrackerResult<()> {
        let categories = if self.path.exists() {
            let file_data: CategoryData = read_json(&self.path)?;
            file_data.categories
        } else {
            DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = categories;
        Ok(())
    }

    /// Add a category, trimming whitespace
    ///
    /// Fails with a validation error when the trimmed name is empty and with
    /// a duplicate error when the name is already present (case-sensitive).
    pub fn add(&self, name: &str) -> TrackerResult<String> {
        let name = name.trim();

        if name.is_empty() {
            return Err(TrackerError::Validation("Category name is required".into()));
        }

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.iter().any(|c| c == name) {
            return Err(TrackerError::duplicate_category(name));
        }

        data.push(name.to_string());
        self.persist(&data)?;

        Ok(name.to_string())
    }

    /// Remove a category if present; idempotent, no error when absent
    pub fn remove(&self, name: &str) -> TrackerResult<bool> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|c| c != name);
        let removed = data.len() != before;

        if removed {
            self.persist(&data)?;
        }

        Ok(removed)
    }

    /// Get all categories in insertion order
    pub fn list(&self) -> TrackerResult<Vec<String>> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Check whether a category name is registered (case-sensitive)
    pub fn contains(&self, name: &str) -> TrackerResult<bool> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().any(|c| c == name))
    }

    fn persist(&self, data: &[String]) -> TrackerResult<()> {
        let file_data = CategoryData {
            categories: data.to_vec(),
        };
        write_json_atomic(&self.path, &file_data)
    }
}
