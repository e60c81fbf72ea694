//! Defect-type catalog: the read-only table of crystal defects a session uses.
//!
//! The catalog is supplied once at session start by an external provider
//! (a content service or a bundled JSON file) and never changes afterwards.
//! The simulation step only reads `id`, `color` and `score_value`; the session
//! layer reads the text fields to build discovery notifications.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::LoadError;
use crate::types::{Color, DefectId};

/// A category of crystal-lattice imperfection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectType {
    pub id: DefectId,
    /// Display name, e.g. "Vacancy".
    pub name: String,
    /// One-line summary.
    pub description: String,
    /// Longer educational text shown when the type is first destroyed.
    #[serde(default)]
    pub explanation: String,
    pub color: Color,
    /// Points awarded per destroyed instance.
    pub score_value: u32,
}

/// Immutable, ordered set of defect types with lookup by id.
#[derive(Debug, Clone, Default)]
pub struct DefectCatalog {
    types: Vec<DefectType>,
    index: HashMap<DefectId, usize>,
}

impl DefectCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(types: Vec<DefectType>) -> Result<Self, LoadError> {
        let mut index = HashMap::with_capacity(types.len());
        for (i, defect) in types.iter().enumerate() {
            if index.insert(defect.id.clone(), i).is_some() {
                return Err(LoadError::Invalid(format!(
                    "duplicate defect id `{}`",
                    defect.id
                )));
            }
        }
        Ok(Self { types, index })
    }

    /// Parse a JSON array of defect types.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let types: Vec<DefectType> = serde_json::from_str(json)?;
        Self::new(types)
    }

    /// Read and parse a JSON catalog file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn get(&self, id: &DefectId) -> Option<&DefectType> {
        self.index.get(id).map(|&i| &self.types[i])
    }

    /// Defect type at a position in catalog order.
    pub fn get_index(&self, index: usize) -> Option<&DefectType> {
        self.types.get(index)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DefectType> {
        self.types.iter()
    }
}
