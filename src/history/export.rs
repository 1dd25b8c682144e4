//! JSON export of a loaded family tree.
//!
//! The export wraps the unfiltered tree with the patient name and an
//! export timestamp. There is no schema versioning; parsing the export
//! reproduces the tree plus the wrapper fields.

use crate::error::Result;
use crate::models::CompleteFamilyTree;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A downloadable snapshot of one family tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyTreeExport {
    /// Name of the root patient, copied from the tree
    pub patient_name: String,
    /// When the export was produced
    pub exported_at: DateTime<Utc>,
    /// The tree exactly as it was fetched
    pub tree: CompleteFamilyTree,
}

impl FamilyTreeExport {
    /// Wrap a tree for export at the given timestamp
    #[must_use]
    pub fn new(tree: &CompleteFamilyTree, exported_at: DateTime<Utc>) -> Self {
        Self {
            patient_name: tree.patient_name.clone(),
            exported_at,
            tree: tree.clone(),
        }
    }

    /// Wrap a tree for export timestamped now
    #[must_use]
    pub fn now(tree: &CompleteFamilyTree) -> Self {
        Self::new(tree, Utc::now())
    }

    /// Suggested file name: sanitized patient name plus the export date
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{}_family_history_{}.json",
            sanitize_file_stem(&self.patient_name),
            self.exported_at.format("%Y-%m-%d")
        )
    }

    /// Serialize the export to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the export as JSON into a directory, using the suggested
    /// file name. Returns the written path.
    pub fn write_to_dir(&self, dir: &Path) -> Result<std::path::PathBuf> {
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.to_json()?)?;
        log::info!("Exported family tree to {}", path.display());
        Ok(path)
    }
}

/// Replace anything outside `[A-Za-z0-9]` with underscores so the patient
/// name is safe in a file name
fn sanitize_file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if stem.is_empty() {
        "patient".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::sanitize_file_stem;

    #[test]
    fn sanitizes_non_alphanumeric_characters() {
        assert_eq!(sanitize_file_stem("Jane Doe"), "Jane_Doe");
        assert_eq!(sanitize_file_stem("  ÅseN. "), "_seN_");
        assert_eq!(sanitize_file_stem(""), "patient");
    }
}
