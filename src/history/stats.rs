//! Derived disease statistics.
//!
//! Statistics are computed from the loaded tree, not the filtered view:
//! per-disease occurrence tallies in first-seen order, the diseased share
//! of blood relatives, and a canned recommendation block.

use crate::models::CompleteFamilyTree;
use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Normalize a raw disease name for tallying: lowercased, underscores
/// replaced with spaces.
#[must_use]
pub fn normalize_disease_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace('_', " ")
}

/// Occurrence statistics over one loaded family tree
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseStatistics {
    /// `(normalized disease name, occurrence count)` pairs in the order
    /// each disease was first seen
    pub occurrences: Vec<(String, usize)>,
    /// Share of blood relatives with diseases, e.g. "30.0%"
    pub diseased_percentage: String,
    /// Mean confidence across every diagnosis in the tree, if any exist
    pub average_confidence: Option<f64>,
}

impl DiseaseStatistics {
    /// Tally statistics from a loaded tree
    #[must_use]
    pub fn from_tree(tree: &CompleteFamilyTree) -> Self {
        let mut occurrences: Vec<(String, usize)> = Vec::new();
        let mut index: FxHashMap<String, usize> = FxHashMap::default();

        for member in &tree.family_tree {
            for raw in &member.disease_names {
                let name = normalize_disease_name(raw);
                match index.get(&name) {
                    Some(&i) => occurrences[i].1 += 1,
                    None => {
                        index.insert(name.clone(), occurrences.len());
                        occurrences.push((name, 1));
                    }
                }
            }
        }

        let confidences: Vec<f64> = tree
            .family_tree
            .iter()
            .flat_map(|m| &m.diagnoses)
            .map(|d| d.confidence_score)
            .collect();
        let average_confidence = if confidences.is_empty() {
            None
        } else {
            Some(confidences.iter().sum::<f64>() / confidences.len() as f64)
        };

        Self {
            occurrences,
            diseased_percentage: tree.diseased_percentage(),
            average_confidence,
        }
    }

    /// Total number of disease occurrences across the tree
    #[must_use]
    pub fn total_occurrences(&self) -> usize {
        self.occurrences.iter().map(|(_, count)| count).sum()
    }

    /// The `limit` most frequent diseases, ordered by descending count.
    /// Ties keep first-seen order.
    #[must_use]
    pub fn most_common(&self, limit: usize) -> Vec<(String, usize)> {
        self.occurrences
            .iter()
            .cloned()
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .take(limit)
            .collect()
    }

    /// Canned "most common conditions" recommendation block, or `None`
    /// for a tree without diseases
    #[must_use]
    pub fn recommendation(&self) -> Option<String> {
        let top = self.most_common(3);
        if top.is_empty() {
            return None;
        }

        let conditions = top.iter().map(|(name, _)| name.as_str()).join(", ");
        Some(format!(
            "Most common conditions in this family: {conditions}. \
             Consider discussing screening options with a clinician."
        ))
    }
}
