//! Complete family tree response model
//!
//! The family disease history endpoint returns the whole tree in one
//! payload together with backend-computed relative counts.

use super::member::FamilyMember;
use serde::{Deserialize, Serialize};

/// Family disease history for one root patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteFamilyTree {
    /// Display name of the root patient
    pub patient_name: String,
    /// Flat list of relatives with embedded diagnoses
    #[serde(default)]
    pub family_tree: Vec<FamilyMember>,
    /// Backend count of blood relatives in the tree
    pub total_blood_relatives: u32,
    /// Backend count of relatives with at least one disease
    pub relatives_with_diseases: u32,
    /// Backend count of relatives with no diseases
    pub relatives_without_diseases: u32,
    /// Deepest generation distance present in the tree
    pub max_depth: u32,
}

impl CompleteFamilyTree {
    /// Look up a member by patient id
    #[must_use]
    pub fn member(&self, patient_id: i64) -> Option<&FamilyMember> {
        self.family_tree.iter().find(|m| m.patient_id == patient_id)
    }

    /// Whether the backend counts are internally consistent.
    ///
    /// The invariant `with + without == total` is assumed upstream and not
    /// enforced here; callers may log a mismatch.
    #[must_use]
    pub const fn counts_consistent(&self) -> bool {
        self.relatives_with_diseases + self.relatives_without_diseases
            == self.total_blood_relatives
    }

    /// Share of blood relatives with diseases rendered with one decimal,
    /// e.g. "30.0%". Returns "0.0%" for an empty tree.
    #[must_use]
    pub fn diseased_percentage(&self) -> String {
        if self.total_blood_relatives == 0 {
            return "0.0%".to_string();
        }

        let share = f64::from(self.relatives_with_diseases)
            / f64::from(self.total_blood_relatives)
            * 100.0;
        format!("{share:.1}%")
    }
}
