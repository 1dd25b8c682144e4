//! Filter and sort pipeline over fetched family members.
//!
//! A pure function over the member list: search, health-status filter,
//! category filter, then sort, applied in that fixed order. The input is
//! never mutated; the pipeline works on copies.

use super::category::DiseaseCategory;
use crate::models::FamilyMember;

/// Health-status filter options offered by the tree view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatusFilter {
    /// Keep every member
    #[default]
    All,
    /// Keep members with at least one disease on record
    WithDiseases,
    /// Keep members with no diseases on record
    Healthy,
    /// Selectable in the source UI but a pass-through; grouping semantics
    /// were never implemented and remain unclarified
    ByRelationship,
}

impl From<&str> for HealthStatusFilter {
    fn from(s: &str) -> Self {
        match s.trim() {
            "withDiseases" => Self::WithDiseases,
            "healthy" => Self::Healthy,
            "byRelationship" => Self::ByRelationship,
            _ => Self::All,
        }
    }
}

/// Sort keys offered by the tree view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Name, lexicographic ascending
    #[default]
    Name,
    /// Generation distance, ascending
    Depth,
    /// Disease count, descending
    DiseaseCount,
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s.trim() {
            "depth" => Self::Depth,
            "diseaseCount" => Self::DiseaseCount,
            _ => Self::Name,
        }
    }
}

/// One configuration of the filter/sort pipeline
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryQuery {
    /// Case-insensitive search term; empty matches everything
    pub search: String,
    /// Health-status filter
    pub status: HealthStatusFilter,
    /// Selected disease category, if any
    pub category: Option<DiseaseCategory>,
    /// Sort key applied after filtering
    pub sort: SortKey,
}

impl HistoryQuery {
    /// Query matching everything, sorted by name
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the health-status filter
    #[must_use]
    pub const fn with_status(mut self, status: HealthStatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Set the disease-category filter
    #[must_use]
    pub const fn with_category(mut self, category: DiseaseCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the sort key
    #[must_use]
    pub const fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Run the pipeline over a member list, returning filtered and sorted
    /// copies. Sorting is stable for every key.
    #[must_use]
    pub fn apply(&self, members: &[FamilyMember]) -> Vec<FamilyMember> {
        let mut result: Vec<FamilyMember> = members
            .iter()
            .filter(|m| self.matches_search(m))
            .filter(|m| self.matches_status(m))
            .filter(|m| self.matches_category(m))
            .cloned()
            .collect();

        match self.sort {
            SortKey::Name => result.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Depth => result.sort_by_key(|m| m.depth),
            SortKey::DiseaseCount => {
                result.sort_by(|a, b| b.total_diseases.cmp(&a.total_diseases));
            }
        }

        result
    }

    fn matches_search(&self, member: &FamilyMember) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        member.name.to_lowercase().contains(&needle)
            || member.relationship_type.label().contains(&needle)
            || member
                .disease_names
                .iter()
                .any(|name| name.to_lowercase().contains(&needle))
    }

    fn matches_status(&self, member: &FamilyMember) -> bool {
        match self.status {
            HealthStatusFilter::All | HealthStatusFilter::ByRelationship => true,
            HealthStatusFilter::WithDiseases => member.has_diseases(),
            HealthStatusFilter::Healthy => !member.has_diseases(),
        }
    }

    fn matches_category(&self, member: &FamilyMember) -> bool {
        match self.category {
            None => true,
            Some(category) => member
                .disease_names
                .iter()
                .any(|name| category.matches(name)),
        }
    }
}
