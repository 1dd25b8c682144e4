//! Family tree view state.
//!
//! Holds one fetched tree plus the presentation state around it: expanded
//! rows, the selected member for the detail panel, the zoom level, and the
//! dismissible error banner. Filtering is memoized per query and tree
//! revision so unrelated state changes never recompute the pipeline.

use super::export::FamilyTreeExport;
use super::filter::HistoryQuery;
use super::stats::DiseaseStatistics;
use crate::client::{PortalClient, Transport};
use crate::error::{PortalClientError, Result};
use crate::models::{CompleteFamilyTree, FamilyMember};
use rustc_hash::FxHashSet;

/// Lowest zoom level the view renders at, in percent
pub const MIN_ZOOM_PERCENT: u16 = 50;
/// Highest zoom level the view renders at, in percent
pub const MAX_ZOOM_PERCENT: u16 = 150;

/// Presentation state for the family disease history page
#[derive(Debug)]
pub struct FamilyTreeView {
    tree: Option<CompleteFamilyTree>,
    expanded: FxHashSet<i64>,
    selected: Option<i64>,
    zoom_percent: u16,
    error: Option<String>,
    revision: u64,
    cache: Option<FilterCache>,
    auto_expand_limit: usize,
}

#[derive(Debug)]
struct FilterCache {
    query: HistoryQuery,
    revision: u64,
    members: Vec<FamilyMember>,
}

impl Default for FamilyTreeView {
    fn default() -> Self {
        Self::new(3)
    }
}

impl FamilyTreeView {
    /// Create an empty view that auto-expands up to `auto_expand_limit`
    /// diseased members on load
    #[must_use]
    pub fn new(auto_expand_limit: usize) -> Self {
        Self {
            tree: None,
            expanded: FxHashSet::default(),
            selected: None,
            zoom_percent: 100,
            error: None,
            revision: 0,
            cache: None,
            auto_expand_limit,
        }
    }

    /// Fetch the family history for a patient and apply it to the view.
    ///
    /// A missing patient id is rejected before any fetch. On failure the
    /// error becomes the banner message and the tree state stays empty;
    /// there is no retry.
    pub async fn refresh<T: Transport>(
        &mut self,
        client: &PortalClient<T>,
        patient_id: Option<i64>,
    ) {
        let Some(patient_id) = patient_id else {
            self.apply_error(&PortalClientError::missing_parameter("patient id"));
            return;
        };

        match client.family_disease_history(patient_id).await {
            Ok(tree) => self.apply_tree(tree),
            Err(e) => self.apply_error(&e),
        }
    }

    /// Install a fetched tree, auto-expanding the first members with
    /// diseases (or the first member overall if none qualify) and
    /// selecting a representative member for the detail panel.
    pub fn apply_tree(&mut self, tree: CompleteFamilyTree) {
        if !tree.counts_consistent() {
            log::debug!(
                "Relative counts are inconsistent: {} + {} != {}",
                tree.relatives_with_diseases,
                tree.relatives_without_diseases,
                tree.total_blood_relatives
            );
        }

        self.expanded = tree
            .family_tree
            .iter()
            .filter(|m| m.has_diseases())
            .take(self.auto_expand_limit)
            .map(|m| m.patient_id)
            .collect();
        if self.expanded.is_empty() {
            self.expanded
                .extend(tree.family_tree.first().map(|m| m.patient_id));
        }

        self.selected = tree
            .family_tree
            .iter()
            .find(|m| self.expanded.contains(&m.patient_id))
            .or_else(|| tree.family_tree.first())
            .map(|m| m.patient_id);

        log::info!(
            "Loaded family tree for {} ({} members)",
            tree.patient_name,
            tree.family_tree.len()
        );

        self.tree = Some(tree);
        self.error = None;
        self.invalidate();
    }

    /// Surface a fetch failure: set the banner message and leave the tree
    /// state empty
    pub fn apply_error(&mut self, error: &PortalClientError) {
        log::warn!("Family tree load failed: {error}");
        self.error = Some(error.banner_message());
        self.tree = None;
        self.expanded.clear();
        self.selected = None;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.revision += 1;
        self.cache = None;
    }

    /// The loaded tree, if any
    #[must_use]
    pub const fn tree(&self) -> Option<&CompleteFamilyTree> {
        self.tree.as_ref()
    }

    /// Members of the loaded tree, unfiltered; empty when nothing is loaded
    #[must_use]
    pub fn members(&self) -> &[FamilyMember] {
        self.tree.as_ref().map_or(&[], |t| &t.family_tree)
    }

    /// Filtered and sorted members for a query.
    ///
    /// The result is recomputed only when the query or the loaded tree
    /// changed since the last call.
    pub fn filtered(&mut self, query: &HistoryQuery) -> &[FamilyMember] {
        let stale = match &self.cache {
            Some(cache) => cache.revision != self.revision || cache.query != *query,
            None => true,
        };

        if stale {
            let members = query.apply(self.members());
            self.cache = Some(FilterCache {
                query: query.clone(),
                revision: self.revision,
                members,
            });
        }

        self.cache.as_ref().map_or(&[], |c| &c.members)
    }

    /// Disease statistics over the loaded tree (not the filtered view)
    #[must_use]
    pub fn statistics(&self) -> Option<DiseaseStatistics> {
        self.tree.as_ref().map(DiseaseStatistics::from_tree)
    }

    /// Export the loaded, unfiltered tree timestamped now
    pub fn export(&self) -> Result<FamilyTreeExport> {
        let tree = self
            .tree
            .as_ref()
            .ok_or_else(|| PortalClientError::missing_parameter("loaded family tree"))?;
        Ok(FamilyTreeExport::now(tree))
    }

    /// Whether a member's row is expanded
    #[must_use]
    pub fn is_expanded(&self, patient_id: i64) -> bool {
        self.expanded.contains(&patient_id)
    }

    /// Expand or collapse a member's row
    pub fn toggle_expanded(&mut self, patient_id: i64) {
        if !self.expanded.insert(patient_id) {
            self.expanded.remove(&patient_id);
        }
    }

    /// The member selected for the detail panel, if any
    #[must_use]
    pub fn selected(&self) -> Option<&FamilyMember> {
        let id = self.selected?;
        self.tree.as_ref()?.member(id)
    }

    /// Select a member for the detail panel; ignored for unknown ids
    pub fn select(&mut self, patient_id: i64) {
        if self.tree.as_ref().is_some_and(|t| t.member(patient_id).is_some()) {
            self.selected = Some(patient_id);
        }
    }

    /// Current zoom level in percent
    #[must_use]
    pub const fn zoom_percent(&self) -> u16 {
        self.zoom_percent
    }

    /// Set the zoom level, clamped to the supported range
    pub fn set_zoom_percent(&mut self, zoom: u16) {
        self.zoom_percent = zoom.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT);
    }

    /// Current banner message, if a fetch has failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismiss the error banner
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
