//! Disease category classification.
//!
//! Categories are a client-side grouping over raw disease-name strings,
//! matched by substring against a fixed set of known English keys. The
//! classifier is isolated here so a backend-provided category code can
//! replace the string matching without touching the filter pipeline.

/// Client-side disease grouping used for badges and category filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiseaseCategory {
    /// Diabetes mellitus and variants
    Diabetes,
    /// Chronic kidney disease
    ChronicKidneyDisease,
    /// Anemias, including iron deficiency anemia
    Anemia,
    /// Anything no known key matches; used for badge styling only and
    /// never offered as a filter option
    Other,
}

impl DiseaseCategory {
    /// Categories a user can filter by
    pub const SELECTABLE: [Self; 3] = [Self::Diabetes, Self::ChronicKidneyDisease, Self::Anemia];

    /// Display label for the category
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::ChronicKidneyDisease => "CKD",
            Self::Anemia => "Anemia",
            Self::Other => "Other",
        }
    }

    /// Known disease-name keys for this category
    #[must_use]
    pub const fn known_keys(self) -> &'static [&'static str] {
        match self {
            Self::Diabetes => &["diabetes"],
            Self::ChronicKidneyDisease => &["chronic_kidney_disease"],
            Self::Anemia => &["anemia", "iron_deficiency_anemia"],
            Self::Other => &[],
        }
    }

    /// Whether a raw disease name falls in this category.
    ///
    /// Matching is a case-insensitive substring test, so
    /// "Type 2 Diabetes" matches the "diabetes" key.
    #[must_use]
    pub fn matches(self, disease_name: &str) -> bool {
        let name = disease_name.trim().to_lowercase();
        self.known_keys().iter().any(|key| name.contains(key))
    }

    /// Classify a raw disease name, falling back to `Other`
    #[must_use]
    pub fn classify(disease_name: &str) -> Self {
        Self::SELECTABLE
            .into_iter()
            .find(|category| category.matches(disease_name))
            .unwrap_or(Self::Other)
    }
}

impl std::fmt::Display for DiseaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
