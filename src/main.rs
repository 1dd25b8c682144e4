use anyhow::Context;
use log::{info, warn};
use portal_client::models::CompleteFamilyTree;
use portal_client::{
    DiseaseCategory, FamilyTreeView, HealthStatusFilter, HistoryQuery, MockTransport,
    PortalClient, PortalConfig, SortKey,
};
use std::path::Path;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Serve a recorded family history response through the mock transport
    // so the whole fetch/aggregate/export path runs without a backend.
    let fixture = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "fixtures/family_tree.json".to_string());
    let fixture = Path::new(&fixture);
    if !fixture.exists() {
        warn!("Fixture not found: {}", fixture.display());
        return Ok(());
    }

    info!("Loading family tree fixture from {}", fixture.display());
    let raw = std::fs::read_to_string(fixture)
        .with_context(|| format!("Failed to read {}", fixture.display()))?;
    let tree: CompleteFamilyTree =
        serde_json::from_str(&raw).context("Failed to parse family tree fixture")?;

    let config = PortalConfig::default();
    let patient_id = tree
        .family_tree
        .iter()
        .find(|m| m.is_root())
        .map_or(1, |m| m.patient_id);
    let url = format!(
        "{}/patients/{patient_id}/family-disease-history?max_depth={}&lang={}",
        config.base_url, config.family_max_depth, config.language
    );
    let transport = MockTransport::new().with_json(url, &tree)?;
    let client = PortalClient::new(transport, config.clone());

    let start = Instant::now();
    let mut view = FamilyTreeView::new(config.auto_expand_limit);
    view.refresh(&client, Some(patient_id)).await;
    if let Some(message) = view.error() {
        warn!("Family tree load failed: {message}");
        return Ok(());
    }
    info!(
        "Loaded {} members in {:?}",
        view.members().len(),
        start.elapsed()
    );

    if let Some(stats) = view.statistics() {
        info!("Relatives with diseases: {}", stats.diseased_percentage);
        for (disease, count) in stats.most_common(5) {
            info!("  {disease}: {count}");
        }
        if let Some(text) = stats.recommendation() {
            info!("{text}");
        }
    }

    let query = HistoryQuery::new()
        .with_status(HealthStatusFilter::WithDiseases)
        .with_sort(SortKey::DiseaseCount);
    for member in view.filtered(&query) {
        let badges: Vec<&str> = member
            .disease_names
            .iter()
            .map(|d| DiseaseCategory::classify(d).label())
            .collect();
        info!(
            "{} ({}) - {} diseases [{}]",
            member.name,
            member.relationship_type.label(),
            member.total_diseases,
            badges.join(", ")
        );
    }

    if let Some(selected) = view.selected() {
        if let Some(confidence) = selected.average_confidence() {
            info!(
                "Detail panel: {} with mean diagnosis confidence {confidence:.2}",
                selected.name
            );
        }
    }

    let export = view.export()?;
    let path = export.write_to_dir(&std::env::temp_dir())?;
    info!("Export written to {}", path.display());

    Ok(())
}
