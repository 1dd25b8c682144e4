#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use portal_client::history::FamilyTreeExport;
    use portal_client::models::member::{FamilyMember, Gender, RelationshipType};
    use portal_client::models::{CompleteFamilyTree, Diagnosis};

    fn create_test_tree() -> CompleteFamilyTree {
        CompleteFamilyTree {
            patient_name: "Jane Doe".to_string(),
            family_tree: vec![FamilyMember {
                patient_id: 1,
                name: "Jane Doe".to_string(),
                relationship_type: RelationshipType::Other,
                gender: Gender::Female,
                date_of_birth: None,
                depth: 0,
                total_diseases: 1,
                disease_names: vec!["anemia".to_string()],
                diagnoses: vec![Diagnosis::new("anemia", 0.9)],
            }],
            total_blood_relatives: 1,
            relatives_with_diseases: 1,
            relatives_without_diseases: 0,
            max_depth: 0,
        }
    }

    #[test]
    fn test_export_round_trips_the_tree() {
        let tree = create_test_tree();
        let exported_at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let export = FamilyTreeExport::new(&tree, exported_at);

        let json = export.to_json().unwrap();
        let parsed: FamilyTreeExport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.tree, tree);
        assert_eq!(parsed.patient_name, "Jane Doe");
        assert_eq!(parsed.exported_at, exported_at);
    }

    #[test]
    fn test_file_name_combines_patient_and_date() {
        let tree = create_test_tree();
        let exported_at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let export = FamilyTreeExport::new(&tree, exported_at);

        assert_eq!(export.file_name(), "Jane_Doe_family_history_2026-08-06.json");
    }

    #[test]
    fn test_write_to_dir() {
        let tree = create_test_tree();
        let export = FamilyTreeExport::now(&tree);

        let dir = std::env::temp_dir().join(format!("portal-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let path = export.write_to_dir(&dir).unwrap();
        let parsed: FamilyTreeExport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.tree, tree);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
