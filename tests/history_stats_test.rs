#[cfg(test)]
mod tests {
    use portal_client::history::{DiseaseStatistics, normalize_disease_name};
    use portal_client::models::member::{FamilyMember, Gender, RelationshipType};
    use portal_client::models::{CompleteFamilyTree, Diagnosis};

    fn create_test_member(patient_id: i64, diseases: &[&str]) -> FamilyMember {
        FamilyMember {
            patient_id,
            name: format!("Member {patient_id}"),
            relationship_type: RelationshipType::Parent,
            gender: Gender::Other,
            date_of_birth: None,
            depth: 1,
            total_diseases: diseases.len() as u32,
            disease_names: diseases.iter().map(ToString::to_string).collect(),
            diagnoses: diseases.iter().map(|d| Diagnosis::new(*d, 0.8)).collect(),
        }
    }

    fn create_test_tree(members: Vec<FamilyMember>) -> CompleteFamilyTree {
        let with = members.iter().filter(|m| m.total_diseases > 0).count() as u32;
        let total = members.len() as u32;
        CompleteFamilyTree {
            patient_name: "Test Patient".to_string(),
            total_blood_relatives: total,
            relatives_with_diseases: with,
            relatives_without_diseases: total - with,
            max_depth: members.iter().map(|m| m.depth).max().unwrap_or(0),
            family_tree: members,
        }
    }

    #[test]
    fn test_normalization_lowercases_and_replaces_underscores() {
        assert_eq!(
            normalize_disease_name("Chronic_Kidney_Disease"),
            "chronic kidney disease"
        );
        assert_eq!(normalize_disease_name("  Anemia "), "anemia");
    }

    #[test]
    fn test_occurrences_tally_in_first_seen_order() {
        let tree = create_test_tree(vec![
            create_test_member(1, &["type_2_diabetes", "anemia"]),
            create_test_member(2, &["Anemia"]),
            create_test_member(3, &["chronic_kidney_disease", "type_2_diabetes"]),
        ]);

        let stats = DiseaseStatistics::from_tree(&tree);

        assert_eq!(
            stats.occurrences,
            vec![
                ("type 2 diabetes".to_string(), 2),
                ("anemia".to_string(), 2),
                ("chronic kidney disease".to_string(), 1),
            ]
        );
        assert_eq!(stats.total_occurrences(), 5);
    }

    #[test]
    fn test_most_common_orders_by_count_with_stable_ties() {
        let tree = create_test_tree(vec![
            create_test_member(1, &["alpha"]),
            create_test_member(2, &["beta", "gamma"]),
            create_test_member(3, &["beta", "gamma"]),
        ]);

        let stats = DiseaseStatistics::from_tree(&tree);
        let top = stats.most_common(2);

        // beta and gamma tie at 2; beta was seen first.
        assert_eq!(top[0], ("beta".to_string(), 2));
        assert_eq!(top[1], ("gamma".to_string(), 2));
    }

    #[test]
    fn test_diseased_percentage_renders_one_decimal() {
        let mut members: Vec<FamilyMember> = (1..=3)
            .map(|id| create_test_member(id, &["anemia"]))
            .collect();
        members.extend((4..=10).map(|id| create_test_member(id, &[])));
        let tree = create_test_tree(members);
        assert_eq!(tree.total_blood_relatives, 10);
        assert_eq!(tree.relatives_with_diseases, 3);

        let stats = DiseaseStatistics::from_tree(&tree);
        assert_eq!(stats.diseased_percentage, "30.0%");
    }

    #[test]
    fn test_diseased_percentage_of_empty_tree() {
        let tree = create_test_tree(Vec::new());
        assert_eq!(DiseaseStatistics::from_tree(&tree).diseased_percentage, "0.0%");
    }

    #[test]
    fn test_recommendation_names_most_common_conditions() {
        let tree = create_test_tree(vec![
            create_test_member(1, &["type_2_diabetes"]),
            create_test_member(2, &["type_2_diabetes", "anemia"]),
        ]);

        let stats = DiseaseStatistics::from_tree(&tree);
        let text = stats.recommendation().unwrap();

        assert!(text.contains("type 2 diabetes"));
        assert!(text.contains("anemia"));
    }

    #[test]
    fn test_no_recommendation_for_healthy_tree() {
        let tree = create_test_tree(vec![create_test_member(1, &[])]);
        assert!(DiseaseStatistics::from_tree(&tree).recommendation().is_none());
    }

    #[test]
    fn test_average_confidence() {
        let tree = create_test_tree(vec![
            create_test_member(1, &["a", "b"]),
            create_test_member(2, &[]),
        ]);

        let stats = DiseaseStatistics::from_tree(&tree);
        let average = stats.average_confidence.unwrap();
        assert!((average - 0.8).abs() < 1e-9);

        let empty = create_test_tree(vec![create_test_member(1, &[])]);
        assert!(DiseaseStatistics::from_tree(&empty).average_confidence.is_none());
    }
}
