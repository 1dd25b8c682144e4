#[cfg(test)]
mod tests {
    use portal_client::models::member::{Gender, RelationshipType};
    use portal_client::models::{CompleteFamilyTree, Diagnosis, Role};

    #[test]
    fn test_relationship_type_from_wire_strings() {
        assert_eq!(RelationshipType::from("parent"), RelationshipType::Parent);
        assert_eq!(
            RelationshipType::from("great-grandparent"),
            RelationshipType::GreatGrandparent
        );
        assert_eq!(
            RelationshipType::from("great_grandparent"),
            RelationshipType::GreatGrandparent
        );
        assert_eq!(RelationshipType::from("cousin"), RelationshipType::Other);
        assert_eq!(RelationshipType::GreatGrandparent.label(), "great-grandparent");
    }

    #[test]
    fn test_role_parsing_and_labels() {
        assert_eq!(Role::from("doctor"), Role::Doctor);
        assert_eq!(Role::from(" Admin "), Role::Admin);
        assert_eq!(Role::from("unknown"), Role::Patient);
        assert_eq!(Role::Lab.label(), "lab");
    }

    #[test]
    fn test_gender_deserializes_with_fallback() {
        assert_eq!(serde_json::from_str::<Gender>("\"male\"").unwrap(), Gender::Male);
        assert_eq!(
            serde_json::from_str::<Gender>("\"nonbinary\"").unwrap(),
            Gender::Other
        );
    }

    #[test]
    fn test_diagnosis_confidence_percent() {
        assert_eq!(Diagnosis::new("anemia", 0.914).confidence_percent(), 91);
        assert_eq!(Diagnosis::new("anemia", 1.7).confidence_percent(), 100);
        assert_eq!(Diagnosis::new("anemia", -0.2).confidence_percent(), 0);
    }

    #[test]
    fn test_tree_count_consistency_and_percentage() {
        let tree = CompleteFamilyTree {
            patient_name: "P".to_string(),
            family_tree: Vec::new(),
            total_blood_relatives: 10,
            relatives_with_diseases: 3,
            relatives_without_diseases: 7,
            max_depth: 2,
        };
        assert!(tree.counts_consistent());
        assert_eq!(tree.diseased_percentage(), "30.0%");

        let inconsistent = CompleteFamilyTree {
            relatives_without_diseases: 5,
            ..tree
        };
        assert!(!inconsistent.counts_consistent());
    }
}
