#[cfg(test)]
mod tests {
    use portal_client::models::{LabReport, Patient, TestResult, Visit};
    use portal_client::{
        MockTransport, PortalClient, PortalClientError, PortalConfig, RawResponse,
    };

    fn test_config() -> PortalConfig {
        PortalConfig::default().with_base_url("http://test:8001/api/v1")
    }

    fn test_patient(patient_id: i64) -> Patient {
        Patient {
            patient_id,
            name: "Maria".to_string(),
            date_of_birth: None,
            gender: None,
            phone: None,
            email: None,
            address: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_and_decode_a_patient() {
        let transport = MockTransport::new()
            .with_json("http://test:8001/api/v1/patients/5", &test_patient(5))
            .unwrap();
        let client = PortalClient::new(transport, test_config());

        let patient = client.patient(5).await.unwrap();
        assert_eq!(patient.patient_id, 5);
        assert_eq!(patient.name, "Maria");
    }

    #[tokio::test]
    async fn test_404_surfaces_status_and_message() {
        let client = PortalClient::new(MockTransport::new(), test_config());

        let error = client.patient(9).await.unwrap_err();
        match &error {
            PortalClientError::Http { status, message } => {
                assert_eq!(*status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("Expected an HTTP error, got {other:?}"),
        }
        assert_eq!(error.banner_message(), "Request failed (404): Not Found");
    }

    #[tokio::test]
    async fn test_error_message_extracted_from_json_body() {
        let transport = MockTransport::new().with_response(
            "http://test:8001/api/v1/patients/5",
            RawResponse::new(404, br#"{"detail":"Patient not found"}"#.to_vec()),
        );
        let client = PortalClient::new(transport, test_config());

        let error = client.patient(5).await.unwrap_err();
        assert_eq!(
            error.banner_message(),
            "Request failed (404): Patient not found"
        );
    }

    #[tokio::test]
    async fn test_network_failure_becomes_a_transport_error() {
        let transport =
            MockTransport::new().with_network_failure("http://test:8001/api/v1/patients/5");
        let client = PortalClient::new(transport, test_config());

        let error = client.patient(5).await.unwrap_err();
        assert!(matches!(error, PortalClientError::Transport(_)));
        assert!(error.banner_message().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_family_history_url_carries_depth_and_language() {
        let config = test_config().with_family_max_depth(4).with_language("en");
        let tree = serde_json::json!({
            "patient_name": "Maria",
            "family_tree": [],
            "total_blood_relatives": 0,
            "relatives_with_diseases": 0,
            "relatives_without_diseases": 0,
            "max_depth": 0
        });
        let transport = MockTransport::new()
            .with_json(
                "http://test:8001/api/v1/patients/5/family-disease-history?max_depth=4&lang=en",
                &tree,
            )
            .unwrap();
        let client = PortalClient::new(transport, config);

        let tree = client.family_disease_history(5).await.unwrap();
        assert_eq!(tree.patient_name, "Maria");
        assert!(tree.family_tree.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_wire_enums_fall_back_to_other() {
        let tree = serde_json::json!({
            "patient_name": "Maria",
            "family_tree": [{
                "patient_id": 1,
                "name": "Cousin",
                "relationship_type": "second-cousin",
                "gender": "unspecified",
                "depth": 2,
                "total_diseases": 0
            }],
            "total_blood_relatives": 1,
            "relatives_with_diseases": 0,
            "relatives_without_diseases": 1,
            "max_depth": 2
        });
        let transport = MockTransport::new()
            .with_json(
                "http://test:8001/api/v1/patients/5/family-disease-history?max_depth=3&lang=en",
                &tree,
            )
            .unwrap();
        let client = PortalClient::new(transport, test_config());

        let tree = client.family_disease_history(5).await.unwrap();
        let member = &tree.family_tree[0];
        assert_eq!(
            member.relationship_type,
            portal_client::models::RelationshipType::Other
        );
        assert_eq!(member.gender, portal_client::models::Gender::Other);
        assert!(member.disease_names.is_empty());
        assert!(member.diagnoses.is_empty());
    }

    #[tokio::test]
    async fn test_visit_and_report_listings() {
        let visits = vec![Visit {
            visit_id: 1,
            patient_id: 5,
            doctor_name: Some("Dr. Smith".to_string()),
            visit_date: None,
            reason: None,
            notes: None,
        }];
        let reports = vec![LabReport {
            report_id: 11,
            patient_id: 5,
            lab_name: None,
            report_date: None,
            status: Some("final".to_string()),
            test_results: vec![TestResult {
                test_name: "hemoglobin".to_string(),
                value: Some(10.2),
                unit: Some("g/dL".to_string()),
                reference_min: Some(12.0),
                reference_max: Some(16.0),
                is_abnormal: true,
            }],
        }];
        let transport = MockTransport::new()
            .with_json("http://test:8001/api/v1/patients/5/visits", &visits)
            .unwrap()
            .with_json("http://test:8001/api/v1/patients/5/lab-reports", &reports)
            .unwrap();
        let client = PortalClient::new(transport, test_config());

        assert_eq!(client.visits(5).await.unwrap().len(), 1);
        let reports = client.lab_reports(5).await.unwrap();
        assert_eq!(reports[0].abnormal_count(), 1);
    }
}
