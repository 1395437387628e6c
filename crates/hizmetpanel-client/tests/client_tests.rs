// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Client tests against a mock backend — no real server required.

use hizmetpanel_client::{ApiClient, ApiError, ExportFormat};
use hizmetpanel_core::types::{ServiceDraft, ServiceStatus, ServiceType};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "authenticated";

fn example_record_json() -> serde_json::Value {
    serde_json::json!({
        "id": "1",
        "name": "example.com",
        "service_type": "Domain",
        "provider": "RegistrarX",
        "creation_date": "2023-05-01",
        "last_renewal_date": null,
        "next_renewal_date": "2026-05-01",
        "annual_fee": 150,
        "currency": "TRY",
        "status": "active",
        "notes": null,
        "is_deleted": false,
        "created_at": "2023-05-01T09:30:00",
        "updated_at": "2025-05-01T09:30:00"
    })
}

mod login {
    use super::*;

    #[tokio::test]
    async fn success_returns_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(serde_json::json!({
                "email": "bilgi@example.com",
                "password": "secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "authenticated",
                "message": "Login successful"
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        let login = client
            .login("bilgi@example.com", "secret")
            .await
            .expect("login");
        assert_eq!(login.token, "authenticated");
    }

    #[tokio::test]
    async fn rejected_credentials_map_to_auth_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "detail": "Invalid credentials"
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        let result = client.login("someone@example.com", "wrong").await;
        assert!(matches!(result, Err(ApiError::AuthFailed(_))));
    }

    #[tokio::test]
    async fn unreachable_server() {
        let client = ApiClient::new("http://127.0.0.1:9").expect("client");
        let result = client.login("a@b.c", "x").await;
        assert!(matches!(
            result,
            Err(ApiError::ServerUnreachable(_) | ApiError::Request(_))
        ));
    }

    #[tokio::test]
    async fn backend_failure_maps_to_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        match client.login("a@b.c", "x").await {
            Err(ApiError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("boom"));
            }
            other => panic!("expected ServerError, got {other:?}"),
        }
    }
}

mod list {
    use super::*;

    #[tokio::test]
    async fn attaches_bearer_token_and_parses_records() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services"))
            .and(header("Authorization", format!("Bearer {TOKEN}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([example_record_json()])),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        let records = client.services(TOKEN).list().await.expect("list");

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "example.com");
        assert_eq!(record.service_type, ServiceType::Domain);
        assert_eq!(record.provider, "RegistrarX");
        assert_eq!(record.annual_fee, 150.0);
        assert_eq!(record.status, ServiceStatus::Active);
    }

    #[tokio::test]
    async fn rejected_token_maps_to_auth_required() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        let result = client.services("stale").list().await;
        assert!(matches!(result, Err(ApiError::AuthRequired)));
    }

    #[tokio::test]
    async fn invalid_body_maps_to_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        let result = client.services(TOKEN).list().await;
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }
}

mod crud {
    use super::*;

    fn draft() -> ServiceDraft {
        ServiceDraft {
            name: "example.com".into(),
            provider: "RegistrarX".into(),
            annual_fee: 150.0,
            ..ServiceDraft::default()
        }
    }

    #[tokio::test]
    async fn create_posts_draft_and_returns_record() {
        let server = MockServer::start().await;
        let draft = draft();

        Mock::given(method("POST"))
            .and(path("/services"))
            .and(header("Authorization", format!("Bearer {TOKEN}")))
            .and(body_json(serde_json::to_value(&draft).expect("draft json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(example_record_json()))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        let record = client
            .services(TOKEN)
            .create(&draft)
            .await
            .expect("create");
        assert_eq!(record.id, "1");
        assert_eq!(record.name, "example.com");
    }

    #[tokio::test]
    async fn update_puts_to_record_path() {
        let server = MockServer::start().await;
        let draft = draft();

        Mock::given(method("PUT"))
            .and(path("/services/1"))
            .and(header("Authorization", format!("Bearer {TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(example_record_json()))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        let record = client
            .services(TOKEN)
            .update("1", &draft)
            .await
            .expect("update");
        assert_eq!(record.id, "1");
    }

    #[tokio::test]
    async fn get_fetches_single_record() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services/1"))
            .and(header("Authorization", format!("Bearer {TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(example_record_json()))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        let record = client.services(TOKEN).get("1").await.expect("get");
        assert_eq!(record.id, "1");
    }

    #[tokio::test]
    async fn delete_succeeds_on_ack() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/services/1"))
            .and(header("Authorization", format!("Bearer {TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Service deleted successfully"
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        client.services(TOKEN).delete("1").await.expect("delete");
    }

    #[tokio::test]
    async fn delete_missing_record_maps_to_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/services/404"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Service not found"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        match client.services(TOKEN).delete("404").await {
            Err(ApiError::ServerError { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected ServerError, got {other:?}"),
        }
    }
}

mod stats {
    use super::*;

    #[tokio::test]
    async fn parses_aggregation_shape() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/services/stats/dashboard"))
            .and(header("Authorization", format!("Bearer {TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_services": 7,
                "active_services": 5,
                "total_annual_fees": 14350.0,
                "services_by_type": [
                    {"_id": "Domain", "count": 3},
                    {"_id": "Hosting", "count": 2}
                ]
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        let stats = client
            .services(TOKEN)
            .dashboard_stats()
            .await
            .expect("stats");
        assert_eq!(stats.total_services, 7);
        assert_eq!(stats.active_services, 5);
        assert_eq!(stats.total_annual_fees, 14350.0);
        assert_eq!(stats.services_by_type[0].service_type, "Domain");
        assert_eq!(stats.services_by_type[1].count, 2);
    }
}

mod export {
    use super::*;

    #[tokio::test]
    async fn returns_document_bytes() {
        let server = MockServer::start().await;
        let pdf_bytes = b"%PDF-1.4 fake".to_vec();

        Mock::given(method("GET"))
            .and(path("/services/export/pdf"))
            .and(header("Authorization", format!("Bearer {TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(pdf_bytes.clone()))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client");
        let bytes = client
            .services(TOKEN)
            .export(ExportFormat::Pdf)
            .await
            .expect("export");
        assert_eq!(bytes, pdf_bytes);
    }

    #[test]
    fn format_paths_and_filenames() {
        assert_eq!(ExportFormat::Excel.path_segment(), "excel");
        assert_eq!(ExportFormat::Pdf.path_segment(), "pdf");
        assert_eq!(ExportFormat::Excel.file_name(), "hizmetler.xlsx");
        assert_eq!(ExportFormat::Pdf.file_name(), "hizmetler.pdf");
    }
}
