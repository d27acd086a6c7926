//! Tests for the directory client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real service.

use roster_client::{ClientError, DirectoryClient, DirectoryConfig};
use roster_core::{DirectoryApi, NewUser, RosterError, UserId};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DirectoryClient {
    DirectoryClient::new(DirectoryConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_empty_url_rejected() {
        match DirectoryClient::new(DirectoryConfig::new("")).unwrap_err() {
            ClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        match DirectoryClient::new(DirectoryConfig::new("example.com")).unwrap_err() {
            ClientError::InvalidUrl(msg) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_default_config_targets_public_service() {
        let client = DirectoryClient::new(DirectoryConfig::default()).unwrap();
        assert_eq!(client.url(), roster_client::DEFAULT_BASE_URL);
    }
}

// =============================================================================
// Fetch Tests
// =============================================================================

mod fetch {
    use super::*;

    #[tokio::test]
    async fn test_list_users_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 1,
                    "name": "Leanne Graham",
                    "username": "Bret",
                    "email": "Sincere@april.biz",
                    "address": { "city": "Gwenborough" },
                    "company": { "name": "Romaguera-Crona" }
                },
                { "id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv" }
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let users = client_for(&mock_server).list_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, UserId::new(1));
        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(users[0].company.as_ref().unwrap().name, "Romaguera-Crona");
        assert!(users[0].extra.contains_key("address"));
        assert_eq!(users[1].email, "Shanna@melissa.tv");
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let users = client_for(&mock_server).list_users().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_list_users_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        match client_for(&mock_server).list_users().await.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_list_users_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&mock_server)
            .await;

        assert!(matches!(
            client_for(&mock_server).list_users().await,
            Err(ClientError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Nothing listens on port 1
        let client = DirectoryClient::new(DirectoryConfig::new("http://127.0.0.1:1")).unwrap();

        match client.list_users().await.unwrap_err() {
            ClientError::ServerUnreachable(_) | ClientError::Request(_) => {}
            e => panic!("Expected ServerUnreachable or Request error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_maps_to_network_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = DirectoryApi::fetch_all(&client).await.unwrap_err();
        assert!(matches!(err, RosterError::Network(_)));
    }
}

// =============================================================================
// Create Tests
// =============================================================================

mod create {
    use super::*;

    #[tokio::test]
    async fn test_create_posts_derived_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .and(body_json(json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "username": "janedoe",
                "phone": roster_core::types::PLACEHOLDER_PHONE,
                "website": roster_core::types::PLACEHOLDER_WEBSITE,
                "company": { "name": roster_core::types::PLACEHOLDER_COMPANY }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 11,
                "name": "Jane Doe",
                "email": "jane@x.com",
                "username": "janedoe"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let user = client_for(&mock_server)
            .create("Jane Doe", "jane@x.com")
            .await
            .unwrap();

        assert_eq!(user.id, UserId::new(11));
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.username.as_deref(), Some("janedoe"));
    }

    #[tokio::test]
    async fn test_create_blank_name_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).create("   ", "jane@x.com").await;
        assert!(matches!(result, Err(ClientError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_create_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(422).set_body_string("email taken"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let draft = NewUser::from_form("Jane", "jane@x.com").unwrap();

        let err = client.create_user(&draft).await.unwrap_err();
        match err {
            RosterError::Network(msg) => assert!(msg.contains("422")),
            e => panic!("Expected Network error, got: {:?}", e),
        }
    }
}
