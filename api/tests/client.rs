use api::AdminClient;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use types::{
    ApiError, Config, PageQuery,
    query::{PaymentStatus, StatusFilter, UserSearch},
    records::{Payment, User},
    session::Session,
    stats::DateRange,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param, query_param_is_missing},
};

fn signed_in_client(server: &MockServer) -> (AdminClient, Session) {
    let config = Config::from_values(Some(&server.uri()), None).unwrap();
    let session = Session::in_memory();
    session.sign_in(&SecretString::from("tok-123"));
    (AdminClient::new(&config, session.clone()), session)
}

#[tokio::test]
async fn lists_users_with_search_and_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "10"))
        .and(query_param("search", "john"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "a1", "user_id": 1, "username": "john", "first_name": "John", "coins": 5},
            {"_id": "a2", "user_id": 2, "username": null, "first_name": null, "coins": null}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = signed_in_client(&server);
    let users = client
        .list_users(&PageQuery {
            offset: 0,
            limit: 10,
            filter: UserSearch::new("john"),
        })
        .await
        .unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username.as_deref(), Some("john"));
    assert_eq!(users[1].username, None);
    assert_eq!(users[1].coins, 0);
}

#[tokio::test]
async fn default_status_filter_is_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payments"))
        .and(query_param("skip", "20"))
        .and(query_param_is_missing("status_filter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = signed_in_client(&server);
    let payments = client
        .list::<Payment>(&PageQuery {
            offset: 20,
            limit: 10,
            filter: StatusFilter::All,
        })
        .await
        .unwrap();

    assert!(payments.is_empty());
}

#[tokio::test]
async fn unauthorized_clears_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token"})))
        .mount(&server)
        .await;

    let (client, session) = signed_in_client(&server);
    let err = client
        .list::<User>(&PageQuery {
            offset: 0,
            limit: 10,
            filter: UserSearch::default(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
}

#[tokio::test]
async fn server_error_keeps_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard/stats"))
        .and(query_param("range_type", "last30"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (client, session) = signed_in_client(&server);
    let err = client.dashboard_stats(DateRange::Last30).await.unwrap_err();

    assert_eq!(err, ApiError::Transport { status: 500 });
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/charts/gender-distribution"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let (client, _) = signed_in_client(&server);
    let err = client.gender_distribution().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let config = Config::from_values(Some("http://127.0.0.1:1/"), None).unwrap();
    let client = AdminClient::new(&config, Session::in_memory());

    let err = client.registrations(7).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn registrations_sends_day_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/charts/registrations"))
        .and(query_param("days", "90"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "labels": ["2024-01-01", "2024-01-02"],
            "data": [3, 5],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = signed_in_client(&server);
    let series = client
        .registrations(DateRange::Last90.registration_days())
        .await
        .unwrap();

    assert_eq!(series.data, vec![3, 5]);
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/charts/gender-distribution"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "labels": ["male", "female"],
            "data": [10, 12],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/api/v1", server.uri());
    let config = Config::from_values(Some(&base), None).unwrap();
    let client = AdminClient::new(&config, Session::in_memory());

    let series = client.gender_distribution().await.unwrap();
    assert_eq!(series.labels, vec!["male", "female"]);
}

#[tokio::test]
async fn anonymous_requests_carry_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "admin", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-token",
            "token_type": "bearer",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::from_values(Some(&server.uri()), None).unwrap();
    let client = AdminClient::new(&config, Session::in_memory());

    let token = client.login("admin", "hunter2").await.unwrap();
    assert_eq!(token.access_token.expose_secret(), "fresh-token");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn payment_status_update_puts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/payments/65a1f0"))
        .and(body_json(json!({
            "status": "approved",
            "admin_notes": null,
            "processed_by": 1,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Payment status updated successfully",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = signed_in_client(&server);
    let ack = client
        .update_payment_status("65a1f0", PaymentStatus::Approved, None)
        .await
        .unwrap();

    assert_eq!(ack.message, "Payment status updated successfully");
}
