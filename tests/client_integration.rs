use serde_json::json;
use wiremock::matchers::{body_json, body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use subtrack::error::{Error, FormField};
use subtrack::permissions::PermissionLevel;
use subtrack::Tracker;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tracker(server: &MockServer) -> Tracker {
    Tracker::new(&server.uri()).expect("client builds")
}

#[tokio::test]
async fn login_establishes_session_and_own_context() {
    init_logging();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "owner@example.com",
            "password": "passw0rd1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "logged in",
            "user": { "id": 3, "email": "owner@example.com", "role": "OWNER" }
        })))
        .mount(&mock_server)
        .await;

    let tracker = tracker(&mock_server);
    let response = tracker
        .auth()
        .login("owner@example.com", "passw0rd1")
        .await
        .unwrap();

    assert_eq!(response.user.unwrap().id, 3);

    let session = tracker.session().unwrap();
    assert_eq!(session.user.id, 3);
    assert_eq!(session.context_owner_id, 3);
    assert!(!session.is_guest_context());
}

#[tokio::test]
async fn register_validation_blocks_the_request() {
    init_logging();
    // No mock server needed: validation fails before any request is sent.
    let tracker = Tracker::new("http://localhost:1").unwrap();

    let err = tracker
        .auth()
        .register("not-an-email", "passw0rd1")
        .await
        .unwrap_err();
    assert!(matches!(&err, Error::Validation { .. }));
    assert_eq!(err.field(), FormField::Email);

    let err = tracker
        .auth()
        .register("owner@example.com", "short")
        .await
        .unwrap_err();
    assert_eq!(err.field(), FormField::Password);
}

#[tokio::test]
async fn switch_context_scopes_subscription_requests() {
    init_logging();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "logged in",
            "user": { "id": 3, "email": "guest@example.com", "role": "USER" }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/switch-context"))
        .and(body_json(json!({ "ownerId": 9 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authResponse": {
                "message": "context switched",
                "user": { "id": 3, "email": "guest@example.com", "role": "GUEST" }
            },
            "contextUserId": 9
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/subscriptions"))
        .and(query_param("contextUserId", "9"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{
                "id": 42,
                "name": "Netflix",
                "price": 15.99,
                "currency": "USD",
                "billingInterval": 1,
                "billingUnit": "MONTHS",
                "automaticallyRenews": true,
                "startDate": "2026-06-15T00:00:00Z",
                "nextPaymentDate": "2026-09-04T00:00:00Z",
                "paymentMethod": "CREDIT_CARD",
                "paidBy": "",
                "category": "Entertainment",
                "status": "ACTIVE",
                "ownerId": 9
            }],
            "totalPages": 1
        })))
        .mount(&mock_server)
        .await;

    let tracker = tracker(&mock_server);
    tracker
        .auth()
        .login("guest@example.com", "passw0rd1")
        .await
        .unwrap();

    let switched = tracker.auth().switch_context(9).await.unwrap();
    assert_eq!(switched.context_user_id, 9);
    assert!(tracker.session().unwrap().is_guest_context());

    let subscriptions = tracker.subscriptions().list_all().await.unwrap();
    assert_eq!(subscriptions.len(), 1);
    assert_eq!(subscriptions[0].name, "Netflix");
    assert_eq!(subscriptions[0].id, "42");
    assert_eq!(
        subscriptions[0].next_payment_date,
        chrono::NaiveDate::from_ymd_opt(2026, 9, 4).unwrap()
    );
}

#[tokio::test]
async fn listing_without_a_session_fails_client_side() {
    init_logging();
    let tracker = Tracker::new("http://localhost:1").unwrap();
    let err = tracker.subscriptions().list(0).await;
    assert!(matches!(err, Err(Error::Auth(_))));
}

#[tokio::test]
async fn create_sends_the_wire_shape_and_returns_the_stored_record() {
    init_logging();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "logged in",
            "user": { "id": 3, "email": "owner@example.com", "role": "OWNER" }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/subscriptions"))
        .and(query_param("contextUserId", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "Figma",
            "price": 12.0,
            "currency": "USD",
            "billingInterval": 1,
            "billingUnit": "MONTHS",
            "automaticallyRenews": true,
            "startDate": "2026-08-30T00:00:00Z",
            "nextPaymentDate": "2026-09-30T00:00:00Z",
            "paymentMethod": "CREDIT_CARD",
            "paidBy": "",
            "category": "Software",
            "status": "ACTIVE",
            "ownerId": 3
        })))
        .mount(&mock_server)
        .await;

    let tracker = tracker(&mock_server);
    tracker
        .auth()
        .login("owner@example.com", "passw0rd1")
        .await
        .unwrap();

    let record = subtrack::model::wire::SubscriptionRecord {
        id: None,
        name: "Figma".to_string(),
        price: 12.0,
        currency: subtrack::model::Currency::Usd,
        billing_interval: 1,
        billing_unit: "MONTHS".to_string(),
        automatically_renews: true,
        start_date: "2026-08-30T00:00:00Z".to_string(),
        next_payment_date: "2026-09-30T00:00:00Z".to_string(),
        payment_method: "CREDIT_CARD".to_string(),
        paid_by: String::new(),
        category: "Software".to_string(),
        url: None,
        notes: None,
        status: "ACTIVE".to_string(),
        owner_id: 3,
    };

    let stored = tracker.subscriptions().create(&record).await.unwrap();
    assert_eq!(stored.id, Some(7));
}

#[tokio::test]
async fn delete_targets_the_record_in_context() {
    init_logging();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "logged in",
            "user": { "id": 3, "email": "owner@example.com", "role": "OWNER" }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/subscriptions/42"))
        .and(query_param("contextUserId", "3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tracker = tracker(&mock_server);
    tracker
        .auth()
        .login("owner@example.com", "passw0rd1")
        .await
        .unwrap();

    tracker.subscriptions().delete(42).await.unwrap();
}

#[tokio::test]
async fn self_grant_rejection_routes_to_the_email_field() {
    init_logging();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/permissions/add"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "SELF_GRANT",
            "message": "cannot grant guest access to yourself"
        })))
        .mount(&mock_server)
        .await;

    let tracker = tracker(&mock_server);
    let err = tracker
        .permissions()
        .add("me@example.com", PermissionLevel::ReadOnly)
        .await
        .unwrap_err();

    match &err {
        Error::Api { status, code, .. } => {
            assert_eq!(*status, 400);
            assert_eq!(code.as_deref(), Some("SELF_GRANT"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(err.field(), FormField::Email);
}

#[tokio::test]
async fn plain_text_rejections_still_surface_as_api_errors() {
    init_logging();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/permissions/guests"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let tracker = tracker(&mock_server);
    let err = tracker.permissions().guests().await.unwrap_err();

    match err {
        Error::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 500);
            assert_eq!(code, None);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn guest_listing_decodes_grants() {
    init_logging();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/permissions/guests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "guestId": 12, "guestEmail": "a@example.com", "permission": "GUEST_RO" },
            { "guestId": 14, "guestEmail": "b@example.com", "permission": "GUEST_RW" }
        ])))
        .mount(&mock_server)
        .await;

    let tracker = tracker(&mock_server);
    let guests = tracker.permissions().guests().await.unwrap();

    assert_eq!(guests.len(), 2);
    assert_eq!(guests[0].permission, PermissionLevel::ReadOnly);
    assert_eq!(guests[1].guest_email, "b@example.com");
}

#[tokio::test]
async fn revoking_a_guest_sends_the_bare_email() {
    init_logging();
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/permissions/delete"))
        .and(body_string("a@example.com"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tracker = tracker(&mock_server);
    tracker.permissions().delete("a@example.com").await.unwrap();
}

#[tokio::test]
async fn logout_clears_the_session_even_when_the_backend_fails() {
    init_logging();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "logged in",
            "user": { "id": 3, "email": "owner@example.com", "role": "OWNER" }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("session store down"))
        .mount(&mock_server)
        .await;

    let tracker = tracker(&mock_server);
    tracker
        .auth()
        .login("owner@example.com", "passw0rd1")
        .await
        .unwrap();
    assert!(tracker.session().is_some());

    tracker.auth().logout().await.unwrap();
    assert!(tracker.session().is_none());
}

#[tokio::test]
async fn revert_context_returns_to_the_own_account() {
    init_logging();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/revert-context"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "context reverted",
            "user": { "id": 3, "email": "guest@example.com", "role": "USER" }
        })))
        .mount(&mock_server)
        .await;

    let tracker = tracker(&mock_server);
    let response = tracker.auth().revert_context().await.unwrap();
    assert_eq!(response.message, "context reverted");

    let session = tracker.session().unwrap();
    assert_eq!(session.context_owner_id, 3);
    assert!(!session.is_guest_context());
}
