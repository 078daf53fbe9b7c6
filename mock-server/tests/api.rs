use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, AppState, Customer};
use serde_json::Value;
use tower::ServiceExt;

const SECRET: &str = "sk_test_mock";

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn authed(method: &str, uri: &str) -> http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, format!("Bearer {SECRET}"))
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    authed(method, uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    authed(method, uri).body(String::new()).unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_token_returns_401_envelope() {
    let resp = app(AppState::new(SECRET))
        .oneshot(Request::builder().uri("/customer").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], false);
    assert_eq!(body["message"], "Invalid key");
}

#[tokio::test]
async fn wrong_token_returns_401() {
    let resp = app(AppState::new(SECRET))
        .oneshot(
            Request::builder()
                .uri("/plan")
                .header(http::header::AUTHORIZATION, "Bearer sk_test_other")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn every_request_is_counted() {
    let state = AppState::new(SECRET);
    let app = app(state.clone());
    app.clone().oneshot(empty_request("GET", "/customer")).await.unwrap();
    app.oneshot(Request::builder().uri("/customer").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(state.requests(), 2);
}

#[tokio::test]
async fn unknown_route_returns_404_envelope() {
    let resp = app(AppState::new(SECRET))
        .oneshot(empty_request("GET", "/bank"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], false);
}

// --- customers ---

#[tokio::test]
async fn list_customers_empty() {
    let resp = app(AppState::new(SECRET))
        .oneshot(empty_request("GET", "/customer"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn create_customer_without_email_returns_400() {
    let resp = app(AppState::new(SECRET))
        .oneshot(json_request("POST", "/customer", r#"{"first_name":"Ada"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], false);
    assert_eq!(body["message"], "Email is required");
}

#[tokio::test]
async fn fetch_customer_not_found() {
    let resp = app(AppState::new(SECRET))
        .oneshot(empty_request("GET", "/customer/CUS_missing"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_customer_not_found() {
    let resp = app(AppState::new(SECRET))
        .oneshot(json_request("PUT", "/customer/CUS_missing", r#"{"phone":"+2348000000000"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- plans ---

#[tokio::test]
async fn create_plan_requires_interval() {
    let resp = app(AppState::new(SECRET))
        .oneshot(json_request("POST", "/plan", r#"{"name":"Gold","amount":5000}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_plan_returns_201_with_code() {
    let resp = app(AppState::new(SECRET))
        .oneshot(json_request(
            "POST",
            "/plan",
            r#"{"name":"Gold","amount":5000,"interval":"monthly"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["data"]["currency"], "NGN");
    assert!(body["data"]["plan_code"].as_str().unwrap().starts_with("PLN_"));
}

// --- transactions ---

#[tokio::test]
async fn verify_unknown_reference_returns_400() {
    let resp = app(AppState::new(SECRET))
        .oneshot(empty_request("GET", "/transaction/verify/nope"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Transaction reference not found");
}

#[tokio::test]
async fn initialize_rejects_non_numeric_amount() {
    let resp = app(AppState::new(SECRET))
        .oneshot(json_request(
            "POST",
            "/transaction/initialize",
            r#"{"email":"ada@example.com","amount":"lots"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Invalid amount sent");
}

// --- full customer lifecycle ---

#[tokio::test]
async fn customer_lifecycle() {
    use tower::Service;

    let mut app = app(AppState::new(SECRET)).into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/customer",
            r#"{"email":"ada@example.com","first_name":"Ada"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    let created: Customer = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(created.email, "ada@example.com");
    assert_eq!(created.first_name.as_deref(), Some("Ada"));
    let code = created.customer_code.clone();

    // creating the same email again returns the existing customer
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/customer", r#"{"email":"ada@example.com"}"#))
        .await
        .unwrap();
    let body: Value = body_json(resp).await;
    assert_eq!(body["data"]["customer_code"], code.as_str());

    // fetch by code and by email
    for key in [code.as_str(), "ada@example.com"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(empty_request("GET", &format!("/customer/{key}")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = body_json(resp).await;
        let fetched: Customer = serde_json::from_value(body["data"].clone()).unwrap();
        assert_eq!(fetched, created);
    }

    // partial update: only last_name
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/customer/{code}"),
            r#"{"last_name":"Lovelace"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["data"]["first_name"], "Ada"); // unchanged
    assert_eq!(body["data"]["last_name"], "Lovelace");

    // list has one customer
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/customer"))
        .await
        .unwrap();
    let body: Value = body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn transaction_initialize_then_verify() {
    use tower::Service;

    let mut app = app(AppState::new(SECRET)).into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/transaction/initialize",
            r#"{"email":"ada@example.com","amount":"20000","reference":"ref-001"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["data"]["reference"], "ref-001");
    assert!(body["data"]["authorization_url"]
        .as_str()
        .unwrap()
        .starts_with("https://checkout.paystack.com/"));

    // duplicate reference
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/transaction/initialize",
            r#"{"email":"ada@example.com","amount":"20000","reference":"ref-001"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = body_bytes(resp).await;
    assert!(!bytes.is_empty());

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/transaction/verify/ref-001"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["data"]["amount"], 20000);
    assert_eq!(body["data"]["status"], "abandoned");
}
