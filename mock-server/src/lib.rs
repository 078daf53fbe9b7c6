//! In-memory stand-in for a slice of the Paystack API.
//!
//! Speaks Paystack's envelope (`{"status", "message", "data"}`), insists on
//! the bearer token it was started with, and counts every request it sees so
//! tests can assert on how many calls a client actually made.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    extract::{Path, Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: u64,
    pub customer_code: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub id: u64,
    pub plan_code: String,
    pub name: String,
    pub amount: u64,
    pub interval: String,
    pub description: Option<String>,
    pub currency: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub reference: String,
    pub email: String,
    pub amount: u64,
    pub status: String,
}

#[derive(Deserialize)]
pub struct CustomerInput {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
pub struct PlanInput {
    pub name: Option<String>,
    pub amount: Option<u64>,
    pub interval: Option<String>,
    pub description: Option<String>,
    pub currency: Option<String>,
}

#[derive(Deserialize)]
pub struct InitializeInput {
    pub email: Option<String>,
    pub amount: Option<String>,
    pub reference: Option<String>,
}

#[derive(Default)]
pub struct Db {
    next_id: u64,
    customers: Vec<Customer>,
    plans: Vec<Plan>,
    transactions: Vec<Transaction>,
}

impl Db {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared server state. Clone it before handing it to [`app`] to keep a
/// handle on the request counter.
#[derive(Clone)]
pub struct AppState {
    secret: Arc<str>,
    db: Arc<RwLock<Db>>,
    requests: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: Arc::from(secret),
            db: Arc::new(RwLock::new(Db::default())),
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Requests received so far, authorized or not.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

type Reply = (StatusCode, Json<Value>);

fn success(status: StatusCode, message: &str, data: impl Serialize) -> Reply {
    (status, Json(json!({"status": true, "message": message, "data": data})))
}

fn failure(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({"status": false, "message": message})))
}

/// Random Paystack-style code such as `CUS_3f9c0e7a1b2d4c5`.
fn code(prefix: &str) -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &simple[..15])
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/customer", get(list_customers).post(create_customer))
        .route("/customer/{code}", get(fetch_customer).put(update_customer))
        .route("/plan", get(list_plans).post(create_plan))
        .route("/plan/{code}", get(fetch_plan).put(update_plan))
        .route("/transaction/initialize", post(initialize_transaction))
        .route("/transaction/verify/{reference}", get(verify_transaction))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), authorize))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn authorize(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    debug!(method = %request.method(), path = request.uri().path(), "request");

    let expected = format!("Bearer {}", state.secret);
    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if presented != Some(expected.as_str()) {
        return failure(StatusCode::UNAUTHORIZED, "Invalid key").into_response();
    }
    next.run(request).await
}

async fn not_found() -> Reply {
    failure(StatusCode::NOT_FOUND, "Not found")
}

fn matches_customer(customer: &Customer, key: &str) -> bool {
    customer.customer_code == key || customer.email == key || customer.id.to_string() == key
}

async fn list_customers(State(state): State<AppState>) -> Reply {
    let db = state.db.read().await;
    success(StatusCode::OK, "Customers retrieved", &db.customers)
}

async fn create_customer(State(state): State<AppState>, Json(input): Json<CustomerInput>) -> Reply {
    let Some(email) = input.email.filter(|email| !email.is_empty()) else {
        return failure(StatusCode::BAD_REQUEST, "Email is required");
    };
    let mut db = state.db.write().await;
    if let Some(existing) = db.customers.iter().find(|c| c.email == email) {
        return success(StatusCode::OK, "Customer created", existing);
    }
    let customer = Customer {
        id: db.next_id(),
        customer_code: code("CUS"),
        email,
        first_name: input.first_name,
        last_name: input.last_name,
        phone: input.phone,
        metadata: input.metadata,
    };
    db.customers.push(customer.clone());
    success(StatusCode::OK, "Customer created", customer)
}

async fn fetch_customer(State(state): State<AppState>, Path(key): Path<String>) -> Reply {
    let db = state.db.read().await;
    match db.customers.iter().find(|c| matches_customer(c, &key)) {
        Some(customer) => success(StatusCode::OK, "Customer retrieved", customer),
        None => failure(StatusCode::NOT_FOUND, "Customer not found"),
    }
}

async fn update_customer(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<CustomerInput>,
) -> Reply {
    let mut db = state.db.write().await;
    let Some(customer) = db.customers.iter_mut().find(|c| matches_customer(c, &key)) else {
        return failure(StatusCode::NOT_FOUND, "Customer not found");
    };
    if let Some(first_name) = input.first_name {
        customer.first_name = Some(first_name);
    }
    if let Some(last_name) = input.last_name {
        customer.last_name = Some(last_name);
    }
    if let Some(phone) = input.phone {
        customer.phone = Some(phone);
    }
    if let Some(metadata) = input.metadata {
        customer.metadata = Some(metadata);
    }
    success(StatusCode::OK, "Customer updated", customer.clone())
}

fn matches_plan(plan: &Plan, key: &str) -> bool {
    plan.plan_code == key || plan.id.to_string() == key
}

async fn list_plans(State(state): State<AppState>) -> Reply {
    let db = state.db.read().await;
    success(StatusCode::OK, "Plans retrieved", &db.plans)
}

async fn create_plan(State(state): State<AppState>, Json(input): Json<PlanInput>) -> Reply {
    let (Some(name), Some(amount), Some(interval)) = (input.name, input.amount, input.interval) else {
        return failure(StatusCode::BAD_REQUEST, "Name, amount and interval are required");
    };
    let mut db = state.db.write().await;
    let plan = Plan {
        id: db.next_id(),
        plan_code: code("PLN"),
        name,
        amount,
        interval,
        description: input.description,
        currency: input.currency.unwrap_or_else(|| "NGN".to_string()),
    };
    db.plans.push(plan.clone());
    success(StatusCode::CREATED, "Plan created", plan)
}

async fn fetch_plan(State(state): State<AppState>, Path(key): Path<String>) -> Reply {
    let db = state.db.read().await;
    match db.plans.iter().find(|p| matches_plan(p, &key)) {
        Some(plan) => success(StatusCode::OK, "Plan retrieved", plan),
        None => failure(StatusCode::NOT_FOUND, "Plan not found"),
    }
}

async fn update_plan(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<PlanInput>,
) -> Reply {
    let mut db = state.db.write().await;
    let Some(plan) = db.plans.iter_mut().find(|p| matches_plan(p, &key)) else {
        return failure(StatusCode::NOT_FOUND, "Plan not found");
    };
    if let Some(name) = input.name {
        plan.name = name;
    }
    if let Some(amount) = input.amount {
        plan.amount = amount;
    }
    if let Some(interval) = input.interval {
        plan.interval = interval;
    }
    if let Some(description) = input.description {
        plan.description = Some(description);
    }
    // Paystack answers plan updates without echoing the plan back.
    (StatusCode::OK, Json(json!({"status": true, "message": "Plan updated. 0 subscription(s) affected"})))
}

async fn initialize_transaction(
    State(state): State<AppState>,
    Json(input): Json<InitializeInput>,
) -> Reply {
    let Some(email) = input.email else {
        return failure(StatusCode::BAD_REQUEST, "Email is required");
    };
    let Some(amount) = input.amount.and_then(|amount| amount.parse::<u64>().ok()) else {
        return failure(StatusCode::BAD_REQUEST, "Invalid amount sent");
    };
    let mut db = state.db.write().await;
    let reference = input.reference.unwrap_or_else(|| code("T"));
    if db.transactions.iter().any(|t| t.reference == reference) {
        return failure(StatusCode::BAD_REQUEST, "Duplicate Transaction Reference");
    }
    let access_code = code("AC");
    let transaction = Transaction {
        id: db.next_id(),
        reference: reference.clone(),
        email,
        amount,
        status: "abandoned".to_string(),
    };
    db.transactions.push(transaction);
    success(
        StatusCode::OK,
        "Authorization URL created",
        json!({
            "authorization_url": format!("https://checkout.paystack.com/{access_code}"),
            "access_code": access_code,
            "reference": reference,
        }),
    )
}

async fn verify_transaction(State(state): State<AppState>, Path(reference): Path<String>) -> Reply {
    let db = state.db.read().await;
    match db.transactions.iter().find(|t| t.reference == reference) {
        Some(transaction) => success(StatusCode::OK, "Verification successful", transaction),
        None => failure(StatusCode::BAD_REQUEST, "Transaction reference not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_serializes_to_json() {
        let customer = Customer {
            id: 1,
            customer_code: "CUS_abc".to_string(),
            email: "ada@example.com".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            phone: None,
            metadata: None,
        };
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["customer_code"], "CUS_abc");
        assert_eq!(json["first_name"], "Ada");
        assert!(json["last_name"].is_null());
    }

    #[test]
    fn codes_carry_prefix() {
        let code = code("CUS");
        assert!(code.starts_with("CUS_"));
        assert_eq!(code.len(), "CUS_".len() + 15);
    }

    #[test]
    fn codes_are_unique() {
        assert_ne!(code("PLN"), code("PLN"));
    }

    #[test]
    fn customer_input_all_fields_optional() {
        let input: CustomerInput = serde_json::from_str("{}").unwrap();
        assert!(input.email.is_none());
        assert!(input.metadata.is_none());
    }

    #[test]
    fn customer_lookup_accepts_code_email_or_id() {
        let customer = Customer {
            id: 42,
            customer_code: "CUS_abc".to_string(),
            email: "ada@example.com".to_string(),
            first_name: None,
            last_name: None,
            phone: None,
            metadata: None,
        };
        assert!(matches_customer(&customer, "CUS_abc"));
        assert!(matches_customer(&customer, "ada@example.com"));
        assert!(matches_customer(&customer, "42"));
        assert!(!matches_customer(&customer, "CUS_other"));
    }

    #[test]
    fn db_ids_increase() {
        let mut db = Db::default();
        assert_eq!(db.next_id(), 1);
        assert_eq!(db.next_id(), 2);
    }
}
