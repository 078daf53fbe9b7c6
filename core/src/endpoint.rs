//! Dispatch table for every Paystack operation the client exposes.
//!
//! Each [`Endpoint`] is a verb plus a path template with at most one `{id}`
//! placeholder. The resource methods on `PaystackClient` are generated from
//! these constants, so this table is the single place a path or verb lives.

use crate::http::HttpMethod::{self, Get, Post, Put};

const ID: &str = "{id}";

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: HttpMethod,
    pub template: &'static str,
}

impl Endpoint {
    pub const fn new(name: &'static str, method: HttpMethod, template: &'static str) -> Self {
        Self { name, method, template }
    }

    /// Substitutes `id` into the template verbatim. No percent-encoding is
    /// applied, so identifiers must already be URL-safe.
    pub fn path(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => self.template.replacen(ID, id, 1),
            None => self.template.to_string(),
        }
    }

    pub fn takes_id(&self) -> bool {
        self.template.contains(ID)
    }
}

/// Looks up an endpoint by its operation name.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|endpoint| endpoint.name == name)
}

// Customers
pub const CREATE_CUSTOMER: Endpoint = Endpoint::new("create_customer", Post, "/customer");
pub const LIST_CUSTOMERS: Endpoint = Endpoint::new("list_customers", Get, "/customer");
pub const FETCH_CUSTOMER: Endpoint = Endpoint::new("fetch_customer", Get, "/customer/{id}");
pub const UPDATE_CUSTOMER: Endpoint = Endpoint::new("update_customer", Put, "/customer/{id}");
pub const VALIDATE_CUSTOMER: Endpoint =
    Endpoint::new("validate_customer", Post, "/customer/{id}/identification");
pub const SET_RISK_ACTION: Endpoint =
    Endpoint::new("set_risk_action", Post, "/customer/set_risk_action");
pub const DEACTIVATE_AUTHORIZATION: Endpoint =
    Endpoint::new("deactivate_authorization", Post, "/customer/deactivate_authorization");

// Plans
pub const CREATE_PLAN: Endpoint = Endpoint::new("create_plan", Post, "/plan");
pub const LIST_PLANS: Endpoint = Endpoint::new("list_plans", Get, "/plan");
pub const FETCH_PLAN: Endpoint = Endpoint::new("fetch_plan", Get, "/plan/{id}");
pub const UPDATE_PLAN: Endpoint = Endpoint::new("update_plan", Put, "/plan/{id}");

// Subscriptions
pub const CREATE_SUBSCRIPTION: Endpoint = Endpoint::new("create_subscription", Post, "/subscription");
pub const LIST_SUBSCRIPTIONS: Endpoint = Endpoint::new("list_subscriptions", Get, "/subscription");
pub const FETCH_SUBSCRIPTION: Endpoint =
    Endpoint::new("fetch_subscription", Get, "/subscription/{id}");
pub const ENABLE_SUBSCRIPTION: Endpoint =
    Endpoint::new("enable_subscription", Post, "/subscription/enable");
pub const DISABLE_SUBSCRIPTION: Endpoint =
    Endpoint::new("disable_subscription", Post, "/subscription/disable");
pub const GENERATE_MANAGE_LINK: Endpoint =
    Endpoint::new("generate_manage_link", Get, "/subscription/{id}/manage/link");
pub const EMAIL_MANAGE_LINK: Endpoint =
    Endpoint::new("email_manage_link", Post, "/subscription/{id}/manage/email");

// Transactions
pub const INITIALIZE_TRANSACTION: Endpoint =
    Endpoint::new("initialize_transaction", Post, "/transaction/initialize");
pub const VERIFY_TRANSACTION: Endpoint =
    Endpoint::new("verify_transaction", Get, "/transaction/verify/{id}");
pub const LIST_TRANSACTIONS: Endpoint = Endpoint::new("list_transactions", Get, "/transaction");
pub const FETCH_TRANSACTION: Endpoint = Endpoint::new("fetch_transaction", Get, "/transaction/{id}");
pub const CHARGE_AUTHORIZATION: Endpoint =
    Endpoint::new("charge_authorization", Post, "/transaction/charge_authorization");
pub const CHECK_AUTHORIZATION: Endpoint =
    Endpoint::new("check_authorization", Post, "/transaction/check_authorization");
pub const VIEW_TIMELINE: Endpoint = Endpoint::new("view_timeline", Get, "/transaction/timeline/{id}");
pub const TRANSACTION_TOTALS: Endpoint = Endpoint::new("transaction_totals", Get, "/transaction/totals");
pub const EXPORT_TRANSACTIONS: Endpoint =
    Endpoint::new("export_transactions", Get, "/transaction/export");
pub const PARTIAL_DEBIT: Endpoint = Endpoint::new("partial_debit", Post, "/transaction/partial_debit");

// Transaction splits
pub const CREATE_SPLIT: Endpoint = Endpoint::new("create_split", Post, "/split");
pub const LIST_SPLITS: Endpoint = Endpoint::new("list_splits", Get, "/split");
pub const FETCH_SPLIT: Endpoint = Endpoint::new("fetch_split", Get, "/split/{id}");
pub const UPDATE_SPLIT: Endpoint = Endpoint::new("update_split", Put, "/split/{id}");
pub const ADD_SPLIT_SUBACCOUNT: Endpoint =
    Endpoint::new("add_split_subaccount", Post, "/split/{id}/subaccount/add");
pub const REMOVE_SPLIT_SUBACCOUNT: Endpoint =
    Endpoint::new("remove_split_subaccount", Post, "/split/{id}/subaccount/remove");

pub const ENDPOINTS: &[Endpoint] = &[
    CREATE_CUSTOMER,
    LIST_CUSTOMERS,
    FETCH_CUSTOMER,
    UPDATE_CUSTOMER,
    VALIDATE_CUSTOMER,
    SET_RISK_ACTION,
    DEACTIVATE_AUTHORIZATION,
    CREATE_PLAN,
    LIST_PLANS,
    FETCH_PLAN,
    UPDATE_PLAN,
    CREATE_SUBSCRIPTION,
    LIST_SUBSCRIPTIONS,
    FETCH_SUBSCRIPTION,
    ENABLE_SUBSCRIPTION,
    DISABLE_SUBSCRIPTION,
    GENERATE_MANAGE_LINK,
    EMAIL_MANAGE_LINK,
    INITIALIZE_TRANSACTION,
    VERIFY_TRANSACTION,
    LIST_TRANSACTIONS,
    FETCH_TRANSACTION,
    CHARGE_AUTHORIZATION,
    CHECK_AUTHORIZATION,
    VIEW_TIMELINE,
    TRANSACTION_TOTALS,
    EXPORT_TRANSACTIONS,
    PARTIAL_DEBIT,
    CREATE_SPLIT,
    LIST_SPLITS,
    FETCH_SPLIT,
    UPDATE_SPLIT,
    ADD_SPLIT_SUBACCOUNT,
    REMOVE_SPLIT_SUBACCOUNT,
];
