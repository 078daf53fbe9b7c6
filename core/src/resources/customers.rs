//! Customers: create and manage the people who pay you.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::endpoint;
use crate::PaystackClient;

/// Body for `POST /customer`.
///
/// `first_name`, `last_name` and `phone` become mandatory on Paystack's side
/// for customers that will be given a dedicated virtual account in some
/// business categories. The client does not check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomer {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free-form key/value data stored with the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Body for `PUT /customer/{code}`. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Body for `POST /customer/{code}/identification`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateCustomer {
    pub first_name: String,
    pub last_name: String,
    /// Identification type. Only `bank_account` is accepted today.
    #[serde(rename = "type")]
    pub kind: String,
    /// Two-letter code of the country that issued the identification.
    pub country: String,
    pub bvn: String,
    /// Required when `kind` is `bank_account`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// Required when `kind` is `bank_account`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
}

/// Whitelist (`allow`), blacklist (`deny`) or reset (`default`) a customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAction {
    #[default]
    Default,
    Allow,
    Deny,
}

/// Body for `POST /customer/set_risk_action`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetRiskAction {
    /// Customer code or email address.
    pub customer: String,
    pub risk_action: RiskAction,
}

/// Body for `POST /customer/deactivate_authorization`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeactivateAuthorization {
    pub authorization_code: String,
}

impl PaystackClient {
    operations! {
        /// Create a customer on your integration.
        fn create_customer() with CreateCustomer => endpoint::CREATE_CUSTOMER;
        /// List customers available on your integration.
        fn list_customers() => endpoint::LIST_CUSTOMERS;
        /// Fetch a customer by email address or customer code.
        fn fetch_customer(email_or_code) => endpoint::FETCH_CUSTOMER;
        /// Update a customer's details.
        fn update_customer(code) with UpdateCustomer => endpoint::UPDATE_CUSTOMER;
        /// Validate a customer's identity against a bank account.
        fn validate_customer(code) with ValidateCustomer => endpoint::VALIDATE_CUSTOMER;
        /// Whitelist or blacklist a customer.
        fn set_risk_action() with SetRiskAction => endpoint::SET_RISK_ACTION;
        /// Deactivate an authorization, e.g. when a card must be forgotten.
        fn deactivate_authorization() with DeactivateAuthorization => endpoint::DEACTIVATE_AUTHORIZATION;
    }
}
