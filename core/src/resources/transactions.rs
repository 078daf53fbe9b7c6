//! Transactions: accept payments and inspect their outcome.
//!
//! Amounts are strings in the currency's subunit (kobo for NGN, pesewas for
//! GHS, cents for ZAR and USD), the form Paystack documents for these calls.

use serde::{Deserialize, Serialize};

use crate::endpoint;
use crate::PaystackClient;

/// Who pays the Paystack fee on a split payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bearer {
    Account,
    Subaccount,
}

/// Body for `POST /transaction/initialize`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitializeTransaction {
    pub email: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Unique reference. Only `-`, `.`, `=` and alphanumerics are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Plan code; overrides `amount` and starts a subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u64>,
    /// Stringified JSON object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// e.g. `card`, `bank`, `ussd`, `qr`, `mobile_money`, `bank_transfer`, `eft`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    /// Flat amount that overrides the split configuration for this payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_charge: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer: Option<Bearer>,
}

/// Body for `POST /transaction/charge_authorization`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeAuthorization {
    pub amount: String,
    pub email: String,
    pub authorization_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_charge: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer: Option<Bearer>,
    /// Queue scheduled charges instead of processing them immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<bool>,
}

/// Body for `POST /transaction/check_authorization`.
///
/// Paystack holds the checked amount, so don't call this right before
/// charging the same card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckAuthorization {
    pub amount: String,
    pub email: String,
    pub authorization_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Body for `POST /transaction/partial_debit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialDebit {
    pub authorization_code: String,
    pub currency: String,
    pub amount: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Minimum amount to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_least: Option<String>,
}

impl PaystackClient {
    operations! {
        /// Initialize a transaction and get back an authorization URL.
        fn initialize_transaction() with InitializeTransaction => endpoint::INITIALIZE_TRANSACTION;
        /// Confirm the status of a transaction by reference.
        fn verify_transaction(reference) => endpoint::VERIFY_TRANSACTION;
        /// List transactions carried out on your integration.
        fn list_transactions() => endpoint::LIST_TRANSACTIONS;
        /// Fetch a single transaction by numeric ID.
        fn fetch_transaction(id) => endpoint::FETCH_TRANSACTION;
        /// Charge a reusable authorization.
        fn charge_authorization() with ChargeAuthorization => endpoint::CHARGE_AUTHORIZATION;
        /// Check whether a card can cover an amount (Nigeria only).
        fn check_authorization() with CheckAuthorization => endpoint::CHECK_AUTHORIZATION;
        /// View the timeline of a transaction by ID or reference.
        fn view_timeline(id_or_reference) => endpoint::VIEW_TIMELINE;
        /// Total amount received on your integration.
        fn transaction_totals() => endpoint::TRANSACTION_TOTALS;
        /// Export transactions; the envelope carries a CSV download link.
        fn export_transactions() => endpoint::EXPORT_TRANSACTIONS;
        /// Retrieve part of a payment from a customer.
        fn partial_debit() with PartialDebit => endpoint::PARTIAL_DEBIT;
    }
}
