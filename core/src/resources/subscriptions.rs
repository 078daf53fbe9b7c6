//! Subscriptions: a customer attached to a plan.

use serde::{Deserialize, Serialize};

use crate::endpoint;
use crate::PaystackClient;

/// Body for `POST /subscription`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscription {
    /// Customer email address or customer code.
    pub customer: String,
    /// Plan code.
    pub plan: String,
    /// Authorization to charge. Defaults to the customer's most recent one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    /// ISO 8601 date of the first debit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Body for enabling or disabling a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionToken {
    /// Subscription code.
    pub code: String,
    /// Email token sent to the customer.
    pub token: String,
}

impl PaystackClient {
    operations! {
        /// Create a subscription on your integration.
        fn create_subscription() with CreateSubscription => endpoint::CREATE_SUBSCRIPTION;
        /// List subscriptions available on your integration.
        fn list_subscriptions() => endpoint::LIST_SUBSCRIPTIONS;
        /// Fetch a subscription by ID or subscription code.
        fn fetch_subscription(id_or_code) => endpoint::FETCH_SUBSCRIPTION;
        /// Enable a subscription.
        fn enable_subscription() with SubscriptionToken => endpoint::ENABLE_SUBSCRIPTION;
        /// Disable a subscription.
        fn disable_subscription() with SubscriptionToken => endpoint::DISABLE_SUBSCRIPTION;
        /// Generate a link the customer can use to update their card.
        fn generate_manage_link(code) => endpoint::GENERATE_MANAGE_LINK;
        /// Email the customer a link to update their card.
        fn email_manage_link(code) => endpoint::EMAIL_MANAGE_LINK;
    }
}
