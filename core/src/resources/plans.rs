//! Plans: recurring-payment templates that subscriptions attach to.

use serde::{Deserialize, Serialize};

use crate::endpoint;
use crate::PaystackClient;

/// Billing cadence of a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Biannually,
    Annually,
}

/// Body for both `POST /plan` and `PUT /plan/{code}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    /// Amount in the currency's subunit (kobo, pesewas, cents).
    pub amount: u64,
    pub interval: Interval,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Number of invoices to raise before the subscription stops.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u64>,
}

impl PaystackClient {
    operations! {
        /// Create a plan on your integration.
        fn create_plan() with Plan => endpoint::CREATE_PLAN;
        /// List plans available on your integration.
        fn list_plans() => endpoint::LIST_PLANS;
        /// Fetch a plan by ID or plan code.
        fn fetch_plan(id_or_code) => endpoint::FETCH_PLAN;
        /// Update a plan.
        fn update_plan(id_or_code) with Plan => endpoint::UPDATE_PLAN;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn plan_serializes_amount_as_number() {
        let plan = Plan {
            name: "Monthly retainer".to_string(),
            amount: 500_000,
            interval: Interval::Monthly,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&plan).unwrap(),
            json!({"name": "Monthly retainer", "amount": 500000, "interval": "monthly"})
        );
    }

    #[test]
    fn plan_keeps_explicit_false_flags() {
        let plan = Plan {
            name: "Quiet".to_string(),
            amount: 100,
            interval: Interval::Annually,
            send_sms: Some(false),
            ..Default::default()
        };
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["send_sms"], false);
        assert_eq!(value["interval"], "annually");
        assert!(value.get("send_invoices").is_none());
    }
}
