//! Transaction splits: share a payment between the main account and
//! subaccounts.

use serde::{Deserialize, Serialize};

use crate::endpoint;
use crate::PaystackClient;

/// How subaccount shares are expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    #[default]
    Percentage,
    Flat,
}

/// Who bears the Paystack fee on a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitBearer {
    Subaccount,
    Account,
    AllProportional,
    All,
}

/// One subaccount and its share. Also the body for
/// `POST /split/{id}/subaccount/add`, which adds or updates a share.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitSubaccount {
    pub subaccount: String,
    pub share: u64,
}

/// Body for `POST /split`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSplit {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SplitType,
    pub currency: String,
    pub subaccounts: Vec<SplitSubaccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_type: Option<SplitBearer>,
    /// Required when `bearer_type` is `subaccount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_subaccount: Option<String>,
}

/// Body for `PUT /split/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSplit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_type: Option<SplitBearer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_subaccount: Option<String>,
}

/// Body for `POST /split/{id}/subaccount/remove`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoveSplitSubaccount {
    pub subaccount: String,
}

impl PaystackClient {
    operations! {
        /// Create a split payment configuration.
        fn create_split() with CreateSplit => endpoint::CREATE_SPLIT;
        /// List or search split configurations.
        fn list_splits() => endpoint::LIST_SPLITS;
        /// Fetch a split by ID.
        fn fetch_split(id) => endpoint::FETCH_SPLIT;
        /// Update a split's details.
        fn update_split(id) with UpdateSplit => endpoint::UPDATE_SPLIT;
        /// Add a subaccount to a split, or update its share.
        fn add_split_subaccount(id) with SplitSubaccount => endpoint::ADD_SPLIT_SUBACCOUNT;
        /// Remove a subaccount from a split.
        fn remove_split_subaccount(id) with RemoveSplitSubaccount => endpoint::REMOVE_SPLIT_SUBACCOUNT;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_split_serializes_subaccounts() {
        let body = CreateSplit {
            name: "Halfsies".to_string(),
            kind: SplitType::Percentage,
            currency: "NGN".to_string(),
            subaccounts: vec![
                SplitSubaccount { subaccount: "ACCT_z3x6z3nbo14xsil".to_string(), share: 20 },
                SplitSubaccount { subaccount: "ACCT_pwwualwty4nhq9d".to_string(), share: 30 },
            ],
            bearer_type: Some(SplitBearer::AllProportional),
            bearer_subaccount: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "name": "Halfsies",
                "type": "percentage",
                "currency": "NGN",
                "subaccounts": [
                    {"subaccount": "ACCT_z3x6z3nbo14xsil", "share": 20},
                    {"subaccount": "ACCT_pwwualwty4nhq9d", "share": 30}
                ],
                "bearer_type": "all-proportional"
            })
        );
    }

    #[test]
    fn update_split_can_deactivate() {
        let body = UpdateSplit {
            active: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"active": false}));
    }
}
