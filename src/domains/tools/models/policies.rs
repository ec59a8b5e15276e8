//! Business policy models (payment, fulfillment, return and custom policies).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Amount, CategoryType, ErrorDetail, Page, TimeDuration};

// ============================================================================
// Payment policies
// ============================================================================

/// Up-front deposit required for motor vehicle listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_in: Option<TimeDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_types: Option<Vec<CategoryType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<Deposit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_payment_due_in: Option<TimeDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immediate_pay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_policy_id: Option<String>,
}

/// Page of payment policies for a marketplace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPolicyResponse {
    #[serde(flatten)]
    pub page: Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_policies: Option<Vec<PaymentPolicy>>,
}

/// Result of creating or updating a payment policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPaymentPolicyResponse {
    #[serde(flatten)]
    pub policy: PaymentPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<ErrorDetail>>,
}

// ============================================================================
// Fulfillment policies
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_types: Option<Vec<CategoryType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freight_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling_time: Option<TimeDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_pickup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_drop_off: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_options: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_to_locations: Option<Value>,
}

/// Page of fulfillment policies for a marketplace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentPolicyResponse {
    #[serde(flatten)]
    pub page: Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_policies: Option<Vec<FulfillmentPolicy>>,
}

/// Result of creating or updating a fulfillment policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFulfillmentPolicyResponse {
    #[serde(flatten)]
    pub policy: FulfillmentPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<ErrorDetail>>,
}

// ============================================================================
// Return policies
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_types: Option<Vec<CategoryType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_holiday_returns_offered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international_override: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restocking_fee_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_period: Option<TimeDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns_accepted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_shipping_cost_payer: Option<String>,
}

/// Page of return policies for a marketplace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnPolicyResponse {
    #[serde(flatten)]
    pub page: Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_policies: Option<Vec<ReturnPolicy>>,
}

/// Result of creating or updating a return policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetReturnPolicyResponse {
    #[serde(flatten)]
    pub policy: ReturnPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<ErrorDetail>>,
}

// ============================================================================
// Custom policies
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
}

/// Custom policy as listed, without its description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactCustomPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPolicyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_policies: Option<Vec<CompactCustomPolicy>>,
    #[serde(flatten)]
    pub page: Page,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_response_flattens_policy_and_warnings() {
        let body = json!({
            "paymentPolicyId": "6196932000",
            "name": "Default payment",
            "immediatePay": true,
            "warnings": [{ "errorId": 20403, "message": "Deprecated field" }]
        });
        let parsed: SetPaymentPolicyResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(parsed.policy.payment_policy_id.as_deref(), Some("6196932000"));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), body);
    }

    #[test]
    fn test_list_response_keeps_paging_fields() {
        let body = json!({
            "customPolicies": [{ "customPolicyId": "1", "policyType": "TAKE_BACK" }],
            "total": 1,
            "limit": 20
        });
        let parsed: CustomPolicyResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(parsed.page.total, Some(1));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), body);
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let parsed: CustomPolicy =
            serde_json::from_value(json!({ "name": "A", "internalFlag": 1 })).unwrap();
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!({ "name": "A" }));
    }
}
