//! Custom policy operations (product compliance and takeback policies).
//!
//! Custom policies are global since the DSA changes of April 2023; the
//! marketplace header is still accepted but ignored by the API.

use rmcp::model::JsonObject;

use crate::domains::tools::models::{CustomPolicy, CustomPolicyResponse};
use crate::domains::tools::operation::{Method, Operation, ParamKind, ParamSpec, pretty};

pub const MARKETPLACE_HEADER: &str = "X-EBAY-C-MARKETPLACE-ID";

const MARKETPLACE: &str = "eBay marketplace of the custom policy, e.g. EBAY_DE. Ignored by the API since custom policies became global.";
const POLICY_ID: &str = "Unique identifier of the custom policy, assigned on creation.";
const NAME: &str = "Seller-defined policy name, visible only to the seller. Max length: 65.";
const LABEL: &str = "Customer-facing label shown on View Item pages. Max length: 65.";
const DESCRIPTION: &str = "Details of the policy terms. Max length: 15,000.";

pub static GET_CUSTOM_POLICIES: Operation = Operation {
    name: "get_custom_policy",
    description: "List the seller's custom policies, optionally filtered by type (PRODUCT_COMPLIANCE, TAKE_BACK).",
    method: Method::Get,
    path: "/custom_policy/",
    params: &[
        ParamSpec::query(
            "policy_types",
            "Comma-separated policy types to return. All types are returned when omitted.",
        ),
        ParamSpec::header(MARKETPLACE_HEADER, MARKETPLACE),
    ],
    response: pretty::<CustomPolicyResponse>,
};

pub static GET_CUSTOM_POLICY: Operation = Operation {
    name: "get_custom_policy_custom_policy_id",
    description: "Retrieve a custom policy by its ID.",
    method: Method::Get,
    path: "/custom_policy/{custom_policy_id}",
    params: &[
        ParamSpec::path("custom_policy_id", POLICY_ID),
        ParamSpec::header(MARKETPLACE_HEADER, MARKETPLACE),
    ],
    response: pretty::<CustomPolicy>,
};

pub static CREATE_CUSTOM_POLICY: Operation = Operation {
    name: "post_custom_policy",
    description: "Create a custom policy. The ID of the new policy is returned in the Location header.",
    method: Method::Post,
    path: "/custom_policy/",
    params: &[
        ParamSpec::header(MARKETPLACE_HEADER, MARKETPLACE),
        ParamSpec::body(
            "policyType",
            ParamKind::String,
            "Type of custom policy: PRODUCT_COMPLIANCE or TAKE_BACK.",
        )
        .required(),
        ParamSpec::body("name", ParamKind::String, NAME).required(),
        ParamSpec::body("label", ParamKind::String, LABEL).required(),
        ParamSpec::body("description", ParamKind::String, DESCRIPTION).required(),
    ],
    response: pretty::<JsonObject>,
};

pub static UPDATE_CUSTOM_POLICY: Operation = Operation {
    name: "put_custom_policy_custom_policy_id",
    description: "Update a custom policy. Name, label and description are all overwritten, so pass the current values of the fields that do not change. Returns 204 No Content on success.",
    method: Method::Put,
    path: "/custom_policy/{custom_policy_id}",
    params: &[
        ParamSpec::path("custom_policy_id", POLICY_ID),
        ParamSpec::header(MARKETPLACE_HEADER, MARKETPLACE),
        ParamSpec::body("name", ParamKind::String, NAME).required(),
        ParamSpec::body("label", ParamKind::String, LABEL).required(),
        ParamSpec::body("description", ParamKind::String, DESCRIPTION).required(),
    ],
    response: pretty::<JsonObject>,
};
