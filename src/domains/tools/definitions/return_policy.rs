//! Return policy operations.

use rmcp::model::JsonObject;

use crate::domains::tools::models::{ReturnPolicy, ReturnPolicyResponse, SetReturnPolicyResponse};
use crate::domains::tools::operation::{Method, Operation, ParamKind, ParamSpec, pretty};

const POLICY_ID: &str = "Unique identifier of the return policy.";
const MARKETPLACE_ID: &str = "eBay marketplace of the policies, e.g. EBAY_US.";
const CATEGORY_TYPES: &str =
    "Category groups the policy applies to, e.g. [{\"name\": \"ALL_EXCLUDING_MOTORS_VEHICLES\"}].";
const DESCRIPTION: &str = "Seller-facing description of the policy. Max length: 250.";
const EXTENDED_HOLIDAY: &str = "Deprecated holiday returns flag.";
const INTERNATIONAL_OVERRIDE: &str =
    "Separate return terms for international buyers (returnsAccepted, returnPeriod, returnMethod, returnShippingCostPayer).";
const BODY_MARKETPLACE_ID: &str = "eBay marketplace the policy applies to, e.g. EBAY_US.";
const NAME: &str = "Seller-defined policy name, unique per marketplace. Max length: 64.";
const REFUND_METHOD: &str = "How refunds are issued: MONEY_BACK or MERCHANDISE_CREDIT.";
const RESTOCKING_FEE: &str = "Deprecated restocking fee percentage.";
const RETURN_INSTRUCTIONS: &str = "Free-text return instructions shown to buyers (where supported).";
const RETURN_METHOD: &str = "Return method offered besides a refund, e.g. REPLACEMENT.";
const RETURN_PERIOD: &str =
    "Time the buyer has to start a return, e.g. {\"unit\": \"DAY\", \"value\": 30}.";
const RETURNS_ACCEPTED: &str = "Whether the seller accepts returns.";
const COST_PAYER: &str = "Who pays return shipping: BUYER or SELLER.";

pub static GET_RETURN_POLICIES: Operation = Operation {
    name: "get_return_policy",
    description: "Retrieve all return policies configured for a marketplace.",
    method: Method::Get,
    path: "/return_policy",
    params: &[ParamSpec::query("marketplace_id", MARKETPLACE_ID).required()],
    response: pretty::<ReturnPolicyResponse>,
};

pub static GET_RETURN_POLICY: Operation = Operation {
    name: "get_return_policy_return_policy_id",
    description: "Retrieve the complete details of a return policy by its ID.",
    method: Method::Get,
    path: "/return_policy/{return_policy_id}",
    params: &[ParamSpec::path("return_policy_id", POLICY_ID)],
    response: pretty::<ReturnPolicy>,
};

pub static GET_RETURN_POLICY_BY_NAME: Operation = Operation {
    name: "get_return_policy_get_by_policy_name",
    description: "Retrieve a return policy by its name on a marketplace.",
    method: Method::Get,
    path: "/return_policy/get_by_policy_name",
    params: &[
        ParamSpec::query("marketplace_id", MARKETPLACE_ID).required(),
        ParamSpec::query("name", "Name of the return policy to retrieve.").required(),
    ],
    response: pretty::<ReturnPolicy>,
};

pub static CREATE_RETURN_POLICY: Operation = Operation {
    name: "post_return_policy",
    description: "Create a new return policy. Returns the new policy, including its ID.",
    method: Method::Post,
    path: "/return_policy",
    params: &[
        ParamSpec::body("categoryTypes", ParamKind::Array, CATEGORY_TYPES).required(),
        ParamSpec::body("description", ParamKind::String, DESCRIPTION),
        ParamSpec::body("extendedHolidayReturnsOffered", ParamKind::Boolean, EXTENDED_HOLIDAY),
        ParamSpec::body("internationalOverride", ParamKind::Object, INTERNATIONAL_OVERRIDE),
        ParamSpec::body("marketplaceId", ParamKind::String, BODY_MARKETPLACE_ID).required(),
        ParamSpec::body("name", ParamKind::String, NAME).required(),
        ParamSpec::body("refundMethod", ParamKind::String, REFUND_METHOD),
        ParamSpec::body("restockingFeePercentage", ParamKind::String, RESTOCKING_FEE),
        ParamSpec::body("returnInstructions", ParamKind::String, RETURN_INSTRUCTIONS),
        ParamSpec::body("returnMethod", ParamKind::String, RETURN_METHOD),
        ParamSpec::body("returnPeriod", ParamKind::Object, RETURN_PERIOD),
        ParamSpec::body("returnsAccepted", ParamKind::Boolean, RETURNS_ACCEPTED),
        ParamSpec::body("returnShippingCostPayer", ParamKind::String, COST_PAYER),
    ],
    response: pretty::<SetReturnPolicyResponse>,
};

pub static UPDATE_RETURN_POLICY: Operation = Operation {
    name: "put_return_policy_return_policy_id",
    description: "Replace an existing return policy. The whole policy is overwritten, so pass every field that should be kept.",
    method: Method::Put,
    path: "/return_policy/{return_policy_id}",
    params: &[
        ParamSpec::path("return_policy_id", POLICY_ID),
        ParamSpec::body("categoryTypes", ParamKind::Array, CATEGORY_TYPES).required(),
        ParamSpec::body("description", ParamKind::String, DESCRIPTION),
        ParamSpec::body("extendedHolidayReturnsOffered", ParamKind::Boolean, EXTENDED_HOLIDAY),
        ParamSpec::body("internationalOverride", ParamKind::Object, INTERNATIONAL_OVERRIDE),
        ParamSpec::body("marketplaceId", ParamKind::String, BODY_MARKETPLACE_ID).required(),
        ParamSpec::body("name", ParamKind::String, NAME).required(),
        ParamSpec::body("refundMethod", ParamKind::String, REFUND_METHOD),
        ParamSpec::body("restockingFeePercentage", ParamKind::String, RESTOCKING_FEE),
        ParamSpec::body("returnInstructions", ParamKind::String, RETURN_INSTRUCTIONS),
        ParamSpec::body("returnMethod", ParamKind::String, RETURN_METHOD),
        ParamSpec::body("returnPeriod", ParamKind::Object, RETURN_PERIOD),
        ParamSpec::body("returnsAccepted", ParamKind::Boolean, RETURNS_ACCEPTED),
        ParamSpec::body("returnShippingCostPayer", ParamKind::String, COST_PAYER),
    ],
    response: pretty::<SetReturnPolicyResponse>,
};

pub static DELETE_RETURN_POLICY: Operation = Operation {
    name: "delete_return_policy_return_policy_id",
    description: "Delete a return policy. The policy must not be in use by any listing.",
    method: Method::Delete,
    path: "/return_policy/{return_policy_id}",
    params: &[ParamSpec::path("return_policy_id", POLICY_ID)],
    response: pretty::<JsonObject>,
};
