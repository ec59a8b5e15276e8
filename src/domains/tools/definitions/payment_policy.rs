//! Payment policy operations.
//!
//! Payment policies describe how buyers pay for items: accepted methods,
//! immediate payment, deposits and payment due dates.

use rmcp::model::JsonObject;

use crate::domains::tools::models::{PaymentPolicy, PaymentPolicyResponse, SetPaymentPolicyResponse};
use crate::domains::tools::operation::{Method, Operation, ParamKind, ParamSpec, pretty};

const POLICY_ID: &str = "Unique identifier of the payment policy.";
const MARKETPLACE_ID: &str = "eBay marketplace of the policies, e.g. EBAY_US.";
const CATEGORY_TYPES: &str =
    "Category groups the policy applies to, e.g. [{\"name\": \"ALL_EXCLUDING_MOTORS_VEHICLES\"}].";
const DEPOSIT: &str = "Deposit required for motor vehicle listings (amount, dueIn, paymentMethods).";
const DESCRIPTION: &str = "Seller-facing description of the policy. Max length: 250.";
const FULL_PAYMENT_DUE_IN: &str =
    "Time the buyer has to pay the balance of a motor vehicle purchase, e.g. {\"unit\": \"DAY\", \"value\": 7}.";
const IMMEDIATE_PAY: &str = "Whether the buyer must pay immediately at checkout.";
const BODY_MARKETPLACE_ID: &str = "eBay marketplace the policy applies to, e.g. EBAY_US.";
const NAME: &str = "Seller-defined policy name, unique per marketplace. Max length: 64.";
const PAYMENT_INSTRUCTIONS: &str = "Deprecated free-text payment instructions.";
const PAYMENT_METHODS: &str = "Offline payment methods accepted for motor vehicles and in-person pickup.";

pub static GET_PAYMENT_POLICIES: Operation = Operation {
    name: "get_payment_policy",
    description: "Retrieve all payment policies configured for a marketplace.",
    method: Method::Get,
    path: "/payment_policy",
    params: &[ParamSpec::query("marketplace_id", MARKETPLACE_ID).required()],
    response: pretty::<PaymentPolicyResponse>,
};

pub static GET_PAYMENT_POLICY: Operation = Operation {
    name: "get_payment_policy_payment_policy_id",
    description: "Retrieve the complete details of a payment policy by its ID.",
    method: Method::Get,
    path: "/payment_policy/{payment_policy_id}",
    params: &[ParamSpec::path("payment_policy_id", POLICY_ID)],
    response: pretty::<PaymentPolicy>,
};

pub static GET_PAYMENT_POLICY_BY_NAME: Operation = Operation {
    name: "get_payment_policy_get_by_policy_name",
    description: "Retrieve a payment policy by its name on a marketplace.",
    method: Method::Get,
    path: "/payment_policy/get_by_policy_name",
    params: &[
        ParamSpec::query("marketplace_id", MARKETPLACE_ID).required(),
        ParamSpec::query("name", "Name of the payment policy to retrieve.").required(),
    ],
    response: pretty::<PaymentPolicy>,
};

pub static CREATE_PAYMENT_POLICY: Operation = Operation {
    name: "post_payment_policy",
    description: "Create a new payment policy. Returns the new policy, including its ID.",
    method: Method::Post,
    path: "/payment_policy",
    params: &[
        ParamSpec::body("categoryTypes", ParamKind::Array, CATEGORY_TYPES).required(),
        ParamSpec::body("deposit", ParamKind::Object, DEPOSIT),
        ParamSpec::body("description", ParamKind::String, DESCRIPTION),
        ParamSpec::body("fullPaymentDueIn", ParamKind::Object, FULL_PAYMENT_DUE_IN),
        ParamSpec::body("immediatePay", ParamKind::Boolean, IMMEDIATE_PAY),
        ParamSpec::body("marketplaceId", ParamKind::String, BODY_MARKETPLACE_ID).required(),
        ParamSpec::body("name", ParamKind::String, NAME).required(),
        ParamSpec::body("paymentInstructions", ParamKind::String, PAYMENT_INSTRUCTIONS),
        ParamSpec::body("paymentMethods", ParamKind::Array, PAYMENT_METHODS),
    ],
    response: pretty::<SetPaymentPolicyResponse>,
};

pub static UPDATE_PAYMENT_POLICY: Operation = Operation {
    name: "put_payment_policy_payment_policy_id",
    description: "Replace an existing payment policy. The whole policy is overwritten, so pass every field that should be kept.",
    method: Method::Put,
    path: "/payment_policy/{payment_policy_id}",
    params: &[
        ParamSpec::path("payment_policy_id", POLICY_ID),
        ParamSpec::body("categoryTypes", ParamKind::Array, CATEGORY_TYPES).required(),
        ParamSpec::body("deposit", ParamKind::Object, DEPOSIT),
        ParamSpec::body("description", ParamKind::String, DESCRIPTION),
        ParamSpec::body("fullPaymentDueIn", ParamKind::Object, FULL_PAYMENT_DUE_IN),
        ParamSpec::body("immediatePay", ParamKind::Boolean, IMMEDIATE_PAY),
        ParamSpec::body("marketplaceId", ParamKind::String, BODY_MARKETPLACE_ID).required(),
        ParamSpec::body("name", ParamKind::String, NAME).required(),
        ParamSpec::body("paymentInstructions", ParamKind::String, PAYMENT_INSTRUCTIONS),
        ParamSpec::body("paymentMethods", ParamKind::Array, PAYMENT_METHODS),
    ],
    response: pretty::<SetPaymentPolicyResponse>,
};

pub static DELETE_PAYMENT_POLICY: Operation = Operation {
    name: "delete_payment_policy_payment_policy_id",
    description: "Delete a payment policy. The policy must not be in use by any listing.",
    method: Method::Delete,
    path: "/payment_policy/{payment_policy_id}",
    params: &[ParamSpec::path("payment_policy_id", POLICY_ID)],
    response: pretty::<JsonObject>,
};
