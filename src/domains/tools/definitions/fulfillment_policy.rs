//! Fulfillment policy operations.
//!
//! Fulfillment policies hold shipping options, handling time and the
//! regions a seller ships to.

use rmcp::model::JsonObject;

use crate::domains::tools::models::{
    FulfillmentPolicy, FulfillmentPolicyResponse, SetFulfillmentPolicyResponse,
};
use crate::domains::tools::operation::{Method, Operation, ParamKind, ParamSpec, pretty};

const POLICY_ID: &str = "Unique identifier of the fulfillment policy.";
const MARKETPLACE_ID: &str = "eBay marketplace of the policies, e.g. EBAY_US.";
const CATEGORY_TYPES: &str =
    "Category groups the policy applies to, e.g. [{\"name\": \"ALL_EXCLUDING_MOTORS_VEHICLES\"}].";
const DESCRIPTION: &str = "Seller-facing description of the policy. Max length: 250.";
const FREIGHT_SHIPPING: &str = "Whether the seller offers freight shipping for large items.";
const GLOBAL_SHIPPING: &str = "Whether the eBay Global Shipping Program is used for international shipments.";
const HANDLING_TIME: &str =
    "Maximum business days before the item ships, e.g. {\"unit\": \"DAY\", \"value\": 1}.";
const LOCAL_PICKUP: &str = "Whether local pickup is offered.";
const BODY_MARKETPLACE_ID: &str = "eBay marketplace the policy applies to, e.g. EBAY_US.";
const NAME: &str = "Seller-defined policy name, unique per marketplace. Max length: 64.";
const PICKUP_DROP_OFF: &str = "Whether Click and Collect is available for items using the policy.";
const SHIPPING_OPTIONS: &str =
    "Domestic and international shipping options, each with a cost type and shipping services.";
const SHIP_TO_LOCATIONS: &str = "Regions included in and excluded from shipping (regionIncluded, regionExcluded).";

pub static GET_FULFILLMENT_POLICIES: Operation = Operation {
    name: "get_fulfillment_policy",
    description: "Retrieve all fulfillment policies configured for a marketplace.",
    method: Method::Get,
    path: "/fulfillment_policy",
    params: &[ParamSpec::query("marketplace_id", MARKETPLACE_ID).required()],
    response: pretty::<FulfillmentPolicyResponse>,
};

pub static GET_FULFILLMENT_POLICY: Operation = Operation {
    name: "get_fulfillment_policy_fulfillmentPolicyId",
    description: "Retrieve the complete details of a fulfillment policy by its ID.",
    method: Method::Get,
    path: "/fulfillment_policy/{fulfillmentPolicyId}",
    params: &[ParamSpec::path("fulfillmentPolicyId", POLICY_ID)],
    response: pretty::<FulfillmentPolicy>,
};

pub static GET_FULFILLMENT_POLICY_BY_NAME: Operation = Operation {
    name: "get_fulfillment_policy_get_by_policy_name",
    description: "Retrieve a fulfillment policy by its name on a marketplace.",
    method: Method::Get,
    path: "/fulfillment_policy/get_by_policy_name",
    params: &[
        ParamSpec::query("marketplace_id", MARKETPLACE_ID).required(),
        ParamSpec::query("name", "Name of the fulfillment policy to retrieve.").required(),
    ],
    response: pretty::<FulfillmentPolicy>,
};

pub static CREATE_FULFILLMENT_POLICY: Operation = Operation {
    name: "post_fulfillment_policy",
    description: "Create a new fulfillment policy. Returns the new policy, including its ID.",
    method: Method::Post,
    path: "/fulfillment_policy/",
    params: &[
        ParamSpec::body("categoryTypes", ParamKind::Array, CATEGORY_TYPES).required(),
        ParamSpec::body("description", ParamKind::String, DESCRIPTION),
        ParamSpec::body("freightShipping", ParamKind::Boolean, FREIGHT_SHIPPING),
        ParamSpec::body("globalShipping", ParamKind::Boolean, GLOBAL_SHIPPING),
        ParamSpec::body("handlingTime", ParamKind::Object, HANDLING_TIME),
        ParamSpec::body("localPickup", ParamKind::Boolean, LOCAL_PICKUP),
        ParamSpec::body("marketplaceId", ParamKind::String, BODY_MARKETPLACE_ID).required(),
        ParamSpec::body("name", ParamKind::String, NAME).required(),
        ParamSpec::body("pickupDropOff", ParamKind::Boolean, PICKUP_DROP_OFF),
        ParamSpec::body("shippingOptions", ParamKind::Array, SHIPPING_OPTIONS),
        ParamSpec::body("shipToLocations", ParamKind::Object, SHIP_TO_LOCATIONS),
    ],
    response: pretty::<SetFulfillmentPolicyResponse>,
};

pub static UPDATE_FULFILLMENT_POLICY: Operation = Operation {
    name: "put_fulfillment_policy_fulfillmentPolicyId",
    description: "Replace an existing fulfillment policy. The whole policy is overwritten, so pass every field that should be kept.",
    method: Method::Put,
    path: "/fulfillment_policy/{fulfillmentPolicyId}",
    params: &[
        ParamSpec::path("fulfillmentPolicyId", POLICY_ID),
        ParamSpec::body("categoryTypes", ParamKind::Array, CATEGORY_TYPES).required(),
        ParamSpec::body("description", ParamKind::String, DESCRIPTION),
        ParamSpec::body("freightShipping", ParamKind::Boolean, FREIGHT_SHIPPING),
        ParamSpec::body("globalShipping", ParamKind::Boolean, GLOBAL_SHIPPING),
        ParamSpec::body("handlingTime", ParamKind::Object, HANDLING_TIME),
        ParamSpec::body("localPickup", ParamKind::Boolean, LOCAL_PICKUP),
        ParamSpec::body("marketplaceId", ParamKind::String, BODY_MARKETPLACE_ID).required(),
        ParamSpec::body("name", ParamKind::String, NAME).required(),
        ParamSpec::body("pickupDropOff", ParamKind::Boolean, PICKUP_DROP_OFF),
        ParamSpec::body("shippingOptions", ParamKind::Array, SHIPPING_OPTIONS),
        ParamSpec::body("shipToLocations", ParamKind::Object, SHIP_TO_LOCATIONS),
    ],
    response: pretty::<SetFulfillmentPolicyResponse>,
};

pub static DELETE_FULFILLMENT_POLICY: Operation = Operation {
    name: "delete_fulfillment_policy_fulfillmentPolicyId",
    description: "Delete a fulfillment policy. The policy must not be in use by any listing.",
    method: Method::Delete,
    path: "/fulfillment_policy/{fulfillmentPolicyId}",
    params: &[ParamSpec::path("fulfillmentPolicyId", POLICY_ID)],
    response: pretty::<JsonObject>,
};
