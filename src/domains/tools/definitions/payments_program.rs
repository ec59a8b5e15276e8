//! Payments program status operations.
//!
//! Every seller account is now enabled for managed payments, so these
//! operations only report historical status.

use crate::domains::tools::models::{PaymentsProgramOnboardingResponse, PaymentsProgramResponse};
use crate::domains::tools::operation::{Method, Operation, ParamSpec, pretty};

const MARKETPLACE_ID: &str = "eBay marketplace of the payments program, e.g. EBAY_US.";
const PROGRAM_TYPE: &str = "Payments program type. Only EBAY_PAYMENTS is supported.";

pub static GET_PAYMENTS_PROGRAM: Operation = Operation {
    name: "get_payments_program_marketplace_id_payments_program_type",
    description: "Get the seller's status in a payments program on a marketplace.",
    method: Method::Get,
    path: "/payments_program/{marketplace_id}/{payments_program_type}",
    params: &[
        ParamSpec::path("marketplace_id", MARKETPLACE_ID),
        ParamSpec::path("payments_program_type", PROGRAM_TYPE),
    ],
    response: pretty::<PaymentsProgramResponse>,
};

pub static GET_PAYMENTS_PROGRAM_ONBOARDING: Operation = Operation {
    name: "get_payments_program_marketplace_id_payments_program_type_onboarding",
    description: "Get the seller's onboarding status and steps for a payments program.",
    method: Method::Get,
    path: "/payments_program/{marketplace_id}/{payments_program_type}/onboarding",
    params: &[
        ParamSpec::path("marketplace_id", MARKETPLACE_ID),
        ParamSpec::path("payments_program_type", PROGRAM_TYPE),
    ],
    response: pretty::<PaymentsProgramOnboardingResponse>,
};
