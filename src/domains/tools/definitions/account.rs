//! Account-level read operations: subscriptions, privileges, KYC checks,
//! rate tables and advertising eligibility.

use crate::domains::tools::models::{
    KycResponse, RateTableResponse, SellerEligibilityMultiProgramResponse, SellingPrivileges,
    SubscriptionResponse,
};
use crate::domains::tools::operation::{Method, Operation, ParamKind, ParamSpec, pretty};

pub static GET_SUBSCRIPTION: Operation = Operation {
    name: "get_subscription",
    description: "List the seller's subscriptions, such as eBay Store subscriptions.",
    method: Method::Get,
    path: "/subscription",
    params: &[
        ParamSpec::query("limit", "Maximum number of subscriptions per page.")
            .with_kind(ParamKind::Integer),
        ParamSpec::query(
            "continuation_token",
            "Token from a previous response to fetch the next page.",
        ),
    ],
    response: pretty::<SubscriptionResponse>,
};

pub static GET_PRIVILEGES: Operation = Operation {
    name: "get_privilege",
    description: "Get the seller's selling limits and whether registration is complete.",
    method: Method::Get,
    path: "/privilege",
    params: &[],
    response: pretty::<SellingPrivileges>,
};

pub static GET_KYC: Operation = Operation {
    name: "get_kyc",
    description: "List outstanding KYC (know your customer) checks for a managed-payments seller.",
    method: Method::Get,
    path: "/kyc",
    params: &[],
    response: pretty::<KycResponse>,
};

pub static GET_RATE_TABLES: Operation = Operation {
    name: "get_rate_table",
    description: "List the seller's shipping rate tables, optionally for one country.",
    method: Method::Get,
    path: "/rate_table",
    params: &[ParamSpec::query(
        "country_code",
        "Two-letter ISO 3166 country code. All rate tables are returned when omitted.",
    )],
    response: pretty::<RateTableResponse>,
};

pub static GET_ADVERTISING_ELIGIBILITY: Operation = Operation {
    name: "get_advertising_eligibility",
    description: "Check whether the seller is eligible for eBay advertising programs on a marketplace.",
    method: Method::Get,
    path: "/advertising_eligibility",
    params: &[
        ParamSpec::query(
            "program_types",
            "Comma-separated advertising programs to check, e.g. OFFSITE_ADS. All programs when omitted.",
        ),
        ParamSpec::header(
            "X-EBAY-C-MARKETPLACE-ID",
            "eBay marketplace to check eligibility on, e.g. EBAY_US.",
        )
        .required(),
    ],
    response: pretty::<SellerEligibilityMultiProgramResponse>,
};
