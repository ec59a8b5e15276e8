//! Tool definitions module.
//!
//! One static [`Operation`] per Account API operation, grouped by API
//! resource. [`OPERATIONS`] lists them in registration order.

pub mod account;
pub mod custom_policy;
pub mod fulfillment_policy;
pub mod payment_policy;
pub mod payments_program;
pub mod program;
pub mod return_policy;
pub mod sales_tax;

use super::operation::Operation;

/// Every exposed operation, in the order tools are listed.
pub static OPERATIONS: &[&Operation] = &[
    &program::OPT_OUT_OF_PROGRAM,
    &program::GET_OPTED_IN_PROGRAMS,
    &account::GET_SUBSCRIPTION,
    &payment_policy::GET_PAYMENT_POLICY_BY_NAME,
    &account::GET_ADVERTISING_ELIGIBILITY,
    &payment_policy::DELETE_PAYMENT_POLICY,
    &payment_policy::GET_PAYMENT_POLICY,
    &payment_policy::UPDATE_PAYMENT_POLICY,
    &fulfillment_policy::GET_FULFILLMENT_POLICIES,
    &payment_policy::GET_PAYMENT_POLICIES,
    &payment_policy::CREATE_PAYMENT_POLICY,
    &sales_tax::DELETE_SALES_TAX,
    &sales_tax::GET_SALES_TAX,
    &sales_tax::CREATE_OR_REPLACE_SALES_TAX,
    &custom_policy::GET_CUSTOM_POLICIES,
    &custom_policy::CREATE_CUSTOM_POLICY,
    &payments_program::GET_PAYMENTS_PROGRAM,
    &fulfillment_policy::DELETE_FULFILLMENT_POLICY,
    &fulfillment_policy::GET_FULFILLMENT_POLICY,
    &fulfillment_policy::UPDATE_FULFILLMENT_POLICY,
    &return_policy::GET_RETURN_POLICIES,
    &return_policy::CREATE_RETURN_POLICY,
    &return_policy::DELETE_RETURN_POLICY,
    &return_policy::GET_RETURN_POLICY,
    &return_policy::UPDATE_RETURN_POLICY,
    &fulfillment_policy::GET_FULFILLMENT_POLICY_BY_NAME,
    &account::GET_RATE_TABLES,
    &account::GET_KYC,
    &payments_program::GET_PAYMENTS_PROGRAM_ONBOARDING,
    &account::GET_PRIVILEGES,
    &custom_policy::GET_CUSTOM_POLICY,
    &custom_policy::UPDATE_CUSTOM_POLICY,
    &fulfillment_policy::CREATE_FULFILLMENT_POLICY,
    &program::OPT_IN_TO_PROGRAM,
    &return_policy::GET_RETURN_POLICY_BY_NAME,
    &sales_tax::GET_SALES_TAXES,
];
