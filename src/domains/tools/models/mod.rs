//! Typed response models of the Account API.
//!
//! Responses are decoded into these records before being shown to the
//! client, so only documented fields are displayed. Every field is optional
//! because the API omits fields freely; absent fields are not re-emitted.

pub mod account;
pub mod common;
pub mod policies;
pub mod sales_tax;

pub use account::*;
pub use common::*;
pub use policies::*;
pub use sales_tax::*;
