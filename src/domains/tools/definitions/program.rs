//! Seller program opt-in operations.

use rmcp::model::JsonObject;

use crate::domains::tools::models::Programs;
use crate::domains::tools::operation::{Method, Operation, ParamKind, ParamSpec, pretty};

const PROGRAM_TYPE: &str =
    "Seller program, e.g. SELLING_POLICY_MANAGEMENT, OUT_OF_STOCK_CONTROL or PARTNER_MOTORS_DEALER.";

pub static GET_OPTED_IN_PROGRAMS: Operation = Operation {
    name: "get_program_get_opted_in_programs",
    description: "List the seller programs the account is opted in to.",
    method: Method::Get,
    path: "/program/get_opted_in_programs",
    params: &[],
    response: pretty::<Programs>,
};

pub static OPT_IN_TO_PROGRAM: Operation = Operation {
    name: "post_program_opt_in",
    description: "Opt the seller in to a program. Opt-in can take up to 24 hours to be processed.",
    method: Method::Post,
    path: "/program/opt_in",
    params: &[ParamSpec::body("programType", ParamKind::String, PROGRAM_TYPE).required()],
    response: pretty::<JsonObject>,
};

pub static OPT_OUT_OF_PROGRAM: Operation = Operation {
    name: "post_program_opt_out",
    description: "Opt the seller out of a program they are currently opted in to.",
    method: Method::Post,
    path: "/program/opt_out",
    params: &[ParamSpec::body("programType", ParamKind::String, PROGRAM_TYPE).required()],
    response: pretty::<JsonObject>,
};
