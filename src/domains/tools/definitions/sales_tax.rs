//! Sales-tax table operations.
//!
//! In most US states eBay now collects and remits sales tax itself, so the
//! table only matters for the remaining jurisdictions.

use rmcp::model::JsonObject;

use crate::domains::tools::models::{SalesTax, SalesTaxes};
use crate::domains::tools::operation::{Method, Operation, ParamKind, ParamSpec, pretty};

const COUNTRY_CODE: &str = "Two-letter ISO 3166 code of the country, e.g. US or CA.";
const JURISDICTION_ID: &str =
    "ID of the sales tax jurisdiction (state or province), as returned by getSalesTaxJurisdictions.";

pub static GET_SALES_TAX: Operation = Operation {
    name: "get_sales_tax_countryCode_jurisdictionId",
    description: "Get the sales tax table entry of one jurisdiction. Returns an empty response when no entry exists.",
    method: Method::Get,
    path: "/sales_tax/{countryCode}/{jurisdictionId}",
    params: &[
        ParamSpec::path("countryCode", COUNTRY_CODE),
        ParamSpec::path("jurisdictionId", JURISDICTION_ID),
    ],
    response: pretty::<SalesTax>,
};

pub static GET_SALES_TAXES: Operation = Operation {
    name: "get_sales_tax",
    description: "Get all sales tax table entries configured for a country.",
    method: Method::Get,
    path: "/sales_tax",
    params: &[ParamSpec::query("country_code", COUNTRY_CODE).required()],
    response: pretty::<SalesTaxes>,
};

pub static CREATE_OR_REPLACE_SALES_TAX: Operation = Operation {
    name: "put_sales_tax_countryCode_jurisdictionId",
    description: "Create or replace the sales tax table entry of a jurisdiction.",
    method: Method::Put,
    path: "/sales_tax/{countryCode}/{jurisdictionId}",
    params: &[
        ParamSpec::path("countryCode", COUNTRY_CODE),
        ParamSpec::path("jurisdictionId", JURISDICTION_ID),
        ParamSpec::body(
            "salesTaxPercentage",
            ParamKind::String,
            "Sales tax rate as a percentage string with up to three decimals, e.g. \"7.75\".",
        )
        .required(),
        ParamSpec::body(
            "shippingAndHandlingTaxed",
            ParamKind::Boolean,
            "Whether shipping and handling costs are taxed too.",
        ),
    ],
    response: pretty::<JsonObject>,
};

pub static DELETE_SALES_TAX: Operation = Operation {
    name: "delete_sales_tax_countryCode_jurisdictionId",
    description: "Delete the sales tax table entry of a jurisdiction.",
    method: Method::Delete,
    path: "/sales_tax/{countryCode}/{jurisdictionId}",
    params: &[
        ParamSpec::path("countryCode", COUNTRY_CODE),
        ParamSpec::path("jurisdictionId", JURISDICTION_ID),
    ],
    response: pretty::<JsonObject>,
};
