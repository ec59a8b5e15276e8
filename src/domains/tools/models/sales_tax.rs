//! Sales-tax table models.

use serde::{Deserialize, Serialize};

/// One sales-tax table entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTax {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_and_handling_taxed: Option<bool>,
}

/// All sales-tax entries of a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTaxes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_taxes: Option<Vec<SalesTax>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::operation::pretty;

    #[test]
    fn test_sales_tax_keeps_only_present_fields() {
        let out = pretty::<SalesTax>(
            br#"{"salesTaxPercentage":"7.75","shippingAndHandlingTaxed":true}"#,
        )
        .unwrap();
        assert_eq!(
            out,
            "{\n  \"salesTaxPercentage\": \"7.75\",\n  \"shippingAndHandlingTaxed\": true\n}"
        );
    }

    #[test]
    fn test_sales_tax_rejects_wrong_types() {
        assert!(pretty::<SalesTax>(br#"{"shippingAndHandlingTaxed":"yes"}"#).is_err());
    }
}
