//! Flipkart invoice layout.

use super::patterns::*;
use super::product::flipkart_product_name;
use super::refine::{
    address, currency, date, flipkart_seller, nonzero_currency, percent, trimmed, verbatim,
};
use super::{Candidate, FieldRule, RuleSet};
use crate::models::record::Field;

pub(super) fn rule_set() -> RuleSet {
    RuleSet::new(
        "flipkart",
        vec![
            FieldRule::single(Field::OrderNumber, &FLIPKART_ORDER_ID, trimmed),
            FieldRule::first_match(
                Field::InvoiceNumber,
                vec![
                    Candidate::new(&FLIPKART_INVOICE_NUMBER, trimmed),
                    Candidate::new(&FLIPKART_INVOICE_HASH, trimmed),
                ],
            ),
            FieldRule::single(Field::OrderDate, &ORDER_DATE, date),
            FieldRule::single(Field::InvoiceDate, &INVOICE_DATE, date),
            FieldRule::first_match(
                Field::ProductName,
                vec![
                    Candidate::new(&FLIPKART_PRODUCT_TABLE, flipkart_product_name),
                    Candidate::new(&FLIPKART_DESCRIPTION_TABLE, flipkart_product_name),
                    Candidate::new(&FLIPKART_PRODUCT_BEFORE_HSN, flipkart_product_name),
                    Candidate::new(&FLIPKART_ORDERED_THROUGH, flipkart_product_name),
                ],
            ),
            FieldRule::single(Field::HsnCode, &HSN_CODE, trimmed),
            FieldRule::single(Field::Quantity, &FLIPKART_QUANTITY, verbatim),
            FieldRule::single(Field::UnitPrice, &FLIPKART_GROSS_AMOUNT, currency),
            FieldRule::single(Field::NetAmount, &FLIPKART_TAXABLE_VALUE, currency),
            FieldRule::single(Field::TaxRate, &FLIPKART_TAX_RATE, percent),
            FieldRule::single(Field::TaxAmount, &FLIPKART_TAX_AMOUNT, currency),
            FieldRule::first_match(
                Field::GrandTotal,
                vec![
                    Candidate::new(&FLIPKART_TOTAL, currency),
                    Candidate::new(&FLIPKART_GRAND_TOTAL, currency),
                ],
            ),
            FieldRule::first_match(
                Field::ShippingCharges,
                vec![
                    Candidate::new(&FLIPKART_SHIPPING_CHARGES, nonzero_currency),
                    Candidate::new(&FLIPKART_DELIVERY_CHARGES, nonzero_currency),
                ],
            ),
            FieldRule::single(Field::SellerName, &FLIPKART_SELLER, flipkart_seller),
            FieldRule::first_match(
                Field::SellerGst,
                vec![
                    Candidate::new(&FLIPKART_GSTIN, trimmed),
                    Candidate::new(&FLIPKART_GST, trimmed),
                ],
            ),
            FieldRule::single(Field::BillingAddress, &FLIPKART_BILLING_ADDRESS, address),
            FieldRule::single(Field::ShippingAddress, &FLIPKART_SHIPPING_ADDRESS, address),
        ],
    )
}
