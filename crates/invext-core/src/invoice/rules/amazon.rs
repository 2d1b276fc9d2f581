//! Amazon (and unknown-vendor) invoice layout.

use super::patterns::*;
use super::product::amazon_product_name;
use super::refine::{address, amazon_seller, currency, date, percent, trimmed, verbatim};
use super::{Candidate, FieldRule, RuleSet};
use crate::models::record::Field;

pub(super) fn rule_set() -> RuleSet {
    RuleSet::new(
        "amazon",
        vec![
            FieldRule::first_match(
                Field::OrderNumber,
                vec![
                    Candidate::new(&AMAZON_ORDER_NUMBER, trimmed),
                    Candidate::new(&AMAZON_ORDER_ID, trimmed),
                    Candidate::new(&AMAZON_ORDER_LABEL, trimmed),
                ],
            ),
            FieldRule::single(Field::InvoiceNumber, &AMAZON_INVOICE_NUMBER, trimmed),
            FieldRule::single(Field::OrderDate, &ORDER_DATE, date),
            FieldRule::single(Field::InvoiceDate, &INVOICE_DATE, date),
            FieldRule::custom(Field::ProductName, amazon_product_name),
            FieldRule::single(Field::HsnCode, &HSN_CODE, trimmed),
            // Positional "₹<unit> <qty> ₹<net>" columns
            FieldRule::single(Field::UnitPrice, &AMAZON_UNIT_PRICE, currency),
            FieldRule::single(Field::Quantity, &AMAZON_QUANTITY, verbatim),
            FieldRule::first_match(
                Field::NetAmount,
                vec![Candidate::new(&AMAZON_ITEM_ROW, currency).with_group(2)],
            ),
            FieldRule::single(Field::TaxRate, &AMAZON_TAX_RATE, percent),
            FieldRule::single(Field::TaxAmount, &AMAZON_TAX_AMOUNT, currency),
            FieldRule::first_match(
                Field::TotalAmount,
                vec![Candidate::new(&AMAZON_TAX_COLUMNS, currency).with_group(2)],
            ),
            FieldRule::single(Field::ShippingCharges, &AMAZON_SHIPPING_CHARGES, currency),
            FieldRule::first_match(
                Field::GrandTotal,
                vec![
                    Candidate::new(&AMAZON_TOTAL_LABEL, currency),
                    Candidate::new(&AMAZON_INVOICE_VALUE, currency),
                    Candidate::new(&AMAZON_GRAND_TOTAL, currency),
                ],
            ),
            FieldRule::single(Field::PaymentMode, &AMAZON_PAYMENT_MODE, trimmed),
            FieldRule::single(Field::SellerName, &AMAZON_SELLER, amazon_seller),
            FieldRule::single(Field::SellerGst, &AMAZON_GST, trimmed),
            FieldRule::single(Field::BillingAddress, &AMAZON_BILLING_ADDRESS, address),
            FieldRule::single(Field::ShippingAddress, &AMAZON_SHIPPING_ADDRESS, address),
        ],
    )
}
